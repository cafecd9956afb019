use crate::{
    context::AppContext, error::AppError, query::Query, query_handler::QueryHandler,
    service::ClassroomService,
};
use async_trait::async_trait;
use classroom_domain::persist::StudentRecord;
use classroom_domain::{Cpf, Student};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct GetStudent {
    pub cpf: Cpf,
}

impl Query for GetStudent {
    const NAME: &'static str = "GetStudent";
    type Dto = StudentRecord;
}

/// 学生目录，按 CPF 排序
#[derive(Debug, Clone, Default)]
pub struct ListStudents;

impl Query for ListStudents {
    const NAME: &'static str = "ListStudents";
    type Dto = Vec<StudentRecord>;
}

#[async_trait]
impl QueryHandler<GetStudent> for ClassroomService {
    async fn handle(&self, ctx: &AppContext, q: GetStudent) -> Result<StudentRecord, AppError> {
        let student = self.resolve_student(&q.cpf).await?;
        debug!(
            query = GetStudent::NAME,
            correlation_id = ctx.correlation_id(),
            cpf = %q.cpf
        );
        Ok(student.to_record())
    }
}

#[async_trait]
impl QueryHandler<ListStudents> for ClassroomService {
    async fn handle(
        &self,
        ctx: &AppContext,
        _q: ListStudents,
    ) -> Result<Vec<StudentRecord>, AppError> {
        let students = self.students.list().await?;
        debug!(
            query = ListStudents::NAME,
            correlation_id = ctx.correlation_id(),
            count = students.len()
        );
        Ok(students.iter().map(Student::to_record).collect())
    }
}
