use crate::{
    context::AppContext, error::AppError, query::Query, query_handler::QueryHandler,
    service::ClassroomService,
};
use async_trait::async_trait;
use classroom_domain::persist::{ClassRecord, GoalRecord};
use classroom_domain::{Class, ClassId, Goal};
use tracing::debug;

#[derive(Debug, Clone)]
pub struct GetClass {
    pub class_id: ClassId,
}

impl Query for GetClass {
    const NAME: &'static str = "GetClass";
    type Dto = ClassRecord;
}

#[derive(Debug, Clone, Default)]
pub struct ListClasses;

impl Query for ListClasses {
    const NAME: &'static str = "ListClasses";
    type Dto = Vec<ClassRecord>;
}

/// 课程目标列表，按插入顺序
#[derive(Debug, Clone)]
pub struct ListGoals {
    pub class_id: ClassId,
}

impl Query for ListGoals {
    const NAME: &'static str = "ListGoals";
    type Dto = Vec<GoalRecord>;
}

#[async_trait]
impl QueryHandler<GetClass> for ClassroomService {
    async fn handle(&self, ctx: &AppContext, q: GetClass) -> Result<ClassRecord, AppError> {
        let class = self.load_class(&q.class_id).await?;
        debug!(
            query = GetClass::NAME,
            correlation_id = ctx.correlation_id(),
            class_id = %q.class_id
        );
        Ok(class.to_record())
    }
}

#[async_trait]
impl QueryHandler<ListClasses> for ClassroomService {
    async fn handle(
        &self,
        ctx: &AppContext,
        _q: ListClasses,
    ) -> Result<Vec<ClassRecord>, AppError> {
        let classes = self.repo.list().await?;
        debug!(
            query = ListClasses::NAME,
            correlation_id = ctx.correlation_id(),
            count = classes.len()
        );
        Ok(classes.iter().map(Class::to_record).collect())
    }
}

#[async_trait]
impl QueryHandler<ListGoals> for ClassroomService {
    async fn handle(&self, ctx: &AppContext, q: ListGoals) -> Result<Vec<GoalRecord>, AppError> {
        let class = self.load_class(&q.class_id).await?;
        debug!(
            query = ListGoals::NAME,
            correlation_id = ctx.correlation_id(),
            class_id = %q.class_id,
            count = class.goals().len()
        );
        Ok(class.goals().iter().map(Goal::to_record).collect())
    }
}
