use crate::{
    command::Command, command_handler::CommandHandler, context::AppContext, error::AppError,
    service::ClassroomService,
};
use async_trait::async_trait;
use bon::Builder;
use classroom_domain::persist::StudentRecord;
use classroom_domain::{Cpf, DomainError, Student};
use tracing::{info, warn};

/// 登记学生；CPF 可带 `.`/`-`
#[derive(Debug, Clone, Builder)]
pub struct RegisterStudent {
    #[builder(into)]
    pub name: String,
    #[builder(into)]
    pub cpf: String,
    #[builder(into)]
    pub email: String,
}

impl Command for RegisterStudent {
    const NAME: &'static str = "RegisterStudent";
    type Output = StudentRecord;
}

/// 修改学生的姓名与邮箱，CPF 不可变
#[derive(Debug, Clone, Builder)]
pub struct UpdateStudent {
    pub cpf: Cpf,
    #[builder(into)]
    pub name: String,
    #[builder(into)]
    pub email: String,
}

impl Command for UpdateStudent {
    const NAME: &'static str = "UpdateStudent";
    type Output = StudentRecord;
}

/// 移除学生；仍有课程名单包含该学生时拒绝
#[derive(Debug, Clone)]
pub struct RemoveStudent {
    pub cpf: Cpf,
}

impl Command for RemoveStudent {
    const NAME: &'static str = "RemoveStudent";
    type Output = ();
}

fn any_blank(fields: &[&str]) -> bool {
    fields.iter().any(|f| f.trim().is_empty())
}

#[async_trait]
impl CommandHandler<RegisterStudent> for ClassroomService {
    async fn handle(
        &self,
        ctx: &AppContext,
        cmd: RegisterStudent,
    ) -> Result<StudentRecord, AppError> {
        if any_blank(&[cmd.name.as_str(), cmd.cpf.as_str(), cmd.email.as_str()]) {
            return Err(DomainError::validation("Name, CPF, and email are required").into());
        }
        let student = Student::new(cmd.name, &cmd.cpf, &cmd.email)?;

        let _guard = self.student_locks.lock(student.cpf()).await;
        if self.students.exists(student.cpf()).await? {
            return Err(DomainError::conflict("Student with this CPF already exists").into());
        }
        self.students.save(&student).await?;

        info!(
            command = RegisterStudent::NAME,
            correlation_id = ctx.correlation_id(),
            actor_id = ctx.actor_id(),
            cpf = %student.cpf(),
            "student registered"
        );
        Ok(student.to_record())
    }
}

#[async_trait]
impl CommandHandler<UpdateStudent> for ClassroomService {
    async fn handle(&self, ctx: &AppContext, cmd: UpdateStudent) -> Result<StudentRecord, AppError> {
        if any_blank(&[cmd.name.as_str(), cmd.email.as_str()]) {
            return Err(
                DomainError::validation("Name and email are required for update").into(),
            );
        }
        let updated = Student::new(cmd.name, cmd.cpf.as_str(), &cmd.email)?;

        let _guard = self.student_locks.lock(&cmd.cpf).await;
        self.resolve_student(&cmd.cpf).await?;
        self.students.save(&updated).await?;

        info!(
            command = UpdateStudent::NAME,
            correlation_id = ctx.correlation_id(),
            cpf = %cmd.cpf,
            "student updated"
        );
        Ok(updated.to_record())
    }
}

#[async_trait]
impl CommandHandler<RemoveStudent> for ClassroomService {
    async fn handle(&self, ctx: &AppContext, cmd: RemoveStudent) -> Result<(), AppError> {
        let _guard = self.student_locks.lock(&cmd.cpf).await;
        if !self.students.exists(&cmd.cpf).await? {
            return Err(DomainError::not_found("Student not found").into());
        }

        // 选课需先取学生锁，持锁期间名单不会新增该学生
        let enrolled_in: Vec<String> = self
            .repo
            .list()
            .await?
            .iter()
            .filter(|class| class.find_enrollment(&cmd.cpf).is_some())
            .map(|class| class.id().to_string())
            .collect();
        if !enrolled_in.is_empty() {
            warn!(
                command = RemoveStudent::NAME,
                correlation_id = ctx.correlation_id(),
                cpf = %cmd.cpf,
                classes = ?enrolled_in,
                "student is still enrolled"
            );
            return Err(
                DomainError::conflict("Student is enrolled in one or more classes").into(),
            );
        }
        self.students.delete(&cmd.cpf).await?;

        info!(
            command = RemoveStudent::NAME,
            correlation_id = ctx.correlation_id(),
            cpf = %cmd.cpf,
            "student removed"
        );
        Ok(())
    }
}
