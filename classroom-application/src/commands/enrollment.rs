use crate::{
    command::Command, command_handler::CommandHandler, context::AppContext, error::AppError,
    service::ClassroomService,
};
use async_trait::async_trait;
use bon::Builder;
use classroom_domain::enrollment::validate_evaluation_goal;
use classroom_domain::persist::EnrollmentRecord;
use classroom_domain::{ClassId, Cpf, DomainError, Grade};
use tracing::info;

/// 学生选课；学生须已存在于学生目录，选课期间该学生不能被移除
#[derive(Debug, Clone)]
pub struct EnrollStudent {
    pub class_id: ClassId,
    pub cpf: Cpf,
}

impl Command for EnrollStudent {
    const NAME: &'static str = "EnrollStudent";
    type Output = EnrollmentRecord;
}

#[derive(Debug, Clone)]
pub struct UnenrollStudent {
    pub class_id: ClassId,
    pub cpf: Cpf,
}

impl Command for UnenrollStudent {
    const NAME: &'static str = "UnenrollStudent";
    type Output = ();
}

/// 记录成绩；`grade` 为空表示清除该目标上的成绩
#[derive(Debug, Clone, Builder)]
pub struct RecordEvaluation {
    pub class_id: ClassId,
    pub cpf: Cpf,
    #[builder(into)]
    pub goal: String,
    pub grade: Option<Grade>,
}

impl Command for RecordEvaluation {
    const NAME: &'static str = "RecordEvaluation";
    type Output = EnrollmentRecord;
}

#[async_trait]
impl CommandHandler<EnrollStudent> for ClassroomService {
    async fn handle(
        &self,
        ctx: &AppContext,
        cmd: EnrollStudent,
    ) -> Result<EnrollmentRecord, AppError> {
        let _student_guard = self.student_locks.lock(&cmd.cpf).await;
        let student = self.resolve_student(&cmd.cpf).await?;

        let _guard = self.locks.lock(&cmd.class_id).await;
        let mut class = self.load_class(&cmd.class_id).await?;
        let record = class.add_enrollment(student)?.to_record();
        self.repo.save(&class).await?;

        info!(
            command = EnrollStudent::NAME,
            correlation_id = ctx.correlation_id(),
            class_id = %cmd.class_id,
            cpf = %cmd.cpf,
            "student enrolled"
        );
        Ok(record)
    }
}

#[async_trait]
impl CommandHandler<UnenrollStudent> for ClassroomService {
    async fn handle(&self, ctx: &AppContext, cmd: UnenrollStudent) -> Result<(), AppError> {
        let _guard = self.locks.lock(&cmd.class_id).await;
        let mut class = self.load_class(&cmd.class_id).await?;
        if !class.remove_enrollment(&cmd.cpf) {
            return Err(DomainError::not_found("Student is not enrolled in this class").into());
        }
        self.repo.save(&class).await?;

        info!(
            command = UnenrollStudent::NAME,
            correlation_id = ctx.correlation_id(),
            class_id = %cmd.class_id,
            cpf = %cmd.cpf,
            "student unenrolled"
        );
        Ok(())
    }
}

#[async_trait]
impl CommandHandler<RecordEvaluation> for ClassroomService {
    async fn handle(
        &self,
        ctx: &AppContext,
        cmd: RecordEvaluation,
    ) -> Result<EnrollmentRecord, AppError> {
        validate_evaluation_goal(&cmd.goal)?;

        let _guard = self.locks.lock(&cmd.class_id).await;
        let mut class = self.load_class(&cmd.class_id).await?;
        let record = class
            .record_evaluation(&cmd.cpf, &cmd.goal, cmd.grade)?
            .to_record();
        self.repo.save(&class).await?;

        info!(
            command = RecordEvaluation::NAME,
            correlation_id = ctx.correlation_id(),
            class_id = %cmd.class_id,
            cpf = %cmd.cpf,
            goal = cmd.goal.as_str(),
            grade = cmd.grade.as_ref().map(Grade::as_str).unwrap_or("-"),
            "evaluation recorded"
        );
        Ok(record)
    }
}
