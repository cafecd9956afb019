use crate::{
    command::Command, command_handler::CommandHandler, context::AppContext, error::AppError,
    service::ClassroomService,
};
use async_trait::async_trait;
use bon::Builder;
use classroom_domain::class::validate_topic;
use classroom_domain::persist::ClassRecord;
use classroom_domain::{Class, ClassId, DomainError};
use tracing::{error, info, warn};

/// 开设课程
#[derive(Debug, Clone, Builder)]
pub struct CreateClass {
    #[builder(into)]
    pub topic: String,
    pub semester: u8,
    pub year: u16,
}

impl Command for CreateClass {
    const NAME: &'static str = "CreateClass";
    type Output = ClassRecord;
}

/// 修改课程的 topic/semester/year；标识随之改变
#[derive(Debug, Clone, Builder)]
pub struct UpdateClass {
    pub class_id: ClassId,
    #[builder(into)]
    pub topic: Option<String>,
    pub semester: Option<u8>,
    pub year: Option<u16>,
}

impl UpdateClass {
    fn apply(&self, class: &mut Class) -> Result<(), DomainError> {
        if let Some(topic) = &self.topic {
            validate_topic(topic)?;
            class.set_topic(topic.clone());
        }
        if let Some(semester) = self.semester {
            class.set_semester(semester);
        }
        if let Some(year) = self.year {
            class.set_year(year);
        }
        Ok(())
    }
}

impl Command for UpdateClass {
    const NAME: &'static str = "UpdateClass";
    type Output = ClassRecord;
}

#[derive(Debug, Clone)]
pub struct DeleteClass {
    pub class_id: ClassId,
}

impl Command for DeleteClass {
    const NAME: &'static str = "DeleteClass";
    type Output = ();
}

#[async_trait]
impl CommandHandler<CreateClass> for ClassroomService {
    async fn handle(&self, ctx: &AppContext, cmd: CreateClass) -> Result<ClassRecord, AppError> {
        validate_topic(&cmd.topic)?;
        let class = Class::new(cmd.topic, cmd.semester, cmd.year);
        let class_id = class.id();

        let _guard = self.locks.lock(&class_id).await;
        if self.repo.exists(&class_id).await? {
            warn!(
                command = CreateClass::NAME,
                correlation_id = ctx.correlation_id(),
                class_id = %class_id,
                "class already exists"
            );
            return Err(DomainError::conflict("Class already exists").into());
        }
        self.repo.save(&class).await?;

        info!(
            command = CreateClass::NAME,
            correlation_id = ctx.correlation_id(),
            actor_id = ctx.actor_id(),
            class_id = %class_id,
            "class created"
        );
        Ok(class.to_record())
    }
}

#[async_trait]
impl CommandHandler<UpdateClass> for ClassroomService {
    async fn handle(&self, ctx: &AppContext, cmd: UpdateClass) -> Result<ClassRecord, AppError> {
        // 课程在旧标识下存在时其自然键不变，因此新标识可以在加锁前算出
        let mut preview = self.load_class(&cmd.class_id).await?;
        cmd.apply(&mut preview)?;
        let new_id = preview.id();

        let _guards = self.locks.lock_all(&[&cmd.class_id, &new_id]).await;
        let mut class = self.load_class(&cmd.class_id).await?;
        let previous = (class.topic().to_string(), class.semester(), class.year());
        cmd.apply(&mut class)?;

        if new_id != cmd.class_id {
            if self.repo.exists(&new_id).await? {
                return Err(DomainError::conflict(
                    "A class with this topic, year and semester already exists",
                )
                .into());
            }
            // 先删旧键再写新键；写入失败时按旧键恢复，课程不会同时存在于两个标识下
            self.repo.delete(&cmd.class_id).await?;
            if let Err(err) = self.repo.save(&class).await {
                let (topic, semester, year) = previous;
                class.set_topic(topic);
                class.set_semester(semester);
                class.set_year(year);
                if let Err(restore_err) = self.repo.save(&class).await {
                    error!(
                        command = UpdateClass::NAME,
                        correlation_id = ctx.correlation_id(),
                        class_id = %cmd.class_id,
                        error = %restore_err,
                        "failed to restore class after re-key failure"
                    );
                }
                return Err(err.into());
            }
        } else {
            self.repo.save(&class).await?;
        }

        info!(
            command = UpdateClass::NAME,
            correlation_id = ctx.correlation_id(),
            class_id = %cmd.class_id,
            new_class_id = %new_id,
            "class updated"
        );
        Ok(class.to_record())
    }
}

#[async_trait]
impl CommandHandler<DeleteClass> for ClassroomService {
    async fn handle(&self, ctx: &AppContext, cmd: DeleteClass) -> Result<(), AppError> {
        let _guard = self.locks.lock(&cmd.class_id).await;
        if !self.repo.delete(&cmd.class_id).await? {
            return Err(DomainError::not_found("Class not found").into());
        }
        info!(
            command = DeleteClass::NAME,
            correlation_id = ctx.correlation_id(),
            class_id = %cmd.class_id,
            "class deleted"
        );
        Ok(())
    }
}
