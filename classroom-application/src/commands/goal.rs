use crate::{
    command::Command, command_handler::CommandHandler, context::AppContext, dto::CloneGoalsDto,
    error::AppError, service::ClassroomService,
};
use async_trait::async_trait;
use bon::Builder;
use classroom_domain::persist::GoalRecord;
use classroom_domain::weight_validator::{
    validate_description, validate_total_weight, validate_weight,
};
use classroom_domain::{ClassId, DomainError, Goal, GoalId, GoalPatch};
use tracing::{debug, info, warn};

/// 为课程新增目标
#[derive(Debug, Clone, Builder)]
pub struct AddGoal {
    pub class_id: ClassId,
    #[builder(into)]
    pub description: String,
    pub weight: f64,
}

impl Command for AddGoal {
    const NAME: &'static str = "AddGoal";
    type Output = GoalRecord;
}

/// 部分更新目标，未出现在补丁中的字段保持不变
#[derive(Debug, Clone, Builder)]
pub struct UpdateGoal {
    pub class_id: ClassId,
    pub goal_id: GoalId,
    pub patch: GoalPatch,
}

impl Command for UpdateGoal {
    const NAME: &'static str = "UpdateGoal";
    type Output = GoalRecord;
}

#[derive(Debug, Clone)]
pub struct RemoveGoal {
    pub class_id: ClassId,
    pub goal_id: GoalId,
}

impl Command for RemoveGoal {
    const NAME: &'static str = "RemoveGoal";
    type Output = ();
}

/// 把源课程的全部目标复制到目标课程
#[derive(Debug, Clone)]
pub struct CloneGoals {
    pub source_class_id: ClassId,
    pub destination_class_id: ClassId,
}

impl Command for CloneGoals {
    const NAME: &'static str = "CloneGoals";
    type Output = CloneGoalsDto;
}

#[async_trait]
impl CommandHandler<AddGoal> for ClassroomService {
    async fn handle(&self, ctx: &AppContext, cmd: AddGoal) -> Result<GoalRecord, AppError> {
        validate_description(&cmd.description)?;
        validate_weight(cmd.weight)?;

        let _guard = self.locks.lock(&cmd.class_id).await;
        let mut class = self.load_class(&cmd.class_id).await?;
        if self.config.goals.enforce_total_weight {
            validate_total_weight(class.goals(), Some(cmd.weight))?;
        }

        let goal = Goal::new_with(self.ids.as_ref(), cmd.description, cmd.weight);
        let record = class.add_goal(goal).to_record();
        self.repo.save(&class).await?;

        info!(
            command = AddGoal::NAME,
            correlation_id = ctx.correlation_id(),
            class_id = %cmd.class_id,
            goal_id = %record.id,
            weight = record.weight,
            "goal added"
        );
        Ok(record)
    }
}

#[async_trait]
impl CommandHandler<UpdateGoal> for ClassroomService {
    async fn handle(&self, ctx: &AppContext, cmd: UpdateGoal) -> Result<GoalRecord, AppError> {
        if let Some(description) = cmd.patch.description() {
            validate_description(description)?;
        }
        if let Some(weight) = cmd.patch.weight() {
            validate_weight(weight)?;
        }

        let _guard = self.locks.lock(&cmd.class_id).await;
        let mut class = self.load_class(&cmd.class_id).await?;
        if class.find_goal(&cmd.goal_id).is_none() {
            return Err(DomainError::not_found("Goal not found").into());
        }
        if let Some(weight) = cmd.patch.weight() {
            if self.config.goals.enforce_total_weight {
                // 总权重按“其余目标 + 新权重”计算
                let others = class.goals().iter().filter(|g| g.id() != &cmd.goal_id);
                validate_total_weight(others, Some(weight))?;
            }
        }

        let record = class.update_goal(&cmd.goal_id, cmd.patch)?.to_record();
        self.repo.save(&class).await?;

        info!(
            command = UpdateGoal::NAME,
            correlation_id = ctx.correlation_id(),
            class_id = %cmd.class_id,
            goal_id = %cmd.goal_id,
            "goal updated"
        );
        Ok(record)
    }
}

#[async_trait]
impl CommandHandler<RemoveGoal> for ClassroomService {
    async fn handle(&self, ctx: &AppContext, cmd: RemoveGoal) -> Result<(), AppError> {
        let _guard = self.locks.lock(&cmd.class_id).await;
        let mut class = self.load_class(&cmd.class_id).await?;
        if !class.remove_goal(&cmd.goal_id) {
            return Err(DomainError::not_found("Goal not found").into());
        }
        self.repo.save(&class).await?;

        info!(
            command = RemoveGoal::NAME,
            correlation_id = ctx.correlation_id(),
            class_id = %cmd.class_id,
            goal_id = %cmd.goal_id,
            "goal removed"
        );
        Ok(())
    }
}

#[async_trait]
impl CommandHandler<CloneGoals> for ClassroomService {
    async fn handle(&self, ctx: &AppContext, cmd: CloneGoals) -> Result<CloneGoalsDto, AppError> {
        // 只写目标课程；源课程读取的是加载时刻的快照
        let _guard = self.locks.lock(&cmd.destination_class_id).await;
        let source = self
            .load_class_or(&cmd.source_class_id, "Source class not found")
            .await?;
        let mut destination = self
            .load_class_or(&cmd.destination_class_id, "Destination class not found")
            .await?;

        let clone_policy = &self.config.clone;
        if clone_policy.reject_non_empty_destination && !destination.goals().is_empty() {
            warn!(
                command = CloneGoals::NAME,
                correlation_id = ctx.correlation_id(),
                destination_class_id = %cmd.destination_class_id,
                existing_goals = destination.goals().len(),
                "destination already has goals"
            );
            return Err(DomainError::conflict("Destination class already has goals").into());
        }

        let copies = source.clone_goals_with(self.ids.as_ref());
        if clone_policy.validate_total_weight {
            validate_total_weight(destination.goals().iter().chain(&copies), None)?;
        }

        let cloned_goals_count = copies.len();
        for goal in copies {
            debug!(goal_id = %goal.id(), description = goal.description(), "attaching cloned goal");
            destination.add_goal(goal);
        }
        self.repo.save(&destination).await?;

        info!(
            command = CloneGoals::NAME,
            correlation_id = ctx.correlation_id(),
            source_class_id = %cmd.source_class_id,
            destination_class_id = %cmd.destination_class_id,
            cloned_goals_count,
            "goals cloned"
        );
        Ok(CloneGoalsDto {
            message: "Goals cloned successfully".to_string(),
            cloned_goals_count,
        })
    }
}
