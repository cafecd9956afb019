//! 评价目标（Goal）
//!
//! 目标是课程内带权重的评价标准。目标实体本身不做任何校验（权重范围、描述非空
//! 均由 `weight_validator` 在调用方显式检查），只保证一点：两个不同的 `Goal`
//! 实例永远不会共享同一个标识。因此 `Goal` 不实现 `Clone`，复制目标的唯一途径是
//! 重新发放标识的 [`Goal::duplicate`]。
//!
use crate::{
    entity::Entity,
    error::DomainResult,
    id_generator::{IdGenerator, UuidV4Generator},
    persist::GoalRecord,
};
use bon::{Builder, bon};
use chrono::{DateTime, Utc};
use classroom_macros::entity_id;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// 目标标识
///
/// 新标识为 UUID v4 字符串；从外部数据读取时接受任意字符串。
#[entity_id]
pub struct GoalId(String);

impl GoalId {
    /// 使用默认生成器（UUID v4）发放新标识
    pub fn generate() -> Self {
        UuidV4Generator.next_goal_id()
    }
}

/// 评价目标实体
#[derive(Debug, PartialEq)]
pub struct Goal {
    id: GoalId,
    description: String,
    weight: f64,
    created_at: DateTime<Utc>,
}

#[bon]
impl Goal {
    /// 创建目标：未提供 `id` 时生成新标识，未提供 `created_at` 时取当前时间。
    ///
    /// ```
    /// use classroom_domain::goal::Goal;
    ///
    /// let goal = Goal::create().description("Exercises").weight(40.0).build();
    /// assert_eq!(goal.description(), "Exercises");
    /// assert_eq!(goal.weight(), 40.0);
    /// ```
    #[builder(finish_fn = build)]
    pub fn create(
        #[builder(into)] description: String,
        weight: f64,
        id: Option<GoalId>,
        created_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id: id.unwrap_or_else(GoalId::generate),
            description,
            weight,
            created_at: created_at.unwrap_or_else(Utc::now),
        }
    }
}

impl Goal {
    pub fn new(description: impl Into<String>, weight: f64) -> Self {
        Self::new_with(&UuidV4Generator, description, weight)
    }

    /// 使用注入的生成器创建目标
    pub fn new_with(ids: &dyn IdGenerator, description: impl Into<String>, weight: f64) -> Self {
        Self {
            id: ids.next_goal_id(),
            description: description.into(),
            weight,
            created_at: Utc::now(),
        }
    }

    pub fn id(&self) -> &GoalId {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    /// 复制目标：新标识，描述、权重与创建时间保持不变
    pub fn duplicate(&self) -> Self {
        self.duplicate_with(&UuidV4Generator)
    }

    pub fn duplicate_with(&self, ids: &dyn IdGenerator) -> Self {
        Self {
            id: ids.next_goal_id(),
            description: self.description.clone(),
            weight: self.weight,
            created_at: self.created_at,
        }
    }

    pub fn to_record(&self) -> GoalRecord {
        GoalRecord {
            id: self.id.clone(),
            description: self.description.clone(),
            weight: self.weight,
            created_at: self.created_at,
        }
    }

    pub fn from_record(record: GoalRecord) -> Self {
        Self {
            id: record.id,
            description: record.description,
            weight: record.weight,
            created_at: record.created_at,
        }
    }

    /// 序列化为 `{id, description, weight, createdAt}`
    pub fn to_json(&self) -> DomainResult<Value> {
        Ok(serde_json::to_value(self.to_record())?)
    }

    pub fn from_json(value: Value) -> DomainResult<Self> {
        let record: GoalRecord = serde_json::from_value(value)?;
        Ok(Self::from_record(record))
    }
}

impl Entity for Goal {
    const KIND: &'static str = "goal";
    type Id = GoalId;

    fn entity_id(&self) -> Self::Id {
        self.id.clone()
    }
}

/// 目标的部分更新：明确列出本次提供了哪些字段，未提供的字段保持不变
#[derive(Debug, Clone, Default, PartialEq, Builder, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalPatch {
    description: Option<String>,
    weight: Option<f64>,
}

impl GoalPatch {
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.weight.is_none()
    }

    pub(crate) fn apply(self, goal: &mut Goal) {
        if let Some(description) = self.description {
            goal.set_description(description);
        }
        if let Some(weight) = self.weight {
            goal.set_weight(weight);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id_generator::SequentialIdGenerator;
    use chrono::TimeZone;
    use std::collections::HashSet;
    use uuid::Uuid;

    fn at(rfc3339: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(rfc3339)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn create_generates_id_and_timestamp_when_omitted() {
        let before = Utc::now();
        let goal = Goal::create().description("Test description").weight(50.0).build();
        let after = Utc::now();

        let uuid = Uuid::parse_str(goal.id().value()).unwrap();
        assert_eq!(uuid.get_version_num(), 4);
        assert_eq!(goal.description(), "Test description");
        assert_eq!(goal.weight(), 50.0);
        assert!(goal.created_at() >= before && goal.created_at() <= after);
    }

    #[test]
    fn create_keeps_supplied_id_and_timestamp() {
        let id = GoalId::from("test-id-123".to_string());
        let created_at = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let goal = Goal::create()
            .description("Custom goal")
            .weight(75.0)
            .id(id.clone())
            .created_at(created_at)
            .build();

        assert_eq!(goal.id(), &id);
        assert_eq!(goal.created_at(), created_at);
    }

    #[test]
    fn constructor_does_not_validate() {
        assert_eq!(Goal::new("", 50.0).description(), "");
        assert_eq!(Goal::new("Negative weight", -10.0).weight(), -10.0);
        assert_eq!(Goal::new("Over 100 weight", 150.0).weight(), 150.0);
        assert_eq!(Goal::new("Zero", 0.0).weight(), 0.0);
    }

    #[test]
    fn setters_mutate_in_place() {
        let mut goal = Goal::new("Initial description", 50.0);
        let id = goal.id().clone();
        goal.set_description("Updated description");
        goal.set_weight(60.0);
        goal.set_weight(90.0);

        assert_eq!(goal.description(), "Updated description");
        assert_eq!(goal.weight(), 90.0);
        assert_eq!(goal.id(), &id);
    }

    #[test]
    fn duplicate_issues_new_id_and_preserves_fields() {
        let original = Goal::create()
            .description("Descrição de teste")
            .weight(30.0)
            .created_at(at("2024-06-15T10:30:00Z"))
            .build();
        let copy = original.duplicate();

        assert_ne!(copy.id(), original.id());
        assert_eq!(copy.description(), original.description());
        assert_eq!(copy.weight(), original.weight());
        assert_eq!(copy.created_at(), original.created_at());
    }

    #[test]
    fn duplicate_is_independent_from_original() {
        let original = Goal::new("Original description", 50.0);
        let mut copy = original.duplicate();
        copy.set_description("Modified description");
        copy.set_weight(75.0);

        assert_eq!(original.description(), "Original description");
        assert_eq!(original.weight(), 50.0);
    }

    #[test]
    fn every_duplicate_has_its_own_id() {
        let original = Goal::new("Original", 40.0);
        let ids: HashSet<GoalId> = std::iter::once(original.id().clone())
            .chain((0..3).map(|_| original.duplicate().id().clone()))
            .collect();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn duplicate_with_uses_injected_generator() {
        let ids = SequentialIdGenerator::starting_at(7);
        let original = Goal::new_with(&ids, "Theory", 60.0);
        let copy = original.duplicate_with(&ids);

        assert_eq!(original.id().to_string(), "00000000-0000-0000-0000-000000000007");
        assert_eq!(copy.id().to_string(), "00000000-0000-0000-0000-000000000008");
    }

    #[test]
    fn to_json_uses_camel_case_shape() {
        let id: GoalId = "6f1c2a4e-8d3b-4c5a-9e7f-0a1b2c3d4e5f".parse().unwrap();
        let goal = Goal::create()
            .description("Test goal")
            .weight(65.0)
            .id(id)
            .created_at(at("2025-03-20T15:45:30Z"))
            .build();

        let json = goal.to_json().unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "6f1c2a4e-8d3b-4c5a-9e7f-0a1b2c3d4e5f",
                "description": "Test goal",
                "weight": 65.0,
                "createdAt": "2025-03-20T15:45:30Z"
            })
        );
    }

    #[test]
    fn from_json_accepts_millisecond_timestamps() {
        let goal = Goal::from_json(serde_json::json!({
            "id": "6f1c2a4e-8d3b-4c5a-9e7f-0a1b2c3d4e5f",
            "description": "JSON goal",
            "weight": 80,
            "createdAt": "2025-02-15T08:00:00.000Z"
        }))
        .unwrap();

        assert_eq!(goal.id().to_string(), "6f1c2a4e-8d3b-4c5a-9e7f-0a1b2c3d4e5f");
        assert_eq!(goal.weight(), 80.0);
        assert_eq!(goal.created_at(), at("2025-02-15T08:00:00Z"));
    }

    #[test]
    fn from_json_without_timestamp_defaults_to_now() {
        let before = Utc::now();
        let goal = Goal::from_json(serde_json::json!({
            "id": "6f1c2a4e-8d3b-4c5a-9e7f-0a1b2c3d4e5f",
            "description": "No date goal",
            "weight": 45
        }))
        .unwrap();
        let after = Utc::now();

        assert!(goal.created_at() >= before && goal.created_at() <= after);
    }

    #[test]
    fn json_roundtrip_preserves_all_fields() {
        let original = Goal::new("Symmetric test", 55.5);
        let restored = Goal::from_json(original.to_json().unwrap()).unwrap();
        assert_eq!(restored, original);
    }

    #[test]
    fn from_json_keeps_non_uuid_id() {
        let goal = Goal::from_json(serde_json::json!({
            "id": "json-goal-id",
            "description": "Legacy id",
            "weight": 10
        }))
        .unwrap();
        assert_eq!(goal.id().value(), "json-goal-id");
        assert_eq!(goal.to_json().unwrap()["id"], "json-goal-id");
    }

    #[test]
    fn patch_applies_only_supplied_fields() {
        let mut goal = Goal::new("Keep me", 20.0);
        GoalPatch::builder().weight(35.0).build().apply(&mut goal);
        assert_eq!(goal.description(), "Keep me");
        assert_eq!(goal.weight(), 35.0);

        let patch = GoalPatch::default();
        assert!(patch.is_empty());
        patch.apply(&mut goal);
        assert_eq!(goal.weight(), 35.0);
    }

    #[test]
    fn patch_deserializes_missing_fields_as_absent() {
        let patch: GoalPatch = serde_json::from_value(serde_json::json!({ "weight": 10 })).unwrap();
        assert_eq!(patch.description(), None);
        assert_eq!(patch.weight(), Some(10.0));
    }
}
