use classroom_domain::persist::{ClassRecord, EnrollmentRecord, GoalRecord, StudentRecord};
use serde::Serialize;

/// 数据传输对象（DTO）
///
/// - 作为应用层的输出载体，面向接口/外部系统序列化友好；
/// - 与领域模型解耦，避免将领域对象直接暴露到接口层。
pub trait Dto: Serialize + Send + Sync + 'static {}

impl Dto for ClassRecord {}
impl Dto for GoalRecord {}
impl Dto for EnrollmentRecord {}
impl Dto for StudentRecord {}
impl<T: Dto> Dto for Vec<T> {}
impl<T: Dto> Dto for Option<T> {}

/// 目标克隆结果 `{message, clonedGoalsCount}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CloneGoalsDto {
    pub message: String,
    pub cloned_goals_count: usize,
}

impl Dto for CloneGoalsDto {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clone_result_uses_camel_case() {
        let dto = CloneGoalsDto {
            message: "Goals cloned successfully".into(),
            cloned_goals_count: 2,
        };
        assert_eq!(
            serde_json::to_value(dto).unwrap(),
            serde_json::json!({ "message": "Goals cloned successfully", "clonedGoalsCount": 2 })
        );
    }
}
