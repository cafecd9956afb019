//! 目标权重与描述校验
//!
//! 纯函数、无状态，由新增/修改目标的调用方显式调用；实体构造与 setter 不会自动触发。
//! 总权重只在新增/修改的那一刻检查：通过直接操作已超过 100 的既有目标集合
//! 不会被追溯拒绝。
//!
use crate::{
    error::{DomainError, DomainResult},
    goal::Goal,
};

pub const MIN_WEIGHT: f64 = 0.0;
pub const MAX_WEIGHT: f64 = 100.0;

// 浮点累加误差容忍度：33.3 + 33.3 + 33.4 不应被判定为超出
const TOTAL_TOLERANCE: f64 = 1e-9;

/// 单个权重须为 `[0, 100]` 内的有限数
pub fn validate_weight(weight: f64) -> DomainResult<()> {
    if !weight.is_finite() || !(MIN_WEIGHT..=MAX_WEIGHT).contains(&weight) {
        return Err(DomainError::validation(
            "Goal weight must be between 0 and 100",
        ));
    }
    Ok(())
}

pub fn validate_description(description: &str) -> DomainResult<()> {
    if description.trim().is_empty() {
        return Err(DomainError::validation("Goal description cannot be empty"));
    }
    Ok(())
}

pub fn total_weight<'a>(goals: impl IntoIterator<Item = &'a Goal>) -> f64 {
    goals.into_iter().map(Goal::weight).sum()
}

/// 既有目标权重之和加上候选权重不得超过 100
pub fn validate_total_weight<'a>(
    goals: impl IntoIterator<Item = &'a Goal>,
    new_weight: Option<f64>,
) -> DomainResult<()> {
    let total = total_weight(goals) + new_weight.unwrap_or(0.0);
    if total > MAX_WEIGHT + TOTAL_TOLERANCE {
        return Err(DomainError::validation(format!(
            "Total weight ({total}%) exceeds 100%"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goals(weights: &[f64]) -> Vec<Goal> {
        weights
            .iter()
            .enumerate()
            .map(|(i, w)| Goal::new(format!("goal-{i}"), *w))
            .collect()
    }

    #[test]
    fn weight_range_is_inclusive() {
        assert!(validate_weight(0.0).is_ok());
        assert!(validate_weight(100.0).is_ok());
        assert!(validate_weight(-0.5).is_err());
        assert!(validate_weight(100.01).is_err());
    }

    #[test]
    fn non_finite_weights_are_rejected() {
        assert!(validate_weight(f64::NAN).is_err());
        assert!(validate_weight(f64::INFINITY).is_err());
    }

    #[test]
    fn blank_descriptions_are_rejected() {
        assert!(validate_description("Exercises").is_ok());
        let err = validate_description("   \t").unwrap_err();
        assert_eq!(err.reason(), "Goal description cannot be empty");
        assert!(validate_description("").is_err());
    }

    #[test]
    fn total_above_one_hundred_fails() {
        let existing = goals(&[30.0, 70.0]);
        let err = validate_total_weight(&existing, Some(10.0)).unwrap_err();
        match err {
            DomainError::Validation { reason } => {
                assert_eq!(reason, "Total weight (110%) exceeds 100%")
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn total_of_exactly_one_hundred_passes() {
        let existing = goals(&[30.0]);
        assert!(validate_total_weight(&existing, Some(70.0)).is_ok());
        assert!(validate_total_weight(&goals(&[33.3, 33.3]), Some(33.4)).is_ok());
    }

    #[test]
    fn missing_candidate_checks_existing_only() {
        assert!(validate_total_weight(&goals(&[]), None).is_ok());
        assert!(validate_total_weight(&goals(&[60.0, 50.0]), None).is_err());
        assert_eq!(total_weight(&goals(&[10.0, 15.5])), 25.5);
    }
}
