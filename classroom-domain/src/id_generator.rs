//! 标识生成（IdGenerator）
//!
//! 目标标识在创建与克隆时生成。生产环境使用随机 UUID v4；
//! 测试可注入确定性的顺序生成器，以便断言具体标识。
//!
use crate::goal::GoalId;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// 目标标识生成能力
pub trait IdGenerator: Send + Sync {
    /// 生成一个新的、从未使用过的目标标识
    fn next_goal_id(&self) -> GoalId;
}

/// 默认生成器：随机 UUID v4
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidV4Generator;

impl IdGenerator for UuidV4Generator {
    fn next_goal_id(&self) -> GoalId {
        GoalId::new(Uuid::new_v4().to_string())
    }
}

/// 顺序生成器：第 n 次调用返回数值为 `start + n` 的 UUID 字符串
///
/// ```
/// use classroom_domain::id_generator::{IdGenerator, SequentialIdGenerator};
///
/// let ids = SequentialIdGenerator::new();
/// assert_eq!(
///     ids.next_goal_id().to_string(),
///     "00000000-0000-0000-0000-000000000001"
/// );
/// ```
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: AtomicU64,
}

impl SequentialIdGenerator {
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_goal_id(&self) -> GoalId {
        let n = self.next.fetch_add(1, Ordering::SeqCst);
        GoalId::new(Uuid::from_u128(u128::from(n)).to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn uuid_generator_never_repeats() {
        let ids: HashSet<GoalId> = (0..256).map(|_| UuidV4Generator.next_goal_id()).collect();
        assert_eq!(ids.len(), 256);
    }

    #[test]
    fn sequential_generator_is_deterministic() {
        let ids = SequentialIdGenerator::starting_at(41);
        assert_eq!(
            ids.next_goal_id().to_string(),
            "00000000-0000-0000-0000-000000000029"
        );
        assert_eq!(
            ids.next_goal_id().to_string(),
            "00000000-0000-0000-0000-00000000002a"
        );
    }
}
