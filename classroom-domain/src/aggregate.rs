//! 聚合（Aggregate）抽象
//!
//! 聚合根独占其内部实体集合：只有聚合根自身可以修改这些集合，
//! 跨聚合的协作（例如克隆目标）由调用方取回独立副本后再交给目标聚合写入。
//!
use crate::entity::Entity;

/// 聚合根接口
pub trait Aggregate: Entity + 'static {
    /// 聚合类型名称（持久化与日志中的稳定名称）
    const TYPE: &'static str;
}
