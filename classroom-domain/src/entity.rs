//! 实体（Entity）基础抽象
//!
//! 实体以标识而非属性值区分；标识可以是存储的（如目标的 UUID），
//! 也可以由自然键推导（如课程的 `topic-year-semester`）。
//!
use std::fmt::Display;

/// 具备唯一标识的实体抽象
pub trait Entity: Send + Sync {
    /// 实体种类名称，用于错误信息与日志
    const KIND: &'static str;

    /// 实体标识类型
    type Id: Clone + Display + PartialEq + Send + Sync + 'static;

    /// 获取实体标识（推导型标识每次调用重新计算）
    fn entity_id(&self) -> Self::Id;
}
