//! 领域建模过程宏（classroom-macros）
//!
//! - `#[entity_id]`：为单字段 tuple struct 形式的实体标识补齐派生与转换；
//! - `#[value_object]`：为值对象补齐以值相等为准的派生集合。
//!
use proc_macro::TokenStream;

mod derive_utils;
mod entity_id;
mod value_object;

/// 实体标识宏，例如 `#[entity_id] pub struct GoalId(String);`
///
/// 参数：`#[entity_id(debug = false)]` 关闭 Debug 派生，便于自定义实现。
#[proc_macro_attribute]
pub fn entity_id(attr: TokenStream, item: TokenStream) -> TokenStream {
    entity_id::expand(attr, item)
}

/// 值对象宏，支持结构体（具名或 tuple）与枚举。
///
/// 参数：`#[value_object(debug = false, default = true)]`。
#[proc_macro_attribute]
pub fn value_object(attr: TokenStream, item: TokenStream) -> TokenStream {
    value_object::expand(attr, item)
}
