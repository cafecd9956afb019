//! 课程目标领域层（classroom-domain）
//!
//! 以课程（`Class`）为聚合根，管理带权重的评价目标（`Goal`）与学生选课（`Enrollment`）：
//! - 目标实体与跨课程克隆（`goal`、`class`）
//! - 权重与描述校验（`weight_validator`），由调用方显式触发
//! - 学生身份值对象（`student`）与成绩评价（`enrollment`）
//! - 可注入的标识生成（`id_generator`）
//! - 序列化记录、学生查询与聚合仓储协议（`persist`）
//!
//! 领域层是同步、无副作用的：除了对所调用聚合的内存修改外不做任何 I/O，
//! 持久化与并发协调由上层（应用层）负责。
//!
pub mod aggregate;
pub mod class;
pub mod enrollment;
pub mod entity;
pub mod error;
pub mod goal;
pub mod id_generator;
pub mod persist;
pub mod student;
pub mod value_object;
pub mod weight_validator;

pub use class::{Class, ClassId};
pub use enrollment::{Enrollment, Evaluation, Grade};
pub use error::{DomainError, DomainResult};
pub use goal::{Goal, GoalId, GoalPatch};
pub use student::{Cpf, Email, Student};
