//! 课程目标应用层（classroom-application）
//!
//! 以命令/查询的形式暴露课程、目标、选课与学生目录用例：
//! - 命令与查询的抽象及进程内总线（`command*`、`query*`、`inmemory_*_bus`）
//! - 用例处理器（`commands`、`queries`），统一实现在 [`ClassroomService`] 上
//! - 按课程与学生串行化的写锁（`locks`）、配置（`config`）与错误映射（`error`）
//! - 进程内仓储与学生目录（`infra`）
//!
pub mod command;
pub mod command_bus;
pub mod command_handler;
pub mod commands;
pub mod config;
pub mod context;
pub mod dto;
pub mod error;
pub mod infra;
pub mod inmemory_command_bus;
pub mod inmemory_query_bus;
pub mod locks;
pub mod queries;
pub mod query;
pub mod query_bus;
pub mod query_handler;
pub mod service;

pub use config::ClassroomConfig;
pub use error::AppError;
pub use inmemory_command_bus::InMemoryCommandBus;
pub use inmemory_query_bus::InMemoryQueryBus;
pub use service::{Classroom, ClassroomService};
