//! 持久化协议（persist）
//!
//! - 序列化记录（`GoalRecord`/`ClassRecord`/`EnrollmentRecord`/`StudentRecord`）：
//!   聚合与 JSON 之间的稳定形状；
//! - 学生查询（`StudentLookup`）：从持久化形状重建选课时解析学生；
//! - 学生仓储（`StudentRepository`）：维护学生目录；
//! - 聚合仓储（`AggregateRepository`）：按自然键读写整个聚合。
//!
//! 具体存储后端由上层提供实现并注入。
//!
mod aggregate_repository;
mod records;
mod student_lookup;
mod student_repository;

pub use aggregate_repository::AggregateRepository;
pub use records::{ClassRecord, EnrollmentRecord, GoalRecord, StudentRecord};
pub use student_lookup::StudentLookup;
pub use student_repository::StudentRepository;
