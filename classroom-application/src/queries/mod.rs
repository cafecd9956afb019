//! 只读用例
mod class;
mod student;

pub use class::{GetClass, ListClasses, ListGoals};
pub use student::{GetStudent, ListStudents};
