//! 写用例：命令定义及其在 [`ClassroomService`](crate::service::ClassroomService) 上的处理器
mod class;
mod enrollment;
mod goal;
mod student;

pub use class::{CreateClass, DeleteClass, UpdateClass};
pub use enrollment::{EnrollStudent, RecordEvaluation, UnenrollStudent};
pub use goal::{AddGoal, CloneGoals, RemoveGoal, UpdateGoal};
pub use student::{RegisterStudent, RemoveStudent, UpdateStudent};
