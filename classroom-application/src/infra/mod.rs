//! 进程内基础设施实现：课程仓储与学生目录
mod inmemory_class_repository;
mod inmemory_student_directory;

pub use inmemory_class_repository::InMemoryClassRepository;
pub use inmemory_student_directory::InMemoryStudentDirectory;
