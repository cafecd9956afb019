//! 课程应用服务
//!
//! [`ClassroomService`] 实现全部命令与查询处理器，处理器的实现按用例分布在
//! `commands`、`queries` 模块中。每个写操作遵循同一流程：
//! 校验输入 → 锁定课程 → 加载 → 领域操作 → 保存，任一步失败时不写入仓储。
//! 学生写操作另持学生锁；需要两把锁时先学生后课程。
//!
use crate::{
    commands::{
        AddGoal, CloneGoals, CreateClass, DeleteClass, EnrollStudent, RecordEvaluation,
        RegisterStudent, RemoveGoal, RemoveStudent, UnenrollStudent, UpdateClass, UpdateGoal,
        UpdateStudent,
    },
    config::ClassroomConfig,
    error::AppError,
    inmemory_command_bus::InMemoryCommandBus,
    inmemory_query_bus::InMemoryQueryBus,
    locks::{ClassLocks, StudentLocks},
    queries::{GetClass, GetStudent, ListClasses, ListGoals, ListStudents},
};
use bon::Builder;
use classroom_domain::id_generator::{IdGenerator, UuidV4Generator};
use classroom_domain::persist::{AggregateRepository, StudentRepository};
use classroom_domain::{Class, ClassId, Cpf, DomainError, Student};
use std::sync::Arc;

#[derive(Builder)]
pub struct ClassroomService {
    pub(crate) repo: Arc<dyn AggregateRepository<Class>>,
    pub(crate) students: Arc<dyn StudentRepository>,
    #[builder(default)]
    pub(crate) config: ClassroomConfig,
    #[builder(default = Arc::new(UuidV4Generator) as Arc<dyn IdGenerator>)]
    pub(crate) ids: Arc<dyn IdGenerator>,
    #[builder(skip)]
    pub(crate) locks: ClassLocks,
    #[builder(skip)]
    pub(crate) student_locks: StudentLocks,
}

impl ClassroomService {
    pub fn config(&self) -> &ClassroomConfig {
        &self.config
    }

    /// 将全部处理器注册到给定的命令/查询总线
    pub fn register(
        service: &Arc<Self>,
        commands: &InMemoryCommandBus,
        queries: &InMemoryQueryBus,
    ) -> Result<(), AppError> {
        commands.register::<CreateClass, _>(service.clone())?;
        commands.register::<UpdateClass, _>(service.clone())?;
        commands.register::<DeleteClass, _>(service.clone())?;
        commands.register::<AddGoal, _>(service.clone())?;
        commands.register::<UpdateGoal, _>(service.clone())?;
        commands.register::<RemoveGoal, _>(service.clone())?;
        commands.register::<CloneGoals, _>(service.clone())?;
        commands.register::<EnrollStudent, _>(service.clone())?;
        commands.register::<UnenrollStudent, _>(service.clone())?;
        commands.register::<RecordEvaluation, _>(service.clone())?;
        commands.register::<RegisterStudent, _>(service.clone())?;
        commands.register::<UpdateStudent, _>(service.clone())?;
        commands.register::<RemoveStudent, _>(service.clone())?;

        queries.register::<GetClass, _>(service.clone())?;
        queries.register::<ListClasses, _>(service.clone())?;
        queries.register::<ListGoals, _>(service.clone())?;
        queries.register::<GetStudent, _>(service.clone())?;
        queries.register::<ListStudents, _>(service.clone())?;
        Ok(())
    }

    pub(crate) async fn load_class(&self, id: &ClassId) -> Result<Class, AppError> {
        self.load_class_or(id, "Class not found").await
    }

    pub(crate) async fn load_class_or(
        &self,
        id: &ClassId,
        missing: &'static str,
    ) -> Result<Class, AppError> {
        self.repo
            .load(id)
            .await?
            .ok_or_else(|| AppError::from(DomainError::not_found(missing)))
    }

    pub(crate) async fn resolve_student(&self, cpf: &Cpf) -> Result<Student, AppError> {
        self.students
            .load(cpf)
            .await?
            .ok_or_else(|| AppError::from(DomainError::not_found("Student not found")))
    }
}

/// 组装好的进程内应用：服务与已注册处理器的两条总线
pub struct Classroom {
    pub service: Arc<ClassroomService>,
    pub commands: InMemoryCommandBus,
    pub queries: InMemoryQueryBus,
}

impl Classroom {
    pub fn new(service: ClassroomService) -> Result<Self, AppError> {
        let service = Arc::new(service);
        let commands = InMemoryCommandBus::new();
        let queries = InMemoryQueryBus::new();
        ClassroomService::register(&service, &commands, &queries)?;
        Ok(Self {
            service,
            commands,
            queries,
        })
    }
}
