//! 课程聚合（Class）
//!
//! 课程是一门学科的一次开设（topic + year + semester），标识由该三元组推导，
//! 不存在独立的代理键。课程独占其目标序列（插入顺序有意义）与选课名单（按 CPF 唯一）。
//!
//! 目标克隆分为两步：
//! 1. 源课程 [`Class::clone_goals`] 产出一组全新的、未挂载到任何课程的目标；
//! 2. 调用方取得目标课程后逐个 [`Class::add_goal`]。
//!
//! 课程从不直接修改另一个课程；调用方可以在写入前检查或拒绝整组副本
//! （例如目标课程已有目标时拒绝克隆），该策略属于调用方而非 `clone_goals`。
//!
use crate::{
    aggregate::Aggregate,
    enrollment::{Enrollment, Grade},
    entity::Entity,
    error::{DomainError, DomainResult},
    goal::{Goal, GoalId, GoalPatch},
    id_generator::{IdGenerator, UuidV4Generator},
    persist::{ClassRecord, StudentLookup},
    student::{Cpf, Student},
};
use classroom_macros::entity_id;
use serde_json::Value;

/// 课程标识：`{topic}-{year}-{semester}`
#[entity_id]
pub struct ClassId(String);

impl ClassId {
    pub fn derive(topic: &str, year: u16, semester: u8) -> Self {
        Self(format!("{topic}-{year}-{semester}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// 课程名称不能为空白
pub fn validate_topic(topic: &str) -> DomainResult<()> {
    if topic.trim().is_empty() {
        return Err(DomainError::validation("Class topic cannot be empty"));
    }
    Ok(())
}

#[derive(Debug, PartialEq)]
pub struct Class {
    topic: String,
    semester: u8,
    year: u16,
    enrollments: Vec<Enrollment>,
    goals: Vec<Goal>,
}

impl Class {
    pub fn new(topic: impl Into<String>, semester: u8, year: u16) -> Self {
        Self {
            topic: topic.into(),
            semester,
            year,
            enrollments: Vec::new(),
            goals: Vec::new(),
        }
    }

    /// 以既有成员恢复课程；同一学生重复选课时报 `Conflict`
    pub fn restore(
        topic: impl Into<String>,
        semester: u8,
        year: u16,
        enrollments: Vec<Enrollment>,
        goals: Vec<Goal>,
    ) -> DomainResult<Self> {
        let mut class = Self::new(topic, semester, year);
        for enrollment in enrollments {
            class.ensure_not_enrolled(enrollment.student().cpf())?;
            class.enrollments.push(enrollment);
        }
        class.goals = goals;
        Ok(class)
    }

    pub fn id(&self) -> ClassId {
        ClassId::derive(&self.topic, self.year, self.semester)
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }

    pub fn semester(&self) -> u8 {
        self.semester
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    // 修改以下任一字段都会改变课程标识，由仓储负责换键
    pub fn set_topic(&mut self, topic: impl Into<String>) {
        self.topic = topic.into();
    }

    pub fn set_semester(&mut self, semester: u8) {
        self.semester = semester;
    }

    pub fn set_year(&mut self, year: u16) {
        self.year = year;
    }

    // ---- goals ----

    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// 追加一个已构造（已校验、已有标识）的目标，原样返回
    pub fn add_goal(&mut self, goal: Goal) -> &Goal {
        let index = self.goals.len();
        self.goals.push(goal);
        &self.goals[index]
    }

    pub fn find_goal(&self, goal_id: &GoalId) -> Option<&Goal> {
        self.goals.iter().find(|g| g.id() == goal_id)
    }

    /// 部分更新目标，仅应用补丁中出现的字段
    pub fn update_goal(&mut self, goal_id: &GoalId, patch: GoalPatch) -> DomainResult<&Goal> {
        let goal = self
            .goals
            .iter_mut()
            .find(|g| g.id() == goal_id)
            .ok_or_else(|| DomainError::not_found("Goal not found"))?;
        patch.apply(goal);
        Ok(&*goal)
    }

    /// 删除目标；不存在时返回 `false` 而非报错
    pub fn remove_goal(&mut self, goal_id: &GoalId) -> bool {
        match self.goals.iter().position(|g| g.id() == goal_id) {
            Some(index) => {
                self.goals.remove(index);
                true
            }
            None => false,
        }
    }

    /// 按原顺序复制全部目标，返回未挂载的新实例；源课程不变
    pub fn clone_goals(&self) -> Vec<Goal> {
        self.clone_goals_with(&UuidV4Generator)
    }

    pub fn clone_goals_with(&self, ids: &dyn IdGenerator) -> Vec<Goal> {
        self.goals.iter().map(|g| g.duplicate_with(ids)).collect()
    }

    // ---- enrollments ----

    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    pub fn enrolled_students(&self) -> Vec<Student> {
        self.enrollments
            .iter()
            .map(|e| e.student().clone())
            .collect()
    }

    pub fn find_enrollment(&self, cpf: &Cpf) -> Option<&Enrollment> {
        self.enrollments.iter().find(|e| e.student().cpf() == cpf)
    }

    pub fn add_enrollment(&mut self, student: Student) -> DomainResult<&Enrollment> {
        self.ensure_not_enrolled(student.cpf())?;
        let index = self.enrollments.len();
        self.enrollments.push(Enrollment::new(student));
        Ok(&self.enrollments[index])
    }

    pub fn remove_enrollment(&mut self, cpf: &Cpf) -> bool {
        match self
            .enrollments
            .iter()
            .position(|e| e.student().cpf() == cpf)
        {
            Some(index) => {
                self.enrollments.remove(index);
                true
            }
            None => false,
        }
    }

    /// 记录（`Some`）或清除（`None`）学生在某目标上的成绩
    pub fn record_evaluation(
        &mut self,
        cpf: &Cpf,
        goal: &str,
        grade: Option<Grade>,
    ) -> DomainResult<&Enrollment> {
        let enrollment = self
            .enrollments
            .iter_mut()
            .find(|e| e.student().cpf() == cpf)
            .ok_or_else(|| DomainError::not_found("Student is not enrolled in this class"))?;
        match grade {
            Some(grade) => enrollment.set_evaluation(goal, grade),
            None => {
                enrollment.remove_evaluation(goal);
            }
        }
        Ok(&*enrollment)
    }

    fn ensure_not_enrolled(&self, cpf: &Cpf) -> DomainResult<()> {
        if self.find_enrollment(cpf).is_some() {
            return Err(DomainError::conflict(
                "Student is already enrolled in this class",
            ));
        }
        Ok(())
    }

    // ---- serialization ----

    pub fn to_record(&self) -> ClassRecord {
        ClassRecord {
            id: self.id().to_string(),
            topic: self.topic.clone(),
            semester: self.semester,
            year: self.year,
            enrollments: self.enrollments.iter().map(Enrollment::to_record).collect(),
            goals: self.goals.iter().map(Goal::to_record).collect(),
        }
    }

    /// 从记录重建课程，选课中的学生通过 `students` 解析
    pub fn from_record(record: ClassRecord, students: &dyn StudentLookup) -> DomainResult<Self> {
        let mut enrollments = Vec::with_capacity(record.enrollments.len());
        for enrollment in record.enrollments {
            let raw = enrollment
                .cpf()
                .ok_or_else(|| DomainError::validation("Enrollment is missing the student CPF"))?;
            let cpf = Cpf::parse(raw)?;
            let student = students.find_student(&cpf).ok_or_else(|| {
                DomainError::not_found(format!("Student with CPF {raw} not found"))
            })?;
            enrollments.push(Enrollment::with_evaluations(student, enrollment.evaluations));
        }

        let goals = record.goals.into_iter().map(Goal::from_record).collect();

        Self::restore(
            record.topic,
            record.semester,
            record.year,
            enrollments,
            goals,
        )
    }

    pub fn to_json(&self) -> DomainResult<Value> {
        Ok(serde_json::to_value(self.to_record())?)
    }

    pub fn from_json(value: Value, students: &dyn StudentLookup) -> DomainResult<Self> {
        let record: ClassRecord = serde_json::from_value(value)?;
        Self::from_record(record, students)
    }
}

impl Entity for Class {
    const KIND: &'static str = "class";
    type Id = ClassId;

    fn entity_id(&self) -> Self::Id {
        self.id()
    }
}

impl Aggregate for Class {
    const TYPE: &'static str = "class";
}
