//! 选课（Enrollment）与评价（Evaluation）
//!
//! 一次选课把一名学生绑定到课程，并持有该学生按目标名称记录的成绩。
//! 成绩对领域层而言只是不透明的枚举值。
//!
use crate::{
    error::{DomainError, DomainResult},
    persist::EnrollmentRecord,
    student::Student,
};
use classroom_macros::value_object;
use std::{fmt, str::FromStr};

/// 成绩：MANA（未达成）、MPA（部分达成）、MA（达成）
#[value_object]
#[derive(Copy)]
#[serde(rename_all = "UPPERCASE")]
pub enum Grade {
    Mana,
    Mpa,
    Ma,
}

impl Grade {
    pub const ALL: [Grade; 3] = [Grade::Mana, Grade::Mpa, Grade::Ma];

    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::Mana => "MANA",
            Grade::Mpa => "MPA",
            Grade::Ma => "MA",
        }
    }
}

impl FromStr for Grade {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Grade::ALL
            .into_iter()
            .find(|g| g.as_str() == s)
            .ok_or_else(|| DomainError::validation("Invalid grade. Must be MANA, MPA, or MA"))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 某个目标（按名称）上的成绩
#[value_object]
pub struct Evaluation {
    goal: String,
    grade: Grade,
}

impl Evaluation {
    pub fn new(goal: impl Into<String>, grade: Grade) -> Self {
        Self {
            goal: goal.into(),
            grade,
        }
    }

    pub fn goal(&self) -> &str {
        &self.goal
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    student: Student,
    evaluations: Vec<Evaluation>,
}

impl Enrollment {
    pub fn new(student: Student) -> Self {
        Self {
            student,
            evaluations: Vec::new(),
        }
    }

    /// 以既有评价恢复选课；同一目标出现多次时保留最后一次
    pub fn with_evaluations(student: Student, evaluations: Vec<Evaluation>) -> Self {
        let mut enrollment = Self::new(student);
        for evaluation in evaluations {
            enrollment.set_evaluation(evaluation.goal, evaluation.grade);
        }
        enrollment
    }

    pub fn student(&self) -> &Student {
        &self.student
    }

    pub fn evaluations(&self) -> &[Evaluation] {
        &self.evaluations
    }

    pub fn grade_for(&self, goal: &str) -> Option<Grade> {
        self.evaluations
            .iter()
            .find(|e| e.goal == goal)
            .map(Evaluation::grade)
    }

    /// 新增或覆盖某目标上的成绩
    pub fn set_evaluation(&mut self, goal: impl Into<String>, grade: Grade) {
        let goal = goal.into();
        match self.evaluations.iter_mut().find(|e| e.goal == goal) {
            Some(existing) => existing.grade = grade,
            None => self.evaluations.push(Evaluation { goal, grade }),
        }
    }

    pub fn remove_evaluation(&mut self, goal: &str) -> bool {
        let before = self.evaluations.len();
        self.evaluations.retain(|e| e.goal != goal);
        self.evaluations.len() != before
    }

    pub fn to_record(&self) -> EnrollmentRecord {
        EnrollmentRecord {
            student_cpf: None,
            student: Some(self.student.to_record()),
            evaluations: self.evaluations.clone(),
        }
    }
}

/// 校验目标名称非空（用于记录成绩前）
pub fn validate_evaluation_goal(goal: &str) -> DomainResult<()> {
    if goal.trim().is_empty() {
        return Err(DomainError::validation("Goal is required"));
    }
    Ok(())
}
