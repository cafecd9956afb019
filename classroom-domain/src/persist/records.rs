use crate::enrollment::Evaluation;
use crate::goal::GoalId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 目标的序列化形状 `{id, description, weight, createdAt}`
///
/// 缺少 `id` 时发放新标识，缺少 `createdAt` 时取当前时间。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalRecord {
    #[serde(default = "GoalId::generate")]
    pub id: GoalId,
    pub description: String,
    pub weight: f64,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentRecord {
    #[serde(default)]
    pub name: String,
    pub cpf: String,
    #[serde(default)]
    pub email: String,
}

/// 选课的序列化形状
///
/// 输出 `{student, evaluations}`；读取时学生可以由 `studentCPF` 或 `student.cpf` 指定。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnrollmentRecord {
    #[serde(
        rename = "studentCPF",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub student_cpf: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub student: Option<StudentRecord>,
    #[serde(default)]
    pub evaluations: Vec<Evaluation>,
}

impl EnrollmentRecord {
    pub fn cpf(&self) -> Option<&str> {
        self.student_cpf
            .as_deref()
            .or_else(|| self.student.as_ref().map(|s| s.cpf.as_str()))
    }
}

/// 课程的序列化形状 `{id, topic, semester, year, enrollments, goals}`
///
/// `id` 由自然键推导，只输出不读取。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassRecord {
    #[serde(skip_deserializing)]
    pub id: String,
    pub topic: String,
    pub semester: u8,
    pub year: u16,
    #[serde(default)]
    pub enrollments: Vec<EnrollmentRecord>,
    #[serde(default)]
    pub goals: Vec<GoalRecord>,
}
