//! 学生（Student）与身份值对象
//!
//! 学生记录由外部的学生目录维护，领域层只在选课时持有其副本，
//! 并以 CPF（巴西个人税号）作为选课名单的键。
//!
use crate::{
    error::{DomainError, DomainResult},
    persist::StudentRecord,
    value_object::ValueObject,
};
use classroom_macros::value_object;
use regex::Regex;
use std::{fmt, str::FromStr, sync::LazyLock};

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// CPF：内部仅保存 11 位数字，输入中的 `.` 与 `-` 会被去除
#[value_object]
#[serde(try_from = "String", into = "String")]
pub struct Cpf(String);

impl Cpf {
    /// 解析并校验，例如 `123.456.789-01` 或 `12345678901`
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let digits: String = raw.chars().filter(|c| !matches!(c, '.' | '-')).collect();
        let cpf = Self(digits);
        cpf.validate()?;
        Ok(cpf)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 展示格式 `000.000.000-00`
    pub fn formatted(&self) -> String {
        let d = &self.0;
        format!("{}.{}.{}-{}", &d[0..3], &d[3..6], &d[6..9], &d[9..11])
    }
}

impl ValueObject for Cpf {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        if self.0.len() != 11 || !self.0.bytes().all(|b| b.is_ascii_digit()) {
            return Err(DomainError::validation("Invalid CPF format"));
        }
        Ok(())
    }
}

impl FromStr for Cpf {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Cpf {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Cpf> for String {
    fn from(cpf: Cpf) -> Self {
        cpf.0
    }
}

impl fmt::Display for Cpf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[value_object]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> DomainResult<Self> {
        let email = Self(raw.to_string());
        email.validate()?;
        Ok(email)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl ValueObject for Email {
    type Error = DomainError;

    fn validate(&self) -> Result<(), Self::Error> {
        if !EMAIL_PATTERN.is_match(&self.0) {
            return Err(DomainError::validation("Invalid email format"));
        }
        Ok(())
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}

/// 学生记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    name: String,
    cpf: Cpf,
    email: Email,
}

impl Student {
    pub fn new(name: impl Into<String>, cpf: &str, email: &str) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("Student name cannot be empty"));
        }
        Ok(Self {
            name,
            cpf: Cpf::parse(cpf)?,
            email: Email::parse(email)?,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cpf(&self) -> &Cpf {
        &self.cpf
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    /// 对外形状 `{name, cpf, email}`，CPF 使用展示格式
    pub fn to_record(&self) -> StudentRecord {
        StudentRecord {
            name: self.name.clone(),
            cpf: self.cpf.formatted(),
            email: self.email.as_str().to_string(),
        }
    }
}
