//! 领域层统一错误定义
//!
//! 业务规则错误分为三类：校验失败（`Validation`）、对象不存在（`NotFound`）
//! 与状态冲突（`Conflict`）；其余为序列化/解析与仓储错误。
//! 所有错误在违反规则处同步返回，由接口层映射为对外响应。
//!
use thiserror::Error;

/// 统一错误类型
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DomainError {
    // --- 序列化/解析 ---
    #[error("serialization error: {source}")]
    Serde {
        #[from]
        source: serde_json::Error,
    },
    #[error("parse error: {reason}")]
    Parse { reason: String },

    // --- 领域规则 ---
    #[error("validation failed: {reason}")]
    Validation { reason: String },
    #[error("not found: {reason}")]
    NotFound { reason: String },
    #[error("conflict: {reason}")]
    Conflict { reason: String },

    // --- 仓储/持久化 ---
    #[error("repository error: {reason}")]
    Repository { reason: String },
}

impl DomainError {
    pub fn validation(reason: impl Into<String>) -> Self {
        Self::Validation {
            reason: reason.into(),
        }
    }

    pub fn not_found(reason: impl Into<String>) -> Self {
        Self::NotFound {
            reason: reason.into(),
        }
    }

    pub fn conflict(reason: impl Into<String>) -> Self {
        Self::Conflict {
            reason: reason.into(),
        }
    }

    pub fn repository(reason: impl Into<String>) -> Self {
        Self::Repository {
            reason: reason.into(),
        }
    }

    /// 面向调用方的原因描述（不带错误分类前缀）
    pub fn reason(&self) -> String {
        match self {
            Self::Parse { reason }
            | Self::Validation { reason }
            | Self::NotFound { reason }
            | Self::Conflict { reason }
            | Self::Repository { reason } => reason.clone(),
            Self::Serde { source } => source.to_string(),
        }
    }
}

/// 统一 Result 类型别名
pub type DomainResult<T> = Result<T, DomainError>;

impl From<chrono::ParseError> for DomainError {
    fn from(err: chrono::ParseError) -> Self {
        DomainError::Parse {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reason_strips_category_prefix() {
        let err = DomainError::validation("Goal description cannot be empty");
        assert_eq!(
            err.to_string(),
            "validation failed: Goal description cannot be empty"
        );
        assert_eq!(err.reason(), "Goal description cannot be empty");
    }

    #[test]
    fn timestamp_errors_convert_to_parse() {
        let err: DomainError = "yesterday"
            .parse::<chrono::DateTime<chrono::Utc>>()
            .unwrap_err()
            .into();
        match err {
            DomainError::Parse { .. } => {}
            other => panic!("unexpected {other:?}"),
        }
    }
}
