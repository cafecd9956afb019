use classroom_domain::error::DomainError;

#[non_exhaustive]
#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error("domain: {0}")]
    Domain(#[from] DomainError),

    #[error("config: {0}")]
    Config(String),

    #[error("handler not found: {0}")]
    HandlerNotFound(&'static str),

    #[error("handler already registered: command={command}")]
    AlreadyRegisteredCommand { command: &'static str },

    #[error("handler already registered: query={query}")]
    AlreadyRegisteredQuery { query: &'static str },

    #[error("type mismatch: expected={expected}, found={found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

impl AppError {
    /// 对外响应状态码：校验 400、不存在 404、冲突 409、其余 500
    pub fn status(&self) -> u16 {
        match self {
            AppError::Domain(err) => match err {
                DomainError::Validation { .. }
                | DomainError::Parse { .. }
                | DomainError::Serde { .. } => 400,
                DomainError::NotFound { .. } => 404,
                DomainError::Conflict { .. } => 409,
                _ => 500,
            },
            _ => 500,
        }
    }

    /// 对外响应中的错误描述
    pub fn message(&self) -> String {
        match self {
            AppError::Domain(err) => err.reason(),
            other => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_errors_map_to_statuses() {
        let cases = [
            (DomainError::validation("Goal weight must be between 0 and 100"), 400),
            (DomainError::not_found("Class not found"), 404),
            (DomainError::conflict("Destination class already has goals"), 409),
            (
                DomainError::Repository {
                    reason: "disk full".into(),
                },
                500,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(AppError::from(err).status(), status);
        }
    }

    #[test]
    fn message_uses_domain_reason() {
        let err = AppError::from(DomainError::not_found("Goal not found"));
        assert_eq!(err.message(), "Goal not found");
        assert_eq!(AppError::HandlerNotFound("AddGoal").status(), 500);
    }
}
