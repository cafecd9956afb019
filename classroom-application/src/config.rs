//! 应用配置
//!
//! 以 TOML 描述，所有字段均有默认值，缺省文件等价于 [`ClassroomConfig::default`]：
//!
//! ```toml
//! [goals]
//! enforce_total_weight = true
//!
//! [clone]
//! reject_non_empty_destination = true
//! validate_total_weight = false
//! ```
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassroomConfig {
    pub goals: GoalsConfig,
    pub clone: CloneConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GoalsConfig {
    /// 新增/修改目标时检查课程总权重不超过 100
    pub enforce_total_weight: bool,
}

impl Default for GoalsConfig {
    fn default() -> Self {
        Self {
            enforce_total_weight: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloneConfig {
    /// 目标课程已有目标时拒绝克隆
    pub reject_non_empty_destination: bool,
    /// 克隆后目标课程总权重不得超过 100
    pub validate_total_weight: bool,
}

impl Default for CloneConfig {
    fn default() -> Self {
        Self {
            reject_non_empty_destination: true,
            validate_total_weight: false,
        }
    }
}

impl ClassroomConfig {
    pub fn from_toml_str(raw: &str) -> Result<Self, AppError> {
        toml::from_str(raw).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&raw)
    }
}
