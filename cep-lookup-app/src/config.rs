//! 应用配置
//!
//! JSON file at `<config dir>/cep-lookup/config.json`; every key is optional.
//! Environment variables override the file:
//! - `CEP_LOOKUP_CONFIG`: path of the config file itself
//! - `CEP_LOOKUP_DATA_DIR`: data directory
//! - `CEP_LOOKUP_STORAGE`: `persisted` or `sample`

use std::path::{Path, PathBuf};

use cep_lookup_core::types::{Country, ListMode, ValidationPolicy};
use cep_lookup_core::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

pub const ENV_CONFIG_FILE: &str = "CEP_LOOKUP_CONFIG";
pub const ENV_DATA_DIR: &str = "CEP_LOOKUP_DATA_DIR";
pub const ENV_STORAGE_MODE: &str = "CEP_LOOKUP_STORAGE";

const APP_DIR_NAME: &str = "cep-lookup";
const CONFIG_FILE_NAME: &str = "config.json";
const LOG_FILE_NAME: &str = "cep-lookup.log";

/// 界面语言
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    #[default]
    #[serde(rename = "pt-BR")]
    PtBr,
    #[serde(rename = "en-US")]
    EnUs,
}

impl Language {
    pub fn code(self) -> &'static str {
        match self {
            Self::PtBr => "pt-BR",
            Self::EnUs => "en-US",
        }
    }

    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::PtBr => Self::EnUs,
            Self::EnUs => Self::PtBr,
        }
    }
}

/// 配色主题
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// 应用配置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// 列表来源
    pub storage_mode: ListMode,
    /// 数据目录（`None` 表示默认目录）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    /// 启动时选中的国家
    pub default_country: Country,
    pub validation_policy: ValidationPolicy,
    pub language: Language,
    pub theme: ThemeMode,
}

/// `<config dir>/cep-lookup`, or `./cep-lookup` when the platform has none.
pub fn default_app_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR_NAME)
}

/// 默认配置文件路径
pub fn default_config_file() -> PathBuf {
    default_app_dir().join(CONFIG_FILE_NAME)
}

/// Config file in effect: `CEP_LOOKUP_CONFIG` if set, else [`default_config_file`].
pub fn config_file_path() -> PathBuf {
    std::env::var_os(ENV_CONFIG_FILE).map_or_else(default_config_file, PathBuf::from)
}

impl AppConfig {
    /// Loads the config file named by `CEP_LOOKUP_CONFIG` (or the default path)
    /// and applies the environment overrides.
    pub fn load() -> CoreResult<Self> {
        let mut config = Self::load_from(&config_file_path())?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Reads `path`; a missing file yields the defaults.
    pub fn load_from(path: &Path) -> CoreResult<Self> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("No config file at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(CoreError::StorageError(format!("{}: {e}", path.display())));
            }
        };

        serde_json::from_str(&content)
            .map_err(|e| CoreError::SerializationError(format!("{}: {e}", path.display())))
    }

    /// Applies `CEP_LOOKUP_DATA_DIR` and `CEP_LOOKUP_STORAGE` as returned by `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> CoreResult<()> {
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|d| !d.trim().is_empty()) {
            self.data_dir = Some(PathBuf::from(dir));
        }
        if let Some(mode) = lookup(ENV_STORAGE_MODE) {
            self.storage_mode = ListMode::from_name(&mode).ok_or_else(|| {
                CoreError::ValidationError(format!(
                    "{ENV_STORAGE_MODE} must be \"persisted\" or \"sample\", got {mode:?}"
                ))
            })?;
        }
        Ok(())
    }

    /// Writes the config as pretty-printed JSON, creating the directory if needed.
    pub fn save_to(&self, path: &Path) -> CoreResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            std::fs::create_dir_all(dir)
                .map_err(|e| CoreError::StorageError(format!("{}: {e}", dir.display())))?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| CoreError::SerializationError(e.to_string()))?;
        std::fs::write(path, content)
            .map_err(|e| CoreError::StorageError(format!("{}: {e}", path.display())))
    }

    /// Directory holding `addresses.json` and the log file.
    pub fn data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_app_dir)
    }

    pub fn log_file(&self) -> PathBuf {
        self.data_dir().join(LOG_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = AppConfig::default();
        assert_eq!(config.storage_mode, ListMode::Persisted);
        assert_eq!(config.default_country, Country::Br);
        assert_eq!(config.validation_policy, ValidationPolicy::Brazilian);
        assert_eq!(config.language, Language::PtBr);
        assert_eq!(config.theme, ThemeMode::Dark);
        assert!(config.data_dir().ends_with("cep-lookup"));
    }

    #[test]
    fn parses_camel_case_keys() {
        let json = r#"{
            "storageMode": "sample",
            "dataDir": "/tmp/cep",
            "defaultCountry": "us",
            "validationPolicy": "perCountry",
            "language": "en-US",
            "theme": "light"
        }"#;
        let config: Result<AppConfig, _> = serde_json::from_str(json);
        let Ok(config) = config else {
            panic!("config should parse");
        };
        assert_eq!(config.storage_mode, ListMode::Sample);
        assert_eq!(config.data_dir(), PathBuf::from("/tmp/cep"));
        assert_eq!(config.default_country, Country::Us);
        assert_eq!(config.validation_policy, ValidationPolicy::PerCountry);
        assert_eq!(config.language, Language::EnUs);
        assert_eq!(config.theme, ThemeMode::Light);
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let config: Result<AppConfig, _> = serde_json::from_str(r#"{"theme":"light"}"#);
        assert!(matches!(
            config,
            Ok(ref c) if c.theme == ThemeMode::Light && c.storage_mode == ListMode::Persisted
        ));
    }

    #[test]
    fn overrides_from_lookup() {
        let mut config = AppConfig::default();
        let result = config.apply_overrides(|key| match key {
            ENV_DATA_DIR => Some("/data/cep".to_string()),
            ENV_STORAGE_MODE => Some("sample".to_string()),
            _ => None,
        });

        assert!(result.is_ok());
        assert_eq!(config.data_dir(), PathBuf::from("/data/cep"));
        assert_eq!(config.storage_mode, ListMode::Sample);
        assert_eq!(config.log_file(), PathBuf::from("/data/cep/cep-lookup.log"));
    }

    #[test]
    fn bad_storage_override_is_rejected() {
        let mut config = AppConfig::default();
        let result = config.apply_overrides(|key| {
            (key == ENV_STORAGE_MODE).then(|| "cloud".to_string())
        });
        assert!(matches!(result, Err(CoreError::ValidationError(_))));
    }

    #[test]
    fn toggles() {
        assert_eq!(Language::PtBr.toggle(), Language::EnUs);
        assert_eq!(ThemeMode::Light.toggle(), ThemeMode::Dark);
    }
}
