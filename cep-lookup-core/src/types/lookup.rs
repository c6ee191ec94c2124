//! 查询相关类型定义

use serde::{Deserialize, Serialize};

use cep_lookup_provider::Country;

/// 查询请求
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupRequest {
    /// 用户输入的邮编（未经处理）
    pub postal_code: String,
    /// 选中的国家
    #[serde(default)]
    pub country: Country,
}

impl LookupRequest {
    pub fn new(postal_code: impl Into<String>, country: Country) -> Self {
        Self {
            postal_code: postal_code.into(),
            country,
        }
    }
}

/// Which postal-code shape is accepted before a lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ValidationPolicy {
    /// The CEP pattern `NNNNN-NNN` for every country.
    #[default]
    Brazilian,
    /// CEP for `br`, ZIP / ZIP+4 for `us`.
    PerCountry,
}

/// Where the address list comes from on startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListMode {
    /// Loaded from and written back to the repository.
    #[default]
    Persisted,
    /// Seeded with sample addresses, never written.
    Sample,
}

impl ListMode {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "persisted" => Some(Self::Persisted),
            "sample" => Some(Self::Sample),
            _ => None,
        }
    }

    pub fn is_persisted(self) -> bool {
        self == Self::Persisted
    }
}
