//! 地址记录类型定义

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use cep_lookup_provider::ProviderAddress;

/// A looked-up address as kept in the list and in storage.
///
/// Serialized keys follow the ViaCEP field names so stored lists stay
/// readable next to the API's own output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressRecord {
    /// 记录 ID (UUID v4)，列表内唯一
    pub id: String,
    /// 街区
    #[serde(rename = "bairro", default)]
    pub neighborhood: String,
    /// 邮编（服务返回的格式）
    #[serde(rename = "cep", default)]
    pub postal_code: String,
    /// 补充信息（门牌、单元）
    #[serde(rename = "complemento", default)]
    pub complement: String,
    /// 电话区号
    #[serde(rename = "ddd", default)]
    pub area_code: String,
    /// 城市
    #[serde(rename = "localidade", default)]
    pub locality: String,
    /// 街道
    #[serde(rename = "logradouro", default)]
    pub street: String,
    /// 州代码
    #[serde(rename = "uf", default)]
    pub region: String,
    /// 查询时间
    #[serde(rename = "consultedAt")]
    #[serde(with = "crate::utils::datetime")]
    pub consulted_at: DateTime<Utc>,
}

impl AddressRecord {
    /// Builds a record from a provider response.
    pub fn from_provider(id: String, address: ProviderAddress, consulted_at: DateTime<Utc>) -> Self {
        let ProviderAddress {
            street,
            neighborhood,
            locality,
            region,
            postal_code,
            complement,
            area_code,
        } = address;

        Self {
            id,
            neighborhood,
            postal_code,
            complement,
            area_code,
            locality,
            street,
            region,
            consulted_at,
        }
    }
}
