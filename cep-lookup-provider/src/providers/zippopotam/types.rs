//! Zippopotam API 类型定义

use serde::Deserialize;

/// `GET /us/{zip}` 响应
#[derive(Debug, Default, Deserialize)]
pub struct ZippopotamResponse {
    #[serde(rename = "post code", default)]
    pub post_code: String,
    #[serde(default)]
    pub places: Vec<ZippopotamPlace>,
}

/// 单个地点
#[derive(Debug, Default, Deserialize)]
pub struct ZippopotamPlace {
    #[serde(rename = "place name", default)]
    pub place_name: String,
    #[serde(rename = "state abbreviation", default)]
    pub state_abbreviation: String,
}
