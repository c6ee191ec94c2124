//! Zippopotam Provider (United States)

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::providers::common::{create_http_client, normalize_base_url};

pub(crate) use types::{ZippopotamPlace, ZippopotamResponse};

pub(crate) const ZIPPOPOTAM_API_BASE: &str = "https://api.zippopotam.us";
/// ZIP 主码位数（ZIP+4 的扩展部分不会发送）
pub(crate) const ZIP_DIGITS: usize = 5;

/// Zippopotam Provider
pub struct ZippopotamProvider {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl ZippopotamProvider {
    pub fn new() -> Self {
        Self::with_base_url(ZIPPOPOTAM_API_BASE)
    }

    /// Points the provider at another Zippopotam-compatible endpoint.
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: create_http_client(),
            base_url: normalize_base_url(base_url),
        }
    }
}

impl Default for ZippopotamProvider {
    fn default() -> Self {
        Self::new()
    }
}
