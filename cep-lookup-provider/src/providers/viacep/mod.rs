//! ViaCEP Provider (Brazil)

mod error;
mod http;
mod provider;
mod types;

use reqwest::Client;

use crate::providers::common::{create_http_client, normalize_base_url};

pub(crate) use types::ViaCepResponse;

pub(crate) const VIACEP_API_BASE: &str = "https://viacep.com.br/ws";
/// ViaCEP 只接受 8 位数字
pub(crate) const CEP_DIGITS: usize = 8;

/// ViaCEP Provider
pub struct ViaCepProvider {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl ViaCepProvider {
    pub fn new() -> Self {
        Self::with_base_url(VIACEP_API_BASE)
    }

    /// Points the provider at another ViaCEP-compatible endpoint (mirrors, local stubs).
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            client: create_http_client(),
            base_url: normalize_base_url(base_url),
        }
    }
}

impl Default for ViaCepProvider {
    fn default() -> Self {
        Self::new()
    }
}
