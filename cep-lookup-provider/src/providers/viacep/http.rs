//! ViaCEP HTTP 请求方法

use crate::error::Result;
use crate::http_client::{HttpUtils, is_success};
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{ViaCepProvider, ViaCepResponse};

impl ViaCepProvider {
    /// 执行 GET `/{cep}/json/`
    ///
    /// `cep` must already be reduced to its 8 digits.
    pub(crate) async fn get_cep(&self, cep: &str) -> Result<ViaCepResponse> {
        let url = format!("{}/{cep}/json/", self.base_url);

        let request = self.client.get(&url).header("Accept", "application/json");
        let (status, body) =
            HttpUtils::execute_request(request, self.provider_name(), "GET", &url).await?;

        if !is_success(status) {
            log::warn!("[viacep] HTTP {status} for {cep}");
            return Err(self.map_error(
                RawApiError::with_status(status, body),
                ErrorContext::for_postal_code(cep),
            ));
        }

        let response: ViaCepResponse = HttpUtils::parse_json(&body, self.provider_name())?;

        if response.is_error() {
            return Err(self.not_found(cep, Some("erro".to_string())));
        }

        Ok(response)
    }
}
