//! Zippopotam HTTP 请求方法

use crate::error::Result;
use crate::http_client::{HttpUtils, is_success};
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{ZippopotamProvider, ZippopotamResponse};

impl ZippopotamProvider {
    /// 执行 GET `/us/{zip}`
    pub(crate) async fn get_zip(&self, zip: &str) -> Result<ZippopotamResponse> {
        let url = format!("{}/us/{zip}", self.base_url);

        let request = self.client.get(&url);
        let (status, body) =
            HttpUtils::execute_request(request, self.provider_name(), "GET", &url).await?;

        if !is_success(status) {
            return Err(self.map_error(
                RawApiError::with_status(status, body),
                ErrorContext::for_postal_code(zip),
            ));
        }

        HttpUtils::parse_json(&body, self.provider_name())
    }
}
