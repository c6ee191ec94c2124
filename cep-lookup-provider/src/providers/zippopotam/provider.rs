//! Zippopotam AddressProvider trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::providers::common::digits_only;
use crate::traits::{AddressProvider, ProviderErrorMapper};
use crate::types::{AddressField, Country, ProviderAddress, ProviderMetadata};

use super::{ZIP_DIGITS, ZippopotamPlace, ZippopotamProvider, ZippopotamResponse};

/// Zippopotam 只返回城市和州，没有街道信息
const REQUIRED_FIELDS: &[AddressField] = &[AddressField::Locality, AddressField::Region];

impl ZippopotamProvider {
    /// 将响应的第一个地点转换为 `ProviderAddress`
    pub(crate) fn response_to_address(resp: ZippopotamResponse) -> Option<ProviderAddress> {
        let ZippopotamResponse { post_code, places } = resp;
        let ZippopotamPlace {
            place_name,
            state_abbreviation,
        } = places.into_iter().next()?;

        Some(ProviderAddress {
            locality: place_name,
            region: state_abbreviation,
            postal_code: post_code,
            ..Default::default()
        })
    }
}

#[async_trait]
impl AddressProvider for ZippopotamProvider {
    fn id(&self) -> &'static str {
        "zippopotam"
    }

    fn country(&self) -> Country {
        Country::Us
    }

    fn metadata() -> ProviderMetadata {
        ProviderMetadata {
            id: "zippopotam".to_string(),
            name: "Zippopotam.us".to_string(),
            description: "US ZIP code to city and state".to_string(),
            country: Country::Us,
            required_fields: REQUIRED_FIELDS.to_vec(),
            postal_code_example: "90210".to_string(),
        }
    }

    fn required_fields(&self) -> &'static [AddressField] {
        REQUIRED_FIELDS
    }

    async fn lookup(&self, postal_code: &str) -> Result<ProviderAddress> {
        let digits = digits_only(postal_code);
        let Some(zip) = digits.get(..ZIP_DIGITS) else {
            return Err(self.invalid_postal_code(postal_code, None));
        };

        let response = self.get_zip(zip).await?;
        Self::response_to_address(response)
            .ok_or_else(|| self.not_found(zip, Some("no places in response".to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;

    #[test]
    fn first_place_becomes_address() {
        let resp = ZippopotamResponse {
            post_code: "90210".to_string(),
            places: vec![ZippopotamPlace {
                place_name: "Beverly Hills".to_string(),
                state_abbreviation: "CA".to_string(),
            }],
        };
        let address = ZippopotamProvider::response_to_address(resp);
        assert!(matches!(
            address,
            Some(ref a) if a.locality == "Beverly Hills" && a.region == "CA" && a.street.is_empty()
        ));
    }

    #[test]
    fn no_places_is_none() {
        assert!(ZippopotamProvider::response_to_address(ZippopotamResponse::default()).is_none());
    }

    #[tokio::test]
    async fn short_zip_rejected_without_request() {
        let provider = ZippopotamProvider::with_base_url("http://127.0.0.1:9");
        let result = provider.lookup("123").await;
        assert!(
            matches!(result, Err(ProviderError::InvalidPostalCode { .. })),
            "unexpected result: {result:?}"
        );
    }
}
