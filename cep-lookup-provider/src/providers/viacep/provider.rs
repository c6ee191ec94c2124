//! ViaCEP AddressProvider trait 实现

use async_trait::async_trait;

use crate::error::Result;
use crate::providers::common::digits_only;
use crate::traits::{AddressProvider, ProviderErrorMapper};
use crate::types::{AddressField, Country, ProviderAddress, ProviderMetadata};

use super::{CEP_DIGITS, ViaCepProvider, ViaCepResponse};

/// ViaCEP 返回的地址必须包含街道、街区和城市
const REQUIRED_FIELDS: &[AddressField] = &[
    AddressField::Street,
    AddressField::Neighborhood,
    AddressField::Locality,
];

impl ViaCepProvider {
    /// 将 ViaCEP 响应转换为 `ProviderAddress`
    pub(crate) fn response_to_address(resp: ViaCepResponse) -> ProviderAddress {
        ProviderAddress {
            street: resp.logradouro,
            neighborhood: resp.bairro,
            locality: resp.localidade,
            region: resp.uf,
            postal_code: resp.cep,
            complement: resp.complemento,
            area_code: resp.ddd,
        }
    }
}

#[async_trait]
impl AddressProvider for ViaCepProvider {
    fn id(&self) -> &'static str {
        "viacep"
    }

    fn country(&self) -> Country {
        Country::Br
    }

    fn metadata() -> ProviderMetadata {
        ProviderMetadata {
            id: "viacep".to_string(),
            name: "ViaCEP".to_string(),
            description: "Consulta gratuita de CEP dos Correios".to_string(),
            country: Country::Br,
            required_fields: REQUIRED_FIELDS.to_vec(),
            postal_code_example: "01001-000".to_string(),
        }
    }

    fn required_fields(&self) -> &'static [AddressField] {
        REQUIRED_FIELDS
    }

    async fn lookup(&self, postal_code: &str) -> Result<ProviderAddress> {
        let cep = digits_only(postal_code);
        if cep.len() != CEP_DIGITS {
            return Err(self.invalid_postal_code(postal_code, None));
        }

        let response = self.get_cep(&cep).await?;
        Ok(Self::response_to_address(response))
    }
}
