//! 共享测试工具

#![allow(dead_code)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use cep_lookup_core::traits::InMemoryProviderRegistry;
use cep_lookup_provider::{
    AddressField, AddressProvider, Country, ProviderAddress, ProviderError, ProviderMetadata,
};

const REQUIRED: &[AddressField] = &[
    AddressField::Street,
    AddressField::Neighborhood,
    AddressField::Locality,
];

/// Brazilian provider stub answering from a fixed table.
pub struct StubProvider {
    answers: Vec<(&'static str, ProviderAddress)>,
    calls: AtomicUsize,
}

impl StubProvider {
    pub fn new() -> Self {
        Self {
            answers: vec![("01001-000", praca_da_se())],
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AddressProvider for StubProvider {
    fn id(&self) -> &'static str {
        "stub"
    }

    fn country(&self) -> Country {
        Country::Br
    }

    fn metadata() -> ProviderMetadata {
        ProviderMetadata {
            id: "stub".to_string(),
            name: "Stub".to_string(),
            description: "Fixed answers".to_string(),
            country: Country::Br,
            required_fields: REQUIRED.to_vec(),
            postal_code_example: "01001-000".to_string(),
        }
    }

    fn required_fields(&self) -> &'static [AddressField] {
        REQUIRED
    }

    async fn lookup(&self, postal_code: &str) -> cep_lookup_provider::Result<ProviderAddress> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answers
            .iter()
            .find(|(code, _)| *code == postal_code)
            .map(|(_, address)| address.clone())
            .ok_or_else(|| ProviderError::AddressNotFound {
                provider: "stub".to_string(),
                postal_code: postal_code.to_string(),
                raw_message: None,
            })
    }
}

pub fn praca_da_se() -> ProviderAddress {
    ProviderAddress {
        street: "Praça da Sé".to_string(),
        neighborhood: "Centro".to_string(),
        locality: "São Paulo".to_string(),
        region: "SP".to_string(),
        postal_code: "01001-000".to_string(),
        complement: String::new(),
        area_code: "11".to_string(),
    }
}

pub fn stub_registry(stub: &Arc<StubProvider>) -> Arc<InMemoryProviderRegistry> {
    let provider: Arc<dyn AddressProvider> = stub.clone();
    Arc::new(InMemoryProviderRegistry::with_providers([provider]))
}
