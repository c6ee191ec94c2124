//! 测试辅助模块
//!
//! 提供 mock 实现和便捷的测试工厂方法。

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::{Notify, RwLock};

use cep_lookup_provider::{
    AddressField, AddressProvider, Country, ProviderAddress, ProviderError, ProviderMetadata,
};

use crate::error::{CoreError, CoreResult};
use crate::services::ServiceContext;
use crate::traits::{AddressRepository, InMemoryProviderRegistry};
use crate::types::AddressRecord;

// ===== MockAddressRepository =====

pub struct MockAddressRepository {
    snapshot: RwLock<Option<Vec<AddressRecord>>>,
    /// 如果 Some，load 时返回 `SerializationError`
    load_error: RwLock<Option<String>>,
    /// 如果 Some，save 时返回 `StorageError`
    save_error: RwLock<Option<String>>,
    loads: AtomicUsize,
    saves: AtomicUsize,
}

impl MockAddressRepository {
    pub fn new() -> Self {
        Self {
            snapshot: RwLock::new(None),
            load_error: RwLock::new(None),
            save_error: RwLock::new(None),
            loads: AtomicUsize::new(0),
            saves: AtomicUsize::new(0),
        }
    }

    pub async fn set_snapshot(&self, records: Option<Vec<AddressRecord>>) {
        *self.snapshot.write().await = records;
    }

    pub async fn snapshot(&self) -> Option<Vec<AddressRecord>> {
        self.snapshot.read().await.clone()
    }

    pub async fn set_load_error(&self, err: Option<String>) {
        *self.load_error.write().await = err;
    }

    pub async fn set_save_error(&self, err: Option<String>) {
        *self.save_error.write().await = err;
    }

    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }

    /// 成功写入的次数
    pub fn save_count(&self) -> usize {
        self.saves.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AddressRepository for MockAddressRepository {
    async fn load(&self) -> CoreResult<Option<Vec<AddressRecord>>> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        if let Some(ref msg) = *self.load_error.read().await {
            return Err(CoreError::SerializationError(msg.clone()));
        }
        Ok(self.snapshot.read().await.clone())
    }

    async fn save_all(&self, records: &[AddressRecord]) -> CoreResult<()> {
        if let Some(ref msg) = *self.save_error.read().await {
            return Err(CoreError::StorageError(msg.clone()));
        }
        *self.snapshot.write().await = Some(records.to_vec());
        self.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

// ===== MockAddressProvider =====

const MOCK_REQUIRED_FIELDS: &[AddressField] = &[
    AddressField::Street,
    AddressField::Neighborhood,
    AddressField::Locality,
];

pub struct MockAddressProvider {
    country: Country,
    response: Result<ProviderAddress, ProviderError>,
    /// 如果 Some，lookup 在返回前等待通知
    gate: Option<Arc<Notify>>,
    calls: Mutex<Vec<String>>,
}

impl MockAddressProvider {
    /// Answers "not found" until configured otherwise.
    pub fn new(country: Country) -> Self {
        Self {
            country,
            response: Err(ProviderError::AddressNotFound {
                provider: "mock".to_string(),
                postal_code: String::new(),
                raw_message: None,
            }),
            gate: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn respond_with(mut self, response: Result<ProviderAddress, ProviderError>) -> Self {
        self.response = response;
        self
    }

    pub fn wait_for(mut self, gate: Arc<Notify>) -> Self {
        self.gate = Some(gate);
        self
    }

    /// 收到的邮编（按调用顺序）
    pub fn calls(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

#[async_trait]
impl AddressProvider for MockAddressProvider {
    fn id(&self) -> &'static str {
        "mock"
    }

    fn country(&self) -> Country {
        self.country
    }

    fn metadata() -> ProviderMetadata {
        ProviderMetadata {
            id: "mock".to_string(),
            name: "Mock".to_string(),
            description: "In-memory test provider".to_string(),
            country: Country::Br,
            required_fields: MOCK_REQUIRED_FIELDS.to_vec(),
            postal_code_example: "01001-000".to_string(),
        }
    }

    fn required_fields(&self) -> &'static [AddressField] {
        MOCK_REQUIRED_FIELDS
    }

    async fn lookup(&self, postal_code: &str) -> cep_lookup_provider::Result<ProviderAddress> {
        self.calls
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(postal_code.to_string());
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
        self.response.clone()
    }
}

// ===== 工厂方法 =====

/// Praça da Sé, as a provider would return it
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

pub fn make_record(id: &str) -> AddressRecord {
    AddressRecord::from_provider(id.to_string(), praca_da_se(), Utc::now())
}

/// 创建测试用 `ServiceContext`（注册一个巴西 mock provider）
pub fn create_test_context() -> (
    Arc<ServiceContext>,
    Arc<MockAddressRepository>,
    Arc<MockAddressProvider>,
) {
    create_test_context_with(MockAddressProvider::new(Country::Br).respond_with(Ok(praca_da_se())))
}

/// 创建测试用 `ServiceContext`，使用指定的 provider
pub fn create_test_context_with(
    provider: MockAddressProvider,
) -> (
    Arc<ServiceContext>,
    Arc<MockAddressRepository>,
    Arc<MockAddressProvider>,
) {
    let repo = Arc::new(MockAddressRepository::new());
    let provider = Arc::new(provider);
    let registry = InMemoryProviderRegistry::with_providers([
        provider.clone() as Arc<dyn AddressProvider>
    ]);

    let ctx = Arc::new(ServiceContext::new(repo.clone(), Arc::new(registry)));
    (ctx, repo, provider)
}
