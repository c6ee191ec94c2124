//! 业务逻辑服务层

mod address_list_service;
mod lookup_service;

pub use address_list_service::AddressListService;
pub use lookup_service::LookupService;

use std::sync::Arc;

use cep_lookup_provider::{AddressProvider, Country};

use crate::error::{CoreError, CoreResult};
use crate::traits::{AddressRepository, ProviderRegistry};

/// 服务上下文 - 持有所有依赖
///
/// 平台层需要创建此上下文，并注入平台特定的存储实现。
pub struct ServiceContext {
    /// 地址列表持久化仓库
    pub address_repository: Arc<dyn AddressRepository>,
    /// Provider 注册表
    pub provider_registry: Arc<dyn ProviderRegistry>,
}

impl ServiceContext {
    /// 创建服务上下文
    #[must_use]
    pub fn new(
        address_repository: Arc<dyn AddressRepository>,
        provider_registry: Arc<dyn ProviderRegistry>,
    ) -> Self {
        Self {
            address_repository,
            provider_registry,
        }
    }

    /// 获取国家对应的 Provider 实例
    pub async fn get_provider(&self, country: Country) -> CoreResult<Arc<dyn AddressProvider>> {
        self.provider_registry
            .get(country)
            .await
            .ok_or_else(|| CoreError::ProviderNotFound(country.code().to_string()))
    }
}
