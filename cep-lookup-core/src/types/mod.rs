//! 类型定义模块

mod address_book;
mod lookup;
mod record;

pub use address_book::AddressBook;
pub use lookup::{ListMode, LookupRequest, ValidationPolicy};
pub use record::AddressRecord;

// Re-export provider 库的公共类型
pub use cep_lookup_provider::{AddressField, Country, ProviderAddress, ProviderMetadata};
