//! Storage adapters for `AddressRepository`

mod json_file_repository;
mod memory_repository;

pub use json_file_repository::{ADDRESSES_FILE_NAME, JsonFileAddressRepository};
pub use memory_repository::InMemoryAddressRepository;
