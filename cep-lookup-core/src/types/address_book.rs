//! 地址列表

use chrono::{DateTime, Utc};
use uuid::Uuid;

use cep_lookup_provider::ProviderAddress;

use super::AddressRecord;

/// Seed rows for sample mode: street, neighborhood, city, uf, cep, complement, ddd.
const SAMPLE_ADDRESSES: [[&str; 7]; 4] = [
    [
        "Praça da Sé",
        "Centro",
        "São Paulo",
        "SP",
        "01001-000",
        "Apto 101",
        "11",
    ],
    [
        "Avenida Atlântica",
        "Copacabana",
        "Rio de Janeiro",
        "RJ",
        "22041-001",
        "Bloco B, Ap 502",
        "21",
    ],
    [
        "Rua Pernambuco",
        "Savassi",
        "Belo Horizonte",
        "MG",
        "30140-071",
        "Loja 3",
        "31",
    ],
    [
        "Rua Silva Jatahy",
        "Meireles",
        "Fortaleza",
        "CE",
        "60160-230",
        "Casa 10",
        "85",
    ],
];

/// Ordered list of address records, most recent first.
///
/// Record ids are unique within a book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: Vec<AddressRecord>,
}

impl AddressBook {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a stored snapshot, keeping its order.
    ///
    /// Records whose id repeats an earlier one get a fresh id.
    #[must_use]
    pub fn from_records(records: Vec<AddressRecord>) -> Self {
        let mut book = Self::new();
        for mut record in records {
            if book.contains_id(&record.id) {
                let id = book.fresh_id();
                log::warn!("Duplicate address id {} in snapshot, reassigned to {id}", record.id);
                record.id = id;
            }
            book.records.push(record);
        }
        book
    }

    /// The four sample addresses, each with a fresh id and `consulted_at`.
    #[must_use]
    pub fn sample(consulted_at: DateTime<Utc>) -> Self {
        let mut book = Self::new();
        for [street, neighborhood, locality, region, postal_code, complement, area_code] in
            SAMPLE_ADDRESSES
        {
            let address = ProviderAddress {
                street: street.to_string(),
                neighborhood: neighborhood.to_string(),
                locality: locality.to_string(),
                region: region.to_string(),
                postal_code: postal_code.to_string(),
                complement: complement.to_string(),
                area_code: area_code.to_string(),
            };
            let id = book.fresh_id();
            book.records
                .push(AddressRecord::from_provider(id, address, consulted_at));
        }
        book
    }

    /// Generates a UUID v4 that no record in the book uses.
    pub fn fresh_id(&self) -> String {
        self.fresh_id_with(|| Uuid::new_v4().to_string())
    }

    /// Draws ids from `generate` until one is unused.
    pub fn fresh_id_with(&self, mut generate: impl FnMut() -> String) -> String {
        loop {
            let id = generate();
            if !self.contains_id(&id) {
                return id;
            }
            log::debug!("Generated address id {id} already in use, retrying");
        }
    }

    /// Inserts `record` at the head.
    ///
    /// A record whose id is already taken gets a fresh one. Returns the id stored.
    pub fn prepend(&mut self, mut record: AddressRecord) -> String {
        if self.contains_id(&record.id) {
            record.id = self.fresh_id();
        }
        let id = record.id.clone();
        self.records.insert(0, record);
        id
    }

    /// Removes the record with `id`, keeping the order of the others.
    pub fn remove_by_id(&mut self, id: &str) -> Option<AddressRecord> {
        let index = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(index))
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.records.iter().any(|r| r.id == id)
    }

    pub fn records(&self) -> &[AddressRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
