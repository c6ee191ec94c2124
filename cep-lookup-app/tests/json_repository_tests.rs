#![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
//! Integration tests for `JsonFileAddressRepository`.

use cep_lookup_app::adapters::{ADDRESSES_FILE_NAME, JsonFileAddressRepository};
use cep_lookup_core::error::CoreError;
use cep_lookup_core::traits::AddressRepository;
use cep_lookup_core::types::AddressRecord;
use chrono::{DateTime, Utc};

fn record(id: &str, cep: &str, at: DateTime<Utc>) -> AddressRecord {
    AddressRecord {
        id: id.to_string(),
        neighborhood: "Copacabana".to_string(),
        postal_code: cep.to_string(),
        complement: "Bloco B, Ap 502".to_string(),
        area_code: "21".to_string(),
        locality: "Rio de Janeiro".to_string(),
        street: "Avenida Atlântica".to_string(),
        region: "RJ".to_string(),
        consulted_at: at,
    }
}

#[tokio::test]
async fn missing_file_is_none() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let repo = JsonFileAddressRepository::new(tmp.path());
    assert!(repo.load().await.expect("load").is_none());
}

#[tokio::test]
async fn round_trip_keeps_order_and_seconds() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let repo = JsonFileAddressRepository::new(tmp.path().join("nested"));
    let now = Utc::now();
    let records = vec![
        record("b", "22041-001", now),
        record("a", "22041-002", now - chrono::Duration::minutes(5)),
    ];

    repo.save_all(&records).await.expect("save");
    let loaded = repo.load().await.expect("load").expect("snapshot");

    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].id, "b");
    assert_eq!(loaded[1].id, "a");
    assert_eq!(loaded[0].street, "Avenida Atlântica");
    for (before, after) in records.iter().zip(&loaded) {
        assert_eq!(before.consulted_at.timestamp(), after.consulted_at.timestamp());
    }
}

#[tokio::test]
async fn save_replaces_previous_snapshot() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let repo = JsonFileAddressRepository::new(tmp.path());
    let now = Utc::now();

    repo.save_all(&[record("a", "1", now), record("b", "2", now)])
        .await
        .expect("save");
    repo.save_all(&[record("c", "3", now)]).await.expect("save");

    let loaded = repo.load().await.expect("load").expect("snapshot");
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].id, "c");
    assert!(!tmp.path().join("addresses.json.tmp").exists());
}

#[tokio::test]
async fn file_uses_portuguese_keys() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let repo = JsonFileAddressRepository::new(tmp.path());
    repo.save_all(&[record("a", "22041-001", Utc::now())])
        .await
        .expect("save");

    let raw = std::fs::read_to_string(tmp.path().join(ADDRESSES_FILE_NAME)).expect("read");
    let value: serde_json::Value = serde_json::from_str(&raw).expect("json");
    let first = &value[0];
    assert_eq!(first["logradouro"], "Avenida Atlântica");
    assert_eq!(first["bairro"], "Copacabana");
    assert_eq!(first["localidade"], "Rio de Janeiro");
    assert_eq!(first["uf"], "RJ");
    assert_eq!(first["cep"], "22041-001");
    assert!(first["consultedAt"].is_string());
}

#[tokio::test]
async fn accepts_unix_millisecond_timestamps() {
    let tmp = tempfile::tempdir().expect("temp dir");
    let json = r#"[{"id":"x","bairro":"Centro","cep":"01001-000","complemento":"","ddd":"11",
        "localidade":"São Paulo","logradouro":"Praça da Sé","uf":"SP","consultedAt":1700000000000}]"#;
    std::fs::write(tmp.path().join(ADDRESSES_FILE_NAME), json).expect("write");

    let repo = JsonFileAddressRepository::new(tmp.path());
    let loaded = repo.load().await.expect("load").expect("snapshot");
    assert_eq!(loaded[0].consulted_at.timestamp(), 1_700_000_000);
}

#[tokio::test]
async fn corrupt_file_is_serialization_error() {
    let tmp = tempfile::tempdir().expect("temp dir");
    std::fs::write(tmp.path().join(ADDRESSES_FILE_NAME), "{\"id\": 1}").expect("write");

    let repo = JsonFileAddressRepository::new(tmp.path());
    let result = repo.load().await;
    assert!(matches!(result, Err(CoreError::SerializationError(_))));
}
