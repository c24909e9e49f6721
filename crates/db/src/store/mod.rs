//! The record store accessor.
//!
//! A record is a whole JSON document addressed by a [`RecordKey`] inside the
//! namespace the store was opened with. Reads and writes are independent
//! calls: there is no compare-and-swap and no transaction spanning a
//! `get` followed by a `put`, so two concurrent read-modify-write cycles on
//! the same key can lose an update.

mod memory;
mod postgres;

use async_trait::async_trait;
use postboard_core::keys::RecordKey;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub use memory::MemoryRecordStore;
pub use postgres::PgRecordStore;

/// Errors raised by a record store backend.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Record serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch a record, or `None` if it has never been written.
    async fn get(&self, key: RecordKey) -> Result<Option<serde_json::Value>, StoreError>;

    /// Write a record, replacing any previous value.
    async fn put(&self, key: RecordKey, record: serde_json::Value) -> Result<(), StoreError>;

    /// Verify the backend is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;
}

/// Fetch and deserialize a record.
pub async fn get_record<T: DeserializeOwned>(
    store: &dyn RecordStore,
    key: RecordKey,
) -> Result<Option<T>, StoreError> {
    match store.get(key).await? {
        Some(value) => Ok(Some(serde_json::from_value(value)?)),
        None => Ok(None),
    }
}

/// Serialize and write a record.
pub async fn put_record<T: Serialize>(
    store: &dyn RecordStore,
    key: RecordKey,
    record: &T,
) -> Result<(), StoreError> {
    let value = serde_json::to_value(record)?;
    store.put(key, value).await
}
