use std::collections::HashMap;

use async_trait::async_trait;
use postboard_core::keys::RecordKey;
use tokio::sync::RwLock;

use super::{RecordStore, StoreError};

type Slot = (String, &'static str, &'static str);

/// Process-local record store for development and tests.
///
/// Records do not survive a restart and are not shared between processes.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    namespace: String,
    records: RwLock<HashMap<Slot, serde_json::Value>>,
}

impl MemoryRecordStore {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            records: RwLock::new(HashMap::new()),
        }
    }

    fn slot(&self, key: RecordKey) -> Slot {
        (self.namespace.clone(), key.kind, key.name)
    }

    /// Number of records currently held.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn get(&self, key: RecordKey) -> Result<Option<serde_json::Value>, StoreError> {
        Ok(self.records.read().await.get(&self.slot(key)).cloned())
    }

    async fn put(&self, key: RecordKey, record: serde_json::Value) -> Result<(), StoreError> {
        self.records.write().await.insert(self.slot(key), record);
        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
