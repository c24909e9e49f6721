use async_trait::async_trait;
use postboard_core::keys::RecordKey;

use super::{RecordStore, StoreError};
use crate::DbPool;

/// Record store backed by the `records` table.
#[derive(Debug, Clone)]
pub struct PgRecordStore {
    pool: DbPool,
    namespace: String,
}

impl PgRecordStore {
    pub fn new(pool: DbPool, namespace: impl Into<String>) -> Self {
        Self {
            pool,
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

#[async_trait]
impl RecordStore for PgRecordStore {
    async fn get(&self, key: RecordKey) -> Result<Option<serde_json::Value>, StoreError> {
        let data = sqlx::query_scalar::<_, serde_json::Value>(
            "SELECT data FROM records WHERE namespace = $1 AND kind = $2 AND name = $3",
        )
        .bind(&self.namespace)
        .bind(key.kind)
        .bind(key.name)
        .fetch_optional(&self.pool)
        .await?;

        Ok(data)
    }

    async fn put(&self, key: RecordKey, record: serde_json::Value) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO records (namespace, kind, name, data) \
             VALUES ($1, $2, $3, $4) \
             ON CONFLICT (namespace, kind, name) DO UPDATE SET \
                 data = EXCLUDED.data, \
                 updated_at = NOW()",
        )
        .bind(&self.namespace)
        .bind(key.kind)
        .bind(key.name)
        .bind(record)
        .execute(&self.pool)
        .await?;

        tracing::debug!(namespace = %self.namespace, %key, "Record written");
        Ok(())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool).await?;
        Ok(())
    }
}
