//! Record store construction at server start.

use std::sync::Arc;

use postboard_db::{MemoryRecordStore, PgRecordStore, RecordStore};

use crate::config::StoreConfig;

#[derive(Debug, thiserror::Error)]
pub enum StartupError {
    #[error("Failed to connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("Database health check failed: {0}")]
    HealthCheck(#[source] sqlx::Error),

    #[error("Failed to run database migrations: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Open the configured record store.
///
/// With a database URL this connects, checks the connection and applies
/// migrations before handing back a [`PgRecordStore`]. Without one the
/// records live in process memory only.
pub async fn open_store(config: &StoreConfig) -> Result<Arc<dyn RecordStore>, StartupError> {
    let Some(database_url) = config.database_url.as_deref() else {
        tracing::warn!(
            namespace = %config.namespace,
            "DATABASE_URL not set, records are kept in memory and lost on restart"
        );
        return Ok(Arc::new(MemoryRecordStore::new(config.namespace.clone())));
    };

    let pool = postboard_db::create_pool(database_url)
        .await
        .map_err(StartupError::Connect)?;
    tracing::info!("Database connection pool created");

    postboard_db::health_check(&pool)
        .await
        .map_err(StartupError::HealthCheck)?;
    tracing::info!("Database health check passed");

    postboard_db::run_migrations(&pool).await?;
    tracing::info!("Database migrations applied");

    Ok(Arc::new(PgRecordStore::new(pool, config.namespace.clone())))
}

#[cfg(test)]
mod tests {
    use postboard_core::keys::VISITORS;

    use super::*;

    #[tokio::test]
    async fn memory_store_without_database_url() {
        let config = StoreConfig {
            database_url: None,
            namespace: "test".into(),
        };

        let store = open_store(&config).await.unwrap();

        store.health_check().await.unwrap();
        assert!(store.get(VISITORS).await.unwrap().is_none());
    }
}
