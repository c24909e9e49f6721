//! Repository for the visitor counter record.

use postboard_core::keys::VISITORS;

use crate::models::visitor::VisitorCounter;
use crate::store::{get_record, put_record, RecordStore, StoreError};

/// Provides access to the global visit counter.
pub struct VisitorRepo;

impl VisitorRepo {
    /// Count one visit.
    ///
    /// The first call ever writes the counter with `total = 0`; each later
    /// call writes `total + 1`. Read and write are separate store calls.
    pub async fn record_visit(store: &dyn RecordStore) -> Result<VisitorCounter, StoreError> {
        let counter = match get_record::<VisitorCounter>(store, VISITORS).await? {
            Some(existing) => existing.incremented(),
            None => VisitorCounter::initial(),
        };

        put_record(store, VISITORS, &counter).await?;
        tracing::debug!(total = counter.total, "Visit recorded");
        Ok(counter)
    }

    /// Count one visit, then read the counter back.
    ///
    /// `None` only if the record vanished between the write and the read.
    pub async fn record_and_read(
        store: &dyn RecordStore,
    ) -> Result<Option<VisitorCounter>, StoreError> {
        Self::record_visit(store).await?;
        Self::get(store).await
    }

    /// Read the counter without changing it.
    pub async fn get(store: &dyn RecordStore) -> Result<Option<VisitorCounter>, StoreError> {
        get_record(store, VISITORS).await
    }
}
