//! Repository for the post collection record.

use postboard_core::keys::POSTS;

use crate::models::post::{Post, PostCollection};
use crate::store::{get_record, put_record, RecordStore, StoreError};

/// Provides access to the stored list of posts.
pub struct PostRepo;

impl PostRepo {
    /// Read the collection, or `None` if no post was ever accepted.
    pub async fn list(store: &dyn RecordStore) -> Result<Option<PostCollection>, StoreError> {
        get_record(store, POSTS).await
    }

    /// Put `post` at the front of the collection, creating it if needed.
    ///
    /// Returns the collection as written.
    pub async fn prepend(
        store: &dyn RecordStore,
        post: Post,
    ) -> Result<PostCollection, StoreError> {
        let posts = match get_record::<PostCollection>(store, POSTS).await? {
            Some(mut existing) => {
                existing.prepend(post);
                existing
            }
            None => PostCollection::with_first(post),
        };

        put_record(store, POSTS, &posts).await?;
        tracing::debug!(count = posts.len(), "Post collection written");
        Ok(posts)
    }
}
