//! Post records and the submission form.

use postboard_core::render::ArticleFields;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Stored records
// ---------------------------------------------------------------------------

/// A single submitted post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub content: String,
    pub title: String,
    /// UTC submission time, already formatted for display.
    #[serde(rename = "submittedAt")]
    pub submitted_at: String,
}

impl Post {
    /// The values substituted into this post's article fragment.
    pub fn article_fields(&self) -> ArticleFields<'_> {
        ArticleFields {
            content: &self.content,
            title: &self.title,
            time: &self.submitted_at,
        }
    }
}

/// Stored under [`postboard_core::keys::POSTS`]. Newest post first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostCollection {
    pub posts: Vec<Post>,
}

impl PostCollection {
    /// A collection holding only `post`.
    pub fn with_first(post: Post) -> Self {
        Self { posts: vec![post] }
    }

    /// Insert `post` at the front. Duplicates are kept.
    pub fn prepend(&mut self, post: Post) {
        self.posts.insert(0, post);
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Urlencoded body of `POST /submit`.
///
/// Every field is optional at the parsing layer so the handler decides which
/// absences are errors and which are a silent redirect.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SubmitPost {
    pub pass: Option<String>,
    pub content: Option<String>,
    pub title: Option<String>,
}
