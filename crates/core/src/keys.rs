//! Well-known record keys.
//!
//! Every persisted record is addressed by a `(kind, name)` pair inside a
//! namespace. The service only ever touches the two records below.

use std::fmt;

/// Address of a single record within a namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordKey {
    pub kind: &'static str,
    pub name: &'static str,
}

impl RecordKey {
    pub const fn new(kind: &'static str, name: &'static str) -> Self {
        Self { kind, name }
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.name)
    }
}

/// The global visit counter.
pub const VISITORS: RecordKey = RecordKey::new("visitors", "visitors");

/// The list of submitted posts, newest first.
pub const POSTS: RecordKey = RecordKey::new("posts", "posts");

/// Namespace used when none is configured.
pub const DEFAULT_NAMESPACE: &str = "default";
