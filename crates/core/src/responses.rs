//! Fixed response bodies.

/// Body of `GET /version`.
pub const APP_VERSION: &str = "This is app version B!";

/// Home page body when no post has ever been accepted.
pub const NO_POSTS: &str = "No posts yet!";

/// Reported when the visitor record is missing right after it was written.
pub const VISITOR_COUNT_UNAVAILABLE: &str = "Unable to load visitor count";

/// Rendered in place of a platform identifier that is not set.
pub const UNSET_PLATFORM_VALUE: &str = "None";

/// Body of `GET /visitors`.
pub fn visitor_total(total: i64) -> String {
    format!("Total visitors: {total}")
}

/// Render an optional platform identifier the way the diagnostics routes
/// report it.
pub fn platform_value(value: Option<&str>) -> String {
    value.unwrap_or(UNSET_PLATFORM_VALUE).to_string()
}
