use chrono::{DateTime, Utc};

pub type Timestamp = DateTime<Utc>;

/// Format used for the `submittedAt` field of a stored post.
pub const SUBMITTED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Format used instead when the time falls on a whole second.
pub const SUBMITTED_AT_WHOLE_SECOND_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Render a timestamp the way posts store it, e.g. `2024-03-01 09:15:02.004100`.
///
/// The fraction is left out entirely when the microsecond part is zero.
pub fn format_submitted_at(ts: Timestamp) -> String {
    let format = if ts.timestamp_subsec_micros() == 0 {
        SUBMITTED_AT_WHOLE_SECOND_FORMAT
    } else {
        SUBMITTED_AT_FORMAT
    };
    ts.format(format).to_string()
}

/// Current UTC time rendered for a new post.
pub fn submitted_at_now() -> String {
    format_submitted_at(Utc::now())
}
