//! The global visit counter record.

use serde::{Deserialize, Serialize};

/// Stored under [`postboard_core::keys::VISITORS`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorCounter {
    pub total: i64,
}

impl VisitorCounter {
    /// The counter as it is first written: zero visits.
    pub fn initial() -> Self {
        Self::default()
    }

    /// The counter after one more visit.
    pub fn incremented(self) -> Self {
        Self {
            total: self.total + 1,
        }
    }
}
