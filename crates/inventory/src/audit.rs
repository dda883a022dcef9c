//! Audit entries for successful stock additions.
//!
//! Held in a caller-supplied ordered sequence; observational only, never
//! persisted.

use chrono::{DateTime, Utc};

/// Ordered sequence of audit entries, owned by the caller.
pub type AuditLog = Vec<AuditEntry>;

/// A timestamped text record of one successful add.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditEntry {
    pub recorded_at: DateTime<Utc>,
    pub message: String,
}

impl AuditEntry {
    pub fn added(recorded_at: DateTime<Utc>, item: &str, qty: i64) -> Self {
        Self {
            recorded_at,
            message: format!("Added {qty} of {item}"),
        }
    }
}

impl core::fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}: {}", self.recorded_at, self.message)
    }
}
