//! Timestamp-based identifiers for configuration records.
//!
//! Every record created in the editor gets an id equal to its creation time in
//! Unix milliseconds.  That keeps ids readable ("created at ...") and mostly
//! ordered, but two records created inside the same millisecond would
//! collide.  [`RecordIdGenerator`] therefore never hands out a value that is
//! not strictly greater than the previous one:
//!
//! ```text
//! next = max(now_ms, last + 1)
//! ```
//!
//! Ids are unique within one generator (one editing session).  They are not
//! checked against ids loaded from the backend.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

/// Identifier of a PLC or database connection record.
///
/// Serialized as a bare JSON integer.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl RecordId {
    /// Returns the raw millisecond value.
    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for RecordId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

/// Source of "now" in Unix milliseconds.
type Clock = Box<dyn Fn() -> u64 + Send + Sync>;

/// Hands out strictly increasing, timestamp-based [`RecordId`]s.
///
/// # Examples
///
/// ```rust
/// use plc_config_core::RecordIdGenerator;
///
/// let ids = RecordIdGenerator::new();
/// let a = ids.next_id();
/// let b = ids.next_id();
/// assert!(b > a);
/// ```
pub struct RecordIdGenerator {
    last: AtomicU64,
    clock: Clock,
}

impl RecordIdGenerator {
    /// Creates a generator backed by the system clock.
    pub fn new() -> Self {
        Self::with_clock(system_millis)
    }

    /// Creates a generator backed by a custom clock.
    ///
    /// Used by tests to freeze time.
    pub fn with_clock<F>(clock: F) -> Self
    where
        F: Fn() -> u64 + Send + Sync + 'static,
    {
        Self {
            last: AtomicU64::new(0),
            clock: Box::new(clock),
        }
    }

    /// Returns a fresh id, strictly greater than every id returned before.
    pub fn next_id(&self) -> RecordId {
        let now = (self.clock)();
        // `fetch_update` retries the closure until the compare-and-swap wins,
        // so concurrent callers still observe distinct values.
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last.saturating_add(1)))
            })
            .unwrap_or_else(|current| current);
        RecordId(now.max(previous.saturating_add(1)))
    }
}

impl Default for RecordIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RecordIdGenerator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordIdGenerator")
            .field("last", &self.last.load(Ordering::Relaxed))
            .finish_non_exhaustive()
    }
}

/// Current time in Unix milliseconds; 0 if the clock is before the epoch.
fn system_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
