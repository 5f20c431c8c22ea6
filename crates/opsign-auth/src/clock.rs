//! Timestamp sources.
//!
//! The signer never reads the clock itself; callers hand it a [`Timestamp`]
//! or a [`TimestampSource`]. Each source returns immediately, and a new
//! timestamp always yields a new signature.

use std::time::{Duration, Instant};

use chrono::Utc;
use opsign_core::Timestamp;
use parking_lot::Mutex;
use tracing::trace;

/// Supplies the timestamp to sign a request with.
pub trait TimestampSource: Send + Sync {
    /// The timestamp for the next request.
    fn timestamp(&self) -> Timestamp;
}

/// Reads the system clock, rendering ISO-8601 UTC at seconds precision.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimestampSource for SystemClock {
    fn timestamp(&self) -> Timestamp {
        Timestamp::from_datetime(Utc::now())
    }
}

/// Always returns the same timestamp. Useful for reproducible fixtures.
#[derive(Debug, Clone)]
pub struct FixedTimestamp(Timestamp);

impl FixedTimestamp {
    /// Create a source that always yields `timestamp`.
    #[must_use]
    pub fn new(timestamp: Timestamp) -> Self {
        Self(timestamp)
    }
}

impl TimestampSource for FixedTimestamp {
    fn timestamp(&self) -> Timestamp {
        self.0.clone()
    }
}

/// Memoizes another source for a fixed interval.
///
/// Requests signed within the same interval share a timestamp; the first call
/// after the interval elapses refreshes it from the inner source.
#[derive(Debug)]
pub struct CachedTimestamp<S> {
    inner: S,
    ttl: Duration,
    cached: Mutex<Option<(Instant, Timestamp)>>,
}

impl<S: TimestampSource> CachedTimestamp<S> {
    /// Cache timestamps from `inner` for `ttl`.
    pub fn new(inner: S, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            cached: Mutex::new(None),
        }
    }

    /// Drop the cached value so the next call refreshes.
    pub fn invalidate(&self) {
        *self.cached.lock() = None;
    }
}

impl<S: TimestampSource> TimestampSource for CachedTimestamp<S> {
    fn timestamp(&self) -> Timestamp {
        let mut cached = self.cached.lock();
        let now = Instant::now();
        if let Some((fetched_at, timestamp)) = cached.as_ref() {
            if now.duration_since(*fetched_at) < self.ttl {
                return timestamp.clone();
            }
        }

        let fresh = self.inner.timestamp();
        trace!(timestamp = %fresh, ttl = ?self.ttl, "Refreshed cached timestamp");
        *cached = Some((now, fresh.clone()));
        fresh
    }
}
