//! In-memory freshness cache for the single submissions resource.
//!
//! One slot, process lifetime only. A stale entry is ignored by reads and
//! simply overwritten by the next successful fetch; nothing is evicted.

use chrono::{DateTime, Duration, Utc};
use tokio::sync::RwLock;

use crate::edgar::filing::FilingsResult;

/// How long a fetched result stays eligible for reuse (1 hour).
pub const CACHE_TTL_MS: i64 = 3_600_000;

#[derive(Debug, Clone)]
struct CachedResult {
    value: FilingsResult,
    stored_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct FreshnessCache {
    slot: RwLock<Option<CachedResult>>,
    ttl: Duration,
}

impl FreshnessCache {
    pub fn new() -> Self {
        Self::with_ttl(Duration::milliseconds(CACHE_TTL_MS))
    }

    /// Custom TTL, for tests that need immediate expiry.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            slot: RwLock::new(None),
            ttl,
        }
    }

    /// Returns the stored result iff one exists and is younger than the TTL.
    /// Stale entries are left in place, not cleared.
    pub async fn try_get(&self) -> Option<FilingsResult> {
        let slot = self.slot.read().await;
        match slot.as_ref() {
            Some(entry) if Utc::now() - entry.stored_at < self.ttl => Some(entry.value.clone()),
            _ => None,
        }
    }

    /// Unconditionally overwrites the slot and resets its age.
    pub async fn store(&self, value: FilingsResult) {
        let mut slot = self.slot.write().await;
        *slot = Some(CachedResult {
            value,
            stored_at: Utc::now(),
        });
    }
}

impl Default for FreshnessCache {
    fn default() -> Self {
        Self::new()
    }
}
