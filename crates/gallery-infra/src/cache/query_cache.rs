//! In-memory query cache keyed by collection name.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use gallery_core::ports::QueryCachePort;
use gallery_core::QueryKey;
use tokio::sync::watch;
use tracing::debug;

/// Process-local cache of query generations.
///
/// Each key owns a watch channel whose value is the key's generation.
/// Channels are created lazily, so unknown keys report generation 0.
#[derive(Default)]
pub struct InMemoryQueryCache {
    channels: Mutex<HashMap<QueryKey, watch::Sender<u64>>>,
}

impl InMemoryQueryCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn channels(&self) -> MutexGuard<'_, HashMap<QueryKey, watch::Sender<u64>>> {
        // A panic while holding the lock cannot leave a generation half-written.
        self.channels.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl QueryCachePort for InMemoryQueryCache {
    fn invalidate(&self, key: &QueryKey) {
        let mut channels = self.channels();
        let sender = channels
            .entry(key.clone())
            .or_insert_with(|| watch::channel(0).0);
        sender.send_modify(|generation| *generation += 1);
        debug!(key = %key, generation = *sender.borrow(), "Invalidated query");
    }

    fn generation(&self, key: &QueryKey) -> u64 {
        self.channels()
            .get(key)
            .map(|sender| *sender.borrow())
            .unwrap_or(0)
    }

    fn subscribe(&self, key: &QueryKey) -> watch::Receiver<u64> {
        self.channels()
            .entry(key.clone())
            .or_insert_with(|| watch::channel(0).0)
            .subscribe()
    }
}
