use tokio::sync::watch;

use crate::query::QueryKey;

/// Shared cache of query generations.
///
/// Flows holding data for a key remember the generation they loaded it at.
/// `invalidate` bumps the generation, which marks every holder stale; they
/// discard their data and refetch on next access, or immediately when
/// subscribed.
pub trait QueryCachePort: Send + Sync {
    /// Mark the collection behind `key` stale and notify subscribers.
    fn invalidate(&self, key: &QueryKey);

    /// Current generation of `key`. Starts at 0 and only increases.
    fn generation(&self, key: &QueryKey) -> u64;

    /// Receiver that observes every generation change of `key`.
    fn subscribe(&self, key: &QueryKey) -> watch::Receiver<u64>;
}
