//! Session-scoped memoization of metadata lookups.
//!
//! The first request for a key starts the lookup and parks a shared future in
//! the map; every later request for that exact key awaits the same future.
//! Keys are raw input strings, not normalized. Entries are never evicted.

use std::collections::HashMap;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt, Shared};
use parking_lot::Mutex;

use super::domain::SongMetadata;
use super::traits::MetadataLookup;

type PendingLookup = Shared<BoxFuture<'static, Option<SongMetadata>>>;

/// At-most-once-per-key cache in front of a [`MetadataLookup`].
pub struct MetadataCache<L> {
    lookup: Arc<L>,
    entries: Mutex<HashMap<String, PendingLookup>>,
}

impl<L: MetadataLookup + 'static> MetadataCache<L> {
    /// Wrap a lookup implementation
    pub fn new(lookup: Arc<L>) -> Self {
        Self {
            lookup,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Get metadata for `key`, starting the lookup only if nobody has yet.
    pub async fn get(&self, key: &str) -> Option<SongMetadata> {
        let pending = {
            let mut entries = self.entries.lock();
            entries
                .entry(key.to_string())
                .or_insert_with(|| {
                    tracing::trace!("Starting metadata lookup for {:?}", key);
                    let lookup = Arc::clone(&self.lookup);
                    let key = key.to_string();
                    async move { lookup.lookup(&key).await }.boxed().shared()
                })
                .clone()
        };

        pending.await
    }

    /// Get metadata for several keys, one after another.
    pub async fn get_many<S: AsRef<str>>(&self, keys: &[S]) -> HashMap<String, Option<SongMetadata>> {
        let mut results = HashMap::with_capacity(keys.len());
        for key in keys {
            let key = key.as_ref();
            let metadata = self.get(key).await;
            results.insert(key.to_string(), metadata);
        }
        results
    }

    /// Number of keys ever requested
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    /// Whether no key has been requested yet
    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
