// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use std::fmt::{self, Debug, Display};
use std::hash::Hash;
use std::sync::Arc;

use aws_types::region::Region;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;

/// A concurrent table of long-lived clients, one per region.
///
/// Clients are handed out as [`Arc`]s: every caller asking for the same region receives the very
/// same instance, so `Arc::ptr_eq` holds between them. Entries are never evicted implicitly; they
/// live as long as the cache does.
///
/// The key type defaults to [`Region`] but any cheap-to-clone hashable key works, which keeps the
/// table usable in tests without SDK types.
///
/// # Construction guarantees
///
/// [`get_or_try_insert_with`][Self::get_or_try_insert_with] has "compute if absent" semantics:
///
/// - For a given key the constructor runs at most once while the entry is absent, regardless of
///   how many threads or tasks race on it. Racing callers wait for the constructing one and then
///   observe its client.
/// - A constructor that fails leaves the key absent. The error goes to the caller that ran the
///   constructor and the next caller tries again.
///
/// The constructor runs while the shard holding the key is locked. It must be synchronous and must
/// not access the same cache, or it will deadlock.
pub struct RegionCache<C, K = Region> {
    clients: DashMap<K, Arc<C>>,
}

impl<C, K> RegionCache<C, K>
where
    K: Eq + Hash + Clone + Debug,
{
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self { clients: DashMap::new() }
    }

    /// Returns the client cached for `key`, constructing it with `init` if there is none.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `init`. Nothing is cached in that case.
    pub fn get_or_try_insert_with<E, F>(&self, key: &K, init: F) -> Result<Arc<C>, E>
    where
        F: FnOnce(&K) -> Result<C, E>,
        E: Display,
    {
        if let Some(client) = self.clients.get(key) {
            return Ok(Arc::clone(client.value()));
        }

        match self.clients.entry(key.clone()) {
            Entry::Occupied(entry) => Ok(Arc::clone(entry.get())),
            Entry::Vacant(entry) => match init(key) {
                Ok(client) => {
                    let client = Arc::new(client);
                    entry.insert(Arc::clone(&client));
                    tracing::event!(
                        name: "regional.client_created",
                        tracing::Level::DEBUG,
                        region = ?key,
                        "client created",
                    );
                    Ok(client)
                }
                Err(error) => {
                    tracing::event!(
                        name: "regional.client_failed",
                        tracing::Level::WARN,
                        region = ?key,
                        error = %error,
                        "client construction failed",
                    );
                    Err(error)
                }
            },
        }
    }

    /// Returns the client cached for `key` without constructing one.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<Arc<C>> {
        self.clients.get(key).map(|client| Arc::clone(client.value()))
    }

    /// Returns `true` if a client is cached for `key`.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.clients.contains_key(key)
    }

    /// Removes the client cached for `key` and returns it.
    ///
    /// Callers still holding the removed client keep using it; the next lookup for `key` builds a
    /// new one.
    pub fn remove(&self, key: &K) -> Option<Arc<C>> {
        self.clients.remove(key).map(|(_, client)| client)
    }

    /// Returns the keys that currently have a cached client, in no particular order.
    #[must_use]
    pub fn regions(&self) -> Vec<K> {
        self.clients.iter().map(|entry| entry.key().clone()).collect()
    }

    /// Returns the number of cached clients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.clients.len()
    }

    /// Returns `true` if no client has been cached yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

impl<C, K> Default for RegionCache<C, K>
where
    K: Eq + Hash + Clone + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<C, K> Debug for RegionCache<C, K>
where
    K: Eq + Hash + Clone + Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegionCache").field("regions", &self.regions()).finish()
    }
}
