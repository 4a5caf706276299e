//! In-memory caching layer with per-entry expiry.
//!
//! Used for rendered documents (keyed by [`CacheKey`]) and for raw bundled-data reads. Entries
//! are immutable once written; they leave the cache by expiry, capacity eviction, or
//! [`TtlCache::clear`].

use std::collections::HashMap;
use std::fmt;
use std::sync::{Mutex, MutexGuard};
use std::time::{Duration, Instant};

use crate::options::AnalysisOptions;

/// Configuration for a [`TtlCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CacheConfig {
	/// Lifetime applied when [`TtlCache::set`] is called without an explicit TTL.
	pub default_ttl: Duration,
	/// Maximum number of live entries; the oldest entry is evicted on overflow.
	pub capacity: usize,
}

impl Default for CacheConfig {
	fn default() -> Self {
		Self {
			default_ttl: Duration::from_secs(600),
			capacity: 500,
		}
	}
}

impl CacheConfig {
	/// Create a configuration with the default TTL and capacity.
	pub fn new() -> Self {
		Self::default()
	}

	/// Set the default time-to-live.
	pub fn with_ttl(mut self, ttl: Duration) -> Self {
		self.default_ttl = ttl;
		self
	}

	/// Set the maximum number of entries.
	pub fn with_capacity(mut self, capacity: usize) -> Self {
		self.capacity = capacity.max(1);
		self
	}
}

#[derive(Debug)]
struct Entry<V> {
	value: V,
	inserted: Instant,
	expires: Instant,
}

/// Thread-safe key/value store with per-entry time-to-live.
///
/// Lookups are read-through only: concurrent misses on the same key are not coalesced.
#[derive(Debug)]
pub struct TtlCache<V> {
	config: CacheConfig,
	entries: Mutex<HashMap<String, Entry<V>>>,
}

impl<V: Clone> Default for TtlCache<V> {
	fn default() -> Self {
		Self::new(CacheConfig::default())
	}
}

impl<V: Clone> TtlCache<V> {
	/// Create an empty cache.
	pub fn new(config: CacheConfig) -> Self {
		Self {
			config,
			entries: Mutex::new(HashMap::new()),
		}
	}

	/// Configuration the cache was built with.
	pub fn config(&self) -> CacheConfig {
		self.config
	}

	/// Return a clone of the live value for `key`, dropping it if it has expired.
	pub fn get(&self, key: &str) -> Option<V> {
		let now = Instant::now();
		let mut entries = self.lock();
		let expired = match entries.get(key) {
			Some(entry) if entry.expires > now => return Some(entry.value.clone()),
			Some(_) => true,
			None => false,
		};
		if expired {
			entries.remove(key);
		}
		None
	}

	/// Store `value` under `key`, replacing any previous entry.
	pub fn set(&self, key: impl Into<String>, value: V, ttl: Option<Duration>) {
		let now = Instant::now();
		let ttl = ttl.unwrap_or(self.config.default_ttl);
		let key = key.into();
		let mut entries = self.lock();

		if !entries.contains_key(&key) && entries.len() >= self.config.capacity {
			entries.retain(|_, entry| entry.expires > now);
			if entries.len() >= self.config.capacity {
				let oldest = entries
					.iter()
					.min_by_key(|(_, entry)| entry.inserted)
					.map(|(key, _)| key.clone());
				if let Some(oldest) = oldest {
					entries.remove(&oldest);
				}
			}
		}

		entries.insert(
			key,
			Entry {
				value,
				inserted: now,
				expires: now + ttl,
			},
		);
	}

	/// Remove every entry.
	pub fn clear(&self) {
		self.lock().clear();
	}

	/// Number of stored entries, including ones that expired but were not yet collected.
	pub fn len(&self) -> usize {
		self.lock().len()
	}

	/// Whether the cache holds no entries.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	fn lock(&self) -> MutexGuard<'_, HashMap<String, Entry<V>>> {
		self.entries
			.lock()
			.unwrap_or_else(|poisoned| poisoned.into_inner())
	}
}

/// Parameters that affect the cache key for a rendered document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
	/// Canonical JSON API URL.
	pub url: String,
	/// Enabled analysis passes.
	pub options: AnalysisOptions,
}

impl CacheKey {
	/// Build a key for the given URL and option set.
	pub fn new(url: impl Into<String>, options: AnalysisOptions) -> Self {
		Self {
			url: url.into(),
			options,
		}
	}
}

impl fmt::Display for CacheKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "doc:{}#{}", self.url, self.options.key_fragment())
	}
}

/// Derive the string cache key for a URL and option set.
pub fn derive_key(url: &str, options: AnalysisOptions) -> String {
	CacheKey::new(url, options).to_string()
}
