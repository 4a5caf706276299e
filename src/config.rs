//! Runtime settings with environment overrides.

use std::path::PathBuf;
use std::time::Duration;
use std::{env, str::FromStr};

use tracing::warn;

use crate::cache::CacheConfig;
use crate::error::{DocError, Result};
use crate::fetch::DEFAULT_MAX_DEPTH;

/// Environment variable overriding the rendered-document TTL, in seconds.
pub const CACHE_TTL_ENV: &str = "APPLEDOC_CACHE_TTL_SECS";
/// Environment variable overriding the response cache capacity.
pub const CACHE_CAPACITY_ENV: &str = "APPLEDOC_CACHE_CAPACITY";
/// Environment variable overriding the HTTP timeout, in seconds.
pub const HTTP_TIMEOUT_ENV: &str = "APPLEDOC_HTTP_TIMEOUT_SECS";
/// Environment variable pointing at the bundled WWDC data.
pub const DATA_DIR_ENV: &str = "APPLEDOC_DATA_DIR";

/// Settings shared by the fetcher, the bundled data source and the CLI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
	/// Lifetime of rendered documents in the response cache.
	pub cache_ttl: Duration,
	/// Maximum number of cached responses.
	pub cache_capacity: usize,
	/// Global timeout applied to each HTTP request.
	pub http_timeout: Duration,
	/// Lifetime of cached bundled-data reads.
	pub data_ttl: Duration,
	/// Root of the bundled WWDC data. If None, uses the platform data directory.
	pub data_dir: Option<PathBuf>,
	/// Recursion depth used when a caller does not pick one.
	pub max_depth: u32,
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			cache_ttl: Duration::from_secs(600),
			cache_capacity: 500,
			http_timeout: Duration::from_secs(30),
			data_ttl: Duration::from_secs(30 * 60),
			data_dir: None,
			max_depth: DEFAULT_MAX_DEPTH,
		}
	}
}

impl Settings {
	/// Default settings.
	pub fn new() -> Self {
		Self::default()
	}

	/// Defaults overridden by `APPLEDOC_*` environment variables.
	pub fn from_env() -> Self {
		Self::from_lookup(|name| env::var(name).ok())
	}

	/// Defaults overridden by whatever `lookup` returns for each `APPLEDOC_*` variable.
	///
	/// Values that fail to parse are ignored with a warning.
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
		let mut settings = Self::default();
		if let Some(secs) = parse_var::<u64>(&lookup, CACHE_TTL_ENV) {
			settings.cache_ttl = Duration::from_secs(secs);
		}
		if let Some(capacity) = parse_var::<usize>(&lookup, CACHE_CAPACITY_ENV) {
			settings = settings.with_cache_capacity(capacity);
		}
		if let Some(secs) = parse_var::<u64>(&lookup, HTTP_TIMEOUT_ENV) {
			settings.http_timeout = Duration::from_secs(secs);
		}
		if let Some(dir) = lookup(DATA_DIR_ENV).filter(|dir| !dir.trim().is_empty()) {
			settings.data_dir = Some(PathBuf::from(dir));
		}
		settings
	}

	/// Set the rendered-document TTL.
	pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
		self.cache_ttl = ttl;
		self
	}

	/// Set the response cache capacity.
	pub fn with_cache_capacity(mut self, capacity: usize) -> Self {
		self.cache_capacity = capacity.max(1);
		self
	}

	/// Set the HTTP timeout.
	pub fn with_http_timeout(mut self, timeout: Duration) -> Self {
		self.http_timeout = timeout;
		self
	}

	/// Set a custom bundled-data directory.
	pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.data_dir = Some(dir.into());
		self
	}

	/// Set the default recursion depth.
	pub fn with_max_depth(mut self, depth: u32) -> Self {
		self.max_depth = depth;
		self
	}

	/// Cache configuration for rendered documents.
	pub fn cache_config(&self) -> CacheConfig {
		CacheConfig::new()
			.with_ttl(self.cache_ttl)
			.with_capacity(self.cache_capacity)
	}

	/// Bundled-data directory, using the platform default if not specified.
	pub fn resolve_data_dir(&self) -> Result<PathBuf> {
		if let Some(ref dir) = self.data_dir {
			return Ok(dir.clone());
		}

		let data_base = dirs::data_dir()
			.ok_or_else(|| DocError::Data("Could not determine data directory".to_string()))?;

		Ok(data_base.join("appledoc").join("wwdc"))
	}
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
	let raw = lookup(name)?;
	match raw.trim().parse() {
		Ok(value) => Some(value),
		Err(_) => {
			warn!("Ignoring invalid value for {name}: {raw}");
			None
		}
	}
}
