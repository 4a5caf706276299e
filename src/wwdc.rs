//! Read-only access to bundled WWDC session data.
//!
//! The data root holds `index.json`, `all-videos.json`, `by-topic/<id>/index.json`,
//! `by-year/<year>/index.json` and `videos/<year>-<id>.json`. Reads go through a short-lived
//! in-memory cache keyed `wwdc:<relative path>`.

use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::Duration;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use tracing::{debug, error, info};

use crate::cache::{CacheConfig, TtlCache};
use crate::config::Settings;
use crate::error::{DocError, Result};

static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{4}$").unwrap());
static VIDEO_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());
static TOPIC_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[a-zA-Z0-9-]+$").unwrap());

/// Loader for the bundled WWDC data set.
#[derive(Debug)]
pub struct WwdcDataSource {
	root: PathBuf,
	ttl: Duration,
	cache: TtlCache<String>,
}

impl WwdcDataSource {
	/// Data source rooted at `root`, caching reads for 30 minutes.
	pub fn new(root: impl Into<PathBuf>) -> Self {
		let ttl = Duration::from_secs(30 * 60);
		Self {
			root: root.into(),
			ttl,
			cache: TtlCache::new(CacheConfig::new().with_ttl(ttl)),
		}
	}

	/// Data source rooted at the configured (or platform default) data directory.
	pub fn from_settings(settings: &Settings) -> Result<Self> {
		Ok(Self::new(settings.resolve_data_dir()?).with_ttl(settings.data_ttl))
	}

	/// Set how long raw reads stay cached.
	pub fn with_ttl(mut self, ttl: Duration) -> Self {
		self.ttl = ttl;
		self.cache = TtlCache::new(CacheConfig::new().with_ttl(ttl));
		self
	}

	/// Root directory of the data set.
	pub fn root(&self) -> &Path {
		&self.root
	}

	/// Join `relative` onto the data root, refusing anything that would leave it.
	///
	/// The check is lexical and happens before the file system is touched.
	pub fn resolve(&self, relative: &str) -> Result<PathBuf> {
		let mut resolved = self.root.clone();
		let mut depth = 0usize;
		for component in Path::new(relative).components() {
			match component {
				Component::Normal(part) => {
					resolved.push(part);
					depth += 1;
				}
				Component::CurDir => {}
				Component::ParentDir if depth > 0 => {
					resolved.pop();
					depth -= 1;
				}
				Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
					return Err(DocError::invalid("Invalid data path: access denied"));
				}
			}
		}
		Ok(resolved)
	}

	/// Read a file below the data root, consulting the cache first.
	pub fn read(&self, relative: &str) -> Result<String> {
		let key = format!("wwdc:{relative}");
		if let Some(cached) = self.cache.get(&key) {
			debug!("Cache hit: {relative}");
			return Ok(cached);
		}

		let path = self.resolve(relative)?;
		let content = fs::read_to_string(&path).map_err(|err| {
			error!("Failed to read bundled data: {relative}: {err}");
			DocError::Data(format!("Failed to load WWDC data from {relative}: {err}"))
		})?;
		debug!("Loaded bundled data: {relative}");

		self.cache.set(key, content.clone(), Some(self.ttl));
		Ok(content)
	}

	fn load<T: DeserializeOwned>(
		&self,
		relative: &str,
		failure: impl FnOnce() -> String,
	) -> Result<T> {
		let parsed = self
			.read(relative)
			.and_then(|content| serde_json::from_str(&content).map_err(DocError::from));
		parsed.map_err(|err| {
			error!("Failed to load {relative}: {err}");
			DocError::Data(failure())
		})
	}

	/// Load `index.json`.
	pub fn load_global_metadata<T: DeserializeOwned>(&self) -> Result<T> {
		self.load("index.json", || {
			"Failed to load WWDC metadata. Please ensure the package is properly installed.".to_string()
		})
	}

	/// Load the index for one topic.
	pub fn load_topic_index<T: DeserializeOwned>(&self, topic_id: &str) -> Result<T> {
		validate_topic_id(topic_id)?;
		self.load(&format!("by-topic/{topic_id}/index.json"), || {
			format!("Topic not found: {topic_id}")
		})
	}

	/// Load the index for one year.
	pub fn load_year_index<T: DeserializeOwned>(&self, year: &str) -> Result<T> {
		validate_year(year)?;
		self.load(&format!("by-year/{year}/index.json"), || format!("Year not found: {year}"))
	}

	/// Load a single session.
	pub fn load_video<T: DeserializeOwned>(&self, year: &str, video_id: &str) -> Result<T> {
		validate_year(year)?;
		validate_video_id(video_id)?;
		self.load(&format!("videos/{year}-{video_id}.json"), || {
			format!("Video not found: {year}-{video_id}")
		})
	}

	/// Load the flat list of every session.
	pub fn load_all_videos<T: DeserializeOwned>(&self) -> Result<T> {
		self.load("all-videos.json", || "Failed to load WWDC video list".to_string())
	}

	/// Drop every cached read.
	pub fn clear_cache(&self) {
		self.cache.clear();
		info!("WWDC data cache cleared");
	}

	/// Whether the data root and its `index.json` exist.
	pub fn is_data_available(&self) -> bool {
		self.root.is_dir() && self.root.join("index.json").is_file()
	}
}

fn validate_year(year: &str) -> Result<()> {
	if YEAR.is_match(year) {
		Ok(())
	} else {
		Err(DocError::invalid(format!("Invalid year format: {year}")))
	}
}

fn validate_video_id(video_id: &str) -> Result<()> {
	if VIDEO_ID.is_match(video_id) {
		Ok(())
	} else {
		Err(DocError::invalid(format!("Invalid video ID format: {video_id}")))
	}
}

fn validate_topic_id(topic_id: &str) -> Result<()> {
	if TOPIC_ID.is_match(topic_id) {
		Ok(())
	} else {
		Err(DocError::invalid(format!("Invalid topic ID format: {topic_id}")))
	}
}
