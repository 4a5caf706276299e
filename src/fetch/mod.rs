//! Fetch pipeline: validate, translate, consult the cache, retrieve, follow, render.

/// HTTP transport abstraction and the `ureq`-backed implementation.
pub mod client;
/// Tool response envelope.
pub mod response;

use std::sync::Arc;

use tracing::{debug, error, info, warn};

pub use self::client::{HttpClient, JsonClient};
pub use self::response::{ContentBlock, ToolResponse};
use crate::cache::{TtlCache, derive_key};
use crate::config::Settings;
use crate::error::{DocError, Result};
use crate::model::DocRecord;
use crate::options::AnalysisOptions;
use crate::render::render_document;
use crate::urls::{
	convert_to_json_api_url, is_json_api_url, is_valid_apple_developer_url, reference_json_url,
};

/// Recursion depth used when the caller does not specify one.
pub const DEFAULT_MAX_DEPTH: u32 = 2;

/// Retrieves documentation records and renders them to Markdown.
///
/// The fetcher owns its transport and shares the response cache through an [`Arc`], so several
/// fetchers (or threads) can reuse the same cache.
pub struct DocFetcher<C = HttpClient> {
	client: C,
	cache: Arc<TtlCache<ToolResponse>>,
}

impl Default for DocFetcher<HttpClient> {
	fn default() -> Self {
		Self::new()
	}
}

impl DocFetcher<HttpClient> {
	/// Fetcher with a default HTTP client and a private cache.
	pub fn new() -> Self {
		Self::with_client(HttpClient::default())
	}

	/// Fetcher configured from [`Settings`].
	pub fn from_settings(settings: &Settings) -> Self {
		Self::with_client(HttpClient::new(settings.http_timeout))
			.with_cache(Arc::new(TtlCache::new(settings.cache_config())))
	}
}

impl<C: JsonClient> DocFetcher<C> {
	/// Fetcher using `client` for all retrievals and a private default cache.
	pub fn with_client(client: C) -> Self {
		Self {
			client,
			cache: Arc::new(TtlCache::default()),
		}
	}

	/// Replace the response cache with a shared one.
	pub fn with_cache(mut self, cache: Arc<TtlCache<ToolResponse>>) -> Self {
		self.cache = cache;
		self
	}

	/// Shared response cache.
	pub fn cache(&self) -> &Arc<TtlCache<ToolResponse>> {
		&self.cache
	}

	/// Transport used for retrievals.
	pub fn client(&self) -> &C {
		&self.client
	}

	/// Fetch and render the documentation at `url`.
	///
	/// Never fails: every error is reported as an error-flagged [`ToolResponse`] that points the
	/// reader at the original page.
	pub fn fetch_document(
		&self,
		url: &str,
		options: AnalysisOptions,
		max_depth: u32,
	) -> ToolResponse {
		match self.try_fetch(url, options, max_depth) {
			Ok(response) => response,
			Err(err) => {
				error!("Failed to get Apple doc content for {url}: {err}");
				ToolResponse::error(format!(
					"Error: Failed to get Apple doc content: {err}\n\nPlease try accessing the documentation directly at: {url}"
				))
			}
		}
	}

	fn try_fetch(
		&self,
		url: &str,
		options: AnalysisOptions,
		max_depth: u32,
	) -> Result<ToolResponse> {
		if !is_valid_apple_developer_url(url) {
			return Err(DocError::invalid("URL must be from developer.apple.com"));
		}

		let json_url = if is_json_api_url(url) {
			url.to_string()
		} else {
			convert_to_json_api_url(url)
				.ok_or_else(|| DocError::invalid("Invalid Apple Developer Documentation URL"))?
		};

		let key = derive_key(&json_url, options);
		if let Some(cached) = self.cache.get(&key) {
			debug!("Cache hit for: {url}");
			return Ok(cached);
		}

		info!("Fetching Apple doc JSON from: {json_url}");
		let record: DocRecord = self.client.get_json(&json_url)?;

		if let Some(response) = self.follow_first_reference(&record, options, max_depth)? {
			self.cache.set(key, response.clone(), None);
			return Ok(response);
		}

		let response = ToolResponse::text(render_document(&record, url, options));
		self.cache.set(key, response.clone(), None);
		Ok(response)
	}

	/// Records without primary content are often thin wrappers around a single page; descend
	/// into the first linked reference while depth remains.
	fn follow_first_reference(
		&self,
		record: &DocRecord,
		options: AnalysisOptions,
		max_depth: u32,
	) -> Result<Option<ToolResponse>> {
		if max_depth == 0 || record.has_primary_content() || record.references.is_empty() {
			return Ok(None);
		}
		let Some((identifier, reference)) = record.first_linked_reference() else {
			return Ok(None);
		};
		let Some(path) = reference.url.as_deref() else {
			return Ok(None);
		};

		match reference_json_url(path) {
			Ok(next) => {
				debug!("Following reference {identifier} to {next}");
				self.try_fetch(&next, options, max_depth - 1).map(Some)
			}
			Err(_) => {
				warn!("Skipping suspicious reference path: {path}");
				Ok(None)
			}
		}
	}
}
