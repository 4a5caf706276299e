//! Core library for appledoc, fetching Apple Developer Documentation and rendering it as text.
//!
//! The main entry point is [`DocFetcher::fetch_document`], which validates a documentation
//! URL, translates it to the JSON API, follows thin wrapper pages, renders the record as
//! markdown and caches the result. Rendering is exposed separately through
//! [`render_document`] so it can be used on records obtained elsewhere.

/// Optional analysis passes appended to rendered documents.
pub mod analysis;

/// Time-bounded in-memory caching.
pub mod cache;

/// Runtime settings and environment overrides.
pub mod config;

/// Error types shared across the crate.
pub mod error;

/// Fetch pipeline and HTTP transport.
pub mod fetch;

/// Canonical framework names and aliases.
pub mod frameworks;

/// Tracing subscriber setup.
pub mod logging;

/// Typed documentation records.
pub mod model;

/// Analysis option flags.
pub mod options;

/// Record rendering.
pub mod render;

/// Documentation URL validation and translation.
pub mod urls;

/// Bundled WWDC session data.
pub mod wwdc;

pub use crate::cache::{CacheConfig, CacheKey, TtlCache, derive_key};
pub use crate::config::Settings;
pub use crate::error::{DocError, Result};
pub use crate::fetch::{
	ContentBlock, DEFAULT_MAX_DEPTH, DocFetcher, HttpClient, JsonClient, ToolResponse,
};
pub use crate::frameworks::{
	FrameworkCategory, FrameworkInfo, framework_info, normalize_framework_name,
};
pub use crate::model::DocRecord;
pub use crate::options::AnalysisOptions;
pub use crate::render::{Renderer, render_document};
pub use crate::wwdc::WwdcDataSource;
