//! URL validation and translation between browsable pages and the JSON API.

use url::Url;

use crate::error::{DocError, Result};

/// Host serving both the documentation pages and the JSON API.
pub const TRUSTED_HOST: &str = "developer.apple.com";
/// Origin used to absolutize relative reference URLs.
pub const DEVELOPER_ORIGIN: &str = "https://developer.apple.com";
/// Public base for browsable documentation pages.
pub const DOCUMENTATION_BASE: &str = "https://developer.apple.com/documentation/";
/// Base for the JSON flavour of documentation pages.
pub const JSON_API_BASE: &str = "https://developer.apple.com/tutorials/data/documentation/";

const DOCUMENTATION_PREFIX: &str = "/documentation/";
const DOC_SCHEME: &str = "doc://";

/// Accept only well-formed URLs whose host is [`TRUSTED_HOST`].
pub fn is_valid_apple_developer_url(url: &str) -> bool {
	Url::parse(url)
		.ok()
		.and_then(|parsed| parsed.host_str().map(|host| host == TRUSTED_HOST))
		.unwrap_or(false)
}

/// Whether the URL already points at a JSON document.
pub fn is_json_api_url(url: &str) -> bool {
	match Url::parse(url) {
		Ok(parsed) => parsed.path().ends_with(".json"),
		Err(_) => false,
	}
}

/// Translate a documentation page URL into its JSON API equivalent.
///
/// `https://developer.apple.com/documentation/SwiftUI/View/` becomes
/// `https://developer.apple.com/tutorials/data/documentation/swiftui/view.json`. Returns `None`
/// when the path is not below `/documentation/`.
pub fn convert_to_json_api_url(page_url: &str) -> Option<String> {
	let parsed = Url::parse(page_url).ok()?;
	if parsed.host_str() != Some(TRUSTED_HOST) {
		return None;
	}
	let path = parsed.path().strip_prefix(DOCUMENTATION_PREFIX)?;
	let path = path.trim_end_matches('/');
	if path.is_empty() {
		return None;
	}
	Some(format!("{JSON_API_BASE}{}.json", path.to_lowercase()))
}

/// Rewrite a relative reference URL into a JSON API URL suitable for recursion.
///
/// A leading `/documentation/` (or a single leading `/`) is removed. Paths containing a scheme
/// separator or parent traversal are rejected.
pub fn reference_json_url(reference_url: &str) -> Result<String> {
	let path = reference_url
		.strip_prefix(DOCUMENTATION_PREFIX)
		.or_else(|| reference_url.strip_prefix('/'))
		.unwrap_or(reference_url);
	if path.contains("://") || path.contains("..") {
		return Err(DocError::invalid(format!("Unsafe reference path: {path}")));
	}
	Ok(format!("{JSON_API_BASE}{path}.json"))
}

/// Absolutize a reference URL against [`DEVELOPER_ORIGIN`]; missing URLs become `#`.
pub fn absolutize(url: Option<&str>) -> String {
	match url {
		Some(url) if url.starts_with("http") => url.to_string(),
		Some(url) => format!("{DEVELOPER_ORIGIN}{url}"),
		None => "#".to_string(),
	}
}

/// Public page URL for a `doc://<bundle>/documentation/<path>` identifier.
pub fn topic_identifier_url(identifier: &str) -> String {
	let path = identifier
		.strip_prefix(DOC_SCHEME)
		.and_then(|rest| {
			rest.find(DOCUMENTATION_PREFIX)
				.map(|at| &rest[at + DOCUMENTATION_PREFIX.len()..])
		})
		.unwrap_or(identifier);
	format!("{DOCUMENTATION_BASE}{path}")
}

/// Last `/`-separated segment of an identifier.
pub fn last_path_segment(identifier: &str) -> &str {
	identifier.rsplit('/').next().unwrap_or(identifier)
}
