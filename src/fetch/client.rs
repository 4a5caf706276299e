use std::io::Read;
use std::time::Duration;

use serde::de::DeserializeOwned;
use ureq::{Agent, http};

use crate::error::{DocError, Result};

/// User agent sent with every documentation request.
pub const USER_AGENT: &str = concat!("appledoc/", env!("CARGO_PKG_VERSION"));

/// Transport used by the fetcher to retrieve JSON documents.
///
/// Implementations report non-2xx responses, transport failures and undecodable bodies as
/// [`DocError::Upstream`] with a human-readable message.
pub trait JsonClient {
	/// GET `url` and decode the body as JSON.
	fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T>;
}

impl<C: JsonClient + ?Sized> JsonClient for &C {
	fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
		(**self).get_json(url)
	}
}

/// Blocking HTTP client backed by `ureq`.
#[derive(Clone)]
pub struct HttpClient {
	agent: Agent,
}

impl Default for HttpClient {
	fn default() -> Self {
		Self::new(Duration::from_secs(30))
	}
}

impl HttpClient {
	/// Create a client whose requests fail after `timeout`.
	pub fn new(timeout: Duration) -> Self {
		let agent: Agent = Agent::config_builder()
			.timeout_global(Some(timeout))
			.build()
			.into();
		Self { agent }
	}

	fn request(&self, url: &str) -> Result<http::Response<ureq::Body>> {
		self.agent
			.get(url)
			.header("User-Agent", USER_AGENT)
			.header("Accept", "application/json")
			.call()
			.map_err(|err| match err {
				ureq::Error::StatusCode(404) => {
					DocError::upstream(format!("Documentation not found (404) at {url}"))
				}
				ureq::Error::StatusCode(code) => {
					DocError::upstream(format!("HTTP {code} while fetching {url}"))
				}
				err => DocError::upstream(format!("Failed to reach {url}: {err}")),
			})
	}
}

impl JsonClient for HttpClient {
	fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
		let mut response = self.request(url)?;

		let mut body = String::new();
		response
			.body_mut()
			.as_reader()
			.read_to_string(&mut body)
			.map_err(|err| DocError::upstream(format!("Failed to read response from {url}: {err}")))?;

		serde_json::from_str(&body)
			.map_err(|err| DocError::upstream(format!("Failed to parse JSON from {url}: {err}")))
	}
}
