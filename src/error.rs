use thiserror::Error;

/// Aggregate errors produced while fetching, loading, or rendering documentation.
#[derive(Debug, Error)]
pub enum DocError {
	/// Rejected caller input: untrusted host, untranslatable URL, unsafe reference path or
	/// malformed identifiers for bundled data.
	#[error("{0}")]
	InvalidInput(String),
	/// Network, HTTP status, or response decoding failure reported by the HTTP client.
	#[error("{0}")]
	Upstream(String),
	/// Bundled data could not be located or decoded.
	#[error("{0}")]
	Data(String),
	/// Failed to perform IO operations.
	#[error(transparent)]
	Io(#[from] std::io::Error),
	/// Failed to encode or decode JSON.
	#[error(transparent)]
	Serialization(#[from] serde_json::Error),
}

impl DocError {
	/// Shorthand for [`DocError::InvalidInput`].
	pub fn invalid(message: impl Into<String>) -> Self {
		Self::InvalidInput(message.into())
	}

	/// Shorthand for [`DocError::Upstream`].
	pub fn upstream(message: impl Into<String>) -> Self {
		Self::Upstream(message.into())
	}

	/// Whether this error was caused by caller input rather than a collaborator failure.
	pub fn is_invalid_input(&self) -> bool {
		matches!(self, Self::InvalidInput(_))
	}
}

/// Result type returned by the appledoc library.
pub type Result<T> = std::result::Result<T, DocError>;
