use serde::{Deserialize, Serialize};

/// Typed block inside a [`ToolResponse`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
	/// Plain text payload.
	Text {
		/// Rendered text.
		text: String,
	},
}

/// Envelope returned to tool callers: one text block plus an optional error flag.
///
/// Serializes as `{"content":[{"type":"text","text":"…"}],"isError":true}`, with `isError`
/// omitted on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolResponse {
	/// Content blocks; always exactly one text block.
	pub content: Vec<ContentBlock>,
	/// Set to `Some(true)` when the text describes a failure.
	#[serde(rename = "isError", default, skip_serializing_if = "Option::is_none")]
	pub is_error: Option<bool>,
}

impl ToolResponse {
	/// Successful response carrying `text`.
	pub fn text(text: impl Into<String>) -> Self {
		Self {
			content: vec![ContentBlock::Text { text: text.into() }],
			is_error: None,
		}
	}

	/// Error-flagged response carrying `text`.
	pub fn error(text: impl Into<String>) -> Self {
		Self {
			content: vec![ContentBlock::Text { text: text.into() }],
			is_error: Some(true),
		}
	}

	/// Whether the response is error-flagged.
	pub fn is_error(&self) -> bool {
		self.is_error.unwrap_or(false)
	}

	/// Text of the first block.
	pub fn first_text(&self) -> &str {
		match self.content.first() {
			Some(ContentBlock::Text { text }) => text,
			None => "",
		}
	}
}
