//! Shared helpers for integration tests: a recording JSON client and record fixtures.
#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::HashMap;

use appledoc::{DocError, JsonClient, Result};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};

/// Base of the JSON API, for building expected request URLs.
pub const JSON_BASE: &str = "https://developer.apple.com/tutorials/data/documentation/";

/// JSON API URL for a documentation path such as `uikit/uiview`.
pub fn json_url(path: &str) -> String {
	format!("{JSON_BASE}{path}.json")
}

/// In-memory stand-in for the HTTP client that records every request.
#[derive(Default)]
pub struct MockClient {
	documents: HashMap<String, Value>,
	calls: RefCell<Vec<String>>,
}

impl MockClient {
	/// Empty client; every request fails with a 404-style error.
	pub fn new() -> Self {
		Self::default()
	}

	/// Serve `document` for `url`.
	pub fn with_document(mut self, url: impl Into<String>, document: Value) -> Self {
		self.documents.insert(url.into(), document);
		self
	}

	/// URLs requested so far, in order.
	pub fn calls(&self) -> Vec<String> {
		self.calls.borrow().clone()
	}

	/// Number of requests made so far.
	pub fn call_count(&self) -> usize {
		self.calls.borrow().len()
	}
}

impl JsonClient for MockClient {
	fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
		self.calls.borrow_mut().push(url.to_string());
		let document = self
			.documents
			.get(url)
			.cloned()
			.ok_or_else(|| DocError::upstream(format!("Documentation not found (404) at {url}")))?;
		serde_json::from_value(document).map_err(|err| DocError::upstream(err.to_string()))
	}
}

/// Record with no primary content whose only reference points at `path`.
pub fn wrapper_record(title: &str, path: &str) -> Value {
	json!({
		"metadata": { "title": title },
		"references": {
			"doc://com.apple.documentation/documentation/next": {
				"title": "Next",
				"url": format!("/documentation/{path}")
			}
		}
	})
}

/// A symbol page for `UIView`.
pub fn symbol_record() -> Value {
	json!({
		"kind": "symbol",
		"metadata": {
			"title": "UIView",
			"roleHeading": "Class",
			"symbolKind": "cl",
			"modules": [{ "name": "UIKit" }],
			"platforms": [
				{ "name": "iOS", "introducedAt": "2.0" },
				{ "name": "Mac Catalyst", "introducedAt": "13.1", "beta": true }
			]
		},
		"abstract": [{ "type": "text", "text": "An object that manages the content for a rectangular area on the screen." }],
		"primaryContentSections": [
			{
				"kind": "declarations",
				"declarations": [{
					"tokens": [
						{ "kind": "keyword", "text": "@MainActor" },
						{ "kind": "text", "text": " " },
						{ "kind": "keyword", "text": "class" },
						{ "kind": "text", "text": " " },
						{ "kind": "identifier", "text": "UIView" }
					]
				}]
			},
			{
				"kind": "content",
				"content": [
					{ "type": "heading", "level": 2, "text": "Overview" },
					{ "type": "paragraph", "inlineContent": [
						{ "type": "text", "text": "Views are the building blocks of " },
						{ "type": "codeVoice", "code": "UIKit" },
						{ "type": "text", "text": " apps." }
					]}
				]
			}
		],
		"topicSections": [
			{ "title": "Creating a View", "identifiers": ["doc://com.apple.uikit/documentation/UIKit/UIView/init(frame:)"] }
		],
		"relationshipsSections": [
			{ "title": "Inherits From", "identifiers": ["doc://com.apple.uikit/documentation/UIKit/UIResponder"] }
		],
		"seeAlsoSections": [
			{ "title": "Views", "identifiers": ["doc://com.apple.uikit/documentation/UIKit/UIStackView"] }
		],
		"references": {
			"doc://com.apple.uikit/documentation/UIKit/UIView/init(frame:)": {
				"title": "init(frame:)",
				"url": "/documentation/uikit/uiview/init(frame:)",
				"role": "symbol",
				"abstract": [{ "type": "text", "text": "Initializes and returns a newly allocated view object." }]
			},
			"doc://com.apple.uikit/documentation/UIKit/UIResponder": {
				"title": "UIResponder",
				"url": "/documentation/uikit/uiresponder",
				"role": "symbol"
			},
			"doc://com.apple.uikit/documentation/UIKit/UIStackView": {
				"title": "UIStackView",
				"url": "/documentation/uikit/uistackview",
				"role": "symbol"
			}
		}
	})
}
