//! Typed view of the documentation JSON returned by the vendor API.
//!
//! Every field is optional on the wire. Decoding fills absent fields with empty values so the
//! renderer can treat "missing" and "empty" uniformly; the one exception is
//! `primaryContentSections`, whose absence drives reference following in the fetcher.

/// Primary content sections and the inline object model they contain.
pub mod content;
/// Field deserializers that fall back to defaults instead of failing.
pub mod lenient;

use indexmap::IndexMap;
use serde::Deserialize;

pub use self::content::{
	ContentItem, ContentSection, Declaration, InlineContent, ListItem, Parameter, Token,
};

/// One documentation page as returned by the JSON API.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DocRecord {
	/// Record kind, e.g. `symbol` or `article`.
	#[serde(deserialize_with = "lenient::value")]
	pub kind: Option<String>,
	/// Page metadata.
	#[serde(deserialize_with = "lenient::value")]
	pub metadata: Option<Metadata>,
	/// Short summary shown under the title.
	#[serde(rename = "abstract", deserialize_with = "lenient::elements")]
	pub summary: Vec<InlineContent>,
	/// Body sections. `None` when the field is absent from the payload.
	#[serde(deserialize_with = "lenient::optional_elements")]
	pub primary_content_sections: Option<Vec<ContentSection>>,
	/// Topic groupings of child pages.
	#[serde(deserialize_with = "lenient::elements")]
	pub topic_sections: Vec<TopicGroup>,
	/// Inheritance and conformance groupings.
	#[serde(deserialize_with = "lenient::elements")]
	pub relationships_sections: Vec<TopicGroup>,
	/// "See also" groupings.
	#[serde(deserialize_with = "lenient::elements")]
	pub see_also_sections: Vec<TopicGroup>,
	/// Reference table in payload order.
	#[serde(deserialize_with = "lenient::entries")]
	pub references: IndexMap<String, Reference>,
}

/// Page metadata block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Metadata {
	/// Page title.
	#[serde(deserialize_with = "lenient::value")]
	pub title: Option<String>,
	/// Human-facing role label, e.g. `Class` or `Framework`.
	#[serde(deserialize_with = "lenient::value")]
	pub role_heading: Option<String>,
	/// Machine role, e.g. `symbol` or `collection`.
	#[serde(deserialize_with = "lenient::value")]
	pub role: Option<String>,
	/// Symbol kind for concrete API pages, e.g. `class` or `method`.
	#[serde(deserialize_with = "lenient::value")]
	pub symbol_kind: Option<String>,
	/// Modules that define the symbol.
	#[serde(deserialize_with = "lenient::elements")]
	pub modules: Vec<Module>,
	/// Platform availability in vendor order.
	#[serde(deserialize_with = "lenient::elements")]
	pub platforms: Vec<Platform>,
	/// Whether the API is in beta.
	#[serde(deserialize_with = "lenient::value")]
	pub beta: bool,
	/// Whether the API is deprecated.
	#[serde(deserialize_with = "lenient::value")]
	pub deprecated: bool,
}

/// Defining module.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Module {
	/// Module name.
	#[serde(deserialize_with = "lenient::value")]
	pub name: String,
}

/// Availability of an API on one platform.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Platform {
	/// Platform name, e.g. `iOS`.
	#[serde(deserialize_with = "lenient::value")]
	pub name: String,
	/// First version shipping the API.
	#[serde(deserialize_with = "lenient::value")]
	pub introduced_at: Option<String>,
	/// Current platform version.
	#[serde(deserialize_with = "lenient::value")]
	pub current: Option<String>,
	/// Version that deprecated the API.
	#[serde(deserialize_with = "lenient::value")]
	pub deprecated_at: Option<String>,
	/// Whether the API is in beta on this platform.
	#[serde(deserialize_with = "lenient::value")]
	pub beta: bool,
	/// Whether the API is deprecated on this platform.
	#[serde(deserialize_with = "lenient::value")]
	pub deprecated: bool,
}

/// Titled group of identifiers used by topic, relationship and see-also sections.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TopicGroup {
	/// Group title.
	#[serde(deserialize_with = "lenient::value")]
	pub title: Option<String>,
	/// Identifiers, keys into [`DocRecord::references`].
	#[serde(deserialize_with = "lenient::elements")]
	pub identifiers: Vec<String>,
}

/// Entry of the reference table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Reference {
	/// Display title.
	#[serde(deserialize_with = "lenient::value")]
	pub title: Option<String>,
	/// Relative or absolute page URL.
	#[serde(deserialize_with = "lenient::value")]
	pub url: Option<String>,
	/// Role, e.g. `symbol` or `article`.
	#[serde(deserialize_with = "lenient::value")]
	pub role: Option<String>,
	/// Kind, used when no role is present.
	#[serde(deserialize_with = "lenient::value")]
	pub kind: Option<String>,
	/// Short summary.
	#[serde(rename = "abstract", deserialize_with = "lenient::elements")]
	pub summary: Vec<InlineContent>,
}

impl DocRecord {
	/// Page title, if the metadata provides one.
	pub fn title(&self) -> Option<&str> {
		self.metadata.as_ref()?.title.as_deref()
	}

	/// Platforms listed in the metadata; empty when absent.
	pub fn platforms(&self) -> &[Platform] {
		self.metadata
			.as_ref()
			.map(|metadata| metadata.platforms.as_slice())
			.unwrap_or(&[])
	}

	/// Whether the record carries any primary content sections.
	pub fn has_primary_content(&self) -> bool {
		self.primary_content_sections
			.as_ref()
			.is_some_and(|sections| !sections.is_empty())
	}

	/// Primary content sections; empty when absent.
	pub fn sections(&self) -> &[ContentSection] {
		self.primary_content_sections.as_deref().unwrap_or(&[])
	}

	/// Whether the record describes a concrete symbol rather than a collection page.
	pub fn is_specific_api(&self) -> bool {
		let symbol_metadata = self
			.metadata
			.as_ref()
			.is_some_and(|metadata| metadata.symbol_kind.is_some());
		let symbol_kind = self.kind.as_deref() == Some("symbol");
		let has_declarations = self
			.sections()
			.iter()
			.any(|section| matches!(section, ContentSection::Declarations { .. }));
		symbol_metadata || symbol_kind || has_declarations
	}

	/// Look up an identifier in the reference table.
	pub fn reference(&self, identifier: &str) -> Option<&Reference> {
		self.references.get(identifier)
	}

	/// First reference, in payload order, that carries a non-empty URL.
	pub fn first_linked_reference(&self) -> Option<(&str, &Reference)> {
		self.references
			.iter()
			.find(|(_, reference)| {
				reference
					.url
					.as_deref()
					.is_some_and(|url| !url.is_empty())
			})
			.map(|(key, reference)| (key.as_str(), reference))
	}
}

impl Reference {
	/// Classification shown in reference listings: role, then kind, then `unknown`.
	pub fn type_label(&self) -> &str {
		self.role
			.as_deref()
			.or(self.kind.as_deref())
			.unwrap_or("unknown")
	}
}

#[cfg(test)]
mod tests {
	use serde_json::json;

	use super::*;

	#[test]
	fn empty_object_decodes_to_default_record() {
		let record: DocRecord = serde_json::from_value(json!({})).unwrap();
		assert_eq!(record, DocRecord::default());
		assert!(!record.has_primary_content());
		assert!(!record.is_specific_api());
	}

	#[test]
	fn references_keep_payload_order() {
		let record: DocRecord = serde_json::from_value(json!({
			"references": {
				"zeta": { "title": "Zeta" },
				"alpha": { "title": "Alpha", "url": "/documentation/alpha" },
				"beta": { "title": "Beta", "url": "/documentation/beta" }
			}
		}))
		.unwrap();
		let keys: Vec<&str> = record.references.keys().map(String::as_str).collect();
		assert_eq!(keys, ["zeta", "alpha", "beta"]);
		assert_eq!(record.first_linked_reference().unwrap().0, "alpha");
	}

	#[test]
	fn unknown_section_kinds_are_tolerated() {
		let record: DocRecord = serde_json::from_value(json!({
			"primaryContentSections": [
				{ "kind": "mentions", "mentions": ["a", "b"] },
				{ "kind": "declarations", "declarations": [{ "tokens": [{ "text": "func" }] }] }
			]
		}))
		.unwrap();
		assert_eq!(record.sections()[0], ContentSection::Unsupported);
		assert!(record.is_specific_api());
	}

	#[test]
	fn malformed_elements_decode_to_defaults() {
		let record: DocRecord = serde_json::from_value(json!({
			"abstract": [{ "text": "untyped" }, { "type": "text", "text": "kept" }],
			"metadata": { "title": null, "beta": null, "platforms": [{ "name": null, "beta": "yes" }] },
			"primaryContentSections": [{ "content": [] }],
			"topicSections": { "title": "not a list" },
			"references": { "broken": 42, "ok": { "url": "/documentation/ok" } }
		}))
		.unwrap();
		assert_eq!(
			record.summary,
			[
				InlineContent::Unsupported,
				InlineContent::Text { text: "kept".into() }
			]
		);
		let metadata = record.metadata.as_ref().unwrap();
		assert_eq!(metadata.title, None);
		assert!(!metadata.beta);
		assert_eq!(metadata.platforms, [Platform::default()]);
		assert_eq!(record.sections(), [ContentSection::Unsupported]);
		assert!(record.topic_sections.is_empty());
		assert_eq!(record.references["broken"], Reference::default());
		assert_eq!(record.first_linked_reference().unwrap().0, "ok");
	}

	#[test]
	fn null_sections_count_as_absent() {
		let record: DocRecord =
			serde_json::from_value(json!({ "primaryContentSections": null })).unwrap();
		assert_eq!(record.primary_content_sections, None);
	}

	#[test]
	fn empty_reference_urls_are_not_linked() {
		let record: DocRecord = serde_json::from_value(json!({
			"references": { "empty": { "url": "" }, "next": { "url": "/documentation/next" } }
		}))
		.unwrap();
		assert_eq!(record.first_linked_reference().unwrap().0, "next");
	}

	#[test]
	fn type_label_prefers_role() {
		let reference = Reference {
			role: Some("symbol".into()),
			kind: Some("article".into()),
			..Reference::default()
		};
		assert_eq!(reference.type_label(), "symbol");
		assert_eq!(Reference::default().type_label(), "unknown");
	}
}
