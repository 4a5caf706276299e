use super::limits::{MAX_REFERENCES, MAX_REFERENCES_PER_TYPE, MAX_SNIPPET_CHARS};
use super::{group_by, reference_title, reference_url};
use crate::model::DocRecord;
use crate::render::inline::{plain_text, truncate_snippet};

/// Reference-table entry flattened for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedReference {
	/// Reference title.
	pub title: String,
	/// Absolute page URL.
	pub url: String,
	/// Role or kind, `unknown` when neither is present.
	pub kind: String,
	/// Plain-text abstract, when non-empty.
	pub summary: Option<String>,
}

/// Flatten the reference table in payload order.
pub fn extract_references(record: &DocRecord) -> Vec<ExtractedReference> {
	record
		.references
		.values()
		.take(MAX_REFERENCES)
		.map(|reference| {
			let summary = plain_text(&reference.summary);
			ExtractedReference {
				title: reference_title(reference),
				url: reference_url(reference),
				kind: reference.type_label().to_string(),
				summary: (!summary.is_empty()).then_some(summary),
			}
		})
		.collect()
}

/// Render references under one pluralised heading per type.
pub fn format_references(references: &[ExtractedReference]) -> String {
	let mut out = String::from("## Key References\n\n");
	for (kind, entries) in group_by(references, |reference| reference.kind.as_str()) {
		out.push_str(&format!("### {}s\n\n", capitalize(kind)));
		for reference in entries.into_iter().take(MAX_REFERENCES_PER_TYPE) {
			out.push_str(&format!("- [**{}**]({})", reference.title, reference.url));
			if let Some(summary) = reference.summary.as_deref() {
				out.push_str(" - ");
				out.push_str(&truncate_snippet(summary, MAX_SNIPPET_CHARS));
			}
			out.push('\n');
		}
		out.push('\n');
	}
	out
}

fn capitalize(word: &str) -> String {
	let mut chars = word.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use serde_json::json;

	use super::*;

	#[test]
	fn extracts_type_and_summary() {
		let record: DocRecord = serde_json::from_value(json!({
			"references": {
				"a": {
					"title": "UIView",
					"url": "/documentation/uikit/uiview",
					"role": "symbol",
					"abstract": [{ "type": "text", "text": "An object that manages content." }]
				},
				"b": { "kind": "article", "url": "/documentation/uikit/about" },
				"c": {}
			}
		}))
		.unwrap();

		let references = extract_references(&record);
		assert_eq!(references.len(), 3);
		assert_eq!(references[0].kind, "symbol");
		assert_eq!(
			references[0].summary.as_deref(),
			Some("An object that manages content.")
		);
		assert_eq!(references[1].kind, "article");
		assert_eq!(references[1].title, "Unknown");
		assert_eq!(references[2].kind, "unknown");
		assert_eq!(references[2].url, "#");
	}

	#[test]
	fn formatter_groups_and_truncates() {
		let long = "x".repeat(150);
		let references = vec![
			ExtractedReference {
				title: "A".into(),
				url: "https://a".into(),
				kind: "symbol".into(),
				summary: Some(long),
			},
			ExtractedReference {
				title: "B".into(),
				url: "https://b".into(),
				kind: "article".into(),
				summary: None,
			},
		];
		let expected = format!(
			"## Key References\n\n### Symbols\n\n- [**A**](https://a) - {}...\n\n### Articles\n\n- [**B**](https://b)\n\n",
			"x".repeat(100)
		);
		assert_eq!(format_references(&references), expected);
	}

	#[test]
	fn per_type_listing_is_capped() {
		let references: Vec<ExtractedReference> = (0..9)
			.map(|i| ExtractedReference {
				title: format!("T{i}"),
				url: "#".into(),
				kind: "symbol".into(),
				summary: None,
			})
			.collect();
		let rendered = format_references(&references);
		assert_eq!(rendered.matches("- [**").count(), MAX_REFERENCES_PER_TYPE);
	}

	#[test]
	fn extraction_is_capped() {
		let table: serde_json::Map<String, serde_json::Value> = (0..40)
			.map(|i| (format!("r{i}"), json!({ "title": format!("R{i}") })))
			.collect();
		let record: DocRecord = serde_json::from_value(json!({ "references": table })).unwrap();
		let references = extract_references(&record);
		assert_eq!(references.len(), MAX_REFERENCES);
		assert_eq!(references[0].title, "R0");
	}
}
