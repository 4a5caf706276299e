//! Body rendering for the two page shapes: concrete symbols and collections.

use super::inline::flatten_inline;
use crate::model::{ContentItem, ContentSection, DocRecord, ListItem};
use crate::urls::{last_path_segment, topic_identifier_url};

/// Fence language for declarations and unlabelled code listings.
pub const DEFAULT_SYNTAX: &str = "swift";

/// Render a concrete symbol page: declaration, parameters and prose, in section order.
pub fn format_specific_api(record: &DocRecord) -> String {
	let mut out = String::new();
	for section in record.sections() {
		match section {
			ContentSection::Declarations { declarations } => {
				out.push_str("## Declaration\n\n");
				if let Some(declaration) = declarations.first().filter(|d| !d.tokens.is_empty()) {
					push_fence(&mut out, DEFAULT_SYNTAX, &declaration.source());
				}
			}
			ContentSection::Parameters { parameters } => {
				if parameters.is_empty() {
					continue;
				}
				out.push_str("## Parameters\n\n");
				for parameter in parameters {
					let description = flatten_inline(parameter.first_paragraph());
					out.push_str(&format!("**{}**: {}\n\n", parameter.name, description.trim()));
				}
			}
			ContentSection::Content { content } => {
				for item in content {
					push_content_item(&mut out, item);
				}
			}
			ContentSection::Unsupported => {}
		}
	}
	out
}

/// Render a collection page: overview prose followed by categorized link lists.
pub fn format_collection(record: &DocRecord) -> String {
	let mut out = String::new();

	let overview = record.sections().iter().find_map(|section| match section {
		ContentSection::Content { content } => Some(content),
		_ => None,
	});
	if let Some(items) = overview {
		let mut prose = String::new();
		for item in items {
			match item {
				ContentItem::Paragraph { inline_content } => {
					push_paragraph(&mut prose, &flatten_inline(inline_content))
				}
				ContentItem::UnorderedList { items } => push_list(&mut prose, items),
				_ => {}
			}
		}
		if !prose.is_empty() {
			out.push_str("## Overview\n\n");
			out.push_str(&prose);
		}
	}

	let topics: Vec<_> = record
		.topic_sections
		.iter()
		.filter_map(|group| {
			let title = group.title.as_deref()?;
			(!group.identifiers.is_empty()).then_some((title, &group.identifiers))
		})
		.collect();
	if !topics.is_empty() {
		out.push_str("## APIs and Functions\n\n");
		for (title, identifiers) in topics {
			out.push_str(&format!("### {title}\n\n"));
			for identifier in identifiers {
				out.push_str(&format!(
					"- [`{}`]({})\n",
					last_path_segment(identifier),
					topic_identifier_url(identifier)
				));
			}
			out.push('\n');
		}
	}

	out
}

fn push_content_item(out: &mut String, item: &ContentItem) {
	match item {
		ContentItem::Heading { text, level } => {
			if text.trim().is_empty() {
				return;
			}
			let level = usize::from(level.unwrap_or(2).clamp(2, 6));
			out.push_str(&format!("{} {}\n\n", "#".repeat(level), text.trim()));
		}
		ContentItem::Paragraph { inline_content } => {
			push_paragraph(out, &flatten_inline(inline_content))
		}
		ContentItem::CodeListing { syntax, code } => {
			if code.is_empty() {
				return;
			}
			let syntax = syntax
				.as_deref()
				.filter(|syntax| !syntax.is_empty())
				.unwrap_or(DEFAULT_SYNTAX);
			push_fence(out, syntax, &code.join("\n"));
		}
		ContentItem::UnorderedList { items } => push_list(out, items),
		ContentItem::Unsupported => {}
	}
}

fn push_paragraph(out: &mut String, text: &str) {
	let text = text.trim();
	if !text.is_empty() {
		out.push_str(text);
		out.push_str("\n\n");
	}
}

fn push_list(out: &mut String, items: &[ListItem]) {
	let mut any = false;
	for item in items {
		let label = item
			.content
			.first()
			.map(|first| flatten_inline(first.inline_content()))
			.unwrap_or_default();
		let label = label.trim();
		if !label.is_empty() {
			out.push_str(&format!("- {label}\n"));
			any = true;
		}
	}
	if any {
		out.push('\n');
	}
}

fn push_fence(out: &mut String, syntax: &str, code: &str) {
	out.push_str(&format!("```{syntax}\n{code}\n```\n\n"));
}
