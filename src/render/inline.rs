use crate::model::InlineContent;
use crate::urls::last_path_segment;

/// Flatten inline spans into markdown text.
///
/// Text passes through, code voice and cross-references become inline code (references keep
/// only the last path segment of their identifier), emphasis and strong spans keep their
/// markers. Unknown spans contribute nothing.
pub fn flatten_inline(spans: &[InlineContent]) -> String {
	let mut out = String::new();
	push_inline(&mut out, spans);
	out
}

fn push_inline(out: &mut String, spans: &[InlineContent]) {
	for span in spans {
		match span {
			InlineContent::Text { text } => out.push_str(text),
			InlineContent::CodeVoice { code } => {
				out.push('`');
				out.push_str(code);
				out.push('`');
			}
			InlineContent::Reference { identifier } if !identifier.is_empty() => {
				out.push('`');
				out.push_str(last_path_segment(identifier));
				out.push('`');
			}
			InlineContent::Reference { .. } => {}
			InlineContent::Emphasis { inline_content } => {
				out.push('*');
				push_inline(out, inline_content);
				out.push('*');
			}
			InlineContent::Strong { inline_content } => {
				out.push_str("**");
				push_inline(out, inline_content);
				out.push_str("**");
			}
			InlineContent::Unsupported => {}
		}
	}
}

/// Join the plain text spans with single spaces, dropping every other span type.
pub fn plain_text(spans: &[InlineContent]) -> String {
	spans
		.iter()
		.map(InlineContent::plain_text)
		.collect::<Vec<_>>()
		.join(" ")
		.trim()
		.to_string()
}

/// Truncate to `max_chars` characters, appending `...` when anything was cut.
pub fn truncate_snippet(text: &str, max_chars: usize) -> String {
	match text.char_indices().nth(max_chars) {
		Some((cut, _)) => format!("{}...", &text[..cut]),
		None => text.to_string(),
	}
}
