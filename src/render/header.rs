//! Page furniture surrounding the body: title block, abstract, availability, see-also links and
//! the trailing link back to the browsable page.

use super::inline::flatten_inline;
use crate::model::{DocRecord, Platform};
use crate::urls::{absolutize, last_path_segment};

/// Title shown when the record has no metadata title.
pub const FALLBACK_TITLE: &str = "Documentation";

/// Title, role heading, defining modules and beta/deprecated badges.
pub fn format_header(record: &DocRecord) -> String {
	let mut out = format!("# {}\n\n", record.title().unwrap_or(FALLBACK_TITLE));
	let Some(metadata) = record.metadata.as_ref() else {
		return out;
	};

	let mut facts = Vec::new();
	if let Some(role) = metadata.role_heading.as_deref().filter(|role| !role.is_empty()) {
		facts.push(format!("**{role}**"));
	}
	let modules: Vec<&str> = metadata
		.modules
		.iter()
		.map(|module| module.name.as_str())
		.filter(|name| !name.is_empty())
		.collect();
	if !modules.is_empty() {
		facts.push(format!("**Module:** {}", modules.join(", ")));
	}
	if !facts.is_empty() {
		out.push_str(&facts.join(" | "));
		out.push_str("\n\n");
	}

	if metadata.beta {
		out.push_str("> **Beta:** this API is prerelease software and may change.\n\n");
	}
	if metadata.deprecated {
		out.push_str("> **Deprecated:** this API is no longer recommended.\n\n");
	}
	out
}

/// Abstract paragraph, or nothing when the abstract is empty.
pub fn format_abstract(record: &DocRecord) -> String {
	let text = flatten_inline(&record.summary);
	if text.trim().is_empty() {
		String::new()
	} else {
		format!("{}\n\n", text.trim())
	}
}

/// Platform availability list in vendor order.
pub fn format_platform_availability(record: &DocRecord) -> String {
	let platforms = record.platforms();
	if platforms.is_empty() {
		return String::new();
	}
	let mut out = String::from("## Platform Availability\n\n");
	for platform in platforms {
		out.push_str(&platform_line(platform, "**Beta**", "**Deprecated**"));
		out.push('\n');
	}
	out.push('\n');
	out
}

/// `- **name** <introduced>+` followed by the given beta/deprecated badges.
pub(crate) fn platform_line(
	platform: &Platform,
	beta_badge: &str,
	deprecated_badge: &str,
) -> String {
	let mut line = format!("- **{}**", platform.name);
	if let Some(introduced) = platform.introduced_at.as_deref() {
		line.push_str(&format!(" {introduced}+"));
	}
	if platform.beta {
		line.push(' ');
		line.push_str(beta_badge);
	}
	if platform.deprecated {
		line.push(' ');
		line.push_str(deprecated_badge);
	}
	line
}

/// "See also" groups with links resolved through the reference table.
///
/// Identifiers missing from the table are skipped, and groups left empty are omitted.
pub fn format_see_also(record: &DocRecord) -> String {
	let mut groups = String::new();
	for group in &record.see_also_sections {
		let links: Vec<String> = group
			.identifiers
			.iter()
			.filter_map(|identifier| {
				let reference = record.reference(identifier)?;
				let title = reference
					.title
					.as_deref()
					.unwrap_or_else(|| last_path_segment(identifier));
				Some(format!("- [{title}]({})\n", absolutize(reference.url.as_deref())))
			})
			.collect();
		if links.is_empty() {
			continue;
		}
		if let Some(title) = group.title.as_deref() {
			groups.push_str(&format!("### {title}\n\n"));
		}
		groups.push_str(&links.concat());
		groups.push('\n');
	}

	if groups.is_empty() {
		groups
	} else {
		format!("## See Also\n\n{groups}")
	}
}

/// Horizontal rule and link to the browsable documentation page.
pub fn format_footer(source_url: &str) -> String {
	format!("---\n\n[View full documentation on Apple Developer]({source_url})")
}
