//! Optional read-only analysis passes over a documentation record.
//!
//! Each pass has an extractor producing a bounded flat list (or summary) and a formatter
//! rendering it as a markdown section. All passes are capped so output size stays bounded no
//! matter how large the record is.

/// Platform compatibility summary.
pub mod platform;
/// Related APIs from relationship and see-also sections.
pub mod related;
/// Flattened reference table.
pub mod references;
/// APIs grouped by topic section.
pub mod similar;

use indexmap::IndexMap;

use crate::model::{DocRecord, Reference};
use crate::options::AnalysisOptions;
use crate::urls::absolutize;

pub use self::platform::{
	PlatformAnalysis, analyze_platform_compatibility, format_platform_analysis,
};
pub use self::related::{RelatedApi, extract_related_apis, format_related_apis};
pub use self::references::{ExtractedReference, extract_references, format_references};
pub use self::similar::{SimilarApi, extract_similar_apis, format_similar_apis};

/// Output caps shared by the extractors and formatters.
pub mod limits {
	/// Identifiers considered per relationship, see-also or topic group.
	pub const MAX_APIS_PER_SECTION: usize = 5;
	/// Related APIs returned in total.
	pub const MAX_RELATED_APIS: usize = 10;
	/// References returned in total.
	pub const MAX_REFERENCES: usize = 15;
	/// References rendered per type heading.
	pub const MAX_REFERENCES_PER_TYPE: usize = 5;
	/// Similar APIs returned in total.
	pub const MAX_SIMILAR_APIS: usize = 15;
	/// Characters kept from a reference abstract before truncation.
	pub const MAX_SNIPPET_CHARS: usize = 100;
}

/// Run the enabled passes and concatenate their non-empty sections.
pub fn render_analysis(record: &DocRecord, options: AnalysisOptions) -> String {
	let mut out = String::new();
	if options.contains(AnalysisOptions::RELATED_APIS) {
		let related = extract_related_apis(record);
		if !related.is_empty() {
			out.push_str(&format_related_apis(&related));
		}
	}
	if options.contains(AnalysisOptions::REFERENCES) {
		let references = extract_references(record);
		if !references.is_empty() {
			out.push_str(&format_references(&references));
		}
	}
	if options.contains(AnalysisOptions::SIMILAR_APIS) {
		let similar = extract_similar_apis(record);
		if !similar.is_empty() {
			out.push_str(&format_similar_apis(&similar));
		}
	}
	if options.contains(AnalysisOptions::PLATFORM_ANALYSIS) {
		if let Some(analysis) = analyze_platform_compatibility(record) {
			out.push_str(&format_platform_analysis(&analysis));
		}
	}
	out
}

/// Title of a reference, `Unknown` when absent.
fn reference_title(reference: &Reference) -> String {
	reference
		.title
		.clone()
		.unwrap_or_else(|| "Unknown".to_string())
}

/// Absolute URL of a reference, `#` when absent.
fn reference_url(reference: &Reference) -> String {
	absolutize(reference.url.as_deref())
}

/// Group items by key, preserving the order in which keys first appear.
fn group_by<'a, T>(items: &'a [T], key: impl Fn(&T) -> &str) -> IndexMap<&'a str, Vec<&'a T>> {
	let mut groups: IndexMap<&'a str, Vec<&'a T>> = IndexMap::new();
	for item in items {
		groups.entry(key(item)).or_default().push(item);
	}
	groups
}
