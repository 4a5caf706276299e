//! Rendering of documentation records into markdown-flavoured text.
//!
//! Rendering is pure: the same record, source URL and options always produce the same text.
//! Absent fields contribute nothing, so an empty record renders to a title and the trailing
//! link only.

/// Symbol and collection body rendering.
pub mod body;
/// Title block, abstract, availability, see-also and footer.
pub mod header;
/// Inline span flattening helpers.
pub mod inline;

use crate::analysis;
use crate::model::DocRecord;
use crate::options::AnalysisOptions;

pub use self::body::{format_collection, format_specific_api};
pub use self::header::{
	format_abstract, format_footer, format_header, format_platform_availability, format_see_also,
};
pub use self::inline::{flatten_inline, plain_text, truncate_snippet};

/// Configurable renderer for documentation records.
#[derive(Debug, Clone, Copy, Default)]
pub struct Renderer {
	/// Analysis passes appended after the see-also section.
	pub options: AnalysisOptions,
}

impl Renderer {
	/// Create a renderer with no analysis passes enabled.
	pub fn new() -> Self {
		Self::default()
	}

	/// Enable the given analysis passes.
	pub fn with_options(mut self, options: AnalysisOptions) -> Self {
		self.options = options;
		self
	}

	/// Render `record`, linking back to `source_url`.
	pub fn render(&self, record: &DocRecord, source_url: &str) -> String {
		let mut out = format_header(record);
		out.push_str(&format_abstract(record));
		if record.is_specific_api() {
			out.push_str(&format_specific_api(record));
		} else {
			out.push_str(&format_collection(record));
		}
		out.push_str(&format_platform_availability(record));
		out.push_str(&format_see_also(record));
		out.push_str(&analysis::render_analysis(record, self.options));
		out.push_str(&format_footer(source_url));
		out
	}
}

/// Render `record` with the given analysis passes.
pub fn render_document(record: &DocRecord, source_url: &str, options: AnalysisOptions) -> String {
	Renderer::new().with_options(options).render(record, source_url)
}
