use super::limits::{MAX_APIS_PER_SECTION, MAX_SIMILAR_APIS};
use super::{group_by, reference_title, reference_url};
use crate::model::DocRecord;

/// API listed alongside others in a topic section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimilarApi {
	/// Reference title.
	pub title: String,
	/// Absolute page URL.
	pub url: String,
	/// Topic section title.
	pub category: String,
}

/// Collect APIs from topic sections, resolving identifiers through the reference table.
pub fn extract_similar_apis(record: &DocRecord) -> Vec<SimilarApi> {
	record
		.topic_sections
		.iter()
		.flat_map(|group| {
			let category = group.title.as_deref().unwrap_or("Related");
			group
				.identifiers
				.iter()
				.take(MAX_APIS_PER_SECTION)
				.filter_map(move |identifier| {
					let reference = record.reference(identifier)?;
					Some(SimilarApi {
						title: reference_title(reference),
						url: reference_url(reference),
						category: category.to_string(),
					})
				})
		})
		.take(MAX_SIMILAR_APIS)
		.collect()
}

/// Render similar APIs under one heading per topic.
pub fn format_similar_apis(similar: &[SimilarApi]) -> String {
	let mut out = String::from("## Similar APIs\n\n");
	for (category, apis) in group_by(similar, |api| api.category.as_str()) {
		out.push_str(&format!("### {category}\n\n"));
		for api in apis {
			out.push_str(&format!("- [**{}**]({})\n", api.title, api.url));
		}
		out.push('\n');
	}
	out
}
