use super::limits::{MAX_APIS_PER_SECTION, MAX_RELATED_APIS};
use super::{group_by, reference_title, reference_url};
use crate::model::{DocRecord, TopicGroup};

/// API linked from a relationship or see-also group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedApi {
	/// Reference title.
	pub title: String,
	/// Absolute page URL.
	pub url: String,
	/// Group label, e.g. `Inherits From` or `See Also: Views`.
	pub relationship: String,
}

/// Walk relationship sections, then see-also sections, resolving identifiers through the
/// reference table.
pub fn extract_related_apis(record: &DocRecord) -> Vec<RelatedApi> {
	let relationships = record.relationships_sections.iter().map(|group| {
		let label = group.title.clone().unwrap_or_else(|| "Related".to_string());
		(group, label)
	});
	let see_also = record.see_also_sections.iter().map(|group| {
		let label = format!("See Also: {}", group.title.as_deref().unwrap_or("Related"));
		(group, label)
	});

	relationships
		.chain(see_also)
		.flat_map(|(group, label)| resolve_group(record, group, label))
		.take(MAX_RELATED_APIS)
		.collect()
}

fn resolve_group<'a>(
	record: &'a DocRecord,
	group: &'a TopicGroup,
	label: String,
) -> impl Iterator<Item = RelatedApi> + 'a {
	group
		.identifiers
		.iter()
		.take(MAX_APIS_PER_SECTION)
		.filter_map(move |identifier| {
			let reference = record.reference(identifier)?;
			Some(RelatedApi {
				title: reference_title(reference),
				url: reference_url(reference),
				relationship: label.clone(),
			})
		})
}

/// Render related APIs under one heading per relationship.
pub fn format_related_apis(related: &[RelatedApi]) -> String {
	let mut out = String::from("## Related APIs\n\n");
	for (relationship, apis) in group_by(related, |api| api.relationship.as_str()) {
		out.push_str(&format!("### {relationship}\n\n"));
		for api in apis {
			out.push_str(&format!("- [**{}**]({})\n", api.title, api.url));
		}
		out.push('\n');
	}
	out
}
