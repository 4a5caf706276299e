use crate::model::{DocRecord, Platform};
use crate::render::header::platform_line;

/// Summary of where an API is available.
#[derive(Debug, Clone, PartialEq)]
pub struct PlatformAnalysis {
	/// Comma-separated platform names in vendor order.
	pub supported_platforms: String,
	/// Platforms on which the API is in beta.
	pub beta_platforms: Vec<String>,
	/// Platforms on which the API is deprecated.
	pub deprecated_platforms: Vec<String>,
	/// Whether more than one platform is listed.
	pub cross_platform: bool,
	/// Raw platform entries for the detailed listing.
	pub platforms: Vec<Platform>,
}

/// Summarise platform metadata; `None` when the record lists no platforms.
pub fn analyze_platform_compatibility(record: &DocRecord) -> Option<PlatformAnalysis> {
	let platforms = record.platforms();
	if platforms.is_empty() {
		return None;
	}

	let names_where = |flag: fn(&Platform) -> bool| -> Vec<String> {
		platforms
			.iter()
			.filter(|platform| flag(platform))
			.map(|platform| platform.name.clone())
			.collect()
	};

	Some(PlatformAnalysis {
		supported_platforms: platforms
			.iter()
			.map(|platform| platform.name.as_str())
			.collect::<Vec<_>>()
			.join(", "),
		beta_platforms: names_where(|platform| platform.beta),
		deprecated_platforms: names_where(|platform| platform.deprecated),
		cross_platform: platforms.len() > 1,
		platforms: platforms.to_vec(),
	})
}

/// Render the compatibility summary followed by per-platform details.
pub fn format_platform_analysis(analysis: &PlatformAnalysis) -> String {
	let mut out = String::from("## Platform Compatibility Analysis\n\n");
	out.push_str(&format!(
		"**Supported Platforms:** {}\n",
		analysis.supported_platforms
	));
	out.push_str(&format!(
		"**Cross-Platform Support:** {}\n",
		if analysis.cross_platform { "Yes" } else { "No" }
	));
	if !analysis.beta_platforms.is_empty() {
		out.push_str(&format!(
			"**Beta Platforms:** {}\n",
			analysis.beta_platforms.join(", ")
		));
	}
	if !analysis.deprecated_platforms.is_empty() {
		out.push_str(&format!(
			"**Deprecated Platforms:** {}\n",
			analysis.deprecated_platforms.join(", ")
		));
	}

	out.push_str("\n**Detailed Platform Information:**\n\n");
	for platform in &analysis.platforms {
		out.push_str(&platform_line(platform, "(Beta)", "(Deprecated)"));
		out.push('\n');
	}
	out.push('\n');
	out
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use serde_json::json;

	use super::*;

	fn record_with(platforms: serde_json::Value) -> DocRecord {
		serde_json::from_value(json!({ "metadata": { "platforms": platforms } })).unwrap()
	}

	#[test]
	fn none_without_platforms() {
		assert_eq!(analyze_platform_compatibility(&DocRecord::default()), None);
		assert_eq!(analyze_platform_compatibility(&record_with(json!([]))), None);
	}

	#[test]
	fn single_platform_is_not_cross_platform() {
		let analysis =
			analyze_platform_compatibility(&record_with(json!([{ "name": "iOS" }]))).unwrap();
		assert!(!analysis.cross_platform);
	}

	#[test]
	fn summarises_flags() {
		let analysis = analyze_platform_compatibility(&record_with(json!([
			{ "name": "iOS", "introducedAt": "13.0", "beta": true },
			{ "name": "macOS", "introducedAt": "10.15", "deprecated": true },
			{ "name": "watchOS" }
		])))
		.unwrap();
		assert!(analysis.cross_platform);
		assert_eq!(analysis.supported_platforms, "iOS, macOS, watchOS");
		assert_eq!(analysis.beta_platforms, ["iOS"]);
		assert_eq!(analysis.deprecated_platforms, ["macOS"]);

		assert_eq!(
			format_platform_analysis(&analysis),
			"## Platform Compatibility Analysis\n\n\
			 **Supported Platforms:** iOS, macOS, watchOS\n\
			 **Cross-Platform Support:** Yes\n\
			 **Beta Platforms:** iOS\n\
			 **Deprecated Platforms:** macOS\n\
			 \n**Detailed Platform Information:**\n\n\
			 - **iOS** 13.0+ (Beta)\n\
			 - **macOS** 10.15+ (Deprecated)\n\
			 - **watchOS**\n\n"
		);
	}
}
