use bitflags::bitflags;

bitflags! {
	/// Optional analysis passes appended to a rendered document.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct AnalysisOptions: u8 {
		/// Related APIs gathered from relationship and see-also sections.
		const RELATED_APIS = 1 << 0;
		/// Flattened listing of the record's reference table.
		const REFERENCES = 1 << 1;
		/// APIs grouped by topic section.
		const SIMILAR_APIS = 1 << 2;
		/// Platform compatibility summary.
		const PLATFORM_ANALYSIS = 1 << 3;
	}
}

impl AnalysisOptions {
	/// Build the option set from individual flags, mirroring the tool-call parameters.
	pub fn from_flags(
		include_related_apis: bool,
		include_references: bool,
		include_similar_apis: bool,
		include_platform_analysis: bool,
	) -> Self {
		let mut options = Self::empty();
		options.set(Self::RELATED_APIS, include_related_apis);
		options.set(Self::REFERENCES, include_references);
		options.set(Self::SIMILAR_APIS, include_similar_apis);
		options.set(Self::PLATFORM_ANALYSIS, include_platform_analysis);
		options
	}

	/// Stable textual form used in cache keys, independent of the order flags were set in.
	pub fn key_fragment(self) -> String {
		let names: Vec<&str> = self.iter_names().map(|(name, _)| name).collect();
		if names.is_empty() {
			"plain".to_string()
		} else {
			names.join("+")
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn from_flags_sets_each_bit() {
		let options = AnalysisOptions::from_flags(true, false, true, false);
		assert!(options.contains(AnalysisOptions::RELATED_APIS));
		assert!(options.contains(AnalysisOptions::SIMILAR_APIS));
		assert!(!options.contains(AnalysisOptions::REFERENCES));
		assert!(!options.contains(AnalysisOptions::PLATFORM_ANALYSIS));
	}

	#[test]
	fn key_fragment_ignores_insertion_order() {
		let a = AnalysisOptions::REFERENCES | AnalysisOptions::RELATED_APIS;
		let b = AnalysisOptions::RELATED_APIS | AnalysisOptions::REFERENCES;
		assert_eq!(a.key_fragment(), b.key_fragment());
		assert_eq!(AnalysisOptions::empty().key_fragment(), "plain");
	}
}
