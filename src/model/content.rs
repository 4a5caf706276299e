use serde::Deserialize;

use super::lenient;

/// One tagged block of a record's primary content.
///
/// Unknown section kinds decode to [`ContentSection::Unsupported`] and render nothing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ContentSection {
	/// Symbol declarations, each a sequence of source tokens.
	Declarations {
		/// Declarations in vendor order; only the first is rendered.
		#[serde(default, deserialize_with = "lenient::elements")]
		declarations: Vec<Declaration>,
	},
	/// Named parameters with prose descriptions.
	Parameters {
		/// Parameters in declaration order.
		#[serde(default, deserialize_with = "lenient::elements")]
		parameters: Vec<Parameter>,
	},
	/// Free-form prose: headings, paragraphs, code listings and lists.
	Content {
		/// Content items in reading order.
		#[serde(default, deserialize_with = "lenient::elements")]
		content: Vec<ContentItem>,
	},
	/// A section kind this renderer does not interpret.
	#[default]
	#[serde(other)]
	Unsupported,
}

/// A single declaration made of tokens whose text concatenates to source code.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Declaration {
	/// Tokens in source order.
	#[serde(deserialize_with = "lenient::elements")]
	pub tokens: Vec<Token>,
	/// Languages the declaration applies to.
	#[serde(deserialize_with = "lenient::elements")]
	pub languages: Vec<String>,
}

impl Declaration {
	/// Concatenate token text verbatim, without separators.
	pub fn source(&self) -> String {
		self.tokens.iter().map(|token| token.text.as_str()).collect()
	}
}

/// Declaration token.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Token {
	/// Literal token text.
	#[serde(deserialize_with = "lenient::value")]
	pub text: String,
	/// Token classification such as `keyword` or `typeIdentifier`.
	#[serde(deserialize_with = "lenient::value")]
	pub kind: Option<String>,
}

/// Parameter documentation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Parameter {
	/// Parameter name.
	#[serde(deserialize_with = "lenient::value")]
	pub name: String,
	/// Description, usually a single paragraph.
	#[serde(deserialize_with = "lenient::elements")]
	pub content: Vec<ContentItem>,
}

impl Parameter {
	/// Inline content of the first description item, if it carries any.
	pub fn first_paragraph(&self) -> &[InlineContent] {
		self.content
			.first()
			.map(ContentItem::inline_content)
			.unwrap_or(&[])
	}
}

/// Item inside a [`ContentSection::Content`] block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum ContentItem {
	/// Section heading.
	Heading {
		/// Heading text.
		#[serde(default, deserialize_with = "lenient::value")]
		text: String,
		/// Heading level as supplied by the vendor.
		#[serde(default, deserialize_with = "lenient::value")]
		level: Option<u8>,
	},
	/// Paragraph of inline spans.
	#[serde(rename_all = "camelCase")]
	Paragraph {
		/// Inline spans.
		#[serde(default, deserialize_with = "lenient::elements")]
		inline_content: Vec<InlineContent>,
	},
	/// Block of source code.
	CodeListing {
		/// Declared syntax, used as the fence language.
		#[serde(default, deserialize_with = "lenient::value")]
		syntax: Option<String>,
		/// Source lines.
		#[serde(default, deserialize_with = "lenient::elements")]
		code: Vec<String>,
	},
	/// Bulleted list.
	UnorderedList {
		/// List entries.
		#[serde(default, deserialize_with = "lenient::elements")]
		items: Vec<ListItem>,
	},
	/// Anything else (asides, tables, images...).
	#[default]
	#[serde(other)]
	Unsupported,
}

impl ContentItem {
	/// Inline spans carried directly by this item; empty for non-paragraph items.
	pub fn inline_content(&self) -> &[InlineContent] {
		match self {
			Self::Paragraph { inline_content } => inline_content,
			_ => &[],
		}
	}
}

/// Entry of an unordered list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ListItem {
	/// Nested content; the first paragraph is the visible label.
	#[serde(deserialize_with = "lenient::elements")]
	pub content: Vec<ContentItem>,
}

/// Inline span inside paragraphs and abstracts.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum InlineContent {
	/// Plain text.
	Text {
		/// Literal text.
		#[serde(default, deserialize_with = "lenient::value")]
		text: String,
	},
	/// Code-voice span.
	CodeVoice {
		/// Code text.
		#[serde(default, deserialize_with = "lenient::value")]
		code: String,
	},
	/// Cross-reference to another documentation page.
	Reference {
		/// Opaque identifier, usually a `doc://` URI.
		#[serde(default, deserialize_with = "lenient::value")]
		identifier: String,
	},
	/// Emphasised spans.
	#[serde(rename_all = "camelCase")]
	Emphasis {
		/// Nested spans.
		#[serde(default, deserialize_with = "lenient::elements")]
		inline_content: Vec<InlineContent>,
	},
	/// Strong spans.
	#[serde(rename_all = "camelCase")]
	Strong {
		/// Nested spans.
		#[serde(default, deserialize_with = "lenient::elements")]
		inline_content: Vec<InlineContent>,
	},
	/// Unrecognised span type.
	#[default]
	#[serde(other)]
	Unsupported,
}

impl InlineContent {
	/// Raw text of a text span, ignoring every other span type.
	pub fn plain_text(&self) -> &str {
		match self {
			Self::Text { text } => text,
			_ => "",
		}
	}
}
