use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use serde::Serialize;

use crate::TagstubError;
use crate::TagstubResult;
use crate::scanner::RawTag;

/// Matches a `type="..."` attribute and captures its value. The attribute
/// name is case-sensitive, so `Type="..."` is not recognized.
static TYPE_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"type="([^"]*)""#).unwrap());

/// Matches a `Name="..."` attribute and captures its value. Schema exports
/// write this attribute with a capital `N`, unlike `type`.
static NAME_ATTR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r#"Name="([^"]*)""#).unwrap());

/// The structured form of one scanned tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagDescriptor {
	/// The tag name sitting between `<` and the first space.
	pub element_name: String,
	/// Value of the `type="..."` attribute, when present.
	pub declared_type: Option<String>,
	/// Value of the `Name="..."` attribute, when present.
	pub declared_name: Option<String>,
}

/// Pull the element name and the recognized attributes out of a raw tag.
///
/// The element name is everything between the opening `<` and the first space
/// in the tag text. A tag without a space, or with nothing before the first
/// space, has no recoverable name and fails with
/// [`TagstubError::MalformedTag`]. Attributes are optional; an absent or
/// differently-cased attribute simply extracts as `None`.
pub fn extract(tag: &RawTag<'_>) -> TagstubResult<TagDescriptor> {
	let Some(space) = tag.text.find(' ') else {
		return Err(TagstubError::MalformedTag { offset: tag.offset });
	};
	let element_name = &tag.text[1..space];
	if element_name.is_empty() {
		return Err(TagstubError::MalformedTag { offset: tag.offset });
	}

	let declared_type = TYPE_ATTR_RE
		.captures(tag.text)
		.map(|captures| captures[1].to_string());
	let declared_name = NAME_ATTR_RE
		.captures(tag.text)
		.map(|captures| captures[1].to_string());

	Ok(TagDescriptor {
		element_name: element_name.to_string(),
		declared_type,
		declared_name,
	})
}
