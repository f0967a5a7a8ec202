use serde::Deserialize;
use serde::Serialize;

use crate::config::TagstubConfig;

/// Target type for element names outside the generic set.
pub const FALLBACK_TARGET_TYPE: &str = "ICMSElement";

/// Accessor method for element names outside the generic set.
pub const FALLBACK_ACCESSOR: &str = "Element";

/// The built-in generic container elements.
///
/// A generic element is a structural container whose semantic identity lives
/// in its `Name` attribute rather than its tag name. Each variant carries the
/// interface type its accessor returns and the model method that fetches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenericElement {
	Page,
	Navigation,
	TaxonomyNavigation,
}

impl GenericElement {
	/// Look an element name up in the built-in generic set.
	pub fn from_name(name: &str) -> Option<Self> {
		match name {
			"Page" => Some(Self::Page),
			"Navigation" => Some(Self::Navigation),
			"TaxonomyNavigation" => Some(Self::TaxonomyNavigation),
			_ => None,
		}
	}

	/// The interface type the accessor returns.
	pub fn target_type(self) -> &'static str {
		match self {
			Self::Page => "ICMSLinkItem",
			Self::Navigation => "ICMSNavigationElement",
			Self::TaxonomyNavigation => "ICMSTaxonomyNavigationElement",
		}
	}

	/// The model method that fetches the element.
	pub fn accessor_method(self) -> &'static str {
		match self {
			Self::Page => "GetLinkItem",
			Self::Navigation => "GetNavigation",
			Self::TaxonomyNavigation => "GetTaxonomyNavigation",
		}
	}
}

/// How one element name maps onto generated code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
	/// Declared type of the generated variable.
	pub target_type: String,
	/// Method invoked on the model to fetch the element.
	pub accessor_method: String,
	/// Whether the element belongs to the generic set, meaning the variable
	/// name should come from the tag's `Name` attribute.
	pub generic: bool,
}

/// Classify an element name into its target type and accessor method.
///
/// Resolution order: the `[elements]` table of the config first, then the
/// built-in generic set, then the fallback binding. The same name always
/// resolves the same way within one config. `_declared_type` is accepted but
/// never consulted; every declared schema type currently maps onto the same
/// fallback binding.
pub fn resolve(
	element_name: &str,
	_declared_type: Option<&str>,
	config: &TagstubConfig,
) -> Resolution {
	if let Some(binding) = config.elements.get(element_name) {
		return Resolution {
			target_type: binding.target_type.clone(),
			accessor_method: binding.accessor.clone(),
			generic: true,
		};
	}

	if let Some(element) = GenericElement::from_name(element_name) {
		return Resolution {
			target_type: element.target_type().to_string(),
			accessor_method: element.accessor_method().to_string(),
			generic: true,
		};
	}

	Resolution {
		target_type: FALLBACK_TARGET_TYPE.to_string(),
		accessor_method: FALLBACK_ACCESSOR.to_string(),
		generic: false,
	}
}
