use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Diagnostic, Error)]
#[non_exhaustive]
pub enum TagstubError {
	#[error(transparent)]
	#[diagnostic(code(tagstub::io_error))]
	Io(#[from] std::io::Error),

	#[error("malformed tag at offset {offset}: no element name could be isolated")]
	#[diagnostic(
		code(tagstub::malformed_tag),
		help("an opening tag needs a space after its element name, e.g. `<Title type=\"string\">`")
	)]
	MalformedTag { offset: usize },

	#[error("failed to parse config file: {0}")]
	#[diagnostic(
		code(tagstub::config_parse),
		help("check that tagstub.toml is valid TOML with [rename] and/or [elements] tables")
	)]
	ConfigParse(String),
}

pub type TagstubResult<T> = Result<T, TagstubError>;
pub type AnyError = Box<dyn std::error::Error>;
pub type AnyEmptyResult = Result<(), AnyError>;
pub type AnyResult<T> = Result<T, AnyError>;
