//! `tagstub_core` is the core library for the [tagstub](https://github.com/ifiokjr/tagstub) stub generator. It turns an XML-like CMS schema snippet into one C# element accessor declaration per top-level opening tag, annotating unusable tags in place instead of aborting.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Schema snippet
//!   → Tag Scanner (matches candidate opening tags, skips closing/self-closed)
//!   → Attribute Extractor (element name + `type`/`Name` attribute values)
//!   → Type/Accessor Resolver (config table → generic set → fallback)
//!   → Identifier Normalizer (first-char lowercase + reserved renames)
//!   → Line Composer (one declaration or diagnostic line per tag)
//! ```
//!
//! Every stage is applied independently per matched tag, in document order. A
//! tag that fails extraction contributes a diagnostic line at its position;
//! all other tags are unaffected.
//!
//! ## Modules
//!
//! - [`config`] — Configuration loading from `tagstub.toml`, including the
//!   `[rename]` identifier table and custom `[elements]` bindings.
//!
//! ## Key Types
//!
//! - [`GeneratedLine`] — One output line: a [`Declaration`] or a
//!   [`TagDiagnostic`]. `Display` renders the exact line text.
//! - [`TagDescriptor`] — The structured form of one scanned tag.
//! - [`Resolution`] — The target type and accessor method for one element
//!   name.
//! - [`TagstubConfig`] — Configuration loaded from `tagstub.toml`.
//! - [`TagstubError`] — Error type for extraction, I/O, and config failures.
//!
//! ## Configuration
//!
//! The built-in tables can be extended through `tagstub.toml`:
//!
//! ```toml
//! [rename]
//! class = "cssClass"
//!
//! [elements.Component]
//! target_type = "ICMSComponent"
//! accessor = "GetComponent"
//! ```
//!
//! An empty or absent config reproduces the built-in behavior exactly.
//!
//! ## Quick Start
//!
//! ```rust
//! use tagstub_core::transform;
//!
//! let snippet = r#"<Page type="string" Name="HomeLink"><Title type="string">"#;
//! let stub = transform(snippet);
//!
//! assert_eq!(
//! 	stub,
//! 	concat!(
//! 		"ICMSLinkItem homeLink = Model.GetLinkItem(\"Page\");\n",
//! 		"ICMSElement title = Model.Element(\"Title\");",
//! 	)
//! );
//! ```

pub use config::*;
pub use engine::*;
pub use error::*;
pub use extractor::*;
pub use identifier::*;
pub use resolver::*;
pub use scanner::*;

pub mod config;
mod engine;
mod error;
mod extractor;
mod identifier;
mod resolver;
mod scanner;

#[cfg(test)]
mod __fixtures;
