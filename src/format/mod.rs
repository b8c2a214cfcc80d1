/* src/format/mod.rs */

//!
//! Format adapters turning bytes into a flat [`Document`] and back.
//!
//! Every built-in format is gated behind a cargo feature of the same name.
//! [`Format::Custom`] defers to caller-supplied [`DecodeFn`]/[`EncodeFn`]
//! hooks held by the [`ConfigSet`](crate::ConfigSet).

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::Serialize;

#[cfg(feature = "json")]
mod json;
#[cfg(feature = "json")]
pub use json::Json;

#[cfg(feature = "xml")]
mod xml;
#[cfg(feature = "xml")]
pub use xml::Xml;

#[cfg(feature = "toml")]
mod toml;
#[cfg(feature = "toml")]
pub use self::toml::Toml;

#[cfg(feature = "yaml")]
mod yaml;
#[cfg(feature = "yaml")]
pub use yaml::Yaml;

/// Error raised by a format adapter.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
	#[error("decode error: {0}")]
	Decode(String),

	#[error("encode error: {0}")]
	Encode(String),

	#[error("invalid utf-8: {0}")]
	Utf8(#[from] std::str::Utf8Error),
}

/// A primitive document value. Nesting is not interpreted.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
	Bool(bool),
	Int(i64),
	Float(f64),
	Text(String),
}

impl fmt::Display for Scalar {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Bool(b) => b.fmt(f),
			Self::Int(i) => i.fmt(f),
			Self::Float(x) => x.fmt(f),
			Self::Text(s) => f.write_str(s),
		}
	}
}

impl From<bool> for Scalar {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<i64> for Scalar {
	fn from(value: i64) -> Self {
		Self::Int(value)
	}
}

impl From<f64> for Scalar {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}

impl From<String> for Scalar {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&str> for Scalar {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

/// Flat mapping from option name to value.
pub type Document = BTreeMap<String, Scalar>;

/// Caller-supplied decoder for [`Format::Custom`].
pub type DecodeFn = Box<dyn Fn(&[u8]) -> Result<Document, FormatError> + Send + Sync>;

/// Caller-supplied encoder for [`Format::Custom`].
pub type EncodeFn = Box<dyn Fn(&Document) -> Result<Vec<u8>, FormatError> + Send + Sync>;

/// A document format codec.
pub trait Codec: Send + Sync {
	/// List of supported file extensions.
	fn extensions(&self) -> &'static [&'static str];

	/// Decodes raw bytes into a flat document.
	fn decode(&self, input: &[u8]) -> Result<Document, FormatError>;

	/// Encodes a flat document into raw bytes.
	fn encode(&self, document: &Document) -> Result<Vec<u8>, FormatError>;
}

/// Selects the format a [`ConfigSet`](crate::ConfigSet) reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
	#[cfg(feature = "json")]
	Json,
	#[cfg(feature = "xml")]
	Xml,
	#[cfg(feature = "toml")]
	Toml,
	#[cfg(feature = "yaml")]
	Yaml,
	/// Decoding and encoding are supplied by caller hooks.
	Custom,
}

impl Format {
	/// Every enabled built-in format.
	pub const BUILT_IN: &'static [Format] = &[
		#[cfg(feature = "json")]
		Self::Json,
		#[cfg(feature = "xml")]
		Self::Xml,
		#[cfg(feature = "toml")]
		Self::Toml,
		#[cfg(feature = "yaml")]
		Self::Yaml,
	];

	/// The built-in codec, or `None` for [`Format::Custom`].
	pub fn codec(self) -> Option<&'static dyn Codec> {
		match self {
			#[cfg(feature = "json")]
			Self::Json => Some(&Json),
			#[cfg(feature = "xml")]
			Self::Xml => Some(&Xml),
			#[cfg(feature = "toml")]
			Self::Toml => Some(&Toml),
			#[cfg(feature = "yaml")]
			Self::Yaml => Some(&Yaml),
			Self::Custom => None,
		}
	}

	/// Picks the built-in format handling `ext` (without the dot).
	pub fn from_extension(ext: &str) -> Option<Self> {
		Self::BUILT_IN.iter().copied().find(|format| {
			format
				.codec()
				.is_some_and(|codec| codec.extensions().iter().any(|e| e.eq_ignore_ascii_case(ext)))
		})
	}

	/// Picks the built-in format from a file path's extension.
	pub fn from_path(path: impl AsRef<Path>) -> Option<Self> {
		path.as_ref()
			.extension()
			.and_then(|ext| ext.to_str())
			.and_then(Self::from_extension)
	}
}

impl Default for Format {
	fn default() -> Self {
		#[cfg(feature = "json")]
		return Self::Json;
		#[cfg(not(feature = "json"))]
		return Self::Custom;
	}
}
