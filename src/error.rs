/* src/error.rs */

use crate::format::FormatError;
use crate::value::ValueError;

/// Errors returned by [`ConfigSet`](crate::ConfigSet) operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// The text is not valid syntax for the option's type.
	#[error("parse error for option '{name}': {reason}")]
	Parse { name: String, reason: String },

	/// The text parsed but falls outside the option's bounds.
	#[error("value out of range for option '{name}': {reason}")]
	Range { name: String, reason: String },

	/// An option with this name is already registered.
	#[error("option redefined: {name}")]
	DuplicateOption { name: String },

	/// No value factory is registered for the bound type.
	#[error("no value factory registered for type {type_name}")]
	UnregisteredType { type_name: &'static str },

	/// The format is `Custom` but the matching hook was never supplied.
	#[error("no parser provided for custom format")]
	NoParser,

	/// No option with this name exists.
	#[error("no such option: {name}")]
	NotFound { name: String },

	/// `parse` or `save` was called without a file location.
	#[error("configuration file location is not set")]
	NoLocation,

	/// Reading or writing the configuration file failed.
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),

	/// The document could not be decoded or encoded.
	#[error("format error: {0}")]
	Format(#[from] FormatError),

	/// Computing the zero representation of an option panicked.
	#[error("zero value check failed for option '{name}': {reason}")]
	ZeroValue { name: String, reason: String },
}

impl ConfigError {
	/// Attaches an option name to a wrapper-level error.
	pub fn from_value(name: &str, err: ValueError) -> Self {
		match err {
			ValueError::Parse(reason) => Self::Parse {
				name: name.to_string(),
				reason,
			},
			ValueError::Range(reason) => Self::Range {
				name: name.to_string(),
				reason,
			},
		}
	}

	/// Returns true for syntactically invalid input.
	pub fn is_parse(&self) -> bool {
		matches!(self, Self::Parse { .. })
	}

	/// Returns true for well-formed input rejected by bounds.
	pub fn is_range(&self) -> bool {
		matches!(self, Self::Range { .. })
	}
}

/// Result type alias.
pub type Result<T> = std::result::Result<T, ConfigError>;
