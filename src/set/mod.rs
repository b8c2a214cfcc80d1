/* src/set/mod.rs */

//!
//! The option set: registration, lookup, parse and save.
//!
//! - `write`: defining options and assigning them by name.
//! - `read`: lookup, ordered visiting and zero-value checks.
//! - `bind`: typed registration through the [`TypeRegistry`].
//! - `pipeline`: decoding documents into options and encoding them back.

mod bind;
mod option;
mod pipeline;
mod policy;
mod read;
mod write;

pub use option::ConfigOption;
pub use policy::ErrorHandling;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::format::{DecodeFn, EncodeFn, Format};
use crate::registry::TypeRegistry;

/// A set of named options populated from one configuration document.
///
/// `formal` holds every registered option keyed by name; `actual` holds the
/// names that received an explicit successful assignment. Both are ordered,
/// so visiting is lexicographic by name.
///
/// Not synchronized: callers sharing a set across threads must serialize
/// access themselves.
#[derive(Default)]
pub struct ConfigSet {
	pub(crate) formal: BTreeMap<String, ConfigOption>,
	pub(crate) actual: BTreeSet<String>,
	location: Option<PathBuf>,
	format: Format,
	decoder: Option<DecodeFn>,
	encoder: Option<EncodeFn>,
	error_handling: ErrorHandling,
	registry: Option<Arc<RwLock<TypeRegistry>>>,
}

impl ConfigSet {
	/// Creates an empty set using the default format and the process-wide registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the configuration file location.
	pub fn with_location(mut self, location: impl Into<PathBuf>) -> Self {
		self.location = Some(location.into());
		self
	}

	pub fn with_format(mut self, format: Format) -> Self {
		self.format = format;
		self
	}

	/// Binds options against `registry` instead of the process-wide one.
	pub fn with_registry(mut self, registry: Arc<RwLock<TypeRegistry>>) -> Self {
		self.registry = Some(registry);
		self
	}

	pub fn with_error_handling(mut self, error_handling: ErrorHandling) -> Self {
		self.error_handling = error_handling;
		self
	}

	pub fn location(&self) -> Option<&Path> {
		self.location.as_deref()
	}

	pub fn set_location(&mut self, location: impl Into<PathBuf>) {
		self.location = Some(location.into());
	}

	pub fn format(&self) -> Format {
		self.format
	}

	pub fn set_format(&mut self, format: Format) {
		self.format = format;
	}

	/// Decoder used when the format is [`Format::Custom`].
	pub fn set_decoder<F>(&mut self, decoder: F)
	where
		F: Fn(&[u8]) -> Result<crate::Document, crate::FormatError> + Send + Sync + 'static,
	{
		self.decoder = Some(Box::new(decoder));
	}

	/// Encoder used when the format is [`Format::Custom`].
	pub fn set_encoder<F>(&mut self, encoder: F)
	where
		F: Fn(&crate::Document) -> Result<Vec<u8>, crate::FormatError> + Send + Sync + 'static,
	{
		self.encoder = Some(Box::new(encoder));
	}

	pub fn error_handling(&self) -> ErrorHandling {
		self.error_handling
	}

	pub fn set_error_handling(&mut self, error_handling: ErrorHandling) {
		self.error_handling = error_handling;
	}
}

impl fmt::Debug for ConfigSet {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ConfigSet")
			.field("formal", &self.formal.keys().collect::<Vec<_>>())
			.field("actual", &self.actual)
			.field("location", &self.location)
			.field("format", &self.format)
			.field("decoder", &self.decoder.is_some())
			.field("encoder", &self.encoder.is_some())
			.field("error_handling", &self.error_handling)
			.finish_non_exhaustive()
	}
}
