/* src/set/pipeline.rs */

use std::fs;
use std::path::Path;

use super::{ConfigSet, ErrorHandling};
use crate::error::{ConfigError, Result};
use crate::format::Document;

impl ConfigSet {
	/// Decodes `data` with the active format and assigns every option it names.
	///
	/// Options already set are skipped, so the first successful assignment
	/// wins over later documents. Per-option failures do not stop the pass
	/// under [`ErrorHandling::Continue`]; the last one is returned.
	pub fn parse_from_data(&mut self, data: &[u8]) -> Result<()> {
		let document = self.decode(data)?;

		#[cfg(feature = "logging")]
		for key in document.keys().filter(|key| !self.formal.contains_key(*key)) {
			log::debug!("Ignoring unknown key '{}'", key);
		}

		let pending: Vec<String> = self
			.formal
			.keys()
			.filter(|name| !self.actual.contains(*name))
			.cloned()
			.collect();

		let mut last_error = None;
		for name in pending {
			let Some(scalar) = document.get(&name) else {
				continue;
			};
			let text = scalar.to_string();
			match self.set(&name, &text) {
				Ok(()) => {
					#[cfg(feature = "logging")]
					log::debug!("Set option '{}' to {:?}", name, text);
				}
				Err(e) => {
					#[cfg(feature = "logging")]
					log::warn!("Failed to set option '{}': {}", name, e);
					if self.error_handling == ErrorHandling::Stop {
						return Err(e);
					}
					last_error = Some(e);
				}
			}
		}

		last_error.map_or(Ok(()), Err)
	}

	/// Reads the file at the configured location and parses it.
	pub fn parse(&mut self) -> Result<()> {
		let location = self.require_location()?.to_path_buf();
		let data = fs::read(&location)?;

		#[cfg(feature = "logging")]
		log::info!("Parsing configuration from {:?}", location);

		self.parse_from_data(&data)
	}

	/// Builds a document from every option's current value.
	pub fn to_document(&self) -> Document {
		let mut document = Document::new();
		self.visit_all(|option| {
			document.insert(option.name().to_string(), option.value().scalar());
		});
		document
	}

	/// Encodes every option's current value with the active format.
	pub fn save_to(&self) -> Result<Vec<u8>> {
		self.encode(&self.to_document())
	}

	/// Encodes and writes to the configured location, creating missing directories.
	pub fn save(&self) -> Result<Vec<u8>> {
		let location = self.require_location()?;
		let bytes = self.save_to()?;

		if let Some(parent) = location.parent().filter(|p| !p.as_os_str().is_empty()) {
			fs::create_dir_all(parent)?;
		}
		fs::write(location, &bytes)?;

		#[cfg(feature = "logging")]
		log::info!("Saved {} options to {:?}", self.formal.len(), location);

		Ok(bytes)
	}

	fn decode(&self, data: &[u8]) -> Result<Document> {
		match self.format.codec() {
			Some(codec) => Ok(codec.decode(data)?),
			None => {
				let decoder = self.decoder.as_ref().ok_or(ConfigError::NoParser)?;
				Ok(decoder(data)?)
			}
		}
	}

	fn encode(&self, document: &Document) -> Result<Vec<u8>> {
		match self.format.codec() {
			Some(codec) => Ok(codec.encode(document)?),
			None => {
				let encoder = self.encoder.as_ref().ok_or(ConfigError::NoParser)?;
				Ok(encoder(document)?)
			}
		}
	}

	fn require_location(&self) -> Result<&Path> {
		self.location
			.as_deref()
			.filter(|path| !path.as_os_str().is_empty())
			.ok_or(ConfigError::NoLocation)
	}
}
