/* src/set/write.rs */

use super::{ConfigOption, ConfigSet};
use crate::error::{ConfigError, Result};
use crate::value::Value;

impl ConfigSet {
	/// Defines an option backed by `value`, capturing its current text as the default.
	///
	/// Fails with [`ConfigError::DuplicateOption`] if `name` is taken; the
	/// existing option is never replaced.
	pub fn define(&mut self, value: Box<dyn Value>, name: &str) -> Result<()> {
		self.ensure_undefined(name)?;
		let option = ConfigOption::new(name, value);

		#[cfg(feature = "logging")]
		log::debug!(
			"Defined option '{}' ({}) with default {:?}",
			name,
			option.value().type_name(),
			option.default_text()
		);

		self.formal.insert(name.to_string(), option);
		Ok(())
	}

	/// Assigns `text` to the named option and marks it as set.
	///
	/// Setting an option that is already set is allowed and updates it.
	pub fn set(&mut self, name: &str, text: &str) -> Result<()> {
		let option = self.formal.get(name).ok_or_else(|| ConfigError::NotFound {
			name: name.to_string(),
		})?;
		option
			.value()
			.assign(text)
			.map_err(|e| ConfigError::from_value(name, e))?;
		self.actual.insert(name.to_string());
		Ok(())
	}

	pub(crate) fn ensure_undefined(&self, name: &str) -> Result<()> {
		if self.formal.contains_key(name) {
			return Err(ConfigError::DuplicateOption {
				name: name.to_string(),
			});
		}
		Ok(())
	}
}
