/* src/set/option.rs */

use std::any::Any;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

use crate::error::{ConfigError, Result};
use crate::value::Value;

/// A named binding of a [`Value`] plus its serialized default.
pub struct ConfigOption {
	name: String,
	default_text: String,
	value: Box<dyn Value>,
}

impl ConfigOption {
	/// Captures the default as the value's current text.
	pub(crate) fn new(name: &str, value: Box<dyn Value>) -> Self {
		Self {
			name: name.to_string(),
			default_text: value.stringify(),
			value,
		}
	}

	/// Name as it appears in the document.
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Text of the value at registration time.
	pub fn default_text(&self) -> &str {
		&self.default_text
	}

	pub fn value(&self) -> &dyn Value {
		self.value.as_ref()
	}

	pub fn current_text(&self) -> String {
		self.value.stringify()
	}

	/// Current value if it is a `T`.
	pub fn get<T: 'static>(&self) -> Option<T> {
		self.value.raw().downcast::<T>().ok().map(|boxed| *boxed)
	}

	/// Returns true if the current value stringifies like the wrapper's zero value.
	///
	/// A panic inside a caller-defined [`Value`] is reported as
	/// [`ConfigError::ZeroValue`] instead of unwinding further.
	pub fn is_zero_value(&self) -> Result<bool> {
		let value = self.value.as_ref();
		panic::catch_unwind(AssertUnwindSafe(|| value.stringify() == value.zero_text())).map_err(
			|payload| ConfigError::ZeroValue {
				name: self.name.clone(),
				reason: format!(
					"panic in {}: {}",
					value.type_name(),
					panic_message(&*payload)
				),
			},
		)
	}
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
	if let Some(s) = payload.downcast_ref::<&str>() {
		(*s).to_string()
	} else if let Some(s) = payload.downcast_ref::<String>() {
		s.clone()
	} else {
		"unknown panic payload".to_string()
	}
}

impl fmt::Debug for ConfigOption {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("ConfigOption")
			.field("name", &self.name)
			.field("default_text", &self.default_text)
			.field("current", &self.value.stringify())
			.finish()
	}
}
