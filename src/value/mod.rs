/* src/value/mod.rs */

//!
//! The `Value` capability and the wrappers built on it.
//!
//! A [`Value`] turns a caller-owned [`Slot`] into something a
//! [`ConfigSet`](crate::ConfigSet) can stringify, assign from text and read
//! back. The basic family is [`SettingValue`], generic over any [`Setting`];
//! the range-constrained family lives in [`range`].

mod basic;
pub mod range;
mod slot;

pub use basic::{
	BoolValue, Float32Value, Float64Value, Int32Value, Int64Value, SettingValue, StringValue,
};
pub use range::{ChoiceValue, RangeValue};
pub use slot::Slot;

use std::any::Any;

use crate::format::Scalar;

/// Errors raised by a single wrapper on assignment.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValueError {
	/// Text is not valid syntax for the target type.
	#[error("parse error: {0}")]
	Parse(String),
	/// Text parsed but the value is outside the configured bounds.
	#[error("value out of range: {0}")]
	Range(String),
}

/// Uniform settable/stringifiable view over one option's storage.
///
/// Implementations must hold a handle to shared storage rather than a copy:
/// `assign` is observed through every clone of the bound [`Slot`].
pub trait Value: Send + Sync {
	/// Current value as text.
	fn stringify(&self) -> String;

	/// Parses `text` and overwrites the storage. On error the storage is untouched.
	fn assign(&self, text: &str) -> Result<(), ValueError>;

	/// Current value, boxed for introspection.
	fn raw(&self) -> Box<dyn Any + Send>;

	/// Text this wrapper variant produces for its language-level zero value.
	fn zero_text(&self) -> String;

	/// Current value in document form, used when saving.
	fn scalar(&self) -> Scalar {
		Scalar::Text(self.stringify())
	}

	/// Name of the implementing wrapper, for diagnostics.
	fn type_name(&self) -> &'static str {
		std::any::type_name::<Self>()
	}
}

/// A plain type that converts to and from option text.
///
/// `Default` supplies the zero value used by zero-value checks.
pub trait Setting: Clone + Default + Send + Sync + 'static {
	/// Parses option text into a value.
	fn parse_text(text: &str) -> Result<Self, ValueError>;

	/// Formats the value as option text. Must round-trip through `parse_text`.
	fn to_text(&self) -> String;

	/// Typed document form. Defaults to text.
	///
	/// [`Scalar::Int`] is 64-bit signed, so unsigned values above `i64::MAX`
	/// are saved as text and read back through `parse_text`. Non-finite
	/// floats are saved as text too.
	fn to_scalar(&self) -> Scalar {
		Scalar::Text(self.to_text())
	}
}
