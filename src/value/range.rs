/* src/value/range.rs */

//!
//! Range-constrained wrappers.
//!
//! Both variants reject an out-of-bounds assignment with
//! [`ValueError::Range`] and keep the previous value, so the bound slot
//! only ever holds an accepted value once registration has succeeded.

use std::any::Any;
use std::cmp::Ordering;

use super::{Setting, Slot, Value, ValueError};
use crate::format::Scalar;

/// Numeric wrapper accepting values in the inclusive range `[min, max]`.
pub struct RangeValue<T> {
	slot: Slot<T>,
	min: T,
	max: T,
}

impl<T: Setting + PartialOrd> RangeValue<T> {
	/// Fails if `min > max` or either bound is unordered (NaN).
	pub fn new(slot: Slot<T>, min: T, max: T) -> Result<Self, ValueError> {
		if !matches!(min.partial_cmp(&max), Some(Ordering::Less | Ordering::Equal)) {
			return Err(ValueError::Range(format!(
				"empty range [{}, {}]",
				min.to_text(),
				max.to_text()
			)));
		}
		Ok(Self { slot, min, max })
	}

	pub fn min(&self) -> &T {
		&self.min
	}

	pub fn max(&self) -> &T {
		&self.max
	}

	pub fn contains(&self, value: &T) -> bool {
		*value >= self.min && *value <= self.max
	}
}

impl<T: Setting + PartialOrd> Value for RangeValue<T> {
	fn stringify(&self) -> String {
		self.slot.with(T::to_text)
	}

	fn assign(&self, text: &str) -> Result<(), ValueError> {
		let value = T::parse_text(text)?;
		if !self.contains(&value) {
			return Err(ValueError::Range(format!(
				"{} is outside [{}, {}]",
				value.to_text(),
				self.min.to_text(),
				self.max.to_text()
			)));
		}
		self.slot.store(value);
		Ok(())
	}

	fn raw(&self) -> Box<dyn Any + Send> {
		Box::new(self.slot.get())
	}

	fn zero_text(&self) -> String {
		T::default().to_text()
	}

	fn scalar(&self) -> Scalar {
		self.slot.with(T::to_scalar)
	}
}

/// String wrapper accepting only members of an allowed set.
///
/// In case-insensitive mode membership is tested on lowercased text, but the
/// stored value keeps the casing that was assigned.
pub struct ChoiceValue {
	slot: Slot<String>,
	allowed: Vec<String>,
	case_sensitive: bool,
}

impl ChoiceValue {
	pub fn new<I, S>(slot: Slot<String>, case_sensitive: bool, allowed: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let allowed = allowed
			.into_iter()
			.map(Into::into)
			.map(|s: String| if case_sensitive { s } else { s.to_lowercase() })
			.collect();
		Self {
			slot,
			allowed,
			case_sensitive,
		}
	}

	pub fn is_case_sensitive(&self) -> bool {
		self.case_sensitive
	}

	/// Allowed values, lowercased in case-insensitive mode.
	pub fn allowed(&self) -> &[String] {
		&self.allowed
	}

	pub fn permits(&self, text: &str) -> bool {
		if self.case_sensitive {
			self.allowed.iter().any(|a| a == text)
		} else {
			let lowered = text.to_lowercase();
			self.allowed.iter().any(|a| *a == lowered)
		}
	}
}

impl Value for ChoiceValue {
	fn stringify(&self) -> String {
		self.slot.get()
	}

	fn assign(&self, text: &str) -> Result<(), ValueError> {
		if !self.permits(text) {
			return Err(ValueError::Range(format!(
				"{text:?} is not one of [{}]",
				self.allowed.join(", ")
			)));
		}
		self.slot.store(text.to_string());
		Ok(())
	}

	fn raw(&self) -> Box<dyn Any + Send> {
		Box::new(self.slot.get())
	}

	fn zero_text(&self) -> String {
		String::new()
	}
}
