/* src/value/basic.rs */

use std::any::Any;

use super::{Setting, Slot, Value, ValueError};
use crate::format::Scalar;

/// Basic wrapper binding any [`Setting`] type to a [`Slot`].
pub struct SettingValue<T> {
	slot: Slot<T>,
}

pub type BoolValue = SettingValue<bool>;
pub type StringValue = SettingValue<String>;
pub type Int32Value = SettingValue<i32>;
pub type Int64Value = SettingValue<i64>;
pub type Float32Value = SettingValue<f32>;
pub type Float64Value = SettingValue<f64>;

impl<T: Setting> SettingValue<T> {
	pub fn new(slot: Slot<T>) -> Self {
		Self { slot }
	}

	/// Factory suitable for [`TypeRegistry::register`](crate::TypeRegistry::register).
	pub fn factory(slot: Slot<T>) -> Box<dyn Value> {
		Box::new(Self::new(slot))
	}

	pub fn slot(&self) -> &Slot<T> {
		&self.slot
	}
}

impl<T: Setting> Value for SettingValue<T> {
	fn stringify(&self) -> String {
		self.slot.with(T::to_text)
	}

	fn assign(&self, text: &str) -> Result<(), ValueError> {
		let value = T::parse_text(text)?;
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

impl Setting for bool {
	fn parse_text(text: &str) -> Result<Self, ValueError> {
		match text {
			"1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
			"0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
			_ => Err(ValueError::Parse(format!("invalid boolean: {text:?}"))),
		}
	}

	fn to_text(&self) -> String {
		self.to_string()
	}

	fn to_scalar(&self) -> Scalar {
		Scalar::Bool(*self)
	}
}

impl Setting for String {
	fn parse_text(text: &str) -> Result<Self, ValueError> {
		Ok(text.to_string())
	}

	fn to_text(&self) -> String {
		self.clone()
	}
}

/// Parses an optionally signed integer with base prefix.
///
/// `0x`, `0o` and `0b` select hex, octal and binary; a bare leading `0`
/// followed by more digits is octal.
fn parse_integer(text: &str) -> Result<i128, ValueError> {
	let invalid = || ValueError::Parse(format!("invalid integer: {text:?}"));

	let (negative, body) = match text.as_bytes().first() {
		Some(b'-') => (true, &text[1..]),
		Some(b'+') => (false, &text[1..]),
		_ => (false, text),
	};

	let prefixed = |lower: &str, upper: &str| body.strip_prefix(lower).or_else(|| body.strip_prefix(upper));
	let (radix, digits) = if let Some(rest) = prefixed("0x", "0X") {
		(16, rest)
	} else if let Some(rest) = prefixed("0o", "0O") {
		(8, rest)
	} else if let Some(rest) = prefixed("0b", "0B") {
		(2, rest)
	} else if body.len() > 1 && body.starts_with('0') {
		(8, &body[1..])
	} else {
		(10, body)
	};

	if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
		return Err(invalid());
	}

	let magnitude = u128::from_str_radix(digits, radix).map_err(|_| invalid())?;
	let magnitude = i128::try_from(magnitude).map_err(|_| invalid())?;
	Ok(if negative { -magnitude } else { magnitude })
}

macro_rules! integer_setting {
	($($ty:ty),* $(,)?) => {
		$(
			impl Setting for $ty {
				fn parse_text(text: &str) -> Result<Self, ValueError> {
					let wide = parse_integer(text)?;
					<$ty>::try_from(wide).map_err(|_| {
						ValueError::Parse(format!("{text:?} does not fit in {}", stringify!($ty)))
					})
				}

				fn to_text(&self) -> String {
					self.to_string()
				}

				fn to_scalar(&self) -> Scalar {
					i64::try_from(*self).map_or_else(|_| Scalar::Text(self.to_string()), Scalar::Int)
				}
			}
		)*
	};
}

integer_setting!(i32, i64, u16, u32, u64, usize);

// Literals that legitimately parse to a non-finite float. Anything else
// that does has overflowed the target width.
fn is_non_finite_literal(text: &str) -> bool {
	let body = text.strip_prefix(['+', '-']).unwrap_or(text);
	["inf", "infinity", "nan"]
		.iter()
		.any(|literal| body.eq_ignore_ascii_case(literal))
}

macro_rules! float_setting {
	($($ty:ty),* $(,)?) => {
		$(
			impl Setting for $ty {
				fn parse_text(text: &str) -> Result<Self, ValueError> {
					let value = text
						.parse::<$ty>()
						.map_err(|e| ValueError::Parse(format!("invalid float {text:?}: {e}")))?;
					if !value.is_finite() && !is_non_finite_literal(text) {
						return Err(ValueError::Parse(format!(
							"{text:?} does not fit in {}",
							stringify!($ty)
						)));
					}
					Ok(value)
				}

				fn to_text(&self) -> String {
					self.to_string()
				}

				// Non-finite floats have no JSON/TOML number form.
				fn to_scalar(&self) -> Scalar {
					if !self.is_finite() {
						return Scalar::Text(self.to_string());
					}
					self.to_string()
						.parse::<f64>()
						.map_or_else(|_| Scalar::Text(self.to_string()), Scalar::Float)
				}
			}
		)*
	};
}

float_setting!(f32, f64);
