/* src/format/toml.rs */

use super::{Codec, Document, FormatError, Scalar};

/// TOML format using `toml`.
pub struct Toml;

impl Codec for Toml {
	fn extensions(&self) -> &'static [&'static str] {
		&["toml"]
	}

	fn decode(&self, input: &[u8]) -> Result<Document, FormatError> {
		let s = std::str::from_utf8(input)?;
		let table: ::toml::Table =
			::toml::from_str(s).map_err(|e| FormatError::Decode(e.to_string()))?;
		Ok(table
			.into_iter()
			.map(|(key, value)| (key, to_scalar(value)))
			.collect())
	}

	fn encode(&self, document: &Document) -> Result<Vec<u8>, FormatError> {
		::toml::to_string_pretty(document)
			.map(String::into_bytes)
			.map_err(|e| FormatError::Encode(e.to_string()))
	}
}

fn to_scalar(value: ::toml::Value) -> Scalar {
	match value {
		::toml::Value::Boolean(b) => Scalar::Bool(b),
		::toml::Value::Integer(i) => Scalar::Int(i),
		::toml::Value::Float(x) => Scalar::Float(x),
		::toml::Value::String(s) => Scalar::Text(s),
		other => Scalar::Text(other.to_string()),
	}
}
