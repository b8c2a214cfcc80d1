/* src/format/json.rs */

use serde_json::Value as JsonValue;

use super::{Codec, Document, FormatError, Scalar};

/// JSON format using `serde_json`. The top level must be an object.
pub struct Json;

impl Codec for Json {
	fn extensions(&self) -> &'static [&'static str] {
		&["json"]
	}

	fn decode(&self, input: &[u8]) -> Result<Document, FormatError> {
		let map: serde_json::Map<String, JsonValue> =
			serde_json::from_slice(input).map_err(|e| FormatError::Decode(e.to_string()))?;
		Ok(map
			.into_iter()
			.filter_map(|(key, value)| to_scalar(value).map(|scalar| (key, scalar)))
			.collect())
	}

	fn encode(&self, document: &Document) -> Result<Vec<u8>, FormatError> {
		serde_json::to_vec_pretty(document).map_err(|e| FormatError::Encode(e.to_string()))
	}
}

fn to_scalar(value: JsonValue) -> Option<Scalar> {
	match value {
		JsonValue::Null => None,
		JsonValue::Bool(b) => Some(Scalar::Bool(b)),
		JsonValue::Number(n) => Some(if let Some(i) = n.as_i64() {
			Scalar::Int(i)
		} else if n.is_u64() {
			Scalar::Text(n.to_string())
		} else {
			n.as_f64()
				.map_or_else(|| Scalar::Text(n.to_string()), Scalar::Float)
		}),
		JsonValue::String(s) => Some(Scalar::Text(s)),
		// Arrays and objects are carried verbatim as compact JSON.
		other => Some(Scalar::Text(other.to_string())),
	}
}
