/* src/format/yaml.rs */

use serde_yaml::{Mapping, Value as YamlValue};

use super::{Codec, Document, FormatError, Scalar};

/// YAML format using `serde_yaml`. The top level must be a mapping.
pub struct Yaml;

impl Codec for Yaml {
	fn extensions(&self) -> &'static [&'static str] {
		&["yaml", "yml"]
	}

	fn decode(&self, input: &[u8]) -> Result<Document, FormatError> {
		let mapping: Mapping =
			serde_yaml::from_slice(input).map_err(|e| FormatError::Decode(e.to_string()))?;
		Ok(mapping
			.into_iter()
			.filter_map(|(key, value)| {
				let key = match key {
					YamlValue::String(s) => s,
					YamlValue::Number(n) => n.to_string(),
					YamlValue::Bool(b) => b.to_string(),
					_ => return None,
				};
				to_scalar(value).map(|scalar| (key, scalar))
			})
			.collect())
	}

	fn encode(&self, document: &Document) -> Result<Vec<u8>, FormatError> {
		serde_yaml::to_string(document)
			.map(String::into_bytes)
			.map_err(|e| FormatError::Encode(e.to_string()))
	}
}

fn to_scalar(value: YamlValue) -> Option<Scalar> {
	match value {
		YamlValue::Null => None,
		YamlValue::Bool(b) => Some(Scalar::Bool(b)),
		YamlValue::Number(n) => Some(if let Some(i) = n.as_i64() {
			Scalar::Int(i)
		} else if n.is_u64() {
			Scalar::Text(n.to_string())
		} else {
			n.as_f64()
				.map_or_else(|| Scalar::Text(n.to_string()), Scalar::Float)
		}),
		YamlValue::String(s) => Some(Scalar::Text(s)),
		other => serde_yaml::to_string(&other)
			.ok()
			.map(|s| Scalar::Text(s.trim_end().to_string())),
	}
}
