/* src/format/xml.rs */

//!
//! XML format using `quick-xml`.
//!
//! Documents are a flat list of named option elements:
//!
//! ```xml
//! <config>
//!   <option name="greeting">hello</option>
//!   <option name="repeats">3</option>
//! </config>
//! ```
//!
//! Option names go in an attribute because they need not be valid element
//! names. Every value decodes as text.

use std::fmt::Display;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use super::{Codec, Document, FormatError, Scalar};

const ROOT_TAG: &str = "config";
const OPTION_TAG: &str = "option";
const NAME_ATTR: &str = "name";

/// XML format using `quick-xml`.
pub struct Xml;

impl Codec for Xml {
	fn extensions(&self) -> &'static [&'static str] {
		&["xml"]
	}

	fn decode(&self, input: &[u8]) -> Result<Document, FormatError> {
		let text = std::str::from_utf8(input)?;
		let mut reader = Reader::from_str(text);
		let mut document = Document::new();
		// Name and accumulated text of the option element being read.
		let mut current: Option<(String, String)> = None;

		loop {
			match reader.read_event().map_err(decode_error)? {
				Event::Start(e) if e.name().as_ref() == OPTION_TAG.as_bytes() => {
					current = Some((option_name(&e)?, String::new()));
				}
				Event::Empty(e) if e.name().as_ref() == OPTION_TAG.as_bytes() => {
					document.insert(option_name(&e)?, Scalar::Text(String::new()));
				}
				Event::Text(e) => {
					if let Some((_, value)) = current.as_mut() {
						value.push_str(&e.unescape().map_err(decode_error)?);
					}
				}
				Event::CData(e) => {
					if let Some((_, value)) = current.as_mut() {
						value.push_str(std::str::from_utf8(&e)?);
					}
				}
				Event::End(e) if e.name().as_ref() == OPTION_TAG.as_bytes() => {
					if let Some((name, value)) = current.take() {
						document.insert(name, Scalar::Text(value));
					}
				}
				Event::Eof => break,
				_ => {}
			}
		}

		if let Some((name, _)) = current {
			return Err(FormatError::Decode(format!("unterminated option element: {name}")));
		}
		Ok(document)
	}

	fn encode(&self, document: &Document) -> Result<Vec<u8>, FormatError> {
		let mut writer = Writer::new_with_indent(Vec::new(), b' ', 2);
		writer
			.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
			.map_err(encode_error)?;
		writer
			.write_event(Event::Start(BytesStart::new(ROOT_TAG)))
			.map_err(encode_error)?;

		for (name, value) in document {
			let text = value.to_string();
			writer
				.create_element(OPTION_TAG)
				.with_attribute((NAME_ATTR, name.as_str()))
				.write_text_content(BytesText::new(&text))
				.map_err(encode_error)?;
		}

		writer
			.write_event(Event::End(BytesEnd::new(ROOT_TAG)))
			.map_err(encode_error)?;
		Ok(writer.into_inner())
	}
}

fn option_name(element: &BytesStart<'_>) -> Result<String, FormatError> {
	let attr = element
		.try_get_attribute(NAME_ATTR)
		.map_err(decode_error)?
		.ok_or_else(|| FormatError::Decode("option element without a name attribute".to_string()))?;
	Ok(attr.unescape_value().map_err(decode_error)?.into_owned())
}

fn decode_error(e: impl Display) -> FormatError {
	FormatError::Decode(e.to_string())
}

fn encode_error(e: impl Display) -> FormatError {
	FormatError::Encode(e.to_string())
}
