/* tests/save_tests.rs */

use confset::{ConfigError, ConfigSet, Document, Format, FormatError, Scalar, Slot};

struct Shape {
	name: Slot<String>,
	count: Slot<i64>,
	ratio: Slot<f64>,
	small: Slot<f32>,
	enabled: Slot<bool>,
	port: Slot<u16>,
	mode: Slot<String>,
	untouched: Slot<i32>,
}

fn register(config: &mut ConfigSet) -> Shape {
	Shape {
		name: config.add_option("name", String::new()).unwrap(),
		count: config.add_option("count", 0_i64).unwrap(),
		ratio: config.add_option("ratio", 0.0_f64).unwrap(),
		small: config.add_option("small", 0.0_f32).unwrap(),
		enabled: config.add_option("enabled", false).unwrap(),
		port: config.add_range_option("port", 80_u16, 1, 65535).unwrap(),
		mode: config
			.add_choice_option("mode", "fast", false, ["fast", "slow"])
			.unwrap(),
		untouched: config.add_option("untouched", 7_i32).unwrap(),
	}
}

fn populate(config: &mut ConfigSet) {
	config.set("name", "  spaced <tag> & \"quoted\" ünïcode  ").unwrap();
	config.set("count", "-9000000000").unwrap();
	config.set("ratio", "0.1").unwrap();
	config.set("small", "2.5").unwrap();
	config.set("enabled", "true").unwrap();
	config.set("port", "8080").unwrap();
	config.set("mode", "SLOW").unwrap();
}

fn assert_round_trip(format: Format) {
	let mut source = ConfigSet::new().with_format(format);
	let original = register(&mut source);
	populate(&mut source);
	let bytes = source.save_to().unwrap();

	let mut target = ConfigSet::new().with_format(format);
	let copy = register(&mut target);
	target.parse_from_data(&bytes).unwrap();

	assert_eq!(copy.name.get(), original.name.get());
	assert_eq!(copy.count.get(), original.count.get());
	assert_eq!(copy.ratio.get(), original.ratio.get());
	assert_eq!(copy.small.get(), original.small.get());
	assert_eq!(copy.enabled.get(), original.enabled.get());
	assert_eq!(copy.port.get(), original.port.get());
	assert_eq!(copy.mode.get(), original.mode.get());
	assert_eq!(copy.untouched.get(), 7);

	source.visit(|option| {
		let other = target.lookup(option.name()).unwrap();
		assert_eq!(other.current_text(), option.current_text(), "{}", option.name());
	});
}

#[cfg(feature = "json")]
#[test]
fn test_json_round_trip() {
	assert_round_trip(Format::Json);
}

#[cfg(feature = "xml")]
#[test]
fn test_xml_round_trip() {
	assert_round_trip(Format::Xml);
}

#[cfg(feature = "toml")]
#[test]
fn test_toml_round_trip() {
	assert_round_trip(Format::Toml);
}

#[cfg(feature = "yaml")]
#[test]
fn test_yaml_round_trip() {
	assert_round_trip(Format::Yaml);
}

#[test]
fn test_document_uses_current_values() {
	let mut config = ConfigSet::new();
	config.add_option("count", 1_i64).unwrap();
	config.add_option("label", String::from("a")).unwrap();
	config.add_option("ratio", 0.5_f64).unwrap();
	config.add_option("on", true).unwrap();
	config.add_option("big", u64::MAX).unwrap();
	config.set("count", "2").unwrap();

	let document = config.to_document();
	assert_eq!(document["count"], Scalar::Int(2));
	assert_eq!(document["label"], Scalar::Text("a".to_string()));
	assert_eq!(document["ratio"], Scalar::Float(0.5));
	assert_eq!(document["on"], Scalar::Bool(true));
	assert_eq!(document["big"], Scalar::Text(u64::MAX.to_string()));
}

#[cfg(feature = "json")]
#[test]
fn test_unsigned_above_i64_survives_json() {
	let mut source = ConfigSet::new();
	source.add_option("big", u64::MAX).unwrap();
	source.add_option("fits", 7_u64).unwrap();
	let bytes = source.save_to().unwrap();

	let saved: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
	assert_eq!(saved["big"], serde_json::json!(u64::MAX.to_string()));
	assert_eq!(saved["fits"], serde_json::json!(7));

	let mut target = ConfigSet::new();
	let big = target.add_option("big", 0_u64).unwrap();
	target.parse_from_data(&bytes).unwrap();
	assert_eq!(big.get(), u64::MAX);
}

#[cfg(feature = "json")]
#[test]
fn test_save_creates_directories() -> Result<(), Box<dyn std::error::Error>> {
	let dir = tempfile::tempdir()?;
	let path = dir.path().join("nested").join("deeper").join("config.json");

	let mut config = ConfigSet::new().with_location(&path);
	config.add_option("greeting", String::from("hello"))?;
	config.add_option("repeats", 3_i64)?;
	let bytes = config.save()?;

	assert_eq!(std::fs::read(&path)?, bytes);
	let saved: serde_json::Value = serde_json::from_slice(&bytes)?;
	assert_eq!(saved["greeting"], "hello");
	assert_eq!(saved["repeats"], 3);

	let mut reloaded = ConfigSet::new().with_location(&path);
	let greeting = reloaded.add_option("greeting", String::new())?;
	let repeats = reloaded.add_option("repeats", 0_i64)?;
	reloaded.parse()?;
	assert_eq!(greeting.get(), "hello");
	assert_eq!(repeats.get(), 3);
	Ok(())
}

#[test]
fn test_save_without_location() {
	let config = ConfigSet::new();
	assert!(matches!(config.save(), Err(ConfigError::NoLocation)));
}

fn encode_lines(document: &Document) -> Result<Vec<u8>, FormatError> {
	Ok(document
		.iter()
		.map(|(name, value)| format!("{name}={value}\n"))
		.collect::<String>()
		.into_bytes())
}

#[test]
fn test_custom_format_requires_encoder() {
	let mut config = ConfigSet::new().with_format(Format::Custom);
	config.add_option("b", 2_i64).unwrap();
	config.add_option("a", String::from("x")).unwrap();

	assert!(matches!(config.save_to(), Err(ConfigError::NoParser)));

	config.set_encoder(encode_lines);
	assert_eq!(config.save_to().unwrap(), b"a=x\nb=2\n");
}

#[cfg(feature = "xml")]
#[test]
fn test_xml_document_shape() {
	let mut config = ConfigSet::new().with_format(Format::Xml);
	let greeting = config.add_option("greeting", String::from("unset")).unwrap();
	let empty = config.add_option("empty", String::from("unset")).unwrap();
	let origin = config.add_option("local origin", 0_i64).unwrap();

	let xml = br#"<?xml version="1.0"?>
<config>
  <option name="greeting">hello &amp; welcome</option>
  <option name="empty"/>
  <option name="local origin"><![CDATA[42]]></option>
  <option name="unknown">ignored</option>
</config>"#;
	config.parse_from_data(xml).unwrap();

	assert_eq!(greeting.get(), "hello & welcome");
	assert_eq!(empty.get(), "");
	assert_eq!(origin.get(), 42);

	let err = ConfigSet::new()
		.with_format(Format::Xml)
		.parse_from_data(b"<config><option>no name</option></config>")
		.unwrap_err();
	assert!(matches!(err, ConfigError::Format(FormatError::Decode(_))));
}

#[test]
fn test_format_from_path() {
	#[cfg(feature = "json")]
	assert_eq!(Format::from_path("settings/app.JSON"), Some(Format::Json));
	#[cfg(feature = "xml")]
	assert_eq!(Format::from_extension("xml"), Some(Format::Xml));
	#[cfg(feature = "yaml")]
	assert_eq!(Format::from_path("app.yml"), Some(Format::Yaml));
	assert_eq!(Format::from_path("app.ini"), None);
	assert_eq!(Format::from_path("no_extension"), None);
}
