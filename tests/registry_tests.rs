/* tests/registry_tests.rs */

use std::sync::{Arc, RwLock};

use confset::{ConfigError, ConfigSet, Setting, SettingValue, Slot, TypeRegistry, ValueError};

#[derive(Debug, Clone, Default, PartialEq)]
struct Point {
	x: f32,
	y: f32,
}

impl Setting for Point {
	fn parse_text(text: &str) -> Result<Self, ValueError> {
		let inner = text.trim().trim_start_matches('(').trim_end_matches(')');
		let (x, y) = inner
			.split_once(',')
			.ok_or_else(|| ValueError::Parse(format!("expected (x,y), got {text:?}")))?;
		let coord = |s: &str| {
			s.trim()
				.parse::<f32>()
				.map_err(|e| ValueError::Parse(e.to_string()))
		};
		Ok(Self {
			x: coord(x)?,
			y: coord(y)?,
		})
	}

	fn to_text(&self) -> String {
		format!("({},{})", self.x, self.y)
	}
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct Never;

#[test]
fn test_custom_type_option() {
	confset::register_type(SettingValue::<Point>::factory);

	let mut config = ConfigSet::new();
	let origin = config.add_option("origin", Point { x: 1.5, y: -2.0 }).unwrap();
	assert_eq!(config.lookup("origin").unwrap().default_text(), "(1.5,-2)");

	config.set("origin", "(3, 4.25)").unwrap();
	assert_eq!(origin.get(), Point { x: 3.0, y: 4.25 });
	assert_eq!(
		config.lookup("origin").unwrap().get::<Point>(),
		Some(Point { x: 3.0, y: 4.25 })
	);

	assert!(config.set("origin", "(3)").unwrap_err().is_parse());
	assert_eq!(origin.get(), Point { x: 3.0, y: 4.25 });

	assert!(!config.is_zero_value("origin").unwrap());
	config.set("origin", "(0,0)").unwrap();
	assert!(config.is_zero_value("origin").unwrap());
}

#[test]
fn test_unregistered_type() {
	let mut config = ConfigSet::new();
	let err = config.add_option("never", Never).unwrap_err();
	match err {
		ConfigError::UnregisteredType { type_name } => assert!(type_name.ends_with("Never")),
		other => panic!("expected UnregisteredType, got {other:?}"),
	}
	assert!(config.lookup("never").is_none());
	assert!(config.is_empty());
}

#[test]
fn test_private_registry() {
	let registry = Arc::new(RwLock::new(TypeRegistry::new()));
	let mut config = ConfigSet::new().with_registry(Arc::clone(&registry));

	// An empty registry knows no primitives.
	assert!(matches!(
		config.add_option("count", 1_i64),
		Err(ConfigError::UnregisteredType { .. })
	));

	registry.write().unwrap().register_setting::<i64>();
	let count = config.add_option("count", 1_i64).unwrap();
	config.set("count", "2").unwrap();
	assert_eq!(count.get(), 2);
}

#[test]
fn test_last_registration_wins() {
	let mut registry = TypeRegistry::with_primitives();
	let primitives = registry.len();
	assert!(registry.contains::<i64>());
	assert!(registry.contains::<String>());
	assert!(!registry.contains::<Point>());

	// Replace the i64 factory with one clamping to a range.
	registry.register::<i64, _>(|slot: Slot<i64>| {
		Box::new(confset::RangeValue::new(slot, 0, 10).unwrap())
	});
	assert_eq!(registry.len(), primitives);

	let mut config = ConfigSet::new().with_registry(Arc::new(RwLock::new(registry)));
	config.add_option("small", 3_i64).unwrap();
	assert!(config.set("small", "11").unwrap_err().is_range());
}

#[test]
fn test_registered_range_factory_checks_default() {
	let mut registry = TypeRegistry::new();
	registry.register::<i64, _>(|slot: Slot<i64>| {
		Box::new(confset::RangeValue::new(slot, 0, 10).unwrap())
	});
	let mut config = ConfigSet::new().with_registry(Arc::new(RwLock::new(registry)));

	let err = config.add_option("level", 15_i64).unwrap_err();
	assert!(matches!(err, ConfigError::Range { ref name, .. } if name == "level"));
	assert!(config.lookup("level").is_none());

	// A rejected default leaves the caller's slot as it was.
	let slot = Slot::new(4_i64);
	assert!(config.add_option_var(&slot, "level", 11).unwrap_err().is_range());
	assert_eq!(slot.get(), 4);
	assert!(config.is_empty());

	config.add_option_var(&slot, "level", 10).unwrap();
	assert_eq!(slot.get(), 10);
	assert_eq!(config.lookup("level").unwrap().default_text(), "10");
}

#[test]
fn test_factory_lookup() {
	let registry = TypeRegistry::with_primitives();
	let factory = registry.factory::<i64>().unwrap();
	let slot = Slot::new(0_i64);
	let value = factory(slot.clone());
	value.assign("0x10").unwrap();
	assert_eq!(slot.get(), 16);

	assert!(registry.factory::<Never>().is_none());
}
