/* tests/range_tests.rs */

use confset::{ConfigError, ConfigSet, Slot};

#[test]
fn test_range_default_rejected_at_registration() {
	let mut config = ConfigSet::new();

	let err = config.add_range_option("level", 15_i64, 0, 10).unwrap_err();
	assert!(matches!(err, ConfigError::Range { ref name, .. } if name == "level"));
	assert!(config.lookup("level").is_none());
	assert!(config.is_empty());

	// The name is still free for a valid registration.
	let level = config.add_range_option("level", 5_i64, 0, 10).unwrap();
	assert_eq!(level.get(), 5);
}

#[test]
fn test_range_var_keeps_slot_on_rejection() {
	let mut config = ConfigSet::new();
	let slot = Slot::new(3_i32);

	assert!(config.add_range_option_var(&slot, "n", 42, -10, 10).is_err());
	assert_eq!(slot.get(), 3);

	config.add_range_option_var(&slot, "n", -10, -10, 10).unwrap();
	assert_eq!(slot.get(), -10);
	assert_eq!(config.lookup("n").unwrap().default_text(), "-10");
}

#[test]
fn test_range_set() {
	let mut config = ConfigSet::new();
	let ratio = config.add_range_option("ratio", 0.5_f64, 0.0, 1.0).unwrap();

	assert!(config.set("ratio", "1.5").unwrap_err().is_range());
	assert!(config.set("ratio", "abc").unwrap_err().is_parse());
	assert_eq!(ratio.get(), 0.5);
	assert!(!config.is_set("ratio"));

	config.set("ratio", "1").unwrap();
	assert_eq!(ratio.get(), 1.0);
}

#[test]
fn test_empty_bounds_rejected() {
	let mut config = ConfigSet::new();
	assert!(
		config
			.add_range_option("bad", 5_u32, 10, 1)
			.unwrap_err()
			.is_range()
	);
	assert!(config.lookup("bad").is_none());
}

#[test]
fn test_choice_case_insensitive() {
	let mut config = ConfigSet::new();
	let direction = config
		.add_choice_option("direction", "up", false, ["up", "down", "left", "right"])
		.unwrap();

	config.set("direction", "LEFT").unwrap();
	assert_eq!(direction.get(), "LEFT");
	assert_eq!(
		config.lookup("direction").unwrap().get::<String>().as_deref(),
		Some("LEFT")
	);

	let err = config.set("direction", "sideways").unwrap_err();
	assert!(err.is_range());
	assert_eq!(direction.get(), "LEFT");
}

#[test]
fn test_choice_default_rejected() {
	let mut config = ConfigSet::new();
	let err = config
		.add_choice_option("foo", "", false, ["bar", "baz"])
		.unwrap_err();
	assert!(err.is_range());
	assert!(config.lookup("foo").is_none());
}

#[cfg(feature = "json")]
#[test]
fn test_choice_from_document() {
	let mut config = ConfigSet::new();
	let direction = config
		.add_choice_option("direction", "up", false, ["up", "down", "left", "right"])
		.unwrap();

	config
		.parse_from_data(br#"{"direction": "left"}"#)
		.unwrap();
	assert_eq!(direction.get(), "left");
}

#[cfg(feature = "json")]
#[test]
fn test_range_from_document() {
	let mut config = ConfigSet::new();
	let workers = config.add_range_option("workers", 4_usize, 1, 64).unwrap();

	let err = config.parse_from_data(br#"{"workers": 128}"#).unwrap_err();
	assert!(err.is_range());
	assert_eq!(workers.get(), 4);
	assert!(config.is_zero_value("workers").is_ok_and(|zero| !zero));
}
