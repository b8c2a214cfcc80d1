/* demos/basic.rs */

use confset::{ConfigSet, Setting, SettingValue, ValueError};
use std::fs;

#[derive(Debug, Clone, Default)]
struct Vec3 {
	x: f64,
	y: f64,
	z: f64,
}

impl Setting for Vec3 {
	fn parse_text(text: &str) -> Result<Self, ValueError> {
		let parts = text
			.split(',')
			.map(|p| p.trim().parse::<f64>())
			.collect::<Result<Vec<_>, _>>()
			.map_err(|e| ValueError::Parse(e.to_string()))?;
		match parts.as_slice() {
			[x, y, z] => Ok(Self {
				x: *x,
				y: *y,
				z: *z,
			}),
			_ => Err(ValueError::Parse(format!(
				"expected 3 comma-separated values, got {text:?}"
			))),
		}
	}

	fn to_text(&self) -> String {
		format!("{},{},{}", self.x, self.y, self.z)
	}
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	// 0. Prepare a real file
	let config_path = "example_config.json";
	fs::write(
		config_path,
		br#"{"greeting": "hello from file", "repeats": 3, "local origin": "1,2,3", "level": "loud"}"#,
	)?;
	println!("Created {}", config_path);

	// 1. Register a caller-defined type once
	confset::register_type(SettingValue::<Vec3>::factory);

	// 2. Declare options
	let mut config = ConfigSet::new().with_location(config_path);
	let greeting = config.add_option("greeting", String::from("hi"))?;
	let repeats = config.add_range_option("repeats", 1_i64, 1, 10)?;
	let scale = config.add_option("scale", 2.5_f64)?;
	let origin = config.add_option("local origin", Vec3::default())?;
	let level = config.add_choice_option("level", "quiet", false, ["quiet", "normal"])?;

	// 3. Parse. "level" is rejected, everything else is applied.
	if let Err(e) = config.parse() {
		println!("Parse finished with an error: {}", e);
	}

	for _ in 0..repeats.get() {
		println!("{}", greeting.get());
	}
	println!("scale = {}, origin = {:?}, level = {}", scale.get(), origin.get(), level.get());

	config.visit_all(|option| {
		println!(
			"{:>14} = {:<20} (default {:?}, set: {})",
			option.name(),
			option.current_text(),
			option.default_text(),
			config.is_set(option.name())
		);
	});

	// 4. Save the current values back
	config.set("scale", "2.75")?;
	let bytes = config.save()?;
	println!("Saved:\n{}", String::from_utf8_lossy(&bytes));

	// Cleanup
	fs::remove_file(config_path)?;
	println!("Done.");
	Ok(())
}
