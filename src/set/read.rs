/* src/set/read.rs */

use super::{ConfigOption, ConfigSet};
use crate::error::{ConfigError, Result};

impl ConfigSet {
	/// Looks up an option by name.
	pub fn lookup(&self, name: &str) -> Option<&ConfigOption> {
		self.formal.get(name)
	}

	/// Calls `f` for every registered option, in lexicographic order.
	pub fn visit_all(&self, mut f: impl FnMut(&ConfigOption)) {
		for option in self.formal.values() {
			f(option);
		}
	}

	/// Calls `f` for every explicitly set option, in lexicographic order.
	pub fn visit(&self, mut f: impl FnMut(&ConfigOption)) {
		for option in self.actual.iter().filter_map(|name| self.formal.get(name)) {
			f(option);
		}
	}

	/// Checks whether the named option holds its wrapper's zero value.
	pub fn is_zero_value(&self, name: &str) -> Result<bool> {
		self.lookup(name)
			.ok_or_else(|| ConfigError::NotFound {
				name: name.to_string(),
			})?
			.is_zero_value()
	}

	/// Returns true if the option received an explicit assignment.
	pub fn is_set(&self, name: &str) -> bool {
		self.actual.contains(name)
	}

	/// Registered option names, sorted.
	pub fn names(&self) -> impl Iterator<Item = &str> {
		self.formal.keys().map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.formal.len()
	}

	pub fn is_empty(&self) -> bool {
		self.formal.is_empty()
	}
}
