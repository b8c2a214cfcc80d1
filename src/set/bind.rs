/* src/set/bind.rs */

use std::any::type_name;
use std::sync::PoisonError;

use super::ConfigSet;
use crate::error::{ConfigError, Result};
use crate::registry::{self, Factory};
use crate::value::{ChoiceValue, RangeValue, Setting, Slot, Value};

impl ConfigSet {
	/// Registers an option of type `T` and returns the slot it is bound to.
	///
	/// The factory for `T` is resolved from the registry; primitives are
	/// pre-registered, other types need a
	/// [`register_type`](crate::register_type) call first.
	pub fn add_option<T: 'static>(&mut self, name: &str, default: T) -> Result<Slot<T>> {
		let slot = Slot::new(default);
		self.bind(&slot, name)?;
		Ok(slot)
	}

	/// Stores `default` into `slot` and registers an option bound to it.
	///
	/// If registration fails the slot is restored to its previous value.
	pub fn add_option_var<T: 'static>(&mut self, slot: &Slot<T>, name: &str, default: T) -> Result<()> {
		self.ensure_undefined(name)?;
		let previous = slot.load();
		slot.store(default);
		self.bind(slot, name).inspect_err(|_| slot.restore(previous))
	}

	/// Registers a numeric option restricted to `[min, max]`.
	///
	/// An out-of-range default fails with [`ConfigError::Range`] and the
	/// option is not created.
	pub fn add_range_option<T>(&mut self, name: &str, default: T, min: T, max: T) -> Result<Slot<T>>
	where
		T: Setting + PartialOrd,
	{
		let slot = Slot::new(T::default());
		self.add_range_option_var(&slot, name, default, min, max)?;
		Ok(slot)
	}

	/// Like [`add_range_option`](Self::add_range_option), bound to an existing slot.
	///
	/// The slot is left untouched if registration fails.
	pub fn add_range_option_var<T>(
		&mut self,
		slot: &Slot<T>,
		name: &str,
		default: T,
		min: T,
		max: T,
	) -> Result<()>
	where
		T: Setting + PartialOrd,
	{
		self.ensure_undefined(name)?;
		let value =
			RangeValue::new(slot.clone(), min, max).map_err(|e| ConfigError::from_value(name, e))?;
		self.define_validated(Box::new(value), name, &default.to_text())
	}

	/// Registers a string option restricted to the `allowed` set.
	pub fn add_choice_option<I, S>(
		&mut self,
		name: &str,
		default: &str,
		case_sensitive: bool,
		allowed: I,
	) -> Result<Slot<String>>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		let slot = Slot::new(String::new());
		self.add_choice_option_var(&slot, name, default, case_sensitive, allowed)?;
		Ok(slot)
	}

	/// Like [`add_choice_option`](Self::add_choice_option), bound to an existing slot.
	pub fn add_choice_option_var<I, S>(
		&mut self,
		slot: &Slot<String>,
		name: &str,
		default: &str,
		case_sensitive: bool,
		allowed: I,
	) -> Result<()>
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		self.ensure_undefined(name)?;
		let value = ChoiceValue::new(slot.clone(), case_sensitive, allowed);
		self.define_validated(Box::new(value), name, default)
	}

	// Registry factories may return constrained wrappers, so the slot's
	// current value is pushed back through `assign` before defining.
	fn bind<T: 'static>(&mut self, slot: &Slot<T>, name: &str) -> Result<()> {
		let factory = self.resolve_factory::<T>()?;
		let value = factory(slot.clone());
		let default = value.stringify();
		self.define_validated(value, name, &default)
	}

	fn resolve_factory<T: 'static>(&self) -> Result<Factory<T>> {
		let registry = self.registry.clone().unwrap_or_else(registry::global);
		let guard = registry.read().unwrap_or_else(PoisonError::into_inner);
		guard.factory::<T>().ok_or(ConfigError::UnregisteredType {
			type_name: type_name::<T>(),
		})
	}

	// Assigns the default through the wrapper so bounds apply before the
	// option becomes visible.
	fn define_validated(&mut self, value: Box<dyn Value>, name: &str, default: &str) -> Result<()> {
		value
			.assign(default)
			.map_err(|e| ConfigError::from_value(name, e))?;
		self.define(value, name)
	}
}
