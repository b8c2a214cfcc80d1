/* src/registry.rs */

//!
//! Type registry mapping a bound type to the factory that wraps it.
//!
//! Dispatch happens once, when an option is bound: the factory for `T` is
//! looked up by [`TypeId`] and downcast back to its concrete signature.
//! Nothing on the parse path inspects types.

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::sync::{Arc, OnceLock, PoisonError, RwLock};

use crate::value::{Setting, SettingValue, Slot, Value};

/// Wraps a slot of `T` into a [`Value`].
pub type Factory<T> = Arc<dyn Fn(Slot<T>) -> Box<dyn Value> + Send + Sync>;

struct Registration {
	type_name: &'static str,
	// Always a `Factory<T>` for the `TypeId` it is keyed under.
	factory: Box<dyn Any + Send + Sync>,
}

/// Mapping from type identity to value factory.
#[derive(Default)]
pub struct TypeRegistry {
	factories: HashMap<TypeId, Registration>,
}

impl TypeRegistry {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a registry with every built-in [`Setting`] type registered.
	pub fn with_primitives() -> Self {
		let mut registry = Self::new();
		registry.register_setting::<bool>();
		registry.register_setting::<String>();
		registry.register_setting::<i32>();
		registry.register_setting::<i64>();
		registry.register_setting::<u16>();
		registry.register_setting::<u32>();
		registry.register_setting::<u64>();
		registry.register_setting::<usize>();
		registry.register_setting::<f32>();
		registry.register_setting::<f64>();
		registry
	}

	/// Associates `T` with `factory`. A previous factory for `T` is replaced.
	pub fn register<T, F>(&mut self, factory: F)
	where
		T: 'static,
		F: Fn(Slot<T>) -> Box<dyn Value> + Send + Sync + 'static,
	{
		let factory: Factory<T> = Arc::new(factory);
		self.factories.insert(
			TypeId::of::<T>(),
			Registration {
				type_name: type_name::<T>(),
				factory: Box::new(factory),
			},
		);
	}

	/// Registers `T` with the basic [`SettingValue`] wrapper.
	pub fn register_setting<T: Setting>(&mut self) {
		self.register::<T, _>(SettingValue::<T>::factory);
	}

	/// Returns the factory registered for `T`.
	pub fn factory<T: 'static>(&self) -> Option<Factory<T>> {
		self.factories
			.get(&TypeId::of::<T>())
			.and_then(|registration| registration.factory.downcast_ref::<Factory<T>>())
			.cloned()
	}

	pub fn contains<T: 'static>(&self) -> bool {
		self.factories.contains_key(&TypeId::of::<T>())
	}

	/// Names of all registered types, sorted.
	pub fn type_names(&self) -> Vec<&'static str> {
		let mut names: Vec<_> = self.factories.values().map(|r| r.type_name).collect();
		names.sort_unstable();
		names
	}

	pub fn len(&self) -> usize {
		self.factories.len()
	}

	pub fn is_empty(&self) -> bool {
		self.factories.is_empty()
	}
}

impl std::fmt::Debug for TypeRegistry {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TypeRegistry")
			.field("types", &self.type_names())
			.finish()
	}
}

static GLOBAL: OnceLock<Arc<RwLock<TypeRegistry>>> = OnceLock::new();

/// The process-wide registry, pre-populated with the built-in primitives.
pub fn global() -> Arc<RwLock<TypeRegistry>> {
	Arc::clone(GLOBAL.get_or_init(|| Arc::new(RwLock::new(TypeRegistry::with_primitives()))))
}

/// Registers `factory` for `T` in the process-wide registry.
pub fn register_type<T, F>(factory: F)
where
	T: 'static,
	F: Fn(Slot<T>) -> Box<dyn Value> + Send + Sync + 'static,
{
	let registry = global();
	registry
		.write()
		.unwrap_or_else(PoisonError::into_inner)
		.register::<T, F>(factory);
	#[cfg(feature = "logging")]
	log::debug!("Registered value factory for {}", type_name::<T>());
}
