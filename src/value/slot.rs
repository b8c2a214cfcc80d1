/* src/value/slot.rs */

use std::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;

/// Shared storage cell an option is bound to.
///
/// Clones share the same cell. Reads are wait-free snapshots and writes
/// replace the value atomically, so the caller's handle always observes
/// what the last successful assignment wrote.
pub struct Slot<T> {
	inner: Arc<ArcSwap<T>>,
}

impl<T> Slot<T> {
	/// Creates a slot holding `value`.
	pub fn new(value: T) -> Self {
		Self {
			inner: Arc::new(ArcSwap::from_pointee(value)),
		}
	}

	/// Returns a snapshot of the current value.
	pub fn load(&self) -> Arc<T> {
		self.inner.load_full()
	}

	/// Replaces the current value.
	pub fn store(&self, value: T) {
		self.inner.store(Arc::new(value));
	}

	/// Runs `f` against the current value without cloning it.
	pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
		let guard = self.inner.load();
		f(&**guard)
	}

	/// Puts back a snapshot taken with [`load`](Self::load).
	pub(crate) fn restore(&self, snapshot: Arc<T>) {
		self.inner.store(snapshot);
	}

	/// Returns true if both handles point at the same cell.
	pub fn ptr_eq(&self, other: &Self) -> bool {
		Arc::ptr_eq(&self.inner, &other.inner)
	}
}

impl<T: Clone> Slot<T> {
	/// Returns a clone of the current value.
	pub fn get(&self) -> T {
		self.with(T::clone)
	}
}

impl<T> Clone for Slot<T> {
	fn clone(&self) -> Self {
		Self {
			inner: Arc::clone(&self.inner),
		}
	}
}

impl<T: Default> Default for Slot<T> {
	fn default() -> Self {
		Self::new(T::default())
	}
}

impl<T: fmt::Debug> fmt::Debug for Slot<T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.with(|value| f.debug_tuple("Slot").field(value).finish())
	}
}
