/* src/global.rs */

//!
//! Process-wide default [`ConfigSet`].
//!
//! The instance is created on first use behind a [`OnceLock`] and guarded by
//! a mutex. Closures passed to [`visit`], [`visit_all`] and [`with_default`]
//! run while the lock is held and must not call back into this module.

use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use crate::error::Result;
use crate::format::{Document, Format, FormatError};
use crate::set::{ConfigOption, ConfigSet};
use crate::value::{Setting, Slot};

static DEFAULT: OnceLock<Mutex<ConfigSet>> = OnceLock::new();

fn instance() -> MutexGuard<'static, ConfigSet> {
	DEFAULT
		.get_or_init(|| Mutex::new(ConfigSet::new()))
		.lock()
		.unwrap_or_else(PoisonError::into_inner)
}

/// Runs `f` with exclusive access to the default set.
pub fn with_default<R>(f: impl FnOnce(&mut ConfigSet) -> R) -> R {
	f(&mut instance())
}

pub fn add_option<T: 'static>(name: &str, default: T) -> Result<Slot<T>> {
	instance().add_option(name, default)
}

pub fn add_option_var<T: 'static>(slot: &Slot<T>, name: &str, default: T) -> Result<()> {
	instance().add_option_var(slot, name, default)
}

pub fn add_range_option<T>(name: &str, default: T, min: T, max: T) -> Result<Slot<T>>
where
	T: Setting + PartialOrd,
{
	instance().add_range_option(name, default, min, max)
}

pub fn add_choice_option<I, S>(
	name: &str,
	default: &str,
	case_sensitive: bool,
	allowed: I,
) -> Result<Slot<String>>
where
	I: IntoIterator<Item = S>,
	S: Into<String>,
{
	instance().add_choice_option(name, default, case_sensitive, allowed)
}

pub fn set_location(location: impl Into<PathBuf>) {
	instance().set_location(location);
}

pub fn set_format(format: Format) {
	instance().set_format(format);
}

pub fn set_decoder<F>(decoder: F)
where
	F: Fn(&[u8]) -> std::result::Result<Document, FormatError> + Send + Sync + 'static,
{
	instance().set_decoder(decoder);
}

pub fn set_encoder<F>(encoder: F)
where
	F: Fn(&Document) -> std::result::Result<Vec<u8>, FormatError> + Send + Sync + 'static,
{
	instance().set_encoder(encoder);
}

pub fn parse() -> Result<()> {
	instance().parse()
}

pub fn parse_from_data(data: &[u8]) -> Result<()> {
	instance().parse_from_data(data)
}

pub fn save() -> Result<Vec<u8>> {
	instance().save()
}

pub fn save_to() -> Result<Vec<u8>> {
	instance().save_to()
}

pub fn set(name: &str, text: &str) -> Result<()> {
	instance().set(name, text)
}

pub fn is_zero_value(name: &str) -> Result<bool> {
	instance().is_zero_value(name)
}

pub fn visit(f: impl FnMut(&ConfigOption)) {
	instance().visit(f);
}

pub fn visit_all(f: impl FnMut(&ConfigOption)) {
	instance().visit_all(f);
}
