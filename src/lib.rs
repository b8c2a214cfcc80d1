/* src/lib.rs */

//!
//! Strongly-typed configuration options bound to shared variables.
//!
//! A program registers options on a [`ConfigSet`], each bound to a
//! [`Slot`] it keeps a handle to, then populates them from a flat
//! name-to-value document. Options the document does not mention keep
//! their defaults.
//!
//! - **value**: the [`Value`] capability, the basic [`SettingValue`]
//!   wrappers and the range-constrained family.
//! - **registry**: the [`TypeRegistry`] resolving a bound type to the
//!   factory that wraps it.
//! - **format**: codecs turning bytes into a [`Document`] and back.
//! - **set**: the [`ConfigSet`] lifecycle: registration, parse, save.
//! - **global**: a process-wide default [`ConfigSet`].
//!
//! ## Feature Flags
//!
//! - `json`, `xml`, `toml`, `yaml`: built-in formats (`json` and `xml` on by default).
//! - `logging`: emits `log` records for registration, assignment and file I/O.
//! - `full`: enables everything.
//!
//! ## Basic Usage
//!
//! ```
//! # #[cfg(feature = "json")]
//! # fn main() -> Result<(), confset::ConfigError> {
//! use confset::ConfigSet;
//!
//! let mut config = ConfigSet::new();
//! let greeting = config.add_option("greeting", String::from("hello"))?;
//! let repeats = config.add_option("repeats", 1_i64)?;
//!
//! config.parse_from_data(br#"{"repeats": 3}"#)?;
//!
//! assert_eq!(greeting.get(), "hello");
//! assert_eq!(repeats.get(), 3);
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "json"))]
//! # fn main() {}
//! ```
//!
//! See `demos/basic.rs` for a complete example.

pub mod error;
pub mod format;
pub mod global;
pub mod registry;
pub mod set;
pub mod value;

pub use error::{ConfigError, Result};
pub use format::{Codec, Document, Format, FormatError, Scalar};
pub use registry::{TypeRegistry, register_type};
pub use set::{ConfigOption, ConfigSet, ErrorHandling};
pub use value::{ChoiceValue, RangeValue, Setting, SettingValue, Slot, Value, ValueError};
