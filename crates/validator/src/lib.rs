//! # argus-validator
//!
//! Fluent argument validation with descriptive, structured errors.
//!
//! A chain wraps an argument together with its name, applies constraints
//! one after another with `?`, and hands back the value (or a converted
//! value, for parsing) when every constraint passes. The first violation
//! becomes an [`ArgError`](foundation::ArgError) naming the argument.
//!
//! ## Quick Start
//!
//! ```
//! use argus_validator::prelude::*;
//!
//! fn create_user(name: Option<&str>, age: &str) -> Result<(String, u8), ArgError> {
//!     let name = Arg::is(name, "name")
//!         .not_null_or_white_space()?
//!         .max_length(32)?
//!         .into_value();
//!     let age = Arg::is(age, "age")
//!         .parse_u8()?
//!         .between(13, 130)?
//!         .into_value();
//!     Ok((name.to_owned(), age))
//! }
//!
//! assert_eq!(create_user(Some("ada"), "36").unwrap(), ("ada".to_owned(), 36));
//!
//! let err = create_user(Some("ada"), "9").unwrap_err();
//! assert_eq!(err.name(), Some("age"));
//! assert_eq!(err.message(), "Value must be between 13 and 130.");
//! ```
//!
//! ## Absent Values
//!
//! `Option` arguments pass every constraint while they are `None`. Use
//! `not_null`, `not_null_or_empty` or `not_null_or_white_space` to require
//! a value; they also unwrap the `Option` for the rest of the chain.
//!
//! ## Features
//!
//! - `temporal` (default): date, time and time span parsing via `chrono`
//! - `uuid` (default): UUID parsing
//! - `url` (default): URL parsing and scheme checks
//! - `tracing` (default): a trace event for every constraint violation
//! - `serde`: serializable error kinds and [`ArgError::to_json_value`](foundation::ArgError::to_json_value)

// Constraints return ArgError unboxed.
#![allow(clippy::result_large_err)]

pub mod compare;
pub mod entry;
pub mod foundation;
mod macros;
pub mod parse;
pub mod prelude;
pub mod validators;
