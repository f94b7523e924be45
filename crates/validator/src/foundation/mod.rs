//! Core building blocks of a validation chain
//!
//! - **Carrier**: [`ArgInfo`], the value with its name and optional message
//! - **Capabilities**: [`ArgValue`], [`Countable`]
//! - **Errors**: [`ArgError`], [`ArgErrorKind`]
//! - **Messages**: the default message catalog in [`message`]
//!
//! # Architecture
//!
//! Every constraint is an inherent method on [`ArgInfo`] that consumes the
//! carrier and returns [`ArgResult<Self>`]. Chains are written with `?`
//! and stop at the first violation:
//!
//! ```rust,ignore
//! let name = Arg::is(name, "name")
//!     .not_null()?
//!     .not_white_space()?
//!     .max_length(64)?
//!     .into_value();
//! ```
//!
//! Absent values (`None`) pass every constraint except the explicit
//! presence checks (`not_null`, `not_null_or_empty`,
//! `not_null_or_white_space`).

mod arg;
mod error;
pub mod message;
mod value;

pub use arg::ArgInfo;
pub use error::{ArgError, ArgErrorKind, ArgResult, BoxError};
pub use value::{ArgValue, Countable};
