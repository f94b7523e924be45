//! Conversions from text to typed values
//!
//! Parsing methods are available on any carrier whose value is
//! `AsRef<str>` and continue the chain with the parsed value. A failed
//! parse produces an [`ArgErrorKind::ParseFailed`] error naming the target
//! type. When the underlying parser reports its own error, that error is
//! chained as the [`source`](std::error::Error::source) and the message
//! ends with `See inner error for details.`.
//!
//! Parsing an `Option` is written as `not_null()?` followed by the parse.
//!
//! # Examples
//!
//! ```
//! use argus_validator::prelude::*;
//!
//! let workers = Arg::is("8", "workers")
//!     .parse_i32()?
//!     .between(1, 64)?
//!     .into_value();
//! assert_eq!(workers, 8);
//!
//! let err = Arg::is("eight", "workers").parse_i32().unwrap_err();
//! assert_eq!(err.kind(), ArgErrorKind::ParseFailed);
//! assert!(err.message().starts_with("Value must be an int32."));
//! # Ok::<(), ArgError>(())
//! ```

#[cfg(feature = "uuid")]
mod guid;
#[cfg(feature = "temporal")]
mod temporal;
#[cfg(feature = "url")]
mod uri;

use std::any::type_name;
use std::error::Error as StdError;
use std::fmt::Display;
use std::str::FromStr;

#[cfg(feature = "uuid")]
pub use guid::UuidFormat;
#[cfg(feature = "temporal")]
pub use temporal::TimeSpanError;

use crate::foundation::message::Message;
use crate::foundation::{ArgError, ArgErrorKind, ArgInfo, ArgResult, BoxError};

impl<'a, V: AsRef<str>> ArgInfo<'a, V> {
    /// Parses the text with `T`'s [`FromStr`] implementation.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::ParseFailed`] with the parser's error chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::net::IpAddr;
    /// use argus_validator::prelude::*;
    ///
    /// let addr = Arg::is("10.0.0.1", "addr").parse::<IpAddr>()?.into_value();
    /// assert!(addr.is_ipv4());
    /// # Ok::<(), ArgError>(())
    /// ```
    pub fn parse<T>(self) -> ArgResult<ArgInfo<'a, T>>
    where
        T: FromStr,
        T::Err: StdError + Send + Sync + 'static,
    {
        self.parse_chained(Message::MustBeParsableTo, &[&type_name::<T>()], str::parse)
    }

    /// Parses `true` or `false`, ignoring case and surrounding white space.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::ParseFailed`] for any other text.
    pub fn parse_bool(self) -> ArgResult<ArgInfo<'a, bool>> {
        self.parse_plain(Message::MustBeBoolean, |text| {
            let text = text.trim();
            if text.eq_ignore_ascii_case("true") {
                Some(true)
            } else if text.eq_ignore_ascii_case("false") {
                Some(false)
            } else {
                None
            }
        })
    }

    /// Parses an unsigned 8-bit integer.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::ParseFailed`] with the [`ParseIntError`](std::num::ParseIntError) chained.
    pub fn parse_u8(self) -> ArgResult<ArgInfo<'a, u8>> {
        self.parse_chained(Message::MustBeByte, &[], str::parse)
    }

    /// Parses a signed 16-bit integer.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::ParseFailed`] with the [`ParseIntError`](std::num::ParseIntError) chained.
    pub fn parse_i16(self) -> ArgResult<ArgInfo<'a, i16>> {
        self.parse_chained(Message::MustBeInt16, &[], str::parse)
    }

    /// Parses a signed 32-bit integer.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::ParseFailed`] with the [`ParseIntError`](std::num::ParseIntError) chained.
    pub fn parse_i32(self) -> ArgResult<ArgInfo<'a, i32>> {
        self.parse_chained(Message::MustBeInt32, &[], str::parse)
    }

    /// Parses a signed 64-bit integer.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::ParseFailed`] with the [`ParseIntError`](std::num::ParseIntError) chained.
    pub fn parse_i64(self) -> ArgResult<ArgInfo<'a, i64>> {
        self.parse_chained(Message::MustBeInt64, &[], str::parse)
    }

    /// Parses a 64-bit float.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::ParseFailed`] with the [`ParseFloatError`](std::num::ParseFloatError) chained.
    pub fn parse_f64(self) -> ArgResult<ArgInfo<'a, f64>> {
        self.parse_chained(Message::MustBeNumber, &[], str::parse)
    }

    /// Runs `parse`, chaining its error on failure.
    pub(crate) fn parse_chained<T, E>(
        self,
        template: Message,
        args: &[&dyn Display],
        parse: impl FnOnce(&str) -> Result<T, E>,
    ) -> ArgResult<ArgInfo<'a, T>>
    where
        E: Into<BoxError>,
    {
        match parse(self.value().as_ref()) {
            Ok(value) => Ok(self.convey(value)),
            Err(cause) => Err(
                ArgError::build(ArgErrorKind::ParseFailed, &self, template, args)
                    .with_source(cause),
            ),
        }
    }

    /// Runs `parse`, which reports failure without a cause.
    pub(crate) fn parse_plain<T>(
        self,
        template: Message,
        parse: impl FnOnce(&str) -> Option<T>,
    ) -> ArgResult<ArgInfo<'a, T>> {
        match parse(self.value().as_ref()) {
            Some(value) => Ok(self.convey(value)),
            None => Err(ArgError::build(
                ArgErrorKind::ParseFailed,
                &self,
                template,
                &[],
            )),
        }
    }
}
