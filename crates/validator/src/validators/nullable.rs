//! Presence constraints for `Option` values
//!
//! These are the only constraints that look at `None`: everything else
//! lets an absent value through.
//!
//! - [`not_null`](ArgInfo::not_null) unwraps `Option<T>` into `T`
//! - [`null`](ArgInfo::null) requires the value to be absent
//! - [`not_null_or_empty`](ArgInfo::not_null_or_empty) and
//!   [`not_null_or_white_space`](ArgInfo::not_null_or_white_space) combine
//!   presence with the emptiness checks
//!
//! # Examples
//!
//! ```
//! use argus_validator::prelude::*;
//!
//! let nickname: Option<&str> = Some("neo");
//! let nickname = Arg::is(nickname, "nickname").not_null()?.into_value();
//! assert_eq!(nickname, "neo");
//!
//! let err = Arg::is(None::<&str>, "nickname").not_null().unwrap_err();
//! assert!(err.is_null());
//! # Ok::<(), ArgError>(())
//! ```

use crate::foundation::message::Message;
use crate::foundation::{ArgError, ArgErrorKind, ArgInfo, ArgResult, ArgValue, Countable};

impl<'a, T> ArgInfo<'a, Option<T>> {
    /// Requires a value, unwrapping the `Option`.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::NullRequired`] if the value is `None`.
    pub fn not_null(self) -> ArgResult<ArgInfo<'a, T>> {
        let (value, name, message) = self.into_parts();
        match value {
            Some(value) => Ok(ArgInfo::new(value, name, message)),
            None => Err(ArgError::build(
                ArgErrorKind::NullRequired,
                &ArgInfo::new((), name, message),
                Message::CannotBeNull,
                &[],
            )),
        }
    }

    /// Requires the value to be absent.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::PredicateFailed`] if the value is `Some`.
    pub fn null(self) -> ArgResult<Self> {
        if self.value().is_none() {
            return Ok(self);
        }
        Err(ArgError::build(
            ArgErrorKind::PredicateFailed,
            &self,
            Message::MustBeNull,
            &[],
        ))
    }
}

impl<'a, T> ArgInfo<'a, Option<T>>
where
    T: ArgValue,
    T::Target: Countable,
{
    /// Requires a value with at least one element, unwrapping the `Option`.
    ///
    /// # Errors
    ///
    /// - [`ArgErrorKind::NullRequired`] if the value is `None`
    /// - [`ArgErrorKind::EmptyOrWhiteSpace`] if the value is empty
    pub fn not_null_or_empty(self) -> ArgResult<ArgInfo<'a, T>> {
        self.not_null()?.not_empty()
    }
}

impl<'a, T> ArgInfo<'a, Option<T>>
where
    T: ArgValue,
    T::Target: AsRef<str>,
{
    /// Requires text that is neither empty nor only white space, unwrapping
    /// the `Option`.
    ///
    /// # Errors
    ///
    /// - [`ArgErrorKind::NullRequired`] if the value is `None`
    /// - [`ArgErrorKind::EmptyOrWhiteSpace`] if the text is empty or white
    ///   space
    pub fn not_null_or_white_space(self) -> ArgResult<ArgInfo<'a, T>> {
        self.not_null()?.not_white_space()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_not_null_unwraps() {
        let arg = ArgInfo::new(Some(5), Some("n"), None).not_null().unwrap();
        assert_eq!(arg.into_parts(), (5, Some("n"), None));
    }

    #[test]
    fn test_not_null_fails_on_none() {
        let err = ArgInfo::new(None::<i32>, Some("n"), None).not_null().unwrap_err();
        assert_eq!(err.kind(), ArgErrorKind::NullRequired);
        assert_eq!(err.message(), "Value cannot be null.");
        assert_eq!(err.name(), Some("n"));
    }

    #[test]
    fn test_null() {
        assert!(ArgInfo::new(None::<i32>, None, None).null().is_ok());

        let err = ArgInfo::new(Some(1), None, None).null().unwrap_err();
        assert_eq!(err.kind(), ArgErrorKind::PredicateFailed);
        assert_eq!(err.message(), "Value must be null.");
    }

    #[test]
    fn test_not_null_or_empty() {
        let ok = ArgInfo::new(Some("abc"), None, None).not_null_or_empty().unwrap();
        assert_eq!(ok.into_value(), "abc");

        let err = ArgInfo::new(None::<&str>, None, None).not_null_or_empty().unwrap_err();
        assert_eq!(err.kind(), ArgErrorKind::NullRequired);

        let err = ArgInfo::new(Some(""), None, None).not_null_or_empty().unwrap_err();
        assert_eq!(err.kind(), ArgErrorKind::EmptyOrWhiteSpace);
        assert_eq!(err.message(), "Value cannot be empty.");

        let err = ArgInfo::new(Some(Vec::<u8>::new()), None, None)
            .not_null_or_empty()
            .unwrap_err();
        assert_eq!(err.kind(), ArgErrorKind::EmptyOrWhiteSpace);
    }

    #[test]
    fn test_not_null_or_white_space() {
        let ok = ArgInfo::new(Some(String::from(" a ")), None, None)
            .not_null_or_white_space()
            .unwrap();
        assert_eq!(ok.into_value(), " a ");

        let err = ArgInfo::new(None::<String>, None, None)
            .not_null_or_white_space()
            .unwrap_err();
        assert_eq!(err.kind(), ArgErrorKind::NullRequired);

        let err = ArgInfo::new(Some(" \t"), None, None)
            .not_null_or_white_space()
            .unwrap_err();
        assert_eq!(err.kind(), ArgErrorKind::EmptyOrWhiteSpace);
        assert_eq!(err.message(), "Value cannot be white space.");
    }

    #[test]
    fn test_override_applies_to_null() {
        let err = ArgInfo::new(None::<u8>, Some("n"), Some("n is required"))
            .not_null()
            .unwrap_err();
        assert_eq!(err.message(), "n is required");
    }
}
