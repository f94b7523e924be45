//! Entry points that start a validation chain

use crate::foundation::ArgInfo;

/// Starts validation chains.
///
/// `Arg::is` and [`Argument::is`] are the same function; use whichever
/// reads better at the call site.
///
/// # Examples
///
/// ```
/// use argus_validator::prelude::*;
///
/// fn connect(host: Option<&str>, port: u16) -> Result<(), ArgError> {
///     let host = Arg::is(host, "host").not_null_or_white_space()?.into_value();
///     let port = Arg::is(port, "port").greater_than(0)?.into_value();
///     assert!(!host.is_empty() && port > 0);
///     Ok(())
/// }
///
/// assert!(connect(Some("db.local"), 5432).is_ok());
/// assert_eq!(connect(None, 5432).unwrap_err().name(), Some("host"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Arg;

/// Alias for [`Arg`].
pub type Argument = Arg;

impl Arg {
    /// Wraps `value` for validation under `name`.
    ///
    /// `name` accepts a `&str` or `None`. Nothing is checked until a
    /// constraint is called.
    #[inline]
    pub fn is<'a, T>(value: T, name: impl Into<Option<&'a str>>) -> ArgInfo<'a, T> {
        ArgInfo::new(value, name.into(), None)
    }

    /// Wraps `value` for validation under `name`, reporting any failure
    /// with `message` instead of the default text.
    #[inline]
    pub fn is_with<'a, T>(
        value: T,
        name: impl Into<Option<&'a str>>,
        message: impl Into<Option<&'a str>>,
    ) -> ArgInfo<'a, T> {
        ArgInfo::new(value, name.into(), message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_performs_no_validation() {
        let arg = Arg::is(None::<i32>, "id");
        assert_eq!(arg.into_parts(), (None, Some("id"), None));
    }

    #[test]
    fn test_is_without_name() {
        let arg = Argument::is(5, None);
        assert_eq!(arg.name(), None);
    }

    #[test]
    fn test_is_with_message() {
        let err = Arg::is_with(3, "n", "n must be small").less_than(2).unwrap_err();
        assert_eq!(err.message(), "n must be small");
        assert_eq!(err.name(), Some("n"));
    }

    #[test]
    fn test_is_with_absent_message_uses_default() {
        let err = Arg::is_with(3, "n", None).less_than(2).unwrap_err();
        assert_eq!(err.message(), "Value must be less than 2.");
    }
}
