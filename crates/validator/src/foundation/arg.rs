//! The argument carrier threaded through a validation chain

use std::marker::PhantomData;

use crate::foundation::ArgValue;

/// An argument value bound to its name and an optional custom message.
///
/// Constraint methods consume the carrier and hand it back unchanged on
/// success, or return an [`ArgError`](crate::foundation::ArgError) on the
/// first failure. Conversions (parsing, `not_null`, downcasts) return a
/// carrier of the new type with the same name and message.
///
/// The carrier is meant to live only for the duration of one validation
/// chain: it borrows its name and message for `'a` and is neither `Send`
/// nor `Sync`, so it cannot be held across an `.await` in a `Send` future.
///
/// # Examples
///
/// ```
/// use argus_validator::prelude::*;
///
/// fn set_port(port: u16) -> Result<u16, ArgError> {
///     let port = Arg::is(port, "port")
///         .greater_than(1023)?
///         .less_than_or_equal_to(49151)?
///         .into_value();
///     Ok(port)
/// }
///
/// assert_eq!(set_port(8080).unwrap(), 8080);
/// assert!(set_port(80).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[must_use = "a validation chain should end with `into_value()`"]
pub struct ArgInfo<'a, T> {
    value: T,
    name: Option<&'a str>,
    message: Option<&'a str>,
    _local: PhantomData<*const ()>,
}

impl<'a, T> ArgInfo<'a, T> {
    /// Creates a carrier. No validation is performed.
    #[inline]
    pub const fn new(value: T, name: Option<&'a str>, message: Option<&'a str>) -> Self {
        Self {
            value,
            name,
            message,
            _local: PhantomData,
        }
    }

    /// Returns the value.
    #[inline]
    pub const fn value(&self) -> &T {
        &self.value
    }

    /// Unwraps the value, ending the chain.
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }

    /// Returns the argument name.
    #[inline]
    pub const fn name(&self) -> Option<&'a str> {
        self.name
    }

    /// Returns the custom message. `None` means the default message is used.
    #[inline]
    pub const fn message(&self) -> Option<&'a str> {
        self.message
    }

    /// Splits the carrier into value, name and message.
    #[inline]
    pub fn into_parts(self) -> (T, Option<&'a str>, Option<&'a str>) {
        (self.value, self.name, self.message)
    }

    /// Wraps a converted value, keeping the name and message.
    #[inline]
    pub(crate) fn convey<U>(&self, value: U) -> ArgInfo<'a, U> {
        ArgInfo::new(value, self.name, self.message)
    }
}

impl<T: ArgValue> ArgInfo<'_, T> {
    /// The comparison target, or `None` when the value is absent.
    #[inline]
    pub fn target(&self) -> Option<&T::Target> {
        self.value.present()
    }
}

impl<T> ArgInfo<'_, T>
where
    T: ArgValue,
    T::Target: AsRef<str>,
{
    /// The value viewed as text, or `None` when the value is absent.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        self.value.present().map(AsRef::as_ref)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        let arg = ArgInfo::new(7, Some("count"), Some("Custom"));
        assert_eq!(*arg.value(), 7);
        assert_eq!(arg.name(), Some("count"));
        assert_eq!(arg.message(), Some("Custom"));
        assert_eq!(arg.into_value(), 7);
    }

    #[test]
    fn test_convey_keeps_context() {
        let arg = ArgInfo::new("42", Some("id"), Some("Bad id"));
        let converted = arg.convey(42_u64);
        assert_eq!(converted.into_parts(), (42, Some("id"), Some("Bad id")));
    }

    #[test]
    fn test_as_str_view() {
        assert_eq!(ArgInfo::new(String::from("abc"), None, None).as_str(), Some("abc"));
        assert_eq!(ArgInfo::new(Some("abc"), None, None).as_str(), Some("abc"));
        assert_eq!(ArgInfo::new(None::<&str>, None, None).as_str(), None);
    }

    #[test]
    fn test_target_of_nested_option() {
        let arg = ArgInfo::new(Some(Some(3)), None, None);
        assert_eq!(arg.target(), Some(&3));
    }
}
