//! Equality and identity constraints

use std::fmt::Display;

use crate::compare::{self, EqualityComparer};
use crate::foundation::message::{Message, OrNull};
use crate::foundation::{ArgError, ArgErrorKind, ArgInfo, ArgResult, ArgValue};

impl<V: ArgValue> ArgInfo<'_, V> {
    /// Requires the value to equal `other`.
    ///
    /// An absent `other` never matches and renders as `<null>`.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::PredicateFailed`] if the values differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use argus_validator::prelude::*;
    ///
    /// assert!(Arg::is(3, "n").equal_to(3).is_ok());
    ///
    /// let err = Arg::is(3, "n").equal_to(None).unwrap_err();
    /// assert_eq!(err.message(), "Value must be equal to <null>.");
    /// ```
    pub fn equal_to(self, other: impl Into<Option<V::Target>>) -> ArgResult<Self>
    where
        V::Target: PartialEq + Display,
    {
        self.equal_to_with(other, None)
    }

    /// Requires the value to equal `other` under `comparer`, or under
    /// `PartialEq` when `comparer` is `None`.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::PredicateFailed`] if the values differ.
    pub fn equal_to_with(
        self,
        other: impl Into<Option<V::Target>>,
        comparer: Option<&dyn EqualityComparer<V::Target>>,
    ) -> ArgResult<Self>
    where
        V::Target: PartialEq + Display,
    {
        let other = other.into();
        let Some(value) = self.target() else {
            return Ok(self);
        };

        if other
            .as_ref()
            .is_some_and(|other| compare::equal(value, other, comparer))
        {
            return Ok(self);
        }

        Err(ArgError::build(
            ArgErrorKind::PredicateFailed,
            &self,
            Message::MustBeEqualTo,
            &[&OrNull(other.as_ref())],
        ))
    }
}

impl<'r, T: ?Sized> ArgInfo<'_, &'r T> {
    /// Requires the value to be the very same object as `other`.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::PredicateFailed`] if the references point to
    /// different objects.
    pub fn same(self, other: &T) -> ArgResult<Self> {
        if std::ptr::eq(*self.value(), other) {
            return Ok(self);
        }
        Err(ArgError::build(
            ArgErrorKind::PredicateFailed,
            &self,
            Message::MustBeSame,
            &[],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_equal_to() {
        assert!(ArgInfo::new(1, None, None).equal_to(1).is_ok());

        let err = ArgInfo::new(1, Some("n"), None).equal_to(2).unwrap_err();
        assert_eq!(err.kind(), ArgErrorKind::PredicateFailed);
        assert_eq!(err.message(), "Value must be equal to 2.");
    }

    #[test]
    fn test_equal_to_absent_bound() {
        let err = ArgInfo::new("a", None, None).equal_to(None).unwrap_err();
        assert_eq!(err.message(), "Value must be equal to <null>.");
    }

    #[test]
    fn test_equal_to_absent_value_passes() {
        assert!(ArgInfo::new(None::<i32>, None, None).equal_to(7).is_ok());
    }

    #[test]
    fn test_equal_to_with_comparer() {
        let always = |_: &i32, _: &i32| true;
        assert!(ArgInfo::new(1, None, None).equal_to_with(2, Some(&always)).is_ok());
        assert!(ArgInfo::new(1, None, None).equal_to_with(2, None).is_err());
    }

    #[test]
    fn test_same() {
        let a = String::from("x");
        let b = String::from("x");
        assert!(ArgInfo::new(&a, None, None).same(&a).is_ok());

        let err = ArgInfo::new(&a, None, None).same(&b).unwrap_err();
        assert_eq!(err.message(), "Value must be the same.");
    }
}
