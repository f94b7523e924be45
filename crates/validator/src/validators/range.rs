//! Ordering constraints
//!
//! Each constraint has a plain form using `PartialOrd` and a `_with` form
//! taking an optional [`Comparer`]. Values that do not compare (such as
//! `NaN`) fail every bound.
//!
//! # Examples
//!
//! ```
//! use argus_validator::prelude::*;
//!
//! let ratio = Arg::is(0.25, "ratio")
//!     .between(0.0, 1.0)?
//!     .into_value();
//! assert_eq!(ratio, 0.25);
//! # Ok::<(), ArgError>(())
//! ```

use std::cmp::Ordering;
use std::fmt::Display;

use crate::compare::{self, Comparer};
use crate::foundation::message::{Message, OrNull};
use crate::foundation::{ArgError, ArgErrorKind, ArgInfo, ArgResult, ArgValue};

impl<V> ArgInfo<'_, V>
where
    V: ArgValue,
    V::Target: PartialOrd + Display,
{
    /// Requires the value to be strictly greater than `min`.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::OutOfRange`] if the value is not greater.
    pub fn greater_than(self, min: impl Into<Option<V::Target>>) -> ArgResult<Self> {
        self.greater_than_with(min, None)
    }

    /// [`greater_than`](Self::greater_than) with an explicit comparer.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::OutOfRange`] if the value is not greater.
    pub fn greater_than_with(
        self,
        min: impl Into<Option<V::Target>>,
        comparer: Option<&dyn Comparer<V::Target>>,
    ) -> ArgResult<Self> {
        self.bounded(min.into(), comparer, Message::MustBeGreaterThan, |o| {
            o == Ordering::Greater
        })
    }

    /// Requires the value to be greater than or equal to `min`.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::OutOfRange`] if the value is less.
    pub fn greater_than_or_equal_to(self, min: impl Into<Option<V::Target>>) -> ArgResult<Self> {
        self.greater_than_or_equal_to_with(min, None)
    }

    /// [`greater_than_or_equal_to`](Self::greater_than_or_equal_to) with an
    /// explicit comparer.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::OutOfRange`] if the value is less.
    pub fn greater_than_or_equal_to_with(
        self,
        min: impl Into<Option<V::Target>>,
        comparer: Option<&dyn Comparer<V::Target>>,
    ) -> ArgResult<Self> {
        self.bounded(
            min.into(),
            comparer,
            Message::MustBeGreaterThanOrEqualTo,
            |o| o != Ordering::Less,
        )
    }

    /// Requires the value to be strictly less than `max`.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::OutOfRange`] if the value is not less.
    pub fn less_than(self, max: impl Into<Option<V::Target>>) -> ArgResult<Self> {
        self.less_than_with(max, None)
    }

    /// [`less_than`](Self::less_than) with an explicit comparer.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::OutOfRange`] if the value is not less.
    pub fn less_than_with(
        self,
        max: impl Into<Option<V::Target>>,
        comparer: Option<&dyn Comparer<V::Target>>,
    ) -> ArgResult<Self> {
        self.bounded(max.into(), comparer, Message::MustBeLessThan, |o| {
            o == Ordering::Less
        })
    }

    /// Requires the value to be less than or equal to `max`.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::OutOfRange`] if the value is greater.
    pub fn less_than_or_equal_to(self, max: impl Into<Option<V::Target>>) -> ArgResult<Self> {
        self.less_than_or_equal_to_with(max, None)
    }

    /// [`less_than_or_equal_to`](Self::less_than_or_equal_to) with an
    /// explicit comparer.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::OutOfRange`] if the value is greater.
    pub fn less_than_or_equal_to_with(
        self,
        max: impl Into<Option<V::Target>>,
        comparer: Option<&dyn Comparer<V::Target>>,
    ) -> ArgResult<Self> {
        self.bounded(
            max.into(),
            comparer,
            Message::MustBeLessThanOrEqualTo,
            |o| o != Ordering::Greater,
        )
    }

    /// Requires `min <= value <= max`.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::OutOfRange`] if the value lies outside the bounds
    /// or either bound is absent.
    pub fn between(
        self,
        min: impl Into<Option<V::Target>>,
        max: impl Into<Option<V::Target>>,
    ) -> ArgResult<Self> {
        self.between_with(min, max, None)
    }

    /// [`between`](Self::between) with an explicit comparer.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::OutOfRange`] if the value lies outside the bounds
    /// or either bound is absent.
    pub fn between_with(
        self,
        min: impl Into<Option<V::Target>>,
        max: impl Into<Option<V::Target>>,
        comparer: Option<&dyn Comparer<V::Target>>,
    ) -> ArgResult<Self> {
        let (min, max) = (min.into(), max.into());
        let Some(value) = self.target() else {
            return Ok(self);
        };

        let within = |bound: Option<&V::Target>, accept: fn(Ordering) -> bool| {
            bound
                .and_then(|bound| compare::order(value, bound, comparer))
                .is_some_and(accept)
        };

        if within(min.as_ref(), |o| o != Ordering::Less)
            && within(max.as_ref(), |o| o != Ordering::Greater)
        {
            return Ok(self);
        }

        Err(ArgError::build(
            ArgErrorKind::OutOfRange,
            &self,
            Message::MustBeBetween,
            &[&OrNull(min.as_ref()), &OrNull(max.as_ref())],
        ))
    }

    fn bounded(
        self,
        bound: Option<V::Target>,
        comparer: Option<&dyn Comparer<V::Target>>,
        template: Message,
        accept: fn(Ordering) -> bool,
    ) -> ArgResult<Self> {
        let Some(value) = self.target() else {
            return Ok(self);
        };

        if bound
            .as_ref()
            .and_then(|bound| compare::order(value, bound, comparer))
            .is_some_and(accept)
        {
            return Ok(self);
        }

        Err(ArgError::build(
            ArgErrorKind::OutOfRange,
            &self,
            template,
            &[&OrNull(bound.as_ref())],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(5, true)]
    #[case(3, false)]
    #[case(1, false)]
    fn test_greater_than(#[case] value: i32, #[case] ok: bool) {
        assert_eq!(ArgInfo::new(value, None, None).greater_than(3).is_ok(), ok);
    }

    #[rstest]
    #[case(5, true)]
    #[case(3, true)]
    #[case(1, false)]
    fn test_greater_than_or_equal_to(#[case] value: i32, #[case] ok: bool) {
        assert_eq!(
            ArgInfo::new(value, None, None)
                .greater_than_or_equal_to(3)
                .is_ok(),
            ok
        );
    }

    #[rstest]
    #[case(1, true)]
    #[case(3, false)]
    #[case(5, false)]
    fn test_less_than(#[case] value: i32, #[case] ok: bool) {
        assert_eq!(ArgInfo::new(value, None, None).less_than(3).is_ok(), ok);
    }

    #[rstest]
    #[case(1, true)]
    #[case(3, true)]
    #[case(5, false)]
    fn test_less_than_or_equal_to(#[case] value: i32, #[case] ok: bool) {
        assert_eq!(
            ArgInfo::new(value, None, None).less_than_or_equal_to(3).is_ok(),
            ok
        );
    }

    #[rstest]
    #[case(1, true)]
    #[case(5, true)]
    #[case(10, true)]
    #[case(0, false)]
    #[case(11, false)]
    fn test_between(#[case] value: i32, #[case] ok: bool) {
        assert_eq!(ArgInfo::new(value, None, None).between(1, 10).is_ok(), ok);
    }

    #[test]
    fn test_messages() {
        let err = ArgInfo::new(2, Some("value"), None).less_than(2).unwrap_err();
        assert_eq!(err.kind(), ArgErrorKind::OutOfRange);
        assert_eq!(err.message(), "Value must be less than 2.");

        let err = ArgInfo::new(0, None, None).between(1, 10).unwrap_err();
        assert_eq!(err.message(), "Value must be between 1 and 10.");

        let err = ArgInfo::new(0, None, None).greater_than(0).unwrap_err();
        assert_eq!(err.message(), "Value must be greater than 0.");

        let err = ArgInfo::new(0, None, None)
            .greater_than_or_equal_to(1)
            .unwrap_err();
        assert_eq!(err.message(), "Value must be greater than or equal to 1.");

        let err = ArgInfo::new(2, None, None)
            .less_than_or_equal_to(1)
            .unwrap_err();
        assert_eq!(err.message(), "Value must be less than or equal to 1.");
    }

    #[test]
    fn test_absent_bound_fails() {
        let err = ArgInfo::new(1, Some("value"), None)
            .greater_than_or_equal_to(None)
            .unwrap_err();
        assert_eq!(err.kind(), ArgErrorKind::OutOfRange);
        assert!(err.message().starts_with("Value must be greater than or equal to <null>."));

        let err = ArgInfo::new(1, None, None).between(None, 3).unwrap_err();
        assert_eq!(err.message(), "Value must be between <null> and 3.");
    }

    #[test]
    fn test_absent_value_passes() {
        let arg = ArgInfo::new(None::<i32>, None, None);
        assert!(arg.less_than(0).is_ok());
        assert!(arg.between(5, 1).is_ok());
        assert!(arg.greater_than(None).is_ok());
    }

    #[test]
    fn test_nan_fails() {
        assert!(ArgInfo::new(f64::NAN, None, None).less_than(1.0).is_err());
        assert!(ArgInfo::new(f64::NAN, None, None).between(0.0, 1.0).is_err());
    }

    #[test]
    fn test_comparer_overrides_default() {
        let reversed = |a: &i32, b: &i32| b.cmp(a);
        assert!(ArgInfo::new(5, None, None).less_than_with(3, Some(&reversed)).is_ok());
        assert!(ArgInfo::new(5, None, None).less_than_with(3, None).is_err());
        assert!(
            ArgInfo::new(1, None, None)
                .between_with(10, 0, Some(&reversed))
                .is_ok()
        );
    }

    #[test]
    fn test_chain_returns_same_carrier() {
        let arg = ArgInfo::new(5_u64, Some("n"), None)
            .greater_than(1)
            .and_then(|a| a.less_than(10))
            .unwrap();
        assert_eq!(arg.into_parts(), (5, Some("n"), None));
    }
}
