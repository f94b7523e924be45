//! Length constraints for text and collections
//!
//! Text length is measured in Unicode scalar values, so `"héllo"` has a
//! length of 5. Collections count their elements.

use crate::foundation::message::Message;
use crate::foundation::{ArgError, ArgErrorKind, ArgInfo, ArgResult, ArgValue, Countable};

impl<V> ArgInfo<'_, V>
where
    V: ArgValue,
    V::Target: Countable,
{
    /// Requires at least one element.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::EmptyOrWhiteSpace`] if the value is empty.
    pub fn not_empty(self) -> ArgResult<Self> {
        if self.target().is_none_or(|value| !value.is_empty()) {
            return Ok(self);
        }
        Err(ArgError::build(
            ArgErrorKind::EmptyOrWhiteSpace,
            &self,
            Message::CannotBeEmpty,
            &[],
        ))
    }

    /// Requires exactly `length` elements.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::OutOfRange`] if the length differs.
    ///
    /// # Examples
    ///
    /// ```
    /// use argus_validator::prelude::*;
    ///
    /// assert!(Arg::is(vec![1, 2, 3], "items").length(3).is_ok());
    ///
    /// let err = Arg::is(vec![1, 2, 3], "items").length(2).unwrap_err();
    /// assert_eq!(err.message(), "Value must have a length equal to 2.");
    /// ```
    pub fn length(self, length: usize) -> ArgResult<Self> {
        self.counted(|n| n == length, Message::MustHaveLengthEqualTo, &[&length])
    }

    /// Requires at least `min` elements.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::OutOfRange`] if there are fewer.
    pub fn min_length(self, min: usize) -> ArgResult<Self> {
        self.counted(|n| n >= min, Message::LengthLessThan, &[&min])
    }

    /// Requires at most `max` elements.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::OutOfRange`] if there are more.
    pub fn max_length(self, max: usize) -> ArgResult<Self> {
        self.counted(|n| n <= max, Message::LengthGreaterThan, &[&max])
    }

    /// Requires between `min` and `max` elements, inclusive.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::OutOfRange`] if the length lies outside the bounds.
    pub fn length_between(self, min: usize, max: usize) -> ArgResult<Self> {
        self.counted(
            |n| (min..=max).contains(&n),
            Message::MustHaveLengthBetween,
            &[&min, &max],
        )
    }

    fn counted(
        self,
        accept: impl FnOnce(usize) -> bool,
        template: Message,
        args: &[&dyn std::fmt::Display],
    ) -> ArgResult<Self> {
        if self.target().is_none_or(|value| accept(value.count())) {
            return Ok(self);
        }
        Err(ArgError::build(ArgErrorKind::OutOfRange, &self, template, args))
    }
}
