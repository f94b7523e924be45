//! Text and character constraints
//!
//! Text constraints apply to any value whose target is `AsRef<str>`
//! (`&str`, `String`, `Cow<str>`, `Box<str>`, ...) and take a
//! [`StringComparison`] deciding case sensitivity.
//!
//! # Examples
//!
//! ```
//! use argus_validator::prelude::*;
//!
//! let path = Arg::is("/api/v1/users", "path")
//!     .not_white_space()?
//!     .starts_with("/API", StringComparison::IgnoreCase)?
//!     .into_value();
//! assert_eq!(path, "/api/v1/users");
//! # Ok::<(), ArgError>(())
//! ```

use crate::compare::StringComparison;
use crate::foundation::message::{Message, OrNull};
use crate::foundation::{ArgError, ArgErrorKind, ArgInfo, ArgResult, ArgValue};

impl<V> ArgInfo<'_, V>
where
    V: ArgValue,
    V::Target: AsRef<str>,
{
    /// Requires text that is not empty and not only white space.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::EmptyOrWhiteSpace`] if every character is white
    /// space.
    pub fn not_white_space(self) -> ArgResult<Self> {
        if self
            .as_str()
            .is_none_or(|text| !text.chars().all(char::is_whitespace))
        {
            return Ok(self);
        }
        Err(ArgError::build(
            ArgErrorKind::EmptyOrWhiteSpace,
            &self,
            Message::CannotBeWhiteSpace,
            &[],
        ))
    }

    /// Requires the text to equal `other` under `comparison`.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::PredicateFailed`] if the text differs or `other` is
    /// absent.
    pub fn str_equal_to<'s>(
        self,
        other: impl Into<Option<&'s str>>,
        comparison: StringComparison,
    ) -> ArgResult<Self> {
        self.text_check(
            other.into(),
            |text, other| comparison.equals(text, other),
            Message::MustBeEqualTo,
        )
    }

    /// Requires the text to start with `prefix` under `comparison`.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::PredicateFailed`] if the prefix does not match or is
    /// absent.
    pub fn starts_with<'s>(
        self,
        prefix: impl Into<Option<&'s str>>,
        comparison: StringComparison,
    ) -> ArgResult<Self> {
        self.text_check(
            prefix.into(),
            |text, prefix| comparison.starts_with(text, prefix),
            Message::MustStartWith,
        )
    }

    /// Requires the text to end with `suffix` under `comparison`.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::PredicateFailed`] if the suffix does not match or is
    /// absent.
    pub fn ends_with<'s>(
        self,
        suffix: impl Into<Option<&'s str>>,
        comparison: StringComparison,
    ) -> ArgResult<Self> {
        self.text_check(
            suffix.into(),
            |text, suffix| comparison.ends_with(text, suffix),
            Message::MustEndWith,
        )
    }

    /// Requires the text to contain `needle` under `comparison`.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::PredicateFailed`] if `needle` is not found or is
    /// absent.
    pub fn contains<'s>(
        self,
        needle: impl Into<Option<&'s str>>,
        comparison: StringComparison,
    ) -> ArgResult<Self> {
        self.text_check(
            needle.into(),
            |text, needle| comparison.contains(text, needle),
            Message::MustContain,
        )
    }

    fn text_check(
        self,
        operand: Option<&str>,
        accept: impl FnOnce(&str, &str) -> bool,
        template: Message,
    ) -> ArgResult<Self> {
        let Some(text) = self.as_str() else {
            return Ok(self);
        };
        if operand.is_some_and(|operand| accept(text, operand)) {
            return Ok(self);
        }
        Err(ArgError::build(
            ArgErrorKind::PredicateFailed,
            &self,
            template,
            &[&OrNull(operand)],
        ))
    }
}

// ============================================================================
// CHARACTERS
// ============================================================================

impl<V: ArgValue<Target = char>> ArgInfo<'_, V> {
    /// Requires an alphabetic character.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::PredicateFailed`] if the character is not a letter.
    pub fn letter(self) -> ArgResult<Self> {
        self.char_check(char::is_alphabetic, Message::MustBeLetter)
    }

    /// Requires a numeric character (any Unicode digit, not only `0-9`).
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::PredicateFailed`] if the character is not numeric.
    pub fn digit(self) -> ArgResult<Self> {
        self.char_check(char::is_numeric, Message::MustBeDigit)
    }

    fn char_check(self, accept: fn(char) -> bool, template: Message) -> ArgResult<Self> {
        if self.target().is_none_or(|&c| accept(c)) {
            return Ok(self);
        }
        Err(ArgError::build(
            ArgErrorKind::PredicateFailed,
            &self,
            template,
            &[],
        ))
    }
}
