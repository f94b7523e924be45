//! Regular expression constraints
//!
//! A pattern matches if it is found anywhere in the text; anchor it with
//! `^...$` to require a full match.
//!
//! # Examples
//!
//! ```
//! use argus_validator::prelude::*;
//! use regex::Regex;
//!
//! let sku = Regex::new(r"^[A-Z]{3}-\d{4}$").unwrap();
//! assert!(Arg::is("ABC-1234", "sku").matches(Some(&sku)).is_ok());
//!
//! let err = Arg::is("abc", "sku").matches(Some(&sku)).unwrap_err();
//! assert_eq!(err.message(), r"Value must match the regex ^[A-Z]{3}-\d{4}$.");
//! ```

use regex::{Match, Regex};

use crate::foundation::message::{Message, OrNull};
use crate::foundation::{ArgError, ArgErrorKind, ArgInfo, ArgResult, ArgValue};

impl<V> ArgInfo<'_, V>
where
    V: ArgValue,
    V::Target: AsRef<str>,
{
    /// Requires the text to match `regex`.
    ///
    /// An absent regex never matches and renders as `<null>`.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::PredicateFailed`] if the pattern is not found.
    pub fn matches(self, regex: Option<&Regex>) -> ArgResult<Self> {
        let Some(text) = self.as_str() else {
            return Ok(self);
        };
        if regex.is_some_and(|regex| regex.is_match(text)) {
            return Ok(self);
        }
        Err(regex_error(&self, regex))
    }
}

impl<'h> ArgInfo<'_, &'h str> {
    /// Like [`matches`](Self::matches), also storing the first match in
    /// `found` on success.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::PredicateFailed`] if the pattern is not found.
    /// `found` is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// use argus_validator::prelude::*;
    /// use regex::Regex;
    ///
    /// let digits = Regex::new(r"\d+").unwrap();
    /// let mut found = None;
    /// Arg::is("order-42", "order").matches_capture(Some(&digits), &mut found)?;
    /// assert_eq!(found.map(|m| m.as_str()), Some("42"));
    /// # Ok::<(), ArgError>(())
    /// ```
    pub fn matches_capture(
        self,
        regex: Option<&Regex>,
        found: &mut Option<Match<'h>>,
    ) -> ArgResult<Self> {
        let text = *self.value();
        capture(self, text, regex, found)
    }
}

impl<'h> ArgInfo<'_, Option<&'h str>> {
    /// Like [`matches`](Self::matches), also storing the first match in
    /// `found` on success. An absent value passes and leaves `found`
    /// untouched.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::PredicateFailed`] if the pattern is not found.
    pub fn matches_capture(
        self,
        regex: Option<&Regex>,
        found: &mut Option<Match<'h>>,
    ) -> ArgResult<Self> {
        let text = *self.value();
        match text {
            Some(text) => capture(self, text, regex, found),
            None => Ok(self),
        }
    }
}

fn capture<'a, 'h, T>(
    arg: ArgInfo<'a, T>,
    text: &'h str,
    regex: Option<&Regex>,
    found: &mut Option<Match<'h>>,
) -> ArgResult<ArgInfo<'a, T>> {
    match regex.and_then(|regex| regex.find(text)) {
        Some(m) => {
            *found = Some(m);
            Ok(arg)
        }
        None => Err(regex_error(&arg, regex)),
    }
}

fn regex_error<T>(arg: &ArgInfo<'_, T>, regex: Option<&Regex>) -> ArgError {
    ArgError::build(
        ArgErrorKind::PredicateFailed,
        arg,
        Message::MustMatchRegex,
        &[&OrNull(regex.map(Regex::as_str))],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn digits() -> Regex {
        Regex::new(r"^\d+$").unwrap()
    }

    #[test]
    fn test_matches() {
        let re = digits();
        assert!(ArgInfo::new("123", None, None).matches(Some(&re)).is_ok());
        assert!(ArgInfo::new(String::from("123"), None, None).matches(Some(&re)).is_ok());

        let err = ArgInfo::new("12a", Some("code"), None).matches(Some(&re)).unwrap_err();
        assert_eq!(err.kind(), ArgErrorKind::PredicateFailed);
        assert_eq!(err.message(), r"Value must match the regex ^\d+$.");
        assert_eq!(err.name(), Some("code"));
    }

    #[test]
    fn test_absent_regex_fails() {
        let err = ArgInfo::new("123", None, None).matches(None).unwrap_err();
        assert_eq!(err.message(), "Value must match the regex <null>.");
    }

    #[test]
    fn test_absent_value_passes() {
        assert!(ArgInfo::new(None::<&str>, None, None).matches(None).is_ok());
    }

    #[test]
    fn test_matches_capture_sets_output() {
        let re = Regex::new(r"[a-z]+").unwrap();
        let mut found = None;
        let arg = ArgInfo::new("123abc456", None, None)
            .matches_capture(Some(&re), &mut found)
            .unwrap();

        assert_eq!(arg.into_value(), "123abc456");
        let m = found.unwrap();
        assert_eq!((m.start(), m.as_str()), (3, "abc"));
    }

    #[test]
    fn test_matches_capture_failure_leaves_output() {
        let re = digits();
        let mut found = None;
        let err = ArgInfo::new("abc", None, None)
            .matches_capture(Some(&re), &mut found)
            .unwrap_err();

        assert_eq!(err.message(), r"Value must match the regex ^\d+$.");
        assert!(found.is_none());
    }

    #[test]
    fn test_matches_capture_optional() {
        let re = digits();
        let mut found = None;
        assert!(
            ArgInfo::new(None::<&str>, None, None)
                .matches_capture(Some(&re), &mut found)
                .is_ok()
        );
        assert!(found.is_none());

        let arg = ArgInfo::new(Some("77"), None, None)
            .matches_capture(Some(&re), &mut found)
            .unwrap();
        assert_eq!(arg.into_value(), Some("77"));
        assert_eq!(found.map(|m| m.as_str()), Some("77"));
    }
}
