//! Error types for argument validation failures
//!
//! A failed constraint produces exactly one [`ArgError`]. The error is
//! classified structurally by [`ArgErrorKind`] so callers can tell "value
//! absent" from "value present but invalid" from "value out of range"
//! without parsing message text.
//!
//! The message uses `Cow<'static, str>`: catalog templates without
//! parameters are borrowed, so the common failures do not allocate for the
//! message body.

use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt::Display;

use crate::foundation::ArgInfo;
use crate::foundation::message::{self, Message};

/// Boxed inner cause chained onto an [`ArgError`].
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Result of a constraint check.
pub type ArgResult<T> = Result<T, ArgError>;

// ============================================================================
// ERROR KIND
// ============================================================================

/// Structural classification of a constraint violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ArgErrorKind {
    /// The value is absent but presence was required.
    NullRequired,
    /// A text or collection value is empty or all white space.
    EmptyOrWhiteSpace,
    /// A general predicate (equality, boolean, pattern, ...) failed.
    PredicateFailed,
    /// An ordering bound or a length bound was violated.
    OutOfRange,
    /// A string could not be converted to the target type.
    ParseFailed,
    /// A dynamically typed value is not of the requested type.
    NotAssignable,
}

impl ArgErrorKind {
    /// Machine-readable error code.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NullRequired => "ARG_NULL",
            Self::EmptyOrWhiteSpace => "ARG_EMPTY",
            Self::PredicateFailed => "ARG_INVALID",
            Self::OutOfRange => "ARG_OUT_OF_RANGE",
            Self::ParseFailed => "ARG_PARSE",
            Self::NotAssignable => "ARG_NOT_ASSIGNABLE",
        }
    }
}

// ============================================================================
// ARG ERROR
// ============================================================================

/// A constraint violation raised by a validation chain.
///
/// # Examples
///
/// ```
/// use argus_validator::prelude::*;
///
/// let err = Arg::is(2, "value").less_than(2).unwrap_err();
/// assert_eq!(err.kind(), ArgErrorKind::OutOfRange);
/// assert_eq!(err.message(), "Value must be less than 2.");
/// assert_eq!(err.name(), Some("value"));
/// ```
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct ArgError {
    kind: ArgErrorKind,
    message: Cow<'static, str>,
    name: Option<String>,
    #[source]
    source: Option<BoxError>,
}

impl ArgError {
    /// Creates an error from its parts.
    pub fn new(
        kind: ArgErrorKind,
        message: impl Into<Cow<'static, str>>,
        name: Option<&str>,
    ) -> Self {
        Self {
            kind,
            message: message.into(),
            name: name.map(str::to_owned),
            source: None,
        }
    }

    /// Builds the error for a failed constraint on `arg`.
    ///
    /// The carrier's message override wins verbatim; otherwise `template` is
    /// rendered with `args`.
    #[cold]
    #[inline(never)]
    pub(crate) fn build<T>(
        kind: ArgErrorKind,
        arg: &ArgInfo<'_, T>,
        template: Message,
        args: &[&dyn Display],
    ) -> Self {
        let message: Cow<'static, str> = match arg.message() {
            Some(custom) => Cow::Owned(custom.to_owned()),
            None if args.is_empty() => Cow::Borrowed(template.template()),
            None => Cow::Owned(template.render(args)),
        };

        let error = Self::new(kind, message, arg.name());

        #[cfg(feature = "tracing")]
        tracing::trace!(
            target: "argus_validator",
            kind = ?error.kind,
            code = error.kind.code(),
            name = error.name.as_deref(),
            "argument constraint violated"
        );

        error
    }

    /// Chains an inner cause and appends the inner-error suffix.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        let mut message = self.message.into_owned();
        message.push(' ');
        message.push_str(message::SEE_INNER_ERROR);
        self.message = Cow::Owned(message);
        self.source = Some(source.into());
        self
    }

    /// The error classification.
    #[must_use]
    pub fn kind(&self) -> ArgErrorKind {
        self.kind
    }

    /// Machine-readable code, see [`ArgErrorKind::code`].
    #[must_use]
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// The full message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Name of the offending argument, if one was supplied.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns true if a required value was absent.
    #[must_use]
    pub fn is_null(&self) -> bool {
        self.kind == ArgErrorKind::NullRequired
    }

    /// Returns true if an ordering or length bound was violated.
    #[must_use]
    pub fn is_out_of_range(&self) -> bool {
        self.kind == ArgErrorKind::OutOfRange
    }

    /// Whether the check could pass if retried with the same input.
    ///
    /// Constraint checks are deterministic, so this is always `false`.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        false
    }

    /// Converts the error to a JSON value (for API boundaries).
    #[cfg(feature = "serde")]
    pub fn to_json_value(&self) -> serde_json::Value {
        use serde_json::json;

        json!({
            "kind": self.kind,
            "code": self.kind.code(),
            "message": self.message,
            "name": self.name,
            "source": self.source.as_ref().map(ToString::to_string),
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
