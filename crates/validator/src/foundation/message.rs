//! Message catalog for constraint violations
//!
//! Every constraint maps to one [`Message`], whose template uses positional
//! `{0}` / `{1}` placeholders. Templates are `&'static str` so a
//! parameterless message never allocates.
//!
//! Parameters are rendered through [`Display`], which formats numbers and
//! dates the same way regardless of the host locale. A missing parameter
//! renders as [`NULL`].

use std::fmt::{self, Display, Write};

/// Placeholder rendered in place of an absent comparison value.
pub const NULL: &str = "<null>";

/// Suffix appended when an error chains an inner cause.
pub const SEE_INNER_ERROR: &str = "See inner error for details.";

/// A constraint message template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Message {
    CannotBeEmpty,
    CannotBeNull,
    CannotBeWhiteSpace,
    LengthGreaterThan,
    LengthLessThan,
    MustBeAbsoluteWithScheme,
    MustBeAssignableTo,
    MustBeBetween,
    MustBeBoolean,
    MustBeByte,
    MustBeDate,
    MustBeDateTime,
    MustBeDateTimeOffset,
    MustBeDigit,
    MustBeEqualTo,
    MustBeFalse,
    MustBeGreaterThan,
    MustBeGreaterThanOrEqualTo,
    MustBeGuid,
    MustBeInt16,
    MustBeInt32,
    MustBeInt64,
    MustBeLessThan,
    MustBeLessThanOrEqualTo,
    MustBeLetter,
    MustBeNull,
    MustBeNumber,
    MustBeParsableTo,
    MustBeSame,
    MustBeTime,
    MustBeTimeSpan,
    MustBeTrue,
    MustBeUri,
    MustContain,
    MustEndWith,
    MustHaveLengthBetween,
    MustHaveLengthEqualTo,
    MustMatchRegex,
    MustStartWith,
    NotDefined,
}

impl Message {
    /// Returns the raw template.
    #[must_use]
    pub const fn template(self) -> &'static str {
        match self {
            Self::CannotBeEmpty => "Value cannot be empty.",
            Self::CannotBeNull => "Value cannot be null.",
            Self::CannotBeWhiteSpace => "Value cannot be white space.",
            Self::LengthGreaterThan => "Value cannot have a length greater than {0}.",
            Self::LengthLessThan => "Value cannot have a length less than {0}.",
            Self::MustBeAbsoluteWithScheme => "Value must be absolute with scheme {0}.",
            Self::MustBeAssignableTo => "Value must be assignable to {0}.",
            Self::MustBeBetween => "Value must be between {0} and {1}.",
            Self::MustBeBoolean => "Value must be a boolean.",
            Self::MustBeByte => "Value must be a byte.",
            Self::MustBeDate => "Value must be a date.",
            Self::MustBeDateTime => "Value must be a date/time.",
            Self::MustBeDateTimeOffset => "Value must be a date/time with offset.",
            Self::MustBeDigit => "Value must be a digit.",
            Self::MustBeEqualTo => "Value must be equal to {0}.",
            Self::MustBeFalse => "Value must be false.",
            Self::MustBeGreaterThan => "Value must be greater than {0}.",
            Self::MustBeGreaterThanOrEqualTo => "Value must be greater than or equal to {0}.",
            Self::MustBeGuid => "Value must be a guid.",
            Self::MustBeInt16 => "Value must be an int16.",
            Self::MustBeInt32 => "Value must be an int32.",
            Self::MustBeInt64 => "Value must be an int64.",
            Self::MustBeLessThan => "Value must be less than {0}.",
            Self::MustBeLessThanOrEqualTo => "Value must be less than or equal to {0}.",
            Self::MustBeLetter => "Value must be a letter.",
            Self::MustBeNull => "Value must be null.",
            Self::MustBeNumber => "Value must be a number.",
            Self::MustBeParsableTo => "Value must be parsable to {0}.",
            Self::MustBeSame => "Value must be the same.",
            Self::MustBeTime => "Value must be a time.",
            Self::MustBeTimeSpan => "Value must be a time span.",
            Self::MustBeTrue => "Value must be true.",
            Self::MustBeUri => "Value must be a uri.",
            Self::MustContain => "Value must contain {0}.",
            Self::MustEndWith => "Value must end with {0}.",
            Self::MustHaveLengthBetween => "Value must have a length between {0} and {1}.",
            Self::MustHaveLengthEqualTo => "Value must have a length equal to {0}.",
            Self::MustMatchRegex => "Value must match the regex {0}.",
            Self::MustStartWith => "Value must start with {0}.",
            Self::NotDefined => "Value is not defined.",
        }
    }

    /// Renders the template, substituting `{n}` with `args[n]`.
    ///
    /// Placeholders without a matching argument are kept verbatim.
    #[must_use]
    pub fn render(self, args: &[&dyn Display]) -> String {
        render(self.template(), args)
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.template())
    }
}

/// Positional template rendering shared by every message.
pub(crate) fn render(template: &str, args: &[&dyn Display]) -> String {
    let mut out = String::with_capacity(template.len() + 16);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        match after[..close].parse::<usize>().ok().and_then(|i| args.get(i)) {
            Some(arg) => {
                // Writing into a String cannot fail.
                let _ = write!(out, "{arg}");
            }
            None => out.push_str(&rest[open..=open + close + 1]),
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

/// Displays the wrapped value, or [`NULL`] when it is absent.
#[derive(Clone, Copy)]
pub(crate) struct OrNull<'v, T: ?Sized>(pub Option<&'v T>);

impl<T: Display + ?Sized> Display for OrNull<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => value.fmt(f),
            None => f.write_str(NULL),
        }
    }
}
