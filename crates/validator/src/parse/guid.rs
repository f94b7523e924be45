//! UUID parsing

use uuid::Uuid;

use crate::foundation::message::Message;
use crate::foundation::{ArgInfo, ArgResult};

/// Textual layout of a UUID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UuidFormat {
    /// 32 hex digits: `67e5504410b1426f9247bb680e5fe0c8`.
    Digits,
    /// Hyphen-separated groups: `67e55044-10b1-426f-9247-bb680e5fe0c8`.
    Hyphenated,
    /// Hyphenated in braces: `{67e55044-10b1-426f-9247-bb680e5fe0c8}`.
    Braced,
    /// Hyphenated in parentheses: `(67e55044-10b1-426f-9247-bb680e5fe0c8)`.
    Parenthesized,
}

impl UuidFormat {
    /// Maps the single-letter specifiers `N`, `D`, `B` and `P`
    /// (either case) to a format.
    #[must_use]
    pub const fn from_specifier(specifier: char) -> Option<Self> {
        match specifier.to_ascii_uppercase() {
            'N' => Some(Self::Digits),
            'D' => Some(Self::Hyphenated),
            'B' => Some(Self::Braced),
            'P' => Some(Self::Parenthesized),
            _ => None,
        }
    }

    /// Strips the enclosing delimiters, returning the inner text if `text`
    /// has this layout.
    fn strip(self, text: &str) -> Option<&str> {
        let inner = match self {
            Self::Digits => return (text.len() == 32 && !text.contains('-')).then_some(text),
            Self::Hyphenated => text,
            Self::Braced => text.strip_prefix('{')?.strip_suffix('}')?,
            Self::Parenthesized => text.strip_prefix('(')?.strip_suffix(')')?,
        };
        is_hyphenated(inner).then_some(inner)
    }
}

fn is_hyphenated(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 36 && [8, 13, 18, 23].iter().all(|&i| bytes[i] == b'-')
}

impl<'a, V: AsRef<str>> ArgInfo<'a, V> {
    /// Parses a UUID in any layout `uuid` understands.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::ParseFailed`](crate::foundation::ArgErrorKind::ParseFailed)
    /// with the [`uuid::Error`] chained.
    pub fn parse_uuid(self) -> ArgResult<ArgInfo<'a, Uuid>> {
        self.parse_chained(Message::MustBeGuid, &[], |text| Uuid::try_parse(text.trim()))
    }

    /// Parses a UUID that must be laid out as `format`.
    ///
    /// A layout mismatch fails without a chained cause; malformed digits
    /// chain the [`uuid::Error`].
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::ParseFailed`](crate::foundation::ArgErrorKind::ParseFailed).
    ///
    /// # Examples
    ///
    /// ```
    /// use argus_validator::prelude::*;
    ///
    /// let id = Arg::is("{67e55044-10b1-426f-9247-bb680e5fe0c8}", "id")
    ///     .parse_uuid_exact(UuidFormat::Braced)?
    ///     .into_value();
    /// assert_eq!(id.to_string(), "67e55044-10b1-426f-9247-bb680e5fe0c8");
    ///
    /// let err = Arg::is("67e55044-10b1-426f-9247-bb680e5fe0c8", "id")
    ///     .parse_uuid_exact(UuidFormat::Digits)
    ///     .unwrap_err();
    /// assert_eq!(err.message(), "Value must be a guid.");
    /// # Ok::<(), ArgError>(())
    /// ```
    pub fn parse_uuid_exact(self, format: UuidFormat) -> ArgResult<ArgInfo<'a, Uuid>> {
        let Some(inner) = format.strip(self.value().as_ref()) else {
            return self.parse_plain(Message::MustBeGuid, |_| None);
        };
        let parsed = Uuid::try_parse(inner);
        self.parse_chained(Message::MustBeGuid, &[], |_| parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ArgErrorKind;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const ID: &str = "67e55044-10b1-426f-9247-bb680e5fe0c8";

    fn expected() -> Uuid {
        Uuid::parse_str(ID).unwrap()
    }

    #[test]
    fn test_parse_uuid() {
        let id = ArgInfo::new(ID, Some("id"), None).parse_uuid().unwrap();
        assert_eq!(id.into_parts(), (expected(), Some("id"), None));
    }

    #[test]
    fn test_parse_uuid_failure() {
        let err = ArgInfo::new("not-a-uuid", Some("id"), None).parse_uuid().unwrap_err();
        assert_eq!(err.kind(), ArgErrorKind::ParseFailed);
        assert_eq!(err.message(), "Value must be a guid. See inner error for details.");
    }

    #[rstest]
    #[case(UuidFormat::Digits, "67e5504410b1426f9247bb680e5fe0c8")]
    #[case(UuidFormat::Hyphenated, ID)]
    #[case(UuidFormat::Braced, "{67e55044-10b1-426f-9247-bb680e5fe0c8}")]
    #[case(UuidFormat::Parenthesized, "(67e55044-10b1-426f-9247-bb680e5fe0c8)")]
    fn test_parse_uuid_exact(#[case] format: UuidFormat, #[case] text: &str) {
        let id = ArgInfo::new(text, None, None).parse_uuid_exact(format).unwrap();
        assert_eq!(id.into_value(), expected());
    }

    #[rstest]
    #[case(UuidFormat::Digits, ID)]
    #[case(UuidFormat::Hyphenated, "{67e55044-10b1-426f-9247-bb680e5fe0c8}")]
    #[case(UuidFormat::Braced, ID)]
    #[case(UuidFormat::Parenthesized, "{67e55044-10b1-426f-9247-bb680e5fe0c8}")]
    fn test_layout_mismatch_has_no_cause(#[case] format: UuidFormat, #[case] text: &str) {
        let err = ArgInfo::new(text, None, None).parse_uuid_exact(format).unwrap_err();
        assert_eq!(err.message(), "Value must be a guid.");
        assert!(std::error::Error::source(&err).is_none());
    }

    #[test]
    fn test_bad_digits_chain_cause() {
        let err = ArgInfo::new("zze55044-10b1-426f-9247-bb680e5fe0c8", None, None)
            .parse_uuid_exact(UuidFormat::Hyphenated)
            .unwrap_err();
        assert_eq!(err.message(), "Value must be a guid. See inner error for details.");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_from_specifier() {
        assert_eq!(UuidFormat::from_specifier('n'), Some(UuidFormat::Digits));
        assert_eq!(UuidFormat::from_specifier('P'), Some(UuidFormat::Parenthesized));
        assert_eq!(UuidFormat::from_specifier('X'), None);
    }
}
