//! URL parsing

use url::Url;

use crate::foundation::message::Message;
use crate::foundation::{ArgInfo, ArgResult};

impl<'a, V: AsRef<str>> ArgInfo<'a, V> {
    /// Parses an absolute URL.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::ParseFailed`](crate::foundation::ArgErrorKind::ParseFailed)
    /// with the [`url::ParseError`] chained. Relative references fail.
    pub fn parse_url(self) -> ArgResult<ArgInfo<'a, Url>> {
        self.parse_chained(Message::MustBeUri, &[], |text| Url::parse(text.trim()))
    }

    /// Parses an absolute URL or a relative reference resolved against
    /// `base`. Absolute input ignores `base`.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::ParseFailed`](crate::foundation::ArgErrorKind::ParseFailed)
    /// with the [`url::ParseError`] chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use argus_validator::prelude::*;
    /// use url::Url;
    ///
    /// let api = Url::parse("https://example.com/api/").unwrap();
    /// let hook = Arg::is("hooks/7", "hook").parse_url_with_base(&api)?.into_value();
    /// assert_eq!(hook.as_str(), "https://example.com/api/hooks/7");
    /// # Ok::<(), ArgError>(())
    /// ```
    pub fn parse_url_with_base(self, base: &Url) -> ArgResult<ArgInfo<'a, Url>> {
        self.parse_chained(Message::MustBeUri, &[], |text| {
            Url::options().base_url(Some(base)).parse(text.trim())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::ArgErrorKind;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_parse_url() {
        let url = ArgInfo::new("https://example.com/a?b=1", None, None)
            .parse_url()
            .unwrap()
            .into_value();
        assert_eq!(url.path(), "/a");
        assert_eq!(url.query(), Some("b=1"));
    }

    #[test]
    fn test_relative_reference_fails() {
        let err = ArgInfo::new("/relative/path", Some("link"), None)
            .parse_url()
            .unwrap_err();
        assert_eq!(err.kind(), ArgErrorKind::ParseFailed);
        assert_eq!(err.message(), "Value must be a uri. See inner error for details.");
        assert_eq!(err.name(), Some("link"));
    }

    #[rstest]
    #[case("hooks/7", "https://example.com/api/hooks/7")]
    #[case("/status", "https://example.com/status")]
    #[case("../v2/", "https://example.com/v2/")]
    #[case("ftp://files.example.com/a", "ftp://files.example.com/a")]
    fn test_parse_url_with_base(#[case] text: &str, #[case] expected: &str) {
        let base = Url::parse("https://example.com/api/").unwrap();
        let url = ArgInfo::new(text, None, None)
            .parse_url_with_base(&base)
            .unwrap()
            .into_value();
        assert_eq!(url.as_str(), expected);
    }

    #[test]
    fn test_parse_url_with_base_failure() {
        let base = Url::parse("https://example.com/").unwrap();
        let err = ArgInfo::new("http://[::1", Some("link"), None)
            .parse_url_with_base(&base)
            .unwrap_err();
        assert_eq!(err.kind(), ArgErrorKind::ParseFailed);
        assert_eq!(err.message(), "Value must be a uri. See inner error for details.");
        assert!(std::error::Error::source(&err).is_some());
    }
}
