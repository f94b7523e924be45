//! URL constraints

use url::Url;

use crate::foundation::message::Message;
use crate::foundation::{ArgError, ArgErrorKind, ArgInfo, ArgResult, ArgValue};

impl<V: ArgValue<Target = Url>> ArgInfo<'_, V> {
    /// Requires an absolute URL whose scheme is `scheme`, compared without
    /// regard to case.
    ///
    /// A parsed [`Url`] is always absolute; relative references are
    /// rejected by [`parse_url`](ArgInfo::parse_url).
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::PredicateFailed`] if the scheme differs.
    ///
    /// # Examples
    ///
    /// ```
    /// use argus_validator::prelude::*;
    ///
    /// let endpoint = Arg::is("https://example.com/hook", "endpoint")
    ///     .parse_url()?
    ///     .absolute_with_scheme("https")?
    ///     .into_value();
    /// assert_eq!(endpoint.host_str(), Some("example.com"));
    ///
    /// let err = Arg::is("ftp://example.com", "endpoint")
    ///     .parse_url()?
    ///     .absolute_with_scheme("https")
    ///     .unwrap_err();
    /// assert_eq!(err.message(), "Value must be absolute with scheme https.");
    /// # Ok::<(), ArgError>(())
    /// ```
    pub fn absolute_with_scheme(self, scheme: &str) -> ArgResult<Self> {
        if self
            .target()
            .is_none_or(|url| url.scheme().eq_ignore_ascii_case(scheme))
        {
            return Ok(self);
        }
        Err(ArgError::build(
            ArgErrorKind::PredicateFailed,
            &self,
            Message::MustBeAbsoluteWithScheme,
            &[&scheme],
        ))
    }
}
