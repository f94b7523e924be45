//! Date, time and time span parsing backed by `chrono`
//!
//! Each target has three forms:
//!
//! - `parse_*` accepts the ISO 8601 text `chrono` reads by default
//! - `parse_*_exact(fmt)` requires one `strftime`-style format
//! - `parse_*_exact_any(&[fmt])` tries each format in order
//!
//! Time spans use the `[-][d.]hh:mm[:ss[.fffffff]]` layout, or a bare
//! `[-]d` for whole days. Their exact formats understand `%d` (days),
//! `%H`, `%M`, `%S` (hours, minutes, seconds), `%f` (fraction of a second)
//! and `%%`; any other character must appear literally. A leading `-`
//! in the input negates the span.

use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, ParseError, TimeDelta};

use crate::foundation::message::Message;
use crate::foundation::{ArgInfo, ArgResult};

impl<'a, V: AsRef<str>> ArgInfo<'a, V> {
    /// Parses an ISO 8601 date such as `2024-02-29`.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::ParseFailed`](crate::foundation::ArgErrorKind::ParseFailed)
    /// with the `chrono` error chained.
    pub fn parse_date(self) -> ArgResult<ArgInfo<'a, NaiveDate>> {
        self.parse_chained(Message::MustBeDate, &[], |text| text.trim().parse())
    }

    /// Parses a date in `format`.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::ParseFailed`](crate::foundation::ArgErrorKind::ParseFailed)
    /// with the `chrono` error chained.
    pub fn parse_date_exact(self, format: &str) -> ArgResult<ArgInfo<'a, NaiveDate>> {
        self.parse_date_exact_any(&[format])
    }

    /// Parses a date in the first of `formats` that fits.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::ParseFailed`](crate::foundation::ArgErrorKind::ParseFailed)
    /// with the last `chrono` error chained.
    pub fn parse_date_exact_any(self, formats: &[&str]) -> ArgResult<ArgInfo<'a, NaiveDate>> {
        self.parse_chained(Message::MustBeDate, &[], |text| {
            first_fit(formats, |format| NaiveDate::parse_from_str(text, format))
        })
    }

    /// Parses an ISO 8601 time such as `13:45:00`.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::ParseFailed`](crate::foundation::ArgErrorKind::ParseFailed)
    /// with the `chrono` error chained.
    pub fn parse_time(self) -> ArgResult<ArgInfo<'a, NaiveTime>> {
        self.parse_chained(Message::MustBeTime, &[], |text| text.trim().parse())
    }

    /// Parses a time in `format`.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::ParseFailed`](crate::foundation::ArgErrorKind::ParseFailed)
    /// with the `chrono` error chained.
    pub fn parse_time_exact(self, format: &str) -> ArgResult<ArgInfo<'a, NaiveTime>> {
        self.parse_time_exact_any(&[format])
    }

    /// Parses a time in the first of `formats` that fits.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::ParseFailed`](crate::foundation::ArgErrorKind::ParseFailed)
    /// with the last `chrono` error chained.
    pub fn parse_time_exact_any(self, formats: &[&str]) -> ArgResult<ArgInfo<'a, NaiveTime>> {
        self.parse_chained(Message::MustBeTime, &[], |text| {
            first_fit(formats, |format| NaiveTime::parse_from_str(text, format))
        })
    }

    /// Parses an ISO 8601 date and time without offset, such as
    /// `2024-02-29T13:45:00`.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::ParseFailed`](crate::foundation::ArgErrorKind::ParseFailed)
    /// with the `chrono` error chained.
    pub fn parse_date_time(self) -> ArgResult<ArgInfo<'a, NaiveDateTime>> {
        self.parse_chained(Message::MustBeDateTime, &[], |text| text.trim().parse())
    }

    /// Parses a date and time in `format`.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::ParseFailed`](crate::foundation::ArgErrorKind::ParseFailed)
    /// with the `chrono` error chained.
    pub fn parse_date_time_exact(self, format: &str) -> ArgResult<ArgInfo<'a, NaiveDateTime>> {
        self.parse_date_time_exact_any(&[format])
    }

    /// Parses a date and time in the first of `formats` that fits.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::ParseFailed`](crate::foundation::ArgErrorKind::ParseFailed)
    /// with the last `chrono` error chained.
    pub fn parse_date_time_exact_any(
        self,
        formats: &[&str],
    ) -> ArgResult<ArgInfo<'a, NaiveDateTime>> {
        self.parse_chained(Message::MustBeDateTime, &[], |text| {
            first_fit(formats, |format| NaiveDateTime::parse_from_str(text, format))
        })
    }

    /// Parses an RFC 3339 timestamp with offset, such as
    /// `2024-02-29T13:45:00+02:00`.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::ParseFailed`](crate::foundation::ArgErrorKind::ParseFailed)
    /// with the `chrono` error chained.
    pub fn parse_date_time_offset(self) -> ArgResult<ArgInfo<'a, DateTime<FixedOffset>>> {
        self.parse_chained(Message::MustBeDateTimeOffset, &[], |text| {
            text.trim().parse()
        })
    }

    /// Parses a timestamp with offset in `format`, which must contain an
    /// offset specifier such as `%z`.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::ParseFailed`](crate::foundation::ArgErrorKind::ParseFailed)
    /// with the `chrono` error chained.
    pub fn parse_date_time_offset_exact(
        self,
        format: &str,
    ) -> ArgResult<ArgInfo<'a, DateTime<FixedOffset>>> {
        self.parse_date_time_offset_exact_any(&[format])
    }

    /// Parses a timestamp with offset in the first of `formats` that fits.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::ParseFailed`](crate::foundation::ArgErrorKind::ParseFailed)
    /// with the last `chrono` error chained.
    pub fn parse_date_time_offset_exact_any(
        self,
        formats: &[&str],
    ) -> ArgResult<ArgInfo<'a, DateTime<FixedOffset>>> {
        self.parse_chained(Message::MustBeDateTimeOffset, &[], |text| {
            first_fit(formats, |format| {
                DateTime::<FixedOffset>::parse_from_str(text, format)
            })
        })
    }

    /// Parses a time span such as `1.02:30:00` or `-00:00:01.5`.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::ParseFailed`](crate::foundation::ArgErrorKind::ParseFailed)
    /// with a [`TimeSpanError`] chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use argus_validator::prelude::*;
    /// use chrono::TimeDelta;
    ///
    /// let grace = Arg::is("1.02:30:00", "grace").parse_time_span()?.into_value();
    /// assert_eq!(grace, TimeDelta::hours(26) + TimeDelta::minutes(30));
    /// # Ok::<(), ArgError>(())
    /// ```
    pub fn parse_time_span(self) -> ArgResult<ArgInfo<'a, TimeDelta>> {
        self.parse_chained(Message::MustBeTimeSpan, &[], time_span)
    }

    /// Parses a time span in `format`, such as `%d.%H:%M`.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::ParseFailed`](crate::foundation::ArgErrorKind::ParseFailed)
    /// with a [`TimeSpanError`] chained.
    ///
    /// # Examples
    ///
    /// ```
    /// use argus_validator::prelude::*;
    /// use chrono::TimeDelta;
    ///
    /// let warmup = Arg::is("05m30s", "warmup")
    ///     .parse_time_span_exact("%Mm%Ss")?
    ///     .into_value();
    /// assert_eq!(warmup, TimeDelta::seconds(330));
    /// # Ok::<(), ArgError>(())
    /// ```
    pub fn parse_time_span_exact(self, format: &str) -> ArgResult<ArgInfo<'a, TimeDelta>> {
        self.parse_time_span_exact_any(&[format])
    }

    /// Parses a time span in the first of `formats` that fits.
    ///
    /// # Errors
    ///
    /// [`ArgErrorKind::ParseFailed`](crate::foundation::ArgErrorKind::ParseFailed)
    /// with the last [`TimeSpanError`] chained.
    pub fn parse_time_span_exact_any(
        self,
        formats: &[&str],
    ) -> ArgResult<ArgInfo<'a, TimeDelta>> {
        self.parse_chained(Message::MustBeTimeSpan, &[], |text| {
            first_fit(formats, |format| time_span_exact(text, format))
        })
    }
}

/// Returns the first successful parse, or the last error.
fn first_fit<T, E: Into<FormatError>>(
    formats: &[&str],
    mut parse: impl FnMut(&str) -> Result<T, E>,
) -> Result<T, FormatError> {
    let mut last = None;
    for &format in formats {
        match parse(format) {
            Ok(value) => return Ok(value),
            Err(e) => last = Some(e),
        }
    }
    Err(last.map_or(FormatError::NoFormats, Into::into))
}

/// Failure of an exact-format parse.
#[derive(Debug, thiserror::Error)]
enum FormatError {
    #[error("no formats were given")]
    NoFormats,
    #[error(transparent)]
    Mismatch(#[from] ParseError),
    #[error(transparent)]
    TimeSpan(#[from] TimeSpanError),
}

// ============================================================================
// TIME SPAN
// ============================================================================

/// Why a time span failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum TimeSpanError {
    /// The text is empty.
    #[error("time span is empty")]
    Empty,
    /// The text does not follow the time span layout or format.
    #[error("time span has an invalid format")]
    InvalidFormat,
    /// A component is outside its allowed range.
    #[error("time span {0} is out of range")]
    OutOfRange(&'static str),
    /// The span does not fit in a `TimeDelta`.
    #[error("time span overflows")]
    Overflow,
}

const MAX_FRACTION_DIGITS: usize = 7;

pub(crate) fn time_span(text: &str) -> Result<TimeDelta, TimeSpanError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(TimeSpanError::Empty);
    }

    let (negative, rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let (days, clock) = match rest.find(':') {
        None => (Some(rest), None),
        Some(colon) => match rest[..colon].find('.') {
            Some(dot) => (Some(&rest[..dot]), Some(&rest[dot + 1..])),
            None => (None, Some(rest)),
        },
    };

    let days = match days {
        Some(days) => i64::from(component(days, "days", 8, u32::MAX)?),
        None => 0,
    };

    let (seconds, nanos) = match clock {
        Some(clock) => clock_time(clock)?,
        None => (0, 0),
    };

    assemble(negative, days, seconds, nanos)
}

/// Parses `text` laid out as `format`.
pub(crate) fn time_span_exact(text: &str, format: &str) -> Result<TimeDelta, TimeSpanError> {
    let (negative, mut rest) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };

    let (mut days, mut hours, mut minutes, mut seconds, mut nanos) = (0, 0, 0, 0, 0);
    let mut spec = format.chars();
    while let Some(c) = spec.next() {
        let field = match c {
            '%' => spec.next().ok_or(TimeSpanError::InvalidFormat)?,
            c => {
                rest = rest.strip_prefix(c).ok_or(TimeSpanError::InvalidFormat)?;
                continue;
            }
        };
        match field {
            'd' => days = digits(&mut rest, 8, |d| component(d, "days", 8, u32::MAX))?,
            'H' => hours = digits(&mut rest, 2, |d| component(d, "hours", 2, 23))?,
            'M' => minutes = digits(&mut rest, 2, |d| component(d, "minutes", 2, 59))?,
            'S' => seconds = digits(&mut rest, 2, |d| component(d, "seconds", 2, 59))?,
            'f' => nanos = digits(&mut rest, MAX_FRACTION_DIGITS, fraction_nanos)?,
            '%' => rest = rest.strip_prefix('%').ok_or(TimeSpanError::InvalidFormat)?,
            _ => return Err(TimeSpanError::InvalidFormat),
        }
    }

    if !rest.is_empty() {
        return Err(TimeSpanError::InvalidFormat);
    }

    let seconds = i64::from(hours) * 3_600 + i64::from(minutes) * 60 + i64::from(seconds);
    assemble(negative, i64::from(days), seconds, nanos)
}

/// Splits off up to `max_len` leading ASCII digits and parses them.
fn digits(
    rest: &mut &str,
    max_len: usize,
    parse: impl FnOnce(&str) -> Result<u32, TimeSpanError>,
) -> Result<u32, TimeSpanError> {
    let len = rest
        .bytes()
        .take(max_len)
        .take_while(u8::is_ascii_digit)
        .count();
    let (run, tail) = rest.split_at(len);
    *rest = tail;
    parse(run)
}

fn assemble(
    negative: bool,
    days: i64,
    seconds: i64,
    nanos: u32,
) -> Result<TimeDelta, TimeSpanError> {
    let total = days
        .checked_mul(86_400)
        .and_then(|secs| secs.checked_add(seconds))
        .ok_or(TimeSpanError::Overflow)?;
    let span = TimeDelta::new(total, nanos).ok_or(TimeSpanError::Overflow)?;

    Ok(if negative { -span } else { span })
}

/// Parses `hh:mm[:ss[.fffffff]]` into seconds and nanoseconds.
fn clock_time(clock: &str) -> Result<(i64, u32), TimeSpanError> {
    let mut parts = clock.split(':');
    let hours = component(parts.next().unwrap_or_default(), "hours", 2, 23)?;
    let minutes = component(
        parts.next().ok_or(TimeSpanError::InvalidFormat)?,
        "minutes",
        2,
        59,
    )?;

    let (seconds, nanos) = match parts.next() {
        None => (0, 0),
        Some(seconds) => {
            let (whole, fraction) = match seconds.split_once('.') {
                Some((whole, fraction)) => (whole, Some(fraction)),
                None => (seconds, None),
            };
            let nanos = match fraction {
                Some(fraction) => fraction_nanos(fraction)?,
                None => 0,
            };
            (component(whole, "seconds", 2, 59)?, nanos)
        }
    };

    if parts.next().is_some() {
        return Err(TimeSpanError::InvalidFormat);
    }

    let seconds = i64::from(hours) * 3_600 + i64::from(minutes) * 60 + i64::from(seconds);
    Ok((seconds, nanos))
}

fn component(
    digits: &str,
    name: &'static str,
    max_len: usize,
    max: u32,
) -> Result<u32, TimeSpanError> {
    if digits.is_empty() || digits.len() > max_len || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeSpanError::InvalidFormat);
    }
    match digits.parse::<u32>() {
        Ok(value) if value <= max => Ok(value),
        _ => Err(TimeSpanError::OutOfRange(name)),
    }
}

fn fraction_nanos(fraction: &str) -> Result<u32, TimeSpanError> {
    if fraction.is_empty()
        || fraction.len() > MAX_FRACTION_DIGITS
        || !fraction.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(TimeSpanError::InvalidFormat);
    }
    // Right-pad to nanosecond precision.
    let scale = 10_u32.pow((9 - fraction.len()) as u32);
    fraction
        .parse::<u32>()
        .map(|value| value * scale)
        .map_err(|_| TimeSpanError::InvalidFormat)
}
