/// An error raised while parsing a temporal literal.
///
/// It is either a [syntax error](TemporalSyntaxError), when the input does not follow the lexical grammar
/// of the requested datatype, or a [range error](TemporalRangeError), when the input is well-formed
/// but one of its fields has an invalid value.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ParseTemporalError {
    /// The input does not match the lexical grammar.
    #[error(transparent)]
    Syntax(#[from] TemporalSyntaxError),
    /// The input is well-formed but numerically invalid.
    #[error(transparent)]
    Range(#[from] TemporalRangeError),
}

impl ParseTemporalError {
    #[inline]
    #[must_use]
    pub fn is_syntax_error(&self) -> bool {
        matches!(self, Self::Syntax(_))
    }

    #[inline]
    #[must_use]
    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::Range(_))
    }
}

/// The input does not follow the lexical grammar of the requested datatype.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message} at position {position} (found {found:?})")]
pub struct TemporalSyntaxError {
    message: &'static str,
    position: usize,
    found: String,
}

impl TemporalSyntaxError {
    pub(crate) fn new(message: &'static str, position: usize, found: &str) -> Self {
        Self {
            message,
            position,
            found: found.into(),
        }
    }

    /// The byte offset in the input where the scanner stopped.
    #[inline]
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// The part of the input starting at [`position`](Self::position).
    #[inline]
    #[must_use]
    pub fn found(&self) -> &str {
        &self.found
    }

    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        self.message
    }
}

/// The input is well-formed but one of its fields is out of range.
#[derive(Debug, Clone, thiserror::Error)]
#[error(transparent)]
pub struct TemporalRangeError(#[from] TemporalRangeErrorKind);

#[derive(Debug, Clone, thiserror::Error)]
enum TemporalRangeErrorKind {
    #[error("the year 0000 does not exist")]
    YearZero,
    #[error("{month} is not a valid month")]
    InvalidMonth { month: u8 },
    #[error("{day} is not a valid day of month {month} in year {year}")]
    InvalidDayOfMonth { year: i64, month: u8, day: u8 },
    #[error("{hour} is not a valid hour")]
    InvalidHour { hour: u8 },
    #[error("24:00:00 is the only allowed time with hour 24")]
    InvalidEndOfDay,
    #[error("{minute} is not a valid minute")]
    InvalidMinute { minute: u8 },
    #[error("{second} is not a valid second")]
    InvalidSecond { second: u8 },
    #[error(transparent)]
    InvalidTimezone(#[from] InvalidTimezoneError),
    #[error(transparent)]
    Overflow(#[from] TemporalOverflowError),
}

impl TemporalRangeError {
    pub(crate) const fn year_zero() -> Self {
        Self(TemporalRangeErrorKind::YearZero)
    }

    pub(crate) const fn invalid_month(month: u8) -> Self {
        Self(TemporalRangeErrorKind::InvalidMonth { month })
    }

    pub(crate) const fn invalid_day_of_month(year: i64, month: u8, day: u8) -> Self {
        Self(TemporalRangeErrorKind::InvalidDayOfMonth { year, month, day })
    }

    pub(crate) const fn invalid_hour(hour: u8) -> Self {
        Self(TemporalRangeErrorKind::InvalidHour { hour })
    }

    pub(crate) const fn invalid_end_of_day() -> Self {
        Self(TemporalRangeErrorKind::InvalidEndOfDay)
    }

    pub(crate) const fn invalid_minute(minute: u8) -> Self {
        Self(TemporalRangeErrorKind::InvalidMinute { minute })
    }

    pub(crate) const fn invalid_second(second: u8) -> Self {
        Self(TemporalRangeErrorKind::InvalidSecond { second })
    }
}

impl From<InvalidTimezoneError> for TemporalRangeError {
    #[inline]
    fn from(error: InvalidTimezoneError) -> Self {
        Self(TemporalRangeErrorKind::InvalidTimezone(error))
    }
}

impl From<TemporalOverflowError> for TemporalRangeError {
    #[inline]
    fn from(error: TemporalOverflowError) -> Self {
        Self(TemporalRangeErrorKind::Overflow(error))
    }
}

impl From<InvalidTimezoneError> for ParseTemporalError {
    #[inline]
    fn from(error: InvalidTimezoneError) -> Self {
        Self::Range(error.into())
    }
}

impl From<TemporalOverflowError> for ParseTemporalError {
    #[inline]
    fn from(error: TemporalOverflowError) -> Self {
        Self::Range(error.into())
    }
}

/// The year does not fit in the supported range, or a timezone shift pushed it out of it.
///
/// Matches XPath [`FODT0001` error](https://www.w3.org/TR/xpath-functions-31/#ERRFODT0001).
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("overflow during date/time computation")]
pub struct TemporalOverflowError;

/// The value provided as timezone is not valid.
///
/// Matches XPath [`FODT0003` error](https://www.w3.org/TR/xpath-functions-31/#ERRFODT0003).
#[derive(Debug, Clone, Copy, thiserror::Error)]
#[error("invalid timezone offset {}{:02}:{:02}",
        if self.offset_in_minutes < 0 { "-" } else { "+" },
        self.offset_in_minutes.abs() / 60,
        self.offset_in_minutes.abs() % 60)]
pub struct InvalidTimezoneError {
    offset_in_minutes: i64,
}

impl InvalidTimezoneError {
    pub(crate) const fn new(offset_in_minutes: i64) -> Self {
        Self { offset_in_minutes }
    }
}
