use crate::comparator::{TemporalOrdering, compare};
use crate::error::{InvalidTimezoneError, ParseTemporalError};
use crate::subtype::TemporalSubtype;
use crate::{scanner, serializer, validator};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A timezone offset with respect to UTC.
///
/// It is encoded as a number of minutes between -PT14H and PT14H.
#[derive(Eq, PartialEq, Ord, PartialOrd, Debug, Clone, Copy, Hash)]
pub struct TimezoneOffset {
    offset: i16, // in minute with respect to UTC
}

impl TimezoneOffset {
    pub const MAX: Self = Self { offset: 14 * 60 };
    pub const MIN: Self = Self { offset: -14 * 60 };
    pub const UTC: Self = Self { offset: 0 };

    /// From offset in minute with respect to UTC
    #[inline]
    pub fn new(offset_in_minutes: i16) -> Result<Self, InvalidTimezoneError> {
        let value = Self {
            offset: offset_in_minutes,
        };
        if Self::MIN <= value && value <= Self::MAX {
            Ok(value)
        } else {
            Err(InvalidTimezoneError::new(offset_in_minutes.into()))
        }
    }

    #[inline]
    #[must_use]
    pub fn in_minutes(self) -> i16 {
        self.offset
    }
}

impl fmt::Display for TimezoneOffset {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.offset {
            0 => f.write_str("Z"),
            offset if offset < 0 => write!(f, "-{:02}:{:02}", -offset / 60, -offset % 60),
            offset => write!(f, "+{:02}:{:02}", offset / 60, offset % 60),
        }
    }
}

/// The calendar fields of a temporal value.
///
/// Fields the datatype does not carry hold reference values (see [`FieldLayout`](crate::FieldLayout)).
/// The fractional part of the seconds is kept as its decimal digits, without any rounding.
#[derive(Eq, PartialEq, Debug, Clone, Hash)]
pub struct DateTimeFields {
    pub(crate) year: i64,
    pub(crate) month: u8,
    pub(crate) day: u8,
    pub(crate) hour: u8,
    pub(crate) minute: u8,
    pub(crate) second: u8,
    /// Digits after the dot, empty if there are none
    pub(crate) fraction: Box<str>,
    pub(crate) timezone_offset: Option<TimezoneOffset>,
}

impl DateTimeFields {
    #[inline]
    #[must_use]
    pub fn year(&self) -> i64 {
        self.year
    }

    #[inline]
    #[must_use]
    pub fn month(&self) -> u8 {
        self.month
    }

    #[inline]
    #[must_use]
    pub fn day(&self) -> u8 {
        self.day
    }

    #[inline]
    #[must_use]
    pub fn hour(&self) -> u8 {
        self.hour
    }

    #[inline]
    #[must_use]
    pub fn minute(&self) -> u8 {
        self.minute
    }

    #[inline]
    #[must_use]
    pub fn second(&self) -> u8 {
        self.second
    }

    /// The digits of the fractional part of the seconds, empty if there is none.
    #[inline]
    #[must_use]
    pub fn fractional_second(&self) -> &str {
        &self.fraction
    }

    #[inline]
    #[must_use]
    pub fn timezone_offset(&self) -> Option<TimezoneOffset> {
        self.timezone_offset
    }

    /// Orders the fields on the timeline, ignoring the timezone.
    ///
    /// The fractions are compared digit by digit, which matches their numerical order
    /// as long as trailing zeros have been removed.
    pub(crate) fn timeline_cmp(&self, other: &Self) -> Ordering {
        (
            self.year,
            self.month,
            self.day,
            self.hour,
            self.minute,
            self.second,
            &*self.fraction,
        )
            .cmp(&(
                other.year,
                other.month,
                other.day,
                other.hour,
                other.minute,
                other.second,
                &*other.fraction,
            ))
    }
}

/// A value of one of the [XML Schema temporal datatypes](TemporalSubtype).
///
/// It keeps two sets of fields:
/// * the [normalized](Self::normalized) ones, shifted to UTC when the value has a non-zero timezone offset,
///   used for equality, hashing and ordering;
/// * the [unnormalized](Self::unnormalized) ones, exactly as parsed, used for serialization and
///   by the field accessors.
///
/// ```
/// use oxsdatetime::{TemporalSubtype, TemporalValue};
///
/// let value = TemporalValue::parse("23:30:00+01:00", TemporalSubtype::Time)?;
/// assert_eq!(value.normalized().hour(), 22);
/// assert_eq!(value.to_string(), "23:30:00+01:00");
/// assert_eq!(value.to_utc_string(), "22:30:00Z");
/// assert_eq!(value, TemporalValue::parse("22:30:00Z", TemporalSubtype::Time)?);
/// # Result::<_, oxsdatetime::ParseTemporalError>::Ok(())
/// ```
#[derive(Debug, Clone)]
pub struct TemporalValue {
    subtype: TemporalSubtype,
    normalized: DateTimeFields,
    unnormalized: DateTimeFields,
}

impl TemporalValue {
    /// Parses `lexical` as a value of the `subtype` datatype.
    pub fn parse(lexical: &str, subtype: TemporalSubtype) -> Result<Self, ParseTemporalError> {
        let result = scanner::scan(lexical, subtype)
            .map_err(ParseTemporalError::from)
            .and_then(|raw| Ok(validator::validate(&raw, subtype)?));
        if let Err(error) = &result {
            tracing::trace!(%subtype, lexical, %error, "invalid temporal literal");
        }
        result
    }

    pub(crate) fn from_parts(
        subtype: TemporalSubtype,
        normalized: DateTimeFields,
        unnormalized: DateTimeFields,
    ) -> Self {
        Self {
            subtype,
            normalized,
            unnormalized,
        }
    }

    #[inline]
    #[must_use]
    pub fn subtype(&self) -> TemporalSubtype {
        self.subtype
    }

    /// The fields shifted to UTC.
    ///
    /// If the value has no timezone or the UTC one, they are the same as the [unnormalized](Self::unnormalized) ones
    /// except for trailing zeros in the fractional seconds that are removed.
    #[inline]
    #[must_use]
    pub fn normalized(&self) -> &DateTimeFields {
        &self.normalized
    }

    /// The fields as they have been parsed.
    #[inline]
    #[must_use]
    pub fn unnormalized(&self) -> &DateTimeFields {
        &self.unnormalized
    }

    /// [fn:year-from-dateTime](https://www.w3.org/TR/xpath-functions-31/#func-year-from-dateTime)
    #[inline]
    #[must_use]
    pub fn year(&self) -> Option<i64> {
        self.subtype
            .layout()
            .has_year()
            .then_some(self.unnormalized.year)
    }

    /// [fn:month-from-dateTime](https://www.w3.org/TR/xpath-functions-31/#func-month-from-dateTime)
    #[inline]
    #[must_use]
    pub fn month(&self) -> Option<u8> {
        self.subtype
            .layout()
            .has_month()
            .then_some(self.unnormalized.month)
    }

    /// [fn:day-from-dateTime](https://www.w3.org/TR/xpath-functions-31/#func-day-from-dateTime)
    #[inline]
    #[must_use]
    pub fn day(&self) -> Option<u8> {
        self.subtype
            .layout()
            .has_day()
            .then_some(self.unnormalized.day)
    }

    /// [fn:hours-from-dateTime](https://www.w3.org/TR/xpath-functions-31/#func-hours-from-dateTime)
    #[inline]
    #[must_use]
    pub fn hour(&self) -> Option<u8> {
        self.subtype
            .layout()
            .has_time()
            .then_some(self.unnormalized.hour)
    }

    /// [fn:minutes-from-dateTime](https://www.w3.org/TR/xpath-functions-31/#func-minutes-from-dateTime)
    #[inline]
    #[must_use]
    pub fn minute(&self) -> Option<u8> {
        self.subtype
            .layout()
            .has_time()
            .then_some(self.unnormalized.minute)
    }

    /// The integral part of [fn:seconds-from-dateTime](https://www.w3.org/TR/xpath-functions-31/#func-seconds-from-dateTime)
    #[inline]
    #[must_use]
    pub fn second(&self) -> Option<u8> {
        self.subtype
            .layout()
            .has_time()
            .then_some(self.unnormalized.second)
    }

    /// The digits of the fractional part of the seconds, as written.
    #[inline]
    #[must_use]
    pub fn fractional_second(&self) -> Option<&str> {
        if self.subtype.layout().has_time() && !self.unnormalized.fraction.is_empty() {
            Some(&self.unnormalized.fraction)
        } else {
            None
        }
    }

    /// The timezone offset as written, `None` if the value has no timezone.
    #[inline]
    #[must_use]
    pub fn timezone_offset(&self) -> Option<TimezoneOffset> {
        self.unnormalized.timezone_offset
    }

    /// Returns the value with its primary fields shifted to UTC.
    ///
    /// The [normalized](Self::normalized) fields of the result carry the `Z` timezone while its
    /// [unnormalized](Self::unnormalized) ones are the fields as written, offset included.
    /// Values without timezone are returned unchanged.
    ///
    /// ```
    /// use oxsdatetime::{TemporalSubtype, TemporalValue, TimezoneOffset, serialize};
    ///
    /// let value = TemporalValue::parse("2024-01-01T00:30:00.50+01:00", TemporalSubtype::DateTime)?;
    /// let utc = value.normalize();
    /// assert_eq!(utc.normalized().timezone_offset(), Some(TimezoneOffset::UTC));
    /// assert_eq!(utc.normalized().year(), 2023);
    /// assert_eq!(serialize(&utc), "2024-01-01T00:30:00.50+01:00");
    /// assert_eq!(utc, value);
    /// # Result::<_, oxsdatetime::ParseTemporalError>::Ok(())
    /// ```
    #[must_use]
    pub fn normalize(&self) -> Self {
        Self {
            subtype: self.subtype,
            normalized: self.normalized.clone(),
            unnormalized: self.unnormalized.clone(),
        }
    }

    /// The canonical lexical form of the UTC-normalized value.
    ///
    /// Values without timezone are rendered as with [`Display`](fmt::Display) (modulo trailing zeros in
    /// fractional seconds).
    #[must_use]
    pub fn to_utc_string(&self) -> String {
        let mut buffer = String::new();
        // Writing to a String never fails
        let _: fmt::Result =
            serializer::write_fields(&mut buffer, self.subtype, &self.normalized);
        buffer
    }
}

impl PartialEq for TemporalValue {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.subtype == other.subtype && self.normalized == other.normalized
    }
}

impl Eq for TemporalValue {}

impl Hash for TemporalValue {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.subtype.hash(state);
        self.normalized.hash(state);
    }
}

impl PartialOrd for TemporalValue {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        compare(self, other).into()
    }
}

impl From<TemporalOrdering> for Option<Ordering> {
    #[inline]
    fn from(ordering: TemporalOrdering) -> Self {
        match ordering {
            TemporalOrdering::Less => Some(Ordering::Less),
            TemporalOrdering::Equal => Some(Ordering::Equal),
            TemporalOrdering::Greater => Some(Ordering::Greater),
            TemporalOrdering::Indeterminate => None,
        }
    }
}

impl fmt::Display for TemporalValue {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        serializer::write_fields(f, self.subtype, &self.unnormalized)
    }
}

#[cfg(test)]
#[expect(clippy::panic_in_result_fn)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn timezone_offset() {
        assert!(TimezoneOffset::new(14 * 60).is_ok());
        assert!(TimezoneOffset::new(-14 * 60).is_ok());
        assert!(TimezoneOffset::new(14 * 60 + 1).is_err());
        assert!(TimezoneOffset::new(-14 * 60 - 1).is_err());
        assert_eq!(TimezoneOffset::UTC.to_string(), "Z");
        assert_eq!(TimezoneOffset::MIN.to_string(), "-14:00");
        assert_eq!(TimezoneOffset::MAX.to_string(), "+14:00");
        assert_eq!(
            TimezoneOffset::new(-330).map(|o| o.to_string()).ok(),
            Some("-05:30".into())
        );
    }

    #[test]
    fn accessors() -> Result<(), ParseTemporalError> {
        let value = TemporalValue::parse("1999-05-31T13:20:00.50-05:00", TemporalSubtype::DateTime)?;
        assert_eq!(value.subtype(), TemporalSubtype::DateTime);
        assert_eq!(value.year(), Some(1999));
        assert_eq!(value.month(), Some(5));
        assert_eq!(value.day(), Some(31));
        assert_eq!(value.hour(), Some(13));
        assert_eq!(value.minute(), Some(20));
        assert_eq!(value.second(), Some(0));
        assert_eq!(value.fractional_second(), Some("50"));
        assert_eq!(value.timezone_offset().map(TimezoneOffset::in_minutes), Some(-300));
        assert_eq!(value.normalized().hour(), 18);
        assert_eq!(value.normalized().fractional_second(), "5");
        assert_eq!(value.normalized().timezone_offset(), Some(TimezoneOffset::UTC));

        let value = TemporalValue::parse("13:20:00", TemporalSubtype::Time)?;
        assert_eq!(value.year(), None);
        assert_eq!(value.month(), None);
        assert_eq!(value.day(), None);
        assert_eq!(value.hour(), Some(13));
        assert_eq!(value.fractional_second(), None);
        assert_eq!(value.timezone_offset(), None);

        let value = TemporalValue::parse("--12-25", TemporalSubtype::GMonthDay)?;
        assert_eq!(value.year(), None);
        assert_eq!(value.month(), Some(12));
        assert_eq!(value.day(), Some(25));
        assert_eq!(value.hour(), None);
        Ok(())
    }

    #[test]
    fn structural_equality() -> Result<(), ParseTemporalError> {
        // Same instant, different offsets
        assert_eq!(
            TemporalValue::parse("2002-04-02T12:00:00-01:00", TemporalSubtype::DateTime)?,
            TemporalValue::parse("2002-04-02T17:00:00+04:00", TemporalSubtype::DateTime)?
        );
        assert_eq!(
            TemporalValue::parse("12:00:00.5", TemporalSubtype::Time)?,
            TemporalValue::parse("12:00:00.500", TemporalSubtype::Time)?
        );
        assert_ne!(
            TemporalValue::parse("12:00:00", TemporalSubtype::Time)?,
            TemporalValue::parse("12:00:00Z", TemporalSubtype::Time)?
        );
        // Same fields but different datatypes
        assert_ne!(
            TemporalValue::parse("--12", TemporalSubtype::GMonth)?,
            TemporalValue::parse("---31", TemporalSubtype::GDay)?
        );

        let set = [
            "2002-04-02T12:00:00-01:00",
            "2002-04-02T17:00:00+04:00",
            "2002-04-02T13:00:00Z",
            "2002-04-02T13:00:00.000Z",
        ]
        .into_iter()
        .map(|s| TemporalValue::parse(s, TemporalSubtype::DateTime))
        .collect::<Result<HashSet<_>, _>>()?;
        assert_eq!(set.len(), 1);
        Ok(())
    }

    #[test]
    fn normalize() -> Result<(), ParseTemporalError> {
        let value = TemporalValue::parse("00:30:00+01:00", TemporalSubtype::Time)?;
        let utc = value.normalize();
        assert_eq!(utc, value);
        assert_eq!(utc.normalized().hour(), 23);
        assert_eq!(utc.normalized().timezone_offset(), Some(TimezoneOffset::UTC));
        assert_eq!(utc.unnormalized(), value.unnormalized());
        assert_eq!(utc.to_string(), "00:30:00+01:00");
        assert_eq!(utc.hour(), Some(0));
        assert_eq!(
            utc.timezone_offset().map(TimezoneOffset::in_minutes),
            Some(60)
        );
        assert_eq!(utc.normalize().to_string(), "00:30:00+01:00");

        let value = TemporalValue::parse("2024-01-01T00:30:00+01:00", TemporalSubtype::DateTime)?;
        assert_eq!(value.normalize().to_string(), "2024-01-01T00:30:00+01:00");
        assert_eq!(value.normalize().to_utc_string(), "2023-12-31T23:30:00Z");

        let value = TemporalValue::parse("2024-06-15T12:00:00.100", TemporalSubtype::DateTime)?;
        assert_eq!(value.normalize().to_string(), "2024-06-15T12:00:00.100");
        assert_eq!(value.normalize().fractional_second(), Some("100"));
        assert_eq!(value.normalize().timezone_offset(), None);
        Ok(())
    }

    #[test]
    fn send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<TemporalValue>();
        assert_send_sync::<ParseTemporalError>();
    }
}
