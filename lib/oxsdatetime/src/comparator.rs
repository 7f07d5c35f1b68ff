use crate::normalizer::shift_minutes;
use crate::value::{DateTimeFields, TemporalValue, TimezoneOffset};
use std::cmp::Ordering;

/// The result of the [order relation](https://www.w3.org/TR/xmlschema11-2/#dt-dt-order) between two temporal values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemporalOrdering {
    Less,
    Equal,
    Greater,
    /// The values can't be ordered, usually because only one of them has a timezone
    /// and their distance is less than 14 hours.
    Indeterminate,
}

impl TemporalOrdering {
    #[inline]
    #[must_use]
    pub fn reverse(self) -> Self {
        match self {
            Self::Less => Self::Greater,
            Self::Greater => Self::Less,
            Self::Equal => Self::Equal,
            Self::Indeterminate => Self::Indeterminate,
        }
    }
}

impl From<Ordering> for TemporalOrdering {
    #[inline]
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Less,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Greater,
        }
    }
}

/// Compares two temporal values.
///
/// Values with a timezone are compared to values without one by trying the two extreme timezones
/// (`+14:00` and `-14:00`) for the latter: the result is only definite if both agree.
/// Values of different datatypes are never comparable.
///
/// ```
/// use oxsdatetime::{TemporalOrdering, TemporalSubtype, compare, parse};
///
/// let noon = parse("12:00:00", TemporalSubtype::Time)?;
/// assert_eq!(
///     compare(&noon, &parse("11:00:00Z", TemporalSubtype::Time)?),
///     TemporalOrdering::Indeterminate
/// );
/// assert_eq!(
///     compare(&noon, &parse("00:00:00+14:00", TemporalSubtype::Time)?),
///     TemporalOrdering::Greater
/// );
/// # Result::<_, oxsdatetime::ParseTemporalError>::Ok(())
/// ```
#[must_use]
pub fn compare(a: &TemporalValue, b: &TemporalValue) -> TemporalOrdering {
    if a.subtype() != b.subtype() {
        return TemporalOrdering::Indeterminate;
    }
    let (a, b) = (a.normalized(), b.normalized());
    match (a.timezone_offset(), b.timezone_offset()) {
        (Some(_), Some(_)) | (None, None) => a.timeline_cmp(b).into(),
        (Some(_), None) => compare_with_floating(a, b),
        (None, Some(_)) => compare_with_floating(b, a).reverse(),
    }
}

/// Checks that `compare(a, b)` is [`TemporalOrdering::Equal`].
#[inline]
#[must_use]
pub fn equals(a: &TemporalValue, b: &TemporalValue) -> bool {
    compare(a, b) == TemporalOrdering::Equal
}

/// Compares a value with a timezone to one without.
///
/// A bound that leaves the year range lies beyond every representable value.
fn compare_with_floating(zoned: &DateTimeFields, floating: &DateTimeFields) -> TemporalOrdering {
    let max_offset = i64::from(TimezoneOffset::MAX.in_minutes());
    // Read at +14:00, the floating value is as early as possible, at -14:00 as late as possible
    let with_earliest = shift_minutes(floating, -max_offset)
        .map_or(Ordering::Greater, |earliest| zoned.timeline_cmp(&earliest));
    let with_latest = shift_minutes(floating, max_offset)
        .map_or(Ordering::Less, |latest| zoned.timeline_cmp(&latest));
    if with_earliest == with_latest {
        with_earliest.into()
    } else {
        TemporalOrdering::Indeterminate
    }
}
