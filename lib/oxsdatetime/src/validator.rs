use crate::error::{TemporalOverflowError, TemporalRangeError};
use crate::normalizer::{days_in_month, normalize_day, to_utc};
use crate::scanner::{RawFields, RawTimezone, RawYear};
use crate::subtype::{FieldLayout, TemporalSubtype};
use crate::value::{DateTimeFields, TemporalValue, TimezoneOffset};

/// Checks the ranges of the scanned fields and builds the value.
///
/// Checks are done in order: year, month, day of month, hour (and the `24:00:00` special case),
/// minute, second and timezone. The first violation is returned.
pub(crate) fn validate(
    raw: &RawFields<'_>,
    subtype: TemporalSubtype,
) -> Result<TemporalValue, TemporalRangeError> {
    let year = if let Some(year) = raw.year {
        year_value(year)?
    } else {
        FieldLayout::REFERENCE_YEAR
    };

    let month = if let Some(month) = raw.month {
        let month = two_digits_value(month);
        if !(1..=12).contains(&month) {
            return Err(TemporalRangeError::invalid_month(month));
        }
        month
    } else {
        FieldLayout::REFERENCE_MONTH
    };

    let day = if let Some(day) = raw.day {
        let day = two_digits_value(day);
        // Constraint: Day-of-month Values
        if day == 0 || day > days_in_month(year, month) {
            return Err(TemporalRangeError::invalid_day_of_month(year, month, day));
        }
        day
    } else {
        days_in_month(year, month)
    };

    let hour = raw.hour.map_or(0, two_digits_value);
    let minute = raw.minute.map_or(0, two_digits_value);
    let second = raw.second.map_or(0, two_digits_value);
    let fraction = raw.fraction.unwrap_or_default();
    if hour > 24 {
        return Err(TemporalRangeError::invalid_hour(hour));
    }
    if hour == 24 && (minute != 0 || second != 0 || fraction.bytes().any(|b| b != b'0')) {
        return Err(TemporalRangeError::invalid_end_of_day());
    }
    if minute > 59 {
        return Err(TemporalRangeError::invalid_minute(minute));
    }
    if second > 59 {
        return Err(TemporalRangeError::invalid_second(second));
    }

    let timezone_offset = raw.timezone.map(timezone_value).transpose()?;

    let mut unnormalized = DateTimeFields {
        year,
        month,
        day,
        hour,
        minute,
        second,
        fraction: fraction.into(),
        timezone_offset,
    };
    if hour == 24 {
        end_of_day(&mut unnormalized, subtype)?;
    }
    let normalized = to_utc(&unnormalized)?;
    Ok(TemporalValue::from_parts(subtype, normalized, unnormalized))
}

/// `24:00:00` is the first instant of the next day.
///
/// The reference date of `time` values is left untouched: `24:00:00` and `00:00:00` are the same time.
fn end_of_day(
    fields: &mut DateTimeFields,
    subtype: TemporalSubtype,
) -> Result<(), TemporalOverflowError> {
    fields.hour = 0;
    if subtype.layout().has_date() {
        let (year, month, day) = normalize_day(
            fields.year,
            fields.month.into(),
            i64::from(fields.day) + 1,
        )
        .ok_or(TemporalOverflowError)?;
        fields.year = year;
        fields.month = month;
        fields.day = day;
    }
    Ok(())
}

fn year_value(year: RawYear<'_>) -> Result<i64, TemporalRangeError> {
    let value = year
        .digits
        .bytes()
        .try_fold(0_i64, |acc, digit| {
            acc.checked_mul(10)?.checked_add(i64::from(digit - b'0'))
        })
        .ok_or(TemporalOverflowError)?;
    if value == 0 {
        return Err(TemporalRangeError::year_zero());
    }
    Ok(if year.is_negative { -value } else { value })
}

fn two_digits_value(digits: &str) -> u8 {
    digits
        .bytes()
        .fold(0, |acc, digit| acc * 10 + (digit - b'0'))
}

fn timezone_value(timezone: RawTimezone<'_>) -> Result<TimezoneOffset, TemporalRangeError> {
    let RawTimezone::Offset {
        is_negative,
        hours,
        minutes,
    } = timezone
    else {
        return Ok(TimezoneOffset::UTC);
    };
    let minutes = two_digits_value(minutes);
    if minutes > 59 {
        return Err(TemporalRangeError::invalid_minute(minutes));
    }
    let offset = i16::from(two_digits_value(hours)) * 60 + i16::from(minutes);
    Ok(TimezoneOffset::new(if is_negative { -offset } else { offset })?)
}
