//! Timezone normalization with carry propagation over the proleptic Gregorian calendar.
//!
//! Years follow the XML Schema 1.0 convention: there is no year 0, the year before 0001 is -0001.

use crate::error::TemporalOverflowError;
use crate::value::{DateTimeFields, TimezoneOffset};

/// Returns the fields shifted to UTC.
///
/// Fields without timezone or with the UTC one are returned as is.
/// In all cases trailing zeros of the fractional seconds are removed.
pub(crate) fn to_utc(fields: &DateTimeFields) -> Result<DateTimeFields, TemporalOverflowError> {
    let fraction = fields.fraction.trim_end_matches('0').into();
    let Some(offset) = fields.timezone_offset else {
        return Ok(DateTimeFields {
            fraction,
            ..fields.clone()
        });
    };
    let shifted = if offset == TimezoneOffset::UTC {
        fields.clone()
    } else {
        shift_minutes(fields, -i64::from(offset.in_minutes())).ok_or(TemporalOverflowError)?
    };
    Ok(DateTimeFields {
        fraction,
        timezone_offset: Some(TimezoneOffset::UTC),
        ..shifted
    })
}

/// Adds `minutes` to the fields, propagating carries and borrows up to the year.
///
/// The timezone is kept untouched. Returns `None` on year overflow.
pub(crate) fn shift_minutes(fields: &DateTimeFields, minutes: i64) -> Option<DateTimeFields> {
    let (year, month, day, hour, minute) = normalize_minute(
        fields.year,
        fields.month.into(),
        fields.day.into(),
        fields.hour.into(),
        i64::from(fields.minute).checked_add(minutes)?,
    )?;
    Some(DateTimeFields {
        year,
        month,
        day,
        hour,
        minute,
        second: fields.second,
        fraction: fields.fraction.clone(),
        timezone_offset: fields.timezone_offset,
    })
}

/// Adds `delta` years, skipping the year 0.
///
/// The result stays in `-i64::MAX..=i64::MAX` so that every year has a lexical form.
fn add_years(year: i64, delta: i64) -> Option<i64> {
    let result = year.checked_add(delta)?;
    let result = if year > 0 && result <= 0 {
        result.checked_sub(1)?
    } else if year < 0 && result >= 0 {
        result.checked_add(1)?
    } else {
        result
    };
    (result != i64::MIN).then_some(result)
}

/// The [normalizeMonth](https://www.w3.org/TR/xmlschema11-2/#f-dt-normMo) function
fn normalize_month(yr: i64, mo: i64) -> Option<(i64, u8)> {
    let mo = mo.checked_sub(1)?;
    let yr = add_years(yr, mo.div_euclid(12))?;
    let mo = u8::try_from(mo.rem_euclid(12) + 1).ok()?;
    Some((yr, mo))
}

/// The [normalizeDa](https://www.w3.org/TR/xmlschema11-2/#f-dt-normDa) function
pub(crate) fn normalize_day(yr: i64, mo: i64, mut da: i64) -> Option<(i64, u8, u8)> {
    let (mut yr, mut mo) = normalize_month(yr, mo)?;
    loop {
        if da <= 0 {
            // Borrow from the previous month, that might be in the previous year
            let (yr2, mo2) = normalize_month(yr, i64::from(mo) - 1)?;
            yr = yr2;
            mo = mo2;
            da = da.checked_add(days_in_month(yr, mo).into())?;
        } else if da > days_in_month(yr, mo).into() {
            da -= i64::from(days_in_month(yr, mo));
            let (yr2, mo2) = normalize_month(yr, i64::from(mo) + 1)?;
            yr = yr2;
            mo = mo2;
        } else {
            return Some((yr, mo, u8::try_from(da).ok()?));
        }
    }
}

/// The [normalizeMinute](https://www.w3.org/TR/xmlschema11-2/#f-dt-normMi) function
fn normalize_minute(yr: i64, mo: i64, da: i64, hr: i64, mi: i64) -> Option<(i64, u8, u8, u8, u8)> {
    let hr = hr.checked_add(mi.div_euclid(60))?;
    let mi = mi.rem_euclid(60);
    let da = da.checked_add(hr.div_euclid(24))?;
    let hr = hr.rem_euclid(24);
    let (yr, mo, da) = normalize_day(yr, mo, da)?;
    Some((yr, mo, da, u8::try_from(hr).ok()?, u8::try_from(mi).ok()?))
}

/// The [daysInMonth](https://www.w3.org/TR/xmlschema11-2/#f-daysInMonth) function
pub(crate) fn days_in_month(y: i64, m: u8) -> u8 {
    match m {
        2 => {
            if y % 4 == 0 && (y % 100 != 0 || y % 400 == 0) {
                29
            } else {
                28
            }
        }
        4 | 6 | 9 | 11 => 30,
        _ => 31,
    }
}

#[cfg(test)]
#[expect(clippy::panic_in_result_fn)]
mod tests {
    use super::*;
    use crate::{ParseTemporalError, TemporalSubtype, TemporalValue};

    fn utc(input: &str, subtype: TemporalSubtype) -> Result<String, ParseTemporalError> {
        Ok(TemporalValue::parse(input, subtype)?.to_utc_string())
    }

    #[test]
    fn days_in_month_values() {
        assert_eq!(days_in_month(2000, 2), 29);
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(1900, 2), 28);
        assert_eq!(days_in_month(2023, 2), 28);
        assert_eq!(days_in_month(-4, 2), 29);
        assert_eq!(days_in_month(-1, 2), 28);
        assert_eq!(days_in_month(2023, 4), 30);
        assert_eq!(days_in_month(2023, 12), 31);
    }

    #[test]
    fn years_skip_zero() {
        assert_eq!(add_years(1, -1), Some(-1));
        assert_eq!(add_years(-1, 1), Some(1));
        assert_eq!(add_years(2, -3), Some(-2));
        assert_eq!(add_years(-2, 3), Some(2));
        assert_eq!(add_years(2023, 1), Some(2024));
        assert_eq!(add_years(i64::MAX, 1), None);
        assert_eq!(add_years(-i64::MAX, -1), None);
        assert_eq!(add_years(-i64::MAX + 1, -1), Some(-i64::MAX));
        assert_eq!(normalize_day(-i64::MAX, 1, 0), None);
        assert_eq!(normalize_month(1, 0), Some((-1, 12)));
        assert_eq!(normalize_month(-1, 13), Some((1, 1)));
        assert_eq!(normalize_month(2023, 13), Some((2024, 1)));
        assert_eq!(normalize_month(2023, -11), Some((2022, 1)));
    }

    #[test]
    fn day_carries() {
        assert_eq!(normalize_day(2024, 3, 0), Some((2024, 2, 29)));
        assert_eq!(normalize_day(2023, 3, 0), Some((2023, 2, 28)));
        assert_eq!(normalize_day(2024, 1, 0), Some((2023, 12, 31)));
        assert_eq!(normalize_day(2023, 12, 32), Some((2024, 1, 1)));
        assert_eq!(normalize_day(2024, 2, 30), Some((2024, 3, 1)));
        assert_eq!(normalize_day(1, 1, 0), Some((-1, 12, 31)));
        assert_eq!(normalize_day(-1, 12, 32), Some((1, 1, 1)));
    }

    #[test]
    fn shift_to_utc() -> Result<(), ParseTemporalError> {
        assert_eq!(
            utc("2024-01-01T00:30:00+01:00", TemporalSubtype::DateTime)?,
            "2023-12-31T23:30:00Z"
        );
        assert_eq!(
            utc("2023-12-31T23:30:00-01:00", TemporalSubtype::DateTime)?,
            "2024-01-01T00:30:00Z"
        );
        assert_eq!(
            utc("2024-03-01T05:00:00+14:00", TemporalSubtype::DateTime)?,
            "2024-02-29T15:00:00Z"
        );
        assert_eq!(
            utc("2023-03-01T05:00:00+14:00", TemporalSubtype::DateTime)?,
            "2023-02-28T15:00:00Z"
        );
        assert_eq!(
            utc("2024-02-28T20:00:00-05:30", TemporalSubtype::DateTime)?,
            "2024-02-29T01:30:00Z"
        );
        assert_eq!(
            utc("0001-01-01T00:00:00+00:01", TemporalSubtype::DateTime)?,
            "-0001-12-31T23:59:00Z"
        );
        assert_eq!(
            utc("2024-06-15T12:34:56.7800+02:00", TemporalSubtype::DateTime)?,
            "2024-06-15T10:34:56.78Z"
        );
        assert_eq!(utc("2024-06-15T12:00:00-00:00", TemporalSubtype::DateTime)?, "2024-06-15T12:00:00Z");
        assert_eq!(utc("2024-06-15T12:00:00", TemporalSubtype::DateTime)?, "2024-06-15T12:00:00");
        assert_eq!(utc("2000-01-01+01:00", TemporalSubtype::Date)?, "1999-12-31Z");
        assert_eq!(utc("2000-01+01:00", TemporalSubtype::GYearMonth)?, "2000-01Z");
        // The reference day is the last one of the month at midnight, positive shifts stay in it
        assert_eq!(utc("2000-01-14:00", TemporalSubtype::GYearMonth)?, "2000-01Z");
        assert_eq!(utc("2000+01:00", TemporalSubtype::GYear)?, "2000Z");
        assert_eq!(utc("---01+01:00", TemporalSubtype::GDay)?, "---30Z");
        assert_eq!(utc("--03-01+01:00", TemporalSubtype::GMonthDay)?, "--02-29Z");
        Ok(())
    }

    #[test]
    fn time_wraps() -> Result<(), ParseTemporalError> {
        let value = TemporalValue::parse("23:30:00+01:00", TemporalSubtype::Time)?;
        assert_eq!(value.normalized().hour(), 22);
        assert_eq!(value.normalized().minute(), 30);
        assert_eq!(value.to_utc_string(), "22:30:00Z");
        assert_eq!(value.to_string(), "23:30:00+01:00");

        let value = TemporalValue::parse("00:30:00+01:00", TemporalSubtype::Time)?;
        assert_eq!(value.to_utc_string(), "23:30:00Z");
        // The borrow moves the reference date, it is not visible in the lexical form
        assert_eq!(value.normalized().day(), 30);
        assert_eq!(value.unnormalized().day(), 31);

        let value = TemporalValue::parse("23:30:00-01:00", TemporalSubtype::Time)?;
        assert_eq!(value.to_utc_string(), "00:30:00Z");
        assert_eq!(
            (value.normalized().year(), value.normalized().month(), value.normalized().day()),
            (1973, 1, 1)
        );
        Ok(())
    }
}
