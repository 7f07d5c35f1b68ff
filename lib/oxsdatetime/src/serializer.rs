use crate::subtype::{LexicalItem, TemporalSubtype};
use crate::value::{DateTimeFields, TemporalValue};
use std::fmt;

/// Returns the canonical lexical form of the value.
///
/// The fields are the ones as parsed, so the timezone offset written by the author is kept.
/// The fractional seconds are kept verbatim.
///
/// ```
/// use oxsdatetime::{TemporalSubtype, parse, serialize};
///
/// let value = parse("2024-01-01T24:00:00.00+00:00", TemporalSubtype::DateTime)?;
/// assert_eq!(serialize(&value), "2024-01-02T00:00:00.00Z");
/// # Result::<_, oxsdatetime::ParseTemporalError>::Ok(())
/// ```
#[inline]
#[must_use]
pub fn serialize(value: &TemporalValue) -> String {
    value.to_string()
}

/// Writes the fields that are meaningful for `subtype` following its layout.
pub(crate) fn write_fields(
    f: &mut impl fmt::Write,
    subtype: TemporalSubtype,
    fields: &DateTimeFields,
) -> fmt::Result {
    for item in subtype.layout().items() {
        match *item {
            LexicalItem::Separator(c, _) => f.write_char(c)?,
            LexicalItem::Year => {
                if fields.year < 0 {
                    f.write_char('-')?;
                }
                write!(f, "{:04}", fields.year.unsigned_abs())?;
            }
            LexicalItem::Month => write!(f, "{:02}", fields.month)?,
            LexicalItem::Day => write!(f, "{:02}", fields.day)?,
            LexicalItem::Hour => write!(f, "{:02}", fields.hour)?,
            LexicalItem::Minute => write!(f, "{:02}", fields.minute)?,
            LexicalItem::Second => {
                write!(f, "{:02}", fields.second)?;
                if !fields.fraction.is_empty() {
                    write!(f, ".{}", fields.fraction)?;
                }
            }
        }
    }
    if let Some(timezone_offset) = fields.timezone_offset {
        write!(f, "{timezone_offset}")?;
    }
    Ok(())
}
