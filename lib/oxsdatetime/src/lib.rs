#![doc = include_str!("../README.md")]
#![doc(test(attr(deny(warnings))))]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(html_favicon_url = "https://raw.githubusercontent.com/oxigraph/oxigraph/main/logo.svg")]
#![doc(html_logo_url = "https://raw.githubusercontent.com/oxigraph/oxigraph/main/logo.svg")]

mod comparator;
mod error;
mod normalizer;
mod scanner;
mod serializer;
mod subtype;
mod validator;
mod value;

pub use self::comparator::{TemporalOrdering, compare, equals};
pub use self::error::{
    InvalidTimezoneError, ParseTemporalError, TemporalOverflowError, TemporalRangeError,
    TemporalSyntaxError,
};
pub use self::serializer::serialize;
pub use self::subtype::{FieldLayout, LexicalItem, TemporalSubtype, UnknownSubtypeError};
pub use self::value::{DateTimeFields, TemporalValue, TimezoneOffset};

/// Parses `lexical` as a value of the `subtype` datatype.
///
/// Syntax errors are reported before range errors: `2024-13-45` is a range error but `2024-1-5` a syntax one.
///
/// ```
/// use oxsdatetime::{TemporalSubtype, parse};
///
/// let value = parse("2024-02-29T23:30:00-01:00", TemporalSubtype::DateTime)?;
/// assert_eq!(value.to_utc_string(), "2024-03-01T00:30:00Z");
/// assert!(parse("2023-02-29", TemporalSubtype::Date).is_err_and(|e| e.is_range_error()));
/// assert!(parse("2024-1-5", TemporalSubtype::Date).is_err_and(|e| e.is_syntax_error()));
/// # Result::<_, oxsdatetime::ParseTemporalError>::Ok(())
/// ```
#[inline]
pub fn parse(lexical: &str, subtype: TemporalSubtype) -> Result<TemporalValue, ParseTemporalError> {
    TemporalValue::parse(lexical, subtype)
}
