//! Structural scanning of temporal lexical forms.
//!
//! The scanner only checks the shape of the input (separators, digit counts, suffix);
//! numeric ranges are checked afterwards by the validator.

use crate::error::TemporalSyntaxError;
use crate::subtype::{LexicalItem, TemporalSubtype};

/// The fields of a lexical form, as slices of the input.
///
/// All slices only contain ASCII digits.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct RawFields<'a> {
    pub year: Option<RawYear<'a>>,
    pub month: Option<&'a str>,
    pub day: Option<&'a str>,
    pub hour: Option<&'a str>,
    pub minute: Option<&'a str>,
    pub second: Option<&'a str>,
    /// The digits after the dot, if any
    pub fraction: Option<&'a str>,
    pub timezone: Option<RawTimezone<'a>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct RawYear<'a> {
    pub is_negative: bool,
    pub digits: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RawTimezone<'a> {
    Utc,
    Offset {
        is_negative: bool,
        hours: &'a str,
        minutes: &'a str,
    },
}

/// Splits `input` into the fields of `subtype` following its [layout](TemporalSubtype::layout).
pub(crate) fn scan(input: &str, subtype: TemporalSubtype) -> Result<RawFields<'_>, TemporalSyntaxError> {
    let mut scanner = Scanner { input, rest: input };
    let mut fields = RawFields::default();
    for item in subtype.layout().items() {
        match *item {
            LexicalItem::Separator(c, message) => scanner.expect_char(c, message)?,
            LexicalItem::Year => fields.year = Some(scanner.year_frag()?),
            LexicalItem::Month => {
                fields.month = Some(scanner.two_digits("Month must be encoded with two digits")?);
            }
            LexicalItem::Day => {
                fields.day = Some(scanner.two_digits("Day must be encoded with two digits")?);
            }
            LexicalItem::Hour => {
                fields.hour = Some(scanner.two_digits("Hours must be encoded with two digits")?);
            }
            LexicalItem::Minute => {
                fields.minute =
                    Some(scanner.two_digits("Minutes must be encoded with two digits")?);
            }
            LexicalItem::Second => {
                let (second, fraction) = scanner.second_frag()?;
                fields.second = Some(second);
                fields.fraction = fraction;
            }
        }
    }
    fields.timezone = scanner.timezone_frag()?;
    if !scanner.rest.is_empty() {
        return Err(scanner.error("Unrecognized value suffix"));
    }
    Ok(fields)
}

struct Scanner<'a> {
    input: &'a str,
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn error(&self, message: &'static str) -> TemporalSyntaxError {
        TemporalSyntaxError::new(message, self.input.len() - self.rest.len(), self.rest)
    }

    fn expect_char(&mut self, constant: char, message: &'static str) -> Result<(), TemporalSyntaxError> {
        if let Some(left) = self.rest.strip_prefix(constant) {
            self.rest = left;
            Ok(())
        } else {
            Err(self.error(message))
        }
    }

    fn digits(&mut self) -> &'a str {
        let end = self
            .rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.rest.len());
        let (digits, left) = self.rest.split_at(end);
        self.rest = left;
        digits
    }

    fn two_digits(&mut self, message: &'static str) -> Result<&'a str, TemporalSyntaxError> {
        let start = self.rest;
        let digits = self.digits();
        if digits.len() == 2 {
            Ok(digits)
        } else {
            self.rest = start;
            Err(self.error(message))
        }
    }

    // [56]   yearFrag ::= '-'? (([1-9] digit digit digit+)) | ('0' digit digit digit))
    fn year_frag(&mut self) -> Result<RawYear<'a>, TemporalSyntaxError> {
        let start = self.rest;
        let is_negative = if let Some(left) = self.rest.strip_prefix('-') {
            self.rest = left;
            true
        } else {
            false
        };
        let digits = self.digits();
        if digits.len() < 4 {
            self.rest = start;
            return Err(self.error("The year should be encoded on at least 4 digits"));
        }
        if digits.len() > 4 && digits.starts_with('0') {
            self.rest = start;
            return Err(self.error(
                "The year must not start with 0 if it can be encoded in at least 4 digits",
            ));
        }
        Ok(RawYear {
            is_negative,
            digits,
        })
    }

    // [61]   secondFrag ::= ([0-5] digit) ('.' digit+)?
    fn second_frag(&mut self) -> Result<(&'a str, Option<&'a str>), TemporalSyntaxError> {
        let second = self.two_digits("Seconds must be encoded with two digits")?;
        let Some(left) = self.rest.strip_prefix('.') else {
            return Ok((second, None));
        };
        self.rest = left;
        let fraction = self.digits();
        if fraction.is_empty() {
            return Err(self.error("The seconds dot must be followed by at least one digit"));
        }
        Ok((second, Some(fraction)))
    }

    // [63]   timezoneFrag ::= 'Z' | ('+' | '-') (('0' digit | '1' [0-3]) ':' minuteFrag | '14:00')
    fn timezone_frag(&mut self) -> Result<Option<RawTimezone<'a>>, TemporalSyntaxError> {
        if let Some(left) = self.rest.strip_prefix('Z') {
            self.rest = left;
            return Ok(Some(RawTimezone::Utc));
        }
        let is_negative = if let Some(left) = self.rest.strip_prefix('-') {
            self.rest = left;
            true
        } else if let Some(left) = self.rest.strip_prefix('+') {
            self.rest = left;
            false
        } else {
            return Ok(None);
        };
        let hours = self.two_digits("The timezone hours must be encoded with two digits")?;
        self.expect_char(
            ':',
            "The timezone hours and minutes must be separated by ':'",
        )?;
        let minutes = self.two_digits("The timezone minutes must be encoded with two digits")?;
        Ok(Some(RawTimezone::Offset {
            is_negative,
            hours,
            minutes,
        }))
    }
}
