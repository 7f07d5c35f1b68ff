use std::fmt;
use std::str::FromStr;

const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

/// The XML Schema temporal datatypes supported by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TemporalSubtype {
    /// [`xsd:dateTime`](https://www.w3.org/TR/xmlschema11-2/#dateTime)
    DateTime,
    /// [`xsd:time`](https://www.w3.org/TR/xmlschema11-2/#time)
    Time,
    /// [`xsd:date`](https://www.w3.org/TR/xmlschema11-2/#date)
    Date,
    /// [`xsd:gYearMonth`](https://www.w3.org/TR/xmlschema11-2/#gYearMonth)
    GYearMonth,
    /// [`xsd:gYear`](https://www.w3.org/TR/xmlschema11-2/#gYear)
    GYear,
    /// [`xsd:gMonthDay`](https://www.w3.org/TR/xmlschema11-2/#gMonthDay)
    GMonthDay,
    /// [`xsd:gMonth`](https://www.w3.org/TR/xmlschema11-2/#gMonth)
    GMonth,
    /// [`xsd:gDay`](https://www.w3.org/TR/xmlschema11-2/#gDay)
    GDay,
}

impl TemporalSubtype {
    pub const ALL: [Self; 8] = [
        Self::DateTime,
        Self::Time,
        Self::Date,
        Self::GYearMonth,
        Self::GYear,
        Self::GMonthDay,
        Self::GMonth,
        Self::GDay,
    ];

    /// The local name of the datatype in the XML Schema namespace.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::DateTime => "dateTime",
            Self::Time => "time",
            Self::Date => "date",
            Self::GYearMonth => "gYearMonth",
            Self::GYear => "gYear",
            Self::GMonthDay => "gMonthDay",
            Self::GMonth => "gMonth",
            Self::GDay => "gDay",
        }
    }

    /// The datatype IRI, e.g. `http://www.w3.org/2001/XMLSchema#time`.
    #[inline]
    #[must_use]
    pub const fn iri(self) -> &'static str {
        match self {
            Self::DateTime => "http://www.w3.org/2001/XMLSchema#dateTime",
            Self::Time => "http://www.w3.org/2001/XMLSchema#time",
            Self::Date => "http://www.w3.org/2001/XMLSchema#date",
            Self::GYearMonth => "http://www.w3.org/2001/XMLSchema#gYearMonth",
            Self::GYear => "http://www.w3.org/2001/XMLSchema#gYear",
            Self::GMonthDay => "http://www.w3.org/2001/XMLSchema#gMonthDay",
            Self::GMonth => "http://www.w3.org/2001/XMLSchema#gMonth",
            Self::GDay => "http://www.w3.org/2001/XMLSchema#gDay",
        }
    }

    /// Maps a datatype IRI to the matching subtype.
    ///
    /// ```
    /// use oxsdatetime::TemporalSubtype;
    ///
    /// assert_eq!(
    ///     TemporalSubtype::from_iri("http://www.w3.org/2001/XMLSchema#gYear"),
    ///     Some(TemporalSubtype::GYear)
    /// );
    /// assert_eq!(
    ///     TemporalSubtype::from_iri("http://www.w3.org/2001/XMLSchema#duration"),
    ///     None
    /// );
    /// ```
    #[must_use]
    pub fn from_iri(iri: &str) -> Option<Self> {
        Self::from_str(iri.strip_prefix(XSD)?).ok()
    }

    /// The layout of the lexical and value fields of this subtype.
    #[inline]
    #[must_use]
    pub fn layout(self) -> &'static FieldLayout {
        match self {
            Self::DateTime => &DATE_TIME_LAYOUT,
            Self::Time => &TIME_LAYOUT,
            Self::Date => &DATE_LAYOUT,
            Self::GYearMonth => &G_YEAR_MONTH_LAYOUT,
            Self::GYear => &G_YEAR_LAYOUT,
            Self::GMonthDay => &G_MONTH_DAY_LAYOUT,
            Self::GMonth => &G_MONTH_LAYOUT,
            Self::GDay => &G_DAY_LAYOUT,
        }
    }
}

impl fmt::Display for TemporalSubtype {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TemporalSubtype {
    type Err = UnknownSubtypeError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|subtype| subtype.name() == name)
            .ok_or_else(|| UnknownSubtypeError { name: name.into() })
    }
}

/// The given name is not the one of a supported temporal datatype.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{name} is not a supported temporal datatype")]
pub struct UnknownSubtypeError {
    name: String,
}

/// A piece of the lexical grammar of a temporal datatype.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexicalItem {
    /// A fixed character with the error message used when it is missing.
    Separator(char, &'static str),
    /// `'-'? [0-9]{4,}`
    Year,
    /// `[0-9]{2}`
    Month,
    /// `[0-9]{2}`
    Day,
    /// `[0-9]{2}`
    Hour,
    /// `[0-9]{2}`
    Minute,
    /// `[0-9]{2} ('.' [0-9]+)?`
    Second,
}

/// Declarative description of the fields of a temporal datatype.
///
/// The [`items`](Self::items) are the lexical grammar of the datatype in order, the optional timezone suffix
/// being implicit at the end.
/// Fields missing from the grammar are filled with reference values during parsing:
/// the year [`REFERENCE_YEAR`](Self::REFERENCE_YEAR), the month [`REFERENCE_MONTH`](Self::REFERENCE_MONTH),
/// the last day of the month and midnight.
#[derive(Debug, PartialEq, Eq)]
pub struct FieldLayout {
    items: &'static [LexicalItem],
}

impl FieldLayout {
    /// A leap year, so that `--02-29` is a valid `gMonthDay`.
    pub const REFERENCE_YEAR: i64 = 1972;
    pub const REFERENCE_MONTH: u8 = 12;

    #[inline]
    #[must_use]
    pub const fn items(&self) -> &'static [LexicalItem] {
        self.items
    }

    #[inline]
    #[must_use]
    pub fn has_year(&self) -> bool {
        self.items.contains(&LexicalItem::Year)
    }

    #[inline]
    #[must_use]
    pub fn has_month(&self) -> bool {
        self.items.contains(&LexicalItem::Month)
    }

    #[inline]
    #[must_use]
    pub fn has_day(&self) -> bool {
        self.items.contains(&LexicalItem::Day)
    }

    #[inline]
    #[must_use]
    pub fn has_time(&self) -> bool {
        self.items.contains(&LexicalItem::Hour)
    }

    #[inline]
    #[must_use]
    pub fn has_date(&self) -> bool {
        self.has_year() || self.has_month() || self.has_day()
    }
}

const YEAR_MONTH_SEPARATOR: LexicalItem =
    LexicalItem::Separator('-', "The year and month must be separated by '-'");
const MONTH_DAY_SEPARATOR: LexicalItem =
    LexicalItem::Separator('-', "The month and day must be separated by '-'");
const DATE_TIME_SEPARATOR: LexicalItem =
    LexicalItem::Separator('T', "The date and time must be separated by 'T'");
const HOUR_MINUTE_SEPARATOR: LexicalItem =
    LexicalItem::Separator(':', "The hours and minutes must be separated by ':'");
const MINUTE_SECOND_SEPARATOR: LexicalItem =
    LexicalItem::Separator(':', "The minutes and seconds must be separated by ':'");

// [16]   dateTimeLexicalRep ::= yearFrag '-' monthFrag '-' dayFrag 'T' ((hourFrag ':' minuteFrag ':' secondFrag) | endOfDayFrag) timezoneFrag?
static DATE_TIME_LAYOUT: FieldLayout = FieldLayout {
    items: &[
        LexicalItem::Year,
        YEAR_MONTH_SEPARATOR,
        LexicalItem::Month,
        MONTH_DAY_SEPARATOR,
        LexicalItem::Day,
        DATE_TIME_SEPARATOR,
        LexicalItem::Hour,
        HOUR_MINUTE_SEPARATOR,
        LexicalItem::Minute,
        MINUTE_SECOND_SEPARATOR,
        LexicalItem::Second,
    ],
};

// [17]   timeLexicalRep ::= ((hourFrag ':' minuteFrag ':' secondFrag) | endOfDayFrag) timezoneFrag?
static TIME_LAYOUT: FieldLayout = FieldLayout {
    items: &[
        LexicalItem::Hour,
        HOUR_MINUTE_SEPARATOR,
        LexicalItem::Minute,
        MINUTE_SECOND_SEPARATOR,
        LexicalItem::Second,
    ],
};

// [18]   dateLexicalRep ::= yearFrag '-' monthFrag '-' dayFrag timezoneFrag?
static DATE_LAYOUT: FieldLayout = FieldLayout {
    items: &[
        LexicalItem::Year,
        YEAR_MONTH_SEPARATOR,
        LexicalItem::Month,
        MONTH_DAY_SEPARATOR,
        LexicalItem::Day,
    ],
};

// [19]   gYearMonthLexicalRep ::= yearFrag '-' monthFrag timezoneFrag?
static G_YEAR_MONTH_LAYOUT: FieldLayout = FieldLayout {
    items: &[LexicalItem::Year, YEAR_MONTH_SEPARATOR, LexicalItem::Month],
};

// [20]   gYearLexicalRep ::= yearFrag timezoneFrag?
static G_YEAR_LAYOUT: FieldLayout = FieldLayout {
    items: &[LexicalItem::Year],
};

// [21]   gMonthDayLexicalRep ::= '--' monthFrag '-' dayFrag timezoneFrag?
static G_MONTH_DAY_LAYOUT: FieldLayout = FieldLayout {
    items: &[
        LexicalItem::Separator('-', "gMonthDay values must start with '--'"),
        LexicalItem::Separator('-', "gMonthDay values must start with '--'"),
        LexicalItem::Month,
        MONTH_DAY_SEPARATOR,
        LexicalItem::Day,
    ],
};

// [22]   gDayLexicalRep ::= '---' dayFrag timezoneFrag?
static G_DAY_LAYOUT: FieldLayout = FieldLayout {
    items: &[
        LexicalItem::Separator('-', "gDay values must start with '---'"),
        LexicalItem::Separator('-', "gDay values must start with '---'"),
        LexicalItem::Separator('-', "gDay values must start with '---'"),
        LexicalItem::Day,
    ],
};

// [23]   gMonthLexicalRep ::= '--' monthFrag timezoneFrag?
static G_MONTH_LAYOUT: FieldLayout = FieldLayout {
    items: &[
        LexicalItem::Separator('-', "gMonth values must start with '--'"),
        LexicalItem::Separator('-', "gMonth values must start with '--'"),
        LexicalItem::Month,
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts() {
        let date_time = TemporalSubtype::DateTime.layout();
        assert!(date_time.has_year() && date_time.has_day() && date_time.has_time());

        let time = TemporalSubtype::Time.layout();
        assert!(!time.has_date());
        assert!(time.has_time());

        let g_month_day = TemporalSubtype::GMonthDay.layout();
        assert!(!g_month_day.has_year());
        assert!(g_month_day.has_month() && g_month_day.has_day());
        assert!(!g_month_day.has_time());

        let g_day = TemporalSubtype::GDay.layout();
        assert!(g_day.has_day() && !g_day.has_month() && !g_day.has_year());

        for subtype in TemporalSubtype::ALL {
            assert!(
                !subtype.layout().items().is_empty(),
                "{subtype} has an empty layout"
            );
        }
    }

    #[test]
    fn names_and_iris() {
        for subtype in TemporalSubtype::ALL {
            assert_eq!(subtype.name().parse::<TemporalSubtype>().ok(), Some(subtype));
            assert_eq!(TemporalSubtype::from_iri(subtype.iri()), Some(subtype));
            assert_eq!(subtype.iri(), format!("{XSD}{subtype}"));
        }
        assert!("duration".parse::<TemporalSubtype>().is_err());
        assert_eq!(
            TemporalSubtype::from_iri("http://example.com/time"),
            None
        );
    }
}
