//! Date-like inputs: native `time` values or strings parsed into a naive instant.

use crate::date::MonthValue;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// Anything accepted where a date is expected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DateInput {
    Instant(PrimitiveDateTime),
    Date(Date),
    Offset(OffsetDateTime),
    Month(MonthValue),
    Text(String),
}

impl DateInput {
    /// Resolve to a naive instant; None when a string does not parse or a month is out of calendar range.
    pub fn resolve(&self) -> Option<PrimitiveDateTime> {
        match self {
            DateInput::Instant(dt) => Some(*dt),
            DateInput::Date(d) => Some(d.midnight()),
            DateInput::Offset(odt) => naive_utc(*odt),
            DateInput::Month(mv) => mv.first_instant(),
            DateInput::Text(s) => parse_instant(s),
        }
    }
}

impl From<PrimitiveDateTime> for DateInput {
    fn from(v: PrimitiveDateTime) -> Self { DateInput::Instant(v) }
}
impl From<Date> for DateInput {
    fn from(v: Date) -> Self { DateInput::Date(v) }
}
impl From<OffsetDateTime> for DateInput {
    fn from(v: OffsetDateTime) -> Self { DateInput::Offset(v) }
}
impl From<MonthValue> for DateInput {
    fn from(v: MonthValue) -> Self { DateInput::Month(v) }
}
impl From<&str> for DateInput {
    fn from(v: &str) -> Self { DateInput::Text(v.to_string()) }
}
impl From<String> for DateInput {
    fn from(v: String) -> Self { DateInput::Text(v) }
}
impl From<&String> for DateInput {
    fn from(v: &String) -> Self { DateInput::Text(v.clone()) }
}

/// None when shifting to UTC leaves the supported calendar range.
fn naive_utc(odt: OffsetDateTime) -> Option<PrimitiveDateTime> {
    let utc = odt.checked_to_offset(UtcOffset::UTC)?;
    Some(PrimitiveDateTime::new(utc.date(), utc.time()))
}

/// Parse the textual forms a host typically hands over:
/// RFC 3339, `YYYY-MM-DD[T ]HH:MM[:SS[.fff]]`, `YYYY-MM-DD`, `YYYY/MM/DD` and `YYYY-MM`.
pub fn parse_instant(raw: &str) -> Option<PrimitiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(odt) = OffsetDateTime::parse(s, &Rfc3339) {
        return naive_utc(odt);
    }

    let with_time = PrimitiveDateTime::parse(s, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"))
        .or_else(|_| PrimitiveDateTime::parse(s, format_description!("[year]-[month]-[day] [hour]:[minute]:[second].[subsecond]")))
        .or_else(|_| PrimitiveDateTime::parse(s, format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]")))
        .or_else(|_| PrimitiveDateTime::parse(s, format_description!("[year]-[month]-[day] [hour]:[minute]:[second]")))
        .or_else(|_| PrimitiveDateTime::parse(s, format_description!("[year]-[month]-[day]T[hour]:[minute]")))
        .or_else(|_| PrimitiveDateTime::parse(s, format_description!("[year]-[month]-[day] [hour]:[minute]")));
    if let Ok(dt) = with_time {
        return Some(dt);
    }

    let date_only = Date::parse(s, format_description!("[year]-[month]-[day]"))
        .or_else(|_| Date::parse(s, format_description!("[year]/[month]/[day]")));
    if let Ok(d) = date_only {
        return Some(d.midnight());
    }

    s.parse::<MonthValue>().ok().and_then(MonthValue::first_instant)
}
