use std::fmt;
use std::str::FromStr;

use time::{Date, Month, PrimitiveDateTime};

/// A calendar month: the first day of `month` (0..=11) in `year`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthValue {
    pub year: i32,
    pub month: u8, // 0..=11
}

impl MonthValue {
    pub fn new(year: i32, month: u8) -> Self {
        assert!(month < 12, "Month must be 0..=11");
        Self { year, month }
    }

    pub fn checked(year: i32, month: u8) -> Option<Self> {
        (month < 12).then_some(Self { year, month })
    }

    /// Truncate an instant to its month.
    pub fn from_instant(instant: PrimitiveDateTime) -> Self {
        Self::from_date(instant.date())
    }

    pub fn from_date(date: Date) -> Self {
        Self { year: date.year(), month: u8::from(date.month()) - 1 }
    }

    pub fn calendar_month(self) -> Month {
        // month < 12 is upheld by every constructor
        Month::try_from(self.month + 1).unwrap_or(Month::January)
    }

    /// Midnight on the first day of the month, or None outside the supported calendar range.
    pub fn first_instant(self) -> Option<PrimitiveDateTime> {
        Date::from_calendar_date(self.year, self.calendar_month(), 1)
            .ok()
            .map(Date::midnight)
    }

    pub fn next(self) -> Option<Self> {
        if self.month < 11 {
            Some(Self { year: self.year, month: self.month + 1 })
        } else {
            self.year.checked_add(1).map(|year| Self { year, month: 0 })
        }
    }

    pub fn prev(self) -> Option<Self> {
        if self.month > 0 {
            Some(Self { year: self.year, month: self.month - 1 })
        } else {
            self.year.checked_sub(1).map(|year| Self { year, month: 11 })
        }
    }
}

impl fmt::Display for MonthValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month + 1)
    }
}

impl FromStr for MonthValue {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (y, m) = s.trim().rsplit_once('-').ok_or("expected YYYY-MM")?;
        let year: i32 = y.parse().map_err(|_| "invalid year")?;
        let month: u8 = m.parse().map_err(|_| "invalid month")?;
        if !(1..=12).contains(&month) {
            return Err("month must be 01..12".into());
        }
        Ok(Self { year, month: month - 1 })
    }
}

impl From<PrimitiveDateTime> for MonthValue {
    fn from(instant: PrimitiveDateTime) -> Self {
        Self::from_instant(instant)
    }
}
