//! Validated min/max bounds, clamping, and the month-boundary instants that
//! decide navigation enablement.

use crate::date::MonthValue;
use crate::error::{PickerError, Result};
use time::{Duration, PrimitiveDateTime};

/// Which side of the range a candidate was pulled back from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Clamp {
    Within,
    Below,
    Above,
}

/// Inclusive `[min, max]` range of instants. `min <= max` always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    min: PrimitiveDateTime,
    max: PrimitiveDateTime,
}

impl DateRange {
    pub fn new(min: PrimitiveDateTime, max: PrimitiveDateTime) -> Result<Self> {
        if min > max {
            return Err(PickerError::config("min exceeds max"));
        }
        Ok(Self { min, max })
    }

    pub fn min(&self) -> PrimitiveDateTime { self.min }
    pub fn max(&self) -> PrimitiveDateTime { self.max }
    pub fn min_month(&self) -> MonthValue { MonthValue::from_instant(self.min) }
    pub fn max_month(&self) -> MonthValue { MonthValue::from_instant(self.max) }

    pub fn contains(&self, instant: PrimitiveDateTime) -> bool {
        instant >= self.min && instant <= self.max
    }

    /// Compare on the full instant; a mid-month bound keeps its day and time.
    pub fn clamp(&self, instant: PrimitiveDateTime) -> (PrimitiveDateTime, Clamp) {
        if instant > self.max {
            (self.max, Clamp::Above)
        } else if instant < self.min {
            (self.min, Clamp::Below)
        } else {
            (instant, Clamp::Within)
        }
    }

    /// Year options, newest first.
    pub fn years(&self) -> impl Iterator<Item = i32> {
        (self.min.year()..=self.max.year()).rev()
    }

    /// A month option of the displayed year is disabled when it falls before
    /// the min month in the min year or after the max month in the max year.
    pub fn month_disabled(&self, year: i32, month: u8) -> bool {
        let lo = self.min_month();
        let hi = self.max_month();
        (year == lo.year && month < lo.month) || (year == hi.year && month > hi.month)
    }

    /// Previous/First stay enabled while the preceding month still reaches `min`.
    pub fn can_go_back(&self, at: MonthValue) -> bool {
        match end_of_previous_month(at.month, at.year) {
            Some(end) => end >= self.min,
            None => false,
        }
    }

    /// Next/Last stay enabled while the following month starts no later than `max`.
    pub fn can_go_forward(&self, at: MonthValue) -> bool {
        match start_of_next_month(at.month, at.year) {
            Some(start) => start <= self.max,
            None => false,
        }
    }
}

/// Last instant (one millisecond before midnight) of the month preceding `(month, year)`.
pub fn end_of_previous_month(month: u8, year: i32) -> Option<PrimitiveDateTime> {
    MonthValue::checked(year, month)?
        .first_instant()?
        .checked_sub(Duration::milliseconds(1))
}

/// First instant of the month following `(month, year)`; December rolls into January.
pub fn start_of_next_month(month: u8, year: i32) -> Option<PrimitiveDateTime> {
    MonthValue::checked(year, month)?.next()?.first_instant()
}
