use crate::config::{ChangeCallback, SelectorOptions};
use crate::controls::{Controls, Layout, MonthOption, NavAction, NavControl, YearOption};
use crate::date::MonthValue;
use crate::error::{PickerError, Result};
use crate::ids::ControlIds;
use crate::input::DateInput;
use crate::range::{Clamp, DateRange};
use std::fmt;
use time::macros::time;
use time::{Date, Month, OffsetDateTime, PrimitiveDateTime};

const DEFAULT_ID: &str = "monthpicker";
const DEFAULT_YEARS_BACK: i32 = 10;

/// Month/year selection bounded by a [`DateRange`].
///
/// Every mutation goes through [`DateRangeSelector::set_date`]: the candidate is
/// clamped into the range, the control model is recomputed and the change
/// callback fires once, even when nothing changed.
pub struct DateRangeSelector {
    range: DateRange,
    selected: MonthValue,
    effective: PrimitiveDateTime,
    first_of_month: PrimitiveDateTime,
    controls: Controls,
    callback: Option<ChangeCallback>,
}

impl fmt::Debug for DateRangeSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DateRangeSelector")
            .field("range", &self.range)
            .field("selected", &self.selected)
            .field("effective", &self.effective)
            .field("first_of_month", &self.first_of_month)
            .field("controls", &self.controls)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

impl DateRangeSelector {
    /// Build a selector and commit the initial selection (which fires the callback once).
    /// Fails without side effects on unparseable dates, `min > max` or a bad month table.
    pub fn new(options: SelectorOptions) -> Result<Self> {
        let SelectorOptions {
            min_date,
            max_date,
            selected_date,
            month_format,
            year_format,
            show_first_last,
            show_prev_next,
            labels,
            id,
            callback,
        } = options;

        let now = now_naive();
        let min = resolve_or(min_date, "minDate", || default_min(now))?;
        let max = resolve_or(max_date, "maxDate", || default_max(now))?;
        let selected = resolve_or(selected_date, "selectedDate", || Some(now))?;
        let range = DateRange::new(min, max)?;
        let month_labels = month_format.labels()?;

        let layout = Layout {
            ids: ControlIds::from_base(id.unwrap_or_else(|| DEFAULT_ID.to_string())),
            month_labels,
            year_format,
            labels: &labels,
            show_first_last,
            show_prev_next,
        };
        let controls = Controls::build(layout, &range);

        let mut selector = Self {
            range,
            selected: range.min_month(),
            effective: range.min(),
            first_of_month: month_start(range.min()),
            controls,
            callback,
        };
        tracing::debug!(min=%range.min(), max=%range.max(), "month picker created");
        selector.commit(selected);
        Ok(selector)
    }

    /// Clamp `candidate` into the range and make its month the selection.
    /// An unparseable candidate leaves state untouched and fires nothing.
    pub fn set_date(&mut self, candidate: impl Into<DateInput>) -> Result<MonthValue> {
        let input = candidate.into();
        let instant = input.resolve().ok_or_else(|| PickerError::InvalidDate(describe(&input)))?;
        Ok(self.commit(instant))
    }

    fn commit(&mut self, instant: PrimitiveDateTime) -> MonthValue {
        let (effective, side) = self.range.clamp(instant);
        if side != Clamp::Within {
            tracing::debug!(candidate=%instant, effective=%effective, side=?side, "clamped selection into range");
        }
        self.effective = effective;
        self.first_of_month = month_start(effective);
        self.selected = MonthValue::from_instant(effective);
        self.controls.refresh(&self.range, self.selected);
        tracing::debug!(
            selected=%self.selected,
            back=self.controls.prev.enabled,
            forward=self.controls.next.enabled,
            "selection committed"
        );

        if let Some(cb) = self.callback.as_mut() {
            cb(self.first_of_month);
        }
        self.selected
    }

    /// First instant of the month the month/year selects currently show.
    pub fn selected_date(&self) -> PrimitiveDateTime {
        // the selects only ever hold a committed month, which always has a first day
        self.controls.displayed().first_instant().unwrap_or(self.first_of_month)
    }

    // -------- Host events --------

    /// Month select changed to `index` (0..=11) within the displayed year.
    pub fn select_month(&mut self, index: u8) -> Result<MonthValue> {
        let year = self.controls.year.value;
        let target = MonthValue::checked(year, index)
            .ok_or_else(|| PickerError::InvalidDate(format!("month index {index}")))?;
        self.set_date(target)
    }

    /// Year select changed; keeps the displayed month.
    pub fn select_year(&mut self, year: i32) -> Result<MonthValue> {
        let month = self.controls.month.value;
        self.set_date(MonthValue { year, month })
    }

    pub fn first(&mut self) -> MonthValue {
        self.commit(self.range.min())
    }

    pub fn last(&mut self) -> MonthValue {
        self.commit(self.range.max())
    }

    pub fn previous(&mut self) -> MonthValue {
        let target = self.selected.prev().and_then(MonthValue::first_instant);
        self.commit(target.unwrap_or(self.range.min()))
    }

    pub fn next(&mut self) -> MonthValue {
        let target = self.selected.next().and_then(MonthValue::first_instant);
        self.commit(target.unwrap_or(self.range.max()))
    }

    pub fn navigate(&mut self, action: NavAction) -> MonthValue {
        match action {
            NavAction::First => self.first(),
            NavAction::Prev => self.previous(),
            NavAction::Next => self.next(),
            NavAction::Last => self.last(),
        }
    }

    /// Replace (or clear) the change callback.
    pub fn set_on_change(&mut self, callback: Option<ChangeCallback>) {
        self.callback = callback;
    }

    // -------- Queries --------

    pub fn selected(&self) -> MonthValue { self.selected }
    /// The clamped instant behind the current selection (keeps a mid-month bound's day).
    pub fn effective_date(&self) -> PrimitiveDateTime { self.effective }
    pub fn range(&self) -> &DateRange { &self.range }
    pub fn controls(&self) -> &Controls { &self.controls }
    pub fn month_options(&self) -> &[MonthOption] { &self.controls.month.options }
    pub fn year_options(&self) -> &[YearOption] { &self.controls.year.options }
    pub fn nav(&self, action: NavAction) -> &NavControl { self.controls.nav(action) }
    pub fn is_enabled(&self, action: NavAction) -> bool { self.controls.nav(action).enabled }
}

fn resolve_or(
    input: Option<DateInput>,
    field: &str,
    fallback: impl FnOnce() -> Option<PrimitiveDateTime>,
) -> Result<PrimitiveDateTime> {
    let resolved = match input {
        Some(i) => i.resolve(),
        None => fallback(),
    };
    resolved.ok_or_else(|| PickerError::invalid_field(field))
}

/// Midnight on day 1 of the instant's month. Day 1 exists in every month,
/// so this never leaves the calendar range the instant itself lives in.
fn month_start(instant: PrimitiveDateTime) -> PrimitiveDateTime {
    let date = instant.date();
    date.replace_day(1).unwrap_or(date).midnight()
}

fn describe(input: &DateInput) -> String {
    match input {
        DateInput::Text(s) => format!("{s:?}"),
        other => format!("{other:?}"),
    }
}

fn now_naive() -> PrimitiveDateTime {
    let now = OffsetDateTime::now_utc();
    PrimitiveDateTime::new(now.date(), now.time())
}

fn default_min(now: PrimitiveDateTime) -> Option<PrimitiveDateTime> {
    Date::from_calendar_date(now.year() - DEFAULT_YEARS_BACK, Month::January, 1)
        .ok()
        .map(Date::midnight)
}

fn default_max(now: PrimitiveDateTime) -> Option<PrimitiveDateTime> {
    Date::from_calendar_date(now.year(), Month::December, 31)
        .ok()
        .map(|d| d.with_time(time!(23:59:59.999)))
}
