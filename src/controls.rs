//! Control model handed to the host UI: the month and year selects and the
//! four navigation buttons, with their current values and enablement.
//! The host renders it; only the selector mutates it.

use crate::date::MonthValue;
use crate::ids::ControlIds;
use crate::labels::{NavLabels, YearFormat};
use crate::range::DateRange;
use serde::Serialize;

/// The four navigation actions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum NavAction {
    First,
    Prev,
    Next,
    Last,
}

impl NavAction {
    pub const ALL: [NavAction; 4] = [NavAction::First, NavAction::Prev, NavAction::Next, NavAction::Last];
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MonthOption {
    pub index: u8, // 0..=11
    pub label: String,
    pub disabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct YearOption {
    pub year: i32,
    pub label: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NavControl {
    pub action: NavAction,
    pub id: String,
    pub label: String,
    /// Presentational only; hidden controls keep their enablement.
    pub visible: bool,
    pub enabled: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MonthSelect {
    pub id: String,
    pub value: u8,
    pub options: Vec<MonthOption>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct YearSelect {
    pub id: String,
    pub value: i32,
    pub options: Vec<YearOption>, // newest first
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Controls {
    pub month: MonthSelect,
    pub year: YearSelect,
    pub first: NavControl,
    pub prev: NavControl,
    pub next: NavControl,
    pub last: NavControl,
}

/// Presentational inputs needed to lay the controls out once.
pub(crate) struct Layout<'a> {
    pub ids: ControlIds,
    pub month_labels: Vec<String>,
    pub year_format: YearFormat,
    pub labels: &'a NavLabels,
    pub show_first_last: bool,
    pub show_prev_next: bool,
}

impl Controls {
    /// Lay out every control for `range`; values and enablement are filled by [`Controls::refresh`].
    pub(crate) fn build(layout: Layout<'_>, range: &DateRange) -> Self {
        let Layout { ids, month_labels, year_format, labels, show_first_last, show_prev_next } = layout;
        let nav = |action, id: &str, label: &str, visible| NavControl {
            action,
            id: id.to_string(),
            label: label.to_string(),
            visible,
            enabled: false,
        };
        Self {
            month: MonthSelect {
                id: ids.month.clone(),
                value: 0,
                options: month_labels
                    .into_iter()
                    .enumerate()
                    .map(|(i, label)| MonthOption { index: i as u8, label, disabled: false })
                    .collect(),
            },
            year: YearSelect {
                id: ids.year.clone(),
                value: range.min().year(),
                options: range
                    .years()
                    .map(|year| YearOption { year, label: year_format.label(year) })
                    .collect(),
            },
            first: nav(NavAction::First, &ids.first, &labels.first, show_first_last),
            prev: nav(NavAction::Prev, &ids.prev, &labels.prev, show_prev_next),
            next: nav(NavAction::Next, &ids.next, &labels.next, show_prev_next),
            last: nav(NavAction::Last, &ids.last, &labels.last, show_first_last),
        }
    }

    /// Show `at` and recompute all twelve month options and the four buttons.
    pub(crate) fn refresh(&mut self, range: &DateRange, at: MonthValue) {
        self.month.value = at.month;
        self.year.value = at.year;
        for opt in self.month.options.iter_mut() {
            opt.disabled = range.month_disabled(at.year, opt.index);
        }
        let back = range.can_go_back(at);
        let forward = range.can_go_forward(at);
        self.first.enabled = back;
        self.prev.enabled = back;
        self.next.enabled = forward;
        self.last.enabled = forward;
    }

    pub fn nav(&self, action: NavAction) -> &NavControl {
        match action {
            NavAction::First => &self.first,
            NavAction::Prev => &self.prev,
            NavAction::Next => &self.next,
            NavAction::Last => &self.last,
        }
    }

    /// Month and year currently shown by the two selects.
    pub fn displayed(&self) -> MonthValue {
        MonthValue { year: self.year.value, month: self.month.value }
    }

    pub fn disabled_months(&self) -> Vec<u8> {
        self.month.options.iter().filter(|o| o.disabled).map(|o| o.index).collect()
    }
}
