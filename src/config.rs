use crate::ids::IdGenerator;
use crate::input::DateInput;
use crate::labels::{MonthFormat, NavLabels, YearFormat};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::fs;
use std::path::Path;
use std::rc::Rc;
use time::PrimitiveDateTime;

/// Fired with the first-of-month instant of every committed selection.
pub type ChangeCallback = Box<dyn FnMut(PrimitiveDateTime)>;

/// Construction options with defaults and builder chaining.
pub struct SelectorOptions {
    pub min_date: Option<DateInput>,      // None: Jan 1, ten years back
    pub max_date: Option<DateInput>,      // None: end of the current year
    pub selected_date: Option<DateInput>, // None: now
    pub month_format: MonthFormat,
    pub year_format: YearFormat,
    pub show_first_last: bool,
    pub show_prev_next: bool,
    pub labels: NavLabels,
    pub id: Option<String>,
    pub(crate) callback: Option<ChangeCallback>,
}

impl Default for SelectorOptions {
    fn default() -> Self {
        Self {
            min_date: None,
            max_date: None,
            selected_date: None,
            month_format: MonthFormat::Long,
            year_format: YearFormat::Full,
            show_first_last: true,
            show_prev_next: true,
            labels: NavLabels::default(),
            id: None,
            callback: None,
        }
    }
}

impl fmt::Debug for SelectorOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectorOptions")
            .field("min_date", &self.min_date)
            .field("max_date", &self.max_date)
            .field("selected_date", &self.selected_date)
            .field("month_format", &self.month_format)
            .field("year_format", &self.year_format)
            .field("show_first_last", &self.show_first_last)
            .field("show_prev_next", &self.show_prev_next)
            .field("labels", &self.labels)
            .field("id", &self.id)
            .field("callback", &self.callback.is_some())
            .finish()
    }
}

impl SelectorOptions {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_min_date(mut self, min: impl Into<DateInput>) -> Self {
        self.min_date = Some(min.into());
        self
    }
    pub fn with_max_date(mut self, max: impl Into<DateInput>) -> Self {
        self.max_date = Some(max.into());
        self
    }
    pub fn with_date_range(mut self, min: impl Into<DateInput>, max: impl Into<DateInput>) -> Self {
        self.min_date = Some(min.into());
        self.max_date = Some(max.into());
        self
    }
    pub fn with_selected_date(mut self, selected: impl Into<DateInput>) -> Self {
        self.selected_date = Some(selected.into());
        self
    }
    pub fn with_month_format(mut self, format: MonthFormat) -> Self {
        self.month_format = format;
        self
    }
    pub fn with_month_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.month_format = MonthFormat::Custom(names.into_iter().map(Into::into).collect());
        self
    }
    pub fn with_year_format(mut self, format: YearFormat) -> Self {
        self.year_format = format;
        self
    }
    pub fn with_first_last(mut self, show: bool) -> Self {
        self.show_first_last = show;
        self
    }
    pub fn with_prev_next(mut self, show: bool) -> Self {
        self.show_prev_next = show;
        self
    }
    pub fn with_labels(mut self, labels: NavLabels) -> Self {
        self.labels = labels;
        self
    }
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }
    pub fn with_generated_id(mut self, ids: &mut IdGenerator) -> Self {
        self.id = Some(ids.next_id());
        self
    }

    // Callbacks
    pub fn on_change(mut self, f: impl FnMut(PrimitiveDateTime) + 'static) -> Self {
        self.callback = Some(Box::new(f));
        self
    }
    /// Bind the callback to a receiver; `f` gets `&mut S` on every commit.
    /// If the host still holds a borrow of the receiver when a commit happens,
    /// that commit is not delivered to it and a warning is logged.
    pub fn on_change_scoped<S: 'static>(
        mut self,
        scope: Rc<RefCell<S>>,
        mut f: impl FnMut(&mut S, PrimitiveDateTime) + 'static,
    ) -> Self {
        self.callback = Some(Box::new(move |date| match scope.try_borrow_mut() {
            Ok(mut receiver) => f(&mut receiver, date),
            Err(_) => tracing::warn!(date=%date, "change callback receiver is borrowed; commit not delivered"),
        }));
        self
    }
}

/// Serializable subset of [`SelectorOptions`] (camelCase JSON keys).
/// Callbacks are attached on the resulting options afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SelectorConfig {
    pub min_date: Option<String>,
    pub max_date: Option<String>,
    pub selected_date: Option<String>,
    pub month_names: Option<Vec<String>>, // wins over month_format
    pub month_format: MonthFormat,
    pub year_format: YearFormat,
    pub show_first_last: bool,
    pub show_prev_next: bool,
    pub labels: NavLabels,
    pub id: Option<String>,
}

impl Default for SelectorConfig {
    fn default() -> Self {
        Self {
            min_date: None,
            max_date: None,
            selected_date: None,
            month_names: None,
            month_format: MonthFormat::Long,
            year_format: YearFormat::Full,
            show_first_last: true,
            show_prev_next: true,
            labels: NavLabels::default(),
            id: None,
        }
    }
}

impl SelectorConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        serde_json::from_str(s).context("parsing selector config JSON")
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading selector config {}", path.display()))?;
        Self::from_json_str(&raw).with_context(|| format!("in {}", path.display()))
    }

    pub fn into_options(self) -> SelectorOptions {
        let month_format = match self.month_names {
            Some(names) => MonthFormat::Custom(names),
            None => self.month_format,
        };
        SelectorOptions {
            min_date: self.min_date.map(DateInput::Text),
            max_date: self.max_date.map(DateInput::Text),
            selected_date: self.selected_date.map(DateInput::Text),
            month_format,
            year_format: self.year_format,
            show_first_last: self.show_first_last,
            show_prev_next: self.show_prev_next,
            labels: self.labels,
            id: self.id,
            callback: None,
        }
    }
}

impl From<SelectorConfig> for SelectorOptions {
    fn from(cfg: SelectorConfig) -> Self {
        cfg.into_options()
    }
}
