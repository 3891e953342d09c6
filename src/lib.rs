mod config;
mod controls;
mod date;
mod error;
mod ids;
mod input;
mod labels;
mod range;
mod selector;
mod util;

pub use crate::config::{ChangeCallback, SelectorConfig, SelectorOptions};
pub use crate::controls::{Controls, MonthOption, MonthSelect, NavAction, NavControl, YearOption, YearSelect};
pub use crate::date::MonthValue;
pub use crate::error::{PickerError, Result};
pub use crate::ids::{ControlIds, IdGenerator};
pub use crate::input::{parse_instant, DateInput};
pub use crate::labels::{MonthFormat, NavLabels, YearFormat};
pub use crate::range::{end_of_previous_month, start_of_next_month, Clamp, DateRange};
pub use crate::selector::DateRangeSelector;

// Logging setup for binaries and examples.
pub use crate::util::init_tracing_once;
