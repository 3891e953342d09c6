//! Display tables for month and year options and the navigation controls.

use crate::error::{PickerError, Result};
use serde::{Deserialize, Serialize};

const LONG: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];
const SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// How month options are labelled.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MonthFormat {
    #[default]
    Long,
    Short,
    Numeric,
    ZeroPadded,
    /// Caller-supplied names; must hold exactly 12 entries.
    Custom(Vec<String>),
}

impl MonthFormat {
    pub fn labels(&self) -> Result<Vec<String>> {
        let v: Vec<String> = match self {
            MonthFormat::Long => LONG.iter().map(|s| s.to_string()).collect(),
            MonthFormat::Short => SHORT.iter().map(|s| s.to_string()).collect(),
            MonthFormat::Numeric => (1..=12).map(|m| m.to_string()).collect(),
            MonthFormat::ZeroPadded => (1..=12).map(|m| format!("{:02}", m)).collect(),
            MonthFormat::Custom(names) => {
                if names.len() != 12 {
                    return Err(PickerError::config("monthNames must have 12 entries"));
                }
                names.clone()
            }
        };
        Ok(v)
    }
}

/// How year options are labelled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum YearFormat {
    #[default]
    Full,
    TwoDigit,
}

impl YearFormat {
    pub fn label(self, year: i32) -> String {
        match self {
            YearFormat::Full => year.to_string(),
            YearFormat::TwoDigit => format!("{:02}", year.rem_euclid(100)),
        }
    }
}

/// Text shown on the four navigation controls. Presentational only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavLabels {
    pub first: String,
    pub prev: String,
    pub next: String,
    pub last: String,
}

impl Default for NavLabels {
    fn default() -> Self {
        Self {
            first: "«".to_string(),
            prev: "‹".to_string(),
            next: "›".to_string(),
            last: "»".to_string(),
        }
    }
}
