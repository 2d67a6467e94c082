use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown period type: {0}")]
pub struct PeriodTypeError(pub String);

/// Granularity of a DHIS2 period.
///
/// Only `Month` and `Week` are computed by the period codec. The remaining
/// variants exist so that ids coming from the server can be tagged without
/// losing information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PeriodType {
    Day,
    Week,
    Month,
    Year,
    Any,
}

impl PeriodType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PeriodType::Day => "DAY",
            PeriodType::Week => "WEEK",
            PeriodType::Month => "MONTH",
            PeriodType::Year => "YEAR",
            PeriodType::Any => "ANY",
        }
    }

    /// Whether the codec can compute periods of this granularity.
    pub fn is_computed(&self) -> bool {
        matches!(self, PeriodType::Month | PeriodType::Week)
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive, so both form literals (`"month"`) and enum names
/// (`"MONTH"`) map to the same variant.
impl FromStr for PeriodType {
    type Err = PeriodTypeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_uppercase().as_str() {
            "DAY" => Ok(PeriodType::Day),
            "WEEK" => Ok(PeriodType::Week),
            "MONTH" => Ok(PeriodType::Month),
            "YEAR" => Ok(PeriodType::Year),
            "ANY" => Ok(PeriodType::Any),
            _ => Err(PeriodTypeError(value.to_string())),
        }
    }
}

/// A calendar interval identified by its server-form id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Period {
    pub id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}
