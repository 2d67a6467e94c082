use chrono::NaiveDate;

use crate::domain::prediction::{ForecastEntry, OrgUnitNames};

pub fn on_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn forecast_entry(org_unit: &str, period: &str, values: &[f64]) -> ForecastEntry {
    ForecastEntry {
        org_unit: org_unit.to_string(),
        period: period.to_string(),
        values: values.to_vec(),
        data_element: None,
    }
}

pub fn org_unit_names(pairs: &[(&str, &str)]) -> OrgUnitNames {
    pairs
        .iter()
        .map(|(id, name)| (id.to_string(), name.to_string()))
        .collect()
}
