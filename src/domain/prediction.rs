use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Org-unit id to display name.
pub type OrgUnitNames = HashMap<String, String>;

/// One raw forecast row: all sampled values for an (org unit, period) pair.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastEntry {
    pub org_unit: String,
    pub period: String,
    #[serde(default)]
    pub values: Vec<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_element: Option<String>,
}

/// A prediction as returned by the analytics service.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PredictionResponse {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub model_id: Option<String>,
    pub created: Option<String>,
    pub forecasts: Vec<ForecastEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quantiles {
    pub quantile_low: f64,
    pub median: f64,
    pub quantile_high: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionPoint {
    pub period: String,
    pub period_label: String,
    pub quantiles: Quantiles,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionOrgUnitSeries {
    pub target_id: String,
    pub org_unit_id: String,
    pub org_unit_name: String,
    pub points: Vec<PredictionPoint>,
}
