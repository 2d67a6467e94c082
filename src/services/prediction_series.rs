use std::cmp::Ordering;
use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::prediction::{
    OrgUnitNames, PredictionOrgUnitSeries, PredictionPoint, PredictionResponse, Quantiles,
};
use crate::services::period_codec::{
    convert_server_to_client_period, parse_period_id, period_type_of_id,
};
use crate::services::quantiles::compute_quantile;

pub const QUANTILE_LOW: f64 = 0.1;
pub const MEDIAN: f64 = 0.5;
pub const QUANTILE_HIGH: f64 = 0.9;

/// Groups raw forecast rows into one chart-ready series per org unit.
///
/// Repeated rows for the same (org unit, period) replace each other, so every
/// series holds at most one point per period. Period ids are normalized first,
/// so `2024W9` and `2024W09` are the same period. Rows tagged with a data
/// element other than `target_id` are skipped; untagged rows are kept.
///
/// Points are ordered chronologically, series by org-unit name. Org units
/// missing from `org_units_by_id` are labelled with their id.
pub fn build_prediction_series(
    prediction: &PredictionResponse,
    org_units_by_id: &OrgUnitNames,
    target_id: &str,
) -> Vec<PredictionOrgUnitSeries> {
    let mut values_by_org_unit: HashMap<&str, HashMap<String, &[f64]>> = HashMap::new();
    let mut skipped_rows = 0usize;
    for entry in &prediction.forecasts {
        if entry
            .data_element
            .as_deref()
            .is_some_and(|data_element| data_element != target_id)
        {
            skipped_rows += 1;
            continue;
        }
        values_by_org_unit
            .entry(entry.org_unit.as_str())
            .or_default()
            .insert(normalize_period_id(&entry.period), entry.values.as_slice());
    }

    let mut series: Vec<PredictionOrgUnitSeries> = values_by_org_unit
        .into_iter()
        .map(|(org_unit_id, values_by_period)| {
            let org_unit_name = org_units_by_id
                .get(org_unit_id)
                .cloned()
                .unwrap_or_else(|| org_unit_id.to_string());

            let mut points: Vec<PredictionPoint> = values_by_period
                .into_iter()
                .map(|(period, values)| build_point(&period, values))
                .collect();
            points.sort_by(|a, b| compare_point_periods(&a.period, &b.period));

            PredictionOrgUnitSeries {
                target_id: target_id.to_string(),
                org_unit_id: org_unit_id.to_string(),
                org_unit_name,
                points,
            }
        })
        .collect();

    series.sort_by(|a, b| {
        a.org_unit_name
            .cmp(&b.org_unit_name)
            .then_with(|| a.org_unit_id.cmp(&b.org_unit_id))
    });

    tracing::debug!(
        target_id,
        forecast_rows = prediction.forecasts.len(),
        skipped_rows,
        series = series.len(),
        "built prediction series"
    );
    series
}

fn build_point(period: &str, values: &[f64]) -> PredictionPoint {
    PredictionPoint {
        period: period.to_string(),
        period_label: convert_server_to_client_period(period, period_type_of_id(period)),
        quantiles: Quantiles {
            quantile_low: compute_quantile(QUANTILE_LOW, values),
            median: compute_quantile(MEDIAN, values),
            quantile_high: compute_quantile(QUANTILE_HIGH, values),
        },
    }
}

fn normalize_period_id(period: &str) -> String {
    parse_period_id(period, period_type_of_id(period))
        .map(|parsed| parsed.id)
        .unwrap_or_else(|| period.to_string())
}

fn period_start(period: &str) -> Option<NaiveDate> {
    parse_period_id(period, period_type_of_id(period)).map(|parsed| parsed.start_date)
}

// Dated ids first by start date, then undated ids; ties break on the id so
// the order is total across mixed shapes.
fn compare_point_periods(a: &str, b: &str) -> Ordering {
    match (period_start(a), period_start(b)) {
        (Some(a_start), Some(b_start)) => a_start.cmp(&b_start).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}
