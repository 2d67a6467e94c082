use crate::domain::prediction::{PredictionOrgUnitSeries, PredictionPoint};

pub fn format_series_table(series: &[PredictionOrgUnitSeries]) -> String {
    let mut lines = Vec::new();
    for (index, org_unit) in series.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }
        lines.push(format!(
            "{} ({}) - {}",
            org_unit.org_unit_name, org_unit.org_unit_id, org_unit.target_id
        ));
        lines.push("Period | Low | Median | High".to_string());
        lines.push("-------|-----|--------|-----".to_string());
        lines.extend(org_unit.points.iter().map(format_point_row));
    }

    lines.join("\n")
}

fn format_point_row(point: &PredictionPoint) -> String {
    format!(
        "{label} | {low} | {median} | {high}",
        label = point.period_label,
        low = point.quantiles.quantile_low,
        median = point.quantiles.median,
        high = point.quantiles.quantile_high
    )
}
