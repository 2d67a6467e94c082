use std::cmp::Ordering;

use crate::domain::period::PeriodType;
use crate::services::period_codec::{format_server_id, parse_period_start, step_back};

/// Orders two server ids chronologically.
///
/// Ids that parse under `period_type` come first, by start date. Ids that do
/// not parse follow, by plain string comparison. For types that are not
/// computed nothing parses, so the order is purely lexicographic.
pub fn compare_periods(a: &str, b: &str, period_type: PeriodType) -> Ordering {
    match (
        parse_period_start(a, period_type),
        parse_period_start(b, period_type),
    ) {
        (Some(a_start), Some(b_start)) => a_start.cmp(&b_start),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Stable chronological sort into a new vector; `periods` is left as is.
pub fn sort_periods<S: AsRef<str>>(periods: &[S], period_type: PeriodType) -> Vec<String> {
    let mut sorted: Vec<String> = periods.iter().map(|p| p.as_ref().to_string()).collect();
    sorted.sort_by(|a, b| compare_periods(a, b, period_type));
    sorted
}

/// The `count` periods ending at `base_period`, oldest first, as padded
/// server ids.
pub fn get_last_n_periods(base_period: &str, period_type: PeriodType, count: usize) -> Vec<String> {
    if count == 0 {
        tracing::warn!(base_period, count, "invalid period count");
        return Vec::new();
    }
    if !period_type.is_computed() {
        tracing::warn!(base_period, %period_type, "unsupported period type for last periods");
        return Vec::new();
    }
    let Some(base_start) = parse_period_start(base_period, period_type) else {
        tracing::warn!(base_period, %period_type, "failed to parse base period");
        return Vec::new();
    };
    let Ok(count) = u32::try_from(count) else {
        tracing::warn!(base_period, count, "period count out of range");
        return Vec::new();
    };

    (0..count)
        .rev()
        .map_while(|steps| step_back(base_start, period_type, steps))
        .map(|start| format_server_id(start, period_type))
        .collect()
}
