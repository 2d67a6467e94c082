/// Quantile helpers for forecast samples.
///
/// - Empty input => `0.0`.
/// - The quantile is clamped to `[0, 1]`.
/// - Otherwise we interpolate linearly between the two order statistics
///   around `quantile * (len - 1)` and round half-up to a whole number.

/// Returns the rounded, interpolated quantile of `values`.
///
/// `values` may be in any order; a sorted copy is used.
pub fn compute_quantile(quantile: f64, values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    round_half_up(interpolate_sorted(&sorted, quantile))
}

fn interpolate_sorted(sorted_values: &[f64], quantile: f64) -> f64 {
    let last = sorted_values.len() - 1;
    let quantile = if quantile.is_nan() { 0.0 } else { quantile.clamp(0.0, 1.0) };
    let position = quantile * last as f64;

    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    let (lower_value, upper_value) = (sorted_values[lower], sorted_values[upper.min(last)]);

    lower_value + (upper_value - lower_value) * (position - lower as f64)
}

// Half-way values go towards positive infinity: 2.5 -> 3, -2.5 -> -2.
fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 { floor + 1.0 } else { floor }
}
