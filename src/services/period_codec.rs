//! Conversion between form input, server period ids and display ids.
//!
//! Three textual forms exist for each computed granularity:
//!
//! | granularity | form input / display | server id  |
//! |-------------|----------------------|------------|
//! | month       | `2024-01`            | `202401`   |
//! | week        | `2024-W01`           | `2024W01`  |
//!
//! Weeks are ISO weeks (Monday to Sunday) numbered within the ISO week-year,
//! so `2020-12-28` belongs to `2020W53` and `2021-01-04` starts `2021W01`.
//! Server week ids are read with or without zero padding but are always
//! written padded.
//!
//! Every function here fails soft: bad input gives an empty list or the
//! original string back, with a diagnostic logged through `tracing`.

use chrono::{Datelike, Days, Months, NaiveDate, Weekday};

use crate::domain::period::{Period, PeriodType};

/// Ranges whose last period starts more than 100 calendar years after the
/// first one are refused.
pub const MAX_SPAN_YEARS: u32 = 100;

/// Expands a form-input range into every period it covers, oldest first.
///
/// Returns an empty list when either bound fails to parse, when `end` lies
/// before `start`, when the range exceeds [`MAX_SPAN_YEARS`], or when the
/// period type is not computed.
pub fn to_dhis2_period_data(start: &str, end: &str, period_type: PeriodType) -> Vec<Period> {
    if !period_type.is_computed() {
        tracing::warn!(%period_type, "unsupported period type for range generation");
        return Vec::new();
    }

    let (Some(start_date), Some(end_date)) = (
        parse_input(start, period_type),
        parse_input(end, period_type),
    ) else {
        tracing::warn!(start, end, %period_type, "failed to parse period range");
        return Vec::new();
    };

    if exceeds_max_span(start_date, end_date) {
        tracing::warn!(start, end, "period range exceeds 100 years");
        return Vec::new();
    }

    let mut periods = Vec::new();
    let mut current = Some(start_date);
    while let Some(date) = current.filter(|date| *date <= end_date) {
        match period_starting(date, period_type) {
            Some(period) => periods.push(period),
            None => break,
        }
        current = next_start(date, period_type);
    }

    tracing::debug!(start, end, count = periods.len(), "generated periods");
    periods
}

/// Turns a server id into its display form (`202401` -> `2024-01`,
/// `2024W1` -> `2024-W01`).
///
/// Unsupported types and unparseable ids are returned unchanged.
pub fn convert_server_to_client_period(period_id: &str, period_type: PeriodType) -> String {
    let converted = match period_type {
        PeriodType::Month => parse_server_month(period_id).map(format_client_month),
        PeriodType::Week => parse_server_week(period_id).map(format_client_week),
        _ => {
            tracing::warn!(period_id, %period_type, "unsupported period type for conversion");
            return period_id.to_string();
        }
    };

    converted.unwrap_or_else(|| {
        tracing::debug!(period_id, %period_type, "period id not parseable, left unchanged");
        period_id.to_string()
    })
}

/// Inverse of [`convert_server_to_client_period`].
pub fn convert_client_to_server_period(display_period: &str, period_type: PeriodType) -> String {
    if !period_type.is_computed() {
        tracing::warn!(display_period, %period_type, "unsupported period type for conversion");
        return display_period.to_string();
    }

    parse_input(display_period, period_type)
        .map(|date| format_server_id(date, period_type))
        .unwrap_or_else(|| {
            tracing::debug!(display_period, %period_type, "display period not parseable, left unchanged");
            display_period.to_string()
        })
}

/// Parses a server id into the period it names.
pub fn parse_period_id(period_id: &str, period_type: PeriodType) -> Option<Period> {
    let start = parse_period_start(period_id, period_type)?;
    period_starting(start, period_type)
}

/// Guesses the granularity of a server id from its shape.
pub fn period_type_of_id(period_id: &str) -> PeriodType {
    if parse_server_month(period_id).is_some() {
        PeriodType::Month
    } else if parse_server_week(period_id).is_some() {
        PeriodType::Week
    } else {
        PeriodType::Any
    }
}

pub(crate) fn parse_period_start(period_id: &str, period_type: PeriodType) -> Option<NaiveDate> {
    match period_type {
        PeriodType::Month => parse_server_month(period_id),
        PeriodType::Week => parse_server_week(period_id),
        _ => None,
    }
}

pub(crate) fn format_server_id(start: NaiveDate, period_type: PeriodType) -> String {
    match period_type {
        PeriodType::Week => {
            let iso = start.iso_week();
            format!("{:04}W{:02}", iso.year(), iso.week())
        }
        _ => format!("{:04}{:02}", start.year(), start.month()),
    }
}

/// Start date of the period `steps` periods before the one starting at `start`.
pub(crate) fn step_back(start: NaiveDate, period_type: PeriodType, steps: u32) -> Option<NaiveDate> {
    match period_type {
        PeriodType::Month => start.checked_sub_months(Months::new(steps)),
        PeriodType::Week => start.checked_sub_days(Days::new(7 * u64::from(steps))),
        _ => None,
    }
}

fn exceeds_max_span(start: NaiveDate, end: NaiveDate) -> bool {
    match start.checked_add_months(Months::new(MAX_SPAN_YEARS * 12)) {
        Some(limit) => end > limit,
        None => true,
    }
}

fn next_start(start: NaiveDate, period_type: PeriodType) -> Option<NaiveDate> {
    match period_type {
        PeriodType::Month => start.checked_add_months(Months::new(1)),
        PeriodType::Week => start.checked_add_days(Days::new(7)),
        _ => None,
    }
}

fn period_starting(start: NaiveDate, period_type: PeriodType) -> Option<Period> {
    let end_date = match period_type {
        PeriodType::Month => start.checked_add_months(Months::new(1))?.pred_opt()?,
        PeriodType::Week => start.checked_add_days(Days::new(6))?,
        _ => return None,
    };
    Some(Period {
        id: format_server_id(start, period_type),
        start_date: start,
        end_date,
    })
}

fn parse_input(value: &str, period_type: PeriodType) -> Option<NaiveDate> {
    match period_type {
        PeriodType::Month => parse_client_month(value),
        PeriodType::Week => parse_client_week(value),
        _ => None,
    }
}

/// `yyyy-MM`
fn parse_client_month(value: &str) -> Option<NaiveDate> {
    let (year, month) = value.split_once('-')?;
    month_start(parse_digits(year, 4, 4)?, parse_digits(month, 2, 2)?)
}

/// `yyyy-Www`
fn parse_client_week(value: &str) -> Option<NaiveDate> {
    let (year, week) = value.split_once("-W")?;
    week_start(parse_digits(year, 4, 4)?, parse_digits(week, 2, 2)?)
}

/// `yyyyMM`
fn parse_server_month(value: &str) -> Option<NaiveDate> {
    if value.len() != 6 {
        return None;
    }
    let (year, month) = (value.get(..4)?, value.get(4..)?);
    month_start(parse_digits(year, 4, 4)?, parse_digits(month, 2, 2)?)
}

/// `yyyyWww`, padding optional.
fn parse_server_week(value: &str) -> Option<NaiveDate> {
    let (year, week) = value.split_once('W')?;
    week_start(parse_digits(year, 4, 4)?, parse_digits(week, 1, 2)?)
}

fn month_start(year: u32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(i32::try_from(year).ok()?, month, 1)
}

fn week_start(year: u32, week: u32) -> Option<NaiveDate> {
    NaiveDate::from_isoywd_opt(i32::try_from(year).ok()?, week, Weekday::Mon)
}

fn parse_digits(text: &str, min_len: usize, max_len: usize) -> Option<u32> {
    if text.len() < min_len || text.len() > max_len || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

fn format_client_month(start: NaiveDate) -> String {
    format!("{:04}-{:02}", start.year(), start.month())
}

fn format_client_week(start: NaiveDate) -> String {
    let iso = start.iso_week();
    format!("{:04}-W{:02}", iso.year(), iso.week())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::on_date;

    fn ids(periods: &[Period]) -> Vec<&str> {
        periods.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn month_range_crosses_year_boundary() {
        let periods = to_dhis2_period_data("2023-11", "2024-02", PeriodType::Month);
        assert_eq!(ids(&periods), vec!["202311", "202312", "202401", "202402"]);
    }

    #[test]
    fn month_range_length_matches_month_difference() {
        let cases = [
            ("2024-01", "2024-01", 1),
            ("2020-03", "2024-02", 48),
            ("1999-12", "2001-01", 14),
        ];
        for (start, end, expected) in cases {
            let periods = to_dhis2_period_data(start, end, PeriodType::Month);
            assert_eq!(periods.len(), expected, "range {start}..{end}");
        }
    }

    #[test]
    fn month_periods_carry_calendar_bounds() {
        let periods = to_dhis2_period_data("2024-02", "2024-02", PeriodType::Month);
        assert_eq!(periods[0].start_date, on_date(2024, 2, 1));
        assert_eq!(periods[0].end_date, on_date(2024, 2, 29));
    }

    #[test]
    fn week_range_uses_iso_week_year() {
        let periods = to_dhis2_period_data("2020-W52", "2021-W02", PeriodType::Week);
        assert_eq!(ids(&periods), vec!["2020W52", "2020W53", "2021W01", "2021W02"]);
        assert_eq!(periods[1].start_date, on_date(2020, 12, 28));
        assert_eq!(periods[1].end_date, on_date(2021, 1, 3));
    }

    #[test]
    fn reversed_range_is_empty() {
        assert!(to_dhis2_period_data("2024-02", "2023-11", PeriodType::Month).is_empty());
        assert!(to_dhis2_period_data("2024-W10", "2024-W09", PeriodType::Week).is_empty());
    }

    #[test]
    fn malformed_bounds_give_empty_range() {
        assert!(to_dhis2_period_data("2024-13", "2024-12", PeriodType::Month).is_empty());
        assert!(to_dhis2_period_data("2024-1", "2024-02", PeriodType::Month).is_empty());
        assert!(to_dhis2_period_data("2024-W01", "2024-02", PeriodType::Month).is_empty());
        assert!(to_dhis2_period_data("2021-W53", "2021-W52", PeriodType::Week).is_empty());
        assert!(to_dhis2_period_data("", "", PeriodType::Week).is_empty());
    }

    #[test]
    fn unsupported_period_type_gives_empty_range() {
        assert!(to_dhis2_period_data("2024-01", "2024-02", PeriodType::Day).is_empty());
        assert!(to_dhis2_period_data("2024-01", "2024-02", PeriodType::Year).is_empty());
    }

    #[test]
    fn ranges_longer_than_a_century_are_refused() {
        assert!(to_dhis2_period_data("1900-01", "2001-01", PeriodType::Month).is_empty());
        assert!(to_dhis2_period_data("1900-01", "2000-02", PeriodType::Month).is_empty());
        assert_eq!(
            to_dhis2_period_data("1950-01", "2049-12", PeriodType::Month).len(),
            1200
        );
    }

    #[test]
    fn exactly_a_century_of_months_is_accepted() {
        let periods = to_dhis2_period_data("1900-01", "2000-01", PeriodType::Month);
        assert_eq!(periods.len(), 1201);
        assert_eq!(periods.last().map(|p| p.id.as_str()), Some("200001"));
    }

    #[test]
    fn week_ranges_are_limited_to_a_century() {
        // 1950W01 starts 1950-01-02, 2050W01 starts 2050-01-03.
        assert!(to_dhis2_period_data("1950-W01", "2050-W01", PeriodType::Week).is_empty());

        let periods = to_dhis2_period_data("2000-W01", "2099-W52", PeriodType::Week);
        assert_eq!(periods.first().map(|p| p.id.as_str()), Some("2000W01"));
        assert_eq!(periods.last().map(|p| p.id.as_str()), Some("2099W52"));
    }

    #[test]
    fn client_conversion_leaves_unsupported_or_bad_input_unchanged() {
        assert_eq!(convert_client_to_server_period("2024-01-01", PeriodType::Day), "2024-01-01");
        assert_eq!(convert_client_to_server_period("2024-W54", PeriodType::Week), "2024-W54");
        assert_eq!(convert_client_to_server_period("2024-1", PeriodType::Month), "2024-1");
    }

    #[test]
    fn converts_server_ids_to_display_form() {
        assert_eq!(convert_server_to_client_period("202401", PeriodType::Month), "2024-01");
        assert_eq!(convert_server_to_client_period("2024W01", PeriodType::Week), "2024-W01");
        assert_eq!(convert_server_to_client_period("2024W1", PeriodType::Week), "2024-W01");
    }

    #[test]
    fn conversion_leaves_unsupported_or_bad_input_unchanged() {
        assert_eq!(convert_server_to_client_period("20240101", PeriodType::Day), "20240101");
        assert_eq!(convert_server_to_client_period("2024", PeriodType::Year), "2024");
        assert_eq!(convert_server_to_client_period("2024W01", PeriodType::Month), "2024W01");
        assert_eq!(convert_server_to_client_period("garbage", PeriodType::Week), "garbage");
    }

    #[test]
    fn display_form_round_trips_to_server_id() {
        for id in ["202401", "199912", "203006"] {
            let display = convert_server_to_client_period(id, PeriodType::Month);
            assert_eq!(convert_client_to_server_period(&display, PeriodType::Month), id);
        }
        for id in ["2024W01", "2020W53", "2024W10"] {
            let display = convert_server_to_client_period(id, PeriodType::Week);
            assert_eq!(convert_client_to_server_period(&display, PeriodType::Week), id);
        }
    }

    #[test]
    fn parses_period_ids_into_periods() {
        let period = parse_period_id("2024W10", PeriodType::Week).unwrap();
        assert_eq!(period.start_date, on_date(2024, 3, 4));
        assert_eq!(period.end_date, on_date(2024, 3, 10));
        assert_eq!(parse_period_id("2024W9", PeriodType::Week).unwrap().id, "2024W09");
        assert!(parse_period_id("2024W54", PeriodType::Week).is_none());
        assert!(parse_period_id("202400", PeriodType::Month).is_none());
        assert!(parse_period_id("202401", PeriodType::Any).is_none());
    }

    #[test]
    fn infers_period_type_from_id_shape() {
        assert_eq!(period_type_of_id("202401"), PeriodType::Month);
        assert_eq!(period_type_of_id("2024W1"), PeriodType::Week);
        assert_eq!(period_type_of_id("2024W01"), PeriodType::Week);
        assert_eq!(period_type_of_id("20240101"), PeriodType::Any);
        assert_eq!(period_type_of_id("2024Q1"), PeriodType::Any);
    }
}
