use std::process::ExitCode;

use dhis2_modeling::domain::period::PeriodType;
use dhis2_modeling::services::period_arithmetic::{get_last_n_periods, sort_periods};
use dhis2_modeling::services::period_codec::{
    convert_client_to_server_period, convert_server_to_client_period, to_dhis2_period_data,
};

pub fn periods_command(start: &str, end: &str, period_type: PeriodType) -> ExitCode {
    let periods = to_dhis2_period_data(start, end, period_type);
    if periods.is_empty() {
        eprintln!("No {period_type} periods between {start} and {end}");
        return ExitCode::FAILURE;
    }
    print_lines(periods.into_iter().map(|period| period.id))
}

pub fn last_periods_command(base: &str, period_type: PeriodType, count: usize) -> ExitCode {
    let periods = get_last_n_periods(base, period_type, count);
    if periods.is_empty() {
        eprintln!("Cannot list {count} {period_type} periods ending at {base}");
        return ExitCode::FAILURE;
    }
    print_lines(periods)
}

pub fn convert_period_command(period: &str, period_type: PeriodType, to_server: bool) -> ExitCode {
    let converted = if to_server {
        convert_client_to_server_period(period, period_type)
    } else {
        convert_server_to_client_period(period, period_type)
    };
    println!("{converted}");
    ExitCode::SUCCESS
}

pub fn sort_periods_command(periods: &[String], period_type: PeriodType) -> ExitCode {
    print_lines(sort_periods(periods, period_type))
}

fn print_lines<I: IntoIterator<Item = String>>(lines: I) -> ExitCode {
    for line in lines {
        println!("{line}");
    }
    ExitCode::SUCCESS
}
