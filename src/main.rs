mod commands;

use std::io;
use std::process::ExitCode;

use crate::commands::base_commands::{CliArgs, Commands};
use crate::commands::fetch_prediction_cmd::fetch_prediction_command;
use crate::commands::period_cmd::{
    convert_period_command, last_periods_command, periods_command, sort_periods_command,
};
use crate::commands::run_request_cmd::run_request_command;
use crate::commands::series_cmd::series_command;
use clap::{CommandFactory, Parser};
use dhis2_modeling::services::run_request::RunRequestInput;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn";

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so period lists and tables on stdout stay pipeable.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    let args = CliArgs::parse();
    match args.command {
        Commands::Periods {
            start,
            end,
            period_type,
        } => periods_command(&start, &end, period_type),
        Commands::LastPeriods {
            base,
            period_type,
            count,
        } => last_periods_command(&base, period_type, count),
        Commands::ConvertPeriod {
            period,
            period_type,
            to_server,
        } => convert_period_command(&period, period_type, to_server),
        Commands::SortPeriods {
            periods,
            period_type,
        } => sort_periods_command(&periods, period_type),
        Commands::Series {
            input,
            output,
            target,
            config,
            org_units,
            table,
        } => {
            series_command(
                &input,
                &output,
                target.as_deref(),
                config.as_deref(),
                org_units.as_deref(),
                table,
            )
            .await
        }
        Commands::FetchPrediction { config, id, output } => {
            fetch_prediction_command(&config, id, &output).await
        }
        Commands::RunRequest {
            name,
            model,
            start,
            end,
            period_type,
            org_units,
            data_elements,
            output,
        } => {
            let input = RunRequestInput {
                name: &name,
                model_id: &model,
                start: &start,
                end: &end,
                period_type,
                org_units: &org_units,
                data_elements: &data_elements,
            };
            run_request_command(input, &output).await
        }
        Commands::Completions { shell } => {
            let mut command = CliArgs::command();
            let bin_name = command.get_name().to_string();
            clap_complete::generate(shell, &mut command, bin_name, &mut io::stdout());
            ExitCode::SUCCESS
        }
    }
}
