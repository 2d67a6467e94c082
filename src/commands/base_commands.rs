use clap::{Parser, Subcommand};
use clap_complete::Shell;
use dhis2_modeling::domain::period::PeriodType;

#[derive(Parser)]
#[command(author, version, about)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the DHIS2 period ids covered by a date range
    Periods {
        /// First period (YYYY-MM for months, YYYY-Www for weeks)
        #[arg(short, long)]
        start: String,
        /// Last period, inclusive
        #[arg(short, long)]
        end: String,
        /// Period type (month or week)
        #[arg(short = 't', long, default_value_t = PeriodType::Month)]
        period_type: PeriodType,
    },
    /// List the periods ending at a base period
    LastPeriods {
        /// Base period id (e.g. 202401 or 2024W10)
        #[arg(short, long)]
        base: String,
        /// Period type (month or week)
        #[arg(short = 't', long, default_value_t = PeriodType::Month)]
        period_type: PeriodType,
        /// Number of periods
        #[arg(short = 'n', long)]
        count: usize,
    },
    /// Convert a period id between server and display form
    ConvertPeriod {
        /// Period id to convert
        period: String,
        /// Period type (month or week)
        #[arg(short = 't', long, default_value_t = PeriodType::Month)]
        period_type: PeriodType,
        /// Convert from display form (2024-01) to server form (202401)
        #[arg(long)]
        to_server: bool,
    },
    /// Sort period ids chronologically
    SortPeriods {
        /// Period ids to sort
        #[arg(required = true)]
        periods: Vec<String>,
        /// Period type (month or week)
        #[arg(short = 't', long, default_value_t = PeriodType::Month)]
        period_type: PeriodType,
    },
    /// Build per-org-unit quantile series from a prediction JSON file
    Series {
        /// Prediction JSON file
        #[arg(short, long)]
        input: String,
        /// Output YAML file
        #[arg(short, long)]
        output: String,
        /// Forecast target id; defaults to `target_id` from --config
        #[arg(short, long)]
        target: Option<String>,
        /// Analytics service config YAML providing a default target
        #[arg(short, long)]
        config: Option<String>,
        /// Optional org unit names YAML file
        #[arg(short = 'u', long)]
        org_units: Option<String>,
        /// Also print the series as a table
        #[arg(long)]
        table: bool,
    },
    /// Fetch a prediction from the analytics service and write it as JSON
    FetchPrediction {
        /// Path to analytics service config YAML
        #[arg(short, long)]
        config: String,
        /// Prediction id
        #[arg(short, long)]
        id: i64,
        /// Output JSON file
        #[arg(short, long)]
        output: String,
    },
    /// Write a backtest or prediction request payload as JSON
    RunRequest {
        /// Run name
        #[arg(long)]
        name: String,
        /// Model id
        #[arg(short, long)]
        model: String,
        /// First period (YYYY-MM for months, YYYY-Www for weeks)
        #[arg(short, long)]
        start: String,
        /// Last period, inclusive
        #[arg(short, long)]
        end: String,
        /// Period type (month or week)
        #[arg(short = 't', long, default_value_t = PeriodType::Month)]
        period_type: PeriodType,
        /// Org unit ids
        #[arg(short = 'u', long = "org-unit", required = true)]
        org_units: Vec<String>,
        /// Data element ids
        #[arg(short, long = "data-element")]
        data_elements: Vec<String>,
        /// Output JSON file
        #[arg(short, long)]
        output: String,
    },
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
