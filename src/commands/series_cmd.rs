use std::process::ExitCode;

use dhis2_modeling::domain::prediction::OrgUnitNames;
use dhis2_modeling::services::analytics_api::AnalyticsServiceConfig;
use dhis2_modeling::services::org_units_yaml::load_org_units_from_yaml_file;
use dhis2_modeling::services::prediction_json::load_prediction_from_json_file;
use dhis2_modeling::services::prediction_series::build_prediction_series;
use dhis2_modeling::services::series_format::format_series_table;
use dhis2_modeling::services::series_yaml::serialize_series_to_yaml;

pub async fn series_command(
    input: &str,
    output: &str,
    target: Option<&str>,
    config: Option<&str>,
    org_units: Option<&str>,
    table: bool,
) -> ExitCode {
    let target = match resolve_target(target, config) {
        Ok(target) => target,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let prediction = match load_prediction_from_json_file(input) {
        Ok(prediction) => prediction,
        Err(e) => {
            eprintln!("Failed to load prediction: {e}");
            return ExitCode::FAILURE;
        }
    };

    let org_unit_names = match org_units {
        Some(path) => match load_org_units_from_yaml_file(path) {
            Ok(names) => names,
            Err(e) => {
                eprintln!("Failed to load org units: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => OrgUnitNames::new(),
    };

    let series = build_prediction_series(&prediction, &org_unit_names, &target);

    let mut buffer = Vec::new();
    if let Err(e) = serialize_series_to_yaml(&mut buffer, &series) {
        eprintln!("Failed to serialize series to YAML: {e:?}");
        return ExitCode::FAILURE;
    }
    if let Err(e) = tokio::fs::write(output, buffer).await {
        eprintln!("Failed to write output file: {e:?}");
        return ExitCode::FAILURE;
    }

    if table {
        println!("{}", format_series_table(&series));
    }
    println!("{} series written to {output}", series.len());
    ExitCode::SUCCESS
}

fn resolve_target(target: Option<&str>, config: Option<&str>) -> Result<String, String> {
    if let Some(target) = target {
        return Ok(target.to_string());
    }
    let Some(path) = config else {
        return Err("No forecast target: pass --target or a --config with target_id".to_string());
    };
    let config = AnalyticsServiceConfig::from_yaml_file(path)
        .map_err(|e| format!("Failed to load config: {e}"))?;
    config
        .target_id
        .ok_or_else(|| format!("Config {path} has no target_id; pass --target"))
}
