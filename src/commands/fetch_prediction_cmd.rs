use std::process::ExitCode;

use dhis2_modeling::services::analytics_api::{AnalyticsApiClient, AnalyticsServiceConfig};
use dhis2_modeling::services::data_source::PredictionSource;
use dhis2_modeling::services::prediction_json::write_prediction_as_json;

pub async fn fetch_prediction_command(config: &str, prediction_id: i64, output: &str) -> ExitCode {
    let config = match AnalyticsServiceConfig::from_yaml_file(config) {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("Failed to parse analytics service config: {e:?}");
            return ExitCode::FAILURE;
        }
    };
    let client = match AnalyticsApiClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("Failed to create analytics client: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    let prediction = match client.get_prediction(prediction_id).await {
        Ok(prediction) => prediction,
        Err(e) => {
            eprintln!("Failed to fetch prediction {prediction_id}: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    let mut buffer = Vec::new();
    if let Err(e) = write_prediction_as_json(&mut buffer, &prediction) {
        eprintln!("Failed to serialize prediction: {e:?}");
        return ExitCode::FAILURE;
    }
    if let Err(e) = tokio::fs::write(output, buffer).await {
        eprintln!("Failed to write output file: {e:?}");
        return ExitCode::FAILURE;
    }

    println!("Prediction {prediction_id} written to {output}");
    ExitCode::SUCCESS
}
