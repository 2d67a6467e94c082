use std::process::ExitCode;

use dhis2_modeling::services::run_request::{RunRequestInput, build_run_request};

pub async fn run_request_command(input: RunRequestInput<'_>, output: &str) -> ExitCode {
    let request = match build_run_request(&input) {
        Ok(request) => request,
        Err(e) => {
            eprintln!("Failed to build run request: {e}");
            return ExitCode::FAILURE;
        }
    };

    let json = match serde_json::to_string_pretty(&request) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Failed to serialize run request: {e:?}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = tokio::fs::write(output, json).await {
        eprintln!("Failed to write run request: {e:?}");
        return ExitCode::FAILURE;
    }

    println!(
        "Run request with {} periods written to {output}",
        request.periods.len()
    );
    ExitCode::SUCCESS
}
