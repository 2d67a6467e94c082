use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::prediction::PredictionResponse;

#[derive(Error, Debug)]
pub enum PredictionJsonError {
    #[error("failed to read prediction file {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to parse prediction json: {0}")]
    Parse(#[from] serde_json::Error),
}

pub fn read_prediction_from_json_str(contents: &str) -> Result<PredictionResponse, PredictionJsonError> {
    Ok(serde_json::from_str(contents)?)
}

pub fn load_prediction_from_json_file<P: AsRef<Path>>(
    path: P,
) -> Result<PredictionResponse, PredictionJsonError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| PredictionJsonError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    read_prediction_from_json_str(&contents)
}

pub fn write_prediction_as_json<W: Write>(
    writer: &mut W,
    prediction: &PredictionResponse,
) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *writer, prediction).map_err(io::Error::other)?;
    writer.write_all(b"\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_forecast_rows_from_json() {
        let json = r#"{"id": 3, "forecasts": [{"orgUnit": "OU1", "period": "2024W01", "values": [2, 4.5]}]}"#;
        let prediction = read_prediction_from_json_str(json).unwrap();
        assert_eq!(prediction.id, Some(3));
        assert_eq!(prediction.forecasts[0].values, vec![2.0, 4.5]);
    }

    #[test]
    fn rejects_rows_without_org_unit() {
        let json = r#"{"forecasts": [{"period": "2024W01", "values": []}]}"#;
        let err = read_prediction_from_json_str(json).unwrap_err();
        assert!(matches!(err, PredictionJsonError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_prediction_from_json_file("/nonexistent/prediction.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/prediction.json"));
    }

    #[test]
    fn writes_camel_case_json() {
        let prediction = read_prediction_from_json_str(
            r#"{"modelId": "naive", "forecasts": [{"orgUnit": "OU1", "period": "202401", "values": [1]}]}"#,
        )
        .unwrap();
        let mut buf = Vec::new();
        write_prediction_as_json(&mut buf, &prediction).unwrap();
        let output = String::from_utf8(buf).unwrap();
        assert!(output.contains("\"modelId\": \"naive\""));
        assert!(output.contains("\"orgUnit\": \"OU1\""));
    }
}
