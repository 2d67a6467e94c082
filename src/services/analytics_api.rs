use std::fs;

use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::domain::prediction::PredictionResponse;
use crate::services::data_source::{DataSourceError, PredictionSource};

/// Connection settings for the analytics service, read from YAML.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AnalyticsServiceConfig {
    pub base_url: String,
    /// Default forecast target for `series` when `--target` is not given.
    pub target_id: Option<String>,
}

impl AnalyticsServiceConfig {
    pub fn from_yaml_str(contents: &str) -> Result<Self, DataSourceError> {
        serde_yaml::from_str(contents).map_err(|_| DataSourceError::Parse)
    }

    pub fn from_yaml_file(filepath: &str) -> Result<Self, DataSourceError> {
        let contents = fs::read_to_string(filepath)
            .map_err(|err| DataSourceError::Other(format!("failed to read config: {err}")))?;
        Self::from_yaml_str(&contents)
    }
}

pub struct AnalyticsApiClient {
    base_url: String,
    client: Client,
}

impl AnalyticsApiClient {
    pub fn new(config: &AnalyticsServiceConfig) -> Result<Self, DataSourceError> {
        let base_url = config.base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(DataSourceError::Other(
                "analytics service config is missing base_url".to_string(),
            ));
        }

        Ok(Self {
            base_url: base_url.to_string(),
            client: Client::new(),
        })
    }

    fn prediction_url(&self, prediction_id: i64) -> String {
        format!("{}/crud/predictions/{prediction_id}", self.base_url)
    }

    async fn fetch_prediction(&self, url: &str) -> Result<PredictionResponse, DataSourceError> {
        let response = self.client.get(url).send().await.map_err(|err| {
            tracing::warn!(url, error = %err, "request to analytics service failed");
            DataSourceError::Connection
        })?;

        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            return Err(DataSourceError::Unauthorized);
        }
        if status == StatusCode::NOT_FOUND {
            return Err(DataSourceError::NotFound);
        }
        if !status.is_success() {
            tracing::warn!(url, %status, "analytics service returned an error status");
            return Err(DataSourceError::Connection);
        }

        response
            .json::<PredictionResponse>()
            .await
            .map_err(|_| DataSourceError::Parse)
    }
}

impl PredictionSource for AnalyticsApiClient {
    async fn get_prediction(&self, prediction_id: i64) -> Result<PredictionResponse, DataSourceError> {
        let url = self.prediction_url(prediction_id);
        let prediction = self.fetch_prediction(&url).await?;
        tracing::debug!(
            prediction_id,
            forecast_rows = prediction.forecasts.len(),
            "fetched prediction"
        );
        Ok(prediction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_config_from_yaml() {
        let config =
            AnalyticsServiceConfig::from_yaml_str("base_url: http://localhost:8000/v1\n").unwrap();
        assert_eq!(config.base_url, "http://localhost:8000/v1");
        assert_eq!(config.target_id, None);
    }

    #[test]
    fn parses_optional_target_id() {
        let config = AnalyticsServiceConfig::from_yaml_str(
            "base_url: http://localhost:8000/v1\ntarget_id: disease_cases\n",
        )
        .unwrap();
        assert_eq!(config.target_id.as_deref(), Some("disease_cases"));
    }

    #[test]
    fn rejects_malformed_config() {
        let result = AnalyticsServiceConfig::from_yaml_str("base_url: [unclosed");
        assert!(matches!(result, Err(DataSourceError::Parse)));
    }

    #[test]
    fn client_requires_base_url() {
        let result = AnalyticsApiClient::new(&AnalyticsServiceConfig::default());
        assert!(matches!(result, Err(DataSourceError::Other(_))));
    }

    #[test]
    fn prediction_url_ignores_trailing_slash() {
        let config = AnalyticsServiceConfig {
            base_url: "http://localhost:8000/v1/".to_string(),
            ..Default::default()
        };
        let client = AnalyticsApiClient::new(&config).unwrap();
        assert_eq!(client.prediction_url(12), "http://localhost:8000/v1/crud/predictions/12");
    }
}
