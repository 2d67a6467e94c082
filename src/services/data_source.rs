use crate::domain::prediction::PredictionResponse;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataSourceError {
    #[error("resource not found")]
    NotFound,
    #[error("connection error")]
    Connection,
    #[error("parse error")]
    Parse,
    #[error("unauthorized")]
    Unauthorized,
    #[error("{0}")]
    Other(String),
}

/// Describes an interface for retrieving raw predictions.
#[allow(async_fn_in_trait)]
pub trait PredictionSource {
    async fn get_prediction(&self, prediction_id: i64) -> Result<PredictionResponse, DataSourceError>;
}
