use serde::Serialize;
use thiserror::Error;

use crate::domain::period::PeriodType;
use crate::services::period_codec::to_dhis2_period_data;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RunRequestError {
    #[error("name must not be empty")]
    MissingName,
    #[error("model id must not be empty")]
    MissingModel,
    #[error("at least one org unit is required")]
    MissingOrgUnits,
    #[error("no {period_type} periods between {start} and {end}")]
    EmptyPeriodRange {
        start: String,
        end: String,
        period_type: PeriodType,
    },
}

/// Payload for creating a backtest or a prediction on the analytics service.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RunRequest {
    pub name: String,
    pub model_id: String,
    pub period_type: PeriodType,
    pub periods: Vec<String>,
    pub org_units: Vec<String>,
    pub data_elements: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct RunRequestInput<'a> {
    pub name: &'a str,
    pub model_id: &'a str,
    pub start: &'a str,
    pub end: &'a str,
    pub period_type: PeriodType,
    pub org_units: &'a [String],
    pub data_elements: &'a [String],
}

/// Builds a run request, expanding the form range into period ids.
///
/// # Errors
/// Fails when a required field is blank or the range yields no periods.
pub fn build_run_request(input: &RunRequestInput<'_>) -> Result<RunRequest, RunRequestError> {
    if input.name.trim().is_empty() {
        return Err(RunRequestError::MissingName);
    }
    if input.model_id.trim().is_empty() {
        return Err(RunRequestError::MissingModel);
    }
    if input.org_units.is_empty() {
        return Err(RunRequestError::MissingOrgUnits);
    }

    let periods: Vec<String> = to_dhis2_period_data(input.start, input.end, input.period_type)
        .into_iter()
        .map(|period| period.id)
        .collect();
    if periods.is_empty() {
        return Err(RunRequestError::EmptyPeriodRange {
            start: input.start.to_string(),
            end: input.end.to_string(),
            period_type: input.period_type,
        });
    }

    Ok(RunRequest {
        name: input.name.trim().to_string(),
        model_id: input.model_id.to_string(),
        period_type: input.period_type,
        periods,
        org_units: input.org_units.to_vec(),
        data_elements: input.data_elements.to_vec(),
    })
}
