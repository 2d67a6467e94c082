pub mod base_commands;
pub mod fetch_prediction_cmd;
pub mod period_cmd;
pub mod run_request_cmd;
pub mod series_cmd;
