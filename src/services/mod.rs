pub mod analytics_api;
pub mod data_source;
pub mod org_units_yaml;
pub mod period_arithmetic;
pub mod period_codec;
pub mod prediction_json;
pub mod prediction_series;
pub mod quantiles;
pub mod run_request;
pub mod series_format;
pub mod series_yaml;
