use std::io::{self, Write};

use crate::domain::prediction::PredictionOrgUnitSeries;

pub fn serialize_series_to_yaml<W: Write>(
    writer: &mut W,
    series: &[PredictionOrgUnitSeries],
) -> io::Result<()> {
    let yaml = serde_yaml::to_string(series).map_err(io::Error::other)?;
    writer.write_all(yaml.as_bytes())
}
