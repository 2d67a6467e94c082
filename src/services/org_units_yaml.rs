use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::domain::prediction::OrgUnitNames;

#[derive(Error, Debug)]
pub enum OrgUnitsYamlError {
    #[error("failed to read org unit yaml file {path}: {source}")]
    ReadFile { path: PathBuf, source: io::Error },
    #[error("failed to parse org unit yaml file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_yaml::Error,
    },
    #[error("org unit with empty id in {path}")]
    EmptyId { path: PathBuf },
}

#[derive(Debug, Deserialize)]
struct OrgUnitRecord {
    id: String,
    name: String,
}

/// Loads an org-unit name lookup from a YAML list of `{id, name}` records.
///
/// Later records win when an id appears twice.
///
/// # Errors
/// - Returns an error on I/O or parse failures.
/// - Returns an error when a record has an empty id.
pub fn load_org_units_from_yaml_file<P: AsRef<Path>>(
    path: P,
) -> Result<OrgUnitNames, OrgUnitsYamlError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| OrgUnitsYamlError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    deserialize_org_units_from_yaml_str(&contents, path)
}

fn deserialize_org_units_from_yaml_str(
    contents: &str,
    path: &Path,
) -> Result<OrgUnitNames, OrgUnitsYamlError> {
    if contents.trim().is_empty() {
        return Ok(OrgUnitNames::new());
    }

    let records: Vec<OrgUnitRecord> =
        serde_yaml::from_str(contents).map_err(|source| OrgUnitsYamlError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut names = OrgUnitNames::with_capacity(records.len());
    for record in records {
        if record.id.trim().is_empty() {
            return Err(OrgUnitsYamlError::EmptyId {
                path: path.to_path_buf(),
            });
        }
        names.insert(record.id, record.name);
    }
    Ok(names)
}
