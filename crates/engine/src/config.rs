use std::path::PathBuf;

use crate::identifiers::validate_table_name;
use crate::{EngineError, EngineResult};

/// Inputs for one conversion run, filled in by whichever front end drives it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub csv_path: PathBuf,
    pub db_path: PathBuf,
    pub table_name: String,
}

impl RunConfig {
    pub fn new(
        csv_path: impl Into<PathBuf>,
        db_path: impl Into<PathBuf>,
        table_name: impl Into<String>,
    ) -> Self {
        Self {
            csv_path: csv_path.into(),
            db_path: db_path.into(),
            table_name: table_name.into(),
        }
    }

    pub fn validate(&self) -> EngineResult<()> {
        if self.csv_path.as_os_str().is_empty() {
            return Err(EngineError::Config("CSV file name is empty".into()));
        }
        if self.db_path.as_os_str().is_empty() {
            return Err(EngineError::Config("database file name is empty".into()));
        }
        validate_table_name(&self.table_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_config_passes() {
        RunConfig::new("people.csv", "people.db", "people")
            .validate()
            .expect("valid");
    }

    #[test]
    fn empty_paths_are_config_errors() {
        let err = RunConfig::new("", "out.db", "t").validate().unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));

        let err = RunConfig::new("in.csv", "", "t").validate().unwrap_err();
        assert!(matches!(err, EngineError::Config(_)));
    }

    #[test]
    fn bad_table_name_is_schema_error() {
        let err = RunConfig::new("in.csv", "out.db", "bad name")
            .validate()
            .unwrap_err();
        assert!(matches!(err, EngineError::Schema(_)));
    }
}
