use serde::Serialize;

use crate::EngineError;

pub type EngineResult<T> = Result<T, EngineError>;

/// Outcome of one completed ingest run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub table: String,
    pub columns: usize,
    pub rows_loaded: usize,
    pub identity_column: Option<String>,
}
