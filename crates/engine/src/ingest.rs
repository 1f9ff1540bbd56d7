use std::io::Read;

use tracing::info;

use crate::builder::build_table;
use crate::config::RunConfig;
use crate::db_manager::DbManager;
use crate::loader::load_rows;
use crate::reader::{open_csv, CsvSource};
use crate::schema::infer_schema;
use crate::{EngineResult, LoadSummary};

/// Runs the whole conversion: read, infer, replace the table, load rows.
///
/// The source is opened and its header read before the database is touched,
/// so a missing or empty CSV leaves the destination unchanged.
pub fn ingest_csv_to_table(config: &RunConfig) -> EngineResult<LoadSummary> {
    config.validate()?;
    let source = open_csv(&config.csv_path)?;
    let mut db = DbManager::open_file(&config.db_path)?;
    let summary = ingest_source(&mut db, &config.table_name, source)?;
    info!(
        csv = %config.csv_path.display(),
        db = %config.db_path.display(),
        table = %summary.table,
        rows = summary.rows_loaded,
        "ingest complete"
    );
    Ok(summary)
}

pub fn ingest_source<R: Read>(
    db: &mut DbManager,
    table_name: &str,
    mut source: CsvSource<R>,
) -> EngineResult<LoadSummary> {
    let schema = infer_schema(source.headers());
    build_table(db.connection(), table_name, &schema)?;
    let rows_loaded = load_rows(db.connection_mut(), table_name, &schema, source.rows())?;

    Ok(LoadSummary {
        table: table_name.to_string(),
        columns: schema.columns.len(),
        rows_loaded,
        identity_column: schema.identity_column().map(|column| column.name.clone()),
    })
}
