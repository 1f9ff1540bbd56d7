use duckdb::Connection;
use tracing::{debug, info};

use crate::identifiers::{identity_sequence_name, quote_identifier, validate_table_name};
use crate::schema::{InferredSchema, StorageKind};
use crate::{EngineError, EngineResult};

/// Drops any existing table of this name and creates it fresh from `schema`.
pub fn build_table(conn: &Connection, table_name: &str, schema: &InferredSchema) -> EngineResult<()> {
    let sql = replace_table_sql(table_name, schema)?;
    debug!(%sql, "replacing table");
    conn.execute_batch(&sql).map_err(EngineError::schema)?;
    info!(
        table = table_name,
        columns = schema.columns.len(),
        identity = schema.has_identity(),
        "created table"
    );
    Ok(())
}

/// DROP + CREATE batch for `table_name`.
///
/// The table name must pass `validate_table_name`; column names are quoted.
/// An identity column takes its values from a per-table sequence that is
/// recreated on every run, so identities restart at 1.
pub fn replace_table_sql(table_name: &str, schema: &InferredSchema) -> EngineResult<String> {
    validate_table_name(table_name)?;
    if schema.columns.is_empty() {
        return Err(EngineError::Schema(format!(
            "table `{table_name}` would have no columns"
        )));
    }

    let table = quote_identifier(table_name)?;
    let sequence_name = identity_sequence_name(table_name);
    let sequence = quote_identifier(&sequence_name)?;

    let columns = schema
        .columns
        .iter()
        .map(|column| {
            let name = quote_identifier(&column.name)?;
            Ok(match column.kind {
                StorageKind::Text => format!("{name} {}", column.kind.sql_type()),
                StorageKind::Identity => format!(
                    "{name} {} PRIMARY KEY DEFAULT nextval('{sequence_name}')",
                    column.kind.sql_type()
                ),
            })
        })
        .collect::<EngineResult<Vec<String>>>()?;

    let mut sql = format!("DROP TABLE IF EXISTS {table};\nDROP SEQUENCE IF EXISTS {sequence};\n");
    if schema.has_identity() {
        sql.push_str(&format!("CREATE SEQUENCE {sequence} START 1;\n"));
    }
    sql.push_str(&format!("CREATE TABLE {table} ({});", columns.join(", ")));
    Ok(sql)
}
