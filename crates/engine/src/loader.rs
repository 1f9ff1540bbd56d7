use duckdb::{params_from_iter, Connection};
use tracing::{debug, info};

use crate::identifiers::{quote_identifier, validate_table_name};
use crate::schema::InferredSchema;
use crate::{EngineError, EngineResult};

/// INSERT statement for the non-identity columns of `schema`.
///
/// Values are always bound as positional parameters. A schema whose only
/// column is the identity column inserts `DEFAULT VALUES`.
pub fn insert_sql(table_name: &str, schema: &InferredSchema) -> EngineResult<String> {
    validate_table_name(table_name)?;
    let table = quote_identifier(table_name)?;

    let columns = schema
        .insert_columns()
        .map(|column| quote_identifier(&column.name))
        .collect::<EngineResult<Vec<String>>>()?;

    if columns.is_empty() {
        return Ok(format!("INSERT INTO {table} DEFAULT VALUES"));
    }

    let placeholders = (1..=columns.len())
        .map(|i| format!("${i}"))
        .collect::<Vec<_>>()
        .join(", ");

    Ok(format!(
        "INSERT INTO {table} ({}) VALUES ({placeholders})",
        columns.join(", ")
    ))
}

/// Inserts every row in a single transaction and returns the row count.
///
/// A row whose field count differs from the header aborts the load and
/// nothing from this call is committed.
pub fn load_rows<I>(
    conn: &mut Connection,
    table_name: &str,
    schema: &InferredSchema,
    rows: I,
) -> EngineResult<usize>
where
    I: IntoIterator<Item = EngineResult<Vec<String>>>,
{
    let sql = insert_sql(table_name, schema)?;
    debug!(%sql, "prepared insert");

    let expected = schema.columns.len();
    let tx = conn.transaction().map_err(EngineError::load)?;
    let mut loaded = 0;
    {
        let mut stmt = tx.prepare(&sql).map_err(EngineError::load)?;
        for (index, row) in rows.into_iter().enumerate() {
            let row = row?;
            if row.len() != expected {
                return Err(EngineError::Load(format!(
                    "row {} has {} fields, expected {}",
                    index + 1,
                    row.len(),
                    expected
                )));
            }
            stmt.execute(params_from_iter(schema.project(&row)))
                .map_err(|err| EngineError::Load(format!("row {}: {}", index + 1, err)))?;
            loaded += 1;
        }
    }
    tx.commit().map_err(EngineError::load)?;

    info!(table = table_name, rows = loaded, "loaded rows");
    Ok(loaded)
}
