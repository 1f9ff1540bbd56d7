use duckdb::Connection;
use serde::{Deserialize, Serialize};

use crate::identifiers::{quote_identifier, validate_table_name};
use crate::EngineResult;

/// Header name reserved for the store-generated identity column.
pub const IDENTITY_COLUMN: &str = "id";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StorageKind {
    Text,
    Identity,
}

impl StorageKind {
    pub fn sql_type(self) -> &'static str {
        match self {
            StorageKind::Text => "TEXT",
            StorageKind::Identity => "INTEGER",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDefinition {
    pub name: String,
    pub kind: StorageKind,
}

impl ColumnDefinition {
    pub fn is_identity(&self) -> bool {
        self.kind == StorageKind::Identity
    }
}

/// Column layout derived from a CSV header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferredSchema {
    pub columns: Vec<ColumnDefinition>,
    /// Header position of the identity column, if one was found.
    pub identity_index: Option<usize>,
}

impl InferredSchema {
    pub fn has_identity(&self) -> bool {
        self.identity_index.is_some()
    }

    pub fn identity_column(&self) -> Option<&ColumnDefinition> {
        self.identity_index.map(|index| &self.columns[index])
    }

    /// Columns that receive bound values on insert, in header order.
    pub fn insert_columns(&self) -> impl Iterator<Item = &ColumnDefinition> + '_ {
        self.columns
            .iter()
            .enumerate()
            .filter(move |(index, _)| Some(*index) != self.identity_index)
            .map(|(_, column)| column)
    }

    /// Drops the value at the identity position so the row lines up with
    /// `insert_columns`.
    pub fn project<'a>(&self, row: &'a [String]) -> Vec<&'a str> {
        row.iter()
            .enumerate()
            .filter(|(index, _)| Some(*index) != self.identity_index)
            .map(|(_, value)| value.as_str())
            .collect()
    }
}

/// Every column is text except the first whose trimmed name equals `id`
/// ignoring case. Later `id` matches stay text columns.
pub fn infer_schema(headers: &[String]) -> InferredSchema {
    let mut identity_index = None;
    let columns = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            let name = header.trim();
            let kind = if identity_index.is_none() && name.eq_ignore_ascii_case(IDENTITY_COLUMN) {
                identity_index = Some(index);
                StorageKind::Identity
            } else {
                StorageKind::Text
            };
            ColumnDefinition {
                name: name.to_string(),
                kind,
            }
        })
        .collect();

    InferredSchema {
        columns,
        identity_index,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableColumn {
    pub cid: i64,
    pub name: String,
    pub data_type: String,
    pub notnull: bool,
    pub default_value: Option<String>,
    pub primary_key: bool,
}

pub fn table_schema(conn: &Connection, table_name: &str) -> EngineResult<Vec<TableColumn>> {
    validate_table_name(table_name)?;
    let sql = format!("PRAGMA table_info('{table}')", table = table_name);
    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map([], |row| {
        let notnull: bool = row.get(3)?;
        let pk: bool = row.get(5)?;
        Ok(TableColumn {
            cid: row.get(0)?,
            name: row.get(1)?,
            data_type: row.get(2)?,
            notnull,
            default_value: row.get(4)?,
            primary_key: pk,
        })
    })?;

    let mut columns = Vec::new();
    for row in rows {
        columns.push(row?);
    }
    Ok(columns)
}

pub fn row_count(conn: &Connection, table_name: &str) -> EngineResult<i64> {
    validate_table_name(table_name)?;
    let sql = format!("SELECT COUNT(*) FROM {}", quote_identifier(table_name)?);
    let count = conn.query_row(&sql, [], |row| row.get(0))?;
    Ok(count)
}
