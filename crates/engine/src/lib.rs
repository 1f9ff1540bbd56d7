//! CSV to DuckDB table conversion.
//!
//! A run reads a delimited file, infers one column per header (a header named
//! `id` in any case becomes a store-generated identity column, every other
//! column is text), replaces the destination table and bulk-loads the rows in
//! a single transaction.

mod builder;
mod config;
mod db_manager;
mod error;
mod identifiers;
mod ingest;
mod loader;
mod reader;
mod schema;
mod types;

pub use builder::{build_table, replace_table_sql};
pub use config::RunConfig;
pub use db_manager::DbManager;
pub use error::EngineError;
pub use identifiers::{quote_identifier, validate_table_name};
pub use ingest::{ingest_csv_to_table, ingest_source};
pub use loader::{insert_sql, load_rows};
pub use reader::{open_csv, CsvSource};
pub use schema::{
    infer_schema, row_count, table_schema, ColumnDefinition, InferredSchema, StorageKind,
    TableColumn, IDENTITY_COLUMN,
};
pub use types::{EngineResult, LoadSummary};
