use crate::{EngineError, EngineResult};

pub fn validate_table_name(table_name: &str) -> EngineResult<()> {
    let mut chars = table_name.chars();
    let Some(first) = chars.next() else {
        return Err(EngineError::Schema("table name is empty".into()));
    };
    if !is_ident_start(first) || !chars.all(is_ident_continue) {
        return Err(EngineError::Schema(format!(
            "table name `{table_name}` must be alphanumeric or underscore and start with a letter or underscore"
        )));
    }
    Ok(())
}

/// Wraps an identifier in double quotes, doubling any embedded quote.
///
/// Header names come straight from the source file, so they may contain
/// spaces, punctuation or quotes; the quoted form is always a single
/// identifier token.
pub fn quote_identifier(name: &str) -> EngineResult<String> {
    if name.is_empty() {
        return Err(EngineError::Schema("column name is empty".into()));
    }
    if name.contains('\0') {
        return Err(EngineError::Schema(format!(
            "column name {name:?} contains a NUL character"
        )));
    }
    Ok(format!("\"{}\"", name.replace('"', "\"\"")))
}

/// Name of the sequence backing a table's identity column.
pub fn identity_sequence_name(table_name: &str) -> String {
    format!("{table_name}_id_seq")
}

fn is_ident_start(value: char) -> bool {
    value == '_' || value.is_ascii_alphabetic()
}

fn is_ident_continue(value: char) -> bool {
    is_ident_start(value) || value.is_ascii_digit()
}
