use std::io::{BufRead, Write};

use csvdb_engine::{EngineError, EngineResult, RunConfig};

pub const CSV_PROMPT: &str = "Enter the name of the CSV file (with .csv extension): ";
pub const DB_PROMPT: &str = "Enter the name of the output database file (with .db extension): ";
pub const TABLE_PROMPT: &str = "Enter the name of the table to create in the database: ";

/// Asks for the source file, database file and table name, in that order.
pub fn collect_config<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> EngineResult<RunConfig> {
    let csv_path = ask(input, output, CSV_PROMPT)?;
    let db_path = ask(input, output, DB_PROMPT)?;
    let table_name = ask(input, output, TABLE_PROMPT)?;
    Ok(RunConfig::new(csv_path, db_path, table_name))
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> EngineResult<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(EngineError::Config(format!(
            "input ended before an answer to: {}",
            prompt.trim_end()
        )));
    }
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn prompts_in_order_and_trims_answers() {
        let mut input = Cursor::new("  data.csv \nout.db\r\npeople\n");
        let mut output = Vec::new();

        let config = collect_config(&mut input, &mut output).expect("config");
        assert_eq!(config, RunConfig::new("data.csv", "out.db", "people"));

        let shown = String::from_utf8(output).expect("utf8");
        assert_eq!(shown, format!("{CSV_PROMPT}{DB_PROMPT}{TABLE_PROMPT}"));
    }

    #[test]
    fn early_end_of_input_is_config_error() {
        let mut input = Cursor::new("data.csv\n");
        let mut output = Vec::new();

        let err = collect_config(&mut input, &mut output).unwrap_err();
        assert!(matches!(err, EngineError::Config(_)), "{err}");
    }

    #[test]
    fn blank_answer_is_kept_for_validation() {
        let mut input = Cursor::new("\nout.db\nt\n");
        let mut output = Vec::new();

        let config = collect_config(&mut input, &mut output).expect("config");
        let err = config.validate().unwrap_err();
        assert!(matches!(err, EngineError::Config(_)), "{err}");
    }
}
