use csvdb_engine::{ingest_csv_to_table, RunConfig};

pub fn run(config: &RunConfig) -> CliResult<()> {
    let summary = ingest_csv_to_table(config)?;
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}

type CliResult<T> = Result<T, Box<dyn std::error::Error + Send + Sync>>;
