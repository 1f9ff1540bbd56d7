pub mod ingest;
pub mod prompt;
