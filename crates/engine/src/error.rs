use std::fmt;

#[derive(Debug)]
pub enum EngineError {
    Config(String),
    Read(String),
    Schema(String),
    Load(String),
    Database(duckdb::Error),
    Io(std::io::Error),
}

impl fmt::Display for EngineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EngineError::Config(msg) => write!(f, "Config error: {}", msg),
            EngineError::Read(msg) => write!(f, "Read error: {}", msg),
            EngineError::Schema(msg) => write!(f, "Schema error: {}", msg),
            EngineError::Load(msg) => write!(f, "Load error: {}", msg),
            EngineError::Database(err) => write!(f, "Database error: {}", err),
            EngineError::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for EngineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            EngineError::Database(err) => Some(err),
            EngineError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<duckdb::Error> for EngineError {
    fn from(err: duckdb::Error) -> Self {
        EngineError::Database(err)
    }
}

impl From<std::io::Error> for EngineError {
    fn from(err: std::io::Error) -> Self {
        EngineError::Io(err)
    }
}

impl EngineError {
    pub fn schema(err: impl fmt::Display) -> Self {
        EngineError::Schema(err.to_string())
    }

    pub fn load(err: impl fmt::Display) -> Self {
        EngineError::Load(err.to_string())
    }
}
