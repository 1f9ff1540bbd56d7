use std::path::Path;

use duckdb::Connection;
use tracing::debug;

use crate::EngineResult;

/// Owns the single destination connection for a run; dropping it closes
/// the connection.
pub struct DbManager {
    conn: Connection,
}

impl DbManager {
    pub fn open_file(path: impl AsRef<Path>) -> EngineResult<Self> {
        let path = path.as_ref();
        let conn = Connection::open(path)?;
        debug!(path = %path.display(), "opened database");
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> EngineResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    pub fn connection_mut(&mut self) -> &mut Connection {
        &mut self.conn
    }
}
