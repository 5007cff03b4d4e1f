pub mod create;
pub mod reference;

use questgen_store::errors::store_error;
use rusqlite::Connection;

/// Close the run's connection, surfacing a close failure only when the
/// command itself succeeded
pub(crate) fn close_after<T, E>(
    conn: Connection,
    result: Result<T, E>,
) -> Result<T, Box<dyn std::error::Error>>
where
    E: std::error::Error + 'static,
{
    let closed = conn.close();
    let value = result.map_err(|e| Box::new(e) as Box<dyn std::error::Error>)?;
    closed.map_err(|(_, e)| store_error("close", e))?;
    Ok(value)
}
