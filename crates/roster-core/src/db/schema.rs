//! Database schema bootstrap.

use log::info;
use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

/// Creates the `department` and `employee` tables if they do not exist yet.
///
/// Existing tables are left untouched; there is no migration step.
pub(crate) fn initialize_schema(connection: &Connection) -> Result<()> {
    let schema_sql = include_str!("../../assets/schema.sql");
    connection
        .execute_batch(schema_sql)
        .db_context("Failed to initialize database schema")?;

    info!("Roster schema ready");
    Ok(())
}
