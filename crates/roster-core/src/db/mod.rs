//! Database access for departments and employees.
//!
//! Every repository call is one unit of work: it acquires a connection from a
//! [`ConnectionProvider`], runs exactly one statement and drops the connection
//! before returning, on success and failure alike.

use std::path::{Path, PathBuf};

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod binding;
pub mod department_queries;
pub mod employee_queries;
pub mod schema;

pub use department_queries::DepartmentRepository;
pub use employee_queries::EmployeeRepository;

/// Source of live database sessions.
///
/// Implementations decide how sessions are created or pooled. Repositories
/// only require a working connection per call and release it by dropping it.
pub trait ConnectionProvider {
    /// Returns a connection ready for a single statement.
    fn acquire(&self) -> Result<Connection>;
}

impl<P: ConnectionProvider + ?Sized> ConnectionProvider for &P {
    fn acquire(&self) -> Result<Connection> {
        (**self).acquire()
    }
}

/// Provider that opens a fresh SQLite connection to a database file on every
/// call.
#[derive(Debug, Clone)]
pub struct SqliteProvider {
    path: PathBuf,
}

impl SqliteProvider {
    /// Creates a provider for the database file at `path`. The file is not
    /// touched until the first [`acquire`](ConnectionProvider::acquire).
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Path of the database file this provider opens.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the roster tables if they are missing.
    pub fn bootstrap(&self) -> Result<()> {
        let connection = self.acquire()?;
        schema::initialize_schema(&connection)
    }
}

impl ConnectionProvider for SqliteProvider {
    fn acquire(&self) -> Result<Connection> {
        Connection::open(&self.path).db_context("Failed to open database connection")
    }
}
