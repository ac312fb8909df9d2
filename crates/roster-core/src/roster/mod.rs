//! Service object tying the repositories to a configured database.
//!
//! A [`Roster`] owns a [`SqliteProvider`] and lends it to short-lived
//! repository handles. It keeps no other state, so it can be shared by
//! reference across callers; each repository call still opens and closes its
//! own connection.
//!
//! # Usage Examples
//!
//! ```rust,no_run
//! use roster_core::{models::Department, RosterBuilder};
//!
//! # fn example() -> Result<(), roster_core::RosterError> {
//! let roster = RosterBuilder::new()
//!     .with_database_path(Some("/tmp/roster.db"))
//!     .build()?;
//!
//! roster.departments().insert(&Department::new(1, "Planning", 8))?;
//! let planning = roster.departments().select_by_key(1)?;
//! assert_eq!(planning.map(|d| d.floor), Some(8));
//! # Ok(())
//! # }
//! ```

use std::path::Path;

pub mod builder;


pub use builder::RosterBuilder;

use crate::db::{DepartmentRepository, EmployeeRepository, SqliteProvider};

/// Entry point for department and employee record access.
#[derive(Debug, Clone)]
pub struct Roster {
    provider: SqliteProvider,
}

impl Roster {
    pub(crate) fn new(provider: SqliteProvider) -> Self {
        Self { provider }
    }

    /// Repository over the `department` table.
    pub fn departments(&self) -> DepartmentRepository<&SqliteProvider> {
        DepartmentRepository::new(&self.provider)
    }

    /// Repository over the `employee` table.
    pub fn employees(&self) -> EmployeeRepository<&SqliteProvider> {
        EmployeeRepository::new(&self.provider)
    }

    /// The connection provider backing this roster.
    pub fn provider(&self) -> &SqliteProvider {
        &self.provider
    }

    /// Path of the SQLite database file.
    pub fn database_path(&self) -> &Path {
        self.provider.path()
    }
}
