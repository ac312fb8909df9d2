//! Core library for the Roster employee-records application.
//!
//! This crate provides record access for departments and employees stored in
//! SQLite: the data models, one repository per table, the connection
//! provider they draw sessions from, and display formatting for results.
//!
//! # Relationships
//!
//! Employees reference a title, a manager and a department by key. Each
//! reference is optional. Loaded references are key-only, and a stored
//! foreign key of `0` reads back the same as NULL (absent).
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use roster_core::{
//!     models::{Department, Employee, Title},
//!     RosterBuilder,
//! };
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let roster = RosterBuilder::new()
//!     .with_database_path(Some("roster.db"))
//!     .build()?;
//!
//! let emp = Employee::new(1013, "Shin", 2_500_000)
//!     .with_title(Some(Title::new(2)))
//!     .with_manager(Some(Employee::key_only(4377)))
//!     .with_department(Some(Department::key_only(1)));
//! roster.employees().insert(&emp)?;
//!
//! if let Some(loaded) = roster.employees().select_by_key(1013)? {
//!     println!("{loaded}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod roster;

// Re-export commonly used types
pub use db::{ConnectionProvider, DepartmentRepository, EmployeeRepository, SqliteProvider};
pub use display::{AffectedRows, Departments, Employees, Operation};
pub use error::{Result, RosterError};
pub use models::{Department, Employee, Keyed, Title};
pub use roster::{Roster, RosterBuilder};
