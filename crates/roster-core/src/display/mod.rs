//! Display formatting for records and operation results.
//!
//! Domain models implement [`std::fmt::Display`] directly (see [`models`]).
//! Collections and write outcomes are wrapped in newtypes so that empty
//! results and zero-row writes get their own wording.
//!
//! ## Module Organization
//!
//! - [`collections`]: Collection wrapper types (Departments, Employees)
//! - [`results`]: Write outcome type (AffectedRows)
//! - [`models`]: Display implementations for domain models
//!
//! ## Usage Examples
//!
//! ```rust
//! use roster_core::{
//!     display::{AffectedRows, Employees, Operation},
//!     models::Employee,
//! };
//!
//! let staff = Employees(vec![Employee::new(1010, "Shin", 2_500_000)]);
//! assert!(format!("{staff}").contains("1010 Shin"));
//!
//! let outcome = AffectedRows::employee(Operation::Delete, 1010, 0);
//! assert_eq!(format!("{outcome}"), "No employee matched number 1010.\n");
//! ```

pub mod collections;
pub mod models;
pub mod results;

pub use collections::{Departments, Employees};
pub use results::{AffectedRows, Operation};
