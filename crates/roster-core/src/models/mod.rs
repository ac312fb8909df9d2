//! Data models for departments and employees.
//!
//! Entities are plain values. Nothing is cached or tracked between calls; a
//! model handed to a repository is read once to bind statement parameters and
//! a model returned from a repository is built fresh from the result row.
//!
//! # Relationships
//!
//! An [`Employee`] refers to a [`Title`], a manager (another [`Employee`]) and
//! a [`Department`]. Each reference is an `Option`:
//!
//! - `None` maps to a NULL foreign-key column.
//! - `Some(..)` needs only its key populated; hydrated values are accepted on
//!   writes but only the key is stored.
//!
//! Display implementations for these models live in
//! [`crate::display::models`].
//!
//! # Examples
//!
//! ```rust
//! use roster_core::models::{Department, Employee, Title};
//!
//! let emp = Employee::new(1013, "Shin", 2_500_000)
//!     .with_title(Some(Title::new(2)))
//!     .with_manager(Some(Employee::key_only(4377)))
//!     .with_department(Some(Department::key_only(1)));
//!
//! assert_eq!(emp.title_no(), Some(2));
//! assert_eq!(emp.manager_no(), Some(4377));
//! assert_eq!(emp.dept_no(), Some(1));
//! ```

pub mod department;
pub mod employee;
pub mod title;


pub use department::Department;
pub use employee::Employee;
pub use title::Title;

/// An entity identified by a single integer key.
///
/// The write path only ever reads this key from a referenced entity.
pub trait Keyed {
    fn key(&self) -> i64;
}
