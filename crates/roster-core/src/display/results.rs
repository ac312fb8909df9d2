//! Result wrapper for displaying write outcomes.
//!
//! A write that touches zero rows is not a failure; it means no record had
//! the given key, and is reported as such.

use std::fmt;

use serde::Serialize;

/// Kind of write performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Insert,
    Update,
    Delete,
}

impl Operation {
    fn past_tense(self) -> &'static str {
        match self {
            Operation::Insert => "Inserted",
            Operation::Update => "Updated",
            Operation::Delete => "Deleted",
        }
    }
}

/// Number of rows affected by a department or employee write.
///
/// # Examples
///
/// ```rust
/// use roster_core::display::{AffectedRows, Operation};
///
/// let outcome = AffectedRows::department(Operation::Insert, 7, 1);
/// assert_eq!(format!("{outcome}"), "Inserted 1 department row (number 7).\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AffectedRows {
    pub operation: Operation,
    pub entity: &'static str,
    pub key: i64,
    pub rows: usize,
}

impl AffectedRows {
    pub fn department(operation: Operation, key: i64, rows: usize) -> Self {
        Self {
            operation,
            entity: "department",
            key,
            rows,
        }
    }

    pub fn employee(operation: Operation, key: i64, rows: usize) -> Self {
        Self {
            operation,
            entity: "employee",
            key,
            rows,
        }
    }
}

impl fmt::Display for AffectedRows {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows == 0 {
            return writeln!(f, "No {} matched number {}.", self.entity, self.key);
        }
        let plural = if self.rows == 1 { "" } else { "s" };
        writeln!(
            f,
            "{} {} {} row{} (number {}).",
            self.operation.past_tense(),
            self.rows,
            self.entity,
            plural,
            self.key
        )
    }
}
