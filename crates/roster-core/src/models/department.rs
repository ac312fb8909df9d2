//! Department model definition.

use serde::{Deserialize, Serialize};

use super::Keyed;

/// A department row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Department {
    /// Caller-assigned department number (primary key)
    pub dept_no: i64,

    /// Name of the department
    pub dept_name: String,

    /// Floor the department is located on
    pub floor: i64,
}

impl Department {
    /// Creates a fully populated department.
    pub fn new(dept_no: i64, dept_name: impl Into<String>, floor: i64) -> Self {
        Self {
            dept_no,
            dept_name: dept_name.into(),
            floor,
        }
    }

    /// Creates a department carrying only its key, for use as a reference
    /// from an employee.
    pub fn key_only(dept_no: i64) -> Self {
        Self {
            dept_no,
            dept_name: String::new(),
            floor: 0,
        }
    }
}

impl Keyed for Department {
    fn key(&self) -> i64 {
        self.dept_no
    }
}
