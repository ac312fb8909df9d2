//! Collection wrapper types for displaying groups of records.

use std::fmt;

use super::models::{DepartmentLine, EmployeeLine};
use crate::models::{Department, Employee};

/// Newtype wrapper for displaying a list of departments.
pub struct Departments(pub Vec<Department>);

impl Departments {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Departments {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            writeln!(f, "No departments found.")
        } else {
            writeln!(f, "# Departments")?;
            writeln!(f)?;
            for dept in &self.0 {
                write!(f, "{}", DepartmentLine(dept))?;
            }
            Ok(())
        }
    }
}

/// Newtype wrapper for displaying a list of employees.
pub struct Employees(pub Vec<Employee>);

impl Employees {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Employees {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            writeln!(f, "No employees found.")
        } else {
            writeln!(f, "# Employees")?;
            writeln!(f)?;
            for emp in &self.0 {
                write!(f, "{}", EmployeeLine(emp))?;
            }
            Ok(())
        }
    }
}
