//! Employee model definition.

use serde::{Deserialize, Serialize};

use super::{Department, Keyed, Title};

/// An employee row together with its three optional relationships.
///
/// References read back from storage are key-only: the repository never joins
/// the referenced tables, so a loaded `manager` has an empty name and no
/// relationships of its own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    /// Caller-assigned employee number (primary key)
    pub emp_no: i64,

    /// Full name of the employee
    pub emp_name: String,

    /// Job title, if assigned
    pub title: Option<Title>,

    /// Reporting manager, if any
    pub manager: Option<Box<Employee>>,

    /// Salary, non-negative by convention
    pub salary: i64,

    /// Department the employee belongs to, if any
    pub department: Option<Department>,
}

impl Employee {
    /// Creates an employee with no title, manager or department.
    pub fn new(emp_no: i64, emp_name: impl Into<String>, salary: i64) -> Self {
        Self {
            emp_no,
            emp_name: emp_name.into(),
            title: None,
            manager: None,
            salary,
            department: None,
        }
    }

    /// Creates an employee carrying only its key, for use as a manager
    /// reference.
    pub fn key_only(emp_no: i64) -> Self {
        Self::new(emp_no, String::new(), 0)
    }

    pub fn with_title(mut self, title: Option<Title>) -> Self {
        self.title = title;
        self
    }

    pub fn with_manager(mut self, manager: Option<Employee>) -> Self {
        self.manager = manager.map(Box::new);
        self
    }

    pub fn with_department(mut self, department: Option<Department>) -> Self {
        self.department = department;
        self
    }

    /// Key of the referenced title, if present.
    pub fn title_no(&self) -> Option<i64> {
        self.title.as_ref().map(|t| t.key())
    }

    /// Key of the referenced manager, if present.
    pub fn manager_no(&self) -> Option<i64> {
        self.manager.as_deref().map(|m| m.key())
    }

    /// Key of the referenced department, if present.
    pub fn dept_no(&self) -> Option<i64> {
        self.department.as_ref().map(|d| d.key())
    }
}

impl Keyed for Employee {
    fn key(&self) -> i64 {
        self.emp_no
    }
}
