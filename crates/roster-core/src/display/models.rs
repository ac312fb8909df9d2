//! Display implementations for domain models.
//!
//! Records render as small markdown blocks. Absent references print as
//! `none`; present references print their key only, since references loaded
//! from storage carry nothing else.

use std::fmt;

use crate::models::{Department, Employee, Title};

struct Reference(Option<i64>);

impl fmt::Display for Reference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(key) => write!(f, "{key}"),
            None => write!(f, "none"),
        }
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title_no)
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.dept_no, self.dept_name)?;
        writeln!(f)?;
        writeln!(f, "- Floor: {}", self.floor)
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.emp_no, self.emp_name)?;
        writeln!(f)?;
        writeln!(f, "- Title: {}", Reference(self.title_no()))?;
        writeln!(f, "- Manager: {}", Reference(self.manager_no()))?;
        writeln!(f, "- Salary: {}", self.salary)?;
        writeln!(f, "- Department: {}", Reference(self.dept_no()))
    }
}

/// One-line form of a department, used inside lists.
pub struct DepartmentLine<'a>(pub &'a Department);

impl fmt::Display for DepartmentLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dept = self.0;
        writeln!(f, "- {} {} (floor {})", dept.dept_no, dept.dept_name, dept.floor)
    }
}

/// One-line form of an employee, used inside lists.
pub struct EmployeeLine<'a>(pub &'a Employee);

impl fmt::Display for EmployeeLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let emp = self.0;
        writeln!(
            f,
            "- {} {} (title: {}, manager: {}, salary: {}, department: {})",
            emp.emp_no,
            emp.emp_name,
            Reference(emp.title_no()),
            Reference(emp.manager_no()),
            emp.salary,
            Reference(emp.dept_no()),
        )
    }
}
