//! Employee CRUD operations.
//!
//! Employees carry three optional references (title, manager, department).
//! Reads decode them through [`reference_key`], writes bind them through
//! [`foreign_key`]; see [`super::binding`] for the NULL/0 convention.

use log::debug;
use rusqlite::{params, OptionalExtension, Row};

use super::{
    binding::{foreign_key, reference_key},
    ConnectionProvider,
};
use crate::{
    error::{DatabaseResultExt, Result},
    models::{Department, Employee, Title},
};

const SELECT_ALL_EMPLOYEES_SQL: &str =
    "SELECT empno, empname, title, manager, salary, dno FROM employee";
const SELECT_EMPLOYEE_SQL: &str =
    "SELECT empno, empname, title, manager, salary, dno FROM employee WHERE empno = ?1";
const INSERT_EMPLOYEE_SQL: &str = "INSERT INTO employee (empno, empname, title, manager, salary, dno) VALUES (?1, ?2, ?3, ?4, ?5, ?6)";
const UPDATE_EMPLOYEE_SQL: &str = "UPDATE employee SET empname = ?1, salary = ?2, title = ?3, manager = ?4, dno = ?5 WHERE empno = ?6";
const DELETE_EMPLOYEE_SQL: &str = "DELETE FROM employee WHERE empno = ?1";

/// Repository over the `employee` table.
#[derive(Debug, Clone)]
pub struct EmployeeRepository<P> {
    provider: P,
}

impl<P: ConnectionProvider> EmployeeRepository<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Builds an employee from a result row. Related entities come back
    /// key-only; nothing is joined.
    fn build_employee_from_row(row: &Row<'_>) -> rusqlite::Result<Employee> {
        Ok(Employee {
            emp_no: row.get(0)?,
            emp_name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            title: reference_key(row, 2)?.map(Title::new),
            manager: reference_key(row, 3)?.map(|no| Box::new(Employee::key_only(no))),
            salary: row.get::<_, Option<i64>>(4)?.unwrap_or_default(),
            department: reference_key(row, 5)?.map(Department::key_only),
        })
    }

    /// Returns every employee in storage order. An empty table yields an
    /// empty vector.
    pub fn select_all(&self) -> Result<Vec<Employee>> {
        let connection = self.provider.acquire()?;
        let mut stmt = connection
            .prepare(SELECT_ALL_EMPLOYEES_SQL)
            .db_context("Failed to prepare employee query")?;

        let employees = stmt
            .query_map([], Self::build_employee_from_row)
            .db_context("Failed to query employees")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch employees")?;

        debug!("Selected {} employee rows", employees.len());
        Ok(employees)
    }

    /// Looks up an employee by number. Returns `None` when no row matches.
    pub fn select_by_key(&self, emp_no: i64) -> Result<Option<Employee>> {
        let connection = self.provider.acquire()?;
        let mut stmt = connection
            .prepare(SELECT_EMPLOYEE_SQL)
            .db_context("Failed to prepare employee query")?;

        let employee = stmt
            .query_row(params![emp_no], Self::build_employee_from_row)
            .optional()
            .db_context("Failed to query employee")?;

        debug!("Selected employee {emp_no}: found={}", employee.is_some());
        Ok(employee)
    }

    /// Inserts an employee. Absent references are stored as NULL.
    pub fn insert(&self, employee: &Employee) -> Result<usize> {
        let title = foreign_key(employee.title.as_ref());
        let manager = foreign_key(employee.manager.as_deref());
        let dno = foreign_key(employee.department.as_ref());

        let connection = self.provider.acquire()?;
        let affected = connection
            .execute(
                INSERT_EMPLOYEE_SQL,
                params![
                    employee.emp_no,
                    employee.emp_name,
                    title,
                    manager,
                    employee.salary,
                    dno
                ],
            )
            .db_context("Failed to insert employee")?;

        debug!(
            "Inserted employee {} (empname={:?}, title={title:?}, manager={manager:?}, salary={}, dno={dno:?}): {affected} rows",
            employee.emp_no, employee.emp_name, employee.salary
        );
        Ok(affected)
    }

    /// Rewrites name, salary and all three references of the employee
    /// matching `emp_no`.
    pub fn update(&self, employee: &Employee) -> Result<usize> {
        let title = foreign_key(employee.title.as_ref());
        let manager = foreign_key(employee.manager.as_deref());
        let dno = foreign_key(employee.department.as_ref());

        let connection = self.provider.acquire()?;
        let affected = connection
            .execute(
                UPDATE_EMPLOYEE_SQL,
                params![
                    employee.emp_name,
                    employee.salary,
                    title,
                    manager,
                    dno,
                    employee.emp_no
                ],
            )
            .db_context("Failed to update employee")?;

        debug!(
            "Updated employee {} (empname={:?}, title={title:?}, manager={manager:?}, salary={}, dno={dno:?}): {affected} rows",
            employee.emp_no, employee.emp_name, employee.salary
        );
        Ok(affected)
    }

    /// Deletes the employee matching `emp_no`.
    pub fn delete(&self, employee: &Employee) -> Result<usize> {
        let connection = self.provider.acquire()?;
        let affected = connection
            .execute(DELETE_EMPLOYEE_SQL, params![employee.emp_no])
            .db_context("Failed to delete employee")?;

        debug!("Deleted employee {}: {affected} rows", employee.emp_no);
        Ok(affected)
    }
}
