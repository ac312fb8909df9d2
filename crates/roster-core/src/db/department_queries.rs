//! Department CRUD operations.

use log::debug;
use rusqlite::{params, OptionalExtension, Row};

use super::ConnectionProvider;
use crate::{
    error::{DatabaseResultExt, Result},
    models::Department,
};

const SELECT_ALL_DEPARTMENTS_SQL: &str = "SELECT deptno, deptname, floor FROM department";
const SELECT_DEPARTMENT_SQL: &str =
    "SELECT deptno, deptname, floor FROM department WHERE deptno = ?1";
const INSERT_DEPARTMENT_SQL: &str =
    "INSERT INTO department (deptno, deptname, floor) VALUES (?1, ?2, ?3)";
// Only the name is written; floor keeps its stored value.
const UPDATE_DEPARTMENT_SQL: &str = "UPDATE department SET deptname = ?1 WHERE deptno = ?2";
const DELETE_DEPARTMENT_SQL: &str = "DELETE FROM department WHERE deptno = ?1";

/// Repository over the `department` table.
///
/// Holds no state besides its provider; cloning or constructing one per
/// request is free.
#[derive(Debug, Clone)]
pub struct DepartmentRepository<P> {
    provider: P,
}

impl<P: ConnectionProvider> DepartmentRepository<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    fn build_department_from_row(row: &Row<'_>) -> rusqlite::Result<Department> {
        Ok(Department {
            dept_no: row.get(0)?,
            dept_name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
            floor: row.get::<_, Option<i64>>(2)?.unwrap_or_default(),
        })
    }

    /// Returns every department in storage order. An empty table yields an
    /// empty vector.
    pub fn select_all(&self) -> Result<Vec<Department>> {
        let connection = self.provider.acquire()?;
        let mut stmt = connection
            .prepare(SELECT_ALL_DEPARTMENTS_SQL)
            .db_context("Failed to prepare department query")?;

        let departments = stmt
            .query_map([], Self::build_department_from_row)
            .db_context("Failed to query departments")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch departments")?;

        debug!("Selected {} department rows", departments.len());
        Ok(departments)
    }

    /// Looks up a department by number. Returns `None` when no row matches.
    pub fn select_by_key(&self, dept_no: i64) -> Result<Option<Department>> {
        let connection = self.provider.acquire()?;
        let mut stmt = connection
            .prepare(SELECT_DEPARTMENT_SQL)
            .db_context("Failed to prepare department query")?;

        let department = stmt
            .query_row(params![dept_no], Self::build_department_from_row)
            .optional()
            .db_context("Failed to query department")?;

        debug!("Selected department {dept_no}: found={}", department.is_some());
        Ok(department)
    }

    /// Inserts a department. A duplicate `dept_no` is a storage error.
    pub fn insert(&self, department: &Department) -> Result<usize> {
        let connection = self.provider.acquire()?;
        let affected = connection
            .execute(
                INSERT_DEPARTMENT_SQL,
                params![department.dept_no, department.dept_name, department.floor],
            )
            .db_context("Failed to insert department")?;

        debug!(
            "Inserted department {} (deptname={:?}, floor={}): {affected} rows",
            department.dept_no, department.dept_name, department.floor
        );
        Ok(affected)
    }

    /// Renames the department matching `dept_no`. The `floor` carried by
    /// `department` is ignored.
    pub fn update(&self, department: &Department) -> Result<usize> {
        let connection = self.provider.acquire()?;
        let affected = connection
            .execute(
                UPDATE_DEPARTMENT_SQL,
                params![department.dept_name, department.dept_no],
            )
            .db_context("Failed to update department")?;

        debug!(
            "Updated department {} (deptname={:?}): {affected} rows",
            department.dept_no, department.dept_name
        );
        Ok(affected)
    }

    /// Deletes the department matching `dept_no`.
    pub fn delete(&self, department: &Department) -> Result<usize> {
        let connection = self.provider.acquire()?;
        let affected = connection
            .execute(DELETE_DEPARTMENT_SQL, params![department.dept_no])
            .db_context("Failed to delete department")?;

        debug!("Deleted department {}: {affected} rows", department.dept_no);
        Ok(affected)
    }
}
