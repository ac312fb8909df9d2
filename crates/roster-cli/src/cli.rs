//! Command definitions and handlers for the department and employee commands.
//!
//! Each command maps onto exactly one repository operation. Argument structs
//! carry the clap derives and convert into core models, so the core crate
//! stays free of CLI concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Models → Repository
//! ```

use std::fmt::Display;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use log::debug;
use roster_core::{
    AffectedRows, Department, Departments, Employee, Employees, Operation, Roster, RosterError,
    Title,
};
use serde::Serialize;

use crate::renderer::TerminalRenderer;

// ============================================================================
// Department arguments
// ============================================================================

/// Select a department by number
#[derive(Args)]
pub struct DeptKeyArgs {
    #[arg(help = "Department number")]
    pub dept_no: i64,
}

impl From<DeptKeyArgs> for Department {
    fn from(val: DeptKeyArgs) -> Self {
        Department::key_only(val.dept_no)
    }
}

/// Add a new department
#[derive(Args)]
pub struct AddDeptArgs {
    #[arg(help = "Department number (must be unused)")]
    pub dept_no: i64,
    /// Name of the department
    pub name: String,
    #[arg(help = "Floor the department is located on")]
    pub floor: i64,
}

impl From<AddDeptArgs> for Department {
    fn from(val: AddDeptArgs) -> Self {
        Department::new(val.dept_no, val.name, val.floor)
    }
}

/// Rename a department
///
/// Only the name is changed. The floor of an existing department is never
/// rewritten by this command.
#[derive(Args)]
pub struct UpdateDeptArgs {
    #[arg(help = "Number of the department to rename")]
    pub dept_no: i64,
    /// New name of the department
    pub name: String,
}

impl From<UpdateDeptArgs> for Department {
    fn from(val: UpdateDeptArgs) -> Self {
        Department {
            dept_name: val.name,
            ..Department::key_only(val.dept_no)
        }
    }
}

#[derive(Subcommand)]
pub enum DeptCommands {
    /// List all departments
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a single department
    #[command(alias = "s")]
    Show(DeptKeyArgs),
    /// Add a new department
    #[command(alias = "a")]
    Add(AddDeptArgs),
    /// Rename a department
    #[command(alias = "u")]
    Update(UpdateDeptArgs),
    /// Delete a department
    #[command(aliases = ["d", "rm"])]
    Delete(DeptKeyArgs),
}

// ============================================================================
// Employee arguments
// ============================================================================

/// Select an employee by number
#[derive(Args)]
pub struct EmpKeyArgs {
    #[arg(help = "Employee number")]
    pub emp_no: i64,
}

impl From<EmpKeyArgs> for Employee {
    fn from(val: EmpKeyArgs) -> Self {
        Employee::key_only(val.emp_no)
    }
}

/// Full set of employee fields, shared by `add` and `update`
///
/// Omitting `--title`, `--manager` or `--dept` stores no relationship for
/// that column.
#[derive(Args)]
pub struct EmployeeArgs {
    #[arg(help = "Employee number")]
    pub emp_no: i64,
    /// Full name of the employee
    pub name: String,
    #[arg(allow_negative_numbers = true, help = "Salary (must not be negative)")]
    pub salary: i64,
    #[arg(short, long, help = "Title number")]
    pub title: Option<i64>,
    #[arg(short, long, help = "Employee number of the manager")]
    pub manager: Option<i64>,
    #[arg(short, long, help = "Department number")]
    pub dept: Option<i64>,
}

impl TryFrom<EmployeeArgs> for Employee {
    type Error = RosterError;

    fn try_from(val: EmployeeArgs) -> Result<Self, Self::Error> {
        if val.salary < 0 {
            return Err(RosterError::invalid_input("salary")
                .with_reason(format!("must not be negative, got {}", val.salary)));
        }

        Ok(Employee::new(val.emp_no, val.name, val.salary)
            .with_title(val.title.map(Title::new))
            .with_manager(val.manager.map(Employee::key_only))
            .with_department(val.dept.map(Department::key_only)))
    }
}

#[derive(Subcommand)]
pub enum EmpCommands {
    /// List all employees
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a single employee
    #[command(alias = "s")]
    Show(EmpKeyArgs),
    /// Add a new employee
    #[command(alias = "a")]
    Add(EmployeeArgs),
    /// Replace an employee's name, salary and relationships
    #[command(alias = "u")]
    Update(EmployeeArgs),
    /// Delete an employee
    #[command(aliases = ["d", "rm"])]
    Delete(EmpKeyArgs),
}

// ============================================================================
// Handlers
// ============================================================================

/// Runs commands against a roster and prints their results.
pub struct Cli {
    roster: Roster,
    renderer: TerminalRenderer,
    json: bool,
}

impl Cli {
    pub fn new(roster: Roster, renderer: TerminalRenderer, json: bool) -> Self {
        Self {
            roster,
            renderer,
            json,
        }
    }

    pub fn handle_dept_command(&self, command: DeptCommands) -> Result<()> {
        let repo = self.roster.departments();

        match command {
            DeptCommands::List => {
                let departments =
                    Departments(repo.select_all().context("Failed to list departments")?);
                debug!("Listing {} departments", departments.len());
                self.print(&departments.0, &departments)
            }
            DeptCommands::Show(args) => {
                let dept_no = args.dept_no;
                match repo
                    .select_by_key(dept_no)
                    .context("Failed to load department")?
                {
                    Some(dept) => self.print(&dept, &dept),
                    None => self.print_missing("department", dept_no),
                }
            }
            DeptCommands::Add(args) => {
                let dept = Department::from(args);
                let rows = repo.insert(&dept).context("Failed to add department")?;
                self.print_outcome(AffectedRows::department(Operation::Insert, dept.dept_no, rows))
            }
            DeptCommands::Update(args) => {
                let dept = Department::from(args);
                let rows = repo.update(&dept).context("Failed to update department")?;
                self.print_outcome(AffectedRows::department(Operation::Update, dept.dept_no, rows))
            }
            DeptCommands::Delete(args) => {
                let dept = Department::from(args);
                let rows = repo.delete(&dept).context("Failed to delete department")?;
                self.print_outcome(AffectedRows::department(Operation::Delete, dept.dept_no, rows))
            }
        }
    }

    pub fn handle_emp_command(&self, command: EmpCommands) -> Result<()> {
        let repo = self.roster.employees();

        match command {
            EmpCommands::List => {
                let employees = Employees(repo.select_all().context("Failed to list employees")?);
                debug!("Listing {} employees", employees.len());
                self.print(&employees.0, &employees)
            }
            EmpCommands::Show(args) => {
                let emp_no = args.emp_no;
                match repo.select_by_key(emp_no).context("Failed to load employee")? {
                    Some(emp) => self.print(&emp, &emp),
                    None => self.print_missing("employee", emp_no),
                }
            }
            EmpCommands::Add(args) => {
                let emp = Employee::try_from(args)?;
                let rows = repo.insert(&emp).context("Failed to add employee")?;
                self.print_outcome(AffectedRows::employee(Operation::Insert, emp.emp_no, rows))
            }
            EmpCommands::Update(args) => {
                let emp = Employee::try_from(args)?;
                let rows = repo.update(&emp).context("Failed to update employee")?;
                self.print_outcome(AffectedRows::employee(Operation::Update, emp.emp_no, rows))
            }
            EmpCommands::Delete(args) => {
                let emp = Employee::from(args);
                let rows = repo.delete(&emp).context("Failed to delete employee")?;
                self.print_outcome(AffectedRows::employee(Operation::Delete, emp.emp_no, rows))
            }
        }
    }

    /// Prints `value` as JSON or `display` as markdown, depending on the
    /// output mode.
    fn print<T, D>(&self, value: &T, display: &D) -> Result<()>
    where
        T: Serialize + ?Sized,
        D: Display + ?Sized,
    {
        if self.json {
            let json = serde_json::to_string_pretty(value).map_err(RosterError::from)?;
            println!("{json}");
            Ok(())
        } else {
            self.renderer.render(&display.to_string())
        }
    }

    fn print_outcome(&self, outcome: AffectedRows) -> Result<()> {
        self.print(&outcome, &outcome)
    }

    fn print_missing(&self, entity: &str, key: i64) -> Result<()> {
        if self.json {
            println!("null");
            Ok(())
        } else {
            self.renderer
                .render(&format!("No {entity} with number {key}.\n"))
        }
    }
}
