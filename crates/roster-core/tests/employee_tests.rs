mod common;

use common::{create_test_roster, raw_connection};
use roster_core::{Department, Employee, Title};

fn fully_related(emp_no: i64, name: &str) -> Employee {
    Employee::new(emp_no, name, 2_500_000)
        .with_title(Some(Title::new(2)))
        .with_manager(Some(Employee::key_only(4377)))
        .with_department(Some(Department::key_only(1)))
}

#[test]
fn test_insert_select_delete_scenario() {
    let (_temp_dir, roster) = create_test_roster();
    let repo = roster.employees();
    let emp = Employee::new(1010, "A", 2_500_000);

    assert_eq!(repo.insert(&emp).expect("Failed to insert employee"), 1);

    let loaded = repo
        .select_by_key(1010)
        .expect("Failed to select employee")
        .expect("Employee should exist");
    assert_eq!(loaded.emp_name, "A");
    assert_eq!(loaded.salary, 2_500_000);
    assert!(loaded.title.is_none());
    assert!(loaded.manager.is_none());
    assert!(loaded.department.is_none());

    assert_eq!(repo.delete(&emp).expect("Failed to delete employee"), 1);
    assert!(repo
        .select_by_key(1010)
        .expect("Failed to select employee")
        .is_none());
}

#[test]
fn test_select_all_empty_table() {
    let (_temp_dir, roster) = create_test_roster();

    let employees = roster
        .employees()
        .select_all()
        .expect("Failed to list employees");

    assert!(employees.is_empty());
}

#[test]
fn test_select_by_missing_key() {
    let (_temp_dir, roster) = create_test_roster();

    let loaded = roster
        .employees()
        .select_by_key(999_999)
        .expect("Missing key should not be an error");

    assert!(loaded.is_none());
}

#[test]
fn test_references_round_trip_key_only() {
    let (_temp_dir, roster) = create_test_roster();
    let repo = roster.employees();

    repo.insert(&fully_related(1013, "Shin"))
        .expect("Failed to insert employee");

    let loaded = repo
        .select_by_key(1013)
        .expect("Failed to select employee")
        .expect("Employee should exist");

    assert_eq!(loaded.title, Some(Title::new(2)));
    assert_eq!(loaded.manager.as_deref(), Some(&Employee::key_only(4377)));
    assert_eq!(loaded.department, Some(Department::key_only(1)));
    assert_eq!(loaded, fully_related(1013, "Shin"));
}

#[test]
fn test_each_reference_is_independent() {
    let (_temp_dir, roster) = create_test_roster();
    let repo = roster.employees();

    repo.insert(&Employee::new(1011, "Title only", 100).with_title(Some(Title::new(2))))
        .expect("Failed to insert employee");
    repo.insert(
        &Employee::new(1012, "Manager only", 100)
            .with_manager(Some(Employee::key_only(4377))),
    )
    .expect("Failed to insert employee");

    let title_only = repo
        .select_by_key(1011)
        .expect("Failed to select employee")
        .expect("Employee should exist");
    assert_eq!(title_only.title_no(), Some(2));
    assert_eq!(title_only.manager_no(), None);
    assert_eq!(title_only.dept_no(), None);

    let manager_only = repo
        .select_by_key(1012)
        .expect("Failed to select employee")
        .expect("Employee should exist");
    assert_eq!(manager_only.title_no(), None);
    assert_eq!(manager_only.manager_no(), Some(4377));
    assert_eq!(manager_only.dept_no(), None);
}

#[test]
fn test_absent_references_store_null() {
    let (_temp_dir, roster) = create_test_roster();
    roster
        .employees()
        .insert(&Employee::new(1010, "A", 2_500_000))
        .expect("Failed to insert employee");

    let (title, manager, dno): (Option<i64>, Option<i64>, Option<i64>) = raw_connection(&roster)
        .query_row(
            "SELECT title, manager, dno FROM employee WHERE empno = 1010",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .expect("Failed to read raw row");

    assert_eq!((title, manager, dno), (None, None, None));
}

#[test]
fn test_hydrated_references_store_only_keys() {
    let (_temp_dir, roster) = create_test_roster();
    let manager = Employee::new(4377, "Lee", 5_000_000).with_title(Some(Title::new(1)));
    let emp = Employee::new(1020, "Park", 3_000_000)
        .with_manager(Some(manager))
        .with_department(Some(Department::new(2, "Sales", 20)));

    roster
        .employees()
        .insert(&emp)
        .expect("Failed to insert employee");

    let loaded = roster
        .employees()
        .select_by_key(1020)
        .expect("Failed to select employee")
        .expect("Employee should exist");
    assert_eq!(loaded.manager.as_deref(), Some(&Employee::key_only(4377)));
    assert_eq!(loaded.department, Some(Department::key_only(2)));
}

#[test]
fn test_zero_foreign_key_reads_as_absent() {
    let (_temp_dir, roster) = create_test_roster();
    raw_connection(&roster)
        .execute(
            "INSERT INTO employee (empno, empname, title, manager, salary, dno) VALUES (2001, 'Zero', 0, 0, 1000, 0)",
            [],
        )
        .expect("Failed to insert raw row");

    let loaded = roster
        .employees()
        .select_by_key(2001)
        .expect("Failed to select employee")
        .expect("Employee should exist");

    assert!(loaded.title.is_none());
    assert!(loaded.manager.is_none());
    assert!(loaded.department.is_none());
}

#[test]
fn test_zero_keyed_references_store_zero_and_read_absent() {
    let (_temp_dir, roster) = create_test_roster();
    let emp = Employee::new(1, "Z", 1)
        .with_title(Some(Title::new(0)))
        .with_manager(Some(Employee::key_only(0)))
        .with_department(Some(Department::key_only(0)));

    roster
        .employees()
        .insert(&emp)
        .expect("Failed to insert employee");

    let raw: (Option<i64>, Option<i64>, Option<i64>) = raw_connection(&roster)
        .query_row(
            "SELECT title, manager, dno FROM employee WHERE empno = 1",
            [],
            |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)),
        )
        .expect("Failed to read raw row");
    assert_eq!(raw, (Some(0), Some(0), Some(0)));

    let loaded = roster
        .employees()
        .select_by_key(1)
        .expect("Failed to select employee")
        .expect("Employee should exist");
    assert!(loaded.title.is_none());
    assert!(loaded.manager.is_none());
    assert!(loaded.department.is_none());
}

#[test]
fn test_update_rewrites_all_fields() {
    let (_temp_dir, roster) = create_test_roster();
    let repo = roster.employees();
    let mut emp = fully_related(1015, "Shin");
    repo.insert(&emp).expect("Failed to insert employee");

    emp.emp_name = "Choi".to_string();
    emp.salary = 1_500_000;
    emp.title = Some(Title::new(1));
    emp.manager = Some(Box::new(Employee::key_only(1005)));
    emp.department = Some(Department::key_only(2));
    assert_eq!(repo.update(&emp).expect("Failed to update employee"), 1);

    let loaded = repo
        .select_by_key(1015)
        .expect("Failed to select employee")
        .expect("Employee should exist");
    assert_eq!(loaded, emp);
}

#[test]
fn test_update_clears_references() {
    let (_temp_dir, roster) = create_test_roster();
    let repo = roster.employees();
    repo.insert(&fully_related(1016, "Shin"))
        .expect("Failed to insert employee");

    let cleared = Employee::new(1016, "Shin", 2_500_000);
    assert_eq!(repo.update(&cleared).expect("Failed to update employee"), 1);

    let loaded = repo
        .select_by_key(1016)
        .expect("Failed to select employee")
        .expect("Employee should exist");
    assert!(loaded.title.is_none());
    assert!(loaded.manager.is_none());
    assert!(loaded.department.is_none());
}

#[test]
fn test_update_and_delete_missing_key() {
    let (_temp_dir, roster) = create_test_roster();
    let repo = roster.employees();
    let ghost = Employee::new(999_999, "Ghost", 0);

    assert_eq!(repo.update(&ghost).expect("Update should not fail"), 0);
    assert_eq!(repo.delete(&ghost).expect("Delete should not fail"), 0);
}

#[test]
fn test_select_all_maps_every_row() {
    let (_temp_dir, roster) = create_test_roster();
    let repo = roster.employees();
    repo.insert(&Employee::new(1010, "A", 2_500_000))
        .expect("Failed to insert employee");
    repo.insert(&fully_related(1013, "B"))
        .expect("Failed to insert employee");

    let mut employees = repo.select_all().expect("Failed to list employees");
    employees.sort_by_key(|e| e.emp_no);

    assert_eq!(employees.len(), 2);
    assert_eq!(employees[0].manager_no(), None);
    assert_eq!(employees[1].manager_no(), Some(4377));
}

#[test]
fn test_insert_duplicate_key_is_storage_error() {
    let (_temp_dir, roster) = create_test_roster();
    let repo = roster.employees();
    repo.insert(&Employee::new(1010, "A", 2_500_000))
        .expect("Failed to insert employee");

    let err = repo
        .insert(&Employee::new(1010, "B", 1))
        .expect_err("Duplicate key should fail");

    assert!(err.is_storage());
}

#[test]
fn test_missing_table_is_storage_error() {
    let (_temp_dir, roster) = create_test_roster();
    raw_connection(&roster)
        .execute_batch("DROP TABLE employee")
        .expect("Failed to drop table");

    let err = roster
        .employees()
        .insert(&Employee::new(1010, "A", 2_500_000))
        .expect_err("Insert into a missing table should fail");
    assert!(err.is_storage());
}
