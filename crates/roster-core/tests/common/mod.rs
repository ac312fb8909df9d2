#![allow(dead_code)]

use roster_core::{Roster, RosterBuilder};
use rusqlite::Connection;
use tempfile::TempDir;

/// Helper function to create a test roster backed by a fresh database file
pub fn create_test_roster() -> (TempDir, Roster) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let roster = RosterBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to create roster");
    (temp_dir, roster)
}

/// Opens a raw connection to the roster's database, bypassing the
/// repositories
pub fn raw_connection(roster: &Roster) -> Connection {
    Connection::open(roster.database_path()).expect("Failed to open raw connection")
}
