//! Parameter binding and column decoding for optional relationships.
//!
//! Foreign-key columns use NULL for "no relationship". On read, a stored `0`
//! is treated the same as NULL. Both collapse to `None`, so a row that really
//! points at key 0 cannot be told apart from an unrelated row.

use rusqlite::Row;

use crate::models::Keyed;

/// Sentinel value in a foreign-key column meaning "no relationship".
pub(crate) const NO_RELATIONSHIP: i64 = 0;

/// Value to bind for an optional reference. `None` binds as SQL NULL.
///
/// Only the key of the referenced entity is read, so key-only and fully
/// populated references bind identically.
pub(crate) fn foreign_key<K: Keyed + ?Sized>(reference: Option<&K>) -> Option<i64> {
    reference.map(|r| r.key())
}

/// Reads a foreign-key column, mapping both NULL and [`NO_RELATIONSHIP`] to
/// `None`.
pub(crate) fn reference_key(row: &Row<'_>, index: usize) -> rusqlite::Result<Option<i64>> {
    let value: Option<i64> = row.get(index)?;
    Ok(value.filter(|key| *key != NO_RELATIONSHIP))
}

#[cfg(test)]
mod tests {
    use rusqlite::Connection;

    use super::*;
    use crate::models::{Department, Employee, Title};

    fn decode(sql: &str) -> Option<i64> {
        let conn = Connection::open_in_memory().expect("Failed to open in-memory database");
        conn.query_row(sql, [], |row| reference_key(row, 0))
            .expect("Failed to decode column")
    }

    #[test]
    fn test_foreign_key_absent_binds_null() {
        assert_eq!(foreign_key::<Title>(None), None);
        assert_eq!(foreign_key::<Employee>(None), None);
    }

    #[test]
    fn test_foreign_key_reads_only_the_key() {
        let hydrated = Department::new(3, "Marketing", 10);
        let key_only = Department::key_only(3);

        assert_eq!(foreign_key(Some(&hydrated)), Some(3));
        assert_eq!(foreign_key(Some(&key_only)), Some(3));
        assert_eq!(foreign_key(Some(&Title::new(2))), Some(2));
    }

    #[test]
    fn test_reference_key_null_is_absent() {
        assert_eq!(decode("SELECT NULL"), None);
    }

    #[test]
    fn test_reference_key_zero_is_absent() {
        assert_eq!(decode("SELECT 0"), None);
    }

    #[test]
    fn test_reference_key_present() {
        assert_eq!(decode("SELECT 4377"), Some(4377));
    }
}
