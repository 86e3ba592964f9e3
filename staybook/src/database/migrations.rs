//! Schema versioning.
//!
//! A database is either fresh (no `metadata` table), at
//! [`CURRENT_SCHEMA_VERSION`], or at a version this build cannot read.

use rusqlite::{Connection, OptionalExtension};

use crate::error::{Error, Result};

use super::schema::{
    CREATE_BOOKINGS_TABLE, CREATE_GUEST_INDEX, CREATE_METADATA_TABLE, CREATE_STAY_INDEX,
    CREATE_UNIT_INDEX, INSERT_SCHEMA_VERSION, SELECT_SCHEMA_VERSION,
};

pub use super::schema::CURRENT_SCHEMA_VERSION;

/// What [`inspect_schema`] found in a database.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaState {
    /// No schema yet.
    Fresh,
    /// The schema this build writes.
    Current,
    /// A schema written by another build.
    Unsupported(u32),
}

fn metadata_table_exists(conn: &Connection) -> Result<bool> {
    let found: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'metadata'",
            [],
            |row| row.get(0),
        )
        .optional()?;
    Ok(found.is_some())
}

/// Reads the stored schema version.
///
/// # Errors
///
/// Returns an error if the query fails or the stored version is not a number.
pub fn inspect_schema(conn: &Connection) -> Result<SchemaState> {
    if !metadata_table_exists(conn)? {
        return Ok(SchemaState::Fresh);
    }

    let stored: Option<String> = conn
        .query_row(SELECT_SCHEMA_VERSION, [], |row| row.get(0))
        .optional()?;

    let Some(stored) = stored else {
        return Ok(SchemaState::Fresh);
    };

    let version = stored.trim().parse::<u32>().map_err(|_| Error::Validation {
        field: "schema_version".into(),
        message: format!("stored schema version {stored:?} is not a number"),
    })?;

    Ok(if version == CURRENT_SCHEMA_VERSION {
        SchemaState::Current
    } else {
        SchemaState::Unsupported(version)
    })
}

fn create_schema(conn: &Connection) -> Result<()> {
    for statement in [
        CREATE_METADATA_TABLE,
        CREATE_BOOKINGS_TABLE,
        CREATE_GUEST_INDEX,
        CREATE_UNIT_INDEX,
        CREATE_STAY_INDEX,
    ] {
        conn.execute(statement, [])?;
    }
    conn.execute(INSERT_SCHEMA_VERSION, [CURRENT_SCHEMA_VERSION])?;
    log::debug!("created booking schema v{CURRENT_SCHEMA_VERSION}");
    Ok(())
}

/// Creates the schema on a fresh database and verifies it otherwise.
///
/// # Errors
///
/// Returns [`Error::UnsupportedSchemaVersion`] for a database written by
/// another schema version, or an error if a statement fails.
///
/// # Examples
///
/// ```
/// use rusqlite::Connection;
/// use staybook::database::migrations::{ensure_schema, inspect_schema, SchemaState};
///
/// let conn = Connection::open_in_memory().unwrap();
/// ensure_schema(&conn).unwrap();
/// assert_eq!(inspect_schema(&conn).unwrap(), SchemaState::Current);
/// ```
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    match inspect_schema(conn)? {
        SchemaState::Fresh => create_schema(conn),
        SchemaState::Current => Ok(()),
        SchemaState::Unsupported(found) => Err(Error::UnsupportedSchemaVersion {
            expected: CURRENT_SCHEMA_VERSION,
            found,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fresh() -> Connection {
        Connection::open_in_memory().unwrap()
    }

    #[test]
    fn test_fresh_then_current() {
        let conn = fresh();
        assert_eq!(inspect_schema(&conn).unwrap(), SchemaState::Fresh);

        ensure_schema(&conn).unwrap();
        assert_eq!(inspect_schema(&conn).unwrap(), SchemaState::Current);

        // second call is a no-op
        ensure_schema(&conn).unwrap();
    }

    #[test]
    fn test_other_version_refused() {
        let conn = fresh();
        ensure_schema(&conn).unwrap();
        conn.execute(
            "UPDATE metadata SET value = '999' WHERE key = 'schema_version'",
            [],
        )
        .unwrap();

        assert_eq!(inspect_schema(&conn).unwrap(), SchemaState::Unsupported(999));
        assert!(matches!(
            ensure_schema(&conn).unwrap_err(),
            Error::UnsupportedSchemaVersion {
                expected: 1,
                found: 999
            }
        ));
    }

    #[test]
    fn test_garbage_version_is_an_error() {
        let conn = fresh();
        ensure_schema(&conn).unwrap();
        conn.execute(
            "UPDATE metadata SET value = 'one' WHERE key = 'schema_version'",
            [],
        )
        .unwrap();

        assert!(inspect_schema(&conn).is_err());
    }

    #[test]
    fn test_lookup_indices_exist() {
        let conn = fresh();
        ensure_schema(&conn).unwrap();

        let mut stmt = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'index' AND tbl_name = 'bookings' AND name LIKE 'idx_%' ORDER BY name")
            .unwrap();
        let names: Vec<String> = stmt
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap();
        assert_eq!(
            names,
            ["idx_bookings_guest", "idx_bookings_stay", "idx_bookings_unit"]
        );
    }

    #[test]
    fn test_zero_nights_violates_check_constraint() {
        let conn = fresh();
        ensure_schema(&conn).unwrap();

        let result = conn.execute(
            "INSERT INTO bookings (guest_name, unit_id, check_in_date, number_of_nights, created_at) \
             VALUES ('A', '1', '2023-05-21', 0, 0)",
            [],
        );
        assert!(result.is_err());
    }
}
