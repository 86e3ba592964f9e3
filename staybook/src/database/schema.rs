//! Database schema definitions and SQL constants.
//!
//! This module contains the SQL table definitions, indices, and statements
//! used by the booking store.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the bookings table.
///
/// `id` is a surrogate key; its ascending order is the store's default
/// ordering. Dates are stored as `YYYY-MM-DD` text.
pub const CREATE_BOOKINGS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS bookings (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        guest_name TEXT NOT NULL,
        unit_id TEXT NOT NULL,
        check_in_date TEXT NOT NULL,
        number_of_nights INTEGER NOT NULL CHECK (number_of_nights > 0),
        created_at INTEGER NOT NULL
    )";

/// Index for the same-guest lookup.
pub const CREATE_GUEST_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_bookings_guest ON bookings(guest_name)";

/// Index for the same-unit lookup.
pub const CREATE_UNIT_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_bookings_unit ON bookings(unit_id)";

/// Index for the guest/unit and exact-stay lookups.
pub const CREATE_STAY_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_bookings_stay ON bookings(guest_name, unit_id, check_in_date)";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";

/// Column list shared by every booking query, in `row_to_booking` order.
pub const SELECT_BOOKINGS: &str = r"
    SELECT id, guest_name, unit_id, check_in_date, number_of_nights
    FROM bookings
";

/// SQL statement to insert a booking.
pub const INSERT_BOOKING: &str = r"
    INSERT INTO bookings (guest_name, unit_id, check_in_date, number_of_nights, created_at)
    VALUES (?, ?, ?, ?, ?)
";

/// SQL statement to change the night count of a booking.
pub const UPDATE_NIGHTS: &str = r"
    UPDATE bookings
    SET number_of_nights = ?
    WHERE id = ?
";
