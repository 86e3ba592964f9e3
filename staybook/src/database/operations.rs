//! Booking queries and mutations against `SQLite`.
//!
//! [`BookingStore`] is implemented for `rusqlite::Connection`; because
//! `rusqlite::Transaction` dereferences to a connection, the same code runs
//! inside the per-request transaction.

use rusqlite::types::{Type, Value};
use rusqlite::{params, params_from_iter, Connection};

use crate::error::{Error, Result};
use crate::store::{BookingFilter, BookingStore};
use crate::Booking;

use super::connection::Database;
use super::schema::{INSERT_BOOKING, SELECT_BOOKINGS, UPDATE_NIGHTS};

/// Deserializes a booking from a row of [`SELECT_BOOKINGS`].
///
/// Expects: id, `guest_name`, `unit_id`, `check_in_date`, `number_of_nights`
fn row_to_booking(row: &rusqlite::Row<'_>) -> rusqlite::Result<Booking> {
    let id: i64 = row.get(0)?;
    let guest_name: String = row.get(1)?;
    let unit_id: String = row.get(2)?;
    let check_in_date: chrono::NaiveDate = row.get(3)?;
    let number_of_nights: u32 = row.get(4)?;

    Booking::new(guest_name, unit_id, check_in_date, number_of_nights)
        .map(|booking| booking.with_id(id))
        .map_err(|e| rusqlite::Error::FromSqlConversionFailure(4, Type::Integer, Box::new(e)))
}

/// Builds the WHERE clause and bound values for a filter.
fn filter_clause(filter: &BookingFilter) -> (&'static str, Vec<Value>) {
    match filter {
        BookingFilter::All => ("", Vec::new()),
        BookingFilter::GuestAndUnit {
            guest_name,
            unit_id,
        } => (
            "WHERE guest_name = ? AND unit_id = ?",
            vec![Value::Text(guest_name.clone()), Value::Text(unit_id.clone())],
        ),
        BookingFilter::Guest { guest_name } => {
            ("WHERE guest_name = ?", vec![Value::Text(guest_name.clone())])
        }
        BookingFilter::Unit { unit_id } => {
            ("WHERE unit_id = ?", vec![Value::Text(unit_id.clone())])
        }
        BookingFilter::Exact {
            guest_name,
            unit_id,
            check_in_date,
        } => (
            "WHERE guest_name = ? AND unit_id = ? AND check_in_date = ?",
            vec![
                Value::Text(guest_name.clone()),
                Value::Text(unit_id.clone()),
                // same text form rusqlite writes for NaiveDate
                Value::Text(check_in_date.format("%Y-%m-%d").to_string()),
            ],
        ),
    }
}

fn query_bookings(
    conn: &Connection,
    filter: &BookingFilter,
    limit: Option<usize>,
) -> Result<Vec<Booking>> {
    let (clause, values) = filter_clause(filter);
    let limit = limit.map(|n| format!(" LIMIT {n}")).unwrap_or_default();
    let sql = format!("{SELECT_BOOKINGS} {clause} ORDER BY id{limit}");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(params_from_iter(values.iter()), row_to_booking)?;
    let bookings = rows.collect::<rusqlite::Result<Vec<_>>>()?;
    Ok(bookings)
}

impl BookingStore for Connection {
    fn find_one(&self, filter: &BookingFilter) -> Result<Option<Booking>> {
        Ok(query_bookings(self, filter, Some(1))?.into_iter().next())
    }

    fn find_all(&self, filter: &BookingFilter) -> Result<Vec<Booking>> {
        query_bookings(self, filter, None)
    }

    fn insert(&self, booking: &Booking) -> Result<Booking> {
        self.execute(
            INSERT_BOOKING,
            params![
                booking.guest_name(),
                booking.unit_id(),
                booking.check_in_date(),
                booking.number_of_nights(),
                chrono::Utc::now().timestamp(),
            ],
        )?;
        let id = self.last_insert_rowid();
        log::debug!("Inserted booking {id}: {booking}");
        Ok(booking.clone().with_id(id))
    }

    fn update(&self, booking: &Booking) -> Result<()> {
        let id = booking.id().ok_or_else(|| Error::NotFound {
            resource: format!("persisted booking for {booking}"),
        })?;

        let rows_affected = self.execute(UPDATE_NIGHTS, params![booking.number_of_nights(), id])?;
        if rows_affected == 0 {
            return Err(Error::NotFound {
                resource: format!("booking {id}"),
            });
        }
        log::debug!("Updated booking {id}: {booking}");
        Ok(())
    }
}

impl Database {
    /// Lists bookings matching `filter` in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use staybook::database::{Database, DatabaseConfig};
    /// use staybook::BookingFilter;
    ///
    /// let db = Database::open(DatabaseConfig::new("/tmp/staybook.db")).unwrap();
    /// for booking in db.list_bookings(&BookingFilter::All).unwrap() {
    ///     println!("{booking}");
    /// }
    /// ```
    pub fn list_bookings(&self, filter: &BookingFilter) -> Result<Vec<Booking>> {
        self.conn.find_all(filter)
    }
}
