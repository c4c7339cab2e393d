//! Text representations of dates stored in SQLite columns.
//!
//! Dates and timestamps are ISO 8601 without offset (`2024-03-01`,
//! `2024-03-01T12:30:00`, `2024-03-01T12:30:00.250`) so files stay readable
//! by other SQLite tools and sort correctly as text. The fraction is written
//! only when non-zero.
//!
//! Reading goes through rusqlite's `FromSql` impls for `NaiveDate` and
//! `NaiveDateTime`, which accept this layout as well as a space separator.

use chrono::{NaiveDate, NaiveDateTime};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

pub fn encode_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn encode_datetime(datetime: NaiveDateTime) -> String {
    datetime.format(DATETIME_FORMAT).to_string()
}
