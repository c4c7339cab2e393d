//! Connection lifecycle.
//!
//! [`Db`] owns the single SQLite connection to the canonical store file, the
//! examination form the schema was built from, and the deferred error log.
//! Opening never fails outright: a missing file is created with an empty
//! schema, an unreadable one is deleted and recreated, and if even that does
//! not produce a usable connection the handle stays *degraded* and every
//! operation returns [`DbError::NotConnected`].

use super::error::{DbError, Result};
use super::error_log::ErrorLog;
use super::schema;
use crate::libs::config::Config;
use crate::libs::form_field::FormSchema;
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_warning};
use rusqlite::{Connection, OpenFlags, Params};
use std::fs;
use std::path::{Path, PathBuf};

pub const DB_FILE_NAME: &str = "db.sqlite";

/// Oldest SQLite with enforced `ON DELETE CASCADE` foreign keys.
const MIN_SQLITE_VERSION: i32 = 3_006_019;

pub struct Db {
    pub(crate) conn: Option<Connection>,
    path: PathBuf,
    form: FormSchema,
    pub(crate) errors: ErrorLog,
}

impl Db {
    /// Opens the canonical store described by `config.json`.
    ///
    /// Only configuration problems are errors here; connection problems
    /// leave a degraded handle instead.
    pub fn new() -> anyhow::Result<Db> {
        let config = Config::read()?;
        Ok(Db::open(config.database_path()?, config.form_schema()?))
    }

    /// Opens (creating or recreating if needed) the store at `path`.
    pub fn open(path: impl Into<PathBuf>, form: FormSchema) -> Db {
        let mut db = Db {
            conn: None,
            path: path.into(),
            form,
            errors: ErrorLog::new(),
        };

        if !driver_available() {
            msg_error!(Message::DbDriverUnavailable(rusqlite::version().to_string()));
            return db;
        }

        db.conn = db.connect_healing();
        db
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn form(&self) -> &FormSchema {
        &self.form
    }

    pub fn is_connected(&self) -> bool {
        self.conn.is_some()
    }

    /// `true` while the deferred error log holds undrained entries.
    pub fn has_unwatched_error(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Takes every logged failure, oldest first, leaving the log empty.
    pub fn drain_errors(&mut self) -> Vec<String> {
        self.errors.drain()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Adds columns for form fields that the `Examinations` table lacks.
    ///
    /// Never runs on its own; a changed form definition only reaches an
    /// existing file through this call.
    pub fn extend_examination_columns(&mut self) -> Result<Vec<String>> {
        let result = self
            .conn()
            .and_then(|conn| schema::add_missing_examination_columns(conn, &self.form).map_err(DbError::from));
        let added = self.track("Db::extend_examination_columns", result)?;
        Ok(added)
    }

    pub(crate) fn conn(&self) -> Result<&Connection> {
        self.conn.as_ref().ok_or(DbError::NotConnected)
    }

    pub(crate) fn conn_mut(&mut self) -> Result<&mut Connection> {
        self.conn.as_mut().ok_or(DbError::NotConnected)
    }

    /// Records a failed `result` in the error log under `operation` and
    /// passes it through unchanged.
    pub(crate) fn track<T>(&mut self, operation: &str, result: Result<T>) -> Result<T> {
        if let Err(e) = &result {
            self.errors.record(Message::QueryFailed(operation.to_string(), e.to_string()));
        }
        result
    }

    /// Runs a query returning one integer id per row.
    pub(crate) fn query_ids<P: Params>(&self, sql: &str, params: P) -> Result<Vec<i64>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(sql)?;
        let ids = stmt.query_map(params, |row| row.get::<_, i64>(0))?;
        Ok(ids.collect::<rusqlite::Result<Vec<_>>>()?)
    }

    /// Connects to the canonical file, creating or recreating it as needed.
    pub(crate) fn connect_healing(&mut self) -> Option<Connection> {
        if !self.path.exists() {
            self.initialize_empty();
        }

        match open_existing(&self.path) {
            Ok(conn) => {
                if let Err(e) = schema::heal_missing_tables(&conn, &self.form) {
                    msg_error!(Message::DbOpenFailed(self.path.display().to_string(), e.to_string()));
                }
                msg_debug!(Message::DbReady(self.path.display().to_string()));
                Some(conn)
            }
            Err(e) => {
                msg_warning!(Message::DbOpenFailed(self.path.display().to_string(), e.to_string()));
                if let Err(e) = fs::remove_file(&self.path) {
                    msg_error!(Message::DbRemoveCorruptFailed(self.path.display().to_string(), e.to_string()));
                }
                self.initialize_empty();
                match open_existing(&self.path) {
                    Ok(conn) => {
                        msg_warning!(Message::DbReinitialized(self.path.display().to_string()));
                        Some(conn)
                    }
                    Err(e) => {
                        msg_error!(Message::DbOpenFailed(self.path.display().to_string(), e.to_string()));
                        None
                    }
                }
            }
        }
    }

    /// Writes an empty schema to the canonical path.
    fn initialize_empty(&self) {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(e) = fs::create_dir_all(parent) {
                msg_error!(Message::DbOpenFailed(self.path.display().to_string(), e.to_string()));
                return;
            }
        }
        match Connection::open(&self.path) {
            Ok(conn) => {
                schema::create_tables(&conn, &self.form);
                msg_debug!(Message::DbCreated(self.path.display().to_string()));
            }
            Err(e) => msg_error!(Message::DbOpenFailed(self.path.display().to_string(), e.to_string())),
        }
    }
}

fn driver_available() -> bool {
    rusqlite::version_number() >= MIN_SQLITE_VERSION
}

/// Opens an existing database file and proves it is readable.
///
/// SQLite defers header validation to the first statement, so a trivial query
/// runs before the connection is handed out. Foreign keys are switched on
/// for the connection's lifetime.
pub(crate) fn open_existing(path: &Path) -> rusqlite::Result<Connection> {
    let flags = OpenFlags::default().difference(OpenFlags::SQLITE_OPEN_CREATE);
    let conn = Connection::open_with_flags(path, flags)?;
    conn.query_row("SELECT count(*) FROM sqlite_master", [], |row| row.get::<_, i64>(0))?;
    conn.pragma_update(None, "foreign_keys", true)?;
    Ok(conn)
}
