//! Whole-store import and export.
//!
//! Both operations swap or copy the database *file*. Neither one re-runs the
//! schema manager: an imported file is trusted to carry the expected tables.
//! Callers must not run other store operations concurrently.

use super::db::{open_existing, Db};
use super::error::{DbError, Result};
use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_warning};
use std::fs;
use std::path::Path;

impl Db {
    /// Replaces the canonical store with a copy of `source`.
    ///
    /// `source` must open as a SQLite database, otherwise the canonical
    /// store is left untouched. On success the old canonical file is
    /// deleted, `source` is copied into its place and the handle reconnects
    /// to it. Every failure is also recorded in the error log.
    pub fn import_from(&mut self, source: impl AsRef<Path>) -> Result<()> {
        let result = self.swap_in(source.as_ref());
        self.track("Db::import_from", result)
    }

    /// Copies the canonical store file to `destination`.
    pub fn export_to(&mut self, destination: impl AsRef<Path>) -> Result<()> {
        let destination = destination.as_ref();
        let result = if destination.as_os_str().is_empty() {
            Err(DbError::EmptyPath)
        } else {
            fs::copy(self.path(), destination).map(|_| ()).map_err(|e| {
                msg_error!(Message::ExportFailed(destination.display().to_string(), e.to_string()));
                DbError::io(destination, e)
            })
        };
        if result.is_ok() {
            msg_debug!(Message::ExportCompleted(destination.display().to_string()));
        }
        self.track("Db::export_to", result)
    }

    fn swap_in(&mut self, source: &Path) -> Result<()> {
        if source.as_os_str().is_empty() {
            msg_warning!(Message::ImportEmptyPath);
            return Err(DbError::EmptyPath);
        }

        match open_existing(source) {
            Ok(check) => drop(check),
            Err(e) => {
                msg_warning!(Message::ImportUnreadable(source.display().to_string(), e.to_string()));
                return Err(DbError::ImportUnreadable {
                    path: source.display().to_string(),
                    reason: e.to_string(),
                });
            }
        }

        if same_file(source, self.path()) {
            msg_debug!(Message::ImportCompleted(source.display().to_string()));
            return Ok(());
        }

        let canonical = self.path().to_path_buf();
        // release the handle before replacing the file underneath it
        self.conn = None;

        if canonical.exists() {
            if let Err(e) = fs::remove_file(&canonical) {
                msg_error!(Message::ImportRemoveFailed(canonical.display().to_string(), e.to_string()));
                self.conn = open_existing(&canonical).ok();
                return Err(DbError::io(&canonical, e));
            }
        } else {
            msg_warning!(Message::ImportOldFileMissing(canonical.display().to_string()));
        }

        if let Err(e) = fs::copy(source, &canonical) {
            msg_error!(Message::ImportCopyFailed(source.display().to_string(), e.to_string()));
            self.conn = self.connect_healing();
            return Err(DbError::io(source, e));
        }

        self.conn = Some(open_existing(&canonical)?);
        msg_debug!(Message::ImportCompleted(source.display().to_string()));
        Ok(())
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
