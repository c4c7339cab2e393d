use crate::{
    db::db::Db,
    libs::{messages::Message, view::View},
    msg_error, msg_debug,
};
use anyhow::Result;

/// Drains the store's error log and prints what was in it.
pub fn cmd(db: &mut Db) -> Result<()> {
    if !db.has_unwatched_error() {
        msg_debug!(Message::NoUnwatchedErrors);
        return Ok(());
    }
    let errors = db.drain_errors();
    msg_error!(Message::UnwatchedErrorsHeader(errors.len()), true);
    View::errors(&errors)
}
