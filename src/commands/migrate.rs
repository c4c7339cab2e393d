use crate::{
    db::db::Db,
    libs::messages::Message,
    msg_info, msg_success,
};
use anyhow::Result;

pub fn cmd(db: &mut Db) -> Result<()> {
    let added = db.extend_examination_columns()?;
    if added.is_empty() {
        msg_info!(Message::ExaminationColumnsUpToDate);
    } else {
        msg_success!(Message::ExaminationColumnsAdded(added));
    }
    Ok(())
}
