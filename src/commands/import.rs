use crate::{
    db::db::Db,
    libs::messages::Message,
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Database file to copy over the current store
    file: PathBuf,
}

pub fn cmd(db: &mut Db, args: ImportArgs) -> Result<()> {
    db.import_from(&args.file)?;
    msg_success!(Message::ImportCompleted(args.file.display().to_string()));
    Ok(())
}
