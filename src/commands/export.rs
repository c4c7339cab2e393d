use crate::{
    db::db::Db,
    libs::messages::Message,
    msg_success,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Destination file
    file: PathBuf,
}

pub fn cmd(db: &mut Db, args: ExportArgs) -> Result<()> {
    db.export_to(&args.file)?;
    msg_success!(Message::ExportCompleted(args.file.display().to_string()));
    Ok(())
}
