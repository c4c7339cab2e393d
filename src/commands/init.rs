//! Configuration initialization command.
//!
//! Writes `config.json` (keeping an existing one's values) and opens the
//! store once so the database file and its tables exist.

use crate::{
    db::db::Db,
    libs::{config::Config, messages::Message},
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Overwrite an existing configuration with defaults
    #[arg(short, long)]
    reset: bool,
}

pub fn cmd(init_args: InitArgs) -> Result<()> {
    let config = if init_args.reset { Config::default() } else { Config::read()? };
    let path = config.save()?;
    msg_success!(Message::ConfigSaved(path.display().to_string()));

    let db = Db::open(config.database_path()?, config.form_schema()?);
    if db.is_connected() {
        msg_info!(Message::DbReady(db.path().display().to_string()));
    } else {
        msg_error!(Message::DbNotConnected);
    }
    Ok(())
}
