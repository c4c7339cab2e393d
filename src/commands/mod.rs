//! Command line front-end.
//!
//! Every command except `init` runs against one store handle; afterwards any
//! failures the store logged are drained and printed.

pub mod errors;
pub mod export;
pub mod filter;
pub mod import;
pub mod init;
pub mod list;
pub mod migrate;
pub mod search;

use crate::{db::db::Db, libs::messages::Message, msg_warning};
use clap::{Parser, Subcommand, ValueEnum};

/// Entity tables addressable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum EntityKind {
    Clients,
    Examinations,
    Products,
    Recipes,
    Activities,
}

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Write the default configuration and create the store")]
    Init(init::InitArgs),
    #[command(about = "Replace the store with a copy of another database file", arg_required_else_help = true)]
    Import(import::ImportArgs),
    #[command(about = "Copy the store to another file", arg_required_else_help = true)]
    Export(export::ExportArgs),
    #[command(about = "List every record of one kind", arg_required_else_help = true)]
    List(list::ListArgs),
    #[command(about = "Search records by name", arg_required_else_help = true)]
    Search(search::SearchArgs),
    #[command(about = "Filter products, recipes or activities by a value range", arg_required_else_help = true)]
    Filter(filter::FilterArgs),
    #[command(about = "Add examination columns for new form fields")]
    Migrate,
    #[command(about = "Show store errors logged while opening")]
    Errors,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> anyhow::Result<()> {
        let cli = Self::parse();
        if let Commands::Init(args) = cli.command {
            return init::cmd(args);
        }

        let mut db = Db::new()?;
        if !db.is_connected() {
            msg_warning!(Message::DbNotConnected);
        }
        let result = match cli.command {
            Commands::Init(_) => Ok(()),
            Commands::Import(args) => import::cmd(&mut db, args),
            Commands::Export(args) => export::cmd(&mut db, args),
            Commands::List(args) => list::cmd(&mut db, args),
            Commands::Search(args) => search::cmd(&mut db, args),
            Commands::Filter(args) => filter::cmd(&mut db, args),
            Commands::Migrate => migrate::cmd(&mut db),
            Commands::Errors => Ok(()),
        };
        errors::cmd(&mut db)?;
        result
    }
}
