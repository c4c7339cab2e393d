use super::EntityKind;
use crate::{
    db::db::Db,
    libs::{messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// What to list
    #[arg(value_enum)]
    kind: EntityKind,
}

pub fn cmd(db: &mut Db, args: ListArgs) -> Result<()> {
    match args.kind {
        EntityKind::Clients => show(db.clients().list(), Message::ClientsHeader, View::clients),
        EntityKind::Examinations => show(db.examinations().list(), Message::ExaminationsHeader, View::examinations),
        EntityKind::Products => show(db.products().list(), Message::ProductsHeader, View::products),
        EntityKind::Recipes => show(db.recipes().list(), Message::RecipesHeader, View::recipes),
        EntityKind::Activities => show(db.activities().list(), Message::ActivitiesHeader, View::activities),
    }
}

/// Prints `header` and the table, or a "nothing found" note for no rows.
pub(crate) fn show<T>(rows: Vec<T>, header: Message, render: impl Fn(&[T]) -> Result<()>) -> Result<()> {
    if rows.is_empty() {
        msg_info!(Message::NothingFound);
        return Ok(());
    }
    msg_print!(header, true);
    render(&rows)
}
