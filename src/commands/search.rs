use super::{list::show, EntityKind};
use crate::{
    db::db::Db,
    libs::{messages::Message, view::View},
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// What to search
    #[arg(value_enum)]
    kind: EntityKind,
    /// Name fragments; a record is shown once per fragment it contains
    #[arg(required = true)]
    terms: Vec<String>,
}

pub fn cmd(db: &mut Db, args: SearchArgs) -> Result<()> {
    let terms = args.terms;
    match args.kind {
        EntityKind::Clients => show(db.clients().search(&terms.join(" ")), Message::ClientsHeader, View::clients),
        EntityKind::Products => show(db.products().search(terms.as_slice()), Message::ProductsHeader, View::products),
        EntityKind::Recipes => show(db.recipes().search(terms.as_slice()), Message::RecipesHeader, View::recipes),
        EntityKind::Activities => show(db.activities().search(terms.as_slice()), Message::ActivitiesHeader, View::activities),
        EntityKind::Examinations => {
            // examinations have no name; search their clients and list those
            let clients = db.clients().search(&terms.join(" "));
            let mut examinations = Vec::new();
            for client in clients.iter().filter_map(|c| c.id) {
                examinations.extend(db.examinations().list_for_client(client));
            }
            show(examinations, Message::ExaminationsHeader, View::examinations)
        }
    }
}
