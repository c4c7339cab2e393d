use super::list::show;
use crate::{
    db::db::Db,
    libs::{messages::Message, view::View},
};
use anyhow::Result;
use clap::{Args, Subcommand};

#[derive(Debug, Args)]
pub struct FilterArgs {
    #[command(subcommand)]
    command: FilterCommand,
}

#[derive(Debug, Subcommand)]
enum FilterCommand {
    /// Products whose nutrient value lies in the range
    Products {
        #[arg(long)]
        from: f64,
        #[arg(long)]
        to: f64,
        /// Nutrient selector: c(arbohydrates), f(ats), p(roteins), k(ilocalories)
        #[arg(long, default_value_t = 'k')]
        by: char,
    },
    /// Recipes whose nutrient total lies in the range
    Recipes {
        #[arg(long)]
        from: f64,
        #[arg(long)]
        to: f64,
        /// Nutrient selector: c(arbohydrates), f(ats), p(roteins), k(ilocalories)
        #[arg(long, default_value_t = 'k')]
        by: char,
    },
    /// Activities whose kcal/kg/min lies in the range
    Activities {
        #[arg(long)]
        from: f64,
        #[arg(long)]
        to: f64,
    },
}

pub fn cmd(db: &mut Db, args: FilterArgs) -> Result<()> {
    match args.command {
        FilterCommand::Products { from, to, by } => {
            show(db.products().filter_range(from, to, by), Message::ProductsHeader, View::products)
        }
        FilterCommand::Recipes { from, to, by } => {
            show(db.recipes().filter_range(from, to, by), Message::RecipesHeader, View::recipes)
        }
        FilterCommand::Activities { from, to } => {
            show(db.activities().filter_range(from, to), Message::ActivitiesHeader, View::activities)
        }
    }
}
