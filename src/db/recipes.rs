//! Recipe repository.
//!
//! A recipe spans three tables: the `Recipes` row, its numbered
//! `CookingPoints`, and the `ProductsInRecipes` ingredient links. Inserting
//! writes all three inside one transaction; if any phase fails nothing is
//! kept and the error names the phase.

use super::db::Db;
use super::error::{DbError, RecipePhase, Result};
use super::products::product_from_row;
use super::search::contains_pattern;
use crate::libs::messages::Message;
use crate::libs::product::{Nutrient, WeightedProduct};
use crate::libs::recipe::Recipe;
use crate::{msg_debug, msg_warning};
use rusqlite::{params, Connection, OptionalExtension, Transaction};

const INSERT_RECIPE: &str = "INSERT INTO Recipes (name) VALUES (?1)";
const INSERT_COOKING_POINT: &str = "INSERT INTO CookingPoints (recipe_id, point_num, description) VALUES (?1, ?2, ?3)";
const INSERT_PRODUCT_IN_RECIPE: &str = "INSERT INTO ProductsInRecipes (recipe_id, product_id, amound) VALUES (?1, ?2, ?3)";
const SELECT_RECIPE_BY_ID: &str = "SELECT id, name FROM Recipes WHERE id = ?1";
const SELECT_RECIPE_PRODUCTS: &str = "
    SELECT p.*, pr.amound FROM ProductsInRecipes pr
    JOIN Products p ON p.id = pr.product_id
    WHERE pr.recipe_id = ?1
    ORDER BY pr.rowid
";
const SELECT_COOKING_POINTS: &str = "SELECT description FROM CookingPoints WHERE recipe_id = ?1 ORDER BY point_num";
const SELECT_RECIPE_IDS: &str = "SELECT id FROM Recipes";
const SEARCH_RECIPE_IDS: &str = "SELECT id FROM Recipes WHERE name LIKE ?1 ESCAPE '\\'";

pub struct Recipes<'a> {
    db: &'a mut Db,
}

impl Db {
    pub fn recipes(&mut self) -> Recipes<'_> {
        Recipes { db: self }
    }
}

impl Recipes<'_> {
    /// Inserts the recipe, its cooking points (numbered from 0 in order) and
    /// its ingredient links. Returns the new recipe id.
    pub fn insert(&mut self, recipe: &Recipe) -> Result<i64> {
        let result = self.db.conn_mut().and_then(|conn| insert_composite(conn, recipe));
        if let Err(DbError::RecipeInsert { phase, source }) = &result {
            msg_warning!(Message::RecipeInsertFailed(phase.to_string(), source.to_string()));
        }
        self.db.track("Recipes::insert", result)
    }

    pub fn get(&mut self, id: i64) -> Result<Option<Recipe>> {
        let result = self.db.conn().and_then(|conn| read_composite(conn, id));
        let recipe = self.db.track("Recipes::get", result)?;
        if recipe.is_none() {
            msg_debug!(Message::RecipeNotFound(id));
        }
        Ok(recipe)
    }

    pub fn list(&mut self) -> Vec<Recipe> {
        let ids = self.db.query_ids(SELECT_RECIPE_IDS, []);
        self.fetch_all("Recipes::list", ids)
    }

    /// Recipes whose name contains any of `terms`, one match per term and row.
    pub fn search<S: AsRef<str>>(&mut self, terms: &[S]) -> Vec<Recipe> {
        let mut recipes = Vec::new();
        for term in terms {
            let ids = self.db.query_ids(SEARCH_RECIPE_IDS, params![contains_pattern(term.as_ref())]);
            let failed = ids.is_err();
            recipes.extend(self.fetch_all("Recipes::search", ids));
            if failed {
                break;
            }
        }
        recipes
    }

    /// Recipes whose whole-recipe `selector` nutrient total (see
    /// [`Recipe::total`]) lies in `[lower, upper]`.
    ///
    /// Totals are derived from the ingredients, so the range is applied after
    /// loading. Unknown selectors apply no filter, as for products.
    pub fn filter_range(&mut self, lower: f64, upper: f64, selector: char) -> Vec<Recipe> {
        let recipes = self.list();
        match Nutrient::from_code(selector) {
            Some(nutrient) => recipes
                .into_iter()
                .filter(|recipe| (lower..=upper).contains(&recipe.total(nutrient)))
                .collect(),
            None => {
                msg_debug!(Message::UnknownNutrientSelector(selector));
                recipes
            }
        }
    }

    /// Accepted and ignored: recipes are immutable once stored.
    pub fn update(&mut self, recipe: &Recipe) -> Result<()> {
        msg_debug!(Message::UpdateNotSupported(format!("recipe {:?}", recipe.id)));
        Ok(())
    }

    fn fetch_all(&mut self, operation: &str, ids: Result<Vec<i64>>) -> Vec<Recipe> {
        let Ok(ids) = self.db.track(operation, ids) else {
            return Vec::new();
        };
        ids.into_iter().filter_map(|id| self.get(id).ok().flatten()).collect()
    }
}

fn insert_composite(conn: &mut Connection, recipe: &Recipe) -> Result<i64> {
    let phase = |phase: RecipePhase| move |source: rusqlite::Error| DbError::RecipeInsert { phase, source };

    // Dropping `tx` without commit rolls every phase back.
    let tx = conn.transaction()?;
    tx.execute(INSERT_RECIPE, params![recipe.name]).map_err(phase(RecipePhase::Recipe))?;
    let recipe_id = tx.last_insert_rowid();

    insert_cooking_points(&tx, recipe_id, &recipe.cooking_points).map_err(phase(RecipePhase::CookingPoints))?;
    insert_products(&tx, recipe_id, &recipe.products).map_err(phase(RecipePhase::Ingredients))?;

    tx.commit()?;
    Ok(recipe_id)
}

fn insert_cooking_points(tx: &Transaction<'_>, recipe_id: i64, points: &[String]) -> rusqlite::Result<()> {
    let mut stmt = tx.prepare(INSERT_COOKING_POINT)?;
    for (point_num, description) in points.iter().enumerate() {
        stmt.execute(params![recipe_id, point_num as i64, description])?;
    }
    Ok(())
}

fn insert_products(tx: &Transaction<'_>, recipe_id: i64, products: &[WeightedProduct]) -> rusqlite::Result<()> {
    let mut stmt = tx.prepare(INSERT_PRODUCT_IN_RECIPE)?;
    for weighted in products {
        stmt.execute(params![recipe_id, weighted.product.id, weighted.amount])?;
    }
    Ok(())
}

fn read_composite(conn: &Connection, recipe_id: i64) -> Result<Option<Recipe>> {
    let name = conn
        .query_row(SELECT_RECIPE_BY_ID, params![recipe_id], |row| row.get::<_, String>("name"))
        .optional()?;
    let Some(name) = name else {
        return Ok(None);
    };

    let mut stmt = conn.prepare(SELECT_RECIPE_PRODUCTS)?;
    let products = stmt
        .query_map(params![recipe_id], |row| {
            Ok(WeightedProduct {
                product: product_from_row(row)?,
                amount: row.get("amound")?,
            })
        })?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    let mut stmt = conn.prepare(SELECT_COOKING_POINTS)?;
    let cooking_points = stmt
        .query_map(params![recipe_id], |row| row.get::<_, String>(0))?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(Some(Recipe {
        id: Some(recipe_id),
        name,
        products,
        cooking_points,
    }))
}
