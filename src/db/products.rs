//! Food product repository.
//!
//! ```rust,no_run
//! use nutridesk::db::db::Db;
//! use nutridesk::libs::form_field::FormSchema;
//! use nutridesk::libs::product::{Product, Units};
//!
//! let mut db = Db::open("db.sqlite", FormSchema::default());
//! let id = db.products().insert(&Product::new("Oats", "Rolled", 12.0, 6.0, 60.0, 370.0, Units::Grams))?;
//! let high_carb = db.products().filter_range(50.0, 100.0, 'c');
//! # Ok::<(), nutridesk::db::error::DbError>(())
//! ```

use super::db::Db;
use super::error::Result;
use super::search::contains_pattern;
use crate::libs::messages::Message;
use crate::libs::product::{Nutrient, Product};
use crate::msg_debug;
use rusqlite::{params, OptionalExtension, Row};

const INSERT_PRODUCT: &str = "INSERT INTO Products (name, description, proteins, fats, carbohydrates, kkal, units) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)";
const SELECT_PRODUCT_BY_ID: &str = "SELECT * FROM Products WHERE id = ?1";
const SELECT_PRODUCT_IDS: &str = "SELECT id FROM Products";
const SEARCH_PRODUCT_IDS: &str = "SELECT id FROM Products WHERE name LIKE ?1 ESCAPE '\\' OR description LIKE ?1 ESCAPE '\\'";

pub struct Products<'a> {
    db: &'a mut Db,
}

impl Db {
    pub fn products(&mut self) -> Products<'_> {
        Products { db: self }
    }
}

/// Maps a row holding the `Products` columns by name.
pub(crate) fn product_from_row(row: &Row<'_>) -> rusqlite::Result<Product> {
    Ok(Product {
        id: Some(row.get("id")?),
        name: row.get("name")?,
        description: row.get("description")?,
        proteins: row.get("proteins")?,
        fats: row.get("fats")?,
        carbohydrates: row.get("carbohydrates")?,
        kilocalories: row.get("kkal")?,
        units: row.get("units")?,
    })
}

impl Products<'_> {
    /// Inserts `product` and returns the identity the store assigned.
    pub fn insert(&mut self, product: &Product) -> Result<i64> {
        let result = self.db.conn().and_then(|conn| {
            conn.execute(
                INSERT_PRODUCT,
                params![
                    product.name,
                    product.description,
                    product.proteins,
                    product.fats,
                    product.carbohydrates,
                    product.kilocalories,
                    product.units
                ],
            )?;
            Ok(conn.last_insert_rowid())
        });
        self.db.track("Products::insert", result)
    }

    pub fn get(&mut self, id: i64) -> Result<Option<Product>> {
        let result = self
            .db
            .conn()
            .and_then(|conn| Ok(conn.query_row(SELECT_PRODUCT_BY_ID, params![id], product_from_row).optional()?));
        let product = self.db.track("Products::get", result)?;
        if product.is_none() {
            msg_debug!(Message::ProductNotFound(id));
        }
        Ok(product)
    }

    pub fn list(&mut self) -> Vec<Product> {
        let ids = self.db.query_ids(SELECT_PRODUCT_IDS, []);
        self.fetch_all("Products::list", ids)
    }

    /// Products whose name or description contains any of `terms`.
    ///
    /// Terms are matched independently and results are concatenated: a
    /// product matching two terms appears twice.
    pub fn search<S: AsRef<str>>(&mut self, terms: &[S]) -> Vec<Product> {
        let mut products = Vec::new();
        for term in terms {
            let ids = self.db.query_ids(SEARCH_PRODUCT_IDS, params![contains_pattern(term.as_ref())]);
            let failed = ids.is_err();
            products.extend(self.fetch_all("Products::search", ids));
            if failed {
                break;
            }
        }
        products
    }

    /// Products whose `selector` nutrient lies in `[lower, upper]`.
    ///
    /// `selector` is one of `c`, `f`, `p`, `k`. Any other character applies
    /// no filter and returns every product.
    pub fn filter_range(&mut self, lower: f64, upper: f64, selector: char) -> Vec<Product> {
        let ids = match Nutrient::from_code(selector) {
            Some(nutrient) => {
                let sql = format!("SELECT id FROM Products WHERE {} BETWEEN ?1 AND ?2", nutrient.column());
                self.db.query_ids(&sql, params![lower, upper])
            }
            None => {
                msg_debug!(Message::UnknownNutrientSelector(selector));
                self.db.query_ids(SELECT_PRODUCT_IDS, [])
            }
        };
        self.fetch_all("Products::filter_range", ids)
    }

    /// Accepted and ignored: products are immutable once stored.
    pub fn update(&mut self, product: &Product) -> Result<()> {
        msg_debug!(Message::UpdateNotSupported(format!("product {:?}", product.id)));
        Ok(())
    }

    /// Fetches each id in turn. Ids whose lookup fails are skipped; the
    /// failure is already in the error log.
    fn fetch_all(&mut self, operation: &str, ids: Result<Vec<i64>>) -> Vec<Product> {
        let Ok(ids) = self.db.track(operation, ids) else {
            return Vec::new();
        };
        ids.into_iter().filter_map(|id| self.get(id).ok().flatten()).collect()
    }
}
