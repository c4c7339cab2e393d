use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use serde::{Deserialize, Serialize};

/// Unit of measure a product's nutrition facts refer to.
///
/// Stored as a plain integer code in `Products.units`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Units {
    /// Per 100 grams
    Grams = 0,
    /// Per 100 millilitres
    Milliliters = 1,
    /// Per piece
    Pieces = 2,
}

impl Units {
    pub fn code(self) -> i64 {
        self as i64
    }

    pub fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Units::Grams),
            1 => Some(Units::Milliliters),
            2 => Some(Units::Pieces),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Units::Grams => "g",
            Units::Milliliters => "ml",
            Units::Pieces => "pcs",
        }
    }
}

impl ToSql for Units {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.code()))
    }
}

impl FromSql for Units {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let code = value.as_i64()?;
        Units::from_code(code).ok_or(FromSqlError::OutOfRange(code))
    }
}

/// Column selector for nutrient range filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nutrient {
    Carbohydrates,
    Fats,
    Proteins,
    Kilocalories,
}

impl Nutrient {
    /// Maps the single-letter selector (`c`, `f`, `p`, `k`).
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'c' => Some(Nutrient::Carbohydrates),
            'f' => Some(Nutrient::Fats),
            'p' => Some(Nutrient::Proteins),
            'k' => Some(Nutrient::Kilocalories),
            _ => None,
        }
    }

    pub fn code(self) -> char {
        match self {
            Nutrient::Carbohydrates => 'c',
            Nutrient::Fats => 'f',
            Nutrient::Proteins => 'p',
            Nutrient::Kilocalories => 'k',
        }
    }

    pub fn column(self) -> &'static str {
        match self {
            Nutrient::Carbohydrates => "carbohydrates",
            Nutrient::Fats => "fats",
            Nutrient::Proteins => "proteins",
            Nutrient::Kilocalories => "kkal",
        }
    }
}

/// A food product with its nutrition facts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    pub proteins: f64,
    pub fats: f64,
    pub carbohydrates: f64,
    pub kilocalories: f64,
    pub units: Units,
}

impl Product {
    pub fn new(
        name: &str,
        description: &str,
        proteins: f64,
        fats: f64,
        carbohydrates: f64,
        kilocalories: f64,
        units: Units,
    ) -> Self {
        Product {
            id: None,
            name: name.to_string(),
            description: description.to_string(),
            proteins,
            fats,
            carbohydrates,
            kilocalories,
            units,
        }
    }

    /// Nutrition facts are non-negative. The store does not check this;
    /// callers that accept user input should.
    pub fn is_valid(&self) -> bool {
        [self.proteins, self.fats, self.carbohydrates, self.kilocalories]
            .iter()
            .all(|value| value.is_finite() && *value >= 0.0)
    }

    pub fn nutrient(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Carbohydrates => self.carbohydrates,
            Nutrient::Fats => self.fats,
            Nutrient::Proteins => self.proteins,
            Nutrient::Kilocalories => self.kilocalories,
        }
    }
}

/// A product together with the amount used in a recipe.
///
/// Lives only inside [`Recipe`](super::recipe::Recipe) ingredient lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightedProduct {
    pub product: Product,
    pub amount: f64,
}

impl WeightedProduct {
    pub fn new(product: Product, amount: f64) -> Self {
        WeightedProduct { product, amount }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selector_codes_map_to_columns() {
        for code in ['c', 'f', 'p', 'k'] {
            let nutrient = Nutrient::from_code(code).unwrap();
            assert_eq!(nutrient.code(), code);
        }
        assert_eq!(Nutrient::from_code('k').unwrap().column(), "kkal");
        assert_eq!(Nutrient::from_code('x'), None);
    }

    #[test]
    fn negative_facts_are_invalid() {
        let mut product = Product::new("Oats", "", 12.0, 6.0, 60.0, 370.0, Units::Grams);
        assert!(product.is_valid());
        product.fats = -1.0;
        assert!(!product.is_valid());
    }

    #[test]
    fn unknown_unit_code_is_rejected() {
        assert_eq!(Units::from_code(1), Some(Units::Milliliters));
        assert_eq!(Units::from_code(9), None);
    }
}
