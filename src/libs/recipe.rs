use super::product::{Nutrient, Units, WeightedProduct};
use serde::{Deserialize, Serialize};

/// A recipe: ingredients plus numbered cooking steps.
///
/// Step order is meaningful and survives a store round-trip. Ingredients
/// come back in the order they were inserted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: Option<i64>,
    pub name: String,
    pub products: Vec<WeightedProduct>,
    pub cooking_points: Vec<String>,
}

impl Recipe {
    pub fn new(name: &str, products: Vec<WeightedProduct>, cooking_points: Vec<String>) -> Self {
        Recipe {
            id: None,
            name: name.to_string(),
            products,
            cooking_points,
        }
    }

    /// Sums `nutrient` over ingredients, scaling each by its amount.
    ///
    /// Product facts are per 100 units for grams and millilitres, per piece
    /// otherwise.
    pub fn total(&self, nutrient: Nutrient) -> f64 {
        self.products
            .iter()
            .map(|wp| match wp.product.units {
                Units::Grams | Units::Milliliters => wp.product.nutrient(nutrient) * wp.amount / 100.0,
                Units::Pieces => wp.product.nutrient(nutrient) * wp.amount,
            })
            .sum()
    }

    pub fn total_kilocalories(&self) -> f64 {
        self.total(Nutrient::Kilocalories)
    }
}
