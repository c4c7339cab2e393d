use serde::{Deserialize, Serialize};

/// A physical activity and its energy cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: Option<i64>,
    /// Free-text label, e.g. "Swimming".
    pub kind: String,
    /// Kilocalories burned per kilogram of body weight per minute.
    pub kkal_per_kg_min: f64,
}

impl Activity {
    pub fn new(kind: &str, kkal_per_kg_min: f64) -> Self {
        Activity {
            id: None,
            kind: kind.to_string(),
            kkal_per_kg_min,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.kkal_per_kg_min.is_finite() && self.kkal_per_kg_min >= 0.0
    }

    /// Energy spent by a person of `weight_kg` over `minutes`.
    pub fn kilocalories(&self, weight_kg: f64, minutes: f64) -> f64 {
        self.kkal_per_kg_min * weight_kg * minutes
    }
}
