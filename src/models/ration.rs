use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Foods a person actually eats, in grams.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ration {
    #[serde(rename = "ration", alias = "Рацион")]
    pub items: BTreeMap<String, f64>,
}

impl Ration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add grams of a food, accumulating repeated entries.
    pub fn add(&mut self, food: impl Into<String>, grams: f64) {
        *self.items.entry(food.into()).or_insert(0.0) += grams;
    }

    pub fn total_weight(&self) -> f64 {
        self.items.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl From<BTreeMap<String, f64>> for Ration {
    fn from(items: BTreeMap<String, f64>) -> Self {
        Self { items }
    }
}
