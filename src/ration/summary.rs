use std::collections::BTreeMap;

use serde::Serialize;
use tracing::warn;

use crate::error::{DietError, Result};
use crate::models::{FoodCatalog, FoodItem, Ration};
use crate::ration::matching::closest_name;

/// A ration entry that is not in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnknownFood {
    pub name: String,
    pub suggestion: Option<String>,
}

/// Totals of a ration computed from per-100g compositions.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RationSummary {
    /// Grams of all known foods.
    pub total_weight: f64,
    pub total_price: f64,
    /// Nutrient key -> absolute amount.
    pub nutrients_total: BTreeMap<String, f64>,
    /// Entries skipped because they are not in the catalog.
    pub unknown: Vec<UnknownFood>,
}

/// Round to two decimals.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

impl RationSummary {
    /// Composition per 100 g of the whole ration, rounded to 2 decimals.
    pub fn nutrients_per_100g(&self) -> BTreeMap<String, f64> {
        if self.total_weight <= 0.0 {
            return BTreeMap::new();
        }
        self.nutrients_total
            .iter()
            .map(|(k, v)| (k.clone(), round2(v / self.total_weight * 100.0)))
            .collect()
    }

    pub fn price_per_100g(&self) -> f64 {
        if self.total_weight <= 0.0 {
            return 0.0;
        }
        round2(self.total_price / self.total_weight * 100.0)
    }

    /// Treat the ration as one composite dish.
    pub fn to_food_item(&self, name: impl Into<String>) -> Result<FoodItem> {
        let name = name.into();
        if self.total_weight <= 0.0 {
            return Err(DietError::InvalidInput(format!(
                "dish '{}' has no known ingredients",
                name
            )));
        }
        Ok(FoodItem {
            name,
            nutrients: self.nutrients_per_100g(),
            price_per_100g: self.price_per_100g(),
            max_weight: None,
        })
    }
}

/// Sum weight, price and nutrients of every ration entry found in `catalog`.
pub fn summarize_ration(ration: &Ration, catalog: &FoodCatalog) -> RationSummary {
    let mut summary = RationSummary::default();

    for (name, &grams) in &ration.items {
        let Some(food) = catalog.get(name) else {
            let suggestion = closest_name(name, catalog.names()).map(str::to_string);
            warn!(food = %name, suggestion = ?suggestion, "food not in catalog, skipping");
            summary.unknown.push(UnknownFood {
                name: name.clone(),
                suggestion,
            });
            continue;
        };

        summary.total_weight += grams;
        summary.total_price += food.price_per_100g * grams / 100.0;
        for (key, amount) in &food.nutrients {
            *summary.nutrients_total.entry(key.clone()).or_insert(0.0) += amount * grams / 100.0;
        }
    }

    summary
}
