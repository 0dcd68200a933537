use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::food::FoodCatalog;

/// Grams selected per food together with their cost.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diet {
    /// Food name -> grams. Only foods above the inclusion threshold appear.
    pub weights: BTreeMap<String, f64>,

    /// Objective value reported by the solver.
    pub total_price: f64,
}

impl Diet {
    pub fn total_weight(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Achieved amount of `key` given the per-100g composition in `catalog`.
    pub fn nutrient_total(&self, catalog: &FoodCatalog, key: &str) -> f64 {
        self.weights
            .iter()
            .filter_map(|(name, grams)| catalog.get(name).map(|f| f.nutrient(key) * grams / 100.0))
            .sum()
    }

    /// Achieved amounts of every nutrient appearing in the selected foods.
    pub fn nutrient_totals(&self, catalog: &FoodCatalog) -> BTreeMap<String, f64> {
        let mut totals = BTreeMap::new();
        for (name, grams) in &self.weights {
            let Some(food) = catalog.get(name) else {
                continue;
            };
            for (key, amount) in &food.nutrients {
                *totals.entry(key.clone()).or_insert(0.0) += amount * grams / 100.0;
            }
        }
        totals
    }
}

/// Outcome of one optimizer call.
///
/// `Infeasible` is a normal answer, distinct from a feasible but empty diet.
#[derive(Debug, Clone, PartialEq)]
pub enum DietSolution {
    Feasible(Diet),
    Infeasible,
}

impl DietSolution {
    pub fn is_feasible(&self) -> bool {
        matches!(self, DietSolution::Feasible(_))
    }

    pub fn diet(&self) -> Option<&Diet> {
        match self {
            DietSolution::Feasible(diet) => Some(diet),
            DietSolution::Infeasible => None,
        }
    }

    pub fn into_diet(self) -> Option<Diet> {
        match self {
            DietSolution::Feasible(diet) => Some(diet),
            DietSolution::Infeasible => None,
        }
    }
}
