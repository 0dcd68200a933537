use std::collections::BTreeMap;

use tracing::{debug, info};

use crate::error::{DietError, Result};
use crate::models::{Diet, DietSolution, FoodCatalog, NutrientRangeTable, ENERGY_KEY};
use crate::optimizer::problem::{LinearProgram, Relation};
use crate::optimizer::solver::{solve, LpOutcome};

/// Grams represented by one unit of a decision variable.
pub const GRAMS_PER_UNIT: f64 = 100.0;

/// Smallest variable value (in 100 g units) reported in a diet.
pub const DEFAULT_INCLUSION_THRESHOLD: f64 = 1e-4;

/// Tunables of the diet optimizer.
#[derive(Debug, Clone)]
pub struct OptimizerConfig {
    /// Foods at or below this many 100 g units are left out of the diet.
    pub inclusion_threshold: f64,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            inclusion_threshold: DEFAULT_INCLUSION_THRESHOLD,
        }
    }
}

/// Build the cost-minimising program for `catalog` under `ranges`.
///
/// One variable per food (100 g units, capped by its purchasable weight),
/// energy pinned to the optimal value, every other nutrient held within
/// `[low, high]`.
pub fn build_diet_program(catalog: &FoodCatalog, ranges: &NutrientRangeTable) -> Result<LinearProgram> {
    let energy = ranges.energy().ok_or_else(|| {
        DietError::InvalidInput(format!("range table has no '{}' target", ENERGY_KEY))
    })?;

    let mut program = LinearProgram::new();
    for food in catalog.iter() {
        program.add_variable(
            food.name.clone(),
            food.price_per_100g,
            food.max_weight_g() / GRAMS_PER_UNIT,
        );
    }

    let column = |key: &str| -> Vec<f64> { catalog.iter().map(|f| f.nutrient(key)).collect() };

    program.add_constraint(
        format!("{} = {}", ENERGY_KEY, energy.optimal),
        column(ENERGY_KEY),
        Relation::Eq,
        energy.optimal,
    );

    for (key, range) in ranges.bounded() {
        let coefficients = column(key);
        program.add_constraint(
            format!("{} >= {}", key, range.low),
            coefficients.clone(),
            Relation::Ge,
            range.low,
        );
        program.add_constraint(
            format!("{} <= {}", key, range.high),
            coefficients,
            Relation::Le,
            range.high,
        );
    }

    Ok(program)
}

/// Cheapest diet meeting `ranges`, with the default configuration.
pub fn optimize_diet(catalog: &FoodCatalog, ranges: &NutrientRangeTable) -> Result<DietSolution> {
    optimize_diet_with(catalog, ranges, &OptimizerConfig::default())
}

pub fn optimize_diet_with(
    catalog: &FoodCatalog,
    ranges: &NutrientRangeTable,
    config: &OptimizerConfig,
) -> Result<DietSolution> {
    let program = build_diet_program(catalog, ranges)?;
    debug!(
        foods = program.num_variables(),
        constraints = program.num_constraints(),
        "solving diet program"
    );

    match solve(&program)? {
        LpOutcome::Infeasible => {
            info!(foods = catalog.len(), "no diet satisfies the nutrient ranges");
            Ok(DietSolution::Infeasible)
        }
        LpOutcome::Optimal { values, objective } => {
            let weights: BTreeMap<String, f64> = program
                .variables
                .iter()
                .zip(values)
                .filter(|(_, units)| *units > config.inclusion_threshold)
                .map(|(name, units)| (name.clone(), units * GRAMS_PER_UNIT))
                .collect();

            info!(
                foods = weights.len(),
                total_price = objective,
                "found optimal diet"
            );
            Ok(DietSolution::Feasible(Diet {
                weights,
                total_price: objective,
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FoodItem, NutrientRange};

    fn table(energy: f64) -> NutrientRangeTable {
        let mut ranges = NutrientRangeTable::new();
        ranges.insert(
            ENERGY_KEY,
            NutrientRange::new(energy - 200.0, energy - 100.0, energy, energy + 100.0, energy + 200.0),
        );
        ranges.insert("Protein_(g)", NutrientRange::new(0.0, 2.0, 2.0, 10.0, 100.0));
        ranges
    }

    fn catalog() -> FoodCatalog {
        [
            FoodItem::new("A", 10.0)
                .with_nutrient(ENERGY_KEY, 100.0)
                .with_nutrient("Protein_(g)", 5.0),
            FoodItem::new("B", 5.0).with_nutrient(ENERGY_KEY, 200.0),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_program_shape() {
        let program = build_diet_program(&catalog(), &table(200.0)).unwrap();
        assert_eq!(program.num_variables(), 2);
        // energy + protein low/high
        assert_eq!(program.num_constraints(), 3);
        assert_eq!(program.constraints[0].relation, Relation::Eq);
        assert_eq!(program.constraints[0].coefficients, vec![100.0, 200.0]);
        assert_eq!(program.constraints[1].coefficients, vec![5.0, 0.0]);
        assert!(program.upper_bounds.iter().all(|u| u.is_infinite()));
    }

    #[test]
    fn test_missing_energy_key() {
        let mut ranges = NutrientRangeTable::new();
        ranges.insert("Protein_(g)", NutrientRange::new(0.0, 2.0, 2.0, 10.0, 100.0));
        assert!(matches!(
            build_diet_program(&catalog(), &ranges),
            Err(DietError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_optimum_uses_minimum_protein_source() {
        let solution = optimize_diet(&catalog(), &table(200.0)).unwrap();
        let diet = solution.diet().expect("feasible");
        assert!((diet.weights["A"] - 40.0).abs() < 1e-4);
        assert!((diet.weights["B"] - 80.0).abs() < 1e-4);
        assert!((diet.total_price - 8.0).abs() < 1e-6);
    }

    #[test]
    fn test_threshold_drops_tiny_weights() {
        let config = OptimizerConfig {
            inclusion_threshold: 0.5,
        };
        let solution = optimize_diet_with(&catalog(), &table(200.0), &config).unwrap();
        let diet = solution.diet().unwrap();
        assert!(!diet.weights.contains_key("A"));
        assert!(diet.weights.contains_key("B"));
    }
}
