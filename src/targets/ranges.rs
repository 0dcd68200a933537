use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{DietError, Result};
use crate::models::nutrients::*;
use crate::models::PhysiologicalParameters;
use crate::targets::constants::*;
use crate::targets::energy::{calculate_calories, healthy_weight_range, CalorieBreakdown};

/// Everything derived for one person: weights, energy and the range table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutrientTargets {
    /// Healthy body weights in kg; the middle value is the goal weight.
    pub weight_range: [f64; 5],
    pub calories: CalorieBreakdown,
    pub ranges: NutrientRangeTable,
}

impl NutrientTargets {
    pub fn goal_weight(&self) -> f64 {
        self.weight_range[2]
    }
}

pub fn energy_range(recommended: f64) -> NutrientRange {
    NutrientRange::from_array(ENERGY_BAND_OFFSETS.map(|d| recommended + d))
}

/// Protein grams, proportional to the current body weight.
pub fn protein_range(current_weight: f64) -> NutrientRange {
    NutrientRange::from_array(PROTEIN_G_PER_KG).scaled(current_weight)
}

/// Total fat grams as a share of calories.
pub fn lipid_range(recommended: f64) -> NutrientRange {
    NutrientRange::from_array(FAT_ENERGY_SHARE.map(|s| s * recommended / KCAL_PER_G_FAT))
}

/// Carbohydrate grams.
///
/// The optimal value is whatever energy is left after optimal protein and
/// fat, so it is not guaranteed to sit between its neighbours.
pub fn carbohydrate_range(recommended: f64, protein_optimal: f64, lipid_optimal: f64) -> NutrientRange {
    let residual_kcal =
        recommended - protein_optimal * KCAL_PER_G_PROTEIN - lipid_optimal * KCAL_PER_G_FAT;
    NutrientRange::new(
        CARBOHYDRATE_FLOOR_G,
        CARBOHYDRATE_ENERGY_SHARE_LOW * recommended / KCAL_PER_G_CARBOHYDRATE,
        residual_kcal / KCAL_PER_G_CARBOHYDRATE,
        CARBOHYDRATE_ENERGY_SHARE_HIGH * recommended / KCAL_PER_G_CARBOHYDRATE,
        CARBOHYDRATE_ENERGY_SHARE_CRITICAL_HIGH * recommended / KCAL_PER_G_CARBOHYDRATE,
    )
}

pub fn saturated_fat_range(recommended: f64) -> NutrientRange {
    NutrientRange::from_array(SATURATED_FAT_ENERGY_SHARE.map(|s| s * recommended / KCAL_PER_G_FAT))
}

pub fn vegetables_fruits_range() -> NutrientRange {
    NutrientRange::from_array(VEGETABLES_FRUITS_G)
}

/// Derive weights, energy figures and the complete range table.
pub fn derive_targets(params: &PhysiologicalParameters) -> Result<NutrientTargets> {
    params.validate()?;

    let weight_range = healthy_weight_range(params.gender, params.height);
    let calories = calculate_calories(params, weight_range[2])?;
    let kcal = calories.recommended;

    let fiber = fiber_table(params.gender).ok_or_else(|| {
        DietError::InvalidParameter(format!("no fiber reference for gender {}", params.gender))
    })?;
    let micronutrients = micronutrient_table(params.gender).ok_or_else(|| {
        DietError::InvalidParameter(format!(
            "no vitamin and mineral reference for gender {}",
            params.gender
        ))
    })?;

    let protein = protein_range(params.current_weight);
    let lipid = lipid_range(kcal);

    let mut ranges = NutrientRangeTable::new();
    ranges.insert(ENERGY_KEY, energy_range(kcal));
    ranges.insert(PROTEIN_KEY, protein);
    ranges.insert(LIPID_KEY, lipid);
    ranges.insert(
        CARBOHYDRATE_KEY,
        carbohydrate_range(kcal, protein.optimal, lipid.optimal),
    );
    ranges.insert(VEGETABLES_FRUITS_KEY, vegetables_fruits_range());
    ranges.insert(SATURATED_FAT_KEY, saturated_fat_range(kcal));
    ranges.insert(FIBER_KEY, NutrientRange::from_array(fiber));

    for (key, values) in micronutrients {
        let mut range = NutrientRange::from_array(*values);
        if params.breastfeeding {
            if let Some(delta) = breastfeeding_increment(key) {
                range = range.offset(delta);
            }
        }
        ranges.insert(*key, range);
    }

    for key in ranges.disordered_keys() {
        warn!(nutrient = key, range = ?ranges.get(key), "nutrient thresholds are not ordered");
    }

    debug!(
        recommended_kcal = kcal,
        goal_weight = weight_range[2],
        nutrients = ranges.len(),
        "derived nutrient targets"
    );

    Ok(NutrientTargets {
        weight_range,
        calories,
        ranges,
    })
}

/// Range table for one person.
pub fn calculate_nutrient_ranges(params: &PhysiologicalParameters) -> Result<NutrientRangeTable> {
    derive_targets(params).map(|t| t.ranges)
}
