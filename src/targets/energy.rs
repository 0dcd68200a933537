use serde::{Deserialize, Serialize};

use crate::error::{DietError, Result};
use crate::models::{BmrFormula, Gender, PhysiologicalParameters};
use crate::targets::constants::*;

/// Daily energy figures for one person, in kcal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalorieBreakdown {
    /// Intake that keeps the current weight.
    pub current_maintenance: f64,
    /// Intake that keeps the goal weight.
    pub goal_maintenance: f64,
    /// Current maintenance minus the weight-loss deficit.
    pub weight_loss: f64,
    /// Intake to aim for.
    pub recommended: f64,
}

/// Healthy body weights (kg) for the BMI anchors
/// `(18.5, optimal - 1, optimal, optimal + 1, 25)`.
pub fn healthy_weight_range(gender: Gender, height_m: f64) -> [f64; 5] {
    let optimal = optimal_bmi(gender);
    let bmi = [
        BMI_HEALTHY_MIN,
        optimal - BMI_OPTIMAL_SPREAD,
        optimal,
        optimal + BMI_OPTIMAL_SPREAD,
        BMI_HEALTHY_MAX,
    ];
    bmi.map(|b| b * height_m * height_m)
}

/// Goal weight: the middle of the healthy weight range.
pub fn goal_weight(gender: Gender, height_m: f64) -> f64 {
    healthy_weight_range(gender, height_m)[2]
}

/// Basal metabolic rate in kcal/day.
///
/// Fails for a gender the equations do not cover.
pub fn basal_metabolic_rate(
    formula: BmrFormula,
    gender: Gender,
    weight_kg: f64,
    height_cm: f64,
    age: f64,
) -> Result<f64> {
    let bmr = match (formula, gender) {
        (BmrFormula::MifflinStJeor, Gender::Male) => {
            10.0 * weight_kg + 6.25 * height_cm - 5.0 * age + 5.0
        }
        (BmrFormula::MifflinStJeor, Gender::Female) => {
            10.0 * weight_kg + 6.25 * height_cm - 5.0 * age - 161.0
        }
        (BmrFormula::HarrisBenedict, Gender::Male) => {
            88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age
        }
        (BmrFormula::HarrisBenedict, Gender::Female) => {
            447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age
        }
        (_, Gender::Other) => {
            return Err(DietError::InvalidParameter(format!(
                "{} requires gender 'male' or 'female'",
                formula
            )));
        }
    };
    Ok(bmr)
}

/// Energy figures at the current and the given goal weight.
///
/// The recommendation moves linearly from goal maintenance (no excess weight)
/// to the weight-loss intake (excess of `MAX_EXCESS_WEIGHT_KG` or more).
pub fn calculate_calories(
    params: &PhysiologicalParameters,
    goal_weight: f64,
) -> Result<CalorieBreakdown> {
    let height_cm = params.height_cm();
    let bmr_current = basal_metabolic_rate(
        params.formula,
        params.gender,
        params.current_weight,
        height_cm,
        params.age,
    )?;
    let bmr_goal = basal_metabolic_rate(params.formula, params.gender, goal_weight, height_cm, params.age)?;

    let extra = if params.breastfeeding {
        BREASTFEEDING_EXTRA_KCAL
    } else {
        0.0
    };
    let current_maintenance = bmr_current * params.activity_multiplier + extra;
    let goal_maintenance = bmr_goal * params.activity_multiplier + extra;

    let deficit = if params.breastfeeding {
        WEIGHT_LOSS_DEFICIT_BREASTFEEDING_KCAL
    } else {
        WEIGHT_LOSS_DEFICIT_KCAL
    };
    let weight_loss = current_maintenance - deficit;

    let excess = params.current_weight - goal_weight;
    let recommended = if excess >= MAX_EXCESS_WEIGHT_KG {
        weight_loss
    } else if excess <= 0.0 {
        goal_maintenance
    } else {
        let t = excess / MAX_EXCESS_WEIGHT_KG;
        goal_maintenance + t * (weight_loss - goal_maintenance)
    };

    Ok(CalorieBreakdown {
        current_maintenance,
        goal_maintenance,
        weight_loss,
        recommended,
    })
}
