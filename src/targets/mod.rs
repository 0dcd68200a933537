pub mod constants;
pub mod energy;
pub mod ranges;

pub use energy::{
    basal_metabolic_rate, calculate_calories, goal_weight, healthy_weight_range, CalorieBreakdown,
};
pub use ranges::{calculate_nutrient_ranges, derive_targets, NutrientTargets};
