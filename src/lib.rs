pub mod cli;
pub mod error;
pub mod interface;
pub mod logging;
pub mod models;
pub mod optimizer;
pub mod ration;
pub mod state;
pub mod targets;

pub use error::{DietError, Result};
pub use models::{
    Diet, DietSolution, FoodCatalog, FoodItem, NutrientRange, NutrientRangeTable,
    PhysiologicalParameters,
};
pub use optimizer::{optimize_diet, optimize_diet_with, OptimizerConfig};
pub use targets::{calculate_nutrient_ranges, derive_targets};
