pub mod diet;
pub mod food;
pub mod nutrients;
pub mod params;
pub mod ration;

pub use diet::{Diet, DietSolution};
pub use food::{FoodCatalog, FoodItem, FoodRecord, PriceInfo};
pub use nutrients::{IntakeBand, NutrientRange, NutrientRangeTable, ENERGY_KEY};
pub use params::{BmrFormula, Gender, PhysiologicalParameters};
pub use ration::Ration;
