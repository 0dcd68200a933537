pub mod assessment;
pub mod matching;
pub mod summary;

pub use assessment::{assess_intake, NutrientAssessment};
pub use matching::{closest_name, similar_names};
pub use summary::{summarize_ration, RationSummary, UnknownFood};
