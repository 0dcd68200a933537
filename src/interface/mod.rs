pub mod prompts;
pub mod render;

pub use prompts::{collect_parameters, prompt_yes_no};
pub use render::{
    display_assessment, display_diet, display_diet_solution, display_ranges,
    display_ration_summary, display_targets,
};
