pub mod diet;
pub mod problem;
pub mod solver;

pub use diet::{
    build_diet_program, optimize_diet, optimize_diet_with, OptimizerConfig, GRAMS_PER_UNIT,
};
pub use problem::{Constraint, LinearProgram, Relation};
pub use solver::{solve, LpOutcome};
