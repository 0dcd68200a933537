use microlp::{ComparisonOp, LinearExpr, OptimizationDirection, Problem};
use tracing::debug;

use crate::error::{DietError, Result};
use crate::optimizer::problem::{LinearProgram, Relation};

/// Tolerance for rows that contain no variable at all.
const EMPTY_ROW_TOLERANCE: f64 = 1e-9;

/// Result of a successful solver run.
#[derive(Debug, Clone, PartialEq)]
pub enum LpOutcome {
    Optimal { values: Vec<f64>, objective: f64 },
    Infeasible,
}

impl From<Relation> for ComparisonOp {
    fn from(relation: Relation) -> Self {
        match relation {
            Relation::Le => ComparisonOp::Le,
            Relation::Ge => ComparisonOp::Ge,
            Relation::Eq => ComparisonOp::Eq,
        }
    }
}

/// Minimise `program` with the simplex solver.
///
/// Rows without variables are decided here: a violated one makes the program
/// infeasible, a satisfied one is dropped. Malformed programs and unbounded
/// objectives are reported as [`DietError::Solver`].
pub fn solve(program: &LinearProgram) -> Result<LpOutcome> {
    program.validate()?;

    for row in program.constraints.iter().filter(|c| c.is_empty_row()) {
        if !row.holds(0.0, EMPTY_ROW_TOLERANCE) {
            debug!(constraint = %row.name, rhs = row.rhs, "constraint cannot be met by any food");
            return Ok(LpOutcome::Infeasible);
        }
    }

    if program.num_variables() == 0 {
        return Ok(LpOutcome::Optimal {
            values: Vec::new(),
            objective: 0.0,
        });
    }

    let mut problem = Problem::new(OptimizationDirection::Minimize);
    let vars: Vec<_> = program
        .costs
        .iter()
        .zip(&program.upper_bounds)
        .map(|(&cost, &upper)| problem.add_var(cost, (0.0, upper)))
        .collect();

    for row in program.constraints.iter().filter(|c| !c.is_empty_row()) {
        let mut expr = LinearExpr::empty();
        for (var, &coef) in vars.iter().zip(&row.coefficients) {
            if coef != 0.0 {
                expr.add(*var, coef);
            }
        }
        problem.add_constraint(expr, row.relation.into(), row.rhs);
    }

    match problem.solve() {
        Ok(solution) => {
            let values = vars.iter().map(|v| solution[*v]).collect();
            Ok(LpOutcome::Optimal {
                values,
                objective: solution.objective(),
            })
        }
        Err(microlp::Error::Infeasible) => Ok(LpOutcome::Infeasible),
        Err(microlp::Error::Unbounded) => {
            Err(DietError::Solver("objective is unbounded".to_string()))
        }
        Err(other) => Err(DietError::Solver(other.to_string())),
    }
}
