use std::fmt;

use crate::error::{DietError, Result};

/// Comparison between a constraint's left-hand side and its right-hand side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relation {
    /// Less than or equal (<=)
    Le,
    /// Greater than or equal (>=)
    Ge,
    /// Equal (=)
    Eq,
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self {
            Relation::Le => "<=",
            Relation::Ge => ">=",
            Relation::Eq => "=",
        };
        f.write_str(op)
    }
}

/// One linear constraint row: `coefficients · x  relation  rhs`.
#[derive(Debug, Clone, PartialEq)]
pub struct Constraint {
    /// Label used in diagnostics.
    pub name: String,
    /// Coefficient per variable, dense.
    pub coefficients: Vec<f64>,
    pub relation: Relation,
    pub rhs: f64,
}

impl Constraint {
    /// Left-hand side at the point `x`.
    pub fn lhs(&self, x: &[f64]) -> f64 {
        self.coefficients.iter().zip(x).map(|(a, v)| a * v).sum()
    }

    /// Whether `lhs` satisfies the relation within `tolerance`.
    pub fn holds(&self, lhs: f64, tolerance: f64) -> bool {
        match self.relation {
            Relation::Le => lhs <= self.rhs + tolerance,
            Relation::Ge => lhs >= self.rhs - tolerance,
            Relation::Eq => (lhs - self.rhs).abs() <= tolerance,
        }
    }

    /// True when no variable appears in the row.
    pub fn is_empty_row(&self) -> bool {
        self.coefficients.iter().all(|&a| a == 0.0)
    }
}

/// A minimisation problem over non-negative, upper-bounded variables.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LinearProgram {
    /// Variable names
    pub variables: Vec<String>,
    /// Objective coefficient per variable
    pub costs: Vec<f64>,
    /// Upper bound per variable, possibly infinite
    pub upper_bounds: Vec<f64>,
    pub constraints: Vec<Constraint>,
}

impl LinearProgram {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable with bounds `[0, upper]`, returning its index.
    pub fn add_variable(&mut self, name: impl Into<String>, cost: f64, upper: f64) -> usize {
        self.variables.push(name.into());
        self.costs.push(cost);
        self.upper_bounds.push(upper);
        self.variables.len() - 1
    }

    pub fn add_constraint(
        &mut self,
        name: impl Into<String>,
        coefficients: Vec<f64>,
        relation: Relation,
        rhs: f64,
    ) {
        self.constraints.push(Constraint {
            name: name.into(),
            coefficients,
            relation,
            rhs,
        });
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn objective(&self, x: &[f64]) -> f64 {
        self.costs.iter().zip(x).map(|(c, v)| c * v).sum()
    }

    /// Check dimensions and that every number is usable by a solver.
    pub fn validate(&self) -> Result<()> {
        let n = self.num_variables();
        if self.costs.len() != n || self.upper_bounds.len() != n {
            return Err(DietError::Solver(format!(
                "{} variables but {} costs and {} bounds",
                n,
                self.costs.len(),
                self.upper_bounds.len()
            )));
        }

        for (name, (cost, upper)) in self
            .variables
            .iter()
            .zip(self.costs.iter().zip(&self.upper_bounds))
        {
            if !cost.is_finite() {
                return Err(DietError::Solver(format!("cost of '{}' is {}", name, cost)));
            }
            if upper.is_nan() || *upper < 0.0 {
                return Err(DietError::Solver(format!(
                    "upper bound of '{}' is {}",
                    name, upper
                )));
            }
        }

        for constraint in &self.constraints {
            if constraint.coefficients.len() != n {
                return Err(DietError::Solver(format!(
                    "constraint '{}' has {} coefficients for {} variables",
                    constraint.name,
                    constraint.coefficients.len(),
                    n
                )));
            }
            if !constraint.rhs.is_finite() || constraint.coefficients.iter().any(|a| !a.is_finite()) {
                return Err(DietError::Solver(format!(
                    "constraint '{}' has non-finite values",
                    constraint.name
                )));
            }
        }

        Ok(())
    }

    /// Whether `x` respects bounds and every constraint within `tolerance`.
    pub fn is_feasible_point(&self, x: &[f64], tolerance: f64) -> bool {
        x.len() == self.num_variables()
            && x
                .iter()
                .zip(&self.upper_bounds)
                .all(|(v, u)| *v >= -tolerance && *v <= u + tolerance)
            && self
                .constraints
                .iter()
                .all(|c| c.holds(c.lhs(x), tolerance))
    }
}
