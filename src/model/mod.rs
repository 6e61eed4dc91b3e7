//! Model building for the Partial Set Multi-Cover 0-1 integer program.

mod model_context;
mod model_coverage;
mod model_objective;
mod model_threshold;

use std::fmt;

use serde::Serialize;

use crate::instance::{ElementId, Instance, SetId};
use crate::solver::Assignment;
use model_context::{ModelBuilderContext, build_model_pipeline};

/// A binary decision variable of the program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Var {
    /// `x[j]`: set `j` is selected.
    Select(SetId),
    /// `y[e]`: element `e` is counted as satisfied.
    Satisfied(ElementId),
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Var::Select(j) => write!(f, "x_{}", j),
            Var::Satisfied(e) => write!(f, "y_{}", e),
        }
    }
}

/// Weighted sum of binary variables.
pub type Terms = Vec<(i64, Var)>;

/// `Σ coef * var >= lower_bound`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Constraint {
    pub name: String,
    pub terms: Terms,
    pub lower_bound: i64,
}

impl Constraint {
    pub fn lhs(&self, assignment: &Assignment) -> i64 {
        evaluate(&self.terms, assignment)
    }

    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        self.lhs(assignment) >= self.lower_bound
    }
}

fn evaluate(terms: &Terms, assignment: &Assignment) -> i64 {
    terms
        .iter()
        .filter(|(_, var)| assignment.value(*var))
        .map(|(coef, _)| coef)
        .sum()
}

/// A minimization 0-1 program over `x[1..=num_sets]` and `y[1..=num_elements]`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Model {
    pub name: String,
    pub num_sets: usize,
    pub num_elements: usize,
    /// Minimized.
    pub objective: Terms,
    pub constraints: Vec<Constraint>,
}

impl Model {
    fn empty(num_sets: usize, num_elements: usize) -> Self {
        Self {
            name: "Partial Set Multi Cover".to_string(),
            num_sets,
            num_elements,
            objective: Vec::new(),
            constraints: Vec::new(),
        }
    }

    /// All decision variables, `x` family first.
    pub fn variables(&self) -> impl Iterator<Item = Var> + '_ {
        (1..=self.num_sets)
            .map(Var::Select)
            .chain((1..=self.num_elements).map(Var::Satisfied))
    }

    pub fn objective_value(&self, assignment: &Assignment) -> i64 {
        evaluate(&self.objective, assignment)
    }

    /// Objective coefficient of each `x[j]` at index `j - 1`.
    pub fn set_costs(&self) -> Vec<i64> {
        let mut costs = vec![0; self.num_sets];
        for &(coef, var) in &self.objective {
            if let Var::Select(j) = var {
                if let Some(slot) = j.checked_sub(1).and_then(|i| costs.get_mut(i)) {
                    *slot += coef;
                }
            }
        }
        costs
    }

    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        self.constraints.iter().all(|c| c.is_satisfied_by(assignment))
    }
}

/// Turns an instance into its 0-1 program.
///
/// Pure and deterministic. Out-of-range element references are rejected when
/// the [`Instance`] is constructed, so building cannot fail.
pub fn build(instance: &Instance) -> Model {
    let mut ctx = ModelBuilderContext::new(instance);
    build_model_pipeline(&mut ctx);
    let model = ctx.into_model();
    tracing::debug!(
        sets = model.num_sets,
        elements = model.num_elements,
        constraints = model.constraints.len(),
        "built model"
    );
    model
}
