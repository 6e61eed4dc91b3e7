//! Boundary to the external 0-1 program backend.
//!
//! The crate never searches for solutions itself. A [`Solver`] takes a built
//! [`Model`] and a wall-clock budget and reports a tagged [`SolveOutcome`].

#[cfg(feature = "cp-sat")]
mod cp_sat_solver;

#[cfg(feature = "cp-sat")]
pub use cp_sat_solver::CpSatSolver;

use std::time::Duration;

use crate::error::SolverError;
use crate::instance::{ElementId, SetId};
use crate::model::{Model, Var};

/// Values of every binary variable of one model.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Assignment {
    /// `x[j]` at index `j - 1`.
    pub selected: Vec<bool>,
    /// `y[e]` at index `e - 1`.
    pub satisfied: Vec<bool>,
}

impl Assignment {
    /// All-zero assignment sized for `model`.
    pub fn zeros(model: &Model) -> Self {
        Self {
            selected: vec![false; model.num_sets],
            satisfied: vec![false; model.num_elements],
        }
    }

    /// Value of `var`; variables outside the assignment read as 0.
    pub fn value(&self, var: Var) -> bool {
        let (values, id) = match var {
            Var::Select(j) => (&self.selected, j),
            Var::Satisfied(e) => (&self.satisfied, e),
        };
        id.checked_sub(1)
            .and_then(|i| values.get(i))
            .copied()
            .unwrap_or(false)
    }

    pub fn set(&mut self, var: Var, value: bool) {
        let (values, id) = match var {
            Var::Select(j) => (&mut self.selected, j),
            Var::Satisfied(e) => (&mut self.satisfied, e),
        };
        if let Some(slot) = id.checked_sub(1).and_then(|i| values.get_mut(i)) {
            *slot = value;
        }
    }

    pub fn selected_sets(&self) -> impl Iterator<Item = SetId> + '_ {
        self.selected
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(i, _)| i + 1)
    }

    pub fn satisfied_elements(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.satisfied
            .iter()
            .enumerate()
            .filter(|(_, on)| **on)
            .map(|(i, _)| i + 1)
    }
}

/// Final status of one blocking solve call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Proven optimal.
    Optimal(Assignment),
    /// Budget exhausted. Carries the best incumbent, if the backend found one;
    /// it is feasible but possibly suboptimal.
    Timeout(Option<Assignment>),
    /// The program has no feasible assignment.
    Infeasible,
}

/// A backend able to solve a 0-1 program within a wall-clock budget.
pub trait Solver {
    fn solve(&self, model: &Model, time_limit: Duration) -> Result<SolveOutcome, SolverError>;
}
