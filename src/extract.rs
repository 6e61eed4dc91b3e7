//! Turns a backend assignment into a concrete [`Solution`].
//!
//! Nothing here re-validates feasibility; that is the certifier's job.

use std::time::Duration;

use crate::error::SolverError;
use crate::model::Model;
use crate::solution::{Provenance, Solution};
use crate::solver::{Assignment, SolveOutcome};

/// Selected sets are the `x[j]` equal to 1, in increasing id order; the cost
/// is the sum of their objective coefficients.
pub fn extract(model: &Model, assignment: &Assignment) -> Solution {
    let costs = model.set_costs();
    let sets: Vec<_> = assignment
        .selected_sets()
        .filter(|&j| j <= model.num_sets)
        .collect();
    let cost = sets.iter().map(|&j| costs[j - 1]).sum();
    Solution::new(sets, cost)
}

/// Extracts the solution carried by `outcome` and tags it with how the
/// backend terminated. Outcomes without an assignment become errors.
pub fn extract_outcome(
    model: &Model,
    outcome: SolveOutcome,
    time_limit: Duration,
) -> Result<Solution, SolverError> {
    let (assignment, provenance) = match outcome {
        SolveOutcome::Optimal(assignment) => (assignment, Provenance::Optimal),
        SolveOutcome::Timeout(Some(assignment)) => (assignment, Provenance::Timeout),
        SolveOutcome::Timeout(None) => {
            return Err(SolverError::NoSolution {
                seconds: time_limit.as_secs_f64(),
            });
        }
        SolveOutcome::Infeasible => return Err(SolverError::Infeasible),
    };
    let solution = extract(model, &assignment).with_provenance(provenance);
    tracing::info!(
        sets = solution.len(),
        cost = solution.cost,
        %provenance,
        "extracted solution"
    );
    Ok(solution)
}
