//! Independent certification of a candidate solution.
//!
//! Nothing here looks at the model or the solver. Cost, coverage and
//! minimality are re-derived from the [`Instance`] alone, and every call
//! computes its coverage counts afresh.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::error::FormatError;
use crate::instance::{Instance, SetId};
use crate::solution::Solution;

/// Terminal outcome of the certifier. Only the first failing check is reported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "verdict", rename_all = "snake_case")]
pub enum Verdict {
    CostMismatch { declared: i64, actual: i64 },
    Infeasible { satisfied: usize, threshold: usize },
    NotMinimal { removable: SetId },
    Correct,
}

impl Verdict {
    pub fn is_correct(&self) -> bool {
        matches!(self, Verdict::Correct)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::CostMismatch { .. } => write!(f, "incorrect cost"),
            Verdict::Infeasible { .. } => write!(f, "infeasible"),
            Verdict::NotMinimal { .. } => write!(f, "not minimal"),
            Verdict::Correct => write!(f, "everything is correct!"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostCheck {
    pub declared: i64,
    pub actual: i64,
}

impl CostCheck {
    pub fn passed(&self) -> bool {
        self.declared == self.actual
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoveringCheck {
    pub satisfied: usize,
    pub threshold: usize,
    /// Coverage count of element `e` at index `e - 1`.
    #[serde(skip)]
    pub coverage: Vec<usize>,
}

impl CoveringCheck {
    pub fn feasible(&self) -> bool {
        self.satisfied >= self.threshold
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MinimalityCheck {
    /// Sets whose single removal keeps the solution feasible, in solution order.
    pub removable: Vec<SetId>,
}

impl MinimalityCheck {
    pub fn is_minimal(&self) -> bool {
        self.removable.is_empty()
    }
}

/// Every check run standalone, plus the verdict the short-circuiting
/// pipeline would report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CertificationReport {
    pub cost: CostCheck,
    pub covering: CoveringCheck,
    pub minimality: MinimalityCheck,
    pub verdict: Verdict,
}

/// Rejects set ids the instance does not define and sets selected twice.
pub fn validate_selection(instance: &Instance, sets: &[SetId]) -> Result<(), FormatError> {
    let mut seen = HashSet::with_capacity(sets.len());
    for &set in sets {
        if instance.cost(set).is_none() {
            return Err(FormatError::UnknownSet {
                set,
                num_sets: instance.num_sets(),
            });
        }
        if !seen.insert(set) {
            return Err(FormatError::DuplicateSet { set });
        }
    }
    Ok(())
}

/// Sum of the instance costs of `sets`.
pub fn actual_cost(instance: &Instance, sets: &[SetId]) -> Result<i64, FormatError> {
    validate_selection(instance, sets)?;
    Ok(sets
        .iter()
        .filter_map(|&set| instance.cost(set))
        .map(i64::from)
        .sum())
}

/// Number of selected sets containing each element (index `e - 1`).
///
/// A multiplicity count, not a union: an element inside three selected sets
/// has coverage 3.
pub fn coverage(instance: &Instance, sets: &[SetId]) -> Result<Vec<usize>, FormatError> {
    validate_selection(instance, sets)?;
    let mut counts = vec![0; instance.num_elements()];
    for &set in sets {
        for &element in instance.members(set).into_iter().flatten() {
            counts[element - 1] += 1;
        }
    }
    Ok(counts)
}

fn is_satisfied(instance: &Instance, element: usize, count: usize) -> bool {
    instance
        .requirement(element)
        .is_some_and(|r| count >= r as usize)
}

/// Elements whose coverage meets their requirement.
pub fn satisfied_count(instance: &Instance, coverage: &[usize]) -> usize {
    coverage
        .iter()
        .enumerate()
        .filter(|&(idx, &count)| is_satisfied(instance, idx + 1, count))
        .count()
}

pub fn check_cost(instance: &Instance, solution: &Solution) -> Result<CostCheck, FormatError> {
    let check = CostCheck {
        declared: solution.cost,
        actual: actual_cost(instance, &solution.sets)?,
    };
    tracing::debug!(declared = check.declared, actual = check.actual, "cost check");
    Ok(check)
}

pub fn check_covering(instance: &Instance, sets: &[SetId]) -> Result<CoveringCheck, FormatError> {
    let coverage = coverage(instance, sets)?;
    let check = CoveringCheck {
        satisfied: satisfied_count(instance, &coverage),
        threshold: instance.threshold(),
        coverage,
    };
    tracing::debug!(
        satisfied = check.satisfied,
        threshold = check.threshold,
        "covering check"
    );
    Ok(check)
}

/// Single-removal minimality: drops each selected set in turn and asks
/// whether the rest still satisfies at least `threshold` elements.
///
/// Removing set `j` lowers the coverage of its members by exactly one, so an
/// element stops being satisfied iff its coverage equalled its requirement.
/// The covering count of each reduced solution is derived from the full
/// solution's coverage instead of being recomputed from scratch.
pub fn check_minimality(
    instance: &Instance,
    sets: &[SetId],
) -> Result<MinimalityCheck, FormatError> {
    let covering = check_covering(instance, sets)?;
    Ok(minimality_from(instance, sets, &covering))
}

fn minimality_from(instance: &Instance, sets: &[SetId], covering: &CoveringCheck) -> MinimalityCheck {
    let removable = sets
        .iter()
        .copied()
        .filter(|&set| {
            let lost = instance
                .members(set)
                .into_iter()
                .flatten()
                .filter(|&&e| {
                    instance
                        .requirement(e)
                        .is_some_and(|r| covering.coverage[e - 1] == r as usize)
                })
                .count();
            covering.satisfied.saturating_sub(lost) >= covering.threshold
        })
        .collect();
    let check = MinimalityCheck { removable };
    tracing::debug!(removable = ?check.removable, "minimality check");
    check
}

/// Runs cost, covering and minimality checks in that order and stops at the
/// first failure.
///
/// `Correct` certifies self-consistent cost, feasibility and single-removal
/// minimality. It says nothing about global cost-optimality.
pub fn certify(instance: &Instance, solution: &Solution) -> Result<Verdict, FormatError> {
    let cost = check_cost(instance, solution)?;
    if !cost.passed() {
        return Ok(Verdict::CostMismatch {
            declared: cost.declared,
            actual: cost.actual,
        });
    }

    let covering = check_covering(instance, &solution.sets)?;
    if !covering.feasible() {
        return Ok(Verdict::Infeasible {
            satisfied: covering.satisfied,
            threshold: covering.threshold,
        });
    }

    let minimality = minimality_from(instance, &solution.sets, &covering);
    if let Some(&removable) = minimality.removable.first() {
        return Ok(Verdict::NotMinimal { removable });
    }

    Ok(Verdict::Correct)
}

/// Runs every check regardless of earlier failures, for diagnostics.
pub fn report(instance: &Instance, solution: &Solution) -> Result<CertificationReport, FormatError> {
    let cost = check_cost(instance, solution)?;
    let covering = check_covering(instance, &solution.sets)?;
    let minimality = minimality_from(instance, &solution.sets, &covering);

    let verdict = if !cost.passed() {
        Verdict::CostMismatch {
            declared: cost.declared,
            actual: cost.actual,
        }
    } else if !covering.feasible() {
        Verdict::Infeasible {
            satisfied: covering.satisfied,
            threshold: covering.threshold,
        }
    } else if let Some(&removable) = minimality.removable.first() {
        Verdict::NotMinimal { removable }
    } else {
        Verdict::Correct
    };

    Ok(CertificationReport {
        cost,
        covering,
        minimality,
        verdict,
    })
}
