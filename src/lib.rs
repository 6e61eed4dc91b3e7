//! Modelling and certification for the Partial Set Multi-Cover problem.
//!
//! Two independent pipelines share only the [`Instance`]:
//!
//! * solving: [`Instance`] → [`model::build`] → [`Solver`] → [`extract`]
//! * certifying: [`Instance`] + [`Solution`] → [`certify::certify`] → [`Verdict`]

use std::path::Path;

pub mod certify;
pub mod config;
pub mod error;
pub mod extract;
pub mod files;
pub mod instance;
pub mod logging;
pub mod model;
pub mod solution;
pub mod solver;

pub use certify::{CertificationReport, Verdict};
pub use config::SolverConfig;
pub use error::{FormatError, PsmcError, SolverError};
pub use extract::{extract, extract_outcome};
pub use instance::{ElementId, Instance, SetId};
pub use model::{Model, Var};
pub use solution::{Provenance, Solution};
pub use solver::{Assignment, SolveOutcome, Solver};

/// Builds the model for `instance`, solves it once within `config`'s time
/// limit and extracts the resulting solution.
pub fn solve_instance<S: Solver + ?Sized>(
    instance: &Instance,
    solver: &S,
    config: &SolverConfig,
) -> Result<Solution, PsmcError> {
    config.validate()?;
    let model = model::build(instance);
    let time_limit = config.time_limit();
    let outcome = solver.solve(&model, time_limit)?;
    Ok(extract_outcome(&model, outcome, time_limit)?)
}

/// Solves the instance stored at `instance_path` and writes its solution to
/// `output`.
///
/// A solution already at `output` is removed before anything is read, so a
/// run that fails leaves no solution file behind.
pub fn solve_instance_file<S: Solver + ?Sized>(
    instance_path: &Path,
    output: &Path,
    solver: &S,
    config: &SolverConfig,
) -> Result<Solution, PsmcError> {
    files::remove_stale_solution(output)?;
    let instance = files::read_instance(instance_path)?;
    let solution = solve_instance(&instance, solver, config)?;
    files::create_solution(output, &solution)?;
    Ok(solution)
}
