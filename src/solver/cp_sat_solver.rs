use std::time::Duration;

use cp_sat::builder::{BoolVar, CpModelBuilder, LinearExpr};
use cp_sat::proto::{CpSolverResponse, CpSolverStatus, SatParameters};

use super::{Assignment, SolveOutcome, Solver};
use crate::config::SolverConfig;
use crate::error::SolverError;
use crate::model::{Model, Terms, Var};

/// Google OR-Tools CP-SAT backend.
#[derive(Debug, Clone, Default)]
pub struct CpSatSolver {
    config: SolverConfig,
}

impl CpSatSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    fn parameters(&self, time_limit: Duration) -> SatParameters {
        let mut params = SatParameters::default();
        params.max_time_in_seconds = Some(time_limit.as_secs_f64());
        params.max_deterministic_time = Some(time_limit.as_secs_f64());
        params.num_search_workers = self.config.num_workers;
        params.random_seed = self.config.random_seed;
        params.log_search_progress = Some(self.config.log_search_progress);
        params
    }
}

struct CpSatVars {
    x: Vec<BoolVar>,
    y: Vec<BoolVar>,
}

impl CpSatVars {
    fn get(&self, var: Var) -> Result<BoolVar, SolverError> {
        let (vars, id) = match var {
            Var::Select(j) => (&self.x, j),
            Var::Satisfied(e) => (&self.y, e),
        };
        id.checked_sub(1)
            .and_then(|i| vars.get(i))
            .cloned()
            .ok_or_else(|| SolverError::Backend(format!("model references unknown variable {}", var)))
    }

    fn expr(&self, terms: &Terms) -> Result<LinearExpr, SolverError> {
        let weighted_terms = terms
            .iter()
            .map(|&(coef, var)| Ok((coef, self.get(var)?)))
            .collect::<Result<Vec<(i64, BoolVar)>, SolverError>>()?;
        Ok(weighted_terms.into_iter().collect())
    }

    fn read(&self, response: &CpSolverResponse) -> Assignment {
        Assignment {
            selected: self.x.iter().map(|v| v.solution_value(response)).collect(),
            satisfied: self.y.iter().map(|v| v.solution_value(response)).collect(),
        }
    }
}

impl Solver for CpSatSolver {
    fn solve(&self, model: &Model, time_limit: Duration) -> Result<SolveOutcome, SolverError> {
        let mut builder = CpModelBuilder::default();
        let vars = CpSatVars {
            x: (0..model.num_sets).map(|_| builder.new_bool_var()).collect(),
            y: (0..model.num_elements).map(|_| builder.new_bool_var()).collect(),
        };

        for constraint in &model.constraints {
            let lhs = vars.expr(&constraint.terms)?;
            builder.add_ge(lhs, LinearExpr::from(constraint.lower_bound));
        }
        builder.minimize(vars.expr(&model.objective)?);

        tracing::info!(seconds = time_limit.as_secs_f64(), "solving with CP-SAT");
        let response = builder.solve_with_parameters(&self.parameters(time_limit));
        tracing::info!(
            status = ?response.status(),
            objective = response.objective_value,
            "CP-SAT finished"
        );

        match response.status() {
            CpSolverStatus::Optimal => Ok(SolveOutcome::Optimal(vars.read(&response))),
            CpSolverStatus::Feasible => Ok(SolveOutcome::Timeout(Some(vars.read(&response)))),
            CpSolverStatus::Unknown => Ok(SolveOutcome::Timeout(None)),
            CpSolverStatus::Infeasible => Ok(SolveOutcome::Infeasible),
            CpSolverStatus::ModelInvalid => Err(SolverError::ModelInvalid),
        }
    }
}
