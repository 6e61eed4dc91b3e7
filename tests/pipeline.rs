use std::fs;
use std::time::Duration;

use psmc_core::certify::{self, Verdict};
use psmc_core::{
    Assignment, Instance, Model, Provenance, PsmcError, SolveOutcome, Solver, SolverConfig,
    SolverError, Var, extract_outcome, model, solve_instance, solve_instance_file,
};

/// Tries every 0-1 assignment of a small model and keeps the cheapest
/// feasible one.
struct ExhaustiveSolver;

impl Solver for ExhaustiveSolver {
    fn solve(&self, model: &Model, _time_limit: Duration) -> Result<SolveOutcome, SolverError> {
        let vars: Vec<Var> = model.variables().collect();
        assert!(vars.len() <= 16, "model too large for exhaustive search");

        let mut best: Option<(i64, Assignment)> = None;
        for mask in 0u32..(1 << vars.len()) {
            let mut assignment = Assignment::zeros(model);
            for (bit, &var) in vars.iter().enumerate() {
                assignment.set(var, mask & (1 << bit) != 0);
            }
            if !model.is_satisfied_by(&assignment) {
                continue;
            }
            let value = model.objective_value(&assignment);
            if best.as_ref().is_none_or(|(v, _)| value < *v) {
                best = Some((value, assignment));
            }
        }
        Ok(match best {
            Some((_, assignment)) => SolveOutcome::Optimal(assignment),
            None => SolveOutcome::Infeasible,
        })
    }
}

/// Reports a fixed outcome regardless of the model.
struct FixedSolver(Result<SolveOutcome, SolverError>);

impl Solver for FixedSolver {
    fn solve(&self, _model: &Model, _time_limit: Duration) -> Result<SolveOutcome, SolverError> {
        self.0.clone()
    }
}

fn sample() -> Instance {
    "3 2 2\n1 1 1\n5 3\n1 2\n2 3".parse().unwrap()
}

#[test]
fn test_solve_then_certify() {
    let instance = sample();
    let solution = solve_instance(&instance, &ExhaustiveSolver, &SolverConfig::default()).unwrap();
    assert_eq!(solution.sets, vec![2]);
    assert_eq!(solution.cost, 3);
    assert_eq!(solution.provenance, Some(Provenance::Optimal));
    assert_eq!(certify::certify(&instance, &solution).unwrap(), Verdict::Correct);
}

#[test]
fn test_certifier_reads_solution_text_only() {
    let instance = sample();
    let solution = solve_instance(&instance, &ExhaustiveSolver, &SolverConfig::default()).unwrap();
    let reparsed = solution.to_string().parse().unwrap();
    assert_eq!(certify::certify(&instance, &reparsed).unwrap(), Verdict::Correct);
}

#[test]
fn test_multi_cover_instance() {
    // Element 1 needs two covering sets, element 2 needs one; two of three
    // elements must be satisfied.
    let instance: Instance = "3 4 2\n2 1 1\n2 2 5 9\n1 2\n1\n3\n2 3\n"
        .parse()
        .unwrap();
    let solution = solve_instance(&instance, &ExhaustiveSolver, &SolverConfig::default()).unwrap();
    assert_eq!(solution.sets, vec![1, 2]);
    assert_eq!(solution.cost, 4);
    assert_eq!(certify::certify(&instance, &solution).unwrap(), Verdict::Correct);
}

#[test]
fn test_infeasible_instance() {
    // Element 1 needs two sets but only one contains it, so at most two
    // elements can ever be satisfied.
    let instance: Instance = "3 2 3\n2 1 1\n1 1\n1 2\n3\n".parse().unwrap();
    let err = solve_instance(&instance, &ExhaustiveSolver, &SolverConfig::default()).unwrap_err();
    assert!(matches!(err, PsmcError::Solver(SolverError::Infeasible)));
}

#[test]
fn test_timeout_keeps_incumbent() {
    let instance = sample();
    let model = model::build(&instance);
    let incumbent = Assignment {
        selected: vec![true, true],
        satisfied: vec![true, true, true],
    };
    let solver = FixedSolver(Ok(SolveOutcome::Timeout(Some(incumbent))));
    let solution = solve_instance(&instance, &solver, &SolverConfig::default()).unwrap();
    assert_eq!(solution.sets, vec![1, 2]);
    assert_eq!(solution.cost, 8);
    assert_eq!(solution.provenance, Some(Provenance::Timeout));
    // Feasible but not minimal: the timeout made no optimality promise.
    assert_eq!(
        certify::certify(&instance, &solution).unwrap(),
        Verdict::NotMinimal { removable: 1 }
    );

    let err = extract_outcome(&model, SolveOutcome::Timeout(None), Duration::from_secs(5));
    assert_eq!(err, Err(SolverError::NoSolution { seconds: 5.0 }));
}

#[test]
fn test_backend_errors_surface() {
    let solver = FixedSolver(Err(SolverError::ModelInvalid));
    let err = solve_instance(&sample(), &solver, &SolverConfig::default()).unwrap_err();
    assert!(matches!(err, PsmcError::Solver(SolverError::ModelInvalid)));
}

#[test]
fn test_invalid_time_limit_rejected() {
    let config = SolverConfig {
        time_limit_secs: 0.0,
        ..SolverConfig::default()
    };
    let err = solve_instance(&sample(), &ExhaustiveSolver, &config).unwrap_err();
    assert!(matches!(err, PsmcError::Config(_)));
}

#[test]
fn test_instances_are_independent() {
    let a = sample();
    let b: Instance = "2 2 1\n1 1\n1 7\n1\n2\n".parse().unwrap();
    let sa = solve_instance(&a, &ExhaustiveSolver, &SolverConfig::default()).unwrap();
    let sb = solve_instance(&b, &ExhaustiveSolver, &SolverConfig::default()).unwrap();
    assert_eq!(sb.sets, vec![1]);
    assert_eq!(sb.cost, 1);
    assert_eq!(certify::certify(&a, &sa).unwrap(), Verdict::Correct);
    assert_eq!(certify::certify(&b, &sb).unwrap(), Verdict::Correct);
}

#[test]
fn test_failed_solve_leaves_no_solution_file() {
    let dir = tempfile::tempdir().unwrap();
    let instance_path = dir.path().join("instance07.txt");
    let output = dir.path().join("solution07.txt");
    fs::write(&instance_path, "3 2 2\n1 1 1\n5 3\n1 2\n2 3\n").unwrap();
    fs::write(&output, "1 5 1").unwrap();

    let solver = FixedSolver(Err(SolverError::Infeasible));
    let err = solve_instance_file(&instance_path, &output, &solver, &SolverConfig::default())
        .unwrap_err();
    assert!(matches!(err, PsmcError::Solver(SolverError::Infeasible)));
    assert!(!output.exists());
}

#[test]
fn test_malformed_instance_leaves_no_solution_file() {
    let dir = tempfile::tempdir().unwrap();
    let instance_path = dir.path().join("instance08.txt");
    let output = dir.path().join("solution08.txt");
    fs::write(&instance_path, "3 2 2\n1 1 1\n").unwrap();
    fs::write(&output, "1 5 1").unwrap();

    let err = solve_instance_file(&instance_path, &output, &ExhaustiveSolver, &SolverConfig::default())
        .unwrap_err();
    assert!(err.is_format());
    assert!(!output.exists());
}

#[test]
fn test_solve_instance_file_replaces_old_solution() {
    let dir = tempfile::tempdir().unwrap();
    let instance_path = dir.path().join("instance09.txt");
    let output = dir.path().join("solution09.txt");
    fs::write(&instance_path, "3 2 2\n1 1 1\n5 3\n1 2\n2 3\n").unwrap();
    fs::write(&output, "2 8 1 2").unwrap();

    let solution =
        solve_instance_file(&instance_path, &output, &ExhaustiveSolver, &SolverConfig::default())
            .unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), solution.to_string());
    assert_eq!(solution.sets, vec![2]);
}
