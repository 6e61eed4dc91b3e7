//! Error taxonomy shared by the solving and certification pipelines.

use std::path::PathBuf;

use crate::instance::{ElementId, SetId};

/// Malformed or inconsistent instance/solution text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("input is empty")]
    Empty,

    #[error("line {line}: token {token:?} is not an integer")]
    NotAnInteger { line: usize, token: String },

    #[error("line {line}: expected {expected} values, found {found}")]
    WrongTokenCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: unexpected content after the last expected line")]
    UnexpectedLine { line: usize },

    #[error("expected {expected} set lines, found {found}")]
    WrongSetCount { expected: usize, found: usize },

    #[error("line {line}: {what} must be at least {min}, got {value}")]
    OutOfRange {
        line: usize,
        what: &'static str,
        min: i64,
        value: i64,
    },

    #[error("set {set} references element {element}, outside 1..={num_elements}")]
    UnknownElement {
        set: SetId,
        element: ElementId,
        num_elements: usize,
    },

    #[error("solution references set {set}, outside 1..={num_sets}")]
    UnknownSet { set: SetId, num_sets: usize },

    #[error("solution selects set {set} more than once")]
    DuplicateSet { set: SetId },

    #[error("solution declares {declared} sets but lists {listed}")]
    SetCountMismatch { declared: usize, listed: usize },

    #[error("instance {instance:?} and solution {solution:?} do not match")]
    MismatchedIds { instance: String, solution: String },

    #[error("no numeric identifier in file name {path:?}")]
    MissingId { path: PathBuf },
}

/// Failure reported by the solving backend.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SolverError {
    #[error("the model is infeasible")]
    Infeasible,

    #[error("no solution found within {seconds:.1}s")]
    NoSolution { seconds: f64 },

    #[error("the backend rejected the model as invalid")]
    ModelInvalid,

    #[error("solver backend error: {0}")]
    Backend(String),
}

#[derive(Debug, thiserror::Error)]
pub enum PsmcError {
    #[error("wrong format: {0}")]
    Format(#[from] FormatError),

    #[error(transparent)]
    Solver(#[from] SolverError),

    #[error("{path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("{path:?} is not a .txt file")]
    NotText { path: PathBuf },
}

impl PsmcError {
    pub fn is_format(&self) -> bool {
        matches!(self, PsmcError::Format(_))
    }
}

/// True when `err` (possibly wrapped in context) is a format violation.
pub fn is_format_error(err: &anyhow::Error) -> bool {
    err.downcast_ref::<FormatError>().is_some()
        || err.downcast_ref::<PsmcError>().is_some_and(PsmcError::is_format)
}
