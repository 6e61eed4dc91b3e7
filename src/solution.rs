//! Candidate solutions and their single-line text format `k cost id_1 .. id_k`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FormatError;
use crate::instance::SetId;

/// How the backend terminated when it produced a solution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provenance {
    /// The backend proved the solution optimal.
    Optimal,
    /// Best incumbent when the time limit was hit; possibly suboptimal.
    Timeout,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::Optimal => write!(f, "optimal"),
            Provenance::Timeout => write!(f, "timeout"),
        }
    }
}

/// A list of selected sets plus a declared total cost.
///
/// The declared cost is whatever the producer wrote; the certifier
/// recomputes it from the instance and never trusts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    pub sets: Vec<SetId>,
    pub cost: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provenance: Option<Provenance>,
}

impl Solution {
    pub fn new(sets: Vec<SetId>, cost: i64) -> Self {
        Self {
            sets,
            cost,
            provenance: None,
        }
    }

    pub fn with_provenance(mut self, provenance: Provenance) -> Self {
        self.provenance = Some(provenance);
        self
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.sets.len(), self.cost)?;
        for set in &self.sets {
            write!(f, " {}", set)?;
        }
        Ok(())
    }
}

impl FromStr for Solution {
    type Err = FormatError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let mut lines = text
            .lines()
            .enumerate()
            .filter(|(_, l)| !l.trim().is_empty());
        let (_, line) = lines.next().ok_or(FormatError::Empty)?;
        if let Some((idx, _)) = lines.next() {
            return Err(FormatError::UnexpectedLine { line: idx + 1 });
        }

        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() < 2 {
            return Err(FormatError::WrongTokenCount {
                line: 1,
                expected: 2,
                found: tokens.len(),
            });
        }
        let not_an_integer = |token: &str| FormatError::NotAnInteger {
            line: 1,
            token: token.to_string(),
        };

        let declared: usize = tokens[0].parse().map_err(|_| not_an_integer(tokens[0]))?;
        let cost: i64 = tokens[1].parse().map_err(|_| not_an_integer(tokens[1]))?;
        let sets = tokens[2..]
            .iter()
            .map(|t| t.parse::<SetId>().map_err(|_| not_an_integer(t)))
            .collect::<Result<Vec<_>, _>>()?;

        if declared != sets.len() {
            return Err(FormatError::SetCountMismatch {
                declared,
                listed: sets.len(),
            });
        }

        Ok(Solution::new(sets, cost))
    }
}
