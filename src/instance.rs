//! The immutable PSMC problem instance and its line-oriented text format.

use std::collections::BTreeSet;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::error::FormatError;

/// 1-based index of a set, its line position among the set lines.
pub type SetId = usize;
/// 1-based index of an element in the universe.
pub type ElementId = usize;

/// A parsed Partial Set Multi-Cover instance.
///
/// Fields are private: an `Instance` can only be obtained through
/// [`Instance::new`] or [`str::parse`], both of which reject out-of-range
/// references, so every `Instance` in the program is well formed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instance {
    threshold: usize,
    requirements: Vec<u32>,
    costs: Vec<u32>,
    members: Vec<BTreeSet<ElementId>>,
}

impl Instance {
    /// Builds an instance from per-element requirements, per-set costs and
    /// per-set memberships. Index `i` of each vector describes id `i + 1`.
    pub fn new(
        threshold: usize,
        requirements: Vec<u32>,
        costs: Vec<u32>,
        members: Vec<Vec<ElementId>>,
    ) -> Result<Self, FormatError> {
        if requirements.is_empty() {
            return Err(FormatError::OutOfRange {
                line: 1,
                what: "number of elements",
                min: 1,
                value: 0,
            });
        }
        if costs.is_empty() {
            return Err(FormatError::OutOfRange {
                line: 1,
                what: "number of sets",
                min: 1,
                value: 0,
            });
        }
        if threshold == 0 {
            return Err(FormatError::OutOfRange {
                line: 1,
                what: "threshold",
                min: 1,
                value: 0,
            });
        }
        if requirements.contains(&0) {
            return Err(FormatError::OutOfRange {
                line: 2,
                what: "requirement",
                min: 1,
                value: 0,
            });
        }
        if members.len() != costs.len() {
            return Err(FormatError::WrongSetCount {
                expected: costs.len(),
                found: members.len(),
            });
        }

        let num_elements = requirements.len();
        let mut normalized = Vec::with_capacity(members.len());
        for (idx, elements) in members.into_iter().enumerate() {
            let set = idx + 1;
            let mut contents = BTreeSet::new();
            for element in elements {
                if element == 0 || element > num_elements {
                    return Err(FormatError::UnknownElement {
                        set,
                        element,
                        num_elements,
                    });
                }
                if !contents.insert(element) {
                    tracing::warn!(set, element, "element listed twice in one set, keeping one");
                }
            }
            normalized.push(contents);
        }

        Ok(Self {
            threshold,
            requirements,
            costs,
            members: normalized,
        })
    }

    pub fn num_elements(&self) -> usize {
        self.requirements.len()
    }

    pub fn num_sets(&self) -> usize {
        self.costs.len()
    }

    /// Minimum number of elements that must be satisfied (P).
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn element_ids(&self) -> RangeInclusive<ElementId> {
        1..=self.num_elements()
    }

    pub fn set_ids(&self) -> RangeInclusive<SetId> {
        1..=self.num_sets()
    }

    pub fn requirement(&self, element: ElementId) -> Option<u32> {
        element
            .checked_sub(1)
            .and_then(|i| self.requirements.get(i))
            .copied()
    }

    pub fn cost(&self, set: SetId) -> Option<u32> {
        set.checked_sub(1).and_then(|i| self.costs.get(i)).copied()
    }

    pub fn members(&self, set: SetId) -> Option<&BTreeSet<ElementId>> {
        set.checked_sub(1).and_then(|i| self.members.get(i))
    }

    /// For each element (index `e - 1`), the ids of the sets containing it.
    pub fn containing_sets(&self) -> Vec<Vec<SetId>> {
        let mut containing = vec![Vec::new(); self.num_elements()];
        for (idx, contents) in self.members.iter().enumerate() {
            for &element in contents {
                containing[element - 1].push(idx + 1);
            }
        }
        containing
    }
}

/// Splits one line into integers, reporting the first token that is not one.
fn parse_ints(line: &str, line_no: usize) -> Result<Vec<i64>, FormatError> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<i64>().map_err(|_| FormatError::NotAnInteger {
                line: line_no,
                token: token.to_string(),
            })
        })
        .collect()
}

fn expect_count(values: &[i64], expected: usize, line: usize) -> Result<(), FormatError> {
    if values.len() != expected {
        return Err(FormatError::WrongTokenCount {
            line,
            expected,
            found: values.len(),
        });
    }
    Ok(())
}

fn bounded<T: TryFrom<i64>>(
    value: i64,
    min: i64,
    line: usize,
    what: &'static str,
) -> Result<T, FormatError> {
    let out_of_range = FormatError::OutOfRange {
        line,
        what,
        min,
        value,
    };
    if value < min {
        return Err(out_of_range);
    }
    T::try_from(value).map_err(|_| out_of_range)
}

impl FromStr for Instance {
    type Err = FormatError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        // Split on every newline so that a final newline after the last set
        // line still yields that (possibly empty) set line.
        let lines: Vec<&str> = text
            .split('\n')
            .map(|l| l.strip_suffix('\r').unwrap_or(l))
            .collect();
        if lines.iter().all(|l| l.trim().is_empty()) {
            return Err(FormatError::Empty);
        }

        let header = parse_ints(lines[0], 1)?;
        expect_count(&header, 3, 1)?;
        let num_elements: usize = bounded(header[0], 1, 1, "number of elements")?;
        let num_sets: usize = bounded(header[1], 1, 1, "number of sets")?;
        let threshold: usize = bounded(header[2], 1, 1, "threshold")?;

        let requirements = parse_ints(lines.get(1).copied().unwrap_or(""), 2)?;
        expect_count(&requirements, num_elements, 2)?;
        let requirements = requirements
            .into_iter()
            .map(|r| bounded::<u32>(r, 1, 2, "requirement"))
            .collect::<Result<Vec<_>, _>>()?;

        let costs = parse_ints(lines.get(2).copied().unwrap_or(""), 3)?;
        expect_count(&costs, num_sets, 3)?;
        let costs = costs
            .into_iter()
            .map(|c| bounded::<u32>(c, 0, 3, "cost"))
            .collect::<Result<Vec<_>, _>>()?;

        // An empty line is an empty set, so only blank lines past the last
        // set line may be ignored.
        let set_lines = lines.get(3..).unwrap_or(&[]);
        let found = set_lines.len()
            - set_lines
                .iter()
                .skip(num_sets)
                .filter(|l| l.trim().is_empty())
                .count();
        if found != num_sets {
            return Err(FormatError::WrongSetCount {
                expected: num_sets,
                found,
            });
        }

        let mut members = Vec::with_capacity(num_sets);
        for idx in 0..num_sets {
            let line_no = idx + 4;
            let elements = parse_ints(set_lines[idx], line_no)?
                .into_iter()
                .map(|e| bounded::<ElementId>(e, 1, line_no, "element id"))
                .collect::<Result<Vec<_>, _>>()?;
            members.push(elements);
        }

        Instance::new(threshold, requirements, costs, members)
    }
}
