//! Reading and writing instance/solution text files.
//!
//! Pairing an instance with its solution through the digits in their file
//! names (`instance07.txt` / `solution07.txt`) is a convenience of the
//! command-line tools only. The library calls take explicit values.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{FormatError, PsmcError};
use crate::instance::Instance;
use crate::solution::Solution;

lazy_static! {
    static ref FILE_NUMBER: Regex = Regex::new(r"\d+").expect("valid file number pattern");
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> PsmcError + '_ {
    move |source| PsmcError::Io {
        path: path.to_path_buf(),
        source,
    }
}

pub fn read_text(path: &Path) -> Result<String, PsmcError> {
    fs::read_to_string(path).map_err(io_error(path))
}

pub fn read_instance(path: &Path) -> Result<Instance, PsmcError> {
    Ok(read_text(path)?.parse::<Instance>()?)
}

pub fn read_solution(path: &Path) -> Result<Solution, PsmcError> {
    Ok(read_text(path)?.parse::<Solution>()?)
}

/// Deletes a solution left at `path` by an earlier run, if any.
pub fn remove_stale_solution(path: &Path) -> Result<(), PsmcError> {
    match fs::remove_file(path) {
        Ok(()) => {
            tracing::debug!(?path, "removed previous solution file");
            Ok(())
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(io_error(path)(e)),
    }
}

/// Writes the single solution line to a file that must not exist yet.
pub fn create_solution(path: &Path, solution: &Solution) -> Result<(), PsmcError> {
    let mut file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(io_error(path))?;
    write!(file, "{}", solution).map_err(io_error(path))
}

/// Replaces any existing file at `path` with the single solution line.
pub fn write_solution(path: &Path, solution: &Solution) -> Result<(), PsmcError> {
    remove_stale_solution(path)?;
    create_solution(path, solution)
}

/// Command-line tools only accept `.txt` files; anything else is a usage
/// error rather than a malformed file.
pub fn ensure_txt(path: &Path) -> Result<(), PsmcError> {
    if path.extension().and_then(|e| e.to_str()) == Some("txt") {
        Ok(())
    } else {
        Err(PsmcError::NotText {
            path: path.to_path_buf(),
        })
    }
}

/// First run of digits in the file name, e.g. `"01"` for `instance01.txt`.
pub fn file_number(path: &Path) -> Option<String> {
    let name = path.file_name()?.to_str()?;
    FILE_NUMBER.find(name).map(|m| m.as_str().to_string())
}

/// `solution<N>.txt` for an instance file named with number `<N>`.
pub fn default_solution_path(instance_path: &Path) -> Result<PathBuf, FormatError> {
    let number = file_number(instance_path).ok_or_else(|| FormatError::MissingId {
        path: instance_path.to_path_buf(),
    })?;
    Ok(PathBuf::from(format!("solution{}.txt", number)))
}

/// Checks that an instance file and a solution file carry the same number.
pub fn check_matching_ids(instance_path: &Path, solution_path: &Path) -> Result<(), FormatError> {
    let instance = file_number(instance_path).ok_or_else(|| FormatError::MissingId {
        path: instance_path.to_path_buf(),
    })?;
    let solution = file_number(solution_path).ok_or_else(|| FormatError::MissingId {
        path: solution_path.to_path_buf(),
    })?;
    if instance != solution {
        return Err(FormatError::MismatchedIds { instance, solution });
    }
    Ok(())
}
