//! Error types for table construction and the command-line front end.

use thiserror::Error;

/// Failures the engine can report. None of these occur for well-formed
/// input that fits in memory.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LcsError {
    /// `rows * cols` does not fit in `usize`.
    #[error("table of {rows} x {cols} cells overflows the address space")]
    CellCountOverflow { rows: usize, cols: usize },

    /// The table would exceed the configured cell limit.
    #[error("table needs {cells} cells but the limit is {limit}")]
    CellLimitExceeded { cells: usize, limit: usize },

    /// The allocator refused the table's backing storage.
    #[error("failed to allocate a table of {cells} cells")]
    TableAllocation { cells: usize },

    /// Backtracking was given a column sequence of the wrong length.
    #[error("table has {expected} columns but backtrack got {got} tokens")]
    ColumnMismatch { expected: usize, got: usize },
}

/// Argument validation failures for the `lcs` binary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("You must provide at least 2 arguments: <len1> <len2> <tokens...>")]
    Usage,

    #[error("invalid sequence length '{0}': expected a non-negative integer")]
    InvalidLength(String),

    #[error("invalid cell limit '{0}': expected a non-negative integer")]
    InvalidCellLimit(String),

    #[error("Sequence lengths must be valid: declared {declared} tokens, got {supplied}")]
    LengthMismatch { declared: usize, supplied: usize },

    #[error(transparent)]
    Lcs(#[from] LcsError),
}

impl CliError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Usage
            | CliError::InvalidLength(_)
            | CliError::InvalidCellLimit(_)
            | CliError::LengthMismatch { .. } => 2,
            CliError::Lcs(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resource_errors_exit_with_one() {
        let err = CliError::from(LcsError::TableAllocation { cells: 10 });
        assert_eq!(err.exit_code(), 1);
        assert_eq!(err.to_string(), "failed to allocate a table of 10 cells");
    }

    #[test]
    fn usage_errors_exit_with_two() {
        assert_eq!(CliError::Usage.exit_code(), 2);
        assert_eq!(CliError::InvalidLength("-1".into()).exit_code(), 2);
        assert_eq!(
            CliError::LengthMismatch {
                declared: 3,
                supplied: 1
            }
            .exit_code(),
            2
        );
    }
}
