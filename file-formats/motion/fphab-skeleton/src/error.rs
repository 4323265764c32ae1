//! Error types for skeleton recording parsing

use std::io;
use thiserror::Error;

/// Error types for F-PHAB skeleton parsing
#[derive(Error, Debug)]
pub enum SkeletonError {
    /// I/O error while reading a recording
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A line carried the wrong number of joint values
    #[error("line {line}: expected {expected} joint values, found {found}")]
    FieldCount {
        /// 1-based line number in the input
        line: usize,
        /// Expected value count (21 joints x 3 components)
        expected: usize,
        /// Value count actually present on the line
        found: usize,
    },

    /// A token on a line did not parse as a float
    #[error("line {line}: invalid number '{token}'")]
    InvalidNumber {
        /// 1-based line number in the input
        line: usize,
        /// The offending token
        token: String,
    },
}

/// Result type using SkeletonError
pub type Result<T> = std::result::Result<T, SkeletonError>;
