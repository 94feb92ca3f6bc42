//! Errors raised at the boundary of the library.
//!
//! The sorting routines themselves cannot fail. Errors only come from turning user supplied text
//! and identifiers into sequences and algorithms.

use std::error::Error;
use std::fmt::{Display, Formatter, Result};

use crate::algorithm::Algorithm;

/// Error type for input parsing and algorithm selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// The input sequence is empty or holds values that can't be ordered, such as NaN.
    InvalidInput(String),

    /// The algorithm identifier names no known algorithm.
    UnsupportedAlgorithm(String),
}

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            Self::UnsupportedAlgorithm(id) => {
                let supported = Algorithm::ALL
                    .iter()
                    .map(|algorithm| algorithm.id())
                    .collect::<Vec<_>>()
                    .join(", ");

                write!(
                    f,
                    "Invalid algorithm '{id}'. Supported algorithms: {supported}"
                )
            }
        }
    }
}

impl Error for SortError {}
