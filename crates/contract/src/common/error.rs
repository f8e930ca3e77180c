//! Check failure types.
//!
//! A contract check can fail in exactly one way: an observed value differs
//! from the value the contract declares. The error carries both sides so a
//! report can name them without re-deriving anything.

use std::error::Error;
use std::fmt;

use crate::layout::Primitive;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckError {
    /// A primitive's observed width differs from the contracted width.
    WidthMismatch {
        primitive: Primitive,
        expected: usize,
        observed: usize,
    },
}

impl fmt::Display for CheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckError::WidthMismatch {
                primitive,
                expected,
                observed,
            } => write!(
                f,
                "width mismatch for {primitive}: expected {expected} bytes, observed {observed}"
            ),
        }
    }
}

impl Error for CheckError {}
