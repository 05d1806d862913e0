//! Boundary configuration errors.

use crate::face::Face;
use std::fmt;

/// Errors from boundary configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoundaryError {
    /// A face is periodic but its opposite is not. The wrap pairing is
    /// required for physical correctness and cannot be approximated.
    UnpairedPeriodic {
        /// The periodic face.
        face: Face,
        /// Its non-periodic opposite.
        opposite: Face,
    },
}

impl fmt::Display for BoundaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnpairedPeriodic { face, opposite } => write!(
                f,
                "face {face} is PERIODIC but opposite face {opposite} is not"
            ),
        }
    }
}

impl std::error::Error for BoundaryError {}
