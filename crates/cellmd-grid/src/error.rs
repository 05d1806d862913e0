//! Error types for grid construction and consistency checking.

use cellmd_core::ParticleId;
use std::fmt;

/// Errors from grid construction or a failed consistency check.
///
/// Construction errors are fatal configuration errors: a degenerate
/// domain cannot be simulated and there is nothing to retry. Consistency
/// variants are programming-error diagnostics surfaced by
/// [`check_consistency`](crate::LinkedCellGrid::check_consistency); they
/// indicate corrupted spatial indexing, never user input.
#[derive(Debug, Clone, PartialEq)]
pub enum GridError {
    /// The cell edge length is zero, negative, or not finite.
    NonPositiveCellSize {
        /// The offending value.
        value: f64,
    },
    /// A domain axis has zero, negative, or non-finite extent.
    DegenerateExtent {
        /// Axis index (0 = x, 1 = y, 2 = z).
        axis: usize,
        /// The offending extent.
        extent: f64,
    },
    /// A live particle is bound to no cell.
    UnboundParticle {
        /// The unbound particle.
        id: ParticleId,
    },
    /// A particle appears in more than one cell membership.
    MultiplyBound {
        /// The offending particle.
        id: ParticleId,
        /// How many cells claim it.
        count: usize,
    },
    /// The sum of cell-membership sizes disagrees with the store's live
    /// particle count.
    MembershipCountMismatch {
        /// Total members across all cells.
        members: usize,
        /// Live particles in the store.
        live: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveCellSize { value } => {
                write!(f, "cell size must be positive and finite, got {value}")
            }
            Self::DegenerateExtent { axis, extent } => {
                write!(f, "domain extent on axis {axis} must be positive, got {extent}")
            }
            Self::UnboundParticle { id } => {
                write!(f, "live particle {id} is bound to no cell")
            }
            Self::MultiplyBound { id, count } => {
                write!(f, "particle {id} is bound to {count} cells")
            }
            Self::MembershipCountMismatch { members, live } => {
                write!(
                    f,
                    "membership total {members} does not match live particle count {live}"
                )
            }
        }
    }
}

impl std::error::Error for GridError {}
