//! Per-face boundary configuration and its validation.

use crate::error::BoundaryError;
use crate::face::Face;
use std::fmt;

/// The closed set of boundary behaviors.
///
/// A sum type rather than an open trait: the behavior set is fixed and
/// exhaustive, and matching on it lets the compiler prove every kind is
/// handled in every phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoundaryKind {
    /// Particles leaving through this face are discarded.
    #[default]
    Outflow,
    /// A repulsive wall: particles near the face are pushed back by a
    /// mirror-image force; nothing crosses.
    Reflective,
    /// The face wraps onto its opposite; requires the opposite face to
    /// be periodic too.
    Periodic,
}

impl fmt::Display for BoundaryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BoundaryKind::Outflow => "OUTFLOW",
            BoundaryKind::Reflective => "REFLECT",
            BoundaryKind::Periodic => "PERIODIC",
        };
        write!(f, "{name}")
    }
}

/// Mapping from each of the six faces to its [`BoundaryKind`].
///
/// Defaults to outflow everywhere. [`validate`](Self::validate) enforces
/// the periodic-pairing rule: wrapping is physically meaningless unless
/// both faces of an axis participate, so an unpaired periodic face is a
/// fatal configuration error, not something to approximate silently.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BoundaryConfig {
    kinds: [BoundaryKind; 6],
}

impl BoundaryConfig {
    /// All faces outflow.
    pub fn new() -> Self {
        Self::default()
    }

    /// The same kind on all six faces.
    pub fn uniform(kind: BoundaryKind) -> Self {
        Self { kinds: [kind; 6] }
    }

    /// Set one face's kind (builder style).
    pub fn with(mut self, face: Face, kind: BoundaryKind) -> Self {
        self.kinds[face.index()] = kind;
        self
    }

    /// Set both faces of an axis to the same kind (builder style).
    pub fn with_axis(self, face: Face, kind: BoundaryKind) -> Self {
        self.with(face, kind).with(face.opposite(), kind)
    }

    /// The kind configured for a face.
    pub fn kind(&self, face: Face) -> BoundaryKind {
        self.kinds[face.index()]
    }

    /// Which axes have (validated) periodic wrapping.
    pub fn periodic_axes(&self) -> [bool; 3] {
        let mut axes = [false; 3];
        for face in Face::ALL {
            if self.kind(face) == BoundaryKind::Periodic {
                axes[face.axis()] = true;
            }
        }
        axes
    }

    /// Check the periodic-pairing rule.
    pub fn validate(&self) -> Result<(), BoundaryError> {
        for face in Face::ALL {
            if self.kind(face) == BoundaryKind::Periodic
                && self.kind(face.opposite()) != BoundaryKind::Periodic
            {
                return Err(BoundaryError::UnpairedPeriodic {
                    face,
                    opposite: face.opposite(),
                });
            }
        }
        Ok(())
    }
}
