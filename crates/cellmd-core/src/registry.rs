//! Per-type Lennard-Jones parameter registry.

use crate::id::ParticleType;
use indexmap::IndexMap;

/// Lennard-Jones parameters for one particle type (or one type pair after
/// mixing).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LjParams {
    /// Potential well depth ε.
    pub epsilon: f64,
    /// Zero-crossing distance σ.
    pub sigma: f64,
}

impl LjParams {
    /// The separation 2^(1/6)·σ at which the potential is at its minimum.
    ///
    /// A reflective wall evaluated only inside this distance is purely
    /// repulsive, which is what wall boundaries want.
    pub fn repulsive_distance(&self) -> f64 {
        2f64.powf(1.0 / 6.0) * self.sigma
    }
}

/// Explicitly-owned mapping from particle type tag to [`LjParams`].
///
/// There is deliberately no process-wide registry: whichever component
/// resolves parameters receives a `&TypeRegistry`, so tests can build
/// isolated registries and two simulations never share hidden state.
///
/// Unlike-type pairs resolve via Lorentz-Berthelot mixing: arithmetic
/// mean of σ, geometric mean of ε.
#[derive(Clone, Debug, Default)]
pub struct TypeRegistry {
    params: IndexMap<ParticleType, LjParams>,
}

impl TypeRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register parameters for a type, replacing any previous entry.
    pub fn register(&mut self, tag: ParticleType, params: LjParams) {
        self.params.insert(tag, params);
    }

    /// Parameters for a single type, if registered.
    pub fn get(&self, tag: ParticleType) -> Option<LjParams> {
        self.params.get(&tag).copied()
    }

    /// Mixed parameters for a pair of types.
    ///
    /// Returns `None` if either type is unregistered. Symmetric:
    /// `mixed(a, b) == mixed(b, a)`.
    pub fn mixed(&self, a: ParticleType, b: ParticleType) -> Option<LjParams> {
        let pa = self.get(a)?;
        let pb = self.get(b)?;
        Some(LjParams {
            epsilon: (pa.epsilon * pb.epsilon).sqrt(),
            sigma: 0.5 * (pa.sigma + pb.sigma),
        })
    }

    /// Number of registered types.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether no types are registered.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
