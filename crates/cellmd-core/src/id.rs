//! Strongly-typed identifiers.

use std::fmt;

/// Identity of a particle within a [`ParticleStore`].
///
/// A `ParticleId` is the particle's current index in the store. It is
/// stable only between compactions: `restructure()` may compact the store,
/// after which surviving particles can carry different ids. Callers must
/// not retain ids across a restructure.
///
/// [`ParticleStore`]: ../cellmd_store/struct.ParticleStore.html
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleId(pub u32);

impl ParticleId {
    /// The id as a store index.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ParticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ParticleId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Integer type tag carried by every particle.
///
/// Resolves to per-type interaction parameters through a
/// [`TypeRegistry`](crate::TypeRegistry). The tag itself carries no
/// physics; two registries may map the same tag differently.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ParticleType(pub u32);

impl fmt::Display for ParticleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ParticleType {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
