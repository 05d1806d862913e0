//! cellmd: linked-cell spatial decomposition and parallel pair
//! iteration for short-range molecular dynamics.
//!
//! This is the top-level facade crate that re-exports the public API of
//! the cellmd sub-crates. For most users, adding `cellmd` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use cellmd::prelude::*;
//!
//! // A 10 x 10 x 10 box with a reflective floor, outflow elsewhere.
//! let boundaries = BoundaryConfig::new().with(Face::Bottom, BoundaryKind::Reflective);
//! let config = DomainConfig::new(Vec3::ZERO, Vec3::new(10.0, 10.0, 10.0), 2.5)
//!     .with_boundaries(boundaries)
//!     .with_threads(2);
//! let mut domain = Domain::new(config).unwrap();
//!
//! // Two argon-ish particles a little under the potential minimum apart.
//! let mut registry = TypeRegistry::new();
//! registry.register(ParticleType(0), LjParams { epsilon: 1.0, sigma: 1.0 });
//! let force = LennardJones::new(registry, 2.5);
//! domain.emplace(Vec3::new(5.0, 5.0, 5.0), Vec3::ZERO, 1.0, ParticleType(0));
//! domain.emplace(Vec3::new(6.0, 5.0, 5.0), Vec3::ZERO, 1.0, ParticleType(0));
//!
//! domain.compute_forces(&force, PairScheme::BlockColors);
//! assert!(domain.store().as_slice()[0].force.x < 0.0); // pushed apart
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in
//! the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `cellmd-core` | `Vec3`, particles, ids, the `PairForce` trait |
//! | [`store`] | `cellmd-store` | The compacting particle store |
//! | [`grid`] | `cellmd-grid` | Geometry, cell layout, the linked-cell grid |
//! | [`boundary`] | `cellmd-boundary` | Faces, boundary kinds, boundary phases |
//! | [`parallel`] | `cellmd-parallel` | Pair schemes, color partitions, the executor |
//! | [`forces`] | `cellmd-forces` | Lennard-Jones, harmonic, gravity force laws |
//! | [`engine`] | `cellmd-engine` | The `Domain` facade and its configuration |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types: vectors, particles, ids, and the `PairForce` trait
/// (`cellmd-core`).
pub use cellmd_core as types;

/// The compacting particle store (`cellmd-store`).
pub use cellmd_store as store;

/// Grid geometry, cell layout, and the linked-cell grid itself
/// (`cellmd-grid`).
pub use cellmd_grid as grid;

/// Domain faces, boundary kinds, and the boundary phases
/// (`cellmd-boundary`).
pub use cellmd_boundary as boundary;

/// Pair-iteration schemes, color partitions, and the executor
/// (`cellmd-parallel`).
pub use cellmd_parallel as parallel;

/// Short-range pair force laws (`cellmd-forces`).
pub use cellmd_forces as forces;

/// The `Domain` facade and its configuration (`cellmd-engine`).
pub use cellmd_engine as engine;

/// Common imports for typical cellmd usage.
///
/// ```rust
/// use cellmd::prelude::*;
/// ```
pub mod prelude {
    pub use cellmd_boundary::{BoundaryConfig, BoundaryKind, Face};
    pub use cellmd_core::{
        LjParams, PairForce, Particle, ParticleId, ParticleType, TypeRegistry, Vec3,
    };
    pub use cellmd_engine::{ConfigError, Domain, DomainConfig};
    pub use cellmd_forces::{Gravity, Harmonic, LennardJones};
    pub use cellmd_grid::{CellKind, GridError, GridGeometry, LinkedCellGrid};
    pub use cellmd_parallel::{PairExecutor, PairScheme};
    pub use cellmd_store::ParticleStore;
}
