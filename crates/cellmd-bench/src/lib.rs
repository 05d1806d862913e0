//! Benchmark profiles for the cellmd molecular dynamics core.
//!
//! Provides pre-built domains for benchmarking:
//!
//! - [`reference_profile`]: ~4K particles on a 20³-cell periodic box
//! - [`stress_profile`]: ~32K particles on a 40³-cell periodic box
//! - [`reference_force`]: the Lennard-Jones parameterization both use

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use cellmd_boundary::{BoundaryConfig, BoundaryKind};
use cellmd_core::{LjParams, ParticleType, TypeRegistry, Vec3};
use cellmd_engine::{Domain, DomainConfig};
use cellmd_forces::LennardJones;
use cellmd_test_utils::{fill_grid, random_positions};

/// Cutoff shared by the benchmark profiles; also the cell edge.
pub const CUTOFF: f64 = 2.5;

/// The Lennard-Jones parameterization of the benchmark profiles.
pub fn reference_force() -> LennardJones {
    let mut registry = TypeRegistry::new();
    registry.register(
        ParticleType(0),
        LjParams {
            epsilon: 1.0,
            sigma: 1.0,
        },
    );
    LennardJones::new(registry, CUTOFF)
}

/// A periodic box of `cells` cells per axis filled with a seeded
/// uniform cloud, roughly half a particle per cell.
fn profile(cells: usize, particles: usize, seed: u64) -> Domain {
    let extent = CUTOFF * cells as f64;
    let max = Vec3::new(extent, extent, extent);
    let config = DomainConfig::new(Vec3::ZERO, max, CUTOFF)
        .with_boundaries(BoundaryConfig::uniform(BoundaryKind::Periodic));
    let mut domain = Domain::new(config).unwrap_or_else(|e| panic!("profile config: {e}"));
    let positions = random_positions(seed, Vec3::ZERO, max, particles);
    fill_grid(domain.grid_mut(), &positions, ParticleType(0));
    domain
}

/// Reference profile: 20³ cells, ~4K particles.
pub fn reference_profile(seed: u64) -> Domain {
    profile(20, 4_000, seed)
}

/// Stress profile: 40³ cells, ~32K particles.
pub fn stress_profile(seed: u64) -> Domain {
    profile(40, 32_000, seed)
}
