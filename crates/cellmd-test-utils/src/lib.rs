//! Test fixtures and reference implementations for cellmd development.
//!
//! Provides deterministic particle arrangements (lattices, seeded random
//! clouds) and an O(n²) all-pairs force reference the linked-cell passes
//! are checked against.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use cellmd_core::{PairForce, Particle, ParticleType, Vec3};
use cellmd_grid::LinkedCellGrid;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

/// Positions on a regular cubic lattice starting at `origin`, `counts`
/// sites per axis at the given spacing.
pub fn cubic_lattice(origin: Vec3, spacing: f64, counts: [usize; 3]) -> Vec<Vec3> {
    let mut positions = Vec::with_capacity(counts[0] * counts[1] * counts[2]);
    for x in 0..counts[0] {
        for y in 0..counts[1] {
            for z in 0..counts[2] {
                positions.push(Vec3::new(
                    origin.x + spacing * x as f64,
                    origin.y + spacing * y as f64,
                    origin.z + spacing * z as f64,
                ));
            }
        }
    }
    positions
}

/// `count` positions uniformly distributed in the box `[min, max]`,
/// deterministic in `seed`.
pub fn random_positions(seed: u64, min: Vec3, max: Vec3, count: usize) -> Vec<Vec3> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            Vec3::new(
                rng.random_range(min.x..max.x),
                rng.random_range(min.y..max.y),
                rng.random_range(min.z..max.z),
            )
        })
        .collect()
}

/// Emplace every position as a unit-mass particle of one type.
pub fn fill_grid(grid: &mut LinkedCellGrid, positions: &[Vec3], type_tag: ParticleType) {
    grid.reserve(positions.len());
    for &position in positions {
        grid.emplace(position, Vec3::ZERO, 1.0, type_tag);
    }
}

/// All-pairs reference: the total force on each particle, evaluating
/// every unordered pair once with the reaction applied to the partner.
///
/// Quadratic and boundary-blind; only meaningful against grids whose
/// particles all sit in the interior or whose boundary effects are
/// accounted for separately.
pub fn brute_force_forces(particles: &[Particle], force: &dyn PairForce) -> Vec<Vec3> {
    let mut forces = vec![Vec3::ZERO; particles.len()];
    for i in 0..particles.len() {
        if particles[i].is_deleted() {
            continue;
        }
        for j in (i + 1)..particles.len() {
            if particles[j].is_deleted() {
                continue;
            }
            let f = force.eval(&particles[i], &particles[j]);
            forces[i] += f;
            forces[j] -= f;
        }
    }
    forces
}

/// Assert two per-particle force sets agree within a relative tolerance.
pub fn assert_forces_close(want: &[Vec3], got: &[Vec3], tolerance: f64) {
    assert_eq!(want.len(), got.len(), "force set sizes differ");
    for (i, (w, g)) in want.iter().zip(got).enumerate() {
        let diff = (*w - *g).norm();
        let scale = 1.0 + w.norm();
        assert!(
            diff / scale < tolerance,
            "particle {i}: want {w}, got {g}"
        );
    }
}
