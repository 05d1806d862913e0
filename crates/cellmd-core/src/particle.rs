//! The particle record.

use crate::id::ParticleType;
use crate::vec3::Vec3;
use std::fmt;

/// A point particle.
///
/// Carries both the current force and the previous-step force because
/// velocity integration (a caller concern) needs both halves of the
/// Störmer-Verlet update. The periodic-crossing counter tracks how many
/// times the particle has wrapped each axis so unwrapped trajectories can
/// be reconstructed from wrapped positions.
///
/// All physical fields are public and may be mutated freely by visitors;
/// the deletion flag is behind [`mark_deleted`](Particle::mark_deleted)
/// because clearing it would resurrect a particle the next compaction is
/// entitled to drop.
#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    /// Position in domain coordinates.
    pub position: Vec3,
    /// Velocity.
    pub velocity: Vec3,
    /// Force accumulated during the current pass.
    pub force: Vec3,
    /// Force from the previous step.
    pub old_force: Vec3,
    /// Mass.
    pub mass: f64,
    /// Type tag, resolved via a `TypeRegistry`.
    pub type_tag: ParticleType,
    /// Net periodic wraps per axis: +1 for each exit through a high face,
    /// -1 for each exit through a low face.
    pub crossings: [i32; 3],
    deleted: bool,
}

impl Particle {
    /// Construct a live particle with zeroed forces and crossing counters.
    pub fn new(position: Vec3, velocity: Vec3, mass: f64, type_tag: ParticleType) -> Self {
        Self {
            position,
            velocity,
            force: Vec3::ZERO,
            old_force: Vec3::ZERO,
            mass,
            type_tag,
            crossings: [0; 3],
            deleted: false,
        }
    }

    /// Flag this particle for removal. Physical eviction happens at the
    /// next compaction; until then the particle stays in the store but is
    /// skipped by live iteration.
    pub fn mark_deleted(&mut self) {
        self.deleted = true;
    }

    /// Whether the particle has been flagged for removal.
    pub fn is_deleted(&self) -> bool {
        self.deleted
    }

    /// Rotate forces at the start of a force pass: the current force
    /// becomes the previous-step force and the accumulator is zeroed.
    pub fn rotate_force(&mut self) {
        self.old_force = self.force;
        self.force = Vec3::ZERO;
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Particle(type={}, pos={}, vel={}, m={})",
            self.type_tag, self.position, self.velocity, self.mass
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_particle_is_live_with_zero_forces() {
        let p = Particle::new(Vec3::new(1.0, 2.0, 3.0), Vec3::ZERO, 1.5, ParticleType(0));
        assert!(!p.is_deleted());
        assert_eq!(p.force, Vec3::ZERO);
        assert_eq!(p.old_force, Vec3::ZERO);
        assert_eq!(p.crossings, [0, 0, 0]);
    }

    #[test]
    fn rotate_force_shifts_and_zeroes() {
        let mut p = Particle::new(Vec3::ZERO, Vec3::ZERO, 1.0, ParticleType(0));
        p.force = Vec3::new(1.0, -2.0, 0.5);
        p.rotate_force();
        assert_eq!(p.old_force, Vec3::new(1.0, -2.0, 0.5));
        assert_eq!(p.force, Vec3::ZERO);
    }

    #[test]
    fn mark_deleted_is_one_way() {
        let mut p = Particle::new(Vec3::ZERO, Vec3::ZERO, 1.0, ParticleType(0));
        p.mark_deleted();
        assert!(p.is_deleted());
    }
}
