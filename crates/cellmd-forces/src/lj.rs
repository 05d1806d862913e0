//! The truncated Lennard-Jones force.

use cellmd_core::{PairForce, Particle, TypeRegistry, Vec3};

/// Truncated Lennard-Jones, with per-type parameters resolved through a
/// [`TypeRegistry`] and Lorentz-Berthelot mixing for unlike pairs.
///
/// Pairs with an unregistered type tag contribute nothing; registration
/// errors surface where the registry is built, not per pair in the inner
/// loop.
#[derive(Clone, Debug)]
pub struct LennardJones {
    registry: TypeRegistry,
    cutoff: f64,
}

impl LennardJones {
    /// A Lennard-Jones force truncated at `cutoff`.
    pub fn new(registry: TypeRegistry, cutoff: f64) -> Self {
        Self { registry, cutoff }
    }

    /// The type parameter registry.
    pub fn registry(&self) -> &TypeRegistry {
        &self.registry
    }
}

impl PairForce for LennardJones {
    /// dU/dr of the 12-6 potential, projected onto the separation vector.
    /// Zero at coincident positions and at or beyond the cutoff.
    fn eval(&self, a: &Particle, b: &Particle) -> Vec3 {
        let d = b.position - a.position;
        let r2 = d.norm_sq();
        if r2 == 0.0 || r2 >= self.cutoff * self.cutoff {
            return Vec3::ZERO;
        }
        let Some(params) = self.registry.mixed(a.type_tag, b.type_tag) else {
            return Vec3::ZERO;
        };
        let s = (params.sigma * params.sigma / r2).powi(3);
        d * (24.0 * params.epsilon / r2 * s * (1.0 - 2.0 * s))
    }

    fn cutoff(&self) -> f64 {
        self.cutoff
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellmd_core::{LjParams, ParticleType};
    use proptest::prelude::*;

    fn force() -> LennardJones {
        let mut registry = TypeRegistry::new();
        registry.register(
            ParticleType(0),
            LjParams {
                epsilon: 1.0,
                sigma: 1.0,
            },
        );
        LennardJones::new(registry, 2.5)
    }

    fn particle_at(x: f64) -> Particle {
        Particle::new(Vec3::new(x, 0.0, 0.0), Vec3::ZERO, 1.0, ParticleType(0))
    }

    #[test]
    fn force_is_zero_at_potential_minimum() {
        let f = force();
        let a = particle_at(0.0);
        let b = particle_at(2f64.powf(1.0 / 6.0));
        let out = f.eval(&a, &b);
        assert!(out.norm() < 1e-12, "got {out}");
    }

    #[test]
    fn closer_than_minimum_is_repulsive() {
        let f = force();
        let a = particle_at(0.0);
        let b = particle_at(0.9);
        // Force on a points away from b.
        assert!(f.eval(&a, &b).x < 0.0);
    }

    #[test]
    fn beyond_minimum_is_attractive() {
        let f = force();
        let a = particle_at(0.0);
        let b = particle_at(1.5);
        assert!(f.eval(&a, &b).x > 0.0);
    }

    #[test]
    fn zero_at_and_beyond_cutoff() {
        let f = force();
        let a = particle_at(0.0);
        assert_eq!(f.eval(&a, &particle_at(2.5)), Vec3::ZERO);
        assert_eq!(f.eval(&a, &particle_at(3.0)), Vec3::ZERO);
    }

    #[test]
    fn zero_at_coincident_positions() {
        let f = force();
        let a = particle_at(1.0);
        let b = particle_at(1.0);
        assert_eq!(f.eval(&a, &b), Vec3::ZERO);
    }

    #[test]
    fn unregistered_type_contributes_nothing() {
        let f = force();
        let a = particle_at(0.0);
        let mut b = particle_at(1.0);
        b.type_tag = ParticleType(9);
        assert_eq!(f.eval(&a, &b), Vec3::ZERO);
    }

    #[test]
    fn newton_third_law() {
        let f = force();
        let a = Particle::new(Vec3::new(0.1, 0.2, 0.3), Vec3::ZERO, 1.0, ParticleType(0));
        let b = Particle::new(Vec3::new(1.0, 0.7, 0.1), Vec3::ZERO, 1.0, ParticleType(0));
        let fab = f.eval(&a, &b);
        let fba = f.eval(&b, &a);
        assert!((fab + fba).norm() < 1e-12);
    }

    proptest! {
        /// Swapping the arguments flips the force exactly.
        #[test]
        fn antisymmetric_over_random_separations(
            ax in -3.0..3.0f64, ay in -3.0..3.0f64, az in -3.0..3.0f64,
            bx in -3.0..3.0f64, by in -3.0..3.0f64, bz in -3.0..3.0f64,
        ) {
            let f = force();
            let a = Particle::new(Vec3::new(ax, ay, az), Vec3::ZERO, 1.0, ParticleType(0));
            let b = Particle::new(Vec3::new(bx, by, bz), Vec3::ZERO, 1.0, ParticleType(0));
            let fab = f.eval(&a, &b);
            let fba = f.eval(&b, &a);
            prop_assert!((fab + fba).norm() <= 1e-9 * (1.0 + fab.norm()));
        }

        /// The force is radial: parallel or antiparallel to the
        /// separation vector.
        #[test]
        fn force_is_radial(
            bx in 0.3..3.0f64, by in -2.0..2.0f64, bz in -2.0..2.0f64,
        ) {
            let f = force();
            let a = particle_at(0.0);
            let b = Particle::new(Vec3::new(bx, by, bz), Vec3::ZERO, 1.0, ParticleType(0));
            let d = b.position - a.position;
            let out = f.eval(&a, &b);
            let cross = Vec3::new(
                d.y * out.z - d.z * out.y,
                d.z * out.x - d.x * out.z,
                d.x * out.y - d.y * out.x,
            );
            prop_assert!(cross.norm() <= 1e-9 * (1.0 + out.norm() * d.norm()));
        }
    }
}
