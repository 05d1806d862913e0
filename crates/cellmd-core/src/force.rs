//! The pair-force seam.

use crate::particle::Particle;
use crate::vec3::Vec3;

/// A closed-form pairwise force law.
///
/// Implementations compute the force **on `a` due to `b`** from the two
/// particles' state; they never mutate anything. Pair iteration applies
/// Newton's third law itself (`a.force += f; b.force -= f`), which is
/// what lets a reflective boundary evaluate a law against a transient
/// mirror particle without the mirror receiving a reciprocal force.
///
/// `Send + Sync` because the parallel pair schemes share one law across
/// worker threads.
pub trait PairForce: Send + Sync {
    /// Force on `a` due to `b`. Must return zero beyond [`cutoff`](Self::cutoff).
    fn eval(&self, a: &Particle, b: &Particle) -> Vec3;

    /// Maximum separation at which the force is nonzero.
    ///
    /// The grid's cell edge length must be at least this, or pair
    /// iteration will miss interacting pairs. Boundary phases also use it
    /// as the wall interaction distance.
    fn cutoff(&self) -> f64;
}

impl<F: PairForce + ?Sized> PairForce for &F {
    fn eval(&self, a: &Particle, b: &Particle) -> Vec3 {
        (**self).eval(a, b)
    }

    fn cutoff(&self) -> f64 {
        (**self).cutoff()
    }
}
