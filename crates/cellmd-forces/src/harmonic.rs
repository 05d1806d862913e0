//! A harmonic spring pair force.

use cellmd_core::{PairForce, Particle, Vec3};

/// Hookean spring between every pair in range: restoring force
/// proportional to the displacement from the rest length.
///
/// Mostly a test and benchmark force; it is smooth, cheap, and has no
/// singularity at contact.
#[derive(Clone, Copy, Debug)]
pub struct Harmonic {
    stiffness: f64,
    rest_length: f64,
    cutoff: f64,
}

impl Harmonic {
    /// A spring of the given stiffness and rest length, truncated at
    /// `cutoff`.
    pub fn new(stiffness: f64, rest_length: f64, cutoff: f64) -> Self {
        Self {
            stiffness,
            rest_length,
            cutoff,
        }
    }
}

impl PairForce for Harmonic {
    fn eval(&self, a: &Particle, b: &Particle) -> Vec3 {
        let d = b.position - a.position;
        let r2 = d.norm_sq();
        if r2 == 0.0 || r2 >= self.cutoff * self.cutoff {
            return Vec3::ZERO;
        }
        let r = r2.sqrt();
        d * (self.stiffness * (r - self.rest_length) / r)
    }

    fn cutoff(&self) -> f64 {
        self.cutoff
    }
}
