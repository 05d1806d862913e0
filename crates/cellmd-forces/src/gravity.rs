//! Truncated pairwise gravitational attraction.

use cellmd_core::{PairForce, Particle, Vec3};

/// Newtonian attraction between particle masses, truncated at a cutoff.
///
/// Gravity is not short-ranged; the truncation makes it usable inside a
/// linked-cell pass for dense settling scenarios where the far field is
/// negligible against contact forces.
#[derive(Clone, Copy, Debug)]
pub struct Gravity {
    constant: f64,
    cutoff: f64,
}

impl Gravity {
    /// Gravity with the given coupling constant, truncated at `cutoff`.
    pub fn new(constant: f64, cutoff: f64) -> Self {
        Self { constant, cutoff }
    }
}

impl PairForce for Gravity {
    fn eval(&self, a: &Particle, b: &Particle) -> Vec3 {
        let d = b.position - a.position;
        let r2 = d.norm_sq();
        if r2 == 0.0 || r2 >= self.cutoff * self.cutoff {
            return Vec3::ZERO;
        }
        let r = r2.sqrt();
        d * (self.constant * a.mass * b.mass / (r2 * r))
    }

    fn cutoff(&self) -> f64 {
        self.cutoff
    }
}
