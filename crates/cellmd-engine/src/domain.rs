//! The domain facade: grid, boundaries, and phase sequencing.

use crate::config::{ConfigError, DomainConfig};
use cellmd_boundary::{Boundary, BoundaryConfig, BoundaryKind, Face};
use cellmd_core::{PairForce, Particle, ParticleId, ParticleType, Vec3};
use cellmd_grid::{GridError, LinkedCellGrid};
use cellmd_parallel::{PairExecutor, PairScheme};
use cellmd_store::ParticleStore;

/// A simulation domain: the linked-cell grid, its six configured
/// boundaries, and the executor that runs pair passes.
///
/// The facade's job is sequencing. One force pass is:
/// restructure, rotate force accumulators, periodic transport, periodic
/// coupling, the stencil pass under the chosen scheme, then reflective
/// walls and outflow. [`compute_forces`](Self::compute_forces) runs the
/// whole sequence; the individual phases are public for callers (and
/// tests) that need to interleave their own work.
#[derive(Debug)]
pub struct Domain {
    grid: LinkedCellGrid,
    boundaries: Vec<Boundary>,
    executor: PairExecutor,
}

impl Domain {
    /// Build a domain from a validated configuration.
    pub fn new(config: DomainConfig) -> Result<Self, ConfigError> {
        config.boundaries.validate()?;
        let grid = LinkedCellGrid::new(config.min, config.max, config.cell_size)?;
        let executor = match config.threads {
            Some(threads) => PairExecutor::new(threads),
            None => PairExecutor::with_available_parallelism(),
        };
        let boundaries = build_boundaries(&config.boundaries, &grid);
        Ok(Self {
            grid,
            boundaries,
            executor,
        })
    }

    /// Replace the boundary configuration, re-validating periodic
    /// pairing and rebuilding the face objects.
    pub fn set_boundaries(&mut self, config: BoundaryConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.boundaries = build_boundaries(&config, &self.grid);
        Ok(())
    }

    /// The underlying grid.
    pub fn grid(&self) -> &LinkedCellGrid {
        &self.grid
    }

    /// The underlying grid, mutably. Position mutation through this
    /// borrow leaves membership stale until the next restructure.
    pub fn grid_mut(&mut self) -> &mut LinkedCellGrid {
        &mut self.grid
    }

    /// The particle store.
    pub fn store(&self) -> &ParticleStore {
        self.grid.store()
    }

    /// The six boundaries in [`Face::ALL`] order.
    pub fn boundaries(&self) -> &[Boundary] {
        &self.boundaries
    }

    /// Pre-allocate capacity for `n` additional particles.
    pub fn reserve(&mut self, n: usize) {
        self.grid.reserve(n);
    }

    /// Append a live particle, binding it to its containing cell.
    pub fn emplace(
        &mut self,
        position: Vec3,
        velocity: Vec3,
        mass: f64,
        type_tag: ParticleType,
    ) -> ParticleId {
        self.grid.emplace(position, velocity, mass, type_tag)
    }

    /// Number of live particles.
    pub fn len(&self) -> usize {
        self.grid.store().live_len()
    }

    /// Whether no live particles exist.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Store capacity in particles.
    pub fn capacity(&self) -> usize {
        self.grid.store().capacity()
    }

    /// Invoke `visitor` once per live particle.
    pub fn for_each(&mut self, visitor: impl FnMut(&mut Particle)) {
        self.grid.for_each(visitor);
    }

    /// Invoke `visitor` once per unordered live-particle pair in stencil
    /// range, executed under `scheme`.
    ///
    /// Raw pair iteration: no restructure and no boundary phases.
    /// [`compute_forces`](Self::compute_forces) wraps this in the full
    /// pass sequence.
    pub fn for_each_pair<F>(&mut self, scheme: PairScheme, visitor: F)
    where
        F: Fn(&mut Particle, &mut Particle) + Sync,
    {
        self.executor.for_each_pair(&mut self.grid, scheme, visitor);
    }

    /// Recompute cell memberships from current positions, compacting
    /// tombstones (which may re-identify surviving particles).
    pub fn restructure(&mut self) {
        self.grid.restructure();
    }

    /// Verify the membership invariant.
    pub fn check_consistency(&self) -> Result<(), GridError> {
        self.grid.check_consistency()
    }

    /// Save each particle's accumulated force and zero the accumulator
    /// for the coming pass. Velocity integration reads both.
    pub fn rotate_forces(&mut self) {
        self.grid.for_each(Particle::rotate_force);
    }

    /// The periodic sub-phases: transport every wrapped-out particle
    /// back into the domain, then evaluate forces across the wraps.
    /// Must complete before the stencil pass, which cannot see
    /// wrap-adjacent pairs.
    pub fn apply_periodic(&mut self, force: &(impl PairForce + ?Sized)) {
        for boundary in &self.boundaries {
            if boundary.kind() == BoundaryKind::Periodic {
                boundary.apply_periodic_transport(&mut self.grid);
            }
        }
        for boundary in &self.boundaries {
            if boundary.kind() == BoundaryKind::Periodic {
                boundary.apply_periodic_coupling(&force, &mut self.grid);
            }
        }
    }

    /// The post-stencil boundary phases: reflective walls push
    /// near-wall particles back, then outflow faces discard escapees.
    pub fn apply_boundaries(&mut self, force: &(impl PairForce + ?Sized)) {
        for boundary in &self.boundaries {
            if boundary.kind() == BoundaryKind::Reflective {
                boundary.apply_reflective(&force, &mut self.grid);
            }
        }
        for boundary in &self.boundaries {
            if boundary.kind() == BoundaryKind::Outflow {
                boundary.apply_outflow(&mut self.grid);
            }
        }
    }

    /// One full force pass under `scheme`.
    ///
    /// After this returns, every live particle's `force` holds the total
    /// of its pair, wrap, and wall interactions for the current
    /// positions, and `old_force` holds the previous pass's total.
    pub fn compute_forces(&mut self, force: &(impl PairForce + ?Sized), scheme: PairScheme) {
        debug_assert!(
            force.cutoff() <= self.grid.geometry().cell_size(),
            "cutoff {} exceeds cell size {}",
            force.cutoff(),
            self.grid.geometry().cell_size()
        );
        self.grid.restructure();
        self.rotate_forces();
        self.apply_periodic(force);
        self.executor.for_each_pair(&mut self.grid, scheme, |a, b| {
            let f = force.eval(a, b);
            a.force += f;
            b.force -= f;
        });
        self.apply_boundaries(force);
    }
}

fn build_boundaries(config: &BoundaryConfig, grid: &LinkedCellGrid) -> Vec<Boundary> {
    Face::ALL
        .iter()
        .map(|&face| Boundary::new(face, config, grid.layout()))
        .collect()
}
