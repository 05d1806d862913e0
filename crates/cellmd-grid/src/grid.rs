//! The linked-cell grid: membership binding, restructuring, and the
//! sequential pair-iteration baseline.

use crate::error::GridError;
use crate::geometry::GridGeometry;
use crate::layout::CellLayout;
use cellmd_core::{Particle, ParticleId, ParticleType, Vec3};
use cellmd_store::ParticleStore;

/// A uniform cell grid over a bounded domain, binding every particle of
/// an owned [`ParticleStore`] to the cell containing its position.
///
/// # Membership invariant
///
/// Membership is guaranteed consistent only immediately after
/// [`restructure`](Self::restructure): code that mutates positions (an
/// integrator, a boundary transport phase) and then relies on membership
/// must restructure first. `restructure` is also the only operation that
/// may change particle identities, because it compacts tombstoned
/// particles out of the store.
#[derive(Clone, Debug)]
pub struct LinkedCellGrid {
    layout: CellLayout,
    store: ParticleStore,
}

impl LinkedCellGrid {
    /// Build an empty grid over the box `[min, max]` with the given cell
    /// edge length. The cell edge length must be at least the force
    /// cutoff or pair iteration will miss interacting pairs.
    pub fn new(min: Vec3, max: Vec3, cell_size: f64) -> Result<Self, GridError> {
        let geometry = GridGeometry::new(min, max, cell_size)?;
        Ok(Self {
            layout: CellLayout::new(geometry),
            store: ParticleStore::new(),
        })
    }

    /// Build a grid over an existing store (checkpoint loading), binding
    /// every live particle to its cell.
    pub fn with_store(
        min: Vec3,
        max: Vec3,
        cell_size: f64,
        store: ParticleStore,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(min, max, cell_size)?;
        grid.store = store;
        grid.rebind_all();
        Ok(grid)
    }

    /// The grid geometry.
    pub fn geometry(&self) -> &GridGeometry {
        self.layout.geometry()
    }

    /// The cell layout (classification, memberships, neighbour tables).
    pub fn layout(&self) -> &CellLayout {
        &self.layout
    }

    /// The particle store.
    pub fn store(&self) -> &ParticleStore {
        &self.store
    }

    /// The particle store, mutably. Position mutation through this
    /// borrow leaves membership stale; restructure before relying on it.
    pub fn store_mut(&mut self) -> &mut ParticleStore {
        &mut self.store
    }

    /// Disjoint borrows of the layout and the store, for callers (the
    /// parallel pair schemes, boundary phases) that read cell memberships
    /// while mutating particles.
    pub fn split_layout_store(&mut self) -> (&CellLayout, &mut ParticleStore) {
        (&self.layout, &mut self.store)
    }

    /// Pre-allocate store capacity for `n` additional particles.
    pub fn reserve(&mut self, n: usize) {
        self.store.reserve(n);
    }

    /// Append a live particle and bind it to the cell containing its
    /// position. Returns its identity, valid until the next restructure.
    pub fn emplace(
        &mut self,
        position: Vec3,
        velocity: Vec3,
        mass: f64,
        type_tag: ParticleType,
    ) -> ParticleId {
        let id = self.store.emplace(position, velocity, mass, type_tag);
        let cell = self.layout.geometry().cell_index_of(position);
        self.layout.bind(id, cell);
        id
    }

    /// Recompute every particle's cell from its current position.
    ///
    /// Tombstoned particles are dropped from all memberships and
    /// compacted out of the store first — the sole point at which
    /// surviving identities may change. Rebinding then moves each live
    /// particle whose cell changed; a second call with no intervening
    /// position change moves nothing.
    pub fn restructure(&mut self) {
        if self.store.has_tombstones() {
            // Identities shift on compaction; rebuild memberships whole.
            self.store.compact();
            self.rebind_all();
            return;
        }

        let geometry = self.layout.geometry();
        let mut moves: Vec<(ParticleId, usize, usize)> = Vec::new();
        for from in 0..self.layout.cell_count() {
            for id in self.layout.members(from) {
                let target = geometry.cell_index_of(self.store.get(id).position);
                if target != from {
                    moves.push((id, from, target));
                }
            }
        }
        for (id, from, to) in moves {
            self.layout.unbind(id, from);
            self.layout.bind(id, to);
        }
    }

    /// Re-evaluate the membership of one cell after its particles'
    /// positions changed (periodic transport uses this instead of a full
    /// restructure).
    pub fn rebind_cell(&mut self, cell: usize) {
        let geometry = self.layout.geometry();
        let mut moves: Vec<(ParticleId, usize)> = Vec::new();
        for id in self.layout.members(cell) {
            let target = geometry.cell_index_of(self.store.get(id).position);
            if target != cell {
                moves.push((id, target));
            }
        }
        for (id, to) in moves {
            self.layout.unbind(id, cell);
            self.layout.bind(id, to);
        }
    }

    /// Empty one cell's membership, returning the former members.
    pub fn take_cell_members(&mut self, cell: usize) -> Vec<ParticleId> {
        self.layout.take_members(cell)
    }

    /// Invoke `visitor` once per live particle, in store order.
    pub fn for_each(&mut self, visitor: impl FnMut(&mut Particle)) {
        self.store.for_each(visitor);
    }

    /// Invoke `visitor` once per unordered live-particle pair in stencil
    /// range: pairs within each in-domain cell, and pairs across each
    /// in-domain cell and its forward stencil partners. Never pairs a
    /// particle with itself; never yields a pair twice. Halo memberships
    /// take no part — they exist only for boundary handling.
    ///
    /// This is the sequential baseline the parallel schemes must match.
    /// Periodic force coupling is a separate phase run before this pass.
    pub fn for_each_pair(&mut self, mut visitor: impl FnMut(&mut Particle, &mut Particle)) {
        let Self { layout, store } = self;
        for origin in layout.in_domain_cells() {
            layout.for_each_candidate_pair(origin, |a, b| {
                if store.get(a).is_deleted() || store.get(b).is_deleted() {
                    return;
                }
                let (pa, pb) = store.pair_mut(a, b);
                visitor(pa, pb);
            });
        }
    }

    /// Verify the membership invariant: every live particle bound to
    /// exactly one cell and the membership total equal to the live count.
    ///
    /// Violations are programming errors in spatial indexing — they
    /// corrupt physical results without any runtime symptom, so tests and
    /// debug builds call this after every restructure.
    pub fn check_consistency(&self) -> Result<(), GridError> {
        let mut bound = vec![0usize; self.store.len()];
        let mut members = 0usize;
        for cell in 0..self.layout.cell_count() {
            for id in self.layout.members(cell) {
                bound[id.index()] += 1;
                members += 1;
            }
        }
        for (id, _) in self.store.iter_live() {
            match bound[id.index()] {
                1 => {}
                0 => return Err(GridError::UnboundParticle { id }),
                count => return Err(GridError::MultiplyBound { id, count }),
            }
        }
        let live = self.store.live_len();
        if members != live {
            return Err(GridError::MembershipCountMismatch { members, live });
        }
        Ok(())
    }

    fn rebind_all(&mut self) {
        self.layout.clear_members();
        let mut binds: Vec<(ParticleId, usize)> = Vec::new();
        {
            let geometry = self.layout.geometry();
            for (id, p) in self.store.iter_live() {
                binds.push((id, geometry.cell_index_of(p.position)));
            }
        }
        for (id, cell) in binds {
            self.layout.bind(id, cell);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cellmd_core::ParticleType;

    fn grid() -> LinkedCellGrid {
        LinkedCellGrid::new(Vec3::ZERO, Vec3::new(10.0, 8.0, 6.0), 2.0).unwrap()
    }

    fn emplace_at(grid: &mut LinkedCellGrid, x: f64, y: f64, z: f64) -> ParticleId {
        grid.emplace(Vec3::new(x, y, z), Vec3::ZERO, 1.0, ParticleType(0))
    }

    #[test]
    fn emplace_binds_to_containing_cell() {
        let mut g = grid();
        let id = emplace_at(&mut g, 5.0, 4.0, 3.0);
        let cell = g.geometry().cell_index_of(Vec3::new(5.0, 4.0, 3.0));
        assert!(g.layout().members(cell).any(|m| m == id));
        g.check_consistency().unwrap();
    }

    #[test]
    fn restructure_moves_particle_with_position() {
        let mut g = grid();
        let id = emplace_at(&mut g, 0.5, 0.5, 0.5);
        g.store_mut().get_mut(id).position = Vec3::new(9.5, 7.5, 5.5);
        g.restructure();
        let cell = g.geometry().cell_index_of(Vec3::new(9.5, 7.5, 5.5));
        assert!(g.layout().members(cell).any(|m| m == id));
        g.check_consistency().unwrap();
    }

    #[test]
    fn restructure_is_idempotent() {
        let mut g = grid();
        for i in 0..20 {
            emplace_at(&mut g, 0.3 + (i as f64) * 0.47, 4.0, 3.0);
        }
        g.restructure();
        let snapshot: Vec<Vec<ParticleId>> = (0..g.layout().cell_count())
            .map(|c| g.layout().members(c).collect())
            .collect();
        g.restructure();
        let again: Vec<Vec<ParticleId>> = (0..g.layout().cell_count())
            .map(|c| g.layout().members(c).collect())
            .collect();
        assert_eq!(snapshot, again);
    }

    #[test]
    fn restructure_compacts_tombstones() {
        let mut g = grid();
        let a = emplace_at(&mut g, 1.0, 1.0, 1.0);
        let _b = emplace_at(&mut g, 5.0, 4.0, 3.0);
        g.store_mut().get_mut(a).mark_deleted();
        g.restructure();
        assert_eq!(g.store().len(), 1);
        assert_eq!(g.store().live_len(), 1);
        g.check_consistency().unwrap();
        // The survivor was re-identified.
        let survivor = g.store().iter_live().next().unwrap().0;
        assert_eq!(survivor, ParticleId(0));
    }

    #[test]
    fn membership_sum_matches_live_count_after_restructure() {
        let mut g = grid();
        for i in 0..50 {
            let x = (i as f64 * 0.19) % 10.0;
            let y = (i as f64 * 0.13) % 8.0;
            let z = (i as f64 * 0.29) % 6.0;
            emplace_at(&mut g, x, y, z);
        }
        g.restructure();
        let members: usize = (0..g.layout().cell_count())
            .map(|c| g.layout().member_count(c))
            .sum();
        assert_eq!(members, g.store().live_len());
        g.check_consistency().unwrap();
    }

    #[test]
    fn out_of_domain_particle_lands_in_halo() {
        let mut g = grid();
        let id = emplace_at(&mut g, -0.5, 4.0, 3.0);
        let coords = g.geometry().cell_coords_of(Vec3::new(-0.5, 4.0, 3.0));
        assert_eq!(coords[0], 0);
        let cell = g.geometry().index_of(coords);
        assert!(g.layout().members(cell).any(|m| m == id));
    }

    #[test]
    fn for_each_pair_visits_close_pair_once() {
        let mut g = grid();
        emplace_at(&mut g, 4.9, 4.0, 3.0);
        emplace_at(&mut g, 5.1, 4.0, 3.0); // adjacent cell across x
        let mut count = 0;
        g.for_each_pair(|_, _| count += 1);
        assert_eq!(count, 1);
    }

    #[test]
    fn for_each_pair_skips_tombstoned_particles() {
        let mut g = grid();
        let a = emplace_at(&mut g, 5.0, 4.0, 3.0);
        emplace_at(&mut g, 5.2, 4.0, 3.0);
        g.store_mut().get_mut(a).mark_deleted();
        let mut count = 0;
        g.for_each_pair(|_, _| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn for_each_pair_ignores_halo_particles() {
        let mut g = grid();
        emplace_at(&mut g, -0.5, 4.0, 3.0); // halo
        emplace_at(&mut g, 0.5, 4.0, 3.0); // boundary cell next door
        let mut count = 0;
        g.for_each_pair(|_, _| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn with_store_binds_existing_particles() {
        let mut store = ParticleStore::new();
        store.emplace(Vec3::new(1.0, 1.0, 1.0), Vec3::ZERO, 1.0, ParticleType(0));
        store.emplace(Vec3::new(9.0, 7.0, 5.0), Vec3::ZERO, 1.0, ParticleType(0));
        let g = LinkedCellGrid::with_store(Vec3::ZERO, Vec3::new(10.0, 8.0, 6.0), 2.0, store)
            .unwrap();
        g.check_consistency().unwrap();
    }
}
