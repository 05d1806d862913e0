//! The particle store: an ordered, reservable, tombstone-compacting
//! container owning every particle record in a simulation.
//!
//! Particles are addressed by [`ParticleId`], which is simply the current
//! store index. Deletion is logical (a tombstone flag on the record);
//! [`ParticleStore::compact`] re-densifies the store and is the **only**
//! operation that changes identities. The spatial grid calls it from
//! `restructure()`, which is therefore the sole point where callers must
//! discard retained ids.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use cellmd_core::{Particle, ParticleId, ParticleType, Vec3};

/// Owns all particle records in store order.
///
/// Live iteration skips tombstoned records; their slots are reclaimed by
/// [`compact`](ParticleStore::compact). Store order of survivors is
/// preserved across compaction.
#[derive(Clone, Debug, Default)]
pub struct ParticleStore {
    particles: Vec<Particle>,
}

impl ParticleStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocate capacity for `n` additional particles.
    pub fn reserve(&mut self, n: usize) {
        self.particles.reserve(n);
    }

    /// Append a live particle and return its identity.
    ///
    /// The returned id is valid until the next compaction.
    pub fn emplace(
        &mut self,
        position: Vec3,
        velocity: Vec3,
        mass: f64,
        type_tag: ParticleType,
    ) -> ParticleId {
        let id = ParticleId(self.particles.len() as u32);
        self.particles
            .push(Particle::new(position, velocity, mass, type_tag));
        id
    }

    /// Number of records, including tombstones.
    pub fn len(&self) -> usize {
        self.particles.len()
    }

    /// Whether the store holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// Number of live (non-tombstoned) particles. O(n).
    pub fn live_len(&self) -> usize {
        self.particles.iter().filter(|p| !p.is_deleted()).count()
    }

    /// Allocated capacity in records.
    pub fn capacity(&self) -> usize {
        self.particles.capacity()
    }

    /// Borrow a record.
    pub fn get(&self, id: ParticleId) -> &Particle {
        &self.particles[id.index()]
    }

    /// Mutably borrow a record.
    pub fn get_mut(&mut self, id: ParticleId) -> &mut Particle {
        &mut self.particles[id.index()]
    }

    /// Mutably borrow two distinct records at once.
    ///
    /// # Panics
    ///
    /// Panics if `a == b` — a pair visitor must never see a particle
    /// paired with itself.
    pub fn pair_mut(&mut self, a: ParticleId, b: ParticleId) -> (&mut Particle, &mut Particle) {
        assert_ne!(a, b, "cannot borrow particle {a} twice");
        let (lo, hi) = if a < b { (a, b) } else { (b, a) };
        let (head, tail) = self.particles.split_at_mut(hi.index());
        let (lo_ref, hi_ref) = (&mut head[lo.index()], &mut tail[0]);
        if a < b {
            (lo_ref, hi_ref)
        } else {
            (hi_ref, lo_ref)
        }
    }

    /// Invoke `visitor` once per live particle, in store order.
    ///
    /// The visitor may mutate any field; it cannot change the particle's
    /// identity.
    pub fn for_each(&mut self, mut visitor: impl FnMut(&mut Particle)) {
        for p in &mut self.particles {
            if !p.is_deleted() {
                visitor(p);
            }
        }
    }

    /// Iterate live `(id, particle)` pairs immutably.
    pub fn iter_live(&self) -> impl Iterator<Item = (ParticleId, &Particle)> {
        self.particles
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_deleted())
            .map(|(i, p)| (ParticleId(i as u32), p))
    }

    /// Whether any record is tombstoned.
    pub fn has_tombstones(&self) -> bool {
        self.particles.iter().any(|p| p.is_deleted())
    }

    /// Remove all tombstoned records, re-densifying the store.
    ///
    /// Identities of surviving particles may change; their relative store
    /// order does not. Returns the number of records removed.
    pub fn compact(&mut self) -> usize {
        let before = self.particles.len();
        self.particles.retain(|p| !p.is_deleted());
        before - self.particles.len()
    }

    /// The full record slice. Tombstones are included; callers filtering
    /// on liveness must check [`Particle::is_deleted`].
    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    /// The full record slice, mutably. Used by the parallel pair schemes
    /// to build their shared access table.
    pub fn as_mut_slice(&mut self) -> &mut [Particle] {
        &mut self.particles
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn emplace_n(store: &mut ParticleStore, n: usize) -> Vec<ParticleId> {
        (0..n)
            .map(|i| {
                store.emplace(
                    Vec3::new(i as f64, 0.0, 0.0),
                    Vec3::ZERO,
                    1.0,
                    ParticleType(0),
                )
            })
            .collect()
    }

    #[test]
    fn emplace_returns_sequential_ids() {
        let mut store = ParticleStore::new();
        let ids = emplace_n(&mut store, 3);
        assert_eq!(ids, vec![ParticleId(0), ParticleId(1), ParticleId(2)]);
        assert_eq!(store.len(), 3);
        assert_eq!(store.live_len(), 3);
    }

    #[test]
    fn reserve_grows_capacity() {
        let mut store = ParticleStore::new();
        store.reserve(100);
        assert!(store.capacity() >= 100);
    }

    #[test]
    fn for_each_skips_tombstones() {
        let mut store = ParticleStore::new();
        let ids = emplace_n(&mut store, 4);
        store.get_mut(ids[1]).mark_deleted();

        let mut seen = Vec::new();
        store.for_each(|p| seen.push(p.position.x));
        assert_eq!(seen, vec![0.0, 2.0, 3.0]);
        assert_eq!(store.live_len(), 3);
        assert_eq!(store.len(), 4);
    }

    #[test]
    fn compact_preserves_survivor_order() {
        let mut store = ParticleStore::new();
        let ids = emplace_n(&mut store, 5);
        store.get_mut(ids[0]).mark_deleted();
        store.get_mut(ids[3]).mark_deleted();

        let removed = store.compact();
        assert_eq!(removed, 2);
        assert_eq!(store.len(), 3);

        let xs: Vec<f64> = store.iter_live().map(|(_, p)| p.position.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 4.0]);
    }

    #[test]
    fn compact_on_clean_store_is_noop() {
        let mut store = ParticleStore::new();
        emplace_n(&mut store, 3);
        assert_eq!(store.compact(), 0);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn pair_mut_returns_requested_order() {
        let mut store = ParticleStore::new();
        let ids = emplace_n(&mut store, 3);
        let (a, b) = store.pair_mut(ids[2], ids[0]);
        assert_eq!(a.position.x, 2.0);
        assert_eq!(b.position.x, 0.0);
        a.force += Vec3::new(1.0, 0.0, 0.0);
        b.force -= Vec3::new(1.0, 0.0, 0.0);
    }

    #[test]
    #[should_panic]
    fn pair_mut_rejects_self_pair() {
        let mut store = ParticleStore::new();
        let ids = emplace_n(&mut store, 1);
        let _ = store.pair_mut(ids[0], ids[0]);
    }

    proptest! {
        #[test]
        fn compaction_removes_exactly_the_tombstones(mask in prop::collection::vec(any::<bool>(), 0..64)) {
            let mut store = ParticleStore::new();
            let ids = emplace_n(&mut store, mask.len());
            for (id, &dead) in ids.iter().zip(&mask) {
                if dead {
                    store.get_mut(*id).mark_deleted();
                }
            }
            let dead_count = mask.iter().filter(|&&d| d).count();
            prop_assert_eq!(store.live_len(), mask.len() - dead_count);
            prop_assert_eq!(store.compact(), dead_count);
            prop_assert_eq!(store.len(), mask.len() - dead_count);
            prop_assert!(!store.has_tombstones());
        }
    }
}
