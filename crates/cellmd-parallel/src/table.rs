//! Shared mutable particle access for workers.
//!
//! The only unsafe code in the crate lives here. The borrow checker
//! cannot see that color separation (or a held lock set) gives each
//! worker exclusive access to the particles it touches, so workers go
//! through a raw-pointer table whose methods state that contract.

#![allow(unsafe_code)]

use cellmd_core::{Particle, ParticleId};
use cellmd_grid::CellLayout;
use std::marker::PhantomData;

/// A raw view over the particle slice that many workers can hold at
/// once.
///
/// Constructed from a mutable borrow of the store's particles, so for
/// its lifetime no other code can reach them; exclusivity *between*
/// workers is the caller's obligation on every access.
pub(crate) struct ParticleTable<'a> {
    ptr: *mut Particle,
    len: usize,
    _particles: PhantomData<&'a mut [Particle]>,
}

// SAFETY: the table itself is just a pointer and length; sharing it is
// safe because every dereference is an unsafe method whose caller must
// guarantee exclusive access to that particle.
unsafe impl Sync for ParticleTable<'_> {}

impl<'a> ParticleTable<'a> {
    pub(crate) fn new(particles: &'a mut [Particle]) -> Self {
        Self {
            ptr: particles.as_mut_ptr(),
            len: particles.len(),
            _particles: PhantomData,
        }
    }

    /// Mutable access to one particle.
    ///
    /// # Safety
    ///
    /// No other reference to this particle may be live anywhere, which
    /// the schemes guarantee by color separation or by holding the
    /// particle's cell lock.
    unsafe fn particle_mut(&self, id: ParticleId) -> &mut Particle {
        debug_assert!(id.index() < self.len);
        // SAFETY: in range per the store's id contract; exclusivity is
        // the caller's obligation.
        unsafe { &mut *self.ptr.add(id.index()) }
    }

    /// Run `visitor` over every live candidate pair of one cell's
    /// stencil.
    ///
    /// # Safety
    ///
    /// The calling worker must have exclusive access to every particle
    /// in `cell` and its forward partners: no concurrently running task
    /// may touch any cell of this stencil.
    pub(crate) unsafe fn visit_cell<F>(&self, layout: &CellLayout, cell: usize, visitor: &F)
    where
        F: Fn(&mut Particle, &mut Particle) + Sync,
    {
        layout.for_each_candidate_pair(cell, |a, b| {
            // SAFETY: a != b by the candidate-pair contract, so the two
            // references alias neither each other nor any other
            // worker's, per this function's own contract.
            let (pa, pb) = unsafe { (self.particle_mut(a), self.particle_mut(b)) };
            if pa.is_deleted() || pb.is_deleted() {
                return;
            }
            visitor(pa, pb);
        });
    }
}
