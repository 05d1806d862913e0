//! Short-range pair force laws.
//!
//! Everything here implements [`cellmd_core::PairForce`] and is truncated
//! at a finite cutoff, the contract the linked-cell pass relies on: the
//! grid only enumerates pairs within one cell edge, so any force must be
//! zero past its cutoff and the cell edge must be at least that cutoff.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod gravity;
mod harmonic;
mod lj;

pub use gravity::Gravity;
pub use harmonic::Harmonic;
pub use lj::LennardJones;
