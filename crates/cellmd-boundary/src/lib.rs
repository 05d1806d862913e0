//! Domain boundary handling for linked-cell grids.
//!
//! Each of the six domain faces carries one of three behaviors: outflow
//! (escaped particles are discarded), reflective (a repulsive mirror
//! wall), or periodic (the face wraps onto its opposite). Periodic faces
//! split into two phases run at different points of a step: *transport*
//! moves escaped particles to the opposite side of the domain, and
//! *coupling* evaluates forces between particles adjacent across the
//! wrap.
//!
//! Every phase operates on cell slabs resolved once at construction;
//! nothing here scans the whole particle set.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod boundary;
mod config;
mod error;
mod face;

pub use boundary::Boundary;
pub use config::{BoundaryConfig, BoundaryKind};
pub use error::BoundaryError;
pub use face::Face;
