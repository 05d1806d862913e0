//! Linked-cell spatial grid for short-range molecular dynamics.
//!
//! A [`LinkedCellGrid`] partitions a bounded box into a 3-D array of
//! cells with a one-cell halo margin on both ends of every axis, buckets
//! particles into cells for O(n) neighbour finding, and exposes the
//! `for_each` / `for_each_pair` iteration contracts that force laws and
//! boundary behaviors consume.
//!
//! # Cell classification
//!
//! - [`CellKind::Halo`]: the outermost shell, outside the domain. Holds
//!   particles that have left the box, pending boundary handling.
//! - [`CellKind::Boundary`]: the shell immediately inward; the site
//!   where boundary behaviors are evaluated.
//! - [`CellKind::Inner`]: everything else; no boundary logic ever runs
//!   here.
//!
//! # Pair enumeration
//!
//! [`FORWARD_OFFSETS`] is the 13-direction half stencil: walking every
//! in-domain cell's forward partners visits every unordered adjacent
//! cell pair exactly once, so every unordered particle pair in stencil
//! range is evaluated exactly once.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod geometry;
pub mod grid;
pub mod layout;
pub mod stencil;

pub use error::GridError;
pub use geometry::{CellKind, GridGeometry};
pub use grid::LinkedCellGrid;
pub use layout::{CellLayout, HaloLink};
pub use stencil::FORWARD_OFFSETS;
