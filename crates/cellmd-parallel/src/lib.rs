//! Concurrent execution schemes for linked-cell pair passes.
//!
//! Three concurrent schemes (two cell colorings and a lock-based one)
//! plus the sequential baseline, all producing the same pair set.
//! Scheduling is plain fork-join over scoped threads; the mutable
//! per-particle force accumulator is the only contended state, guarded
//! either statically by color separation or dynamically by per-cell
//! locks.
//!
//! Unsafe code is confined to the particle table: workers share
//! mutable particle access through a raw-pointer table whose methods
//! carry the exclusivity contract the schemes uphold.

#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod colors;
mod executor;
mod scheme;
mod table;

pub use colors::ColorPartition;
pub use executor::PairExecutor;
pub use scheme::PairScheme;
