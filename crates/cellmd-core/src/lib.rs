//! Core types and traits for the cellmd molecular dynamics workspace.
//!
//! This crate defines the leaf types every other cellmd crate builds on:
//!
//! - [`Vec3`]: a plain 3-component `f64` vector with the handful of
//!   operations short-range MD needs.
//! - [`Particle`]: position, velocity, current and previous-step force,
//!   mass, type tag, periodic-crossing counter, and the logical-deletion
//!   flag consumed by store compaction.
//! - [`ParticleId`] / [`ParticleType`]: strongly-typed integer identifiers.
//! - [`TypeRegistry`]: the explicitly-owned type-tag → Lennard-Jones
//!   parameter lookup (no process-wide state).
//! - [`PairForce`]: the seam through which force laws are injected into
//!   pair iteration.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod force;
pub mod id;
pub mod particle;
pub mod registry;
pub mod vec3;

pub use force::PairForce;
pub use id::{ParticleId, ParticleType};
pub use particle::Particle;
pub use registry::{LjParams, TypeRegistry};
pub use vec3::{Vec3, AXES};
