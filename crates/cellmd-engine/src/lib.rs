//! Domain facade over the linked-cell grid, boundaries, and pair
//! schemes.
//!
//! [`Domain`] owns one grid, the six configured boundaries, and a pair
//! executor, and sequences the phases of a force pass in the one order
//! that is correct: membership must be fresh before any phase reads it,
//! periodic coupling must complete before the stencil pass (wrap pairs
//! are invisible to adjacency), and outflow must run last so periodic
//! transport can rescue wrapped particles first.

#![forbid(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

mod config;
mod domain;

pub use config::{ConfigError, DomainConfig};
pub use domain::Domain;
