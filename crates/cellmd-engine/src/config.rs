//! Domain configuration, validation, and error types.

use cellmd_boundary::{BoundaryConfig, BoundaryError};
use cellmd_core::Vec3;
use cellmd_grid::GridError;
use std::error::Error;
use std::fmt;

/// Complete configuration for constructing a [`Domain`](crate::Domain).
///
/// `cell_size` must be at least the cutoff of any force law later run
/// over the domain; pair iteration only reaches one cell out, so a
/// longer-ranged force would silently miss pairs.
#[derive(Clone, Debug)]
pub struct DomainConfig {
    /// Low corner of the simulation box.
    pub min: Vec3,
    /// High corner of the simulation box.
    pub max: Vec3,
    /// Cell edge length.
    pub cell_size: f64,
    /// Per-face boundary behavior. Default: outflow everywhere.
    pub boundaries: BoundaryConfig,
    /// Worker threads for the concurrent schemes. `None` = the
    /// machine's available parallelism.
    pub threads: Option<usize>,
}

impl DomainConfig {
    /// A configuration over the box `[min, max]` with all-outflow
    /// boundaries and auto-detected parallelism.
    pub fn new(min: Vec3, max: Vec3, cell_size: f64) -> Self {
        Self {
            min,
            max,
            cell_size,
            boundaries: BoundaryConfig::new(),
            threads: None,
        }
    }

    /// Replace the boundary configuration (builder style).
    pub fn with_boundaries(mut self, boundaries: BoundaryConfig) -> Self {
        self.boundaries = boundaries;
        self
    }

    /// Fix the worker thread count (builder style).
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }
}

/// Errors detected while constructing or reconfiguring a domain.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// The grid geometry is invalid.
    Grid(GridError),
    /// The boundary configuration is invalid.
    Boundary(BoundaryError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Grid(e) => write!(f, "grid: {e}"),
            Self::Boundary(e) => write!(f, "boundary: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            Self::Boundary(e) => Some(e),
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

impl From<BoundaryError> for ConfigError {
    fn from(e: BoundaryError) -> Self {
        Self::Boundary(e)
    }
}
