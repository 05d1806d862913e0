//! Domain geometry and the position → cell mapping.

use crate::error::GridError;
use cellmd_core::{Vec3, AXES};

/// Classification of a cell within the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellKind {
    /// In-domain cell with no halo neighbour; no boundary logic runs here.
    Inner,
    /// In-domain cell adjacent to the halo shell; boundary behaviors are
    /// evaluated on these.
    Boundary,
    /// Out-of-domain buffer cell holding particles that have left the
    /// domain, pending boundary handling.
    Halo,
}

/// Immutable geometry of a linked-cell grid: domain corners, cell edge
/// length, and per-axis cell counts including the one-cell halo margin on
/// both ends of every axis.
///
/// Flat cell indices are row-major: `x + y·dimX + z·dimX·dimY`.
#[derive(Clone, Debug, PartialEq)]
pub struct GridGeometry {
    min: Vec3,
    max: Vec3,
    cell_size: f64,
    /// Cell counts per axis, halo included.
    dims: [usize; 3],
}

impl GridGeometry {
    /// Build the geometry for the box `[min, max]` with the given cell
    /// edge length.
    ///
    /// Per-axis cell count is `⌈(max − min) / cell_size⌉ + 2`: the halo
    /// margin occupies one cell on each end. Fails if `cell_size` is not
    /// strictly positive or any axis extent is not strictly positive.
    pub fn new(min: Vec3, max: Vec3, cell_size: f64) -> Result<Self, GridError> {
        if !cell_size.is_finite() || cell_size <= 0.0 {
            return Err(GridError::NonPositiveCellSize { value: cell_size });
        }
        let mut dims = [0usize; 3];
        for axis in 0..AXES {
            let extent = max[axis] - min[axis];
            if !extent.is_finite() || extent <= 0.0 {
                return Err(GridError::DegenerateExtent { axis, extent });
            }
            dims[axis] = (extent / cell_size).ceil() as usize + 2;
        }
        Ok(Self {
            min,
            max,
            cell_size,
            dims,
        })
    }

    /// Lower domain corner.
    pub fn min(&self) -> Vec3 {
        self.min
    }

    /// Upper domain corner.
    pub fn max(&self) -> Vec3 {
        self.max
    }

    /// Cell edge length.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Domain extent along one axis.
    pub fn extent(&self, axis: usize) -> f64 {
        self.max[axis] - self.min[axis]
    }

    /// Per-axis cell counts, halo included.
    pub fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Total number of cells, halo included.
    pub fn cell_count(&self) -> usize {
        self.dims[0] * self.dims[1] * self.dims[2]
    }

    /// Flat index of the cell at integer coordinates.
    pub fn index_of(&self, coords: [usize; 3]) -> usize {
        debug_assert!(coords[0] < self.dims[0]);
        debug_assert!(coords[1] < self.dims[1]);
        debug_assert!(coords[2] < self.dims[2]);
        coords[0] + coords[1] * self.dims[0] + coords[2] * self.dims[0] * self.dims[1]
    }

    /// Integer coordinates of a flat cell index.
    pub fn coords_of(&self, index: usize) -> [usize; 3] {
        let plane = self.dims[0] * self.dims[1];
        [index % self.dims[0], (index / self.dims[0]) % self.dims[1], index / plane]
    }

    /// Classification of the cell at the given coordinates.
    ///
    /// The outermost shell is halo, the shell immediately inward is
    /// boundary, everything else is inner.
    pub fn kind_of(&self, coords: [usize; 3]) -> CellKind {
        for axis in 0..AXES {
            if coords[axis] == 0 || coords[axis] == self.dims[axis] - 1 {
                return CellKind::Halo;
            }
        }
        for axis in 0..AXES {
            if coords[axis] == 1 || coords[axis] == self.dims[axis] - 2 {
                return CellKind::Boundary;
            }
        }
        CellKind::Inner
    }

    /// Integer coordinates of the cell containing `position`.
    ///
    /// Per axis: `floor((p − min) / cell_size)`, clamped so out-of-domain
    /// positions land in the corresponding halo cell, then offset by +1
    /// into the halo-inclusive range. Cell intervals are lower-closed,
    /// upper-open: a position exactly on an interior cell face belongs to
    /// the upper cell.
    pub fn cell_coords_of(&self, position: Vec3) -> [usize; 3] {
        let mut coords = [0usize; 3];
        for axis in 0..AXES {
            let raw = ((position[axis] - self.min[axis]) / self.cell_size).floor();
            let in_dim = self.dims[axis] as isize - 2;
            let clamped = (raw as isize).clamp(-1, in_dim);
            coords[axis] = (clamped + 1) as usize;
        }
        coords
    }

    /// Flat index of the cell containing `position`.
    pub fn cell_index_of(&self, position: Vec3) -> usize {
        self.index_of(self.cell_coords_of(position))
    }
}
