//! The flat cell array: classification, memberships, and the precomputed
//! neighbour tables.

use crate::geometry::{CellKind, GridGeometry};
use crate::stencil::FORWARD_OFFSETS;
use cellmd_core::{ParticleId, AXES};
use indexmap::IndexSet;
use smallvec::SmallVec;

/// A cached link from a boundary cell to one of its halo neighbours.
///
/// `dir` records which face(s) the link crosses: one nonzero component
/// for a face crossing, two for an edge (including the diagonal between
/// them), three for a corner. Periodic force coupling reads `dir` to
/// decide which wrapped image a link stands for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HaloLink {
    /// Flat index of the halo cell.
    pub cell: u32,
    /// Per-axis crossing direction, each component in {-1, 0, +1}.
    pub dir: [i32; 3],
}

/// One grid cell: classification and the unordered particle membership.
#[derive(Clone, Debug)]
pub(crate) struct Cell {
    pub(crate) kind: CellKind,
    /// Unordered membership with deterministic iteration order; pair
    /// enumeration walks it in insertion order so every scheme sees the
    /// same pairing.
    pub(crate) members: IndexSet<ParticleId>,
    /// Flat indices of in-domain forward stencil partners.
    pub(crate) forward_partners: SmallVec<[u32; 13]>,
    /// Halo neighbours reached by crossing 1, 2, or 3 faces (1, 3, or 7
    /// entries for face, edge, and corner cells; empty elsewhere).
    pub(crate) halo_links: SmallVec<[HaloLink; 7]>,
}

/// The flat cell array plus everything derived from geometry alone.
///
/// Built once at grid construction; memberships are the only mutable
/// part. Partner and halo-link tables are never recomputed per pass.
#[derive(Clone, Debug)]
pub struct CellLayout {
    geometry: GridGeometry,
    cells: Vec<Cell>,
}

impl CellLayout {
    /// Build the cell array for the given geometry: classify every cell,
    /// resolve forward stencil partners (halo partners excluded — halo
    /// memberships never take part in pair iteration), and cache halo
    /// links for boundary cells.
    pub fn new(geometry: GridGeometry) -> Self {
        let dims = geometry.dims();
        let count = geometry.cell_count();
        let mut cells = Vec::with_capacity(count);

        for index in 0..count {
            let coords = geometry.coords_of(index);
            let kind = geometry.kind_of(coords);

            let mut forward_partners = SmallVec::new();
            if kind != CellKind::Halo {
                for offset in FORWARD_OFFSETS {
                    if let Some(partner) = offset_coords(coords, offset, dims) {
                        if geometry.kind_of(partner) != CellKind::Halo {
                            forward_partners.push(geometry.index_of(partner) as u32);
                        }
                    }
                }
            }

            let halo_links = if kind == CellKind::Boundary {
                boundary_halo_links(&geometry, coords)
            } else {
                SmallVec::new()
            };

            cells.push(Cell {
                kind,
                members: IndexSet::new(),
                forward_partners,
                halo_links,
            });
        }

        Self { geometry, cells }
    }

    /// The grid geometry.
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Classification of a cell.
    pub fn kind(&self, index: usize) -> CellKind {
        self.cells[index].kind
    }

    /// Current membership of a cell.
    pub fn members(&self, index: usize) -> impl ExactSizeIterator<Item = ParticleId> + '_ {
        self.cells[index].members.iter().copied()
    }

    /// Number of particles bound to a cell.
    pub fn member_count(&self, index: usize) -> usize {
        self.cells[index].members.len()
    }

    /// In-domain forward stencil partners of a cell.
    pub fn forward_partners(&self, index: usize) -> &[u32] {
        &self.cells[index].forward_partners
    }

    /// Cached halo links of a boundary cell (empty for other kinds).
    pub fn halo_links(&self, index: usize) -> &[HaloLink] {
        &self.cells[index].halo_links
    }

    /// Flat indices of all in-domain (inner + boundary) cells, ascending.
    pub fn in_domain_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.kind != CellKind::Halo)
            .map(|(i, _)| i)
    }

    /// Bind a particle into a cell's membership.
    pub fn bind(&mut self, id: ParticleId, cell: usize) {
        let inserted = self.cells[cell].members.insert(id);
        debug_assert!(inserted, "particle {id} already bound to cell {cell}");
    }

    /// Remove a particle from a cell's membership.
    pub fn unbind(&mut self, id: ParticleId, cell: usize) {
        let removed = self.cells[cell].members.swap_remove(&id);
        debug_assert!(removed, "particle {id} was not bound to cell {cell}");
    }

    /// Empty a cell's membership, returning the former members.
    pub fn take_members(&mut self, cell: usize) -> Vec<ParticleId> {
        self.cells[cell].members.drain(..).collect()
    }

    /// Drop every membership in every cell.
    pub fn clear_members(&mut self) {
        for cell in &mut self.cells {
            cell.members.clear();
        }
    }

    /// Enumerate the candidate particle pairs of one origin cell: every
    /// unordered pair within the cell, then every cross pair against each
    /// forward partner. Never yields a particle paired with itself, and
    /// with the half stencil no unordered pair is yielded twice across
    /// all origins.
    ///
    /// "Candidate" because liveness is not checked here — callers with
    /// store access filter tombstoned particles.
    pub fn for_each_candidate_pair(&self, origin: usize, mut f: impl FnMut(ParticleId, ParticleId)) {
        let cell = &self.cells[origin];
        for (i, &a) in cell.members.iter().enumerate() {
            for &b in cell.members.iter().skip(i + 1) {
                f(a, b);
            }
        }
        for &partner in &cell.forward_partners {
            let partner_members = &self.cells[partner as usize].members;
            for &a in &cell.members {
                for &b in partner_members {
                    f(a, b);
                }
            }
        }
    }
}

/// Apply an integer offset to cell coordinates, `None` if it leaves the
/// grid.
fn offset_coords(coords: [usize; 3], offset: [i32; 3], dims: [usize; 3]) -> Option<[usize; 3]> {
    let mut out = [0usize; 3];
    for axis in 0..AXES {
        let v = coords[axis] as i32 + offset[axis];
        if v < 0 || v >= dims[axis] as i32 {
            return None;
        }
        out[axis] = v as usize;
    }
    Some(out)
}

/// Halo links of a boundary cell: every combination of crossings over the
/// axes on which the cell sits next to the halo shell. A face cell yields
/// 1 link, an edge cell 3 (both faces plus the diagonal between them), a
/// corner cell 7 (three faces, three pairwise diagonals, and the triple
/// diagonal).
fn boundary_halo_links(geometry: &GridGeometry, coords: [usize; 3]) -> SmallVec<[HaloLink; 7]> {
    let dims = geometry.dims();
    // Possible crossing directions per axis. An axis that is only one
    // cell thick in-domain borders the halo on both sides.
    let mut choices: [SmallVec<[i32; 3]>; 3] = Default::default();
    for axis in 0..AXES {
        choices[axis].push(0);
        if coords[axis] == 1 {
            choices[axis].push(-1);
        }
        if coords[axis] == dims[axis] - 2 {
            choices[axis].push(1);
        }
    }

    let mut links = SmallVec::new();
    for &dx in &choices[0] {
        for &dy in &choices[1] {
            for &dz in &choices[2] {
                let dir = [dx, dy, dz];
                if dir == [0, 0, 0] {
                    continue;
                }
                // Crossing every bordered axis of `dir` always stays on
                // the grid: the halo shell is exactly one cell deep.
                let target = offset_coords(coords, dir, dims)
                    .unwrap_or_else(|| unreachable!("halo crossing left the grid"));
                debug_assert_eq!(geometry.kind_of(target), CellKind::Halo);
                links.push(HaloLink {
                    cell: geometry.index_of(target) as u32,
                    dir,
                });
            }
        }
    }
    links
}
