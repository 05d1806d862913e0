//! One configured face of the domain and its per-phase behavior.

use crate::config::{BoundaryConfig, BoundaryKind};
use crate::face::Face;
use cellmd_core::{PairForce, ParticleId, Vec3, AXES};
use cellmd_grid::{CellKind, CellLayout, LinkedCellGrid};
use cellmd_store::ParticleStore;
use smallvec::SmallVec;

/// One face of the domain, bound to its configured behavior and to the
/// cell slabs that behavior operates on.
///
/// The slabs are resolved once against a [`CellLayout`] at construction:
/// the boundary slab (in-domain cells touching the face) and the halo
/// slab (the ghost layer beyond it). Membership of these cells changes
/// every step; the slab indices never do.
#[derive(Clone, Debug)]
pub struct Boundary {
    face: Face,
    kind: BoundaryKind,
    /// In-domain cells adjacent to the face, ascending.
    boundary_cells: Vec<usize>,
    /// Halo cells beyond the face, ascending. Includes the edge and
    /// corner halo cells shared with neighbouring faces.
    halo_cells: Vec<usize>,
    periodic_axes: [bool; 3],
}

impl Boundary {
    /// Resolve `face` against a layout, picking up its configured kind
    /// and slab cell indices.
    pub fn new(face: Face, config: &BoundaryConfig, layout: &CellLayout) -> Self {
        let geometry = layout.geometry();
        let dims = geometry.dims();
        let axis = face.axis();
        let boundary_coord = if face.is_high() { dims[axis] - 2 } else { 1 };
        let halo_coord = if face.is_high() { dims[axis] - 1 } else { 0 };

        let mut boundary_cells = Vec::new();
        let mut halo_cells = Vec::new();
        for index in 0..geometry.cell_count() {
            let coords = geometry.coords_of(index);
            // Rim cells on the boundary plane are halo on another axis
            // and belong to that face's halo slab, not to this one.
            if coords[axis] == boundary_coord && geometry.kind_of(coords) != CellKind::Halo {
                boundary_cells.push(index);
            }
            if coords[axis] == halo_coord {
                halo_cells.push(index);
            }
        }

        Self {
            face,
            kind: config.kind(face),
            boundary_cells,
            halo_cells,
            periodic_axes: config.periodic_axes(),
        }
    }

    /// The face this boundary handles.
    pub fn face(&self) -> Face {
        self.face
    }

    /// The configured behavior of this face.
    pub fn kind(&self) -> BoundaryKind {
        self.kind
    }

    /// In-domain cells adjacent to the face.
    pub fn boundary_cells(&self) -> &[usize] {
        &self.boundary_cells
    }

    /// Halo cells beyond the face.
    pub fn halo_cells(&self) -> &[usize] {
        &self.halo_cells
    }

    /// Tombstone every particle in this face's halo slab.
    ///
    /// Runs after periodic transport, so anything still in the slab has
    /// genuinely left the domain through an open face. Corner halo cells
    /// shared with another outflow face may already be empty; taking
    /// their membership twice is harmless.
    pub fn apply_outflow(&self, grid: &mut LinkedCellGrid) {
        for &cell in &self.halo_cells {
            for id in grid.take_cell_members(cell) {
                grid.store_mut().get_mut(id).mark_deleted();
            }
        }
    }

    /// Push particles near the face back into the domain.
    ///
    /// Each particle in the boundary slab closer to the wall than the
    /// force cutoff interacts with its own mirror image beyond the wall.
    /// Only the real particle accumulates force; positions are never
    /// touched. At a distance of exactly zero the mirror coincides with
    /// the particle and the force is left at zero.
    pub fn apply_reflective(&self, force: &dyn PairForce, grid: &mut LinkedCellGrid) {
        let axis = self.face.axis();
        let geometry = grid.geometry();
        let wall = if self.face.is_high() {
            geometry.max()[axis]
        } else {
            geometry.min()[axis]
        };
        let cutoff = force.cutoff();

        let (layout, store) = grid.split_layout_store();
        for &cell in &self.boundary_cells {
            for id in layout.members(cell) {
                let p = store.get_mut(id);
                if p.is_deleted() {
                    continue;
                }
                let distance = (p.position[axis] - wall).abs();
                if distance == 0.0 || distance >= cutoff {
                    continue;
                }
                let mut mirror = p.clone();
                mirror.position[axis] = 2.0 * wall - p.position[axis];
                let f = force.eval(p, &mirror);
                p.force += f;
            }
        }
    }

    /// Wrap this face's halo slab onto the opposite side of the domain.
    ///
    /// Every particle in the slab is shifted by one domain extent along
    /// this face's axis, its crossing counter is updated (+1 leaving
    /// through the high face, -1 through the low), and its cell is
    /// rebound. Corner halo particles that crossed several periodic
    /// faces at once are wrapped one axis at a time as each face's
    /// transport runs.
    pub fn apply_periodic_transport(&self, grid: &mut LinkedCellGrid) {
        let axis = self.face.axis();
        let extent = grid.geometry().extent(axis);
        let high = self.face.is_high();

        for &cell in &self.halo_cells {
            let ids: Vec<ParticleId> = grid.layout().members(cell).collect();
            if ids.is_empty() {
                continue;
            }
            let store = grid.store_mut();
            for &id in &ids {
                let p = store.get_mut(id);
                if p.is_deleted() {
                    continue;
                }
                if high {
                    p.position[axis] -= extent;
                    p.crossings[axis] += 1;
                } else {
                    p.position[axis] += extent;
                    p.crossings[axis] -= 1;
                }
            }
            grid.rebind_cell(cell);
        }
    }

    /// Evaluate forces between particles on opposite sides of periodic
    /// wraps crossing this face.
    ///
    /// Runs after transport, when no particle sits in a periodic halo
    /// cell: the wrap-adjacent partner cells are found through the cached
    /// halo links, and the partner's particles are evaluated at their
    /// wrapped image positions. Each wrap image is owned by exactly one
    /// face so no pair is evaluated twice: the low face of the first
    /// axis the image vector crosses. High faces own nothing and return
    /// immediately.
    ///
    /// Image vectors crossing a non-periodic axis are skipped; that side
    /// has no wrap.
    pub fn apply_periodic_coupling(&self, force: &dyn PairForce, grid: &mut LinkedCellGrid) {
        if self.face.is_high() {
            return;
        }
        let axis = self.face.axis();
        let (layout, store) = grid.split_layout_store();
        let geometry = layout.geometry();
        let dims = geometry.dims();
        let extent = [geometry.extent(0), geometry.extent(1), geometry.extent(2)];

        for &origin in &self.boundary_cells {
            let origin_coords = geometry.coords_of(origin);
            for link in layout.halo_links(origin) {
                let dir = link.dir;
                // Ownership: the first crossed axis must be ours, toward
                // the low side.
                if dir[axis] != -1 || dir[..axis].iter().any(|&c| c != 0) {
                    continue;
                }
                if (0..AXES).any(|t| dir[t] != 0 && !self.periodic_axes[t]) {
                    continue;
                }

                // Wrapped partner base: crossed axes land on the opposite
                // in-domain slab; the image is the partner shifted by one
                // extent per crossed axis.
                let mut base = origin_coords;
                let mut shift = Vec3::ZERO;
                for t in 0..AXES {
                    if dir[t] != 0 {
                        base[t] = if dir[t] < 0 { dims[t] - 2 } else { 1 };
                        shift[t] = f64::from(dir[t]) * extent[t];
                    }
                }

                for_each_tangential(base, dir, dims, |partner_coords| {
                    let partner = geometry.index_of(partner_coords);
                    couple_cells(layout, store, force, origin, partner, shift);
                });
            }
        }
    }
}

/// Visit the wrapped partner cell and its in-domain neighbours along the
/// uncrossed axes. Tangential neighbours cover image pairs that sit
/// diagonally across the wrap without crossing any further face.
fn for_each_tangential(
    base: [usize; 3],
    dir: [i32; 3],
    dims: [usize; 3],
    mut visit: impl FnMut([usize; 3]),
) {
    let mut choices: [SmallVec<[usize; 3]>; 3] = Default::default();
    for t in 0..AXES {
        if dir[t] != 0 {
            choices[t].push(base[t]);
        } else {
            for offset in -1i32..=1 {
                let c = base[t] as i32 + offset;
                if c >= 1 && c <= dims[t] as i32 - 2 {
                    choices[t].push(c as usize);
                }
            }
        }
    }
    for &x in &choices[0] {
        for &y in &choices[1] {
            for &z in &choices[2] {
                visit([x, y, z]);
            }
        }
    }
}

/// Accumulate forces between `origin`'s particles and the wrapped images
/// of `partner`'s particles (partner position plus `shift`).
///
/// Distinct cells couple pairwise with the reaction applied to the
/// partner. A cell wrapping onto itself (the domain is one cell thick on
/// a crossed axis) couples every ordered pair one-sidedly against both
/// the `shift` and `-shift` images; the reaction of each image pair is
/// produced by the reversed ordered pair.
fn couple_cells(
    layout: &CellLayout,
    store: &mut ParticleStore,
    force: &dyn PairForce,
    origin: usize,
    partner: usize,
    shift: Vec3,
) {
    if origin == partner {
        let ids: Vec<ParticleId> = layout.members(origin).collect();
        for &a in &ids {
            for &b in &ids {
                if a == b || store.get(a).is_deleted() || store.get(b).is_deleted() {
                    continue;
                }
                for image_shift in [shift, -shift] {
                    let mut image = store.get(b).clone();
                    image.position += image_shift;
                    let f = force.eval(store.get(a), &image);
                    store.get_mut(a).force += f;
                }
            }
        }
        return;
    }

    let origin_ids: Vec<ParticleId> = layout.members(origin).collect();
    let partner_ids: Vec<ParticleId> = layout.members(partner).collect();
    for &a in &origin_ids {
        if store.get(a).is_deleted() {
            continue;
        }
        for &b in &partner_ids {
            if store.get(b).is_deleted() {
                continue;
            }
            let mut image = store.get(b).clone();
            image.position += shift;
            let f = force.eval(store.get(a), &image);
            let (pa, pb) = store.pair_mut(a, b);
            pa.force += f;
            pb.force -= f;
        }
    }
}
