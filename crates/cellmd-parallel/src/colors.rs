//! Cell color partitions: groups of cells whose forward stencils touch
//! disjoint particles, so one color's tasks can run concurrently with no
//! synchronization.

use cellmd_grid::CellLayout;

/// A partition of the in-domain cells into colors of concurrently
/// runnable tasks.
///
/// Each task is a list of cells processed by one worker in sequence.
/// Colors are processed strictly one after another; within a color, any
/// task interleaving yields the same forces because no two tasks touch
/// a common particle.
#[derive(Clone, Debug)]
pub struct ColorPartition {
    colors: Vec<Vec<Vec<usize>>>,
}

impl ColorPartition {
    /// Single-cell tasks on up to 18 colors, `(x mod 3, y mod 3,
    /// z mod 2)`.
    ///
    /// Same-color cells are at least 3 apart on x and y, or 2 apart on
    /// z. The forward stencil reaches one cell out on x and y but never
    /// backwards on z, so the touch boxes of same-color cells cannot
    /// intersect.
    pub fn fine(layout: &CellLayout) -> Self {
        let geometry = layout.geometry();
        let mut colors = vec![Vec::new(); 18];
        for cell in layout.in_domain_cells() {
            let [x, y, z] = geometry.coords_of(cell);
            let color = (x % 3) + 3 * (y % 3) + 9 * (z % 2);
            colors[color].push(vec![cell]);
        }
        Self { colors }
    }

    /// 2x2x1 cell-block tasks on up to 8 colors, `(bx mod 2, by mod 2,
    /// z mod 2)` over block coordinates `bx = x/2`, `by = y/2`.
    ///
    /// Same-color blocks are 4 apart on x and y (block touch boxes are
    /// 4 wide) or 2 apart on z, giving the fine partition's guarantee
    /// at block granularity with far fewer tasks to schedule.
    pub fn block(layout: &CellLayout) -> Self {
        let geometry = layout.geometry();
        let dims = geometry.dims();
        let nbx = dims[0].div_ceil(2);
        let nby = dims[1].div_ceil(2);

        let mut tasks: Vec<Vec<usize>> = vec![Vec::new(); nbx * nby * dims[2]];
        for cell in layout.in_domain_cells() {
            let [x, y, z] = geometry.coords_of(cell);
            tasks[(x / 2) + nbx * ((y / 2) + nby * z)].push(cell);
        }

        let mut colors = vec![Vec::new(); 8];
        for (index, task) in tasks.into_iter().enumerate() {
            if task.is_empty() {
                continue;
            }
            let bx = index % nbx;
            let by = (index / nbx) % nby;
            let z = index / (nbx * nby);
            let color = (bx % 2) + 2 * (by % 2) + 4 * (z % 2);
            colors[color].push(task);
        }
        Self { colors }
    }

    /// The colors in processing order; each entry is that color's tasks.
    pub fn colors(&self) -> &[Vec<Vec<usize>>] {
        &self.colors
    }

    /// Total number of tasks across all colors.
    pub fn task_count(&self) -> usize {
        self.colors.iter().map(Vec::len).sum()
    }
}
