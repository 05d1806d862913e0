//! Fork-join execution of a pair pass under a chosen scheme.

use crate::colors::ColorPartition;
use crate::scheme::PairScheme;
use crate::table::ParticleTable;
use cellmd_core::Particle;
use cellmd_grid::LinkedCellGrid;
use std::sync::Mutex;
use std::thread;

/// Runs pair passes over a grid with a fixed worker count.
///
/// Workers are scoped threads forked per pass (per color, for the
/// colored schemes); joining the scope is the hard barrier between
/// colors. Tasks reach workers through a crossbeam channel drained with
/// `while let Ok(..) = recv()`, so an idle worker exits as soon as the
/// queue closes.
#[derive(Clone, Debug)]
pub struct PairExecutor {
    threads: usize,
}

impl PairExecutor {
    /// An executor with the given worker count (clamped to at least 1).
    pub fn new(threads: usize) -> Self {
        Self {
            threads: threads.max(1),
        }
    }

    /// An executor sized to the machine's available parallelism.
    pub fn with_available_parallelism() -> Self {
        let threads = thread::available_parallelism().map(usize::from).unwrap_or(1);
        Self::new(threads)
    }

    /// The worker count.
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Invoke `visitor` once per unordered live-particle pair in stencil
    /// range, executing under `scheme`.
    ///
    /// Every scheme visits exactly the pair set of
    /// [`LinkedCellGrid::for_each_pair`]; only the visit order (and so
    /// floating-point summation order) differs. The visitor must
    /// therefore be order-independent up to summation, which force
    /// accumulation is.
    pub fn for_each_pair<F>(&self, grid: &mut LinkedCellGrid, scheme: PairScheme, visitor: F)
    where
        F: Fn(&mut Particle, &mut Particle) + Sync,
    {
        match scheme {
            PairScheme::Sequential => grid.for_each_pair(|a, b| visitor(a, b)),
            PairScheme::FineColors => {
                let partition = ColorPartition::fine(grid.layout());
                self.run_colored(grid, &partition, &visitor);
            }
            PairScheme::BlockColors => {
                let partition = ColorPartition::block(grid.layout());
                self.run_colored(grid, &partition, &visitor);
            }
            PairScheme::CellLocks => self.run_locked(grid, &visitor),
        }
    }

    /// Colors strictly in sequence; one color's tasks spread over the
    /// workers, with the scope join as the barrier before the next
    /// color.
    #[allow(unsafe_code)]
    fn run_colored<F>(&self, grid: &mut LinkedCellGrid, partition: &ColorPartition, visitor: &F)
    where
        F: Fn(&mut Particle, &mut Particle) + Sync,
    {
        let (layout, store) = grid.split_layout_store();
        let table = ParticleTable::new(store.as_mut_slice());

        for tasks in partition.colors() {
            if tasks.is_empty() {
                continue;
            }
            let (task_tx, task_rx) = crossbeam_channel::unbounded::<&[usize]>();
            for task in tasks {
                // The receiver is still alive; this cannot fail.
                let _ = task_tx.send(task.as_slice());
            }
            drop(task_tx);

            thread::scope(|scope| {
                for _ in 0..self.threads.min(tasks.len()) {
                    let task_rx = task_rx.clone();
                    let table = &table;
                    scope.spawn(move || {
                        while let Ok(task) = task_rx.recv() {
                            for &cell in task {
                                // SAFETY: tasks of one color touch
                                // disjoint stencils, and no color runs
                                // until the previous one's scope has
                                // joined.
                                unsafe { table.visit_cell(layout, cell, visitor) };
                            }
                        }
                    });
                }
            });
        }
    }

    /// No colors: every in-domain cell is a task, and each worker locks
    /// the cell plus its forward partners, in ascending cell order,
    /// before touching their particles. The total acquisition order
    /// rules out deadlock.
    #[allow(unsafe_code)]
    fn run_locked<F>(&self, grid: &mut LinkedCellGrid, visitor: &F)
    where
        F: Fn(&mut Particle, &mut Particle) + Sync,
    {
        let (layout, store) = grid.split_layout_store();
        let table = ParticleTable::new(store.as_mut_slice());
        let locks: Vec<Mutex<()>> = (0..layout.cell_count()).map(|_| Mutex::new(())).collect();

        let (task_tx, task_rx) = crossbeam_channel::unbounded::<usize>();
        for cell in layout.in_domain_cells() {
            let _ = task_tx.send(cell);
        }
        drop(task_tx);

        thread::scope(|scope| {
            for _ in 0..self.threads {
                let task_rx = task_rx.clone();
                let table = &table;
                let locks = &locks;
                scope.spawn(move || {
                    let mut involved: Vec<usize> = Vec::with_capacity(14);
                    while let Ok(cell) = task_rx.recv() {
                        involved.clear();
                        involved.push(cell);
                        involved.extend(layout.forward_partners(cell).iter().map(|&c| c as usize));
                        involved.sort_unstable();
                        let guards: Vec<_> = involved
                            .iter()
                            .map(|&c| locks[c].lock().unwrap_or_else(|e| e.into_inner()))
                            .collect();
                        // SAFETY: every cell of this stencil is locked,
                        // so no other worker can touch its particles.
                        unsafe { table.visit_cell(layout, cell, visitor) };
                        drop(guards);
                    }
                });
            }
        });
    }
}

impl Default for PairExecutor {
    fn default() -> Self {
        Self::with_available_parallelism()
    }
}
