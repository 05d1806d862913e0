//! The closed set of pair-iteration execution schemes.

use std::fmt;

/// How a pair pass is executed.
///
/// Every scheme produces the same set of particle pairs as
/// [`Sequential`](Self::Sequential); they differ only in how cells are
/// scheduled over threads and in floating-point summation order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PairScheme {
    /// Single-threaded stencil walk, the reference the concurrent
    /// schemes must match.
    #[default]
    Sequential,
    /// Up to 18 colors of single-cell tasks, `(x mod 3, y mod 3,
    /// z mod 2)`. Same-color cells are far enough apart that their
    /// forward stencils touch disjoint cells.
    FineColors,
    /// Up to 8 colors of 2x2x1 cell-block tasks, `(x/2 mod 2,
    /// y/2 mod 2, z mod 2)` over block coordinates. Fewer, larger tasks
    /// amortize scheduling overhead.
    BlockColors,
    /// No colors: cells are scheduled in any order and each task locks
    /// its origin cell plus its forward partners, in ascending cell
    /// order, before touching their particles.
    CellLocks,
}

impl PairScheme {
    /// Every scheme, sequential first.
    pub const ALL: [PairScheme; 4] = [
        PairScheme::Sequential,
        PairScheme::FineColors,
        PairScheme::BlockColors,
        PairScheme::CellLocks,
    ];
}

impl fmt::Display for PairScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PairScheme::Sequential => "sequential",
            PairScheme::FineColors => "fine-colors",
            PairScheme::BlockColors => "block-colors",
            PairScheme::CellLocks => "cell-locks",
        };
        write!(f, "{name}")
    }
}
