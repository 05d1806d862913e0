//! The half-neighbour stencil.

/// The 13 forward neighbour offsets `(dx, dy, dz)`.
///
/// Together with the implicit self-offset these form the half-neighbour
/// stencil: for any two adjacent cells A ≠ B, exactly one of "B is a
/// forward neighbour of A" / "A is a forward neighbour of B" holds, so
/// walking every cell's forward partners enumerates every unordered
/// adjacent cell pair exactly once.
///
/// Canonical half: `dz > 0`, or `dz == 0 && dy > 0`, or
/// `dz == 0 && dy == 0 && dx > 0`.
pub const FORWARD_OFFSETS: [[i32; 3]; 13] = [
    [1, 0, 0],
    [-1, 1, 0],
    [0, 1, 0],
    [1, 1, 0],
    [-1, -1, 1],
    [0, -1, 1],
    [1, -1, 1],
    [-1, 0, 1],
    [0, 0, 1],
    [1, 0, 1],
    [-1, 1, 1],
    [0, 1, 1],
    [1, 1, 1],
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn offsets_are_canonical_half() {
        for [dx, dy, dz] in FORWARD_OFFSETS {
            let forward = dz > 0 || (dz == 0 && dy > 0) || (dz == 0 && dy == 0 && dx > 0);
            assert!(forward, "({dx},{dy},{dz}) is not in the canonical half");
        }
    }

    #[test]
    fn offsets_with_mirrors_cover_all_26_neighbours() {
        let mut dirs = HashSet::new();
        for [dx, dy, dz] in FORWARD_OFFSETS {
            dirs.insert((dx, dy, dz));
            dirs.insert((-dx, -dy, -dz));
        }
        assert_eq!(dirs.len(), 26);
        assert!(!dirs.contains(&(0, 0, 0)));
    }
}
