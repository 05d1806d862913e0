//! The six domain faces.

use std::fmt;

/// One face of the simulation box.
///
/// `Left`/`Right` bound the x axis, `Bottom`/`Top` the y axis,
/// `Front`/`Back` the z axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Face {
    /// Low x.
    Left,
    /// High x.
    Right,
    /// Low y.
    Bottom,
    /// High y.
    Top,
    /// Low z.
    Front,
    /// High z.
    Back,
}

impl Face {
    /// All six faces, low side of each axis first.
    pub const ALL: [Face; 6] = [
        Face::Left,
        Face::Right,
        Face::Bottom,
        Face::Top,
        Face::Front,
        Face::Back,
    ];

    /// The axis this face bounds (0 = x, 1 = y, 2 = z).
    pub fn axis(self) -> usize {
        match self {
            Face::Left | Face::Right => 0,
            Face::Bottom | Face::Top => 1,
            Face::Front | Face::Back => 2,
        }
    }

    /// Whether this is the high side of its axis.
    pub fn is_high(self) -> bool {
        matches!(self, Face::Right | Face::Top | Face::Back)
    }

    /// The face on the opposite side of the same axis.
    pub fn opposite(self) -> Face {
        match self {
            Face::Left => Face::Right,
            Face::Right => Face::Left,
            Face::Bottom => Face::Top,
            Face::Top => Face::Bottom,
            Face::Front => Face::Back,
            Face::Back => Face::Front,
        }
    }

    /// Position in [`Face::ALL`], used as a dense array key.
    pub fn index(self) -> usize {
        self.axis() * 2 + usize::from(self.is_high())
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Face::Left => "LEFT",
            Face::Right => "RIGHT",
            Face::Bottom => "BOTTOM",
            Face::Top => "TOP",
            Face::Front => "FRONT",
            Face::Back => "BACK",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_is_involutive_and_same_axis() {
        for face in Face::ALL {
            assert_eq!(face.opposite().opposite(), face);
            assert_eq!(face.opposite().axis(), face.axis());
            assert_ne!(face.opposite().is_high(), face.is_high());
        }
    }

    #[test]
    fn indices_are_dense() {
        let mut seen = [false; 6];
        for face in Face::ALL {
            seen[face.index()] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
