//! file: heading.rs
//! author: Jacob Xie
//! date: 2026/10/18 10:12:40 Sunday
//! brief: Cardinal headings and quarter-turn rotations.

use super::MazeError;

/// Facing of the player, also used to name the four edges around a cell.
///
/// Vectors are `(row, col)` offsets: rows grow downwards, columns to the right.
/// Declaration order is clockwise, so a quarter turn is `index + 1 mod 4`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::North, Heading::East, Heading::South, Heading::West];

    pub fn vector(self) -> (i32, i32) {
        match self {
            Heading::North => (-1, 0),
            Heading::East => (0, 1),
            Heading::South => (1, 0),
            Heading::West => (0, -1),
        }
    }

    pub fn rotate(self, rotation: Rotation) -> Self {
        Self::ALL[(self.index() + rotation.turns()) % 4]
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Heading::North => "▲",
            Heading::East => "▶",
            Heading::South => "▼",
            Heading::West => "◀",
        }
    }

    fn index(self) -> usize {
        match self {
            Heading::North => 0,
            Heading::East => 1,
            Heading::South => 2,
            Heading::West => 3,
        }
    }
}

/// Clockwise rotation by a multiple of 90 degrees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    None,
    Quarter,
    Half,
    ThreeQuarter,
}

impl Rotation {
    pub fn from_degrees(degrees: i32) -> Result<Self, MazeError> {
        match degrees {
            0 => Ok(Rotation::None),
            90 => Ok(Rotation::Quarter),
            180 => Ok(Rotation::Half),
            270 => Ok(Rotation::ThreeQuarter),
            other => Err(MazeError::InvalidRotation(other)),
        }
    }

    fn turns(self) -> usize {
        match self {
            Rotation::None => 0,
            Rotation::Quarter => 1,
            Rotation::Half => 2,
            Rotation::ThreeQuarter => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROTATIONS: [Rotation; 4] = [
        Rotation::None,
        Rotation::Quarter,
        Rotation::Half,
        Rotation::ThreeQuarter,
    ];

    #[test]
    fn rotation_stays_within_unit_vectors() {
        for heading in Heading::ALL {
            for rotation in ROTATIONS {
                let (dr, dc) = heading.rotate(rotation).vector();
                assert_eq!(dr.abs() + dc.abs(), 1);
            }
        }
    }

    #[test]
    fn two_quarter_turns_make_a_half_turn() {
        for heading in Heading::ALL {
            assert_eq!(
                heading.rotate(Rotation::Quarter).rotate(Rotation::Quarter),
                heading.rotate(Rotation::Half)
            );
        }
    }

    #[test]
    fn quarter_turn_is_clockwise() {
        assert_eq!(Heading::North.rotate(Rotation::Quarter), Heading::East);
        assert_eq!(Heading::West.rotate(Rotation::Quarter), Heading::North);
        assert_eq!(Heading::North.rotate(Rotation::ThreeQuarter), Heading::West);
        assert_eq!(Heading::South.rotate(Rotation::None), Heading::South);
    }

    #[test]
    fn degrees_outside_quarter_turns_are_rejected() {
        assert_eq!(Rotation::from_degrees(270), Ok(Rotation::ThreeQuarter));
        assert_eq!(
            Rotation::from_degrees(45),
            Err(MazeError::InvalidRotation(45))
        );
        assert_eq!(
            Rotation::from_degrees(-90),
            Err(MazeError::InvalidRotation(-90))
        );
    }
}
