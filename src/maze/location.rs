//! file: location.rs
//! author: Jacob Xie
//! date: 2026/10/18 10:20:11 Sunday
//! brief: Doubled-space locations and the torus they live on.

/// A position in doubled coordinates: floor-cell centers sit on even components,
/// so a single unit step reaches the edge beside them.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Location {
    pub row: i32,
    pub col: i32,
}

impl Location {
    pub const ORIGIN: Location = Location { row: 0, col: 0 };

    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }
}

impl From<(i32, i32)> for Location {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

/// Modulus applied to every location update, `(2 * rows, 2 * cols)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Torus {
    pub rows: i32,
    pub cols: i32,
}

impl Torus {
    pub fn new(rows: i32, cols: i32) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        Self { rows, cols }
    }

    /// `(location + delta) mod (rows, cols)` with Euclidean remainder, so the
    /// result is never negative and large deltas cannot overflow.
    pub fn shift(self, location: Location, (dr, dc): (i64, i64)) -> Location {
        Location {
            row: (i64::from(location.row) + dr).rem_euclid(i64::from(self.rows)) as i32,
            col: (i64::from(location.col) + dc).rem_euclid(i64::from(self.cols)) as i32,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_is_never_negative() {
        let torus = Torus::new(10, 10);
        assert_eq!(torus.shift(Location::ORIGIN, (-1, 0)), Location::new(9, 0));
        assert_eq!(torus.shift(Location::ORIGIN, (-21, 13)), Location::new(9, 3));
        assert_eq!(torus.shift(Location::ORIGIN, (10, 20)), Location::ORIGIN);
    }

    #[test]
    fn shift_absorbs_extreme_deltas() {
        let torus = Torus::new(10, 8);
        let start = Location::new(9, 7);
        assert_eq!(torus.shift(start, (1, 1)), Location::ORIGIN);
        // 9 + (2^31 - 1) = 2^31 + 8 ≡ 6 (mod 10); 7 - 2^31 ≡ 7 (mod 8)
        assert_eq!(
            torus.shift(start, (i64::from(i32::MAX), i64::from(i32::MIN))),
            Location::new(6, 7)
        );
    }

    #[test]
    fn shifted_locations_stay_in_bounds() {
        let torus = Torus::new(6, 8);
        for dr in -20..20 {
            for dc in -20..20 {
                let at = torus.shift(Location::ORIGIN, (dr, dc));
                assert!((0..6).contains(&at.row) && (0..8).contains(&at.col));
            }
        }
    }
}
