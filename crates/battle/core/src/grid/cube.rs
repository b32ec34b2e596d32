use std::ops::{Add, Mul, Sub};

use crate::grid::HexCell;

/// The six cube-space unit directions, in the same rotation order as the
/// offset tables in [`cell`](crate::grid::HexCell::neighbor_directions):
/// SE, NE, N, NW, SW, S. Consecutive entries are 60° apart, so rotating a
/// direction by `k` steps is `CUBE_DIRECTIONS[(index + k) % 6]`.
pub const CUBE_DIRECTIONS: [CubeCoord; 6] = [
    CubeCoord::new(1, -1, 0), // south-east
    CubeCoord::new(1, 0, -1), // north-east
    CubeCoord::new(0, 1, -1), // north
    CubeCoord::new(-1, 1, 0), // north-west
    CubeCoord::new(-1, 0, 1), // south-west
    CubeCoord::new(0, -1, 1), // south
];

/// Cube hex coordinate with the invariant `x + y + z = 0`.
///
/// Only used internally for distance, interpolation, and direction math;
/// converted to/from [`HexCell`] at algorithm boundaries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubeCoord {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl CubeCoord {
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// Converts back to offset coordinates. Inverse of [`HexCell::to_cube`].
    pub const fn to_offset(self) -> HexCell {
        let col = self.x;
        let row = self.z + (col - (col & 1)) / 2;
        HexCell::new(col, row)
    }

    /// Hex distance between two cube coordinates.
    pub fn distance(self, other: Self) -> u32 {
        let d = self - other;
        ((d.x.abs() + d.y.abs() + d.z.abs()) / 2) as u32
    }

    /// Per-component linear interpolation, `t` in `[0, 1]`.
    ///
    /// Results are fractional; feed them through [`CubeCoord::round`] before
    /// converting back to offset coordinates.
    pub fn lerp(self, other: Self, t: f64) -> (f64, f64, f64) {
        (
            self.x as f64 + (other.x - self.x) as f64 * t,
            self.y as f64 + (other.y - self.y) as f64 * t,
            self.z as f64 + (other.z - self.z) as f64 * t,
        )
    }

    /// Rounds fractional cube components to the nearest valid coordinate.
    ///
    /// Each component is rounded independently, then the one with the largest
    /// rounding error is recomputed from the other two so `x + y + z = 0`
    /// holds exactly. Rounding all three independently would break the
    /// invariant and misplace line cells.
    pub fn round(x: f64, y: f64, z: f64) -> Self {
        let mut rx = x.round();
        let mut ry = y.round();
        let mut rz = z.round();

        let dx = (rx - x).abs();
        let dy = (ry - y).abs();
        let dz = (rz - z).abs();

        if dx > dy && dx > dz {
            rx = -ry - rz;
        } else if dy > dz {
            ry = -rx - rz;
        } else {
            rz = -rx - ry;
        }

        Self::new(rx as i32, ry as i32, rz as i32)
    }

    /// Snaps this vector to the nearest of the six unit directions.
    ///
    /// Returns [`CubeCoord::ZERO`] for the zero vector.
    pub fn unit_direction(self) -> Self {
        let max = self.x.abs().max(self.y.abs()).max(self.z.abs());
        if max == 0 {
            return Self::ZERO;
        }
        let max = max as f64;
        Self::round(
            self.x as f64 / max,
            self.y as f64 / max,
            self.z as f64 / max,
        )
    }

    /// Index of this vector in [`CUBE_DIRECTIONS`], if it is a unit direction.
    pub fn direction_index(self) -> Option<usize> {
        CUBE_DIRECTIONS.iter().position(|&dir| dir == self)
    }
}

impl Add for CubeCoord {
    type Output = CubeCoord;
    fn add(self, rhs: CubeCoord) -> CubeCoord {
        CubeCoord::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for CubeCoord {
    type Output = CubeCoord;
    fn sub(self, rhs: CubeCoord) -> CubeCoord {
        CubeCoord::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<i32> for CubeCoord {
    type Output = CubeCoord;
    fn mul(self, rhs: i32) -> CubeCoord {
        CubeCoord::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_repairs_the_zero_sum_invariant() {
        // Midpoint of (0,0,0) -> (2,-1,-1): naive rounding gives (1,-1,-1).
        let rounded = CubeCoord::round(1.0, -0.5, -0.5);
        assert_eq!(rounded.x + rounded.y + rounded.z, 0);
        assert_eq!(rounded, CubeCoord::new(1, -1, 0));
    }

    #[test]
    fn round_is_exact_on_integers() {
        let c = CubeCoord::new(4, -7, 3);
        assert_eq!(CubeCoord::round(4.0, -7.0, 3.0), c);
    }

    #[test]
    fn distance_counts_hex_steps() {
        let a = CubeCoord::ZERO;
        assert_eq!(a.distance(CubeCoord::new(1, -1, 0)), 1);
        assert_eq!(a.distance(CubeCoord::new(3, -2, -1)), 3);
        assert_eq!(a.distance(CubeCoord::new(-2, 4, -2)), 4);
    }

    #[test]
    fn unit_direction_snaps_to_table_entries() {
        let dir = CubeCoord::new(3, -2, -1).unit_direction();
        assert_eq!(dir, CubeCoord::new(1, -1, 0));
        assert!(dir.direction_index().is_some());

        assert_eq!(CubeCoord::ZERO.unit_direction(), CubeCoord::ZERO);
    }

    #[test]
    fn direction_table_is_a_rotation_sequence() {
        for (i, dir) in CUBE_DIRECTIONS.iter().enumerate() {
            // Opposite direction sits three steps away.
            let opposite = CUBE_DIRECTIONS[(i + 3) % 6];
            assert_eq!(*dir * -1, opposite);
            assert_eq!(dir.x + dir.y + dir.z, 0);
            assert_eq!(CubeCoord::ZERO.distance(*dir), 1);
        }
    }
}
