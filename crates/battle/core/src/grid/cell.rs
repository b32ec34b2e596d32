use std::fmt;
use std::ops::{Add, Sub};

use crate::grid::CubeCoord;

/// Neighbor offsets for cells in an even column.
///
/// Order: SE, NE, N, NW, SW, S (matching [`CUBE_DIRECTIONS`] entry for entry).
///
/// [`CUBE_DIRECTIONS`]: crate::grid::CUBE_DIRECTIONS
pub const EVEN_COLUMN_DIRECTIONS: [HexCell; 6] = [
    HexCell::new(1, 0),   // south-east
    HexCell::new(1, -1),  // north-east
    HexCell::new(0, -1),  // north
    HexCell::new(-1, -1), // north-west
    HexCell::new(-1, 0),  // south-west
    HexCell::new(0, 1),   // south
];

/// Neighbor offsets for cells in an odd column.
pub const ODD_COLUMN_DIRECTIONS: [HexCell; 6] = [
    HexCell::new(1, 1),  // south-east
    HexCell::new(1, 0),  // north-east
    HexCell::new(0, -1), // north
    HexCell::new(-1, 0), // north-west
    HexCell::new(-1, 1), // south-west
    HexCell::new(0, 1),  // south
];

/// Discrete grid cell in offset (column, row) coordinates.
///
/// Uses the vertical-offset layout where odd columns are shifted half a cell
/// downward. A cell has no identity beyond its coordinates; it is freely
/// copied and used as a hash-map/set key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HexCell {
    pub col: i32,
    pub row: i32,
}

impl HexCell {
    pub const ORIGIN: Self = Self { col: 0, row: 0 };

    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Converts to cube coordinates.
    ///
    /// `col & 1` is two's-complement, so negative odd columns shift the same
    /// way positive odd columns do.
    pub const fn to_cube(self) -> CubeCoord {
        let x = self.col;
        let z = self.row - (self.col - (self.col & 1)) / 2;
        CubeCoord::new(x, -x - z, z)
    }

    /// Hex distance to `other` (number of steps along adjacent cells).
    pub fn distance(self, other: Self) -> u32 {
        self.to_cube().distance(other.to_cube())
    }

    /// The six neighbor offsets applicable to this cell's column parity.
    pub const fn neighbor_directions(self) -> [HexCell; 6] {
        if self.col & 1 == 1 {
            ODD_COLUMN_DIRECTIONS
        } else {
            EVEN_COLUMN_DIRECTIONS
        }
    }

    /// The six adjacent cells.
    pub fn neighbors(self) -> [HexCell; 6] {
        self.neighbor_directions().map(|dir| self + dir)
    }
}

impl Add for HexCell {
    type Output = HexCell;
    fn add(self, rhs: HexCell) -> HexCell {
        HexCell::new(self.col + rhs.col, self.row + rhs.row)
    }
}

impl Sub for HexCell {
    type Output = HexCell;
    fn sub(self, rhs: HexCell) -> HexCell {
        HexCell::new(self.col - rhs.col, self.row - rhs.row)
    }
}

impl fmt::Display for HexCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_round_trip_preserves_every_cell() {
        for col in -8..=8 {
            for row in -8..=8 {
                let cell = HexCell::new(col, row);
                assert_eq!(cell.to_cube().to_offset(), cell);
            }
        }
    }

    #[test]
    fn cube_components_sum_to_zero() {
        for col in -8..=8 {
            for row in -8..=8 {
                let cube = HexCell::new(col, row).to_cube();
                assert_eq!(cube.x + cube.y + cube.z, 0, "at ({col}, {row})");
            }
        }
    }

    #[test]
    fn distance_is_symmetric_and_zero_iff_equal() {
        let cells = [
            HexCell::ORIGIN,
            HexCell::new(3, -2),
            HexCell::new(-1, 4),
            HexCell::new(-5, -5),
            HexCell::new(7, 0),
        ];
        for a in cells {
            for b in cells {
                assert_eq!(a.distance(b), b.distance(a));
                assert_eq!(a.distance(b) == 0, a == b);
            }
        }
    }

    #[test]
    fn even_column_neighbors_match_direction_table() {
        let neighbors = HexCell::ORIGIN.neighbors();
        let expected = [
            HexCell::new(1, 0),
            HexCell::new(1, -1),
            HexCell::new(0, -1),
            HexCell::new(-1, -1),
            HexCell::new(-1, 0),
            HexCell::new(0, 1),
        ];
        assert_eq!(neighbors, expected);
    }

    #[test]
    fn odd_column_neighbors_use_shifted_table() {
        let neighbors = HexCell::new(1, 0).neighbors();
        let expected = [
            HexCell::new(2, 1),
            HexCell::new(2, 0),
            HexCell::new(1, -1),
            HexCell::new(0, 0),
            HexCell::new(0, 1),
            HexCell::new(1, 1),
        ];
        assert_eq!(neighbors, expected);
    }

    #[test]
    fn every_neighbor_is_at_distance_one() {
        for col in -4..=4 {
            for row in -4..=4 {
                let cell = HexCell::new(col, row);
                for neighbor in cell.neighbors() {
                    assert_eq!(cell.distance(neighbor), 1, "{cell} -> {neighbor}");
                }
            }
        }
    }

    #[test]
    fn negative_odd_columns_convert_consistently() {
        // col & 1 == 1 for col == -3 under two's complement.
        let cube = HexCell::new(-3, 2).to_cube();
        assert_eq!(cube, CubeCoord::new(-3, -1, 4));
        assert_eq!(cube.to_offset(), HexCell::new(-3, 2));
    }
}
