//! Hex grid geometry.
//!
//! Coordinates come in two forms:
//! - [`HexCell`]: offset (column, row) addressing in the vertical-offset,
//!   odd-column-shifted layout. This is the form the rest of the engine and
//!   any embedding code speaks.
//! - [`CubeCoord`]: cube (x, y, z) coordinates with `x + y + z = 0`, used
//!   internally wherever true hex distance or interpolation is needed.
//!
//! Offset math is parity-sensitive: which cells neighbor a given cell depends
//! on whether its column index is even or odd. Every routine here that moves
//! a cell by a relative offset therefore round-trips through cube space
//! ([`translate`]) instead of adding components.

mod area;
mod cell;
mod cube;
mod line;

pub use area::{cells_within, translate};
pub use cell::{EVEN_COLUMN_DIRECTIONS, HexCell, ODD_COLUMN_DIRECTIONS};
pub use cube::{CUBE_DIRECTIONS, CubeCoord};
pub use line::{extend_line, hex_line};
