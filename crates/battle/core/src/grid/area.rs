use crate::grid::{CubeCoord, HexCell};

/// Cells within `radius` hex steps of `center`, excluding `center` itself.
///
/// Enumerates the bounded rhombus of cube offsets with distance
/// `1..=radius`. A radius of zero or less yields no cells (the loop bounds
/// collapse), matching how out-of-range action configuration degrades to an
/// empty selection instead of failing.
pub fn cells_within(center: HexCell, radius: i32) -> Vec<HexCell> {
    let c = center.to_cube();
    let mut cells = Vec::new();
    for dx in -radius..=radius {
        for dy in (-radius).max(-dx - radius)..=radius.min(-dx + radius) {
            if dx == 0 && dy == 0 {
                continue;
            }
            let delta = CubeCoord::new(dx, dy, -dx - dy);
            cells.push((c + delta).to_offset());
        }
    }
    cells
}

/// Moves `base` by a relative `offset`, round-tripping through cube space.
///
/// Adding offset coordinates component-wise is wrong on this grid: the same
/// visual step changes (col, row) differently depending on the column parity
/// of where it is applied. Converting both sides to cube coordinates first
/// keeps explicit patterns geometrically correct at any anchor cell.
pub fn translate(base: HexCell, offset: HexCell) -> HexCell {
    (base.to_cube() + offset.to_cube()).to_offset()
}
