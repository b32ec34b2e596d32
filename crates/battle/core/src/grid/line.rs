use crate::grid::{CubeCoord, HexCell};

/// Cells forming the straight hex line from `from` to `to`, inclusive.
///
/// Samples `distance + 1` evenly spaced points between the cube forms of the
/// endpoints and rounds each back onto the grid. A zero-length line is the
/// single cell `from`.
pub fn hex_line(from: HexCell, to: HexCell) -> Vec<HexCell> {
    let a = from.to_cube();
    let b = to.to_cube();
    let steps = a.distance(b);
    if steps == 0 {
        return vec![from];
    }

    (0..=steps)
        .map(|i| {
            let (x, y, z) = a.lerp(b, f64::from(i) / f64::from(steps));
            CubeCoord::round(x, y, z).to_offset()
        })
        .collect()
}

/// Cells continuing `steps` cells past `to` along the `from -> to` direction.
///
/// The direction vector is normalized by its largest-magnitude cube component
/// and each fractional step is rounded back onto the grid, so the extension
/// follows the same path the line itself would if it were longer. Returns an
/// empty sequence when `from == to` (no direction to follow).
pub fn extend_line(from: HexCell, to: HexCell, steps: u32) -> Vec<HexCell> {
    let a = from.to_cube();
    let b = to.to_cube();
    let d = b - a;

    let max = d.x.abs().max(d.y.abs()).max(d.z.abs());
    if max == 0 {
        return Vec::new();
    }
    let max = max as f64;
    let (sx, sy, sz) = (d.x as f64 / max, d.y as f64 / max, d.z as f64 / max);

    (1..=steps)
        .map(|i| {
            let i = f64::from(i);
            CubeCoord::round(
                b.x as f64 + sx * i,
                b.y as f64 + sy * i,
                b.z as f64 + sz * i,
            )
            .to_offset()
        })
        .collect()
}
