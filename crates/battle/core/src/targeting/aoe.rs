use tracing::trace;

use crate::action::{ActionDescriptor, AoeShape};
use crate::env::OccupancyOracle;
use crate::grid::{CUBE_DIRECTIONS, HexCell, cells_within, extend_line, hex_line, translate};

/// Ordered, deduplicated list of cells an action actually affects.
///
/// Insertion order is preserved so damage application stays deterministic;
/// a cell never appears twice no matter how target, pattern, radius, and
/// line expansion overlap.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AffectedSet(Vec<HexCell>);

impl AffectedSet {
    /// Appends `cell` unless it is already present.
    fn push(&mut self, cell: HexCell) {
        if !self.0.contains(&cell) {
            self.0.push(cell);
        }
    }

    pub fn contains(&self, cell: HexCell) -> bool {
        self.0.contains(&cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = HexCell> + '_ {
        self.0.iter().copied()
    }

    pub fn as_slice(&self) -> &[HexCell] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for AffectedSet {
    type Item = HexCell;
    type IntoIter = std::vec::IntoIter<HexCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

/// Expands the chosen `target` cell into the full affected area.
///
/// The target itself is appended first (unless `inverse_aoe`); the
/// descriptor's [`AoeShape`] then contributes further cells, each
/// grid-validity checked and deduplicated. The initial target append is not
/// validity checked: the caller is expected to have picked it from
/// [`resolve_targets`](crate::targeting::resolve_targets) output.
pub fn resolve_affected(
    origin: HexCell,
    target: HexCell,
    action: &ActionDescriptor,
    oracle: &dyn OccupancyOracle,
) -> AffectedSet {
    let mut affected = AffectedSet::default();
    if !action.inverse_aoe {
        affected.push(target);
    }

    match action.aoe {
        AoeShape::Line { width, overshoot } => {
            expand_line(&mut affected, origin, target, width, overshoot, action, oracle);
        }
        AoeShape::Radius(radius) => {
            for cell in cells_within(target, radius) {
                if oracle.is_valid(cell) {
                    affected.push(cell);
                }
            }
        }
        AoeShape::Pattern(ref offsets) => {
            for &offset in offsets {
                let cell = translate(target, offset);
                if oracle.is_valid(cell) {
                    affected.push(cell);
                }
            }
        }
        AoeShape::None => {}
    }

    trace!(
        %origin,
        %target,
        affected = affected.len(),
        "resolved affected set"
    );
    affected
}

/// Appends the caster-to-target line, its overshoot continuation, and any
/// width thickening, in traversal order.
fn expand_line(
    affected: &mut AffectedSet,
    origin: HexCell,
    target: HexCell,
    width: u32,
    overshoot: u32,
    action: &ActionDescriptor,
    oracle: &dyn OccupancyOracle,
) {
    let mut line = hex_line(origin, target);
    line.extend(extend_line(origin, target, overshoot));

    // Side directions for widths above one: the line direction snapped to
    // the nearest cube unit direction, rotated +-120 degrees. Even widths
    // put the extra cell on the +120 side.
    let sides = (target.to_cube() - origin.to_cube())
        .unit_direction()
        .direction_index()
        .map(|idx| (CUBE_DIRECTIONS[(idx + 2) % 6], CUBE_DIRECTIONS[(idx + 4) % 6]));
    let width = width.max(1) as i32;
    let near_steps = width / 2;
    let far_steps = (width - 1) / 2;

    let mut push_cell = |cell: HexCell| {
        if action.exclude_origin && cell == origin {
            return;
        }
        if action.inverse_aoe && cell == target {
            return;
        }
        if oracle.is_valid(cell) {
            affected.push(cell);
        }
    };

    for cell in line {
        push_cell(cell);
        if let Some((near, far)) = sides {
            let cube = cell.to_cube();
            for step in 1..=near_steps {
                push_cell((cube + near * step).to_offset());
            }
            for step in 1..=far_steps {
                push_cell((cube + far * step).to_offset());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{BattleSnapshot, GridDimensions, TeamId, UnitId};

    fn field() -> BattleSnapshot {
        BattleSnapshot::unbounded().place(UnitId(1), TeamId(0), HexCell::ORIGIN)
    }

    #[test]
    fn single_cell_actions_affect_only_the_target() {
        let affected = resolve_affected(
            HexCell::ORIGIN,
            HexCell::new(1, 0),
            &ActionDescriptor::default(),
            &field(),
        );
        assert_eq!(affected.as_slice(), &[HexCell::new(1, 0)]);
    }

    #[test]
    fn radius_aoe_surrounds_the_target() {
        let target = HexCell::new(3, 1);
        let action = ActionDescriptor::burst(4, 1);
        let affected = resolve_affected(HexCell::ORIGIN, target, &action, &field());

        // Target first, then its six neighbors.
        assert_eq!(affected.len(), 7);
        assert_eq!(affected.as_slice()[0], target);
        for cell in affected.iter().skip(1) {
            assert_eq!(target.distance(cell), 1);
        }
    }

    #[test]
    fn inverse_aoe_leaves_the_target_untouched() {
        let target = HexCell::new(3, 1);
        let action = ActionDescriptor {
            inverse_aoe: true,
            ..ActionDescriptor::burst(4, 1)
        };
        let affected = resolve_affected(HexCell::ORIGIN, target, &action, &field());

        assert_eq!(affected.len(), 6);
        assert!(!affected.contains(target));
    }

    #[test]
    fn pattern_aoe_translates_through_cube_space() {
        // North-east offset relative to odd-column target (1, 0) lands on
        // (2, 0), not the naive (2, -1).
        let action = ActionDescriptor {
            aoe: AoeShape::Pattern(vec![HexCell::new(1, -1)]),
            ..ActionDescriptor::default()
        };
        let affected = resolve_affected(HexCell::ORIGIN, HexCell::new(1, 0), &action, &field());

        assert_eq!(affected.as_slice(), &[HexCell::new(1, 0), HexCell::new(2, 0)]);
    }

    #[test]
    fn line_aoe_with_overshoot_dedups_the_target() {
        let action = ActionDescriptor {
            aoe: AoeShape::Line {
                width: 1,
                overshoot: 1,
            },
            ..ActionDescriptor::default()
        };
        let affected = resolve_affected(HexCell::ORIGIN, HexCell::new(3, 0), &action, &field());

        assert_eq!(
            affected.as_slice(),
            &[
                HexCell::new(3, 0), // initial target append
                HexCell::ORIGIN,
                HexCell::new(1, 0),
                HexCell::new(2, 0),
                HexCell::new(4, 1), // overshoot continuation
            ]
        );
    }

    #[test]
    fn exclude_origin_drops_the_caster_cell_from_the_line() {
        let action = ActionDescriptor::beam(5, 0);
        let affected = resolve_affected(HexCell::ORIGIN, HexCell::new(2, 0), &action, &field());

        assert!(!affected.contains(HexCell::ORIGIN));
        assert_eq!(
            affected.as_slice(),
            &[HexCell::new(2, 0), HexCell::new(1, 0)]
        );
    }

    #[test]
    fn inverse_line_aoe_skips_the_target_cell_entirely() {
        let action = ActionDescriptor {
            inverse_aoe: true,
            aoe: AoeShape::Line {
                width: 1,
                overshoot: 0,
            },
            ..ActionDescriptor::default()
        };
        let affected = resolve_affected(HexCell::ORIGIN, HexCell::new(2, 0), &action, &field());

        assert!(!affected.contains(HexCell::new(2, 0)));
        assert_eq!(
            affected.as_slice(),
            &[HexCell::ORIGIN, HexCell::new(1, 0)]
        );
    }

    #[test]
    fn wide_lines_pick_up_side_cells() {
        let narrow = resolve_affected(
            HexCell::ORIGIN,
            HexCell::new(3, 0),
            &ActionDescriptor {
                aoe: AoeShape::Line {
                    width: 1,
                    overshoot: 0,
                },
                ..ActionDescriptor::default()
            },
            &field(),
        );
        let wide = resolve_affected(
            HexCell::ORIGIN,
            HexCell::new(3, 0),
            &ActionDescriptor {
                aoe: AoeShape::Line {
                    width: 3,
                    overshoot: 0,
                },
                ..ActionDescriptor::default()
            },
            &field(),
        );

        assert!(wide.len() > narrow.len());
        for cell in narrow.iter() {
            assert!(wide.contains(cell));
        }
        // Every extra cell hugs the base line.
        for cell in wide.iter() {
            let nearest = narrow.iter().map(|c| c.distance(cell)).min().unwrap();
            assert!(nearest <= 1, "{cell} strays from the line");
        }
    }

    #[test]
    fn expansion_respects_grid_bounds() {
        let oracle = BattleSnapshot::bounded(GridDimensions::new(4, 4)).place(
            UnitId(1),
            TeamId(0),
            HexCell::ORIGIN,
        );
        let target = HexCell::new(3, 3);
        let action = ActionDescriptor::burst(6, 1);
        let affected = resolve_affected(HexCell::ORIGIN, target, &action, &oracle);

        assert!(affected.iter().all(|c| {
            c.col >= 0 && c.col < 4 && c.row >= 0 && c.row < 4
        }));
        assert!(affected.contains(target));
    }

    #[test]
    fn no_cell_ever_appears_twice() {
        // Pattern deliberately overlapping the target and itself.
        let action = ActionDescriptor {
            aoe: AoeShape::Pattern(vec![
                HexCell::ORIGIN,
                HexCell::new(1, 0),
                HexCell::new(1, 0),
                HexCell::new(0, 1),
            ]),
            ..ActionDescriptor::default()
        };
        let affected = resolve_affected(HexCell::ORIGIN, HexCell::new(2, 2), &action, &field());

        let mut seen = std::collections::HashSet::new();
        for cell in affected.iter() {
            assert!(seen.insert(cell), "duplicate {cell}");
        }
    }
}
