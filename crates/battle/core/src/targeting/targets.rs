use std::collections::HashSet;

use tracing::trace;

use crate::action::{ActionDescriptor, TargetKind};
use crate::env::OccupancyOracle;
use crate::grid::{HexCell, cells_within, hex_line, translate};

/// Deduplicated set of cells an action may legally target.
///
/// Order-irrelevant; callers highlight or pick from it, never mutate it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TargetSet(HashSet<HexCell>);

impl TargetSet {
    pub fn contains(&self, cell: HexCell) -> bool {
        self.0.contains(&cell)
    }

    pub fn iter(&self) -> impl Iterator<Item = HexCell> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl IntoIterator for TargetSet {
    type Item = HexCell;
    type IntoIter = std::collections::hash_set::IntoIter<HexCell>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<HexCell> for TargetSet {
    fn from_iter<I: IntoIterator<Item = HexCell>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Whether no occupied cell lies strictly between `from` and `to` along the
/// straight hex line (endpoints excluded).
pub fn has_line_of_sight(from: HexCell, to: HexCell, oracle: &dyn OccupancyOracle) -> bool {
    let line = hex_line(from, to);
    if line.len() <= 2 {
        return true;
    }
    line[1..line.len() - 1]
        .iter()
        .all(|&cell| !oracle.is_occupied(cell))
}

/// Computes every cell the action may target when cast from `origin`.
///
/// Stages, in order:
/// 1. Primary candidate generation, one source only: the whole grid
///    (`all_tiles_valid`), every cell within `range` (`use_radius_range`),
///    the explicit `range_pattern`, or the six adjacent cells.
/// 2. Whitelist expansion (cells added).
/// 3. Blacklist subtraction (cells removed).
/// 4. Per-candidate filtering: grid validity, line of sight, target-kind
///    relationship, and the exclusion flags.
/// 5. Self-target injection for self-capable actions.
pub fn resolve_targets(
    origin: HexCell,
    action: &ActionDescriptor,
    oracle: &dyn OccupancyOracle,
) -> TargetSet {
    let mut candidates: HashSet<HexCell> = if action.all_tiles_valid {
        oracle.valid_cells().into_iter().collect()
    } else if action.use_radius_range {
        cells_within(origin, action.range).into_iter().collect()
    } else if !action.range_pattern.is_empty() {
        action
            .range_pattern
            .iter()
            .map(|&offset| translate(origin, offset))
            .collect()
    } else {
        // No explicit selection configured: fall back to the six adjacent
        // cells. Intentional, not an error.
        origin.neighbors().into_iter().collect()
    };
    let primary = candidates.len();

    for entry in &action.whitelist {
        candidates.extend(entry.expand());
    }
    for entry in &action.blacklist {
        for cell in entry.expand() {
            candidates.remove(&cell);
        }
    }

    candidates.retain(|&cell| survives_filters(origin, cell, action, oracle));

    if action.permits_self_target() {
        candidates.insert(origin);
    }

    trace!(
        %origin,
        target_kind = %action.target_kind,
        primary,
        resolved = candidates.len(),
        "resolved target set"
    );
    TargetSet(candidates)
}

fn survives_filters(
    origin: HexCell,
    cell: HexCell,
    action: &ActionDescriptor,
    oracle: &dyn OccupancyOracle,
) -> bool {
    if !oracle.is_valid(cell) {
        return false;
    }
    if action.requires_line_of_sight && !has_line_of_sight(origin, cell, oracle) {
        return false;
    }

    let relation_ok = match action.target_kind {
        TargetKind::Caster => oracle.is_self(cell, origin),
        TargetKind::Ally => oracle.is_self(cell, origin) || oracle.is_ally(cell, origin),
        TargetKind::Enemy => oracle.is_enemy(cell, origin),
        TargetKind::Movement => !oracle.is_occupied(cell),
        TargetKind::Any => true,
    };
    if !relation_ok {
        return false;
    }

    if action.exclude_self && cell == origin {
        return false;
    }
    let occupied = oracle.is_occupied(cell);
    if (action.exclude_occupied || action.empty_cells_only) && occupied {
        return false;
    }
    if action.self_only && cell != origin {
        return false;
    }
    true
}
