use std::collections::HashMap;
use std::fmt;

use crate::env::OccupancyOracle;
use crate::grid::HexCell;

/// Unique identifier for a unit on the battle grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId(pub u32);

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Team membership; units on the same team are allies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamId(pub u8);

/// What stands on an occupied cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Occupant {
    /// A combatant.
    Unit { id: UnitId, team: TeamId },
    /// Impassable terrain. Blocks line of sight, belongs to no team.
    Obstacle,
}

/// Rectangular grid extent in columns and rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridDimensions {
    pub cols: u32,
    pub rows: u32,
}

impl GridDimensions {
    pub const fn new(cols: u32, rows: u32) -> Self {
        Self { cols, rows }
    }

    pub fn contains(&self, cell: HexCell) -> bool {
        cell.col >= 0
            && cell.row >= 0
            && cell.col < self.cols as i32
            && cell.row < self.rows as i32
    }
}

/// Immutable in-memory battle state implementing [`OccupancyOracle`].
///
/// Captures grid bounds plus a cell-to-occupant map. Embedding applications
/// with live battle state usually implement the oracle directly over their
/// own structures; this snapshot covers tests, AI lookahead over a frozen
/// state, and small embeddings.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleSnapshot {
    dimensions: Option<GridDimensions>,
    occupants: HashMap<HexCell, Occupant>,
}

impl BattleSnapshot {
    /// A bounded grid with no occupants.
    pub fn bounded(dimensions: GridDimensions) -> Self {
        Self {
            dimensions: Some(dimensions),
            occupants: HashMap::new(),
        }
    }

    /// An unbounded grid (every cell valid) with no occupants.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Places a unit, replacing whatever occupied the cell.
    pub fn place(mut self, id: UnitId, team: TeamId, cell: HexCell) -> Self {
        self.occupants.insert(cell, Occupant::Unit { id, team });
        self
    }

    /// Places an obstacle, replacing whatever occupied the cell.
    pub fn block(mut self, cell: HexCell) -> Self {
        self.occupants.insert(cell, Occupant::Obstacle);
        self
    }

    pub fn occupant(&self, cell: HexCell) -> Option<Occupant> {
        self.occupants.get(&cell).copied()
    }

    fn unit(&self, cell: HexCell) -> Option<(UnitId, TeamId)> {
        match self.occupant(cell)? {
            Occupant::Unit { id, team } => Some((id, team)),
            Occupant::Obstacle => None,
        }
    }
}

impl OccupancyOracle for BattleSnapshot {
    fn is_valid(&self, cell: HexCell) -> bool {
        match self.dimensions {
            Some(dims) => dims.contains(cell),
            None => true,
        }
    }

    fn valid_cells(&self) -> Vec<HexCell> {
        match self.dimensions {
            Some(dims) => (0..dims.cols as i32)
                .flat_map(|col| (0..dims.rows as i32).map(move |row| HexCell::new(col, row)))
                .collect(),
            // An unbounded snapshot has no finite enumeration; whole-grid
            // selection only makes sense on bounded grids.
            None => Vec::new(),
        }
    }

    fn is_occupied(&self, cell: HexCell) -> bool {
        self.occupants.contains_key(&cell)
    }

    fn is_ally(&self, cell: HexCell, relative_to: HexCell) -> bool {
        match (self.unit(cell), self.unit(relative_to)) {
            (Some((id, team)), Some((actor, actor_team))) => team == actor_team && id != actor,
            _ => false,
        }
    }

    fn is_enemy(&self, cell: HexCell, relative_to: HexCell) -> bool {
        match (self.unit(cell), self.unit(relative_to)) {
            (Some((_, team)), Some((_, actor_team))) => team != actor_team,
            _ => false,
        }
    }

    fn is_self(&self, cell: HexCell, relative_to: HexCell) -> bool {
        match (self.unit(cell), self.unit(relative_to)) {
            (Some((id, _)), Some((actor, _))) => id == actor,
            _ => false,
        }
    }
}
