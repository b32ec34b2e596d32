//! Read-only battle-state queries.
//!
//! The resolvers never hold battle state themselves; they ask an
//! [`OccupancyOracle`] supplied by the embedding application. The oracle must
//! answer without side effects, and its underlying state must not be mutated
//! while a single resolution call is in flight. [`BattleSnapshot`] is a
//! self-contained implementation for tests and simple embeddings.

mod snapshot;

pub use snapshot::{BattleSnapshot, GridDimensions, Occupant, TeamId, UnitId};

use crate::grid::HexCell;

/// Boolean queries the target and AOE resolvers depend on.
///
/// `relative_to` is always the acting unit's cell; relationship queries
/// compare a candidate cell's occupant against whoever stands there.
pub trait OccupancyOracle: Send + Sync {
    /// Whether the cell exists on the battle grid.
    fn is_valid(&self, cell: HexCell) -> bool;

    /// Every cell on the battle grid. Needed by actions that consider the
    /// whole grid rather than a range around the caster.
    fn valid_cells(&self) -> Vec<HexCell>;

    /// Whether anything (unit or obstacle) occupies the cell.
    fn is_occupied(&self, cell: HexCell) -> bool;

    /// Whether the cell holds a unit on the same team as the occupant of
    /// `relative_to`, other than that occupant itself.
    fn is_ally(&self, cell: HexCell, relative_to: HexCell) -> bool;

    /// Whether the cell holds a unit on an opposing team to the occupant of
    /// `relative_to`.
    fn is_enemy(&self, cell: HexCell, relative_to: HexCell) -> bool;

    /// Whether the cell holds the same unit that occupies `relative_to`.
    fn is_self(&self, cell: HexCell, relative_to: HexCell) -> bool {
        cell == relative_to && self.is_occupied(cell)
    }
}
