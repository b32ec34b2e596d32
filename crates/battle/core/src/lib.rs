//! Hex-grid targeting and area-of-effect geometry for tactical battles.
//!
//! `battle-core` owns the math a turn-based battle needs to answer two
//! questions: "which cells may this action target from here?" and "once a
//! target is picked, which cells does it hit?". Everything else — rendering,
//! input, turn order, damage application — lives outside and talks to this
//! crate through plain value types and the read-only
//! [`OccupancyOracle`](env::OccupancyOracle).
//!
//! All operations are synchronous pure functions over immutable inputs;
//! results are freshly constructed per call and owned by the caller.

pub mod action;
pub mod env;
pub mod grid;
pub mod targeting;

pub use action::{ActionDescriptor, AoeShape, PatternEntry, TargetKind};
pub use env::{BattleSnapshot, GridDimensions, Occupant, OccupancyOracle, TeamId, UnitId};
pub use grid::{CubeCoord, HexCell};
pub use targeting::{
    AffectedSet, TargetSet, has_line_of_sight, resolve_affected, resolve_targets,
};
