use crate::grid::{HexCell, cells_within};

/// Which occupancy category a candidate target cell must satisfy.
///
/// The source of truth for relationships is the
/// [`OccupancyOracle`](crate::env::OccupancyOracle); this enum only names the
/// required relation relative to the acting unit's cell.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum TargetKind {
    /// Only the acting unit itself.
    Caster,
    /// The acting unit or a unit on the same team.
    Ally,
    /// A unit on an opposing team.
    Enemy,
    /// An unoccupied cell (movement destinations).
    Movement,
    /// Any cell; no relationship constraint.
    #[default]
    Any,
}

/// One whitelist/blacklist entry: an absolute cell, or every cell around one.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PatternEntry {
    /// A single absolute cell.
    Cell(HexCell),
    /// All cells within `radius` of `center`, center excluded (the same
    /// enumeration the radius range mode uses).
    Radius { center: HexCell, radius: i32 },
}

impl PatternEntry {
    /// Absolute cells this entry contributes.
    pub fn expand(&self) -> Vec<HexCell> {
        match *self {
            PatternEntry::Cell(cell) => vec![cell],
            PatternEntry::Radius { center, radius } => cells_within(center, radius),
        }
    }
}

/// How a chosen target cell expands into the full affected area.
///
/// Exactly one mode is authoritative per action. The old engine selected the
/// mode from overlapping flags in a fixed priority order (line, then radius,
/// then pattern, then single cell); the closed enum makes that exclusivity
/// structural.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AoeShape {
    /// The target cell alone.
    #[default]
    None,
    /// Explicit offsets applied relative to the target cell.
    Pattern(Vec<HexCell>),
    /// All cells within this distance of the target cell.
    Radius(i32),
    /// The cells along the caster-to-target line.
    Line {
        /// Total line thickness in cells. 1 is a single-cell-wide beam.
        #[cfg_attr(feature = "serde", serde(default = "default_line_width"))]
        width: u32,
        /// Extra cells continuing past the target along the same direction.
        #[cfg_attr(feature = "serde", serde(default))]
        overshoot: u32,
    },
}

#[cfg(feature = "serde")]
fn default_line_width() -> u32 {
    1
}

/// Targeting and area-of-effect specification for one action.
///
/// Every field has a default, so configuration only states what deviates
/// from a plain single-target melee touch. Descriptors are immutable once
/// loaded; the resolvers never write back into them.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "snake_case"))]
pub struct ActionDescriptor {
    /// Required occupancy relation for candidate cells.
    pub target_kind: TargetKind,

    /// Maximum targeting distance. Only consulted by the radius range mode.
    pub range: i32,

    /// Select every cell within `range` instead of the 6-neighbor default.
    pub use_radius_range: bool,

    /// Explicit legal target offsets relative to the caster. Applied through
    /// cube space so the pattern holds at any column parity.
    pub range_pattern: Vec<HexCell>,

    /// Ignore range entirely; every grid-valid cell is a candidate.
    pub all_tiles_valid: bool,

    /// Cells added to the candidate set after primary selection.
    pub whitelist: Vec<PatternEntry>,

    /// Cells removed from the candidate set after whitelist expansion.
    pub blacklist: Vec<PatternEntry>,

    /// The caster's own cell can never be targeted.
    pub exclude_self: bool,

    /// Occupied cells are rejected.
    pub exclude_occupied: bool,

    /// Only unoccupied cells are accepted.
    pub empty_cells_only: bool,

    /// Only the caster's own cell is accepted.
    pub self_only: bool,

    /// Candidates with an occupied cell strictly between caster and
    /// candidate are rejected.
    pub requires_line_of_sight: bool,

    /// Area expansion applied to the chosen target cell.
    pub aoe: AoeShape,

    /// Exclude the chosen target cell itself from the affected set.
    pub inverse_aoe: bool,

    /// For line areas, exclude the caster's own cell from the line.
    pub exclude_origin: bool,
}

impl Default for ActionDescriptor {
    fn default() -> Self {
        Self {
            target_kind: TargetKind::default(),
            range: 1,
            use_radius_range: false,
            range_pattern: Vec::new(),
            all_tiles_valid: false,
            whitelist: Vec::new(),
            blacklist: Vec::new(),
            exclude_self: false,
            exclude_occupied: false,
            empty_cells_only: false,
            self_only: false,
            requires_line_of_sight: false,
            aoe: AoeShape::default(),
            inverse_aoe: false,
            exclude_origin: false,
        }
    }
}

impl ActionDescriptor {
    /// True when the caster's own cell is injected into the resolved target
    /// set regardless of primary selection: self-capable target kinds with
    /// self-targeting not excluded.
    pub fn permits_self_target(&self) -> bool {
        matches!(self.target_kind, TargetKind::Caster | TargetKind::Ally) && !self.exclude_self
    }
}

// ============================================================================
// Common Descriptor Constructors
// ============================================================================

impl ActionDescriptor {
    /// A basic adjacent-cell attack (the all-defaults descriptor, narrowed
    /// to enemies).
    pub fn melee() -> Self {
        Self {
            target_kind: TargetKind::Enemy,
            ..Self::default()
        }
    }

    /// A ranged attack needing a clear line to its target.
    pub fn ranged(range: i32) -> Self {
        Self {
            target_kind: TargetKind::Enemy,
            range,
            use_radius_range: true,
            requires_line_of_sight: true,
            ..Self::default()
        }
    }

    /// A thrown burst: radius-ranged targeting, radius area around impact.
    pub fn burst(range: i32, radius: i32) -> Self {
        Self {
            range,
            use_radius_range: true,
            requires_line_of_sight: true,
            aoe: AoeShape::Radius(radius),
            ..Self::default()
        }
    }

    /// A piercing beam from the caster through the target.
    pub fn beam(range: i32, overshoot: u32) -> Self {
        Self {
            range,
            use_radius_range: true,
            aoe: AoeShape::Line {
                width: 1,
                overshoot,
            },
            exclude_origin: true,
            ..Self::default()
        }
    }

    /// A single-step move onto an empty adjacent cell.
    pub fn step() -> Self {
        Self {
            target_kind: TargetKind::Movement,
            exclude_self: true,
            ..Self::default()
        }
    }
}
