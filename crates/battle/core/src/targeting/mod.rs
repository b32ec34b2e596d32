//! Target resolution and area-of-effect expansion.
//!
//! Data flow: an [`ActionDescriptor`] plus the caster's cell go into
//! [`resolve_targets`], producing the set of cells the action may legally be
//! aimed at. Once a target cell is chosen (by player input or AI), it goes
//! into [`resolve_affected`] together with the caster's cell, producing the
//! ordered list of cells the action actually touches.
//!
//! Both resolvers are pure: they read battle state only through the
//! [`OccupancyOracle`](crate::env::OccupancyOracle), never mutate anything,
//! and return identical results for identical inputs.
//!
//! [`ActionDescriptor`]: crate::action::ActionDescriptor

mod aoe;
mod targets;

pub use aoe::{AffectedSet, resolve_affected};
pub use targets::{TargetSet, has_line_of_sight, resolve_targets};
