//! Action targeting descriptors.
//!
//! An [`ActionDescriptor`] is the data-driven specification of how one action
//! selects its targets and expands its area of effect. Descriptors are loaded
//! from configuration (see the `battle-content` crate), treated as read-only,
//! and interpreted by the resolvers in [`crate::targeting`].

mod descriptor;

pub use descriptor::{ActionDescriptor, AoeShape, PatternEntry, TargetKind};
