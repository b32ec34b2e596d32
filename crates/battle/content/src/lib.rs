//! Data-driven action library.
//!
//! Ships a catalog of ready-made [`ActionDescriptor`]s parsed from embedded
//! RON files, so embedding code gets a usable set of actions without writing
//! descriptors by hand. The engine itself (`battle-core`) never reads files;
//! all configuration I/O lives here.
//!
//! [`ActionDescriptor`]: battle_core::ActionDescriptor

mod catalog;

pub use catalog::{ActionCatalog, ContentError};
