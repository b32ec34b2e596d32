use std::collections::HashMap;

use battle_core::ActionDescriptor;
use tracing::debug;

/// Errors raised while loading or querying the action catalog.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    /// An embedded data file failed to parse.
    #[error("failed to parse {file}: {source}")]
    Parse {
        file: &'static str,
        #[source]
        source: ron::error::SpannedError,
    },

    /// No action with the requested name exists in the catalog.
    #[error("unknown action '{0}'")]
    UnknownAction(String),
}

/// Registry of named action descriptors.
///
/// Loaded once from embedded RON data and treated as read-only afterwards;
/// the resolvers in `battle-core` borrow descriptors from here per query.
#[derive(Clone, Debug)]
pub struct ActionCatalog {
    actions: HashMap<String, ActionDescriptor>,
}

impl ActionCatalog {
    /// Loads every embedded action data file.
    ///
    /// Later files override earlier entries with the same name, which keeps
    /// the data files free to regroup actions without rename dances.
    pub fn load() -> Result<Self, ContentError> {
        let mut actions = HashMap::new();
        for (file, text) in [
            ("strikes.ron", include_str!("../data/actions/strikes.ron")),
            ("spells.ron", include_str!("../data/actions/spells.ron")),
            (
                "maneuvers.ron",
                include_str!("../data/actions/maneuvers.ron"),
            ),
        ] {
            let parsed: HashMap<String, ActionDescriptor> =
                ron::from_str(text).map_err(|source| ContentError::Parse { file, source })?;
            actions.extend(parsed);
        }

        debug!(actions = actions.len(), "loaded action catalog");
        Ok(Self { actions })
    }

    /// Looks up an action by name.
    pub fn get(&self, name: &str) -> Option<&ActionDescriptor> {
        self.actions.get(name)
    }

    /// Looks up an action by name, failing loudly on a missing entry.
    pub fn require(&self, name: &str) -> Result<&ActionDescriptor, ContentError> {
        self.actions
            .get(name)
            .ok_or_else(|| ContentError::UnknownAction(name.to_owned()))
    }

    /// Names of every registered action.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.actions.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }
}
