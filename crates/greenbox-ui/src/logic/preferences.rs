//! Serialized form of the demo selection kept in browser storage.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::logic::selection::GroupSelection;

/// Storage key for the demo selection.
pub const SELECTION_KEY: &str = "greenbox.demo.selection";

/// Errors raised while restoring persisted preferences.
#[derive(Debug, Error)]
pub enum PreferencesError {
    /// The stored payload was not valid JSON for [`PersistedSelection`].
    #[error("failed to decode stored selection")]
    Decode(#[from] serde_json::Error),
    /// The stored payload named an id outside the group.
    #[error("stored selection references unknown item '{id}'")]
    UnknownItem {
        /// The unknown id.
        id: String,
    },
}

/// Selected ids as written to storage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedSelection {
    /// Selected member ids.
    #[serde(default)]
    pub selected: Vec<String>,
}

impl PersistedSelection {
    /// Captures the current selection.
    #[must_use]
    pub fn capture(group: &GroupSelection) -> Self {
        Self {
            selected: group.selected().map(str::to_string).collect(),
        }
    }

    /// JSON encoding, the same object form written to browser storage.
    ///
    /// # Errors
    /// Returns [`PreferencesError::Decode`] if serialization fails.
    pub fn encode(&self) -> Result<String, PreferencesError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a JSON payload.
    ///
    /// # Errors
    /// Returns [`PreferencesError::Decode`] when `raw` is not a JSON object of
    /// this shape.
    pub fn decode(raw: &str) -> Result<Self, PreferencesError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Replaces the selection of `group`. On error `group` is left untouched.
    ///
    /// # Errors
    /// Returns [`PreferencesError::UnknownItem`] for the first stored id that
    /// is not a member of `group`.
    pub fn apply_to(&self, group: &mut GroupSelection) -> Result<(), PreferencesError> {
        if let Some(id) = self.selected.iter().find(|id| !group.contains(id)) {
            return Err(PreferencesError::UnknownItem { id: id.clone() });
        }
        group.clear();
        for id in &self.selected {
            group.set(id, true);
        }
        Ok(())
    }
}
