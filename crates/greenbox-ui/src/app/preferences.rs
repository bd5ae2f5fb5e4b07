//! Browser storage for the demo selection.

use crate::logic::preferences::{PersistedSelection, SELECTION_KEY};
use crate::logic::selection::GroupSelection;
use gloo::console;
use gloo::storage::{LocalStorage, Storage};

pub(crate) fn load_selection(members: &[&str]) -> GroupSelection {
    let mut group = GroupSelection::new(members.iter().copied());
    let stored = match LocalStorage::get::<PersistedSelection>(SELECTION_KEY) {
        Ok(stored) => stored,
        Err(gloo::storage::errors::StorageError::KeyNotFound(_)) => return group,
        Err(err) => {
            log_storage_error("get", SELECTION_KEY, &err.to_string());
            LocalStorage::delete(SELECTION_KEY);
            return group;
        }
    };
    if let Err(err) = stored.apply_to(&mut group) {
        log_storage_error("restore", SELECTION_KEY, &err.to_string());
        LocalStorage::delete(SELECTION_KEY);
    }
    group
}

pub(crate) fn persist_selection(group: &GroupSelection) {
    set_storage(SELECTION_KEY, &PersistedSelection::capture(group));
}

fn set_storage(key: &'static str, value: &PersistedSelection) {
    if let Err(err) = LocalStorage::set(key, value) {
        log_storage_error("set", key, &err.to_string());
    }
}

fn log_storage_error(operation: &'static str, key: &'static str, detail: &str) {
    console::error!("storage operation failed", operation, key, detail);
}
