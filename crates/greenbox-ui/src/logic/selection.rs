//! Parent-side state for a group of checkboxes with a "select all" control.

use std::collections::BTreeSet;

use crate::logic::checkbox::CheckState;

/// Member ids of a group and the currently selected subset.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GroupSelection {
    members: Vec<String>,
    selected: BTreeSet<String>,
}

impl GroupSelection {
    /// Group with nothing selected. Duplicate ids are kept once.
    #[must_use]
    pub fn new<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = BTreeSet::new();
        let members = members
            .into_iter()
            .map(Into::into)
            .filter(|id: &String| seen.insert(id.clone()))
            .collect();
        Self {
            members,
            selected: BTreeSet::new(),
        }
    }

    /// Member ids in insertion order.
    #[must_use]
    pub fn members(&self) -> &[String] {
        &self.members
    }

    /// True when `id` is a member of the group.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.members.iter().any(|member| member == id)
    }

    /// True when `id` is selected.
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.contains(id)
    }

    /// Selected ids in sorted order.
    pub fn selected(&self) -> impl Iterator<Item = &str> + '_ {
        self.selected.iter().map(String::as_str)
    }

    /// State of one member's checkbox.
    #[must_use]
    pub fn member_state(&self, id: &str) -> CheckState {
        if self.is_selected(id) {
            CheckState::Checked
        } else {
            CheckState::Unchecked
        }
    }

    /// State of the "select all" checkbox.
    #[must_use]
    pub fn parent_state(&self) -> CheckState {
        if self.selected.is_empty() {
            CheckState::Unchecked
        } else if self.selected.len() == self.members.len() {
            CheckState::Checked
        } else {
            CheckState::Indeterminate
        }
    }

    /// Flips one member. Returns false for unknown ids.
    pub fn toggle(&mut self, id: &str) -> bool {
        if !self.contains(id) {
            tracing::debug!(id, "ignoring toggle for unknown group member");
            return false;
        }
        if !self.selected.remove(id) {
            self.selected.insert(id.to_string());
        }
        true
    }

    /// Marks `id` selected or not. Returns false for unknown ids.
    pub fn set(&mut self, id: &str, selected: bool) -> bool {
        if !self.contains(id) {
            return false;
        }
        if selected {
            self.selected.insert(id.to_string());
        } else {
            self.selected.remove(id);
        }
        true
    }

    /// Clears everything when fully selected; otherwise selects every member.
    pub fn toggle_all(&mut self) {
        if self.parent_state() == CheckState::Checked {
            self.selected.clear();
        } else {
            self.selected = self.members.iter().cloned().collect();
        }
    }

    /// Deselects every member.
    pub fn clear(&mut self) {
        self.selected.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruits() -> GroupSelection {
        GroupSelection::new(["apple", "pear", "plum"])
    }

    #[test]
    fn parent_state_follows_selection_size() {
        let mut group = fruits();
        assert_eq!(group.parent_state(), CheckState::Unchecked);
        assert!(group.toggle("pear"));
        assert_eq!(group.parent_state(), CheckState::Indeterminate);
        assert_eq!(group.member_state("pear"), CheckState::Checked);
        assert_eq!(group.member_state("plum"), CheckState::Unchecked);
        group.toggle("apple");
        group.toggle("plum");
        assert_eq!(group.parent_state(), CheckState::Checked);
    }

    #[test]
    fn toggle_all_selects_from_partial_and_clears_from_full() {
        let mut group = fruits();
        group.toggle("apple");
        group.toggle_all();
        assert_eq!(group.parent_state(), CheckState::Checked);
        group.toggle_all();
        assert_eq!(group.parent_state(), CheckState::Unchecked);
        assert_eq!(group.selected().count(), 0);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut group = fruits();
        assert!(!group.toggle("kiwi"));
        assert!(!group.set("kiwi", true));
        assert_eq!(group.parent_state(), CheckState::Unchecked);
    }

    #[test]
    fn empty_group_is_unchecked_and_duplicates_collapse() {
        let mut empty = GroupSelection::new(Vec::<String>::new());
        empty.toggle_all();
        assert_eq!(empty.parent_state(), CheckState::Unchecked);

        let group = GroupSelection::new(["a", "b", "a"]);
        assert_eq!(group.members(), ["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn set_and_clear_update_selection() {
        let mut group = fruits();
        assert!(group.set("plum", true));
        assert!(group.set("plum", true));
        assert_eq!(group.selected().collect::<Vec<_>>(), vec!["plum"]);
        assert!(group.set("plum", false));
        group.toggle_all();
        group.clear();
        assert_eq!(group.parent_state(), CheckState::Unchecked);
    }
}
