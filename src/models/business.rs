//! The label-level business roadmap state.

use serde::{Deserialize, Serialize};

use super::checklist::{percentage, ChecklistState};
use super::schema::business_schema;

/// Checkbox state of the business roadmap.
///
/// There is exactly one of these per data directory. It is independent of
/// every release: nothing a release does reads or writes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BusinessState {
    checklists: ChecklistState,
}

impl BusinessState {
    /// Creates the all-unchecked default state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            checklists: ChecklistState::create_empty(business_schema()),
        }
    }

    /// Fills missing entries after loading from storage.
    pub fn normalize(&mut self) {
        self.checklists.normalize(business_schema());
    }

    /// Returns whether an item is checked.
    #[must_use]
    pub fn is_checked(&self, section: &str, key: &str) -> bool {
        self.checklists.is_checked(section, key)
    }

    /// Sets an item's checked flag.
    pub fn set(&mut self, section: &str, key: &str, checked: bool) {
        self.checklists.set(section, key, checked);
    }

    /// Flips an item and returns its new value.
    pub fn toggle(&mut self, section: &str, key: &str) -> bool {
        self.checklists.toggle(section, key)
    }

    /// Rounded completion percentage of one section.
    #[must_use]
    pub fn section_progress(&self, section: &str) -> u8 {
        let (done, total) = self.checklists.section_completion(business_schema(), section);
        percentage(done, total)
    }

    /// Rounded completion percentage of the whole roadmap.
    #[must_use]
    pub fn overall_progress(&self) -> u8 {
        let (done, total) = self.checklists.completion(business_schema());
        percentage(done, total)
    }

    /// Borrow the underlying checklist state.
    #[must_use]
    pub const fn checklists(&self) -> &ChecklistState {
        &self.checklists
    }
}

impl Default for BusinessState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_false() {
        let state = BusinessState::new();
        assert_eq!(state.overall_progress(), 0);
        assert!(!state.is_checked("companyProfile", "ein"));
    }

    #[test]
    fn test_same_key_in_two_sections_is_independent() {
        let mut state = BusinessState::new();
        state.toggle("publishingEntity", "publishingAdmin");
        assert!(state.is_checked("publishingEntity", "publishingAdmin"));
        assert!(!state.is_checked("royaltiesAccounts", "publishingAdmin"));
    }

    #[test]
    fn test_section_progress() {
        let mut state = BusinessState::new();
        state.set("contractsAdvanced", "labelDeal", true);
        state.set("contractsAdvanced", "syncLicense", true);
        assert_eq!(state.section_progress("contractsAdvanced"), 67);
        assert_eq!(state.section_progress("contractsCore"), 0);
        assert_eq!(state.section_progress("unknown"), 0);
    }

    #[test]
    fn test_json_is_flat_section_map() {
        let mut state = BusinessState::new();
        state.set("companyProfile", "ein", true);
        let value = serde_json::to_value(&state).unwrap();
        assert_eq!(value["companyProfile"]["ein"], true);
        assert_eq!(value["royaltiesPerRelease"]["idsLogged"], false);
    }
}
