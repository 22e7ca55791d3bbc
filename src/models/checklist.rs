//! Checklist state: section id → item key → checked flag.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::schema::ChecklistSchema;

/// Nested checkbox state for one schema instance.
///
/// Stored keys that the schema does not know about are kept as-is so a
/// round-trip never drops data, but nothing reads them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChecklistState {
    sections: BTreeMap<String, BTreeMap<String, bool>>,
}

impl ChecklistState {
    /// Creates an empty state with no sections at all.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the all-false state matching `schema`.
    #[must_use]
    pub fn create_empty(schema: &ChecklistSchema) -> Self {
        let mut state = Self::new();
        state.normalize(schema);
        state
    }

    /// Inserts `false` for every schema item missing from this state.
    ///
    /// Existing values, including unknown keys, are left untouched.
    pub fn normalize(&mut self, schema: &ChecklistSchema) {
        for (section, item) in schema.iter_items() {
            self.sections
                .entry(section.to_string())
                .or_default()
                .entry(item.key.to_string())
                .or_insert(false);
        }
    }

    /// Returns whether an item is checked. Missing entries read as unchecked.
    #[must_use]
    pub fn is_checked(&self, section: &str, key: &str) -> bool {
        self.sections
            .get(section)
            .and_then(|items| items.get(key))
            .copied()
            .unwrap_or(false)
    }

    /// Sets an item's checked flag.
    pub fn set(&mut self, section: &str, key: &str, checked: bool) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), checked);
    }

    /// Flips an item and returns its new value.
    pub fn toggle(&mut self, section: &str, key: &str) -> bool {
        let checked = !self.is_checked(section, key);
        self.set(section, key, checked);
        checked
    }

    /// Counts `(done, total)` over the schema's items.
    ///
    /// Only schema items are counted, so extra stored keys never skew the result.
    #[must_use]
    pub fn completion(&self, schema: &ChecklistSchema) -> (usize, usize) {
        schema
            .iter_items()
            .fold((0, 0), |(done, total), (section, item)| {
                let done = done + usize::from(self.is_checked(section, item.key));
                (done, total + 1)
            })
    }

    /// Counts `(done, total)` for a single schema section.
    #[must_use]
    pub fn section_completion(&self, schema: &ChecklistSchema, section: &str) -> (usize, usize) {
        schema.section(section).map_or((0, 0), |s| {
            let done = s
                .items
                .iter()
                .filter(|item| self.is_checked(s.id, item.key))
                .count();
            (done, s.items.len())
        })
    }

    /// Number of stored sections (known or not).
    #[must_use]
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }
}

/// Builds the all-false nested mapping for `schema`.
#[must_use]
pub fn create_empty_checklists(schema: &ChecklistSchema) -> ChecklistState {
    ChecklistState::create_empty(schema)
}

/// Rounded percentage of `done` over `total`, `0` when `total` is zero.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn percentage(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let pct = (done as f64 / total as f64 * 100.0).round();
    pct.clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::schema::{business_schema, release_schema, ChecklistSchema};

    #[test]
    fn test_create_empty_matches_schema() {
        let state = create_empty_checklists(release_schema());
        assert_eq!(state.section_count(), 4);
        for (section, item) in release_schema().iter_items() {
            assert!(!state.is_checked(section, item.key));
        }
        assert_eq!(state.completion(release_schema()), (0, 14));
    }

    #[test]
    fn test_business_default_all_false() {
        let state = create_empty_checklists(business_schema());
        assert_eq!(state.section_count(), 6);
        assert_eq!(state.completion(business_schema()), (0, 26));
    }

    #[test]
    fn test_toggle_returns_new_value() {
        let mut state = create_empty_checklists(release_schema());
        assert!(state.toggle("basics", "mixApproved"));
        assert!(state.is_checked("basics", "mixApproved"));
        assert!(!state.toggle("basics", "mixApproved"));
        assert!(!state.is_checked("basics", "mixApproved"));
    }

    #[test]
    fn test_unknown_keys_ignored_by_completion() {
        let mut state = create_empty_checklists(release_schema());
        state.set("basics", "legacyItem", true);
        state.set("bonus", "whatever", true);
        assert_eq!(state.completion(release_schema()), (0, 14));
    }

    #[test]
    fn test_normalize_keeps_existing_values() {
        let mut state = ChecklistState::new();
        state.set("rights", "proRegistered", true);
        state.set("rights", "oldKey", true);
        state.normalize(release_schema());

        assert!(state.is_checked("rights", "proRegistered"));
        assert!(state.is_checked("rights", "oldKey"));
        assert_eq!(state.completion(release_schema()), (1, 14));
    }

    #[test]
    fn test_section_completion() {
        let mut state = create_empty_checklists(business_schema());
        state.set("contractsAdvanced", "labelDeal", true);
        assert_eq!(
            state.section_completion(business_schema(), "contractsAdvanced"),
            (1, 3)
        );
        assert_eq!(state.section_completion(business_schema(), "missing"), (0, 0));
    }

    #[test]
    fn test_empty_schema_completion() {
        let schema = ChecklistSchema { sections: &[] };
        let state = create_empty_checklists(&schema);
        assert_eq!(state.completion(&schema), (0, 0));
    }

    #[test]
    fn test_percentage_rounding() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(0, 14), 0);
        assert_eq!(percentage(1, 14), 7);
        assert_eq!(percentage(7, 14), 50);
        assert_eq!(percentage(13, 14), 93);
        assert_eq!(percentage(14, 14), 100);
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
    }

    #[test]
    fn test_serializes_as_plain_object() {
        let mut state = ChecklistState::new();
        state.set("basics", "mixApproved", true);
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, r#"{"basics":{"mixApproved":true}}"#);
    }
}
