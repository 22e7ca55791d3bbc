//! The release details panel.

use serde::Serialize;

use super::ViewId;
use crate::models::schema::{
    release_schema, SECTION_BASICS, SECTION_DISTRIBUTION, SECTION_MARKETING, SECTION_RIGHTS,
};
use crate::models::{calculate_progress, Release, ReleaseStatus};

/// Checklist tab of the details panel. Each tab shows one release section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ChecklistTab {
    /// Recording and artwork
    #[default]
    Basics,
    /// Rights and registrations
    Rights,
    /// Distributor setup
    Distribution,
    /// Promotion
    Marketing,
}

impl ChecklistTab {
    /// All tabs in display order.
    pub const ALL: [Self; 4] = [
        Self::Basics,
        Self::Rights,
        Self::Distribution,
        Self::Marketing,
    ];

    /// Release checklist section shown by this tab.
    #[must_use]
    pub const fn section_id(self) -> &'static str {
        match self {
            Self::Basics => SECTION_BASICS,
            Self::Rights => SECTION_RIGHTS,
            Self::Distribution => SECTION_DISTRIBUTION,
            Self::Marketing => SECTION_MARKETING,
        }
    }

    /// Tab caption.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Basics => "Basics",
            Self::Rights => "Rights",
            Self::Distribution => "Distribution",
            Self::Marketing => "Marketing",
        }
    }

    /// Tab for a section id.
    #[must_use]
    pub fn from_section(section: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.section_id() == section)
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Next tab (wraps).
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous tab (wraps).
    #[must_use]
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// One checkbox row of a release section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChecklistRow {
    /// Section id
    pub section: &'static str,
    /// Item key
    pub key: &'static str,
    /// Item label
    pub label: &'static str,
    /// Checked flag
    pub checked: bool,
}

/// One release section with its rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailsSection {
    /// Section id
    pub id: &'static str,
    /// Section title
    pub title: &'static str,
    /// Rows in schema order
    pub rows: Vec<ChecklistRow>,
}

/// Editable details of the selected release.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailsView {
    /// Release id
    pub id: String,
    /// Panel heading (title with fallback)
    pub heading: String,
    /// "<artist> • <type>"
    pub subtitle: String,
    /// Title as stored (editable)
    pub title: String,
    /// Artist as stored (editable)
    pub artist: String,
    /// Type label
    #[serde(rename = "type")]
    pub type_label: String,
    /// Status
    pub status: ReleaseStatus,
    /// Date (`YYYY-MM-DD`) or empty
    pub date: String,
    /// Progress percentage
    pub progress: u8,
    /// Tab being shown
    #[serde(skip)]
    pub tab: ChecklistTab,
    /// Every release section, in schema order
    pub sections: Vec<DetailsSection>,
}

impl DetailsView {
    /// Builds the panel for one release and tab.
    #[must_use]
    pub fn from_release(release: &Release, tab: ChecklistTab) -> Self {
        let sections = release_schema()
            .sections
            .iter()
            .map(|section| DetailsSection {
                id: section.id,
                title: section.title,
                rows: section
                    .items
                    .iter()
                    .map(|item| ChecklistRow {
                        section: section.id,
                        key: item.key,
                        label: item.label,
                        checked: release.checklists.is_checked(section.id, item.key),
                    })
                    .collect(),
            })
            .collect();

        Self {
            id: release.id.clone(),
            heading: release.display_title().to_string(),
            subtitle: format!("{} • {}", release.artist, release.release_type.label()),
            title: release.title.clone(),
            artist: release.artist.clone(),
            type_label: release.release_type.label().to_string(),
            status: release.status,
            date: release.date_label(),
            progress: calculate_progress(release),
            tab,
            sections,
        }
    }

    /// Rows of the active tab.
    #[must_use]
    pub fn rows(&self) -> &[ChecklistRow] {
        self.sections
            .iter()
            .find(|s| s.id == self.tab.section_id())
            .map(|s| s.rows.as_slice())
            .unwrap_or(&[])
    }

    /// "Progress: NN%"
    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("Progress: {}%", self.progress)
    }
}

/// Builds the details panel.
///
/// The panel exists only while the Releases view is active and the selected
/// id resolves to a release in the list.
#[must_use]
pub fn details_view(
    releases: &[Release],
    selected_id: Option<&str>,
    active_view: ViewId,
    tab: ChecklistTab,
) -> Option<DetailsView> {
    if active_view != ViewId::Releases {
        return None;
    }
    let id = selected_id?;
    releases
        .iter()
        .find(|r| r.id == id)
        .map(|r| DetailsView::from_release(r, tab))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn releases() -> Vec<Release> {
        let mut a = Release::new("a", "Alpha", "");
        a.checklists.set("rights", "proRegistered", true);
        vec![a, Release::new("b", "Beta", "Someone")]
    }

    #[test]
    fn test_hidden_outside_releases_view() {
        let list = releases();
        for view in ViewId::ALL {
            let details = details_view(&list, Some("a"), view, ChecklistTab::Basics);
            assert_eq!(details.is_some(), view == ViewId::Releases, "{view:?}");
        }
    }

    #[test]
    fn test_hidden_without_selection() {
        let list = releases();
        assert!(details_view(&list, None, ViewId::Releases, ChecklistTab::Basics).is_none());
        assert!(
            details_view(&list, Some("gone"), ViewId::Releases, ChecklistTab::Basics).is_none()
        );
    }

    #[test]
    fn test_rows_follow_tab() {
        let list = releases();
        let details =
            details_view(&list, Some("a"), ViewId::Releases, ChecklistTab::Rights).unwrap();
        assert_eq!(details.rows().len(), 3);
        assert!(details.rows().iter().all(|row| row.section == "rights"));
        assert_eq!(details.sections.len(), 4);
        let pro = details.rows().iter().find(|r| r.key == "proRegistered").unwrap();
        assert!(pro.checked);
        assert_eq!(details.progress_label(), "Progress: 7%");
    }

    #[test]
    fn test_heading_and_subtitle() {
        let list = releases();
        let details =
            details_view(&list, Some("b"), ViewId::Releases, ChecklistTab::Basics).unwrap();
        assert_eq!(details.heading, "Beta");
        assert_eq!(details.subtitle, "Someone • Single");

        let mut untitled = Release::new("c", "", "");
        untitled.release_type = crate::models::ReleaseType::Ep;
        let details = DetailsView::from_release(&untitled, ChecklistTab::Basics);
        assert_eq!(details.heading, "Untitled release");
        assert_eq!(details.subtitle, " • EP");
    }

    #[test]
    fn test_tab_cycle() {
        assert_eq!(ChecklistTab::Basics.next(), ChecklistTab::Rights);
        assert_eq!(ChecklistTab::Marketing.next(), ChecklistTab::Basics);
        assert_eq!(ChecklistTab::Basics.previous(), ChecklistTab::Marketing);
        assert_eq!(
            ChecklistTab::from_section("distribution"),
            Some(ChecklistTab::Distribution)
        );
    }
}
