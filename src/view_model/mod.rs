//! Renderer-independent projections of the application data.
//!
//! Everything here is a pure function of a snapshot of releases, business
//! state, and navigation state. The TUI draws these models and the CLI prints
//! them, so none of the derivation logic depends on a terminal.

pub mod business;
pub mod details;

use serde::{Deserialize, Serialize};

use crate::models::{calculate_progress, Release, ReleaseStatus};

pub use business::{business_sections, BusinessRow, BusinessSectionView, LinkView};
pub use details::{details_view, ChecklistRow, ChecklistTab, DetailsSection, DetailsView};

/// The six top-level views. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    /// Summary cards and counters
    #[default]
    Dashboard,
    /// Table of releases plus the details panel
    Releases,
    /// Business and publishing setup
    Company,
    /// Contract templates
    Contracts,
    /// Royalty administration
    Royalties,
    /// Consulting offer (static)
    Consulting,
}

impl ViewId {
    /// All views in navigation order.
    pub const ALL: [Self; 6] = [
        Self::Dashboard,
        Self::Releases,
        Self::Company,
        Self::Contracts,
        Self::Royalties,
        Self::Consulting,
    ];

    /// Short label used in the navigation sidebar.
    #[must_use]
    pub const fn nav_label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Releases => "Releases",
            Self::Company => "Business",
            Self::Contracts => "Contracts",
            Self::Royalties => "Royalties",
            Self::Consulting => "Consulting",
        }
    }

    /// Position in navigation order.
    #[must_use]
    pub fn index(self) -> usize {
        Self::ALL.iter().position(|v| *v == self).unwrap_or(0)
    }

    /// Next view in navigation order (wraps).
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous view in navigation order (wraps).
    #[must_use]
    pub fn previous(self) -> Self {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }

    /// Parses the identifier used in config and on the command line.
    #[must_use]
    pub fn from_id(id: &str) -> Option<Self> {
        match id.trim().to_lowercase().as_str() {
            "dashboard" => Some(Self::Dashboard),
            "releases" => Some(Self::Releases),
            "company" | "business" => Some(Self::Company),
            "contracts" => Some(Self::Contracts),
            "royalties" => Some(Self::Royalties),
            "consulting" => Some(Self::Consulting),
            _ => None,
        }
    }

    /// Business roadmap sections shown in this view.
    #[must_use]
    pub const fn business_section_ids(self) -> &'static [&'static str] {
        use crate::models::schema::{
            SECTION_COMPANY_PROFILE, SECTION_CONTRACTS_ADVANCED, SECTION_CONTRACTS_CORE,
            SECTION_PUBLISHING_ENTITY, SECTION_ROYALTIES_ACCOUNTS, SECTION_ROYALTIES_PER_RELEASE,
        };
        match self {
            Self::Company => &[SECTION_COMPANY_PROFILE, SECTION_PUBLISHING_ENTITY],
            Self::Contracts => &[SECTION_CONTRACTS_CORE, SECTION_CONTRACTS_ADVANCED],
            Self::Royalties => &[SECTION_ROYALTIES_ACCOUNTS, SECTION_ROYALTIES_PER_RELEASE],
            Self::Dashboard | Self::Releases | Self::Consulting => &[],
        }
    }

    /// Whether this view shows business roadmap checklists.
    #[must_use]
    pub const fn is_business(self) -> bool {
        !self.business_section_ids().is_empty()
    }
}

/// Header text of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewMeta {
    /// Header title
    pub title: &'static str,
    /// Header subtitle
    pub subtitle: &'static str,
}

/// Static title/subtitle lookup for each view.
#[must_use]
pub const fn view_meta(view: ViewId) -> ViewMeta {
    let (title, subtitle) = match view {
        ViewId::Dashboard => (
            "Dashboard",
            "Overview of all your releases and business progress.",
        ),
        ViewId::Releases => (
            "Releases",
            "Manage every single, EP and album with pro-level structure.",
        ),
        ViewId::Company => (
            "Business & Publishing",
            "From zero to professional business and publishing setup.",
        ),
        ViewId::Contracts => (
            "Contracts",
            "Make sure every collaborator and investor is covered.",
        ),
        ViewId::Royalties => (
            "Royalties & Admin",
            "Set up your admin side so no royalty gets lost.",
        ),
        ViewId::Consulting => (
            "Consulting & Management",
            "Hire Jae-P to guide your releases and label structure.",
        ),
    };
    ViewMeta { title, subtitle }
}

/// Body text of the consulting view.
pub const CONSULTING_POINTS: [&str; 4] = [
    "Release strategy sessions: plan dates, rollout and content for each drop.",
    "Label & publishing setup: company, PRO, admin and contract structure.",
    "Catalog audits: find unregistered songs and uncollected royalties.",
    "Ongoing management: monthly check-ins on every open checklist.",
];

/// Release counters shown on the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Stats {
    /// Number of releases
    pub total: usize,
    /// Releases whose status is not Released
    pub in_progress: usize,
    /// Releases whose status is Released
    pub completed: usize,
}

/// Computes the stat counters.
#[must_use]
pub fn stats(releases: &[Release]) -> Stats {
    let completed = releases.iter().filter(|r| r.is_released()).count();
    Stats {
        total: releases.len(),
        in_progress: releases.len() - completed,
        completed,
    }
}

/// Visual treatment of a status tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum StatusStyle {
    /// In Planning
    Planning,
    /// In Progress
    Progress,
    /// Ready to Release
    Ready,
    /// Released
    Released,
}

impl StatusStyle {
    /// Fixed status → style mapping.
    #[must_use]
    pub const fn for_status(status: ReleaseStatus) -> Self {
        match status {
            ReleaseStatus::InPlanning => Self::Planning,
            ReleaseStatus::InProgress => Self::Progress,
            ReleaseStatus::ReadyToRelease => Self::Ready,
            ReleaseStatus::Released => Self::Released,
        }
    }
}

/// One dashboard card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseCard {
    /// Release id
    pub id: String,
    /// Display title
    pub title: String,
    /// Display artist
    pub artist: String,
    /// Status label
    pub status: ReleaseStatus,
    /// Tag style for the status
    pub status_style: StatusStyle,
    /// Type label
    pub type_label: String,
    /// Date (`YYYY-MM-DD`) or empty
    pub date: String,
    /// Progress percentage
    pub progress: u8,
}

impl ReleaseCard {
    /// Builds the card for a release.
    #[must_use]
    pub fn from_release(release: &Release) -> Self {
        let type_label = match release.release_type.label() {
            "" => "Release".to_string(),
            label => label.to_string(),
        };
        Self {
            id: release.id.clone(),
            title: release.display_title().to_string(),
            artist: release.display_artist().to_string(),
            status: release.status,
            status_style: StatusStyle::for_status(release.status),
            type_label,
            date: release.date_label(),
            progress: calculate_progress(release),
        }
    }

    /// Secondary line: "Single • 2025-03-14", or just the type without a date.
    #[must_use]
    pub fn meta_line(&self) -> String {
        if self.date.is_empty() {
            self.type_label.clone()
        } else {
            format!("{} • {}", self.type_label, self.date)
        }
    }
}

/// What the dashboard shows in its release area.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DashboardModel {
    /// No releases yet: show the call to action
    Empty,
    /// One card per release
    Cards(Vec<ReleaseCard>),
}

/// Builds the dashboard release area.
#[must_use]
pub fn dashboard(releases: &[Release]) -> DashboardModel {
    if releases.is_empty() {
        DashboardModel::Empty
    } else {
        DashboardModel::Cards(releases.iter().map(ReleaseCard::from_release).collect())
    }
}

/// One row of the releases table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// Release id
    pub id: String,
    /// Display title
    pub title: String,
    /// Artist as stored (may be empty)
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
}

impl TableRow {
    /// Builds the row for a release.
    #[must_use]
    pub fn from_release(release: &Release) -> Self {
        Self {
            id: release.id.clone(),
            title: release.display_title().to_string(),
            artist: release.artist.clone(),
            type_label: release.release_type.label().to_string(),
            status: release.status,
            date: release.date_label(),
            progress: calculate_progress(release),
        }
    }

    /// Progress as "NN%".
    #[must_use]
    pub fn progress_label(&self) -> String {
        format!("{}%", self.progress)
    }
}

/// Builds the releases table, one row per release in list order.
#[must_use]
pub fn table_rows(releases: &[Release]) -> Vec<TableRow> {
    releases.iter().map(TableRow::from_release).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{parse_date, ReleaseType};

    fn release(id: &str, status: ReleaseStatus) -> Release {
        Release {
            status,
            ..Release::new(id, id.to_uppercase(), "Artist")
        }
    }

    #[test]
    fn test_stats() {
        let releases = vec![
            release("a", ReleaseStatus::InPlanning),
            release("b", ReleaseStatus::Released),
            release("c", ReleaseStatus::ReadyToRelease),
        ];
        assert_eq!(
            stats(&releases),
            Stats {
                total: 3,
                in_progress: 2,
                completed: 1
            }
        );
        assert_eq!(stats(&[]), Stats::default());
    }

    #[test]
    fn test_empty_dashboard() {
        assert_eq!(dashboard(&[]), DashboardModel::Empty);
    }

    #[test]
    fn test_card_fields() {
        let mut r = release("a", ReleaseStatus::ReadyToRelease);
        r.release_type = ReleaseType::Album;
        r.date = parse_date("2025-06-01");
        r.checklists.toggle("basics", "recordingDone");

        let card = ReleaseCard::from_release(&r);
        assert_eq!(card.status_style, StatusStyle::Ready);
        assert_eq!(card.meta_line(), "Album • 2025-06-01");
        assert_eq!(card.progress, 7);
    }

    #[test]
    fn test_card_fallbacks() {
        let r = Release::new("x", "", "");
        let card = ReleaseCard::from_release(&r);
        assert_eq!(card.title, "Untitled release");
        assert_eq!(card.artist, "Unknown artist");
        assert_eq!(card.meta_line(), "Single");

        let row = TableRow::from_release(&r);
        assert_eq!(row.artist, "");
        assert_eq!(row.progress_label(), "0%");
    }

    #[test]
    fn test_card_and_row_agree_on_progress() {
        let mut r = release("a", ReleaseStatus::InProgress);
        for key in ["distributorSelected", "metadataUploaded"] {
            r.checklists.toggle("distribution", key);
        }
        let card = ReleaseCard::from_release(&r);
        let row = TableRow::from_release(&r);
        assert_eq!(card.progress, row.progress);
        assert_eq!(row.progress_label(), "14%");
    }

    #[test]
    fn test_view_cycle() {
        assert_eq!(ViewId::Dashboard.next(), ViewId::Releases);
        assert_eq!(ViewId::Consulting.next(), ViewId::Dashboard);
        assert_eq!(ViewId::Dashboard.previous(), ViewId::Consulting);
        assert_eq!(ViewId::Company.index(), 2);
    }

    #[test]
    fn test_business_sections_per_view() {
        let all: Vec<_> = ViewId::ALL
            .iter()
            .flat_map(|v| v.business_section_ids().iter().copied())
            .collect();
        let schema_ids: Vec<_> = crate::models::business_schema().section_ids().collect();
        assert_eq!(all, schema_ids);
        assert!(!ViewId::Consulting.is_business());
    }

    #[test]
    fn test_view_meta() {
        assert_eq!(view_meta(ViewId::Releases).title, "Releases");
        assert_eq!(view_meta(ViewId::Royalties).title, "Royalties & Admin");
        assert_eq!(ViewId::from_id("business"), Some(ViewId::Company));
    }
}
