//! Release records and their derived progress.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use super::checklist::{percentage, ChecklistState};
use super::schema::release_schema;
use crate::constants::{UNKNOWN_ARTIST, UNTITLED_RELEASE};

/// Format of a release.
///
/// Stored as its display label. Labels outside the known set survive a
/// load/save cycle through [`ReleaseType::Other`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ReleaseType {
    /// One track
    #[default]
    Single,
    /// Extended play
    Ep,
    /// Full-length album
    Album,
    /// Any other free-form label
    Other(String),
}

impl ReleaseType {
    /// The selectable types, in cycling order.
    pub const CHOICES: [Self; 3] = [Self::Single, Self::Ep, Self::Album];

    /// Display label, which is also the stored value.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Single => "Single",
            Self::Ep => "EP",
            Self::Album => "Album",
            Self::Other(label) => label,
        }
    }

    /// Parses a label. Matching is case-insensitive for the known types.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "single" => Self::Single,
            "ep" => Self::Ep,
            "album" => Self::Album,
            _ => Self::Other(label.to_string()),
        }
    }

    /// Next selectable type (wraps). Free-form types jump to `Single`.
    #[must_use]
    pub fn next(&self) -> Self {
        match self {
            Self::Single => Self::Ep,
            Self::Ep => Self::Album,
            Self::Album | Self::Other(_) => Self::Single,
        }
    }

    /// Previous selectable type (wraps). Free-form types jump to `Album`.
    #[must_use]
    pub fn previous(&self) -> Self {
        match self {
            Self::Single | Self::Other(_) => Self::Album,
            Self::Ep => Self::Single,
            Self::Album => Self::Ep,
        }
    }
}

impl fmt::Display for ReleaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ReleaseType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ReleaseType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        if label.is_empty() {
            return Ok(Self::default());
        }
        Ok(Self::from_label(&label))
    }
}

/// Workflow status of a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReleaseStatus {
    /// Idea stage
    InPlanning,
    /// Actively being worked on
    #[default]
    InProgress,
    /// Everything done, waiting for the date
    ReadyToRelease,
    /// Out in the world
    Released,
}

impl ReleaseStatus {
    /// All statuses, in workflow order.
    pub const ALL: [Self; 4] = [
        Self::InPlanning,
        Self::InProgress,
        Self::ReadyToRelease,
        Self::Released,
    ];

    /// Display label, which is also the stored value.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::InPlanning => "In Planning",
            Self::InProgress => "In Progress",
            Self::ReadyToRelease => "Ready to Release",
            Self::Released => "Released",
        }
    }

    /// Parses a stored label, case-insensitively.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        let wanted = label.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.label().eq_ignore_ascii_case(wanted))
    }

    /// Next status in workflow order (wraps).
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::InPlanning => Self::InProgress,
            Self::InProgress => Self::ReadyToRelease,
            Self::ReadyToRelease => Self::Released,
            Self::Released => Self::InPlanning,
        }
    }

    /// Previous status in workflow order (wraps).
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::InPlanning => Self::Released,
            Self::InProgress => Self::InPlanning,
            Self::ReadyToRelease => Self::InProgress,
            Self::Released => Self::ReadyToRelease,
        }
    }
}

impl fmt::Display for ReleaseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ReleaseStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for ReleaseStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
        Ok(Self::from_label(&label).unwrap_or_default())
    }
}

/// Serde adapter storing an optional date as `YYYY-MM-DD`, or `""` when unset.
mod date_format {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(date) => s.serialize_str(&date.format(FORMAT).to_string()),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw = Option::<String>::deserialize(d)?.unwrap_or_default();
        Ok(super::parse_date(&raw))
    }
}

/// Parses a `YYYY-MM-DD` date. Blank or malformed input yields `None`.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// A single, EP or album tracked through its release checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    /// Unique identifier (e.g., "rel_1718000000000")
    pub id: String,
    /// Release title (may be empty after an edit)
    #[serde(default)]
    pub title: String,
    /// Credited artist(s)
    #[serde(default)]
    pub artist: String,
    /// Single / EP / Album
    #[serde(rename = "type", default)]
    pub release_type: ReleaseType,
    /// Workflow status
    #[serde(default)]
    pub status: ReleaseStatus,
    /// Planned release date
    #[serde(default, with = "date_format")]
    pub date: Option<NaiveDate>,
    /// Per-section checklist state
    #[serde(default)]
    pub checklists: ChecklistState,
}

impl Release {
    /// Creates a release with all release checklist items unchecked.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            artist: artist.into(),
            release_type: ReleaseType::default(),
            status: ReleaseStatus::default(),
            date: None,
            checklists: ChecklistState::create_empty(release_schema()),
        }
    }

    /// Builds a release from submitted form data.
    ///
    /// Title and artist are trimmed; an empty title becomes "Untitled release".
    #[must_use]
    pub fn from_form(form: &NewRelease, id: impl Into<String>) -> Self {
        let title = form.title.trim();
        let title = if title.is_empty() {
            UNTITLED_RELEASE
        } else {
            title
        };
        Self {
            release_type: form.release_type.clone(),
            status: form.status,
            date: form.date,
            ..Self::new(id, title, form.artist.trim())
        }
    }

    /// Title for display, falling back to "Untitled release".
    #[must_use]
    pub fn display_title(&self) -> &str {
        if self.title.is_empty() {
            UNTITLED_RELEASE
        } else {
            &self.title
        }
    }

    /// Artist for display, falling back to "Unknown artist".
    #[must_use]
    pub fn display_artist(&self) -> &str {
        if self.artist.is_empty() {
            UNKNOWN_ARTIST
        } else {
            &self.artist
        }
    }

    /// Date as `YYYY-MM-DD`, or an empty string when unset.
    #[must_use]
    pub fn date_label(&self) -> String {
        self.date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    }

    /// Fills missing checklist entries after loading from storage.
    pub fn normalize(&mut self) {
        self.checklists.normalize(release_schema());
    }

    /// Sets the title as typed (no trimming on edit).
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Sets the artist as typed.
    pub fn set_artist(&mut self, artist: impl Into<String>) {
        self.artist = artist.into();
    }

    /// Sets the release type.
    pub fn set_type(&mut self, release_type: ReleaseType) {
        self.release_type = release_type;
    }

    /// Sets the status.
    pub fn set_status(&mut self, status: ReleaseStatus) {
        self.status = status;
    }

    /// Sets or clears the release date.
    pub fn set_date(&mut self, date: Option<NaiveDate>) {
        self.date = date;
    }

    /// Whether the release is out.
    #[must_use]
    pub fn is_released(&self) -> bool {
        self.status == ReleaseStatus::Released
    }
}

/// Percentage of checked release checklist items, 0..=100.
///
/// Iterates the release schema, not the stored keys, so unknown or missing
/// entries never change the denominator.
#[must_use]
pub fn calculate_progress(release: &Release) -> u8 {
    let (done, total) = release.checklists.completion(release_schema());
    percentage(done, total)
}

/// Data collected by the new-release form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRelease {
    /// Title as typed
    pub title: String,
    /// Artist as typed
    pub artist: String,
    /// Selected type
    pub release_type: ReleaseType,
    /// Selected status
    pub status: ReleaseStatus,
    /// Selected date
    pub date: Option<NaiveDate>,
}

impl Default for NewRelease {
    /// Form defaults: blank text, Single, In Progress, no date.
    fn default() -> Self {
        Self {
            title: String::new(),
            artist: String::new(),
            release_type: ReleaseType::Single,
            status: ReleaseStatus::InProgress,
            date: None,
        }
    }
}

/// The release seeded on first run so the dashboard isn't empty.
#[must_use]
pub fn sample_release() -> Release {
    Release {
        release_type: ReleaseType::Single,
        status: ReleaseStatus::InProgress,
        ..Release::new("sample_amame", "ÁMAME", "Jae-P ft. Jexy")
    }
}

/// Generates a time-derived id (`rel_<unix millis>`).
///
/// Two releases created within the same millisecond would collide, so the
/// counter is bumped until the id is not in `existing`.
#[must_use]
pub fn generate_release_id<'a>(
    now_millis: i64,
    existing: impl IntoIterator<Item = &'a str> + Clone,
) -> String {
    let mut millis = now_millis;
    loop {
        let candidate = format!("rel_{millis}");
        if !existing.clone().into_iter().any(|id| id == candidate) {
            return candidate;
        }
        millis += 1;
    }
}
