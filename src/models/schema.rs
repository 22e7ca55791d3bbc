//! Compiled-in checklist schemas.
//!
//! Two independent schemas exist: the per-release production checklist and the
//! label-level business roadmap. Both are plain static data; state is always
//! addressed by `(section id, item key)` because item keys only have to be
//! unique within their section.

/// An external reference shown next to a business checklist item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferenceLink {
    /// Short label (e.g., "IRS EIN")
    pub label: &'static str,
    /// Absolute URL
    pub href: &'static str,
}

/// A single checkbox in a checklist section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistItem {
    /// Key used in persisted state
    pub key: &'static str,
    /// Human-readable label
    pub label: &'static str,
    /// Optional reference links (business items only)
    pub links: &'static [ReferenceLink],
}

/// A named, ordered group of checklist items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistSection {
    /// Section identifier used in persisted state (e.g., "basics")
    pub id: &'static str,
    /// Display title
    pub title: &'static str,
    /// Items in display order
    pub items: &'static [ChecklistItem],
}

/// An ordered set of checklist sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChecklistSchema {
    /// Sections in display order
    pub sections: &'static [ChecklistSection],
}

impl ChecklistSchema {
    /// Looks up a section by identifier.
    #[must_use]
    pub fn section(&self, id: &str) -> Option<&'static ChecklistSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    /// Looks up an item by section identifier and item key.
    #[must_use]
    pub fn item(&self, section: &str, key: &str) -> Option<&'static ChecklistItem> {
        self.section(section)?.items.iter().find(|i| i.key == key)
    }

    /// Returns true if `(section, key)` names an item of this schema.
    #[must_use]
    pub fn contains(&self, section: &str, key: &str) -> bool {
        self.item(section, key).is_some()
    }

    /// Total number of items across all sections.
    #[must_use]
    pub fn item_count(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// Iterates `(section id, item)` pairs in display order.
    pub fn iter_items(&self) -> impl Iterator<Item = (&'static str, &'static ChecklistItem)> {
        self.sections
            .iter()
            .flat_map(|s| s.items.iter().map(move |item| (s.id, item)))
    }

    /// Section identifiers in display order.
    pub fn section_ids(&self) -> impl Iterator<Item = &'static str> {
        self.sections.iter().map(|s| s.id)
    }
}

const fn item(key: &'static str, label: &'static str) -> ChecklistItem {
    ChecklistItem {
        key,
        label,
        links: &[],
    }
}

macro_rules! link {
    ($label:expr, $href:expr $(,)?) => {
        ReferenceLink {
            label: $label,
            href: $href,
        }
    };
}

macro_rules! linked {
    ($key:expr, $label:expr, [$($link:expr),+ $(,)?] $(,)?) => {
        ChecklistItem {
            key: $key,
            label: $label,
            links: &[$($link),+],
        }
    };
}

// Release checklist

/// Release section: recording and artwork basics.
pub const SECTION_BASICS: &str = "basics";
/// Release section: rights and registrations.
pub const SECTION_RIGHTS: &str = "rights";
/// Release section: distributor setup.
pub const SECTION_DISTRIBUTION: &str = "distribution";
/// Release section: promotion.
pub const SECTION_MARKETING: &str = "marketing";

static RELEASE_SECTIONS: [ChecklistSection; 4] = [
    ChecklistSection {
        id: SECTION_BASICS,
        title: "Basics",
        items: &[
            item("recordingDone", "Recording finished"),
            item("mixApproved", "Mix approved"),
            item("masterApproved", "Master approved"),
            item("coverArtReady", "Cover art approved"),
        ],
    },
    ChecklistSection {
        id: SECTION_RIGHTS,
        title: "Rights",
        items: &[
            item("splitsConfirmed", "Splits confirmed & documented"),
            item("proRegistered", "Song registered with PRO"),
            item("contractsSigned", "Key contracts signed (producer / feat)"),
        ],
    },
    ChecklistSection {
        id: SECTION_DISTRIBUTION,
        title: "Distribution",
        items: &[
            item("distributorSelected", "Distributor selected"),
            item("metadataUploaded", "Metadata & audio uploaded"),
            item(
                "releaseDateConfirmed",
                "Release date confirmed in distributor",
            ),
            item("preSaveLink", "Pre-save / pre-order link created"),
        ],
    },
    ChecklistSection {
        id: SECTION_MARKETING,
        title: "Marketing",
        items: &[
            item("socialPlan", "Social & content plan ready"),
            item("pitchPlaylists", "Pitch sent to playlists / editors"),
            item("epkReady", "EPK ready (bio, photos, links)"),
        ],
    },
];

static RELEASE_SCHEMA: ChecklistSchema = ChecklistSchema {
    sections: &RELEASE_SECTIONS,
};

/// The per-release checklist: basics, rights, distribution, marketing.
#[must_use]
pub fn release_schema() -> &'static ChecklistSchema {
    &RELEASE_SCHEMA
}

// Business roadmap

/// Business section: company registration.
pub const SECTION_COMPANY_PROFILE: &str = "companyProfile";
/// Business section: publishing entity and PRO setup.
pub const SECTION_PUBLISHING_ENTITY: &str = "publishingEntity";
/// Business section: core contract templates.
pub const SECTION_CONTRACTS_CORE: &str = "contractsCore";
/// Business section: advanced contract templates.
pub const SECTION_CONTRACTS_ADVANCED: &str = "contractsAdvanced";
/// Business section: royalty collection accounts.
pub const SECTION_ROYALTIES_ACCOUNTS: &str = "royaltiesAccounts";
/// Business section: per-release royalty registrations.
pub const SECTION_ROYALTIES_PER_RELEASE: &str = "royaltiesPerRelease";

static BUSINESS_SECTIONS: [ChecklistSection; 6] = [
    ChecklistSection {
        id: SECTION_COMPANY_PROFILE,
        title: "Company profile",
        items: &[
            item(
                "nameOptions",
                "Choose 2–3 business / publishing name options.",
            ),
            linked!(
                "registerState",
                "Register your business (DBA, LLC or Corp) with your state.",
                [link!(
                    "SBA Guide",
                    "https://www.sba.gov/business-guide/launch-your-business/register-your-business",
                )],
            ),
            linked!(
                "ein",
                "Get an EIN from the IRS.",
                [link!(
                    "IRS EIN",
                    "https://www.irs.gov/businesses/small-businesses-self-employed/employer-id-numbers",
                )],
            ),
            item("bankAccount", "Open a dedicated business bank account."),
        ],
    },
    ChecklistSection {
        id: SECTION_PUBLISHING_ENTITY,
        title: "Publishing entity",
        items: &[
            linked!(
                "choosePRO",
                "Decide your PRO (BMI, ASCAP or SESAC) for this catalog.",
                [
                    link!("BMI", "https://www.bmi.com/join"),
                    link!("ASCAP", "https://www.ascap.com/join"),
                    link!("SESAC", "https://www.sesac.com/#/join"),
                ],
            ),
            linked!(
                "joinWriter",
                "Join your PRO as a songwriter (writer account).",
                [
                    link!("BMI Writer", "https://www.bmi.com/join"),
                    link!("ASCAP Writer", "https://www.ascap.com/join"),
                ],
            ),
            linked!(
                "joinPublisher",
                "Create a publishing company account with your PRO.",
                [
                    link!("BMI Publisher", "https://www.bmi.com/join"),
                    link!("ASCAP Publisher", "https://www.ascap.com/join"),
                ],
            ),
            item(
                "ipiNumbers",
                "Write down your writer & publisher IPI/CAE numbers.",
            ),
            linked!(
                "publishingAdmin",
                "Open a publishing admin account (Songtrust or similar).",
                [link!("Songtrust Signup", "https://app.songtrust.com/signup")],
            ),
            item(
                "connectAdmin",
                "Connect publishing admin with your PRO / catalog (where possible).",
            ),
        ],
    },
    ChecklistSection {
        id: SECTION_CONTRACTS_CORE,
        title: "Core contracts",
        items: &[
            item(
                "splitSheet",
                "Songwriter & producer split sheet template ready.",
            ),
            item(
                "producerAgreement",
                "Producer agreement template (fees / points).",
            ),
            item("featureAgreement", "Feature artist agreement template."),
            item(
                "workForHire",
                "Work-for-hire template for artwork / visuals.",
            ),
        ],
    },
    ChecklistSection {
        id: SECTION_CONTRACTS_ADVANCED,
        title: "Advanced contracts",
        items: &[
            item(
                "managementDeal",
                "Management agreement template (if needed).",
            ),
            item("labelDeal", "Label / joint venture agreement outline."),
            item(
                "syncLicense",
                "Basic sync license template for placements.",
            ),
        ],
    },
    ChecklistSection {
        id: SECTION_ROYALTIES_ACCOUNTS,
        title: "Royalty accounts",
        items: &[
            item("proAccount", "PRO accounts active (writer & publisher)."),
            linked!(
                "soundExchange",
                "SoundExchange account created.",
                [link!("SoundExchange", "https://www.soundexchange.com")],
            ),
            linked!(
                "publishingAdmin",
                "Publishing admin account (Songtrust, etc.) active.",
                [link!("Songtrust", "https://app.songtrust.com")],
            ),
            linked!(
                "spotifyArtists",
                "Spotify for Artists claimed.",
                [link!("Spotify for Artists", "https://artists.spotify.com")],
            ),
            linked!(
                "appleArtists",
                "Apple Music for Artists claimed.",
                [link!("Apple for Artists", "https://artists.apple.com")],
            ),
        ],
    },
    ChecklistSection {
        id: SECTION_ROYALTIES_PER_RELEASE,
        title: "Per-release royalties",
        items: &[
            item(
                "proSongRegistered",
                "Song registered with PRO (composition).",
            ),
            item(
                "soundRecordingReported",
                "Sound recording reported to SoundExchange (where applicable).",
            ),
            item(
                "songtrustRegistered",
                "Song added to publishing admin system (Songtrust or similar).",
            ),
            item("idsLogged", "ISRC / UPC / ISWC written down in your system."),
        ],
    },
];

static BUSINESS_SCHEMA: ChecklistSchema = ChecklistSchema {
    sections: &BUSINESS_SECTIONS,
};

/// The label-level business roadmap (six sections, items may carry links).
#[must_use]
pub fn business_schema() -> &'static ChecklistSchema {
    &BUSINESS_SCHEMA
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_release_schema_shape() {
        let schema = release_schema();
        let ids: Vec<_> = schema.section_ids().collect();
        assert_eq!(ids, vec!["basics", "rights", "distribution", "marketing"]);
        assert_eq!(schema.item_count(), 14);
        assert!(schema.iter_items().all(|(_, item)| item.links.is_empty()));
    }

    #[test]
    fn test_business_schema_shape() {
        let schema = business_schema();
        assert_eq!(schema.sections.len(), 6);
        assert_eq!(schema.item_count(), 26);
        assert_eq!(schema.section("publishingEntity").unwrap().items.len(), 6);
    }

    #[test]
    fn test_keys_unique_within_section() {
        for schema in [release_schema(), business_schema()] {
            for section in schema.sections {
                let keys: HashSet<_> = section.items.iter().map(|i| i.key).collect();
                assert_eq!(keys.len(), section.items.len(), "section {}", section.id);
            }
        }
    }

    #[test]
    fn test_repeated_key_across_sections() {
        // "publishingAdmin" lives in two business sections with different labels
        let schema = business_schema();
        let a = schema.item("publishingEntity", "publishingAdmin").unwrap();
        let b = schema.item("royaltiesAccounts", "publishingAdmin").unwrap();
        assert_ne!(a.label, b.label);
    }

    #[test]
    fn test_links_are_absolute() {
        for (_, item) in business_schema().iter_items() {
            for link in item.links {
                assert!(link.href.starts_with("https://"), "{}", link.href);
            }
        }
    }

    #[test]
    fn test_lookup_unknown() {
        assert!(release_schema().section("nope").is_none());
        assert!(!release_schema().contains("basics", "nope"));
        assert!(release_schema().contains("basics", "mixApproved"));
    }
}
