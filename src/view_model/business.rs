//! Business roadmap sections as shown by the Company, Contracts, and
//! Royalties views.

use serde::Serialize;

use super::ViewId;
use crate::models::{business_schema, BusinessState};

/// A reference link rendered next to a roadmap item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LinkView {
    /// Link caption
    pub label: &'static str,
    /// Target URL
    pub href: &'static str,
}

/// One roadmap checkbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessRow {
    /// Section id
    pub section: &'static str,
    /// Item key
    pub key: &'static str,
    /// Item label
    pub label: &'static str,
    /// Checked flag
    pub checked: bool,
    /// Reference links, possibly empty
    pub links: Vec<LinkView>,
}

/// One roadmap section with its rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusinessSectionView {
    /// Section id
    pub id: &'static str,
    /// Section title
    pub title: &'static str,
    /// Completion percentage of this section
    pub progress: u8,
    /// Rows in schema order
    pub rows: Vec<BusinessRow>,
}

impl BusinessSectionView {
    /// Builds a section, or `None` for an unknown section id.
    #[must_use]
    pub fn build(state: &BusinessState, section_id: &str) -> Option<Self> {
        let section = business_schema().section(section_id)?;
        let rows = section
            .items
            .iter()
            .map(|item| BusinessRow {
                section: section.id,
                key: item.key,
                label: item.label,
                checked: state.is_checked(section.id, item.key),
                links: item
                    .links
                    .iter()
                    .map(|l| LinkView {
                        label: l.label,
                        href: l.href,
                    })
                    .collect(),
            })
            .collect();
        Some(Self {
            id: section.id,
            title: section.title,
            progress: state.section_progress(section.id),
            rows,
        })
    }
}

/// Sections shown by a view. Empty for views without roadmap content.
#[must_use]
pub fn business_sections(state: &BusinessState, view: ViewId) -> Vec<BusinessSectionView> {
    view.business_section_ids()
        .iter()
        .filter_map(|id| BusinessSectionView::build(state, id))
        .collect()
}
