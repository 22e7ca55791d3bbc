//! Data models for releases, checklists, and the business roadmap.
//!
//! This module contains all the core data structures used throughout the application.
//! Models are designed to be independent of UI and storage.

pub mod business;
pub mod checklist;
pub mod release;
pub mod schema;

// Re-export all model types
pub use business::BusinessState;
pub use checklist::{create_empty_checklists, percentage, ChecklistState};
pub use release::{
    calculate_progress, generate_release_id, parse_date, sample_release, NewRelease, Release,
    ReleaseStatus, ReleaseType,
};
pub use schema::{
    business_schema, release_schema, ChecklistItem, ChecklistSchema, ChecklistSection,
    ReferenceLink,
};
