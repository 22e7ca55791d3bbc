//! Persistence of the release list and the business roadmap.
//!
//! Each document is saved as a full replace. Reading a document that fails to
//! parse is the one recoverable error in the application: it is logged and the
//! caller gets an empty or default value instead of an error.

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::io::ErrorKind;
use tracing::{debug, error, info};

use super::storage::KeyValueStore;
use crate::constants::{BUSINESS_STORAGE_KEY, RELEASES_STORAGE_KEY};
use crate::models::{sample_release, BusinessState, Release};

/// Outcome of reading one document.
enum Document<T> {
    /// No document stored under the key
    Missing,
    /// Stored, but not valid for the expected shape
    Corrupt,
    /// Parsed successfully (`None` for a literal `null`)
    Parsed(Option<T>),
}

/// Loads and saves the two persisted documents on top of a storage medium.
#[derive(Debug)]
pub struct ReleaseStore<S> {
    storage: S,
}

impl<S: KeyValueStore> ReleaseStore<S> {
    /// Wraps a storage medium.
    pub const fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Borrow the underlying medium.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Loads the release list.
    ///
    /// - No document: seeds the sample release, persists it, and returns it.
    /// - Unparseable document: logs the failure and returns an empty list
    ///   without touching storage.
    /// - Valid document: returns it with checklists normalized. Storage is not
    ///   rewritten.
    ///
    /// # Errors
    ///
    /// Only failures of the storage medium itself are returned.
    pub fn load_releases(&mut self) -> Result<Vec<Release>> {
        match self.read::<Vec<Release>>(RELEASES_STORAGE_KEY)? {
            Document::Missing => {
                info!("No release list found, seeding sample release");
                let releases = vec![sample_release()];
                self.save_releases(&releases)?;
                Ok(releases)
            }
            Document::Corrupt => Ok(Vec::new()),
            Document::Parsed(releases) => {
                let mut releases = releases.unwrap_or_default();
                for release in &mut releases {
                    release.normalize();
                }
                debug!(count = releases.len(), "Loaded releases");
                Ok(releases)
            }
        }
    }

    /// Overwrites the stored release list.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the storage write fails.
    pub fn save_releases(&mut self, releases: &[Release]) -> Result<()> {
        let json = serde_json::to_string(releases).context("Failed to serialize releases")?;
        self.storage
            .set(RELEASES_STORAGE_KEY, &json)
            .context("Failed to save releases")?;
        debug!(count = releases.len(), "Saved releases");
        Ok(())
    }

    /// Loads the business roadmap state.
    ///
    /// A missing or unparseable document is replaced by the all-unchecked
    /// default, which is persisted right away.
    ///
    /// # Errors
    ///
    /// Only failures of the storage medium itself are returned.
    pub fn load_business_state(&mut self) -> Result<BusinessState> {
        match self.read::<BusinessState>(BUSINESS_STORAGE_KEY)? {
            Document::Parsed(Some(mut state)) => {
                state.normalize();
                Ok(state)
            }
            Document::Missing | Document::Corrupt | Document::Parsed(None) => {
                info!("Initializing business roadmap state");
                let state = BusinessState::new();
                self.save_business_state(&state)?;
                Ok(state)
            }
        }
    }

    /// Overwrites the stored business roadmap state.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the storage write fails.
    pub fn save_business_state(&mut self, state: &BusinessState) -> Result<()> {
        let json = serde_json::to_string(state).context("Failed to serialize business state")?;
        self.storage
            .set(BUSINESS_STORAGE_KEY, &json)
            .context("Failed to save business state")?;
        Ok(())
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Document<T>> {
        let raw = match self.storage.get(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Ok(Document::Missing),
            Err(e) if is_unreadable_text(&e) => {
                error!(key, error = %format!("{e:#}"), "Error loading document from storage");
                return Ok(Document::Corrupt);
            }
            Err(e) => return Err(e),
        };
        // Only an empty value counts as absent; whitespace is a broken document
        if raw.is_empty() {
            return Ok(Document::Missing);
        }
        match serde_json::from_str::<Option<T>>(&raw) {
            Ok(value) => Ok(Document::Parsed(value)),
            Err(e) => {
                error!(key, error = %e, "Error loading document from storage");
                Ok(Document::Corrupt)
            }
        }
    }
}

/// Whether a storage failure means the bytes were there but not text.
fn is_unreadable_text(error: &anyhow::Error) -> bool {
    error.chain().any(|cause| {
        cause
            .downcast_ref::<std::io::Error>()
            .is_some_and(|io| io.kind() == ErrorKind::InvalidData)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::calculate_progress;
    use crate::services::storage::MemoryStore;

    #[test]
    fn test_first_run_seeds_sample() {
        let mut store = ReleaseStore::new(MemoryStore::new());
        let releases = store.load_releases().unwrap();
        assert_eq!(releases.len(), 1);
        assert_eq!(releases[0].title, "ÁMAME");
        assert!(store.storage().raw(RELEASES_STORAGE_KEY).is_some());

        // Second load returns the same single release
        let again = store.load_releases().unwrap();
        assert_eq!(again, releases);
    }

    #[test]
    fn test_corrupt_releases_yield_empty_without_write() {
        let mut store =
            ReleaseStore::new(MemoryStore::with_entry(RELEASES_STORAGE_KEY, "{not json"));
        let releases = store.load_releases().unwrap();
        assert!(releases.is_empty());
        assert_eq!(store.storage().raw(RELEASES_STORAGE_KEY), Some("{not json"));
    }

    #[test]
    fn test_whitespace_release_document_is_corrupt() {
        let mut store = ReleaseStore::new(MemoryStore::with_entry(RELEASES_STORAGE_KEY, "   "));
        assert!(store.load_releases().unwrap().is_empty());
        assert_eq!(store.storage().raw(RELEASES_STORAGE_KEY), Some("   "));
    }

    #[test]
    fn test_empty_release_document_seeds() {
        let mut store = ReleaseStore::new(MemoryStore::with_entry(RELEASES_STORAGE_KEY, ""));
        let releases = store.load_releases().unwrap();
        assert_eq!(releases[0].id, "sample_amame");
    }

    /// Medium whose reads fail with the given error kind.
    struct FailingStore(ErrorKind);

    impl KeyValueStore for FailingStore {
        fn get(&self, key: &str) -> Result<Option<String>> {
            Err(std::io::Error::from(self.0)).with_context(|| format!("Failed to read {key}"))
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_undecodable_document_is_corrupt() {
        let mut store = ReleaseStore::new(FailingStore(ErrorKind::InvalidData));
        assert!(store.load_releases().unwrap().is_empty());
    }

    #[test]
    fn test_medium_failure_propagates() {
        let mut store = ReleaseStore::new(FailingStore(ErrorKind::PermissionDenied));
        assert!(store.load_releases().is_err());
    }

    #[test]
    fn test_null_release_document_is_empty() {
        let mut store = ReleaseStore::new(MemoryStore::with_entry(RELEASES_STORAGE_KEY, "null"));
        assert!(store.load_releases().unwrap().is_empty());
    }

    #[test]
    fn test_valid_document_is_not_rewritten() {
        let raw = r#"[{"id":"a","title":"A","checklists":{"basics":{"mixApproved":true}}}]"#;
        let mut store = ReleaseStore::new(MemoryStore::with_entry(RELEASES_STORAGE_KEY, raw));
        let releases = store.load_releases().unwrap();

        assert_eq!(releases.len(), 1);
        assert!(releases[0].checklists.is_checked("basics", "mixApproved"));
        assert!(!releases[0].checklists.is_checked("marketing", "epkReady"));
        assert_eq!(calculate_progress(&releases[0]), 7);
        assert_eq!(store.storage().raw(RELEASES_STORAGE_KEY), Some(raw));
    }

    #[test]
    fn test_release_round_trip() {
        let mut store = ReleaseStore::new(MemoryStore::new());
        let mut release = Release::new("rel_1", "One", "Someone");
        release.checklists.toggle("rights", "proRegistered");
        let saved = vec![release, sample_release()];
        store.save_releases(&saved).unwrap();

        let loaded = store.load_releases().unwrap();
        assert_eq!(loaded, saved);
    }

    #[test]
    fn test_business_state_created_and_persisted() {
        let mut store = ReleaseStore::new(MemoryStore::new());
        let state = store.load_business_state().unwrap();
        assert_eq!(state, BusinessState::new());
        assert!(store.storage().raw(BUSINESS_STORAGE_KEY).is_some());
    }

    #[test]
    fn test_corrupt_business_state_is_reset() {
        let mut store = ReleaseStore::new(MemoryStore::with_entry(BUSINESS_STORAGE_KEY, "[1,2"));
        let state = store.load_business_state().unwrap();
        assert_eq!(state, BusinessState::new());
        let raw = store.storage().raw(BUSINESS_STORAGE_KEY).unwrap();
        assert!(raw.contains("companyProfile"));
    }

    #[test]
    fn test_business_state_round_trip() {
        let mut store = ReleaseStore::new(MemoryStore::new());
        let mut state = BusinessState::new();
        state.toggle("royaltiesAccounts", "soundExchange");
        store.save_business_state(&state).unwrap();

        let loaded = store.load_business_state().unwrap();
        assert!(loaded.is_checked("royaltiesAccounts", "soundExchange"));
        assert_eq!(loaded, state);
    }

    #[test]
    fn test_documents_are_independent() {
        let mut store = ReleaseStore::new(MemoryStore::new());
        let mut state = store.load_business_state().unwrap();
        state.toggle("companyProfile", "ein");
        store.save_business_state(&state).unwrap();

        store.save_releases(&[]).unwrap();
        let loaded = store.load_business_state().unwrap();
        assert!(loaded.is_checked("companyProfile", "ein"));
    }
}
