//! Trait abstraction for the site API to enable mocking in tests

use crate::api::error::ApiError;
use crate::state::{Entry, EntryDraft, ReportDraft};
use async_trait::async_trait;

/// Operations the app performs against the site, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PagesApi: Send + Sync {
    /// Fetch entries, optionally filtered by a search query
    async fn list_entries(&self, query: Option<String>) -> Result<Vec<Entry>, ApiError>;

    /// Submit a new entry
    async fn create_entry(&self, draft: EntryDraft) -> Result<(), ApiError>;

    /// Submit a report against an existing entry
    async fn create_report(&self, draft: ReportDraft) -> Result<(), ApiError>;
}
