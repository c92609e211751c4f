//! Persistence layer: inquiry storage behind the [`InquiryRepository`] trait.
//!
//! Two backends implement the trait:
//!
//! - [`postgres::PostgresInquiryRepository`] -- the document store, one
//!   JSONB document per inquiry in a PostgreSQL table.
//! - [`memory::InMemoryInquiryRepository`] -- a process-local map used for
//!   local development and tests.

#[cfg(test)]
pub(crate) mod contract;
pub mod memory;
pub mod postgres;

use std::fmt::Debug;

use async_trait::async_trait;

pub use memory::InMemoryInquiryRepository;
pub use postgres::PostgresInquiryRepository;

use crate::domain::{InquiryFilter, InquiryId, InquiryStats, InquiryStatus, Page, TravelInquiry};
use crate::error::LeadsError;

/// CRUD and query access to stored inquiries.
#[async_trait]
pub trait InquiryRepository: Send + Sync + Debug {
    /// Persists a fully populated inquiry.
    ///
    /// # Errors
    ///
    /// Returns [`LeadsError::PersistenceError`] on store failure.
    async fn insert(&self, inquiry: &TravelInquiry) -> Result<(), LeadsError>;

    /// Fetches one inquiry by id.
    ///
    /// # Errors
    ///
    /// Returns [`LeadsError::InquiryNotFound`] for an unknown id.
    async fn find_by_id(&self, id: &InquiryId) -> Result<TravelInquiry, LeadsError>;

    /// Lists matching inquiries, newest `created_at` first.
    ///
    /// # Errors
    ///
    /// Returns [`LeadsError::PersistenceError`] on store failure.
    async fn list(
        &self,
        filter: &InquiryFilter,
        page: Page,
    ) -> Result<Vec<TravelInquiry>, LeadsError>;

    /// Counts all inquiries and those in each tracked status.
    ///
    /// # Errors
    ///
    /// Returns [`LeadsError::PersistenceError`] on store failure.
    async fn stats(&self) -> Result<InquiryStats, LeadsError>;

    /// Sets the status of one inquiry. With `expected`, the update only
    /// applies while the stored status still equals it.
    ///
    /// # Errors
    ///
    /// - [`LeadsError::InquiryNotFound`] for an unknown id.
    /// - [`LeadsError::StatusConflict`] if `expected` does not match.
    async fn update_status(
        &self,
        id: &InquiryId,
        status: InquiryStatus,
        expected: Option<InquiryStatus>,
    ) -> Result<(), LeadsError>;

    /// Removes one inquiry.
    ///
    /// # Errors
    ///
    /// Returns [`LeadsError::InquiryNotFound`] for an unknown id.
    async fn delete(&self, id: &InquiryId) -> Result<(), LeadsError>;
}
