//! Inquiry service: validates submissions and orchestrates storage.

use std::sync::Arc;

use chrono::Utc;
use validator::Validate;

use crate::domain::{
    InquiryDetails, InquiryFilter, InquiryId, InquiryStats, InquiryStatus, Page, TravelInquiry,
};
use crate::error::LeadsError;
use crate::persistence::InquiryRepository;

/// Orchestration layer for all inquiry operations.
///
/// Stateless coordinator over an [`InquiryRepository`]: validates input,
/// stamps server-assigned fields, and logs every mutation.
#[derive(Debug, Clone)]
pub struct InquiryService {
    repository: Arc<dyn InquiryRepository>,
}

impl InquiryService {
    /// Creates a new `InquiryService`.
    #[must_use]
    pub fn new(repository: Arc<dyn InquiryRepository>) -> Self {
        Self { repository }
    }

    /// Validates a form submission and stores it as a new inquiry with a
    /// fresh id, the current time, status `new` and the website source tag.
    ///
    /// # Errors
    ///
    /// Returns [`LeadsError::Validation`] for invalid fields, or a
    /// persistence error if the insert fails.
    pub async fn create(&self, details: InquiryDetails) -> Result<TravelInquiry, LeadsError> {
        details.validate()?;
        let inquiry = TravelInquiry::from_submission(details, Utc::now());
        self.repository.insert(&inquiry).await?;
        tracing::info!(inquiry_id = %inquiry.id, "inquiry created");
        Ok(inquiry)
    }

    /// Fetches one inquiry.
    ///
    /// # Errors
    ///
    /// Returns [`LeadsError::InquiryNotFound`] for an unknown id.
    pub async fn get(&self, id: &InquiryId) -> Result<TravelInquiry, LeadsError> {
        self.repository.find_by_id(id).await
    }

    /// Lists inquiries matching `filter`, newest first.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the query fails.
    pub async fn list(
        &self,
        filter: &InquiryFilter,
        page: Page,
    ) -> Result<Vec<TravelInquiry>, LeadsError> {
        self.repository.list(filter, page).await
    }

    /// Returns aggregate counts.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the query fails.
    pub async fn stats(&self) -> Result<InquiryStats, LeadsError> {
        self.repository.stats().await
    }

    /// Sets the status of an inquiry from its wire name.
    ///
    /// Both values are checked before the store is touched, so an invalid
    /// status never reaches the record.
    ///
    /// # Errors
    ///
    /// - [`LeadsError::InvalidStatus`] if `status` or `expected` is not a
    ///   known status.
    /// - [`LeadsError::InquiryNotFound`] for an unknown id.
    /// - [`LeadsError::StatusConflict`] if `expected` does not match.
    pub async fn update_status(
        &self,
        id: &InquiryId,
        status: &str,
        expected: Option<&str>,
    ) -> Result<InquiryStatus, LeadsError> {
        let status: InquiryStatus = status.parse()?;
        let expected = expected.map(str::parse::<InquiryStatus>).transpose()?;

        match self.repository.update_status(id, status, expected).await {
            Ok(()) => {
                tracing::info!(inquiry_id = %id, %status, "inquiry status updated");
                Ok(status)
            }
            Err(e @ LeadsError::StatusConflict { .. }) => {
                tracing::warn!(inquiry_id = %id, %status, error = %e, "status update rejected");
                Err(e)
            }
            Err(e) => Err(e),
        }
    }

    /// Deletes an inquiry.
    ///
    /// # Errors
    ///
    /// Returns [`LeadsError::InquiryNotFound`] for an unknown id.
    pub async fn delete(&self, id: &InquiryId) -> Result<(), LeadsError> {
        self.repository.delete(id).await?;
        tracing::info!(inquiry_id = %id, "inquiry deleted");
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;
    use crate::domain::inquiry::fixtures;
    use crate::persistence::InMemoryInquiryRepository;

    fn service() -> InquiryService {
        InquiryService::new(Arc::new(InMemoryInquiryRepository::new()))
    }

    async fn create(service: &InquiryService, first: &str) -> TravelInquiry {
        let details = fixtures::details(first, "Doe", "john.doe@example.com", "Italy, France");
        match service.create(details).await {
            Ok(inquiry) => inquiry,
            Err(e) => panic!("create failed: {e}"),
        }
    }

    #[tokio::test]
    async fn create_assigns_server_fields() {
        let service = service();
        let started = Utc::now();
        let a = create(&service, "John").await;
        let b = create(&service, "Jane").await;

        assert_ne!(a.id, b.id);
        assert_eq!(a.status, InquiryStatus::New);
        assert_eq!(a.source, "website_form");
        assert!(a.created_at >= started);
    }

    #[tokio::test]
    async fn create_rejects_invalid_email() {
        let service = service();
        let details = fixtures::details("John", "Doe", "john-at-example", "Italy");
        assert!(matches!(
            service.create(details).await,
            Err(LeadsError::Validation(_))
        ));
        let Ok(stats) = service.stats().await else {
            panic!("stats failed");
        };
        assert_eq!(stats.total, 0);
    }

    #[tokio::test]
    async fn get_returns_created_record() {
        let service = service();
        let created = create(&service, "John").await;
        let Ok(fetched) = service.get(&created.id).await else {
            panic!("inquiry should exist");
        };
        assert_eq!(fetched, created);
    }

    #[tokio::test]
    async fn invalid_status_never_mutates() {
        let service = service();
        let created = create(&service, "John").await;

        let result = service.update_status(&created.id, "pending", None).await;
        assert!(matches!(result, Err(LeadsError::InvalidStatus(s)) if s == "pending"));

        let Ok(fetched) = service.get(&created.id).await else {
            panic!("inquiry should exist");
        };
        assert_eq!(fetched.status, InquiryStatus::New);
    }

    #[tokio::test]
    async fn invalid_status_wins_over_unknown_id() {
        let service = service();
        let result = service
            .update_status(&InquiryId::from("invalid-id"), "bogus", None)
            .await;
        assert!(matches!(result, Err(LeadsError::InvalidStatus(_))));

        let result = service
            .update_status(&InquiryId::from("invalid-id"), "contacted", None)
            .await;
        assert!(matches!(result, Err(LeadsError::InquiryNotFound(_))));
    }

    #[tokio::test]
    async fn update_status_with_expected_guard() {
        let service = service();
        let created = create(&service, "John").await;

        let Ok(status) = service
            .update_status(&created.id, "contacted", Some("new"))
            .await
        else {
            panic!("guarded update should succeed");
        };
        assert_eq!(status, InquiryStatus::Contacted);

        let stale = service
            .update_status(&created.id, "booked", Some("new"))
            .await;
        assert!(matches!(stale, Err(LeadsError::StatusConflict { .. })));

        let bad_guard = service
            .update_status(&created.id, "booked", Some("whatever"))
            .await;
        assert!(matches!(bad_guard, Err(LeadsError::InvalidStatus(_))));
    }

    #[tokio::test]
    async fn delete_twice() {
        let service = service();
        let created = create(&service, "John").await;
        assert!(service.delete(&created.id).await.is_ok());
        assert!(matches!(
            service.delete(&created.id).await,
            Err(LeadsError::InquiryNotFound(_))
        ));
    }

    #[tokio::test]
    async fn stats_total_includes_archived() {
        let service = service();
        let a = create(&service, "A").await;
        let _b = create(&service, "B").await;
        let c = create(&service, "C").await;
        let _ = service.update_status(&a.id, "archived", None).await;
        let _ = service.update_status(&c.id, "booked", None).await;

        let Ok(stats) = service.stats().await else {
            panic!("stats failed");
        };
        assert_eq!(stats.total, 3);
        assert_eq!(stats.new, 1);
        assert_eq!(stats.booked, 1);
        assert_eq!(stats.new + stats.contacted + stats.in_progress + stats.booked, 2);
    }
}
