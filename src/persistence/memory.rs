//! Process-local inquiry storage.
//!
//! [`InMemoryInquiryRepository`] keeps every inquiry in a `HashMap` behind
//! a single [`tokio::sync::RwLock`]: listings and lookups share the read
//! lock, inserts and mutations take the write lock.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::InquiryRepository;
use crate::domain::{InquiryFilter, InquiryId, InquiryStats, InquiryStatus, Page, TravelInquiry};
use crate::error::LeadsError;

/// In-memory [`InquiryRepository`].
#[derive(Debug, Default)]
pub struct InMemoryInquiryRepository {
    inquiries: RwLock<HashMap<InquiryId, TravelInquiry>>,
}

impl InMemoryInquiryRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored inquiries.
    pub async fn len(&self) -> usize {
        self.inquiries.read().await.len()
    }

    /// Returns `true` if no inquiries are stored.
    pub async fn is_empty(&self) -> bool {
        self.inquiries.read().await.is_empty()
    }
}

#[async_trait]
impl InquiryRepository for InMemoryInquiryRepository {
    async fn insert(&self, inquiry: &TravelInquiry) -> Result<(), LeadsError> {
        let mut map = self.inquiries.write().await;
        if map.contains_key(&inquiry.id) {
            return Err(LeadsError::PersistenceError(format!(
                "inquiry {} already exists",
                inquiry.id
            )));
        }
        map.insert(inquiry.id.clone(), inquiry.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &InquiryId) -> Result<TravelInquiry, LeadsError> {
        self.inquiries
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or_else(|| LeadsError::InquiryNotFound(id.to_string()))
    }

    async fn list(
        &self,
        filter: &InquiryFilter,
        page: Page,
    ) -> Result<Vec<TravelInquiry>, LeadsError> {
        let map = self.inquiries.read().await;
        let mut matched: Vec<&TravelInquiry> =
            map.values().filter(|inquiry| filter.matches(inquiry)).collect();
        matched.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(matched
            .into_iter()
            .skip(page.skip as usize)
            .take(page.limit as usize)
            .cloned()
            .collect())
    }

    async fn stats(&self) -> Result<InquiryStats, LeadsError> {
        let map = self.inquiries.read().await;
        Ok(map.values().map(|inquiry| inquiry.status).collect())
    }

    async fn update_status(
        &self,
        id: &InquiryId,
        status: InquiryStatus,
        expected: Option<InquiryStatus>,
    ) -> Result<(), LeadsError> {
        let mut map = self.inquiries.write().await;
        let inquiry = map
            .get_mut(id)
            .ok_or_else(|| LeadsError::InquiryNotFound(id.to_string()))?;
        if let Some(expected) = expected
            && inquiry.status != expected
        {
            return Err(LeadsError::StatusConflict {
                expected,
                actual: inquiry.status,
            });
        }
        inquiry.status = status;
        Ok(())
    }

    async fn delete(&self, id: &InquiryId) -> Result<(), LeadsError> {
        self.inquiries
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| LeadsError::InquiryNotFound(id.to_string()))
    }
}
