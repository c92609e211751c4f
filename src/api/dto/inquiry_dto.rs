//! Inquiry endpoint query parameters and responses.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::{DEFAULT_PAGE_LIMIT, InquiryFilter, InquiryStatus, Page};
use crate::error::LeadsError;

/// Query parameters for `GET /inquiries`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListInquiriesParams {
    /// Exact status filter.
    #[serde(default)]
    pub status: Option<String>,
    /// Case-insensitive search over first name, last name, email and
    /// destinations.
    #[serde(default)]
    pub search: Option<String>,
    /// Page size (default 100, values above 500 are clamped).
    #[serde(default = "default_limit")]
    pub limit: u32,
    /// Number of records to skip (default 0).
    #[serde(default)]
    pub skip: u32,
}

fn default_limit() -> u32 {
    DEFAULT_PAGE_LIMIT
}

impl ListInquiriesParams {
    /// Builds the listing filter; a blank status counts as no filter.
    ///
    /// # Errors
    ///
    /// Returns [`LeadsError::InvalidStatus`] for an unknown status.
    pub fn filter(&self) -> Result<InquiryFilter, LeadsError> {
        let status = self
            .status
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::parse::<InquiryStatus>)
            .transpose()?;
        Ok(InquiryFilter::new(status, self.search.as_deref()))
    }

    /// Clamped pagination window.
    #[must_use]
    pub fn page(&self) -> Page {
        Page::new(self.skip, self.limit)
    }
}

/// Query parameters for `PATCH /inquiries/{id}/status`.
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatusUpdateParams {
    /// New status: `new`, `contacted`, `in_progress`, `booked` or `archived`.
    pub status: String,
    /// Apply the update only if the inquiry currently has this status.
    #[serde(default)]
    pub expected_status: Option<String>,
}

/// Response body for a successful status update.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusUpdateResponse {
    /// Acknowledgement message.
    pub message: String,
    /// Status now stored.
    pub status: InquiryStatus,
}
