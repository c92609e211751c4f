//! Filtering and pagination for inquiry listings.

use super::{InquiryStatus, TravelInquiry};

/// Default number of inquiries returned by a list request.
pub const DEFAULT_PAGE_LIMIT: u32 = 100;

/// Upper bound on inquiries returned by a single list request.
pub const MAX_PAGE_LIMIT: u32 = 500;

/// Filter applied to inquiry listings.
///
/// Both criteria are optional; when both are set a record must satisfy
/// both.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryFilter {
    /// Exact status match.
    pub status: Option<InquiryStatus>,
    /// Case-insensitive substring matched against first name, last name,
    /// email and destinations.
    pub search: Option<String>,
}

impl InquiryFilter {
    /// Builds a filter; a blank search term counts as no search.
    #[must_use]
    pub fn new(status: Option<InquiryStatus>, search: Option<&str>) -> Self {
        let search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(ToString::to_string);
        Self { status, search }
    }

    /// Returns `true` if the inquiry satisfies every criterion.
    #[must_use]
    pub fn matches(&self, inquiry: &TravelInquiry) -> bool {
        if let Some(status) = self.status
            && inquiry.status != status
        {
            return false;
        }
        match &self.search {
            Some(term) => inquiry.mentions(&term.to_lowercase()),
            None => true,
        }
    }
}

/// Offset pagination with a server-side cap on the page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Number of records to skip.
    pub skip: u32,
    /// Maximum number of records to return, at most [`MAX_PAGE_LIMIT`].
    pub limit: u32,
}

impl Page {
    /// Creates a page, clamping `limit` to [`MAX_PAGE_LIMIT`].
    #[must_use]
    pub fn new(skip: u32, limit: u32) -> Self {
        Self {
            skip,
            limit: limit.min(MAX_PAGE_LIMIT),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(0, DEFAULT_PAGE_LIMIT)
    }
}
