//! Aggregate inquiry counts for the admin dashboard.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::InquiryStatus;

/// Inquiry counts: the total plus the four active funnel stages.
///
/// `archived` inquiries are included in `total` but have no counter of
/// their own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InquiryStats {
    /// Number of stored inquiries, archived included.
    pub total: u64,
    /// Inquiries with status `new`.
    pub new: u64,
    /// Inquiries with status `contacted`.
    pub contacted: u64,
    /// Inquiries with status `in_progress`.
    pub in_progress: u64,
    /// Inquiries with status `booked`.
    pub booked: u64,
}

impl InquiryStats {
    /// Counts one inquiry with the given status.
    pub fn record(&mut self, status: InquiryStatus) {
        self.total = self.total.saturating_add(1);
        let counter = match status {
            InquiryStatus::New => &mut self.new,
            InquiryStatus::Contacted => &mut self.contacted,
            InquiryStatus::InProgress => &mut self.in_progress,
            InquiryStatus::Booked => &mut self.booked,
            InquiryStatus::Archived => return,
        };
        *counter = counter.saturating_add(1);
    }

    /// Number of archived inquiries, derived from the total.
    #[must_use]
    pub const fn archived(&self) -> u64 {
        self.total
            .saturating_sub(self.new)
            .saturating_sub(self.contacted)
            .saturating_sub(self.in_progress)
            .saturating_sub(self.booked)
    }
}

impl FromIterator<InquiryStatus> for InquiryStats {
    fn from_iter<I: IntoIterator<Item = InquiryStatus>>(iter: I) -> Self {
        let mut stats = Self::default();
        for status in iter {
            stats.record(status);
        }
        stats
    }
}
