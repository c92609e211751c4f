//! Domain layer: inquiry records, status funnel, and query model.
//!
//! This module contains the server-side model of a travel inquiry: its
//! identity, the submitted trip details, the status funnel, and the
//! filter/pagination/statistics types shared by every storage backend.

pub mod inquiry;
pub mod inquiry_id;
pub mod query;
pub mod stats;
pub mod status;

pub use inquiry::{InquiryDetails, SOURCE_WEBSITE_FORM, TravelInquiry};
pub use inquiry_id::InquiryId;
pub use query::{DEFAULT_PAGE_LIMIT, InquiryFilter, MAX_PAGE_LIMIT, Page};
pub use stats::InquiryStats;
pub use status::InquiryStatus;
