//! Service layer: business logic orchestration.
//!
//! [`InquiryService`] assigns server-owned fields, parses status values,
//! and delegates storage to an [`crate::persistence::InquiryRepository`].

pub mod inquiry_service;

pub use inquiry_service::InquiryService;
