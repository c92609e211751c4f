//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::auth::{AccessPolicy, AdminAuth};
use crate::service::InquiryService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Inquiry service for all business logic.
    pub inquiries: Arc<InquiryService>,
    /// Admin login and token authentication.
    pub auth: Arc<AdminAuth>,
    /// Admin requirement for the optionally gated endpoints.
    pub access: AccessPolicy,
}
