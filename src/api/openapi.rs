//! OpenAPI document for the REST API, generated with utoipa.

use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::api::dto::{
    LoginRequest, MessageResponse, StatusUpdateResponse, TokenResponse,
};
use crate::api::handlers;
use crate::domain::{InquiryDetails, InquiryId, InquiryStats, InquiryStatus, TravelInquiry};
use crate::error::{ErrorBody, ErrorResponse};

/// Registers the `bearer_auth` scheme used by admin endpoints.
#[derive(Debug)]
pub struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}

/// OpenAPI document of the travel leads API.
#[derive(Debug, OpenApi)]
#[openapi(
    info(title = "Travel Leads API", description = "Travel inquiry intake and admin management."),
    modifiers(&SecurityAddon),
    paths(
        handlers::auth::login,
        handlers::inquiry::create_inquiry,
        handlers::inquiry::list_inquiries,
        handlers::inquiry::inquiry_stats,
        handlers::inquiry::get_inquiry,
        handlers::inquiry::update_inquiry_status,
        handlers::inquiry::delete_inquiry,
        handlers::system::root_handler,
        handlers::system::health_handler,
    ),
    components(schemas(
        InquiryDetails,
        TravelInquiry,
        InquiryId,
        InquiryStatus,
        InquiryStats,
        LoginRequest,
        TokenResponse,
        StatusUpdateResponse,
        MessageResponse,
        handlers::system::HealthResponse,
        ErrorResponse,
        ErrorBody,
    )),
    tags(
        (name = "Auth", description = "Admin login"),
        (name = "Inquiries", description = "Travel inquiry intake and management"),
        (name = "System", description = "Liveness and health"),
    )
)]
pub struct ApiDoc;
