//! Travel inquiry endpoint handlers.

use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, patch};
use axum::{Json, Router};

use crate::api::dto::{
    ListInquiriesParams, MessageResponse, StatusUpdateParams, StatusUpdateResponse,
};
use crate::api::extract::{ApiJson, ApiQuery};
use crate::app_state::AppState;
use crate::auth::{AdminPrincipal, GuardedEndpoint};
use crate::domain::{InquiryDetails, InquiryId, InquiryStats, TravelInquiry};
use crate::error::{ErrorResponse, LeadsError};

/// `POST /inquiries` — Submit a new travel inquiry.
///
/// # Errors
///
/// Returns [`LeadsError`] on a malformed or invalid body, or if the
/// inquiry cannot be stored.
#[utoipa::path(
    post,
    path = "/api/inquiries",
    tag = "Inquiries",
    summary = "Submit an inquiry",
    description = "Validates a website form submission and stores it with a server-assigned id, timestamp, status `new` and source `website_form`.",
    request_body = InquiryDetails,
    responses(
        (status = 201, description = "Inquiry created", body = TravelInquiry),
        (status = 400, description = "Unreadable body", body = ErrorResponse),
        (status = 422, description = "Field validation failed", body = ErrorResponse),
    )
)]
pub async fn create_inquiry(
    State(state): State<AppState>,
    ApiJson(details): ApiJson<InquiryDetails>,
) -> Result<impl IntoResponse, LeadsError> {
    let inquiry = state.inquiries.create(details).await?;
    Ok((StatusCode::CREATED, Json(inquiry)))
}

/// `GET /inquiries` — List inquiries, newest first.
///
/// # Errors
///
/// Returns [`LeadsError`] without a valid admin token or on an unknown
/// status filter.
#[utoipa::path(
    get,
    path = "/api/inquiries",
    tag = "Inquiries",
    summary = "List inquiries",
    description = "Returns inquiries sorted by creation time descending, optionally filtered by status and a case-insensitive search term.",
    params(ListInquiriesParams),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Inquiry page", body = Vec<TravelInquiry>),
        (status = 400, description = "Unknown status filter", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
pub async fn list_inquiries(
    admin: AdminPrincipal,
    State(state): State<AppState>,
    ApiQuery(params): ApiQuery<ListInquiriesParams>,
) -> Result<impl IntoResponse, LeadsError> {
    tracing::debug!(admin = %admin.email, "listing inquiries");
    let filter = params.filter()?;
    let inquiries = state.inquiries.list(&filter, params.page()).await?;
    Ok(Json(inquiries))
}

/// `GET /inquiries/stats` — Aggregate counts by status.
///
/// # Errors
///
/// Returns [`LeadsError`] without a valid admin token.
#[utoipa::path(
    get,
    path = "/api/inquiries/stats",
    tag = "Inquiries",
    summary = "Inquiry statistics",
    description = "Returns the total number of inquiries and the counts for `new`, `contacted`, `in_progress` and `booked`.",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Counts", body = InquiryStats),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
    )
)]
pub async fn inquiry_stats(
    admin: AdminPrincipal,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, LeadsError> {
    tracing::debug!(admin = %admin.email, "reading inquiry stats");
    Ok(Json(state.inquiries.stats().await?))
}

/// `GET /inquiries/{id}` — Fetch one inquiry.
///
/// # Errors
///
/// Returns [`LeadsError`] for an unknown id, or when the access policy
/// gates this endpoint and the token is missing or invalid.
#[utoipa::path(
    get,
    path = "/api/inquiries/{id}",
    tag = "Inquiries",
    summary = "Get an inquiry",
    params(
        ("id" = String, Path, description = "Inquiry id"),
    ),
    responses(
        (status = 200, description = "Inquiry found", body = TravelInquiry),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Inquiry not found", body = ErrorResponse),
    )
)]
pub async fn get_inquiry(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, LeadsError> {
    if let Some(admin) = AdminPrincipal::require_for(GuardedEndpoint::Detail, &headers, &state)? {
        tracing::debug!(admin = %admin.email, %id, "fetching inquiry");
    }
    let inquiry = state.inquiries.get(&InquiryId::from(id)).await?;
    Ok(Json(inquiry))
}

/// `PATCH /inquiries/{id}/status` — Change the status of an inquiry.
///
/// # Errors
///
/// Returns [`LeadsError`] for an unknown status value (checked before the
/// id), an unknown id, a failed `expected_status` guard, or when the access
/// policy gates this endpoint and the token is missing or invalid.
#[utoipa::path(
    patch,
    path = "/api/inquiries/{id}/status",
    tag = "Inquiries",
    summary = "Update inquiry status",
    description = "Sets the status to one of `new`, `contacted`, `in_progress`, `booked` or `archived`. With `expected_status` the update only applies if the current status matches.",
    params(
        ("id" = String, Path, description = "Inquiry id"),
        StatusUpdateParams,
    ),
    responses(
        (status = 200, description = "Status updated", body = StatusUpdateResponse),
        (status = 400, description = "Unknown status value", body = ErrorResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Inquiry not found", body = ErrorResponse),
        (status = 409, description = "Current status differs from expected_status", body = ErrorResponse),
    )
)]
pub async fn update_inquiry_status(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
    ApiQuery(params): ApiQuery<StatusUpdateParams>,
) -> Result<impl IntoResponse, LeadsError> {
    if let Some(admin) = AdminPrincipal::require_for(GuardedEndpoint::StatusUpdate, &headers, &state)? {
        tracing::debug!(admin = %admin.email, %id, "updating inquiry status");
    }
    let status = state
        .inquiries
        .update_status(
            &InquiryId::from(id),
            &params.status,
            params.expected_status.as_deref(),
        )
        .await?;
    Ok(Json(StatusUpdateResponse {
        message: "Status updated".to_string(),
        status,
    }))
}

/// `DELETE /inquiries/{id}` — Delete an inquiry.
///
/// # Errors
///
/// Returns [`LeadsError`] for an unknown id, or when the access policy
/// gates this endpoint and the token is missing or invalid.
#[utoipa::path(
    delete,
    path = "/api/inquiries/{id}",
    tag = "Inquiries",
    summary = "Delete an inquiry",
    params(
        ("id" = String, Path, description = "Inquiry id"),
    ),
    responses(
        (status = 200, description = "Inquiry deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Inquiry not found", body = ErrorResponse),
    )
)]
pub async fn delete_inquiry(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, LeadsError> {
    if let Some(admin) = AdminPrincipal::require_for(GuardedEndpoint::Delete, &headers, &state)? {
        tracing::debug!(admin = %admin.email, %id, "deleting inquiry");
    }
    state.inquiries.delete(&InquiryId::from(id)).await?;
    Ok(Json(MessageResponse::new("Inquiry deleted")))
}

/// Inquiry routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/inquiries", get(list_inquiries).post(create_inquiry))
        .route("/inquiries/stats", get(inquiry_stats))
        .route("/inquiries/{id}", get(get_inquiry).delete(delete_inquiry))
        .route("/inquiries/{id}/status", patch(update_inquiry_status))
}
