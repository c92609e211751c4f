//! Request extractors whose rejections render as [`LeadsError`] bodies.
//!
//! The stock `Json` and `Query` extractors answer malformed input with a
//! plain-text body. These wrappers route the rejection through
//! [`LeadsError`] so every failure shares the JSON error envelope.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::LeadsError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(LeadsError))]
pub struct ApiJson<T>(pub T);

/// Query-string parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(LeadsError))]
pub struct ApiQuery<T>(pub T);
