//! Data Transfer Objects for REST request/response serialization.
//!
//! Stored inquiries and statistics are returned as their domain types;
//! this module holds the request parameters and envelope responses.

pub mod auth_dto;
pub mod common_dto;
pub mod inquiry_dto;

pub use auth_dto::*;
pub use common_dto::*;
pub use inquiry_dto::*;
