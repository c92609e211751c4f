//! # travel-leads
//!
//! REST backend for a boutique travel agency's lead intake.
//!
//! Website visitors submit travel inquiries; a single administrator logs
//! in with a bearer token to list, search, count, update and delete them.
//!
//! ## Architecture
//!
//! ```text
//! Clients (website form, admin dashboard)
//!     │
//!     ├── REST Handlers (api/)
//!     ├── Admin auth: login, tokens, access policy (auth/)
//!     │
//!     ├── InquiryService (service/)
//!     ├── Inquiry model, status, filters (domain/)
//!     │
//!     └── InquiryRepository (persistence/)
//!           ├── PostgreSQL JSONB documents
//!           └── in-memory map
//! ```

pub mod api;
pub mod app_state;
pub mod auth;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod server;
pub mod service;
