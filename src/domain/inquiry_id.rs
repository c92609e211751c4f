//! Type-safe inquiry identifier.
//!
//! [`InquiryId`] wraps the opaque string id of a stored inquiry. New ids
//! are UUID v4 text, but ids arriving on request paths are accepted
//! verbatim so that an unknown id resolves to "not found" rather than a
//! parse failure.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Unique identifier for a travel inquiry.
///
/// Generated once at creation time and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(transparent)]
pub struct InquiryId(String);

impl InquiryId {
    /// Creates a new random `InquiryId` (UUID v4 text).
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for InquiryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for InquiryId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for InquiryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}
