//! Inquiry funnel status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::LeadsError;

/// Funnel stage of an inquiry.
///
/// Every inquiry starts as [`InquiryStatus::New`]. There are no automatic
/// transitions: any status may be set from any other through the status
/// update endpoint.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum InquiryStatus {
    /// Freshly submitted, not yet handled.
    #[default]
    New,
    /// The client has been contacted.
    Contacted,
    /// A trip is being planned.
    InProgress,
    /// The trip was booked.
    Booked,
    /// Closed without further action.
    Archived,
}

impl InquiryStatus {
    /// All statuses in funnel order.
    pub const ALL: [Self; 5] = [
        Self::New,
        Self::Contacted,
        Self::InProgress,
        Self::Booked,
        Self::Archived,
    ];

    /// Wire name of the status.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Contacted => "contacted",
            Self::InProgress => "in_progress",
            Self::Booked => "booked",
            Self::Archived => "archived",
        }
    }
}

impl fmt::Display for InquiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InquiryStatus {
    type Err = LeadsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| LeadsError::InvalidStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_wire_name() {
        for status in InquiryStatus::ALL {
            assert_eq!(status.as_str().parse::<InquiryStatus>().ok(), Some(status));
        }
    }

    #[test]
    fn rejects_unknown_and_differently_cased_values() {
        assert!(matches!(
            "pending".parse::<InquiryStatus>(),
            Err(LeadsError::InvalidStatus(s)) if s == "pending"
        ));
        assert!("NEW".parse::<InquiryStatus>().is_err());
        assert!("".parse::<InquiryStatus>().is_err());
    }

    #[test]
    fn default_is_new() {
        assert_eq!(InquiryStatus::default(), InquiryStatus::New);
    }

    #[test]
    fn serde_uses_snake_case() {
        assert_eq!(
            serde_json::to_value(InquiryStatus::InProgress).ok(),
            Some(serde_json::json!("in_progress"))
        );
        let parsed: Option<InquiryStatus> = serde_json::from_str("\"archived\"").ok();
        assert_eq!(parsed, Some(InquiryStatus::Archived));
    }
}
