//! Per-endpoint admin requirement for the optionally gated endpoints.
//!
//! Listing and statistics always require the admin token. Detail, status
//! update and delete are public unless named in the access policy.

use std::fmt;
use std::str::FromStr;

/// Endpoints whose admin requirement is configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardedEndpoint {
    /// `GET /inquiries/{id}`.
    Detail,
    /// `PATCH /inquiries/{id}/status`.
    StatusUpdate,
    /// `DELETE /inquiries/{id}`.
    Delete,
}

impl GuardedEndpoint {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Detail => "detail",
            Self::StatusUpdate => "status",
            Self::Delete => "delete",
        }
    }
}

impl fmt::Display for GuardedEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unknown name in an access policy list.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown endpoint '{0}' in access policy; expected detail, status, delete or all")]
pub struct UnknownEndpoint(pub String);

/// Which optionally gated endpoints demand the admin token.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AccessPolicy {
    detail: bool,
    status_update: bool,
    delete: bool,
}

impl AccessPolicy {
    /// Policy gating every configurable endpoint.
    #[must_use]
    pub const fn all() -> Self {
        Self {
            detail: true,
            status_update: true,
            delete: true,
        }
    }

    /// Returns `true` if `endpoint` requires the admin token.
    #[must_use]
    pub const fn requires_admin(&self, endpoint: GuardedEndpoint) -> bool {
        match endpoint {
            GuardedEndpoint::Detail => self.detail,
            GuardedEndpoint::StatusUpdate => self.status_update,
            GuardedEndpoint::Delete => self.delete,
        }
    }
}

impl FromStr for AccessPolicy {
    type Err = UnknownEndpoint;

    /// Parses a comma-separated list such as `"detail,delete"` or `"all"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut policy = Self::default();
        for name in s.split(',').map(str::trim).filter(|n| !n.is_empty()) {
            match name.to_ascii_lowercase().as_str() {
                "all" => policy = Self::all(),
                "detail" => policy.detail = true,
                "status" => policy.status_update = true,
                "delete" => policy.delete = true,
                _ => return Err(UnknownEndpoint(name.to_string())),
            }
        }
        Ok(policy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_leaves_everything_public() {
        let policy = AccessPolicy::default();
        assert!(!policy.requires_admin(GuardedEndpoint::Detail));
        assert!(!policy.requires_admin(GuardedEndpoint::StatusUpdate));
        assert!(!policy.requires_admin(GuardedEndpoint::Delete));
    }

    #[test]
    fn parses_lists() {
        let policy: AccessPolicy = "detail, Delete".parse().unwrap_or_default();
        assert!(policy.requires_admin(GuardedEndpoint::Detail));
        assert!(!policy.requires_admin(GuardedEndpoint::StatusUpdate));
        assert!(policy.requires_admin(GuardedEndpoint::Delete));

        assert_eq!("all".parse::<AccessPolicy>().ok(), Some(AccessPolicy::all()));
        assert_eq!("".parse::<AccessPolicy>().ok(), Some(AccessPolicy::default()));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(
            "detail,list".parse::<AccessPolicy>(),
            Err(UnknownEndpoint("list".to_string()))
        );
    }
}
