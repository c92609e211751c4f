//! Authorization policy for validated token subjects.

use std::fmt::Debug;

/// Decides whether an authenticated identity may use the admin API.
pub trait Authorizer: Send + Sync + Debug {
    /// Returns `true` if `identity` is an authorized admin.
    fn is_authorized(&self, identity: &str) -> bool;
}

/// Authorizes exactly one configured admin email.
#[derive(Debug, Clone)]
pub struct SingleAdminAuthorizer {
    admin_email: String,
}

impl SingleAdminAuthorizer {
    /// Creates an authorizer for `admin_email`.
    #[must_use]
    pub fn new(admin_email: impl Into<String>) -> Self {
        Self {
            admin_email: admin_email.into(),
        }
    }
}

impl Authorizer for SingleAdminAuthorizer {
    fn is_authorized(&self, identity: &str) -> bool {
        identity == self.admin_email
    }
}
