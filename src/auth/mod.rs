//! Admin authentication and authorization.
//!
//! - [`password`] -- Argon2id password hashing and verification.
//! - [`token`] -- HS256 bearer token issuing and validation.
//! - [`authorizer`] -- which validated identities count as admin.
//! - [`policy`] -- which optionally gated endpoints need the admin token.
//! - [`extractor`] -- axum extractor for admin-only handlers.
//!
//! [`AdminAuth`] ties these together for the handlers: it verifies login
//! credentials, issues tokens, and turns a bearer token back into an
//! authorized admin identity.

pub mod authorizer;
pub mod error;
pub mod extractor;
pub mod password;
pub mod policy;
pub mod token;

use std::sync::Arc;

pub use authorizer::{Authorizer, SingleAdminAuthorizer};
pub use error::AuthError;
pub use extractor::AdminPrincipal;
pub use policy::{AccessPolicy, GuardedEndpoint};
pub use token::{IssuedToken, TokenIssuer};

use crate::config::AuthConfig;

/// Fully configured admin credentials.
struct ConfiguredAdmin {
    email: String,
    password_hash: String,
    issuer: TokenIssuer,
    authorizer: Arc<dyn Authorizer>,
}

impl std::fmt::Debug for ConfiguredAdmin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConfiguredAdmin")
            .field("email", &self.email)
            .field("issuer", &self.issuer)
            .field("authorizer", &self.authorizer)
            .finish_non_exhaustive()
    }
}

/// Admin login and token authentication.
///
/// Built once from [`AuthConfig`]. When the secret, admin email or password
/// hash is missing the service still runs, but every operation here fails
/// with [`AuthError::NotConfigured`].
#[derive(Debug)]
pub struct AdminAuth {
    admin: Option<ConfiguredAdmin>,
}

impl AdminAuth {
    /// Builds the auth component from configuration using the
    /// single-admin authorization policy.
    #[must_use]
    pub fn from_config(config: &AuthConfig) -> Self {
        match (
            &config.jwt_secret,
            &config.admin_email,
            &config.admin_password_hash,
        ) {
            (Some(secret), Some(email), Some(hash)) => {
                if !password::is_supported_hash(hash) {
                    tracing::warn!(
                        "ADMIN_PASSWORD_HASH is not an Argon2id PHC string; admin login will fail \
                         until it is regenerated with `hash-admin-password`"
                    );
                }
                let issuer = TokenIssuer::new(secret, config.token_ttl);
                tracing::info!(
                    ttl_minutes = issuer.ttl().num_minutes(),
                    "admin auth configured"
                );
                Self::new(
                    email,
                    hash,
                    issuer,
                    Arc::new(SingleAdminAuthorizer::new(email.as_str())),
                )
            }
            _ => {
                tracing::warn!(
                    "JWT_SECRET, ADMIN_EMAIL or ADMIN_PASSWORD_HASH not set; admin endpoints are disabled"
                );
                Self::unconfigured()
            }
        }
    }

    /// Builds a configured auth component with an explicit authorizer.
    #[must_use]
    pub fn new(
        admin_email: &str,
        password_hash: &str,
        issuer: TokenIssuer,
        authorizer: Arc<dyn Authorizer>,
    ) -> Self {
        Self {
            admin: Some(ConfiguredAdmin {
                email: admin_email.to_string(),
                password_hash: password_hash.to_string(),
                issuer,
                authorizer,
            }),
        }
    }

    /// Auth component with no admin configured.
    #[must_use]
    pub const fn unconfigured() -> Self {
        Self { admin: None }
    }

    /// Returns `true` if an admin identity and signing secret are set.
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.admin.is_some()
    }

    fn admin(&self) -> Result<&ConfiguredAdmin, AuthError> {
        self.admin.as_ref().ok_or(AuthError::NotConfigured)
    }

    /// Checks login credentials and issues a token for the admin.
    ///
    /// # Errors
    ///
    /// - [`AuthError::NotConfigured`] if admin auth is not set up.
    /// - [`AuthError::InvalidCredentials`] on a wrong email or password.
    /// - [`AuthError::Hashing`] if the stored hash is unusable.
    pub fn login(&self, email: &str, password: &str) -> Result<IssuedToken, AuthError> {
        let admin = self.admin()?;
        // Always verify: a wrong email and a wrong password take equally long.
        let password_ok = password::verify_password(password, &admin.password_hash)?;
        if email != admin.email || !password_ok {
            tracing::warn!("admin login rejected");
            return Err(AuthError::InvalidCredentials);
        }
        let issued = admin.issuer.issue(&admin.email)?;
        tracing::info!("admin logged in");
        Ok(issued)
    }

    /// Validates a bearer token and returns the authorized identity.
    ///
    /// # Errors
    ///
    /// - [`AuthError::NotConfigured`] if admin auth is not set up.
    /// - [`AuthError::InvalidOrExpired`] if the token does not verify.
    /// - [`AuthError::Unauthorized`] if the subject is not an admin.
    pub fn authenticate(&self, token: &str) -> Result<String, AuthError> {
        let admin = self.admin()?;
        let identity = admin.issuer.validate(token)?;
        if !admin.authorizer.is_authorized(&identity) {
            tracing::warn!("token subject is not an authorized admin");
            return Err(AuthError::Unauthorized);
        }
        Ok(identity)
    }
}
