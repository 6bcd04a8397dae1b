//! Repository trait for API token verification.

use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for stored API tokens.
///
/// Tokens are provisioned outside this service and stored as HMAC-SHA256
/// hashes; only verification happens here.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Looks up the user owning a non-revoked token hash.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(user_id))` for a valid token
    /// - `Ok(None)` for an unknown or revoked token
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_user_by_token_hash(&self, token_hash: &str) -> Result<Option<i64>, AppError>;

    /// Updates the token's `last_used_at` timestamp for auditability.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn update_last_used(&self, token_hash: &str) -> Result<(), AppError>;
}
