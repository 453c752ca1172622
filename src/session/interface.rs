//! Credential collaborator interface
//!
//! Credential state is owned by the embedding application; this crate only
//! reads the current token and requests refreshes. The client never performs
//! a refresh in-process.

use async_trait::async_trait;

/// Trait for the externally-owned credential collaborator
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Returns the current credential, if one is held
    async fn token(&self) -> Option<String>;

    /// Ensures a usable credential exists
    ///
    /// When `force` is true a refresh is requested even if a credential is
    /// currently held.
    ///
    /// # Returns
    /// Whether a credential is available afterwards
    async fn ensure_authenticated(&self, force: bool) -> bool;
}

/// Authenticator for unauthenticated use
///
/// Holds no credential; a refresh always reports `false`.
#[derive(Debug, Clone, Default)]
pub struct Anonymous;

#[async_trait]
impl Authenticator for Anonymous {
    async fn token(&self) -> Option<String> {
        None
    }

    async fn ensure_authenticated(&self, _force: bool) -> bool {
        false
    }
}
