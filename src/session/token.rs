use crate::session::interface::Authenticator;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Authenticator holding a caller-supplied token
///
/// A forced refresh cannot mint a new credential here; it only reports
/// whether a token is currently held. Replace the token with
/// [`StaticToken::set_token`] when the embedding application obtains a new
/// one.
pub struct StaticToken {
    token: RwLock<Option<String>>,
}

impl StaticToken {
    /// Creates an authenticator holding the given token
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    /// Creates an authenticator with no token yet
    #[must_use]
    pub fn empty() -> Self {
        Self {
            token: RwLock::new(None),
        }
    }

    /// Replaces the held token
    pub async fn set_token(&self, token: impl Into<String>) {
        let mut guard = self.token.write().await;
        *guard = Some(token.into());
    }

    /// Drops the held token
    pub async fn clear(&self) {
        let mut guard = self.token.write().await;
        *guard = None;
    }
}

#[async_trait]
impl Authenticator for StaticToken {
    async fn token(&self) -> Option<String> {
        self.token.read().await.clone()
    }

    async fn ensure_authenticated(&self, _force: bool) -> bool {
        self.token.read().await.is_some()
    }
}
