//! Authentication state providers
//!
//! The guard never touches browser storage directly. It asks an
//! [`AuthStateProvider`] for the current token, which lets the application
//! inject [`LocalStorageAuth`] while tests inject [`MemoryAuth`].

use parking_lot::RwLock;
use std::sync::Arc;

/// Default local storage key holding the auth token.
pub const DEFAULT_TOKEN_KEY: &str = "token";

/// Source of the current authentication token.
pub trait AuthStateProvider {
    /// Returns the persisted token, or `None` when anonymous or unreadable.
    fn token(&self) -> Option<String>;

    /// Whether a usable token is present. Empty tokens count as anonymous.
    fn is_authenticated(&self) -> bool {
        self.token().is_some_and(|token| !token.is_empty())
    }
}

/// Provider shared through Leptos context.
pub type SharedAuth = Arc<dyn AuthStateProvider + Send + Sync>;

/// Reads the token from browser local storage on every call.
///
/// Tokens are stored as raw strings by the login flow, so values are read
/// without any decoding.
#[derive(Debug, Clone)]
pub struct LocalStorageAuth {
    key: String,
}

impl LocalStorageAuth {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Default for LocalStorageAuth {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_KEY)
    }
}

impl AuthStateProvider for LocalStorageAuth {
    #[cfg(target_arch = "wasm32")]
    fn token(&self) -> Option<String> {
        let storage = match web_sys::window().map(|window| window.local_storage()) {
            Some(Ok(Some(storage))) => storage,
            _ => {
                tracing::debug!("local storage unavailable, treating session as anonymous");
                return None;
            }
        };

        match storage.get_item(&self.key) {
            Ok(token) => token,
            Err(err) => {
                tracing::warn!(key = %self.key, error = ?err, "failed to read auth token");
                None
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn token(&self) -> Option<String> {
        None
    }
}

/// In-memory token holder.
#[derive(Debug, Default)]
pub struct MemoryAuth {
    token: RwLock<Option<String>>,
}

impl MemoryAuth {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: RwLock::new(Some(token.into())),
        }
    }

    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write() = Some(token.into());
    }

    pub fn clear(&self) {
        *self.token.write() = None;
    }
}

impl AuthStateProvider for MemoryAuth {
    fn token(&self) -> Option<String> {
        self.token.read().clone()
    }
}

impl<P: AuthStateProvider + ?Sized> AuthStateProvider for Arc<P> {
    fn token(&self) -> Option<String> {
        (**self).token()
    }

    fn is_authenticated(&self) -> bool {
        (**self).is_authenticated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_auth_lifecycle() {
        let auth = MemoryAuth::anonymous();
        assert!(!auth.is_authenticated());

        auth.set_token("abc");
        assert_eq!(auth.token().as_deref(), Some("abc"));
        assert!(auth.is_authenticated());

        auth.clear();
        assert!(auth.token().is_none());
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_empty_token_is_anonymous() {
        let auth = MemoryAuth::with_token("");
        assert_eq!(auth.token().as_deref(), Some(""));
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_token_is_opaque() {
        let auth = MemoryAuth::with_token("not a jwt at all");
        assert!(auth.is_authenticated());
    }

    #[test]
    fn test_shared_auth_delegates() {
        let shared: SharedAuth = Arc::new(MemoryAuth::with_token("t"));
        assert!(shared.is_authenticated());
    }

    #[test]
    fn test_local_storage_default_key() {
        assert_eq!(LocalStorageAuth::default().key(), "token");
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_local_storage_is_anonymous_off_browser() {
        assert!(!LocalStorageAuth::default().is_authenticated());
    }
}
