// Session token storage.
//
// The token is an opaque credential written by an external login flow.
// Its presence gates admin-only fetches; the ApiClient re-reads it on
// every request and evicts it when the backend answers 401.

use std::sync::RwLock;

use secrecy::SecretString;

/// Persistent storage for the opaque session token.
///
/// Implementations must tolerate concurrent access: the client reads
/// on every request and clears on any 401.
pub trait TokenStore: Send + Sync {
    /// The currently stored token, if any.
    fn load(&self) -> Option<SecretString>;

    /// Replace the stored token.
    fn store(&self, token: SecretString);

    /// Evict the stored token. Subsequent requests go out anonymous.
    fn clear(&self);
}

/// In-memory token store for tests and short-lived tools.
#[derive(Default)]
pub struct MemoryTokenStore {
    inner: RwLock<Option<SecretString>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a token already present.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            inner: RwLock::new(Some(SecretString::from(token.into()))),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn load(&self) -> Option<SecretString> {
        self.inner.read().ok().and_then(|guard| guard.clone())
    }

    fn store(&self, token: SecretString) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = Some(token);
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = None;
        }
    }
}
