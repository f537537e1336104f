//! Explicit session object read once at startup.
//!
//! The bearer token lives in `localStorage["token"]`; instead of reading it
//! ad hoc inside request code, `App` loads it into a `Session` and injects
//! that into the [`ApiClient`](crate::shared::api::ApiClient). Outside a
//! browser context the session is simply empty.

const TOKEN_KEY: &str = "token";

#[derive(Clone, Debug, Default)]
pub struct Session {
    token: Option<String>,
}

impl Session {
    /// Read the persisted token, if any. No-op outside a browser.
    pub fn load() -> Self {
        let token = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten());
        Self { token }
    }

    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
        }
    }

    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}

/// Persist a freshly issued token. Takes effect for API calls after the
/// next full page load, when `App` rebuilds the client.
pub fn store_token(token: &str) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anonymous_session_has_no_token() {
        let session = Session::anonymous();
        assert!(session.token().is_none());
        assert!(!session.is_authenticated());
    }

    #[test]
    fn explicit_token_round_trips() {
        let session = Session::with_token("abc");
        assert_eq!(session.token(), Some("abc"));
        assert!(session.is_authenticated());
    }
}
