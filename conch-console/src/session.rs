//! 卖家会话守卫
//!
//! The console talks to the catalog only after an affirmative session
//! check. A missing seller id is a denial decided locally, before any
//! network call.

use conch_client::{CatalogClient, ClientResult};

/// Session verification state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum GuardState {
    /// No check has run yet; catalog access is blocked
    #[default]
    Unchecked,
    /// Affirmative answer received; the console may fetch
    Verified,
    /// Denied or failed; catalog access stays blocked
    Denied,
}

/// Guards catalog access behind seller verification
#[derive(Debug, Clone, Default)]
pub struct SessionGuard {
    seller_id: Option<String>,
    state: GuardState,
}

impl SessionGuard {
    pub fn new(seller_id: Option<String>) -> Self {
        Self {
            seller_id,
            state: GuardState::Unchecked,
        }
    }

    pub fn seller_id(&self) -> Option<&str> {
        self.seller_id.as_deref()
    }

    pub fn state(&self) -> GuardState {
        self.state
    }

    pub fn is_verified(&self) -> bool {
        self.state == GuardState::Verified
    }

    /// Run the session check.
    ///
    /// Without a seller id the guard denies immediately and the network
    /// is never touched. A transport error also denies, and the error is
    /// returned so the caller can report it.
    pub async fn verify(&mut self, client: &CatalogClient) -> ClientResult<GuardState> {
        let Some(seller_id) = self.seller_id.clone() else {
            tracing::warn!("no seller id configured, denying session");
            self.state = GuardState::Denied;
            return Ok(self.state);
        };

        match client.verify_seller(&seller_id).await {
            Ok(true) => {
                tracing::info!(seller_id = %seller_id, "seller session verified");
                self.state = GuardState::Verified;
                Ok(self.state)
            }
            Ok(false) => {
                tracing::warn!(seller_id = %seller_id, "seller session denied");
                self.state = GuardState::Denied;
                Ok(self.state)
            }
            Err(e) => {
                self.state = GuardState::Denied;
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use conch_client::ClientConfig;

    #[test]
    fn test_guard_starts_unchecked() {
        let guard = SessionGuard::new(Some("seller-001".to_string()));
        assert_eq!(guard.state(), GuardState::Unchecked);
        assert!(!guard.is_verified());
    }

    #[tokio::test]
    async fn test_missing_seller_id_denies_without_network() {
        // nothing listens on this address; the check must not care
        let client = ClientConfig::new("http://127.0.0.1:9").build_client();
        let mut guard = SessionGuard::new(None);

        let state = guard.verify(&client).await.unwrap();
        assert_eq!(state, GuardState::Denied);
        assert!(!guard.is_verified());
    }
}
