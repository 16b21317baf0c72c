//! Startup token acquisition. Runs once, independent of user input.
//!
//! Failure is logged and leaves the session without a token, which keeps the
//! recommend action disabled.

use crate::domain::SessionState;
use crate::ports::CredentialPort;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

pub struct CredentialService {
    credentials: Arc<dyn CredentialPort>,
    session: Arc<RwLock<SessionState>>,
}

impl CredentialService {
    pub fn new(credentials: Arc<dyn CredentialPort>, session: Arc<RwLock<SessionState>>) -> Self {
        Self {
            credentials,
            session,
        }
    }

    /// Acquire the catalog token and store it in the session. Returns true on success.
    pub async fn acquire(&self) -> bool {
        match self.credentials.acquire_token().await {
            Ok(token) => {
                self.session.write().await.set_token(token);
                info!("recommendations enabled");
                true
            }
            Err(e) => {
                error!(error = %e, "could not get catalog access token; recommendations unavailable");
                false
            }
        }
    }
}
