//! # Session Port
//!
//! The narrow interface through which a run reaches the appliance. The core
//! only ever sees raw configuration text; authentication details stay behind
//! this trait.

use std::fmt;

use async_trait::async_trait;

use crate::config::Credentials;
use crate::error::SessionError;

/// Opaque token issued by a successful login.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

/// A client bound to a single appliance.
#[async_trait]
pub trait SessionClient: Send + Sync {
    /// Authenticates and returns the session token for subsequent calls.
    async fn login(&self, credentials: &Credentials) -> Result<SessionToken, SessionError>;

    /// Retrieves the appliance's running configuration as line-oriented text.
    async fn fetch_running_config(
        &self,
        session: &SessionToken,
        credentials: &Credentials,
    ) -> Result<String, SessionError>;

    /// Tears the session down. Callers treat failures as non-fatal.
    async fn logout(&self, session: &SessionToken) -> Result<(), SessionError>;
}
