//! Authenticated session context

use crate::utils::logging::mask_credential;
use chrono::{DateTime, Utc};
use std::fmt;
use tracing::info;

/// A provider API key. Opaque; `Debug` and `Display` only show a masked prefix.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// The raw key, for the `Authorization` header
    pub fn expose(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn masked(&self) -> String {
        mask_credential(&self.0)
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Credential({})", self.masked())
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.masked())
    }
}

impl From<&str> for Credential {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// The one credential that passed the login gate.
///
/// Created by [`LicenseGate::login`](super::LicenseGate::login) and ended by
/// [`Session::logout`]. Everything that talks to the provider receives the
/// credential from here.
#[derive(Debug)]
pub struct Session {
    credential: Credential,
    authenticated_at: DateTime<Utc>,
}

impl Session {
    pub(crate) fn new(credential: Credential) -> Self {
        Self {
            credential,
            authenticated_at: Utc::now(),
        }
    }

    pub fn credential(&self) -> &Credential {
        &self.credential
    }

    pub fn authenticated_at(&self) -> DateTime<Utc> {
        self.authenticated_at
    }

    /// End the session. Using the product again requires a full login.
    pub fn logout(self) {
        info!("Logged out {}", self.credential.masked());
    }
}
