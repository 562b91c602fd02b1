//! Composite login: certificate first, then the live credential check

use super::authority::CertificateVerifier;
use super::liveness::CredentialProbe;
use super::session::{Credential, Session};
use crate::utils::error::{ForgeError, Result};
use std::sync::Arc;
use tracing::{info, warn};

/// Result of both login stages, reported separately so the caller can tell
/// a bad certificate from a rejected key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AuthOutcome {
    pub certificate_valid: bool,
    pub credential_live: bool,
}

impl AuthOutcome {
    pub fn is_authenticated(&self) -> bool {
        self.certificate_valid && self.credential_live
    }
}

/// Guards the generation features behind a certificate and a live key
pub struct LicenseGate {
    verifier: Arc<dyn CertificateVerifier>,
    probe: Arc<dyn CredentialProbe>,
}

impl LicenseGate {
    pub fn new(verifier: Arc<dyn CertificateVerifier>, probe: Arc<dyn CredentialProbe>) -> Self {
        Self { verifier, probe }
    }

    /// Run both stages. The provider is never contacted for a certificate that
    /// does not verify.
    pub async fn authenticate(&self, credential: &str, certificate: &str) -> AuthOutcome {
        let mut outcome = AuthOutcome::default();

        outcome.certificate_valid = self.verifier.verify(credential, certificate);
        if !outcome.certificate_valid {
            warn!("Login refused: certificate did not verify");
            return outcome;
        }

        outcome.credential_live = self.probe.is_live(credential).await;
        if !outcome.credential_live {
            warn!("Login refused: certificate valid but API key rejected");
        }

        outcome
    }

    /// Authenticate and open a [`Session`] for the credential
    pub async fn login(&self, credential: &str, certificate: &str) -> Result<Session> {
        if credential.is_empty() || certificate.is_empty() {
            return Err(ForgeError::invalid_input(
                "API key and certificate must both be provided",
            ));
        }

        let outcome = self.authenticate(credential, certificate).await;
        if !outcome.certificate_valid {
            return Err(ForgeError::InvalidCertificate);
        }
        if !outcome.credential_live {
            return Err(ForgeError::CredentialRejected);
        }

        let session = Session::new(Credential::new(credential));
        info!("Logged in with {}", session.credential().masked());
        Ok(session)
    }
}
