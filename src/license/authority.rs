//! Certificate issuance and verification

use super::certificate::{Certificate, CertificateError, payload};
use super::clock::{Clock, SystemClock};
use super::mac;
use super::secret::LicenseSecret;
use crate::config::LicenseConfig;
use crate::utils::logging::mask_credential;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Seconds in one validity day
pub const SECONDS_PER_DAY: i64 = 86_400;

/// Offline certificate check used by the login gate
#[cfg_attr(test, mockall::automock)]
pub trait CertificateVerifier: Send + Sync {
    /// `true` only for a well-formed, unexpired certificate signed for `credential`
    fn verify(&self, credential: &str, certificate: &str) -> bool;
}

/// Issues and verifies certificates under one secret.
///
/// Stateless apart from the secret and the clock, so one instance can be
/// shared across threads behind an `Arc`.
#[derive(Debug, Clone)]
pub struct CertificateAuthority {
    secret: LicenseSecret,
    clock: Arc<dyn Clock>,
    default_validity_days: i64,
}

impl CertificateAuthority {
    /// Create an authority on the system clock with a 365 day default window
    pub fn new(secret: LicenseSecret) -> Self {
        Self {
            secret,
            clock: Arc::new(SystemClock),
            default_validity_days: crate::config::models::default_validity_days(),
        }
    }

    /// Create an authority from the license section of the configuration
    pub fn from_config(config: &LicenseConfig) -> Result<Self, CertificateError> {
        let secret = LicenseSecret::new(config.secret.clone())?;
        Ok(Self::new(secret).with_default_validity_days(config.validity_days))
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_default_validity_days(mut self, days: i64) -> Self {
        self.default_validity_days = days;
        self
    }

    pub fn default_validity_days(&self) -> i64 {
        self.default_validity_days
    }

    /// Issue a certificate for `credential` valid for `validity_days` from now.
    ///
    /// A non-positive window yields a certificate that is already expired:
    /// its expiration is at least one second before the issuing instant.
    pub fn issue(&self, credential: &str, validity_days: i64) -> Result<String, CertificateError> {
        if credential.is_empty() {
            return Err(CertificateError::InvalidInput(
                "API key must not be empty to issue a certificate".to_string(),
            ));
        }

        let now = self.clock.now();
        let mut expiration = now.saturating_add(validity_days.saturating_mul(SECONDS_PER_DAY));
        if validity_days <= 0 {
            expiration = expiration.min(now.saturating_sub(1));
        }

        let digest = mac::sign(self.secret.as_bytes(), &payload(credential, expiration))?;
        let certificate = Certificate::from_digest(&digest, expiration);

        info!(
            "Issued certificate for {} valid until {}",
            mask_credential(credential),
            certificate
                .expires_at()
                .map(|t| t.to_rfc3339())
                .unwrap_or_else(|| expiration.to_string())
        );

        Ok(certificate.encode())
    }

    /// Issue with the configured default window
    pub fn issue_default(&self, credential: &str) -> Result<String, CertificateError> {
        self.issue(credential, self.default_validity_days)
    }

    /// Check a certificate and report the precise reason on failure.
    ///
    /// Meant for diagnostics and operator tooling; access decisions go through
    /// [`CertificateAuthority::verify`].
    pub fn inspect(&self, credential: &str, certificate: &str) -> Result<Certificate, CertificateError> {
        if credential.is_empty() || certificate.is_empty() {
            return Err(CertificateError::InvalidInput(
                "API key and certificate must both be provided".to_string(),
            ));
        }

        let parsed = Certificate::parse(certificate)?;

        let now = self.clock.now();
        if parsed.is_expired_at(now) {
            return Err(CertificateError::Expired {
                expiration: parsed.expiration(),
            });
        }

        let payload = payload(credential, parsed.expiration());
        let matches = parsed
            .signature_bytes()
            .is_some_and(|tag| mac::verify(self.secret.as_bytes(), &payload, &tag));
        if !matches {
            return Err(CertificateError::SignatureMismatch);
        }

        Ok(parsed)
    }

    /// Verify `certificate` for `credential` at the current time.
    ///
    /// Never fails: every problem is logged and reported as `false`.
    pub fn verify(&self, credential: &str, certificate: &str) -> bool {
        match self.inspect(credential, certificate) {
            Ok(parsed) => {
                debug!(
                    "Certificate verified for {} (expires at {})",
                    mask_credential(credential),
                    parsed.expiration()
                );
                true
            }
            Err(CertificateError::Expired { expiration }) => {
                warn!(
                    "Certificate expired: now {}, expiration {}",
                    self.clock.now(),
                    expiration
                );
                false
            }
            Err(CertificateError::SignatureMismatch) => {
                warn!(
                    "Certificate signature mismatch for {}",
                    mask_credential(credential)
                );
                false
            }
            Err(e) => {
                warn!("Certificate rejected: {}", e);
                false
            }
        }
    }
}

impl CertificateVerifier for CertificateAuthority {
    fn verify(&self, credential: &str, certificate: &str) -> bool {
        CertificateAuthority::verify(self, credential, certificate)
    }
}
