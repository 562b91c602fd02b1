//! Offline license certificates
//!
//! A certificate binds one DashScope API key to an expiration time using
//! HMAC-SHA256 under a deployment-wide secret:
//!
//! ```text
//! certificate := base64url(HMAC-SHA256(secret, api_key + "|" + expiration)) + "." + base64url(expiration)
//! ```
//!
//! Verification is offline and collapses every failure to `false`. Access to the
//! generation features additionally requires a live check against the provider,
//! which [`LicenseGate`] runs only after the certificate has verified.
//!
//! ```rust
//! use article_forge::license::{CertificateAuthority, LicenseSecret};
//!
//! let secret = LicenseSecret::new("test-secret").unwrap();
//! let authority = CertificateAuthority::new(secret);
//! let certificate = authority.issue("sk-abc123", 30).unwrap();
//! assert!(authority.verify("sk-abc123", &certificate));
//! assert!(!authority.verify("sk-other", &certificate));
//! ```

mod authority;
mod certificate;
mod clock;
mod gate;
mod liveness;
mod mac;
mod secret;
mod session;

pub use authority::{CertificateAuthority, CertificateVerifier, SECONDS_PER_DAY};
pub use certificate::{Certificate, CertificateError};
pub use clock::{Clock, ManualClock, SystemClock};
pub use gate::{AuthOutcome, LicenseGate};
pub use liveness::{CredentialProbe, DEFAULT_PROBE_MODEL, DashScopeProbe, check_credential_live};
pub use secret::LicenseSecret;
pub use session::{Credential, Session};

#[cfg(test)]
pub use authority::MockCertificateVerifier;
#[cfg(test)]
pub use liveness::MockCredentialProbe;
