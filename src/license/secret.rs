//! The shared signing secret

use super::certificate::CertificateError;
use std::fmt;

/// Secret used to sign and verify certificates.
///
/// Every instance of a deployment must share the same value. `Debug` never
/// prints the contents.
#[derive(Clone, PartialEq, Eq)]
pub struct LicenseSecret(String);

impl LicenseSecret {
    pub fn new(secret: impl Into<String>) -> Result<Self, CertificateError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(CertificateError::InvalidInput(
                "license secret must not be empty".to_string(),
            ));
        }
        Ok(Self(secret))
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for LicenseSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LicenseSecret(<{} bytes redacted>)", self.0.len())
    }
}
