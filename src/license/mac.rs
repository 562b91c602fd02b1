//! HMAC-SHA256 signing and verification

use super::certificate::CertificateError;
use hmac::{Hmac, Mac, digest::KeyInit as HmacKeyInit};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

fn keyed(secret: &[u8]) -> Result<HmacSha256, CertificateError> {
    <HmacSha256 as HmacKeyInit>::new_from_slice(secret)
        .map_err(|e| CertificateError::InvalidInput(format!("Invalid HMAC key: {}", e)))
}

/// Raw HMAC-SHA256 digest of `payload`
pub(crate) fn sign(secret: &[u8], payload: &str) -> Result<Vec<u8>, CertificateError> {
    let mut mac = keyed(secret)?;
    mac.update(payload.as_bytes());
    Ok(mac.finalize().into_bytes().to_vec())
}

/// Constant-time check of `tag` against the digest of `payload`
pub(crate) fn verify(secret: &[u8], payload: &str, tag: &[u8]) -> bool {
    let Ok(mut mac) = keyed(secret) else {
        return false;
    };
    mac.update(payload.as_bytes());
    mac.verify_slice(tag).is_ok()
}
