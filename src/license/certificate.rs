//! Certificate wire format

use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::{Engine as _, alphabet, engine::general_purpose};
use chrono::{DateTime, Utc};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Separator between the encoded signature and the encoded expiration
pub const FIELD_SEPARATOR: char = '.';

/// Separator between the credential and the expiration inside the signed payload
pub const PAYLOAD_SEPARATOR: char = '|';

/// URL-safe decoder for the expiration field; accepts padded and unpadded input
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Reasons a certificate is refused.
///
/// These never cross the public verification boundary: callers only see a
/// boolean. They exist for logging and for the operator-facing `inspect` path.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CertificateError {
    /// Empty credential or certificate
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Wrong field count or undecodable expiration
    #[error("malformed certificate: {0}")]
    Malformed(String),

    /// Well formed, but the expiration has passed
    #[error("certificate expired at {expiration}")]
    Expired { expiration: i64 },

    /// The recomputed MAC differs from the presented one
    #[error("certificate signature does not match")]
    SignatureMismatch,
}

/// A parsed certificate: the encoded signature and the expiration timestamp
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Certificate {
    signature: String,
    expiration: i64,
}

impl Certificate {
    /// Build a certificate from a raw MAC digest
    pub(crate) fn from_digest(digest: &[u8], expiration: i64) -> Self {
        Self {
            signature: general_purpose::URL_SAFE.encode(digest),
            expiration,
        }
    }

    /// Parse the `<signature>.<expiration>` form.
    ///
    /// Only the structure and the expiration are checked here; the signature is
    /// kept in its encoded form until it is compared against a fresh MAC.
    pub fn parse(certificate: &str) -> Result<Self, CertificateError> {
        if certificate.is_empty() {
            return Err(CertificateError::InvalidInput(
                "certificate is empty".to_string(),
            ));
        }

        let mut fields = certificate.split(FIELD_SEPARATOR);
        let (signature, encoded_expiration) = match (fields.next(), fields.next(), fields.next()) {
            (Some(signature), Some(expiration), None) => (signature, expiration),
            _ => {
                return Err(CertificateError::Malformed(
                    "expected exactly two fields".to_string(),
                ));
            }
        };

        if signature.is_empty() || encoded_expiration.is_empty() {
            return Err(CertificateError::Malformed("empty field".to_string()));
        }

        let expiration = decode_expiration(encoded_expiration)?;

        Ok(Self {
            signature: signature.to_string(),
            expiration,
        })
    }

    /// Serialized `<signature>.<expiration>` form
    pub fn encode(&self) -> String {
        let expiration = general_purpose::URL_SAFE.encode(self.expiration.to_string());
        format!("{}{}{}", self.signature, FIELD_SEPARATOR, expiration)
    }

    /// Expiration as a Unix timestamp in seconds
    pub fn expiration(&self) -> i64 {
        self.expiration
    }

    /// Expiration as a UTC date, when representable
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.expiration, 0)
    }

    /// Whether the certificate is expired at `now`. The expiration second itself is still valid.
    pub fn is_expired_at(&self, now: i64) -> bool {
        now > self.expiration
    }

    /// Encoded signature field
    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Raw MAC bytes, or `None` unless the field is canonical padded base64.
    ///
    /// The signature must be exactly as issued: a missing `=` or non-zero
    /// trailing bits are rejected rather than decoded to the same digest.
    pub(crate) fn signature_bytes(&self) -> Option<Vec<u8>> {
        general_purpose::URL_SAFE.decode(&self.signature).ok()
    }
}

impl fmt::Display for Certificate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for Certificate {
    type Err = CertificateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Bytes covered by the MAC: `credential|expiration`
pub(crate) fn payload(credential: &str, expiration: i64) -> String {
    format!("{}{}{}", credential, PAYLOAD_SEPARATOR, expiration)
}

fn decode_expiration(encoded: &str) -> Result<i64, CertificateError> {
    let bytes = URL_SAFE_LENIENT
        .decode(encoded)
        .map_err(|e| CertificateError::Malformed(format!("expiration is not base64: {}", e)))?;
    let text = String::from_utf8(bytes)
        .map_err(|_| CertificateError::Malformed("expiration is not UTF-8".to_string()))?;
    text.trim()
        .parse::<i64>()
        .map_err(|e| CertificateError::Malformed(format!("expiration is not an integer: {}", e)))
}
