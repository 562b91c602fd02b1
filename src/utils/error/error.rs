//! Error handling for article-forge
//!
//! This module defines the crate-level error type. Layer-specific errors
//! ([`SdkError`], [`CertificateError`]) convert into it at the boundary.

use crate::license::CertificateError;
use crate::sdk::SdkError;
use thiserror::Error;

/// Result type alias for article-forge
pub type Result<T> = std::result::Result<T, ForgeError>;

/// Main error type for article-forge
#[derive(Error, Debug)]
pub enum ForgeError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Caller misuse: empty credential, certificate or required field
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The certificate is malformed, expired or not signed for this credential
    #[error("Certificate rejected: it does not match the API key, or it has expired or is invalid")]
    InvalidCertificate,

    /// The certificate is fine but the provider refused the credential
    #[error("Credential rejected: the API key is not accepted by the provider or the provider is unreachable")]
    CredentialRejected,

    /// Remote API errors
    #[error("DashScope error: {0}")]
    Sdk(#[from] SdkError),

    /// HTML rendering errors
    #[error("Render error: {0}")]
    Render(String),
}

impl From<CertificateError> for ForgeError {
    fn from(error: CertificateError) -> Self {
        match error {
            CertificateError::InvalidInput(msg) => ForgeError::InvalidInput(msg),
            _ => ForgeError::InvalidCertificate,
        }
    }
}

impl ForgeError {
    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        ForgeError::InvalidInput(msg.into())
    }
}
