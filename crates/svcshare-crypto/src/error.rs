//! Error types for envelope cryptography.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// Key material could not be decoded or is not an RSA key.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Payload encryption failed.
    #[error("Encryption failed: {0}")]
    Encryption(String),

    /// Payload decryption failed - wrong key, bad padding or corrupted data.
    #[error("Decryption failed: {0}")]
    Decryption(String),

    /// Signature generation failed.
    #[error("Signature generation failed: {0}")]
    Signature(String),

    /// Signature did not verify against the counterparty key.
    #[error("Signature verification failed: {0}")]
    Verification(String),
}

impl CryptoError {
    /// The underlying cause without the category prefix.
    pub fn detail(&self) -> &str {
        match self {
            Self::InvalidKey(msg)
            | Self::Encryption(msg)
            | Self::Decryption(msg)
            | Self::Signature(msg)
            | Self::Verification(msg) => msg,
        }
    }
}

/// Result type for cryptographic operations.
pub type CryptoResult<T> = Result<T, CryptoError>;
