//! Error types for the ServiceShare client.

use std::fmt;

use svcshare_crypto::CryptoError;
use thiserror::Error;

use crate::codes::{self, OUTCOME_UNKNOWN_CODES};

/// Result type alias using the client Error.
pub type Result<T> = std::result::Result<T, Error>;

/// Client error types.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Configuration is missing a field or holds an invalid value
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Key material could not be parsed or is not RSA
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Payload encryption failed
    #[error("Encryption failed: {0}")]
    Encryption(String),

    /// Payload decryption failed
    #[error("Decryption failed: {0}")]
    Decryption(String),

    /// Signing the outbound payload failed
    #[error("Signature generation failed: {0}")]
    Signature(String),

    /// Counterparty signature did not verify
    #[error("Signature verification failed: {0}")]
    Verification(String),

    /// Transport failure or non-200 HTTP status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body is not a valid envelope
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Platform rejected the call with a business status code
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Notification carried no signature
    #[error("Missing signature in notification")]
    MissingSignature,

    /// Notification body is not a valid envelope
    #[error("Invalid notification: {0}")]
    InvalidNotification(String),

    /// Business payload could not be serialized or parsed
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Request failed field validation before sending
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Payload was expected but the platform returned none
    #[error("Empty response data")]
    EmptyResponse,
}

impl Error {
    /// Map a crypto failure onto the client taxonomy, prefixing the step that
    /// failed.
    pub fn from_crypto(phase: &str, err: CryptoError) -> Self {
        let msg = format!("{}: {}", phase, err.detail());
        match err {
            CryptoError::InvalidKey(_) => Error::InvalidKey(msg),
            CryptoError::Encryption(_) => Error::Encryption(msg),
            CryptoError::Decryption(_) => Error::Decryption(msg),
            CryptoError::Signature(_) => Error::Signature(msg),
            CryptoError::Verification(_) => Error::Verification(msg),
        }
    }

    /// The business error, if the platform rejected the call.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Advisory: whether the same call may succeed if repeated later.
    ///
    /// Never retried automatically. For payments, query the batch before
    /// resubmitting; an unknown outcome may still have been applied.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::RequestFailed(_) => true,
            Error::Api(e) => e.is_outcome_unknown(),
            _ => false,
        }
    }
}

impl From<CryptoError> for Error {
    fn from(e: CryptoError) -> Self {
        match e {
            CryptoError::InvalidKey(msg) => Error::InvalidKey(msg),
            CryptoError::Encryption(msg) => Error::Encryption(msg),
            CryptoError::Decryption(msg) => Error::Decryption(msg),
            CryptoError::Signature(msg) => Error::Signature(msg),
            CryptoError::Verification(msg) => Error::Verification(msg),
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

/// Business error returned by the platform: a non-success `resCode` and its
/// `resMsg`.
///
/// Two errors are equal when their codes match, so a received error can be
/// compared against a constructed one regardless of message text.
#[derive(Debug, Clone, Eq)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Documented meaning of this code, if it is in the catalog.
    pub fn description(&self) -> Option<&'static str> {
        codes::describe(&self.code)
    }

    /// Whether the platform could not determine the outcome (6000, 6042,
    /// 6102).
    pub fn is_outcome_unknown(&self) -> bool {
        OUTCOME_UNKNOWN_CODES.contains(&self.code.as_str())
    }
}

impl PartialEq for ApiError {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "API error [{}]: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
