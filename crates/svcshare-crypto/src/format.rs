//! Shared encoding utilities.

use base64::Engine;

use crate::error::{CryptoError, CryptoResult};

/// Encode bytes as standard (padded) base64.
pub fn base64_encode(data: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(data)
}

/// Decode a standard base64 string to bytes.
///
/// Decode failures are reported as [`CryptoError::Decryption`]; callers on the
/// key or signature paths remap them to their own variant.
pub fn base64_decode(data: &str) -> CryptoResult<Vec<u8>> {
    base64::engine::general_purpose::STANDARD
        .decode(data)
        .map_err(|e| CryptoError::Decryption(format!("invalid base64: {}", e)))
}

/// Normalize pasted key text: CRLF line endings become LF and surrounding
/// whitespace is trimmed.
pub fn normalize_key_text(input: &str) -> String {
    input.replace("\r\n", "\n").trim().to_string()
}
