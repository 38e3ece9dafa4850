//! RSA-SHA1 (PKCS#1 v1.5) envelope signatures.
//!
//! The signed string is always the base64 ciphertext carried in
//! `reqData`/`resData`, never the plaintext, so a receiver can authenticate
//! the wire bytes before decrypting them.

use rsa::Pkcs1v15Sign;
use sha1::{Digest, Sha1};

use crate::error::{CryptoError, CryptoResult};
use crate::format::{base64_decode, base64_encode};
use crate::keys::{PrivateKey, PublicKey};

/// Sign `data` with SHA-1 + PKCS#1 v1.5 and return the base64 signature.
pub fn sign(data: &str, key: &PrivateKey) -> CryptoResult<String> {
    let hashed = Sha1::digest(data.as_bytes());

    let signature = key
        .as_rsa()
        .sign(Pkcs1v15Sign::new::<Sha1>(), &hashed)
        .map_err(|e| CryptoError::Signature(e.to_string()))?;

    Ok(base64_encode(&signature))
}

/// Verify a base64 SHA-1 + PKCS#1 v1.5 signature over `data`.
pub fn verify(data: &str, signature: &str, key: &PublicKey) -> CryptoResult<()> {
    let signature = base64_decode(signature)
        .map_err(|e| CryptoError::Verification(format!("invalid base64 signature: {}", e)))?;

    let hashed = Sha1::digest(data.as_bytes());

    key.as_rsa()
        .verify(Pkcs1v15Sign::new::<Sha1>(), &hashed, &signature)
        .map_err(|e| CryptoError::Verification(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::OnceLock;

    fn keys() -> &'static (PrivateKey, PrivateKey) {
        static KEYS: OnceLock<(PrivateKey, PrivateKey)> = OnceLock::new();
        KEYS.get_or_init(|| {
            (
                PrivateKey::generate(1024).unwrap(),
                PrivateKey::generate(1024).unwrap(),
            )
        })
    }

    #[test]
    fn test_sign_verify_roundtrip() {
        let (merchant, _) = keys();
        let data = "ACxsj9fLdV1+MrjZEgU4PZc9BzRh+L5D5JhmUVsU7vA=";

        let signature = sign(data, merchant).unwrap();
        verify(data, &signature, &merchant.public_key()).unwrap();
    }

    #[test]
    fn test_signature_is_deterministic() {
        // PKCS#1 v1.5 signing has no randomness.
        let (merchant, _) = keys();
        assert_eq!(
            sign("payload", merchant).unwrap(),
            sign("payload", merchant).unwrap()
        );
    }

    #[test]
    fn test_signature_length_matches_modulus() {
        let (merchant, _) = keys();
        let signature = sign("payload", merchant).unwrap();
        assert_eq!(base64_decode(&signature).unwrap().len(), 128);
    }

    #[test]
    fn test_verify_tampered_data() {
        let (merchant, _) = keys();
        let signature = sign("original", merchant).unwrap();

        let result = verify("originaL", &signature, &merchant.public_key());
        assert!(matches!(result, Err(CryptoError::Verification(_))));
    }

    #[test]
    fn test_verify_wrong_key() {
        let (merchant, platform) = keys();
        let signature = sign("data", merchant).unwrap();

        let result = verify("data", &signature, &platform.public_key());
        assert!(matches!(result, Err(CryptoError::Verification(_))));
    }

    #[test]
    fn test_verify_invalid_base64() {
        let (merchant, _) = keys();
        let result = verify("data", "***", &merchant.public_key());
        assert!(
            matches!(result, Err(CryptoError::Verification(msg)) if msg.contains("invalid base64"))
        );
    }

    #[test]
    fn test_verify_empty_signature() {
        let (merchant, _) = keys();
        let result = verify("data", "", &merchant.public_key());
        assert!(matches!(result, Err(CryptoError::Verification(_))));
    }

    #[test]
    fn test_sign_empty_string() {
        let (merchant, _) = keys();
        let signature = sign("", merchant).unwrap();
        verify("", &signature, &merchant.public_key()).unwrap();
    }
}
