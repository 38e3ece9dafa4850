//! # svcshare-crypto
//!
//! Cryptographic primitives for the ServiceShare envelope protocol.
//!
//! Every business payload exchanged with the platform is JSON text that is
//! encrypted with a shared AES-256 key, base64-encoded, and then signed with
//! the sender's RSA key. This crate provides those three pieces and nothing
//! else; envelope assembly and HTTP live in `svcshare-core` and
//! `svcshare-client`.
//!
//! ## Cryptographic Primitives
//!
//! - **Payload cipher**: AES-256-ECB with PKCS5 padding, base64 at the boundary
//! - **Signatures**: RSA PKCS#1 v1.5 over SHA-1, base64-encoded
//! - **Key material**: PEM or raw base64 DER; PKCS#8/PKCS#1 private keys,
//!   PKIX/PKCS#1 public keys
//!
//! ## Envelope Layout
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ reqData = base64(AES-256-ECB(key, PKCS5(json)))          │
//! ├──────────────────────────────────────────────────────────┤
//! │ sign    = base64(RSA-PKCS1v15(priv, SHA1(reqData)))      │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Examples
//!
//! ### Seal and Open a Payload
//!
//! ```rust
//! use svcshare_crypto::{decrypt_aes, encrypt_aes};
//!
//! let key = b"01234567890123456789012345678901";
//! let sealed = encrypt_aes(r#"{"providerId":123}"#, key).unwrap();
//! assert_eq!(decrypt_aes(&sealed, key).unwrap(), r#"{"providerId":123}"#);
//! ```
//!
//! ### Sign and Verify
//!
//! ```rust
//! use svcshare_crypto::{sign, verify, PrivateKey};
//!
//! let merchant = PrivateKey::generate(1024).unwrap();
//! let signature = sign("ACxsj9fLdV1+MrjZEgU4PZc9BzRh+L5D5JhmUVsU7vA=", &merchant).unwrap();
//! verify(
//!     "ACxsj9fLdV1+MrjZEgU4PZc9BzRh+L5D5JhmUVsU7vA=",
//!     &signature,
//!     &merchant.public_key(),
//! )
//! .unwrap();
//! ```

pub mod cipher;
pub mod error;
pub mod format;
pub mod keys;
pub mod sign;

// Re-export commonly used types
pub use cipher::{decrypt_aes, encrypt_aes, AesEcbCipher, SymmetricCipher, BLOCK_SIZE, KEY_SIZE};
pub use error::{CryptoError, CryptoResult};
pub use format::{base64_decode, base64_encode};
pub use keys::{parse_private_key, parse_public_key, PrivateKey, PublicKey};
pub use sign::{sign, verify};

#[cfg(test)]
mod integration_tests {
    use super::*;

    /// Seal a payload the way a request envelope does: encrypt, then sign the
    /// ciphertext; the receiver verifies before decrypting.
    #[test]
    fn test_seal_verify_open_workflow() {
        let merchant = PrivateKey::generate(1024).unwrap();
        let cipher = AesEcbCipher::new(b"01234567890123456789012345678901").unwrap();

        let req_data = cipher.encrypt(r#"{"merBatchId":"B-1"}"#).unwrap();
        let signature = sign(&req_data, &merchant).unwrap();

        // Receiver side
        let pem = merchant.public_key().to_pem().unwrap();
        let merchant_public = parse_public_key(&pem).unwrap();
        verify(&req_data, &signature, &merchant_public).unwrap();
        assert_eq!(cipher.decrypt(&req_data).unwrap(), r#"{"merBatchId":"B-1"}"#);

        // A tampered ciphertext fails before decryption is attempted
        let mut tampered = req_data.clone();
        let replacement = if tampered.starts_with('A') { "B" } else { "A" };
        tampered.replace_range(0..1, replacement);
        assert!(verify(&tampered, &signature, &merchant_public).is_err());
    }
}
