//! AES-256-ECB payload cipher with PKCS5 padding.
//!
//! The platform encrypts every business payload with a shared 32-byte key in
//! Electronic Codebook mode: no IV, no chaining, each 16-byte block encrypted
//! independently. Ciphertext crosses the wire as standard base64. The mode is
//! fixed by the remote protocol and must stay byte-identical with the
//! counterparty; it is reached only through [`SymmetricCipher`] so a later
//! protocol version can swap it out.

use aes::cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt, KeyInit};
use aes::Aes256;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{CryptoError, CryptoResult};
use crate::format::{base64_decode, base64_encode};

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Required AES-256 key length in bytes.
pub const KEY_SIZE: usize = 32;

/// Payload cipher used to seal `reqData` / open `resData`.
///
/// Both directions are base64-coded at the boundary.
pub trait SymmetricCipher: Send + Sync {
    /// Encrypt UTF-8 plaintext, returning base64 ciphertext.
    fn encrypt(&self, plaintext: &str) -> CryptoResult<String>;

    /// Decrypt base64 ciphertext back to UTF-8 plaintext.
    fn decrypt(&self, ciphertext: &str) -> CryptoResult<String>;
}

/// AES-256 in ECB mode with PKCS5 padding.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct AesEcbCipher {
    key: [u8; KEY_SIZE],
}

impl AesEcbCipher {
    /// Create a cipher from raw key bytes. The key must be exactly 32 bytes.
    pub fn new(key: &[u8]) -> CryptoResult<Self> {
        let key: [u8; KEY_SIZE] = key.try_into().map_err(|_| {
            CryptoError::InvalidKey(format!(
                "AES-256 key must be {} bytes, got {}",
                KEY_SIZE,
                key.len()
            ))
        })?;
        Ok(Self { key })
    }

    fn block_cipher(&self) -> Aes256 {
        Aes256::new(GenericArray::from_slice(&self.key))
    }
}

impl std::fmt::Debug for AesEcbCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AesEcbCipher")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

impl SymmetricCipher for AesEcbCipher {
    fn encrypt(&self, plaintext: &str) -> CryptoResult<String> {
        let cipher = self.block_cipher();

        let mut buffer = pkcs5_pad(plaintext.as_bytes(), BLOCK_SIZE);
        for block in buffer.chunks_exact_mut(BLOCK_SIZE) {
            cipher.encrypt_block(GenericArray::from_mut_slice(block));
        }

        Ok(base64_encode(&buffer))
    }

    fn decrypt(&self, ciphertext: &str) -> CryptoResult<String> {
        let mut buffer = base64_decode(ciphertext)?;

        if buffer.len() % BLOCK_SIZE != 0 {
            return Err(CryptoError::Decryption(format!(
                "ciphertext length {} is not a multiple of block size",
                buffer.len()
            )));
        }

        let cipher = self.block_cipher();
        for block in buffer.chunks_exact_mut(BLOCK_SIZE) {
            cipher.decrypt_block(GenericArray::from_mut_slice(block));
        }

        let unpadded_len = pkcs5_unpad(&buffer)?;
        buffer.truncate(unpadded_len);

        String::from_utf8(buffer)
            .map_err(|e| CryptoError::Decryption(format!("plaintext is not UTF-8: {}", e)))
    }
}

/// Encrypt `plaintext` with AES-256-ECB under `key`, returning base64.
///
/// A key of the wrong length is an encryption failure on this path.
pub fn encrypt_aes(plaintext: &str, key: &[u8]) -> CryptoResult<String> {
    AesEcbCipher::new(key)
        .map_err(|e| CryptoError::Encryption(e.to_string()))?
        .encrypt(plaintext)
}

/// Decrypt base64 AES-256-ECB `ciphertext` under `key`.
///
/// A key of the wrong length is a decryption failure on this path.
pub fn decrypt_aes(ciphertext: &str, key: &[u8]) -> CryptoResult<String> {
    AesEcbCipher::new(key)
        .map_err(|e| CryptoError::Decryption(e.to_string()))?
        .decrypt(ciphertext)
}

/// Append PKCS5 padding. A full block of padding is added when the input is
/// already block-aligned.
pub fn pkcs5_pad(data: &[u8], block_size: usize) -> Vec<u8> {
    let padding = block_size - data.len() % block_size;
    let mut padded = Vec::with_capacity(data.len() + padding);
    padded.extend_from_slice(data);
    padded.resize(data.len() + padding, padding as u8);
    padded
}

/// Validate PKCS5 padding and return the unpadded length.
pub fn pkcs5_unpad(data: &[u8]) -> CryptoResult<usize> {
    let Some(&last) = data.last() else {
        return Err(CryptoError::Decryption("data is empty".into()));
    };

    let padding = last as usize;
    if padding == 0 || padding > data.len() {
        return Err(CryptoError::Decryption(format!(
            "invalid padding length {}",
            padding
        )));
    }

    let start = data.len() - padding;
    if data[start..].iter().any(|&b| b != last) {
        return Err(CryptoError::Decryption("invalid padding bytes".into()));
    }

    Ok(start)
}
