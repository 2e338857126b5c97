//! High-level encryption surface
//!
//! Ties the block cipher, chaining mode, and padding together behind a
//! small text API: keys, IVs, and plaintext enter as UTF-8 strings,
//! ciphertext leaves as standard base64. A byte-slice API is available
//! underneath for callers that do not round-trip through strings.
//!
//! Key and IV lengths are validated before any key expansion or block
//! processing begins.

use alloc::string::String;
use alloc::vec::Vec;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::block::{Pcbc, Rc6};
use crate::error::{validate, Error, Result};
use crate::padding;
use crate::params::{CipherConfig, RC6_KEY_SIZES};

/// RC6-PCBC encryption engine
///
/// Owns an immutable configuration; every operation is a pure function of
/// (config, key, IV, message). Instances are cheap to construct and safe
/// to share across threads.
#[derive(Debug, Clone, Copy)]
pub struct Rc6PcbcCipher {
    config: CipherConfig,
}

impl Rc6PcbcCipher {
    /// Creates an engine with the given configuration
    pub fn new(config: CipherConfig) -> Self {
        Self { config }
    }

    /// The configuration this engine operates under
    pub fn config(&self) -> CipherConfig {
        self.config
    }

    /// Encrypts a message, returning base64 ciphertext
    ///
    /// Key and IV are taken as their UTF-8 byte encodings. Fails if the
    /// key is not 16, 24, or 32 bytes or the IV does not match the
    /// configured block size.
    pub fn encrypt(&self, plaintext: &str, key: &str, iv: &str) -> Result<String> {
        let ciphertext = self.encrypt_bytes(plaintext.as_bytes(), key.as_bytes(), iv.as_bytes())?;
        Ok(STANDARD.encode(ciphertext))
    }

    /// Decrypts base64 ciphertext back to the original message
    ///
    /// Fails on malformed base64, on key/IV length violations, on an
    /// invalid PKCS#7 trailer, and on decrypted bytes that are not valid
    /// UTF-8.
    pub fn decrypt(&self, ciphertext: &str, key: &str, iv: &str) -> Result<String> {
        let raw = STANDARD.decode(ciphertext).map_err(|_| Error::Format {
            context: "ciphertext",
            details: "not valid base64",
        })?;

        let plaintext = self.decrypt_bytes(&raw, key.as_bytes(), iv.as_bytes())?;

        String::from_utf8(plaintext).map_err(|_| Error::Format {
            context: "plaintext",
            details: "decrypted bytes are not valid UTF-8",
        })
    }

    /// Encrypts a byte message, returning raw ciphertext
    pub fn encrypt_bytes(&self, plaintext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        self.validate_arguments(key, iv)?;

        let padded = Zeroizing::new(padding::pad(plaintext, self.config.block_size())?);

        let mode = Pcbc::new(Rc6::new(key, self.config)?, iv)?;
        mode.encrypt(&padded)
    }

    /// Decrypts raw ciphertext, returning the unpadded byte message
    pub fn decrypt_bytes(&self, ciphertext: &[u8], key: &[u8], iv: &[u8]) -> Result<Vec<u8>> {
        self.validate_arguments(key, iv)?;

        let mode = Pcbc::new(Rc6::new(key, self.config)?, iv)?;
        let padded = Zeroizing::new(mode.decrypt(ciphertext)?);

        padding::unpad(&padded, self.config.block_size())
    }

    /// Rejects bad key and IV lengths before any cipher work begins
    fn validate_arguments(&self, key: &[u8], iv: &[u8]) -> Result<()> {
        validate::parameter(
            RC6_KEY_SIZES.contains(&key.len()),
            "key",
            "length must be 16, 24, or 32 bytes",
        )?;
        validate::length(
            "initialization vector",
            iv.len(),
            self.config.block_size(),
        )
    }
}

impl Default for Rc6PcbcCipher {
    fn default() -> Self {
        Self::new(CipherConfig::default())
    }
}

/// Generate a random IV of the given block size
pub fn generate_iv<R: RngCore + CryptoRng>(rng: &mut R, block_size: usize) -> Vec<u8> {
    let mut iv = Vec::new();
    iv.resize(block_size, 0);
    rng.fill_bytes(&mut iv);
    iv
}
