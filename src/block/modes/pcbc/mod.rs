//! Propagating cipher-block-chaining (PCBC) mode implementation
//!
//! PCBC folds both the previous ciphertext block and the previous
//! plaintext block into each block's cipher input. A single-bit error in a
//! transmitted ciphertext block therefore corrupts every decrypted block
//! from that point to the end of the message, unlike plain CBC where only
//! two blocks are affected.
//!
//! Both directions maintain the previous plaintext and ciphertext blocks
//! as running state across the whole message:
//!
//! ```text
//! encrypt:  C[i] = E(P[i] ⊕ C[i-1] ⊕ P[i-1])
//! decrypt:  P[i] = D(C[i]) ⊕ C[i-1] ⊕ P[i-1]
//! ```
//!
//! with `C[-1]` the IV and `P[-1]` a zero block.

use alloc::{vec, vec::Vec};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::super::BlockCipher;
use crate::error::{validate, Error, Result};

/// PCBC mode implementation
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Pcbc<B: BlockCipher + Zeroize + ZeroizeOnDrop> {
    cipher: B,
    iv: Vec<u8>,
}

impl<B: BlockCipher + Zeroize + ZeroizeOnDrop> Pcbc<B> {
    /// Creates a new PCBC mode instance with the given cipher and IV
    ///
    /// The IV must be the same size as the block size of the cipher.
    pub fn new(cipher: B, iv: &[u8]) -> Result<Self> {
        validate::length(
            "PCBC initialization vector",
            iv.len(),
            cipher.block_size(),
        )?;

        Ok(Self {
            cipher,
            iv: iv.to_vec(),
        })
    }

    /// Encrypts a message using PCBC mode
    ///
    /// The plaintext must be a multiple of the block size; padding is
    /// applied by the caller before this function.
    pub fn encrypt(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.cipher.block_size();
        if plaintext.len() % block_size != 0 {
            let expected_len = (plaintext.len() / block_size + 1) * block_size;
            return Err(Error::Length {
                context: "PCBC plaintext",
                expected: expected_len,
                actual: plaintext.len(),
            });
        }

        let mut ciphertext = Vec::with_capacity(plaintext.len());
        let mut prev_cipher = Zeroizing::new(self.iv.clone());
        let mut prev_plain = Zeroizing::new(vec![0u8; block_size]);

        for chunk in plaintext.chunks(block_size) {
            let mut block = Zeroizing::new(chunk.to_vec());

            // Fold in both halves of the chain state
            for i in 0..block_size {
                block[i] ^= prev_cipher[i] ^ prev_plain[i];
            }

            self.cipher.encrypt_block(block.as_mut_slice())?;

            ciphertext.extend_from_slice(&block);
            prev_plain.copy_from_slice(chunk);
            prev_cipher.copy_from_slice(&block);
        }

        Ok(ciphertext)
    }

    /// Decrypts a message using PCBC mode
    ///
    /// The ciphertext must be a multiple of the block size.
    pub fn decrypt(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let block_size = self.cipher.block_size();
        if ciphertext.len() % block_size != 0 {
            let expected_len = (ciphertext.len() / block_size + 1) * block_size;
            return Err(Error::Length {
                context: "PCBC ciphertext",
                expected: expected_len,
                actual: ciphertext.len(),
            });
        }

        let mut plaintext = Vec::with_capacity(ciphertext.len());
        let mut prev_cipher = Zeroizing::new(self.iv.clone());
        let mut prev_plain = Zeroizing::new(vec![0u8; block_size]);

        for chunk in ciphertext.chunks(block_size) {
            let mut block = Zeroizing::new(chunk.to_vec());

            self.cipher.decrypt_block(block.as_mut_slice())?;

            for i in 0..block_size {
                block[i] ^= prev_cipher[i] ^ prev_plain[i];
            }

            plaintext.extend_from_slice(&block);
            prev_cipher.copy_from_slice(chunk);
            prev_plain.copy_from_slice(&block);
        }

        Ok(plaintext)
    }
}
