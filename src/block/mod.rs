//! Block cipher trait and implementations
//!
//! This module contains the RC6 block cipher and the chaining modes that
//! drive it across multi-block messages.
//!
//! ## Example usage
//!
//! ```
//! use rc6_pcbc::{CipherConfig, Rc6, Pcbc};
//!
//! let config = CipherConfig::default();
//! let cipher = Rc6::new(b"0123456789ABCDEF", config)?;
//! let mode = Pcbc::new(cipher, b"ABCDEFGHIJKLMNOP")?;
//!
//! let ciphertext = mode.encrypt(&[0u8; 32])?;
//! let decrypted = mode.decrypt(&ciphertext)?;
//!
//! assert_eq!(decrypted, [0u8; 32]);
//! # Ok::<(), rc6_pcbc::Error>(())
//! ```

use crate::error::Result;

pub mod modes;
pub mod rc6;

// Re-exports
pub use modes::pcbc::Pcbc;
pub use rc6::Rc6;

/// Trait for block ciphers operating on fixed-size blocks in place
pub trait BlockCipher {
    /// Encrypts a single block in place
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts a single block in place
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Returns the block size in bytes
    fn block_size(&self) -> usize;

    /// Returns the name of the block cipher
    fn name(&self) -> &'static str;
}
