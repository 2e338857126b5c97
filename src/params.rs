//! Cipher parameters and configuration
//!
//! The engine is tunable in two dimensions: the number of rounds the block
//! transform performs, and the block size in bytes. Both are captured once
//! in an immutable [`CipherConfig`] value which every component reads,
//! instead of process-wide mutable state. A config can therefore be shared
//! freely across threads.

use alloc::format;

use crate::error::{validate, Error, Result};

/// Size of one cipher word in bytes
pub const WORD_SIZE: usize = 4;

/// Block size of the four-register transform in bytes
pub const RC6_BLOCK_SIZE: usize = 16;

/// Accepted key lengths in bytes (128, 192, or 256 bits)
pub const RC6_KEY_SIZES: [usize; 3] = [16, 24, 32];

/// Round count used by the default configuration
pub const DEFAULT_ROUNDS: usize = 20;

/// Largest supported round count
pub const MAX_ROUNDS: usize = 255;

/// Immutable cipher configuration: round count and block size
///
/// Constructed once, validated at construction, and passed by value to the
/// components that need it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherConfig {
    rounds: usize,
    block_size: usize,
}

impl CipherConfig {
    /// Creates a configuration from already-parsed values
    ///
    /// Fails if `rounds` is outside `1..=255` or `block_size` is not a
    /// positive multiple of the word size.
    pub fn new(rounds: usize, block_size: usize) -> Result<Self> {
        validate::parameter(
            rounds >= 1 && rounds <= MAX_ROUNDS,
            "rounds",
            "must be between 1 and 255",
        )?;
        validate::parameter(
            block_size > 0 && block_size % WORD_SIZE == 0,
            "block size",
            "must be a positive multiple of 4 bytes",
        )?;
        Ok(Self { rounds, block_size })
    }

    /// Parses a configuration from decimal strings
    ///
    /// Mirrors the constructor validation after parsing; a string that is
    /// not a valid non-negative decimal integer is rejected.
    pub fn parse(rounds: &str, block_size: &str) -> Result<Self> {
        let rounds = rounds.trim().parse::<usize>().map_err(|_| {
            Error::param(
                "rounds",
                format!("'{}' is not a valid number of rounds", rounds),
            )
        })?;
        let block_size = block_size.trim().parse::<usize>().map_err(|_| {
            Error::param(
                "block size",
                format!("'{}' is not a valid block size", block_size),
            )
        })?;
        Self::new(rounds, block_size)
    }

    /// Number of rounds the block transform performs
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Block size in bytes
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Number of round subkeys the key schedule produces, `2 × (rounds + 1)`
    pub fn subkey_count(&self) -> usize {
        2 * (self.rounds + 1)
    }
}

impl Default for CipherConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
            block_size: RC6_BLOCK_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_strings() {
        let config = CipherConfig::parse("20", "16").unwrap();
        assert_eq!(config.rounds(), 20);
        assert_eq!(config.block_size(), 16);
        assert_eq!(config.subkey_count(), 42);
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        let config = CipherConfig::parse(" 12 ", "\t16").unwrap();
        assert_eq!(config.rounds(), 12);
        assert_eq!(config.block_size(), 16);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            CipherConfig::parse("twenty", "16"),
            Err(Error::Parameter { .. })
        ));
        assert!(matches!(
            CipherConfig::parse("20", "16 bytes"),
            Err(Error::Parameter { .. })
        ));
        assert!(matches!(
            CipherConfig::parse("-1", "16"),
            Err(Error::Parameter { .. })
        ));
    }

    #[test]
    fn test_range_validation() {
        assert!(matches!(
            CipherConfig::new(0, 16),
            Err(Error::Parameter { .. })
        ));
        assert!(matches!(
            CipherConfig::new(20, 0),
            Err(Error::Parameter { .. })
        ));
        assert!(matches!(
            CipherConfig::new(20, 15),
            Err(Error::Parameter { .. })
        ));
        assert!(matches!(
            CipherConfig::new(256, 16),
            Err(Error::Parameter { .. })
        ));
        assert!(CipherConfig::new(1, 4).is_ok());
        assert!(CipherConfig::new(255, 16).is_ok());
    }

    #[test]
    fn test_default_config() {
        let config = CipherConfig::default();
        assert_eq!(config.rounds(), DEFAULT_ROUNDS);
        assert_eq!(config.block_size(), RC6_BLOCK_SIZE);
    }
}
