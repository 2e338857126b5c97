//! RC6 block cipher with PCBC chaining and PKCS#7 padding
//!
//! This crate provides a pure-software implementation of the RC6 block
//! cipher (four 32-bit registers, data-dependent rotations, tunable round
//! count) together with the propagating cipher-block-chaining (PCBC) mode
//! of operation and PKCS#7 padding. The library is designed to be usable
//! in both `std` and `no_std` environments.
//!
//! # Architecture
//!
//! ```text
//! Rc6            block transform + key schedule (block/rc6)
//!     ↑ driven by
//! Pcbc<B>        chaining mode over any BlockCipher (block/modes/pcbc)
//!     ↑ driven by
//! Rc6PcbcCipher  padded, base64-encoded text surface (cipher)
//! ```
//!
//! # Security Features
//!
//! - Expanded round keys and intermediate plaintext buffers are zeroized
//!   when dropped
//! - The PKCS#7 trailer check folds every trailer byte into one accumulator
//!   compared in constant time
//! - Rotation amounts are explicitly reduced modulo the word size before use
//!
//! Note: PCBC provides no integrity protection. A tampered ciphertext is
//! detected only insofar as its padding fails to validate.
//!
//! # Examples
//!
//! Encrypt and decrypt a message:
//!
//! ```
//! use rc6_pcbc::{CipherConfig, Rc6PcbcCipher};
//!
//! let config = CipherConfig::parse("20", "16")?;
//! let engine = Rc6PcbcCipher::new(config);
//!
//! let ciphertext = engine.encrypt("HelloWorld", "0123456789ABCDEF", "ABCDEFGHIJKLMNOP")?;
//! let plaintext = engine.decrypt(&ciphertext, "0123456789ABCDEF", "ABCDEFGHIJKLMNOP")?;
//!
//! assert_eq!(plaintext, "HelloWorld");
//! # Ok::<(), rc6_pcbc::Error>(())
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Cipher parameters
pub mod params;
pub use params::CipherConfig;

// Block cipher implementation and modes
pub mod block;
pub use block::{BlockCipher, Pcbc, Rc6};

// PKCS#7 padding
pub mod padding;

// High-level text surface
pub mod cipher;
pub use cipher::Rc6PcbcCipher;
