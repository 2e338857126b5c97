//! PKCS#7 padding
//!
//! Pads a message up to the next block boundary by appending `n` bytes of
//! value `n`, where `n ∈ [1, block_size]`. A message whose length is
//! already a multiple of the block size still receives a full block of
//! padding, so every padded buffer carries a removable trailer.

use alloc::vec::Vec;
use core::iter;
use subtle::ConstantTimeEq;

use crate::error::{validate, Error, Result};

/// Largest block size expressible in a one-byte PKCS#7 trailer
const MAX_BLOCK_SIZE: usize = 255;

/// Pads `data` to a multiple of `block_size`
pub fn pad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    validate::parameter(
        block_size >= 1 && block_size <= MAX_BLOCK_SIZE,
        "block size",
        "must be between 1 and 255 for PKCS#7",
    )?;

    let n = block_size - data.len() % block_size;

    let mut padded = Vec::with_capacity(data.len() + n);
    padded.extend_from_slice(data);
    padded.extend(iter::repeat(n as u8).take(n));
    Ok(padded)
}

/// Validates and strips the PKCS#7 trailer from `data`
///
/// Fails when the input is empty, the trailing byte is zero, exceeds the
/// block size or the input length, or any trailer byte disagrees with it.
/// The trailer bytes are folded into a single accumulator compared in
/// constant time, and the returned error carries no position information.
pub fn unpad(data: &[u8], block_size: usize) -> Result<Vec<u8>> {
    validate::parameter(
        block_size >= 1 && block_size <= MAX_BLOCK_SIZE,
        "block size",
        "must be between 1 and 255 for PKCS#7",
    )?;

    let pad_byte = match data.last() {
        Some(&byte) => byte,
        None => return Err(Error::Padding { scheme: "PKCS#7" }),
    };
    let n = pad_byte as usize;

    if n == 0 || n > block_size || n > data.len() {
        return Err(Error::Padding { scheme: "PKCS#7" });
    }

    let mut diff = 0u8;
    for &byte in &data[data.len() - n..] {
        diff |= byte ^ pad_byte;
    }
    if !bool::from(diff.ct_eq(&0)) {
        return Err(Error::Padding { scheme: "PKCS#7" });
    }

    Ok(data[..data.len() - n].to_vec())
}
