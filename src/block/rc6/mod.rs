//! RC6 block cipher implementation
//!
//! RC6 operates on four 32-bit registers with data-dependent rotations and
//! a tunable round count. The implementation keeps all arithmetic in
//! explicitly wrapping unsigned 32-bit operations and reduces every
//! computed rotation amount modulo the word size before shifting; some
//! rotation amounts produced by the round function exceed 31, so the
//! reduction is a correctness requirement rather than an optimization.
//!
//! Word layout on the wire is little-endian regardless of the host
//! platform.

use alloc::{vec, vec::Vec};
use byteorder::{ByteOrder, LittleEndian};
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use super::BlockCipher;
use crate::error::{validate, Result};
use crate::params::{CipherConfig, RC6_BLOCK_SIZE, RC6_KEY_SIZES, WORD_SIZE};

/// Key schedule seed, the fixed-point representation of e − 2
const P32: u32 = 0xB7E1_5163;

/// Key schedule increment, the fixed-point representation of φ − 1
const Q32: u32 = 0x9E37_79B9;

/// Rotate left with the amount reduced to the low five bits
#[inline(always)]
fn rotl(value: u32, amount: u32) -> u32 {
    value.rotate_left(amount & 31)
}

/// Rotate right with the amount reduced to the low five bits
#[inline(always)]
fn rotr(value: u32, amount: u32) -> u32 {
    value.rotate_right(amount & 31)
}

/// RC6 block cipher
///
/// Holds the expanded round keys for one raw key; the raw key itself is
/// not retained. Round keys are zeroized when the cipher is dropped.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Rc6 {
    round_keys: Vec<u32>,
    rounds: usize,
}

impl Rc6 {
    /// Creates a new RC6 instance, expanding the given raw key
    ///
    /// The key must be 16, 24, or 32 bytes long. The configured block size
    /// must be the four-register transform's block size; the transform is
    /// not defined for other values.
    pub fn new(key: &[u8], config: CipherConfig) -> Result<Self> {
        validate::length("RC6 block size", config.block_size(), RC6_BLOCK_SIZE)?;
        validate::parameter(
            RC6_KEY_SIZES.contains(&key.len()),
            "key",
            "length must be 16, 24, or 32 bytes",
        )?;

        Ok(Rc6 {
            round_keys: Self::expand_key(key, config),
            rounds: config.rounds(),
        })
    }

    /// Performs the RC6 key schedule
    ///
    /// Deterministic in (key, config): the key is loaded as little-endian
    /// words, the subkey array is seeded from P32/Q32, and both are mixed
    /// over `3 × max(c, t)` iterations.
    fn expand_key(key: &[u8], config: CipherConfig) -> Vec<u32> {
        let u = config.block_size() / WORD_SIZE;
        let c = key.len() / u;
        let t = config.subkey_count();

        let mut l = Zeroizing::new(vec![0u32; c]);
        LittleEndian::read_u32_into(&key[..c * WORD_SIZE], l.as_mut_slice());

        let mut s = vec![0u32; t];
        s[0] = P32;
        for i in 1..t {
            s[i] = s[i - 1].wrapping_add(Q32);
        }

        let mut a = 0u32;
        let mut b = 0u32;
        let mut i = 0usize;
        let mut j = 0usize;

        for _ in 0..(3 * t.max(c)) {
            a = rotl(s[i].wrapping_add(a).wrapping_add(b), 3);
            s[i] = a;
            b = rotl(l[j].wrapping_add(a).wrapping_add(b), a.wrapping_add(b));
            l[j] = b;

            i = (i + 1) % t;
            j = (j + 1) % c;
        }

        s
    }

    /// Number of rounds this instance performs
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Generate a random key of the given length
    pub fn generate_key<R: RngCore + CryptoRng>(
        rng: &mut R,
        len: usize,
    ) -> Result<Zeroizing<Vec<u8>>> {
        validate::parameter(
            RC6_KEY_SIZES.contains(&len),
            "key",
            "length must be 16, 24, or 32 bytes",
        )?;

        let mut key = Zeroizing::new(vec![0u8; len]);
        rng.fill_bytes(key.as_mut_slice());
        Ok(key)
    }
}

impl BlockCipher for Rc6 {
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("RC6 block", block.len(), RC6_BLOCK_SIZE)?;

        let s = &self.round_keys;
        let mut reg = [0u32; 4];
        LittleEndian::read_u32_into(block, &mut reg);
        let [mut a, mut b, mut c, mut d] = reg;

        b = b.wrapping_add(s[0]);
        d = d.wrapping_add(s[1]);

        for i in 1..=self.rounds {
            let t = rotl(b.wrapping_mul(b.wrapping_mul(2).wrapping_add(1)), 5);
            let u = rotl(d.wrapping_mul(d.wrapping_mul(2).wrapping_add(1)), 5);

            a = rotl(a ^ t, u).wrapping_add(s[2 * i]);
            c = rotl(c ^ u, t).wrapping_add(s[2 * i + 1]);

            let temp = a;
            a = b;
            b = c;
            c = d;
            d = temp;
        }

        a = a.wrapping_add(s[2 * self.rounds]);
        c = c.wrapping_add(s[2 * self.rounds + 1]);

        LittleEndian::write_u32_into(&[a, b, c, d], block);
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("RC6 block", block.len(), RC6_BLOCK_SIZE)?;

        let s = &self.round_keys;
        let mut reg = [0u32; 4];
        LittleEndian::read_u32_into(block, &mut reg);
        let [mut a, mut b, mut c, mut d] = reg;

        c = c.wrapping_sub(s[2 * self.rounds + 1]);
        a = a.wrapping_sub(s[2 * self.rounds]);

        for i in (1..=self.rounds).rev() {
            // Undo the forward register rotation before recomputing t and u,
            // so they match the values used during the corresponding
            // encryption round.
            let temp = d;
            d = c;
            c = b;
            b = a;
            a = temp;

            let t = rotl(b.wrapping_mul(b.wrapping_mul(2).wrapping_add(1)), 5);
            let u = rotl(d.wrapping_mul(d.wrapping_mul(2).wrapping_add(1)), 5);

            c = rotr(c.wrapping_sub(s[2 * i + 1]), t) ^ u;
            a = rotr(a.wrapping_sub(s[2 * i]), u) ^ t;
        }

        d = d.wrapping_sub(s[1]);
        b = b.wrapping_sub(s[0]);

        LittleEndian::write_u32_into(&[a, b, c, d], block);
        Ok(())
    }

    fn block_size(&self) -> usize {
        RC6_BLOCK_SIZE
    }

    fn name(&self) -> &'static str {
        "RC6"
    }
}
