//! GOST 28147-89 byte order.
//!
//! GOST 28147-89 reads key words and block halves in little-endian order,
//! the mirror image of GOST R 34.12-2015. A legacy cipher (see
//! [`Params::legacy`][crate::Params::legacy]) reverses its key once with
//! [`reverse_key`] and every block with [`reverse_block`] on the way in
//! and out.
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

use crate::{BLOCK_SIZE, KEY_SIZE};
#[cfg(feature = "alloc")]
use crate::{Error, Result};

/// Reverse byte order of each of the eight 32-bit words of `key`.
pub fn reverse_key(key: &[u8; KEY_SIZE]) -> [u8; KEY_SIZE] {
    let mut out = *key;
    out.chunks_exact_mut(4).for_each(|word| word.reverse());
    out
}

/// Reverse byte order of a single block.
pub fn reverse_block(block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
    let mut out = *block;
    out.reverse();
    out
}

/// Reverse byte order of every 8-byte block of `data`.
///
/// Returns [`Error::InvalidBlockSize`] if `data` is not a multiple of the
/// block size.
#[cfg(feature = "alloc")]
pub fn reverse_chunks(data: &[u8]) -> Result<Vec<u8>> {
    if data.len() % BLOCK_SIZE != 0 {
        return Err(Error::InvalidBlockSize);
    }
    let mut out = data.to_vec();
    out.chunks_exact_mut(BLOCK_SIZE).for_each(|block| block.reverse());
    Ok(out)
}
