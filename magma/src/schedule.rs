//! Round key schedule.
//!
//! Magma has no key expansion: every round key is one of the eight 32-bit
//! words of the master key, picked by a round key sequence.
use crate::KEY_SIZE;

/// Number of rounds of block encryption and decryption.
pub const ROUNDS: usize = 32;
/// Number of rounds of the GOST 28147-89 MAC.
pub const MAC_ROUNDS: usize = 16;

/// Key word order of block encryption.
#[rustfmt::skip]
pub const ENCRYPT: [u8; ROUNDS] = [
    0, 1, 2, 3, 4, 5, 6, 7,
    0, 1, 2, 3, 4, 5, 6, 7,
    0, 1, 2, 3, 4, 5, 6, 7,
    7, 6, 5, 4, 3, 2, 1, 0,
];

/// Key word order of block decryption, the reverse of [`ENCRYPT`].
#[rustfmt::skip]
pub const DECRYPT: [u8; ROUNDS] = [
    0, 1, 2, 3, 4, 5, 6, 7,
    7, 6, 5, 4, 3, 2, 1, 0,
    7, 6, 5, 4, 3, 2, 1, 0,
    7, 6, 5, 4, 3, 2, 1, 0,
];

/// Key word order of the MAC: the first 16 rounds of [`ENCRYPT`].
#[rustfmt::skip]
pub const MAC: [u8; MAC_ROUNDS] = [
    0, 1, 2, 3, 4, 5, 6, 7,
    0, 1, 2, 3, 4, 5, 6, 7,
];

/// Derive round keys of `key` for the given round key sequence.
///
/// The key is read as eight big-endian words `K[0..8]` and round `i` gets
/// `K[sequence[i]]`. Only the low three bits of a sequence entry are used.
pub fn derive<const N: usize>(key: &[u8; KEY_SIZE], sequence: &[u8; N]) -> [u32; N] {
    select(&key_words(key), sequence)
}

pub(crate) fn key_words(key: &[u8; KEY_SIZE]) -> [u32; 8] {
    let mut words = [0u32; 8];
    key.chunks_exact(4)
        .zip(words.iter_mut())
        .for_each(|(chunk, w)| *w = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]));
    words
}

pub(crate) fn select<const N: usize>(words: &[u32; 8], sequence: &[u8; N]) -> [u32; N] {
    let mut keys = [0u32; N];
    keys.iter_mut()
        .zip(sequence.iter())
        .for_each(|(k, &i)| *k = words[usize::from(i & 7)]);
    keys
}
