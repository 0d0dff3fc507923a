//! Implementation of the [block cipher][1] defined in GOST 28147-89
//! and GOST R 34.12-2015, together with the GOST 28147-89 MAC.
//!
//! [`Magma`] implements the [`cipher`] block traits, so generic mode
//! crates (CBC, CFB, CTR, CMAC, ...) can drive it directly. Instances are
//! built from a [`Params`] value selecting the S-box and the byte order:
//! GOST R 34.12-2015 by default, or the mirrored GOST 28147-89 order.
//!
//! # Examples
//! ```
//! use magma::Magma;
//! use magma::cipher::{generic_array::GenericArray, BlockEncrypt, BlockDecrypt};
//! use hex_literal::hex;
//!
//! // Example vector from GOST 34.12-2018
//! let key = hex!("
//!     FFEEDDCCBBAA99887766554433221100
//!     F0F1F2F3F4F5F6F7F8F9FAFBFCFDFEFF
//! ");
//! let plaintext = hex!("FEDCBA9876543210");
//! let ciphertext = hex!("4EE901E5C2D8CA3D");
//!
//! let cipher = Magma::new(&key).unwrap();
//!
//! let mut block = GenericArray::clone_from_slice(&plaintext);
//! cipher.encrypt_block(&mut block);
//! assert_eq!(&ciphertext, block.as_slice());
//!
//! cipher.decrypt_block(&mut block);
//! assert_eq!(&plaintext, block.as_slice());
//! ```
//!
//! GOST 28147-89 instances take the S-box explicitly:
//! ```
//! use magma::{Magma, Params, SboxId};
//!
//! let key = [0x42; 32];
//! let cipher = Magma::with_params(&key, Params::legacy(SboxId::CryptoProA)).unwrap();
//! let ct = cipher.encrypt(b"8 bytes!").unwrap();
//! assert_eq!(&cipher.decrypt(&ct).unwrap(), b"8 bytes!");
//! ```
//!
//! [1]: https://en.wikipedia.org/wiki/GOST_(block_cipher)
#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

#[cfg(feature = "alloc")]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use cipher;

use cipher::{
    consts::U8, generic_array::GenericArray, impl_simple_block_encdec, AlgorithmName,
    BlockCipher,
};
use core::{convert::TryInto, fmt};

#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

mod error;
pub mod legacy;
mod mac;
mod params;
mod sboxes;
pub mod schedule;

pub use error::{Error, Result};
pub use mac::{mac_legacy, Gost89Mac};
pub use params::Params;
pub use sboxes::{Sbox, SboxId};

/// Block size in bytes.
pub const BLOCK_SIZE: usize = 8;
/// Key size in bytes.
pub const KEY_SIZE: usize = 32;

/// Block over which the Magma cipher operates.
pub type Block = GenericArray<u8, U8>;

/// Block cipher defined in GOST R 34.12-2015 (Magma) and GOST 28147-89.
#[derive(Clone)]
pub struct Magma {
    key: [u32; 8],
    sbox: Sbox,
    legacy: bool,
}

impl Magma {
    /// Create GOST R 34.12-2015 cipher with the `id-tc26-gost-28147-param-Z`
    /// S-box.
    pub fn new(key: &[u8]) -> Result<Self> {
        Self::with_params(key, Params::default())
    }

    /// Create cipher with explicit S-box and byte order.
    ///
    /// Fails with [`Error::InvalidKeyLength`] unless `key` is 32 bytes long
    /// and with [`Error::InvalidKeyFormat`] if it is all zeros.
    pub fn with_params(key: &[u8], params: Params) -> Result<Self> {
        let key: &[u8; KEY_SIZE] = key.try_into().map_err(|_| Error::InvalidKeyLength)?;
        if key.iter().all(|&b| b == 0) {
            return Err(Error::InvalidKeyFormat);
        }
        let key = if params.legacy {
            schedule::key_words(&legacy::reverse_key(key))
        } else {
            schedule::key_words(key)
        };
        Ok(Self {
            key,
            sbox: params.sbox,
            legacy: params.legacy,
        })
    }

    /// Parameters the cipher was created with.
    pub fn params(&self) -> Params {
        Params {
            sbox: self.sbox,
            legacy: self.legacy,
        }
    }

    /// T transformation (S-box substitution) of a half-block.
    pub fn transform_t(&self, a: u32) -> u32 {
        self.sbox.t(a)
    }

    /// G transformation (round function) of a half-block under round key `k`.
    pub fn transform_g(&self, a: u32, k: u32) -> u32 {
        self.sbox.g(a, k)
    }

    /// Round keys for the given round key sequence.
    ///
    /// For a legacy cipher these are the words of the byte-reversed key.
    pub fn round_keys<const N: usize>(&self, sequence: &[u8; N]) -> [u32; N] {
        schedule::select(&self.key, sequence)
    }

    /// Run the Feistel network over `block` with an arbitrary round key
    /// sequence, in GOST R 34.12-2015 byte order.
    ///
    /// [`encrypt`](Self::encrypt) and [`decrypt`](Self::decrypt) are this
    /// function with [`schedule::ENCRYPT`] and [`schedule::DECRYPT`].
    pub fn proceed<const N: usize>(
        &self,
        block: &[u8],
        sequence: &[u8; N],
    ) -> Result<[u8; BLOCK_SIZE]> {
        let mut block = to_block(block)?;
        self.feistel(&mut block, &self.round_keys(sequence));
        Ok(block)
    }

    /// Encrypt single block, honoring the byte order of the instance.
    pub fn encrypt(&self, block: &[u8]) -> Result<[u8; BLOCK_SIZE]> {
        let mut block = to_block(block)?;
        self.process(&mut block, &schedule::ENCRYPT);
        Ok(block)
    }

    /// Decrypt single block, honoring the byte order of the instance.
    pub fn decrypt(&self, block: &[u8]) -> Result<[u8; BLOCK_SIZE]> {
        let mut block = to_block(block)?;
        self.process(&mut block, &schedule::DECRYPT);
        Ok(block)
    }

    #[inline]
    fn process(&self, block: &mut [u8], sequence: &[u8; schedule::ROUNDS]) {
        let keys = self.round_keys(sequence);
        if self.legacy {
            block.reverse();
            self.feistel(block, &keys);
            block.reverse();
        } else {
            self.feistel(block, &keys);
        }
    }

    #[inline]
    fn feistel(&self, block: &mut [u8], keys: &[u32]) {
        let (a0, a1) = self.rounds((to_u32(&block[0..4]), to_u32(&block[4..8])), keys);
        block[0..4].copy_from_slice(&a1.to_be_bytes());
        block[4..8].copy_from_slice(&a0.to_be_bytes());
    }

    /// Feistel rounds over the half-block pair `(a0, a1)`; `a1` is the input
    /// of the round function.
    #[inline]
    fn rounds(&self, mut v: (u32, u32), keys: &[u32]) -> (u32, u32) {
        for &k in keys {
            v = (v.1, v.0 ^ self.sbox.g(v.1, k));
        }
        v
    }
}

impl BlockCipher for Magma {}

impl_simple_block_encdec!(
    Magma, U8, magma, block,
    encrypt: {
        let mut b = block.clone_in();
        magma.process(&mut b, &schedule::ENCRYPT);
        *block.get_out() = b;
    }
    decrypt: {
        let mut b = block.clone_in();
        magma.process(&mut b, &schedule::DECRYPT);
        *block.get_out() = b;
    }
);

impl AlgorithmName for Magma {
    fn write_alg_name(f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Magma")
    }
}

impl fmt::Debug for Magma {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Magma")
            .field("sbox", &self.sbox)
            .field("legacy", &self.legacy)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "zeroize")]
#[cfg_attr(docsrs, doc(cfg(feature = "zeroize")))]
impl Drop for Magma {
    fn drop(&mut self) {
        self.key.zeroize();
    }
}

#[cfg(feature = "zeroize")]
#[cfg_attr(docsrs, doc(cfg(feature = "zeroize")))]
impl ZeroizeOnDrop for Magma {}

fn to_block(block: &[u8]) -> Result<[u8; BLOCK_SIZE]> {
    block.try_into().map_err(|_| Error::InvalidBlockSize)
}

fn to_u32(chunk: &[u8]) -> u32 {
    u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])
}
