//! GOST 28147-89 key wrapping ([RFC 4357] §6.1), CryptoPro key wrapping
//! (§6.3) with CryptoPro KEK diversification (§6.5), and the KExp15/KImp15
//! key export of GOST R 1323565.1.017-2018 over the [Magma] block cipher.
//!
//! A wrapped key is laid out as `UKM (8) || encrypted CEK || MAC (4)`.
//!
//! # Examples
//! ```
//! use gost_kw::{unwrap_cryptopro, wrap_cryptopro, magma::SboxId};
//! use hex_literal::hex;
//!
//! let kek = hex!("ec44b411637fc66b680e0e721642b99bb1e792ee183cab872254d5850e692ed9");
//! let cek = hex!("76349ba2907d81428f8f1bc06091a2b5bb424d709bb3d1eb47daaf7f47cd3703");
//! let ukm = hex!("882676dc2ccd53e3");
//! let sbox = SboxId::CryptoProA.sbox();
//!
//! let wrapped = wrap_cryptopro(&kek, &cek, &ukm, sbox).unwrap();
//! assert_eq!(wrapped.len(), 44);
//! assert_eq!(unwrap_cryptopro(&kek, &wrapped, sbox).unwrap(), cek);
//! ```
//!
//! [RFC 4357]: https://www.rfc-editor.org/rfc/rfc4357
//! [Magma]: magma::Magma
#![no_std]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub use magma;

mod diversify;
mod error;
mod kexp;
mod wrap;

pub use diversify::cp_kek_diversify;
pub use error::{Error, Result};
pub use kexp::{kexp15, kimp15, KEXP15_IV_SIZE};
pub use wrap::{unwrap, unwrap_cryptopro, unwrap_sized, wrap, wrap_cryptopro};

/// Size of the user keying material.
pub const UKM_SIZE: usize = 8;
/// Size of the MAC appended to a wrapped key.
pub const MAC_SIZE: usize = 4;
/// Size of the content encryption key accepted by [`unwrap`].
pub const CEK_SIZE: usize = 32;
/// Size of a wrapped 32-byte key.
pub const WRAPPED_SIZE: usize = UKM_SIZE + CEK_SIZE + MAC_SIZE;
