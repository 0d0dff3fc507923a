use crate::{cp_kek_diversify, Error, Result, CEK_SIZE, MAC_SIZE, UKM_SIZE};
use alloc::vec::Vec;
use core::convert::TryInto;
use magma::{mac_legacy, Magma, Params, Sbox, BLOCK_SIZE};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, Zeroizing};

/// Wrap `cek` under `kek` (GOST 28147-89 key wrap).
///
/// Returns `ukm || ECB(kek, cek) || MAC(kek, cek, ukm)[..4]`, with the cipher
/// and the MAC in GOST 28147-89 byte order. `cek` must be a non-empty
/// multiple of the block size.
pub fn wrap(kek: &[u8], cek: &[u8], ukm: &[u8; UKM_SIZE], sbox: Sbox) -> Result<Vec<u8>> {
    if cek.is_empty() || cek.len() % BLOCK_SIZE != 0 {
        return Err(Error::InvalidDataLength);
    }
    let cipher = Magma::with_params(kek, Params::legacy(sbox))?;
    let mac = mac_legacy(kek, cek, ukm, sbox)?;

    let mut out = Vec::with_capacity(UKM_SIZE + cek.len() + MAC_SIZE);
    out.extend_from_slice(ukm);
    for block in cek.chunks_exact(BLOCK_SIZE) {
        out.extend_from_slice(&cipher.encrypt(block)?);
    }
    out.extend_from_slice(&mac[..MAC_SIZE]);
    Ok(out)
}

/// Unwrap a 32-byte key wrapped by [`wrap`].
///
/// `data` must be exactly 44 bytes long. The key is returned only if the
/// stored MAC matches.
pub fn unwrap(kek: &[u8], data: &[u8], sbox: Sbox) -> Result<Vec<u8>> {
    unwrap_sized(kek, data, CEK_SIZE, sbox)
}

/// Unwrap a key of `cek_len` bytes wrapped by [`wrap`].
pub fn unwrap_sized(kek: &[u8], data: &[u8], cek_len: usize, sbox: Sbox) -> Result<Vec<u8>> {
    if cek_len == 0 || cek_len % BLOCK_SIZE != 0 || data.len() != UKM_SIZE + cek_len + MAC_SIZE {
        return Err(Error::InvalidDataLength);
    }
    let (ukm, rest) = data.split_at(UKM_SIZE);
    let (cek_enc, mac) = rest.split_at(cek_len);
    let ukm: &[u8; UKM_SIZE] = ukm.try_into().map_err(|_| Error::InvalidDataLength)?;

    let cipher = Magma::with_params(kek, Params::legacy(sbox))?;
    let mut cek = Vec::with_capacity(cek_len);
    for block in cek_enc.chunks_exact(BLOCK_SIZE) {
        cek.extend_from_slice(&cipher.decrypt(block)?);
    }

    let expected = mac_legacy(kek, &cek, ukm, sbox)?;
    if bool::from(expected[..MAC_SIZE].ct_eq(mac)) {
        Ok(cek)
    } else {
        cek.zeroize();
        Err(Error::MacVerificationFailure)
    }
}

/// Wrap `cek` with the CryptoPro key wrap: [`wrap`] under the KEK
/// diversified by `ukm`.
pub fn wrap_cryptopro(kek: &[u8], cek: &[u8], ukm: &[u8; UKM_SIZE], sbox: Sbox) -> Result<Vec<u8>> {
    let kek = Zeroizing::new(cp_kek_diversify(kek, ukm, sbox)?);
    wrap(&kek[..], cek, ukm, sbox)
}

/// Unwrap a 32-byte key wrapped by [`wrap_cryptopro`].
///
/// The UKM for diversification is taken from the first 8 bytes of `data`.
pub fn unwrap_cryptopro(kek: &[u8], data: &[u8], sbox: Sbox) -> Result<Vec<u8>> {
    if data.len() != UKM_SIZE + CEK_SIZE + MAC_SIZE {
        return Err(Error::InvalidDataLength);
    }
    let ukm: &[u8; UKM_SIZE] = data[..UKM_SIZE]
        .try_into()
        .map_err(|_| Error::InvalidDataLength)?;
    let kek = Zeroizing::new(cp_kek_diversify(kek, ukm, sbox)?);
    unwrap(&kek[..], data, sbox)
}
