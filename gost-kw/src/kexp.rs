use crate::{Error, Result};
use alloc::vec::Vec;
use cmac::{Cmac, CmacCore, Mac};
use ctr::{
    cipher::{crypto_common::InnerInit, InnerIvInit, StreamCipher},
    CtrCore,
};
use magma::{Magma, BLOCK_SIZE};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

/// Size of the KExp15/KImp15 IV: half of the Magma block.
pub const KEXP15_IV_SIZE: usize = BLOCK_SIZE / 2;

type MagmaCtr = ctr::Ctr64BE<Magma>;

/// Export `key` with KExp15 (GOST R 1323565.1.017-2018).
///
/// Computes `CTR(key_enc, iv || 0, key || CMAC(key_mac, iv || key))`.
pub fn kexp15(
    key: &[u8],
    key_enc: &[u8],
    key_mac: &[u8],
    iv: &[u8; KEXP15_IV_SIZE],
) -> Result<Vec<u8>> {
    if key.is_empty() {
        return Err(Error::InvalidDataLength);
    }
    let tag = omac(key_mac, iv, key)?;
    let mut out = Vec::with_capacity(key.len() + BLOCK_SIZE);
    out.extend_from_slice(key);
    out.extend_from_slice(&tag);
    ctr_mode(key_enc, iv)?.apply_keystream(&mut out);
    Ok(out)
}

/// Import a key exported by [`kexp15`] (KImp15).
pub fn kimp15(
    kexp: &[u8],
    key_enc: &[u8],
    key_mac: &[u8],
    iv: &[u8; KEXP15_IV_SIZE],
) -> Result<Vec<u8>> {
    if kexp.len() <= BLOCK_SIZE {
        return Err(Error::InvalidDataLength);
    }
    let mut key = kexp.to_vec();
    ctr_mode(key_enc, iv)?.apply_keystream(&mut key);
    let tag = key.split_off(key.len() - BLOCK_SIZE);

    let verified = match omac(key_mac, iv, &key) {
        Ok(expected) => bool::from(expected[..].ct_eq(&tag)),
        Err(err) => {
            key.zeroize();
            return Err(err);
        }
    };
    if verified {
        Ok(key)
    } else {
        key.zeroize();
        Err(Error::MacVerificationFailure)
    }
}

fn ctr_mode(key_enc: &[u8], iv: &[u8; KEXP15_IV_SIZE]) -> Result<MagmaCtr> {
    let mut ctr_iv = [0u8; BLOCK_SIZE];
    ctr_iv[..KEXP15_IV_SIZE].copy_from_slice(iv);
    let core = CtrCore::inner_iv_init(Magma::new(key_enc)?, &ctr_iv.into());
    Ok(MagmaCtr::from_core(core))
}

fn omac(key_mac: &[u8], iv: &[u8; KEXP15_IV_SIZE], key: &[u8]) -> Result<[u8; BLOCK_SIZE]> {
    let mut mac = Cmac::<Magma>::from_core(CmacCore::inner_init(Magma::new(key_mac)?));
    mac.update(iv);
    mac.update(key);
    let mut tag = [0u8; BLOCK_SIZE];
    tag.copy_from_slice(&mac.finalize().into_bytes());
    Ok(tag)
}
