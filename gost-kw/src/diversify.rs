use crate::{Result, UKM_SIZE};
use cfb_mode::cipher::{AsyncStreamCipher, InnerIvInit};
use core::convert::TryInto;
use magma::{Error, Magma, Params, Sbox, BLOCK_SIZE, KEY_SIZE};

/// CryptoPro KEK diversification ([RFC 4357] §6.5).
///
/// Eight times in a row, the key is encrypted with itself in GOST 28147-89
/// CFB mode. The IV of step `i` holds two sums of the little-endian key
/// words, split by the bits of `ukm[i]`.
///
/// [RFC 4357]: https://www.rfc-editor.org/rfc/rfc4357#section-6.5
pub fn cp_kek_diversify(kek: &[u8], ukm: &[u8; UKM_SIZE], sbox: Sbox) -> Result<[u8; KEY_SIZE]> {
    let mut out: [u8; KEY_SIZE] = kek.try_into().map_err(|_| Error::InvalidKeyLength)?;
    for &bits in ukm.iter() {
        let (mut s1, mut s2) = (0u32, 0u32);
        for (j, w) in out.chunks_exact(4).enumerate() {
            let k = u32::from_le_bytes([w[0], w[1], w[2], w[3]]);
            if bits >> j & 1 == 1 {
                s1 = s1.wrapping_add(k);
            } else {
                s2 = s2.wrapping_add(k);
            }
        }

        let mut iv = [0u8; BLOCK_SIZE];
        iv[..4].copy_from_slice(&s1.to_le_bytes());
        iv[4..].copy_from_slice(&s2.to_le_bytes());

        let cipher = Magma::with_params(&out, Params::legacy(sbox))?;
        cfb_mode::Encryptor::<Magma>::inner_iv_init(cipher, &iv.into()).encrypt(&mut out);
    }
    Ok(out)
}
