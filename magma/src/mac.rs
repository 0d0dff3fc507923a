//! GOST 28147-89 MAC ("imitovstavka").
use crate::{
    schedule::{self, MAC_ROUNDS},
    Magma, Params, Result, Sbox, BLOCK_SIZE,
};
#[cfg(feature = "zeroize")]
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Incremental GOST 28147-89 MAC.
///
/// CBC-like chaining of the 16-round reduced cipher in GOST 28147-89 byte
/// order. A trailing partial block is padded with zeros; empty input is
/// processed as a single zero block. The full 8-byte chaining value is
/// returned; GOST 28147-89 uses its first 4 bytes as the MAC.
#[derive(Clone)]
pub struct Gost89Mac {
    cipher: Magma,
    keys: [u32; MAC_ROUNDS],
    state: [u8; BLOCK_SIZE],
    buffer: [u8; BLOCK_SIZE],
    pos: usize,
}

impl Gost89Mac {
    /// Create MAC instance with initial chaining value `iv`.
    pub fn new(key: &[u8], iv: &[u8; BLOCK_SIZE], sbox: Sbox) -> Result<Self> {
        let cipher = Magma::with_params(key, Params::legacy(sbox))?;
        let keys = cipher.round_keys(&schedule::MAC);
        Ok(Self {
            cipher,
            keys,
            state: *iv,
            buffer: [0; BLOCK_SIZE],
            pos: 0,
        })
    }

    /// Feed data into the MAC.
    pub fn update(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            // the last block stays buffered until finalization
            if self.pos == BLOCK_SIZE {
                self.compress();
            }
            let n = (BLOCK_SIZE - self.pos).min(data.len());
            self.buffer[self.pos..self.pos + n].copy_from_slice(&data[..n]);
            self.pos += n;
            data = &data[n..];
        }
    }

    /// Pad the pending block and return the final chaining value.
    pub fn finalize(mut self) -> [u8; BLOCK_SIZE] {
        for b in self.buffer[self.pos..].iter_mut() {
            *b = 0;
        }
        self.compress();
        self.state
    }

    fn compress(&mut self) {
        let mut x = self.buffer;
        x.iter_mut().zip(self.state.iter()).for_each(|(a, b)| *a ^= *b);
        let v = (
            u32::from_le_bytes([x[4], x[5], x[6], x[7]]),
            u32::from_le_bytes([x[0], x[1], x[2], x[3]]),
        );
        let (a0, a1) = self.cipher.rounds(v, &self.keys);
        self.state[0..4].copy_from_slice(&a1.to_le_bytes());
        self.state[4..8].copy_from_slice(&a0.to_le_bytes());
        self.pos = 0;
    }
}

impl core::fmt::Debug for Gost89Mac {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Gost89Mac { ... }")
    }
}

#[cfg(feature = "zeroize")]
#[cfg_attr(docsrs, doc(cfg(feature = "zeroize")))]
impl Drop for Gost89Mac {
    fn drop(&mut self) {
        self.keys.zeroize();
        self.state.zeroize();
        self.buffer.zeroize();
    }
}

#[cfg(feature = "zeroize")]
#[cfg_attr(docsrs, doc(cfg(feature = "zeroize")))]
impl ZeroizeOnDrop for Gost89Mac {}

/// Compute GOST 28147-89 MAC of `data` in one call.
///
/// Pass an all-zero `iv` for the plain MAC; key wrapping uses the UKM.
pub fn mac_legacy(
    key: &[u8],
    data: &[u8],
    iv: &[u8; BLOCK_SIZE],
    sbox: Sbox,
) -> Result<[u8; BLOCK_SIZE]> {
    let mut mac = Gost89Mac::new(key, iv, sbox)?;
    mac.update(data);
    Ok(mac.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    const KEY: [u8; 32] = *b"This is message\xff length\x0032 bytes";

    #[test]
    fn chunked_update_matches_one_shot() {
        let data = [0x5au8; 37];
        let iv = hex!("0102030405060708");
        let expected = mac_legacy(&KEY, &data, &iv, Sbox::CRYPTO_PRO_A).unwrap();
        for split in 0..data.len() {
            let mut mac = Gost89Mac::new(&KEY, &iv, Sbox::CRYPTO_PRO_A).unwrap();
            mac.update(&data[..split]);
            mac.update(&[]);
            mac.update(&data[split..]);
            assert_eq!(mac.finalize(), expected, "split at {}", split);
        }
    }

    #[test]
    fn empty_input_is_one_zero_block() {
        let zero = [0u8; BLOCK_SIZE];
        assert_eq!(
            mac_legacy(&KEY, &[], &zero, Sbox::CRYPTO_PRO_A),
            mac_legacy(&KEY, &zero, &zero, Sbox::CRYPTO_PRO_A),
        );
    }

    #[cfg(feature = "zeroize")]
    #[test]
    fn key_material_is_zeroized_on_drop() {
        fn zeroize_on_drop<T: ZeroizeOnDrop>() {}
        zeroize_on_drop::<Gost89Mac>();
        zeroize_on_drop::<Magma>();
    }

    #[test]
    fn short_block_is_zero_padded() {
        let zero = [0u8; BLOCK_SIZE];
        assert_eq!(
            mac_legacy(&KEY, b"abc", &zero, Sbox::CRYPTO_PRO_A),
            mac_legacy(&KEY, b"abc\0\0\0\0\0", &zero, Sbox::CRYPTO_PRO_A),
        );
    }
}
