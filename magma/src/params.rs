use crate::{Sbox, SboxId};

/// Cipher instance configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Params {
    /// Substitution table of the round function.
    pub sbox: Sbox,
    /// Use GOST 28147-89 key and block byte order.
    pub legacy: bool,
}

impl Params {
    /// GOST R 34.12-2015 byte order with the given S-box.
    pub fn new(sbox: impl Into<Sbox>) -> Self {
        Self {
            sbox: sbox.into(),
            legacy: false,
        }
    }

    /// GOST 28147-89 byte order with the given S-box.
    pub fn legacy(sbox: impl Into<Sbox>) -> Self {
        Self {
            sbox: sbox.into(),
            legacy: true,
        }
    }
}

impl From<SboxId> for Params {
    fn from(id: SboxId) -> Self {
        Params::new(id)
    }
}
