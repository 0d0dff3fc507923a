use crate::{Error, Result};
use core::{fmt, str::FromStr};

type Table = [[u8; 16]; 8];

/// Substitution table of the GOST 28147-89 round function.
///
/// Row `i` substitutes nibble `i` of the 32-bit round value, i.e. bits
/// `4 * i..4 * i + 4`, so the first row acts on the least significant nibble.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Sbox(Table);

impl Sbox {
    /// `id-tc26-gost-28147-param-Z`, the table fixed by GOST R 34.12-2015.
    pub const TC26_Z: Sbox = Sbox([
        [12, 4, 6, 2, 10, 5, 11, 9, 14, 8, 13, 7, 0, 3, 15, 1],
        [6, 8, 2, 3, 9, 10, 5, 12, 1, 14, 4, 7, 11, 13, 0, 15],
        [11, 3, 5, 8, 2, 15, 10, 13, 14, 1, 7, 4, 12, 9, 6, 0],
        [12, 8, 2, 1, 13, 4, 15, 6, 7, 0, 10, 5, 3, 14, 9, 11],
        [7, 15, 5, 10, 8, 1, 6, 13, 0, 9, 3, 14, 11, 4, 2, 12],
        [5, 13, 15, 6, 9, 2, 12, 10, 11, 7, 8, 1, 4, 3, 14, 0],
        [8, 14, 2, 5, 6, 9, 1, 12, 15, 4, 11, 0, 13, 10, 3, 7],
        [1, 7, 14, 13, 0, 5, 8, 3, 4, 15, 10, 6, 9, 12, 11, 2],
    ]);

    /// `id-Gost28147-89-CryptoPro-A-ParamSet` (RFC 4357).
    pub const CRYPTO_PRO_A: Sbox = Sbox([
        [9, 6, 3, 2, 8, 11, 1, 7, 10, 4, 14, 15, 12, 0, 13, 5],
        [3, 7, 14, 9, 8, 10, 15, 0, 5, 2, 6, 12, 11, 4, 13, 1],
        [14, 4, 6, 2, 11, 3, 13, 8, 12, 15, 5, 10, 0, 7, 1, 9],
        [14, 7, 10, 12, 13, 1, 3, 9, 0, 2, 11, 4, 15, 8, 5, 6],
        [11, 5, 1, 9, 8, 13, 15, 0, 14, 4, 2, 3, 12, 7, 10, 6],
        [3, 10, 13, 12, 1, 2, 0, 11, 7, 5, 9, 4, 8, 15, 14, 6],
        [1, 13, 2, 9, 7, 10, 6, 0, 8, 12, 4, 5, 15, 3, 11, 14],
        [11, 10, 15, 5, 0, 12, 14, 8, 6, 2, 3, 9, 1, 7, 13, 4],
    ]);

    /// `id-Gost28147-89-TestParamSet` (RFC 4357).
    pub const GOST_28147_TEST: Sbox = Sbox([
        [4, 2, 15, 5, 9, 1, 0, 8, 14, 3, 11, 12, 13, 7, 10, 6],
        [12, 9, 15, 14, 8, 1, 3, 10, 2, 7, 4, 13, 6, 0, 11, 5],
        [13, 8, 14, 12, 7, 3, 9, 10, 1, 5, 2, 4, 6, 15, 0, 11],
        [14, 9, 11, 2, 5, 15, 7, 1, 0, 13, 12, 6, 10, 4, 3, 8],
        [3, 14, 5, 9, 6, 8, 0, 13, 10, 11, 7, 12, 2, 1, 15, 4],
        [8, 15, 6, 11, 1, 9, 12, 5, 13, 3, 7, 10, 0, 14, 2, 4],
        [9, 11, 12, 0, 3, 6, 7, 5, 4, 8, 14, 15, 1, 10, 2, 13],
        [12, 6, 5, 2, 11, 0, 9, 13, 3, 14, 7, 10, 15, 4, 1, 8],
    ]);

    /// `id-GostR3411-94-TestParamSet`, the table of the GOST R 34.11-94 test
    /// vectors.
    pub const GOSTR_3411_94_TEST: Sbox = Sbox([
        [4, 10, 9, 2, 13, 8, 0, 14, 6, 11, 1, 12, 7, 15, 5, 3],
        [14, 11, 4, 12, 6, 13, 15, 10, 2, 3, 8, 1, 0, 7, 5, 9],
        [5, 8, 1, 13, 10, 3, 4, 2, 14, 15, 12, 7, 6, 0, 9, 11],
        [7, 13, 10, 1, 0, 8, 9, 15, 14, 4, 6, 12, 11, 2, 5, 3],
        [6, 12, 7, 1, 5, 15, 13, 8, 4, 10, 9, 14, 0, 3, 11, 2],
        [4, 11, 10, 0, 7, 2, 1, 13, 3, 6, 8, 5, 9, 12, 15, 14],
        [13, 11, 4, 1, 3, 15, 5, 9, 0, 10, 14, 7, 6, 8, 2, 12],
        [1, 15, 13, 0, 5, 7, 10, 4, 9, 2, 3, 14, 6, 11, 8, 12],
    ]);

    /// Create S-box from a custom table.
    ///
    /// Returns [`Error::InvalidSbox`] if any entry does not fit into four bits.
    pub fn new(table: [[u8; 16]; 8]) -> Result<Self> {
        if table.iter().flatten().any(|&v| v > 0x0f) {
            return Err(Error::InvalidSbox);
        }
        Ok(Sbox(table))
    }

    /// Raw substitution table.
    pub fn table(&self) -> &[[u8; 16]; 8] {
        &self.0
    }

    /// T transformation: nibble-wise substitution of `a`.
    #[inline]
    pub(crate) fn t(&self, a: u32) -> u32 {
        let mut v = 0;
        for (i, row) in self.0.iter().enumerate() {
            let shift = 4 * i;
            let nibble = ((a >> shift) & 0x0f) as usize;
            v |= u32::from(row[nibble]) << shift;
        }
        v
    }

    /// G transformation: round function applied to half-block `a` under round
    /// key `k`.
    #[inline]
    pub(crate) fn g(&self, a: u32, k: u32) -> u32 {
        self.t(a.wrapping_add(k)).rotate_left(11)
    }
}

impl Default for Sbox {
    fn default() -> Self {
        Sbox::TC26_Z
    }
}

impl fmt::Debug for Sbox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match SboxId::ALL.iter().find(|id| id.sbox() == *self) {
            Some(id) => write!(f, "Sbox({})", id),
            None => f.debug_tuple("Sbox").field(&self.0).finish(),
        }
    }
}

impl From<SboxId> for Sbox {
    fn from(id: SboxId) -> Self {
        id.sbox()
    }
}

/// Named S-box parameter sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum SboxId {
    /// `id-tc26-gost-28147-param-Z`
    Tc26Z,
    /// `id-Gost28147-89-CryptoPro-A-ParamSet`
    CryptoProA,
    /// `id-Gost28147-89-TestParamSet`
    Gost28147Test,
    /// `id-GostR3411-94-TestParamSet`
    GostR341194Test,
}

impl SboxId {
    /// All named parameter sets.
    pub const ALL: [SboxId; 4] = [
        SboxId::Tc26Z,
        SboxId::CryptoProA,
        SboxId::Gost28147Test,
        SboxId::GostR341194Test,
    ];

    /// Substitution table of the parameter set.
    pub const fn sbox(self) -> Sbox {
        match self {
            SboxId::Tc26Z => Sbox::TC26_Z,
            SboxId::CryptoProA => Sbox::CRYPTO_PRO_A,
            SboxId::Gost28147Test => Sbox::GOST_28147_TEST,
            SboxId::GostR341194Test => Sbox::GOSTR_3411_94_TEST,
        }
    }

    /// Object identifier name of the parameter set.
    pub const fn name(self) -> &'static str {
        match self {
            SboxId::Tc26Z => "id-tc26-gost-28147-param-Z",
            SboxId::CryptoProA => "id-Gost28147-89-CryptoPro-A-ParamSet",
            SboxId::Gost28147Test => "id-Gost28147-89-TestParamSet",
            SboxId::GostR341194Test => "id-GostR3411-94-TestParamSet",
        }
    }
}

impl Default for SboxId {
    fn default() -> Self {
        SboxId::Tc26Z
    }
}

impl fmt::Display for SboxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SboxId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        SboxId::ALL
            .iter()
            .copied()
            .find(|id| id.name() == s)
            .ok_or(Error::InvalidSbox)
    }
}
