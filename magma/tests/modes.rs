//! Generic mode crates driving Magma through the `cipher` block traits.
//! Vectors from GOST R 34.13-2015.
use cmac::{Cmac, CmacCore, Mac};
use ctr::cipher::{crypto_common::InnerInit, InnerIvInit, StreamCipher};
use ctr::{Ctr64BE, CtrCore};
use hex_literal::hex;
use magma::Magma;

const KEY: [u8; 32] = hex!("
    ffeeddccbbaa99887766554433221100
    f0f1f2f3f4f5f6f7f8f9fafbfcfdfeff
");
const PLAINTEXT: [u8; 32] = hex!("
    92def06b3c130a59db54c704f8189d20
    4a98fb2e67a8024c8912409b17b57e41
");

#[test]
fn ctr_keystream() {
    let ciphertext = hex!("
        4e98110c97b7b93c3e250d93d6e85d69
        136d868807b2dbef568eb680ab52a12d
    ");
    let iv = hex!("1234567800000000");

    let mode = || {
        let core = CtrCore::inner_iv_init(Magma::new(&KEY).unwrap(), &iv.into());
        Ctr64BE::<Magma>::from_core(core)
    };

    let mut buf = PLAINTEXT;
    mode().apply_keystream(&mut buf);
    assert_eq!(buf, ciphertext);

    mode().apply_keystream(&mut buf);
    assert_eq!(buf, PLAINTEXT);
}

#[test]
fn cmac_tag() {
    let mut mac = Cmac::<Magma>::from_core(CmacCore::inner_init(Magma::new(&KEY).unwrap()));
    mac.update(&PLAINTEXT);
    assert_eq!(mac.finalize().into_bytes()[..], hex!("154e72102030c5bb"));
}
