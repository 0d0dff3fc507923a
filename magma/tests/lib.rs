#![cfg_attr(rustfmt, rustfmt_skip)]

use cipher::{generic_array::GenericArray, BlockDecrypt, BlockEncrypt};
use hex_literal::hex;
use magma::{schedule, Block, Error, Magma, Params, Sbox, SboxId};

const KEY: [u8; 32] = hex!("
    FFEEDDCCBBAA99887766554433221100
    F0F1F2F3F4F5F6F7F8F9FAFBFCFDFEFF
");

/// Example vectors from GOST 34.12-2018
#[test]
fn magma() {
    let plaintext = hex!("FEDCBA9876543210");
    let ciphertext = hex!("4EE901E5C2D8CA3D");

    let cipher = Magma::new(&KEY).unwrap();

    let mut block = GenericArray::clone_from_slice(&plaintext);
    cipher.encrypt_block(&mut block);
    assert_eq!(&ciphertext, block.as_slice());

    cipher.decrypt_block(&mut block);
    assert_eq!(&plaintext, block.as_slice());

    assert_eq!(cipher.encrypt(&plaintext).unwrap(), ciphertext);
    assert_eq!(cipher.decrypt(&ciphertext).unwrap(), plaintext);

    // test that encrypt_blocks/decrypt_blocks work correctly
    let mut blocks = [Block::default(); 101];
    for (i, block) in blocks.iter_mut().enumerate() {
        block.iter_mut().enumerate().for_each(|(j, b)| {
            *b = (i + j) as u8;
        });
    }

    let mut blocks2 = blocks.clone();
    let blocks_cpy = blocks.clone();

    cipher.encrypt_blocks(&mut blocks);
    assert!(blocks[..] != blocks_cpy[..]);
    for block in blocks2.iter_mut() {
        cipher.encrypt_block(block);
    }
    assert_eq!(blocks[..], blocks2[..]);

    cipher.decrypt_blocks(&mut blocks);
    assert_eq!(blocks[..], blocks_cpy[..]);
    for block in blocks2.iter_mut().rev() {
        cipher.decrypt_block(block);
    }
    assert_eq!(blocks2[..], blocks_cpy[..]);
}

/// Same key and plaintext with the remaining named parameter sets
#[test]
fn test_param_sets() {
    let plaintext = hex!("FEDCBA9876543210");
    let cases = [
        (SboxId::Gost28147Test, hex!("C7DA9DD6085F3881")),
        (SboxId::GostR341194Test, hex!("D2C58A3A9B036ABD")),
    ];
    for &(id, ciphertext) in cases.iter() {
        let cipher = Magma::with_params(&KEY, Params::new(id)).unwrap();
        assert_eq!(cipher.encrypt(&plaintext).unwrap(), ciphertext, "{}", id);
        assert_eq!(cipher.decrypt(&ciphertext).unwrap(), plaintext, "{}", id);
    }
}

#[test]
fn round_keys() {
    let expected = [
        0xffeeddcc, 0xbbaa9988, 0x77665544, 0x33221100,
        0xf0f1f2f3, 0xf4f5f6f7, 0xf8f9fafb, 0xfcfdfeff,
        0xffeeddcc, 0xbbaa9988, 0x77665544, 0x33221100,
        0xf0f1f2f3, 0xf4f5f6f7, 0xf8f9fafb, 0xfcfdfeff,
        0xffeeddcc, 0xbbaa9988, 0x77665544, 0x33221100,
        0xf0f1f2f3, 0xf4f5f6f7, 0xf8f9fafb, 0xfcfdfeff,
        0xfcfdfeff, 0xf8f9fafb, 0xf4f5f6f7, 0xf0f1f2f3,
        0x33221100, 0x77665544, 0xbbaa9988, 0xffeeddcc,
    ];
    assert_eq!(schedule::derive(&KEY, &schedule::ENCRYPT), expected);

    let cipher = Magma::new(&KEY).unwrap();
    assert_eq!(cipher.round_keys(&schedule::ENCRYPT), expected);

    let mut reversed = expected;
    reversed.reverse();
    assert_eq!(cipher.round_keys(&schedule::DECRYPT), reversed);
    assert_eq!(cipher.round_keys(&schedule::MAC)[..], expected[..16]);

    let legacy = Magma::with_params(&KEY, Params::legacy(SboxId::Tc26Z)).unwrap();
    assert_eq!(legacy.round_keys(&schedule::MAC)[..2], [0xccddeeff, 0x8899aabb]);
}

#[test]
fn transform_g() {
    let cases = [
        (0x87654321, 0xfedcba98, 0xfdcbc20c),
        (0xfdcbc20c, 0x87654321, 0x7e791a4b),
        (0x7e791a4b, 0xfdcbc20c, 0xc76549ec),
        (0xc76549ec, 0x7e791a4b, 0x9791c849),
    ];
    let cipher = Magma::new(&KEY).unwrap();
    for &(a, k, expected) in cases.iter() {
        assert_eq!(cipher.transform_g(a, k), expected);
    }
}

#[test]
fn transform_t() {
    let cases = [
        (0xfdb97531, 0x2a196f34),
        (0x2a196f34, 0xebd9f03a),
        (0xebd9f03a, 0xb039bb3d),
        (0xb039bb3d, 0x68695433),
    ];
    let cipher = Magma::new(&KEY).unwrap();
    for &(a, expected) in cases.iter() {
        assert_eq!(cipher.transform_t(a), expected);
    }
}

#[test]
fn proceed_generalizes_encrypt() {
    let cipher = Magma::new(&KEY).unwrap();
    let block = hex!("FEDCBA9876543210");
    assert_eq!(
        cipher.proceed(&block, &schedule::ENCRYPT).unwrap(),
        cipher.encrypt(&block).unwrap(),
    );
    assert_eq!(
        cipher.proceed(&block, &schedule::DECRYPT).unwrap(),
        cipher.decrypt(&block).unwrap(),
    );
    assert_eq!(cipher.proceed(&block[..7], &schedule::MAC), Err(Error::InvalidBlockSize));
}

#[test]
fn invalid_keys() {
    assert_eq!(Magma::new(&[1u8; 31]).unwrap_err(), Error::InvalidKeyLength);
    assert_eq!(Magma::new(&[1u8; 33]).unwrap_err(), Error::InvalidKeyLength);
    assert_eq!(Magma::new(&[0u8; 32]).unwrap_err(), Error::InvalidKeyFormat);
    let legacy = Params::legacy(SboxId::CryptoProA);
    assert_eq!(Magma::with_params(&[0u8; 32], legacy).unwrap_err(), Error::InvalidKeyFormat);
}

#[test]
fn invalid_block_size() {
    let cipher = Magma::new(&KEY).unwrap();
    assert_eq!(cipher.encrypt(&[0u8; 7]), Err(Error::InvalidBlockSize));
    assert_eq!(cipher.decrypt(&[0u8; 9]), Err(Error::InvalidBlockSize));
    assert_eq!(cipher.encrypt(&[]), Err(Error::InvalidBlockSize));
}

#[test]
fn legacy_matches_reversed_modern() {
    let legacy = Magma::with_params(&KEY, Params::legacy(SboxId::CryptoProA)).unwrap();
    let modern = Magma::with_params(
        &magma::legacy::reverse_key(&KEY),
        Params::new(SboxId::CryptoProA),
    ).unwrap();
    let block = hex!("0123456789ABCDEF");

    let expected = magma::legacy::reverse_block(
        &modern.encrypt(&magma::legacy::reverse_block(&block)).unwrap(),
    );
    assert_eq!(legacy.encrypt(&block).unwrap(), expected);
    assert_eq!(legacy.decrypt(&expected).unwrap(), block);
}

#[test]
fn roundtrip_all_sboxes() {
    for &id in SboxId::ALL.iter() {
        for &legacy in [false, true].iter() {
            let params = Params { sbox: Sbox::from(id), legacy };
            for i in 0..16u8 {
                let key: [u8; 32] = core::array::from_fn(|j| i.wrapping_mul(31) ^ j as u8);
                let cipher = Magma::with_params(&key, params).unwrap();
                let block: [u8; 8] = core::array::from_fn(|j| i.wrapping_add(j as u8 * 17));

                let ct = cipher.encrypt(&block).unwrap();
                assert_ne!(ct, block);
                assert_eq!(cipher.decrypt(&ct).unwrap(), block);
                assert_eq!(cipher.encrypt(&cipher.decrypt(&block).unwrap()).unwrap(), block);
            }
        }
    }
}

#[test]
fn params_are_kept() {
    let params = Params::legacy(SboxId::GostR341194Test);
    let cipher = Magma::with_params(&KEY, params).unwrap();
    assert_eq!(cipher.params(), params);
    assert_eq!(Magma::new(&KEY).unwrap().params(), Params::default());
    assert_eq!(Params::default().sbox, Sbox::TC26_Z);
}
