//! Cryptographic test vectors.
//!
//! SHA3-512 vectors from NIST FIPS 202 examples, plus a fixed-input vector
//! for the mixed output path computed with an independent SHA3 implementation.

use seedmix_crypto::hash::{sha3_512, sha3_512_into};
use seedmix_crypto::mix::{CombinedBuffer, mixed_block};
use seedmix_crypto::random::{RandomBlock, ReaderSource};
use seedmix_crypto::{BLOCK_SIZE, Mode, run};
use std::io::Cursor;

const MIXED_00_01_02: &str = "46982d9537eb1f9131e4c78ff0f574c3f3b3e3107fae003be0cdcbf264ed3617\
                              fd71e3d4998ed45c8d4b68c6748891204ab032acdcd727e51257cd87b0d77f85";

// ============================================================================
// SHA3-512 (FIPS 202)
// ============================================================================

#[test]
fn test_sha3_512_abc() {
    let expected = hex::decode(
        "b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e\
         10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0",
    )
    .unwrap();
    assert_eq!(sha3_512(b"abc").to_vec(), expected);
}

#[test]
fn test_sha3_512_empty() {
    let expected = hex::decode(
        "a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a6\
         15b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26",
    )
    .unwrap();
    assert_eq!(sha3_512(b"").to_vec(), expected);
}

#[test]
fn test_sha3_512_into_abc() {
    let mut out = [0u8; 64];
    sha3_512_into(b"abc", &mut out);

    assert_eq!(out, sha3_512(b"abc"));
}

// ============================================================================
// Mixed output
// ============================================================================

#[test]
fn test_combined_buffer_vector() {
    let blocks = [
        RandomBlock::from_bytes([0x00; BLOCK_SIZE]),
        RandomBlock::from_bytes([0x01; BLOCK_SIZE]),
        RandomBlock::from_bytes([0x02; BLOCK_SIZE]),
    ];

    let digest = CombinedBuffer::from_blocks(&blocks).digest();
    assert_eq!(digest.to_vec(), hex::decode(MIXED_00_01_02).unwrap());
}

#[test]
fn test_mixed_block_vector() {
    let mut stream = vec![0x00u8; BLOCK_SIZE];
    stream.extend(std::iter::repeat_n(0x01u8, BLOCK_SIZE));
    stream.extend(std::iter::repeat_n(0x02u8, BLOCK_SIZE));

    let mut source = ReaderSource::new(Cursor::new(stream));
    let digest = mixed_block(&mut source).unwrap();

    assert_eq!(digest.to_vec(), hex::decode(MIXED_00_01_02).unwrap());
}

#[test]
fn test_mixed_run_vector() {
    let mut stream = vec![0x00u8; BLOCK_SIZE];
    stream.extend(std::iter::repeat_n(0x01u8, BLOCK_SIZE));
    stream.extend(std::iter::repeat_n(0x02u8, BLOCK_SIZE));

    let mut source = ReaderSource::new(Cursor::new(stream));
    let mut out = Vec::new();
    run(Mode::Mixed, &mut source, &mut out).unwrap();

    assert_eq!(out, hex::decode(MIXED_00_01_02).unwrap());
}
