//! Fuzz target for block generation from arbitrary source bytes
//!
//! Feeds fuzzer-chosen bytes through a reader-backed source in both modes.
//! Generation must never panic, must reject short input, and must never
//! write a partial block.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use seedmix_crypto::hash::sha3_512;
use seedmix_crypto::random::ReaderSource;
use seedmix_crypto::{BLOCK_SIZE, COMBINED_SIZE, EntropyError, Mode, OUTPUT_SIZE, run};
use std::io::Cursor;

#[derive(Debug, Arbitrary)]
struct SourceInput {
    mixed: bool,
    data: Vec<u8>,
}

fuzz_target!(|input: SourceInput| {
    let mode = if input.mixed { Mode::Mixed } else { Mode::Raw };
    let needed = if input.mixed { COMBINED_SIZE } else { BLOCK_SIZE };

    let mut source = ReaderSource::new(Cursor::new(input.data.clone()));
    let mut out = Vec::new();

    match run(mode, &mut source, &mut out) {
        Ok(()) => {
            assert!(input.data.len() >= needed);
            assert_eq!(out.len(), OUTPUT_SIZE);
            let expected = match mode {
                Mode::Raw => input.data[..BLOCK_SIZE].to_vec(),
                Mode::Mixed => sha3_512(&input.data[..COMBINED_SIZE]).to_vec(),
            };
            assert_eq!(out, expected);
        }
        Err(EntropyError::ShortRead { expected, actual }) => {
            assert!(input.data.len() < needed);
            assert_eq!(expected, BLOCK_SIZE);
            assert!(actual < expected);
            assert!(out.is_empty());
        }
        Err(e) => panic!("unexpected error from in-memory source: {e}"),
    }
});
