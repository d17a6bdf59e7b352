//! Randomized encode/corrupt/correct cycles over random configurations
//!
//! Seeds are fixed so failures reproduce.

use rand::rngs::StdRng;
use rand::seq::index::sample;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use rscodec::reed_solomon::{ReedSolomon, RsError};

/// Encode random data, overwrite up to `max_errors` random symbols with random
/// values and return (original codeword, received block, symbols that differ)
fn corrupted_block(
    rs: &ReedSolomon,
    rng: &mut StdRng,
    data_len: usize,
    max_errors: usize,
) -> (Vec<u8>, Vec<u8>, usize) {
    let mut codeword: Vec<u8> = (0..data_len).map(|_| rng.random()).collect();
    codeword.resize(data_len + rs.parity_len(), 0);
    rs.encode_in_place(data_len, &mut codeword).unwrap();

    let mut received = codeword.clone();
    let count = rng.random_range(0..=max_errors);
    for _ in 0..count {
        let position = rng.random_range(0..received.len());
        received[position] = rng.random();
    }

    let differing = received
        .iter()
        .zip(&codeword)
        .filter(|(a, b)| a != b)
        .count();
    (codeword, received, differing)
}

#[test]
fn test_random_configurations_within_capacity() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..10 {
        let parity_len = rng.random_range(10..=50);
        let offset = rng.random_range(0..=254);
        let rs = ReedSolomon::new(0x12d, parity_len, offset).unwrap();
        let mut decoder = rs.decoder();

        for _ in 0..100 {
            let data_len = rng.random_range(10..=rs.max_data_len());
            let (codeword, mut received, errors) =
                corrupted_block(&rs, &mut rng, data_len, parity_len / 2);

            assert_eq!(
                decoder.correct(data_len, &mut received),
                Ok(errors),
                "parity {} offset {} data {}",
                parity_len,
                offset,
                data_len
            );
            assert_eq!(received, codeword);
        }
    }
}

#[test]
fn test_small_fields_within_capacity() {
    let mut rng = StdRng::seed_from_u64(16);

    for polynomial in [0x13u32, 0x25, 0x43, 0x89] {
        let size = (1usize << (31 - polynomial.leading_zeros())) - 1;
        for _ in 0..50 {
            let parity_len = rng.random_range(2..size);
            let offset = rng.random_range(0..size as u32);
            let rs = ReedSolomon::new(polynomial, parity_len, offset).unwrap();
            let data_len = rng.random_range(0..=rs.max_data_len());

            let mut codeword: Vec<u8> = (0..data_len)
                .map(|_| rng.random_range(0..=size as u8))
                .collect();
            codeword.resize(data_len + parity_len, 0);
            rs.encode_in_place(data_len, &mut codeword).unwrap();

            let errors = rng.random_range(0..=rs.capacity());
            let mut received = codeword.clone();
            for position in sample(&mut rng, received.len(), errors) {
                received[position] ^= rng.random_range(1..=size as u8);
            }

            assert_eq!(rs.correct(data_len, &mut received), Ok(errors));
            assert_eq!(received, codeword);
        }
    }
}

#[test]
fn test_beyond_capacity_is_mostly_detected() {
    let mut rng = StdRng::seed_from_u64(7);
    let rs = ReedSolomon::new(0x12d, 10, 1).unwrap();
    let mut decoder = rs.decoder();
    let mut detected = 0;
    let trials = 200;

    for _ in 0..trials {
        let data_len = rng.random_range(20..=200);
        let mut codeword: Vec<u8> = (0..data_len).map(|_| rng.random()).collect();
        codeword.resize(data_len + 10, 0);
        rs.encode_in_place(data_len, &mut codeword).unwrap();

        let mut received = codeword.clone();
        for position in sample(&mut rng, received.len(), rs.capacity() + 1) {
            received[position] ^= rng.random_range(1..=255u8);
        }
        let before = received.clone();

        match decoder.correct(data_len, &mut received) {
            Err(RsError::Uncorrectable(_)) => {
                detected += 1;
                assert_eq!(received, before);
            }
            // A miscorrection must still land on some codeword
            Ok(_) => assert!(rs.is_codeword(data_len, &received).unwrap()),
            Err(e) => panic!("unexpected error: {}", e),
        }
    }

    assert!(detected >= trials * 9 / 10, "only {} detected", detected);
}

#[test]
fn test_shared_codec_across_threads() {
    let rs = ReedSolomon::new(0x11d, 32, 0).unwrap();

    let failures: usize = (0..64u64)
        .into_par_iter()
        .map(|seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut decoder = rs.decoder();
            let mut failures = 0;
            for _ in 0..20 {
                let data_len = rng.random_range(1..=rs.max_data_len());
                let (codeword, mut received, errors) =
                    corrupted_block(&rs, &mut rng, data_len, rs.capacity());
                if decoder.correct(data_len, &mut received) != Ok(errors) || received != codeword {
                    failures += 1;
                }
            }
            failures
        })
        .sum();

    assert_eq!(failures, 0);
}

#[test]
fn test_same_input_same_output() {
    let rs = ReedSolomon::new(0x12d, 20, 3).unwrap();
    let mut rng = StdRng::seed_from_u64(99);
    let (_, received, _) = corrupted_block(&rs, &mut rng, 120, 15);

    let mut first = received.clone();
    let mut second = received.clone();
    assert_eq!(rs.correct(120, &mut first), rs.correct(120, &mut second));
    assert_eq!(first, second);
}
