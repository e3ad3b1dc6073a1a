//! # Engine Property Tests
//!
//! The engine's whole-pipeline invariants cross-checked against an
//! independent bignum implementation:
//!
//! 1. **Round trip**: decode → square → decode equals V² exactly
//! 2. **Carry conservation**: renormalization never loses or misplaces value
//! 3. **Canonical output**: every emitted digit is in [0,9]
//! 4. **Failure atomicity**: invalid input fails before any output exists

#[cfg(test)]
mod tests {
    use crate::decode_little_endian;
    use duplex_engine::{column_sums, propagate, square_digits, EngineError};
    use num_bigint::BigUint;
    use proptest::prelude::*;
    use rand::Rng;

    #[test]
    fn test_round_trip_across_size_sweep() {
        let mut rng = rand::thread_rng();
        for n in 1..=120 {
            let digits: Vec<u8> = (0..n).map(|_| rng.gen_range(0..10)).collect();
            let output = square_digits(&digits).expect("valid digits");

            let value = decode_little_endian(&digits);
            assert_eq!(
                decode_little_endian(&output),
                &value * &value,
                "square mismatch at n={}",
                n
            );
            assert!(output.iter().all(|&d| d <= 9), "non-canonical digit at n={}", n);
        }
    }

    #[test]
    fn test_adversarial_carry_chain_fifty_nines() {
        // 10^50 - 1 squared: the longest carry chain an n=50 input can force
        let digits = vec![9u8; 50];
        let output = square_digits(&digits).expect("valid digits");

        let value = decode_little_endian(&digits);
        assert_eq!(decode_little_endian(&output), &value * &value);

        // (10^50 - 1)² = 10^100 - 2·10^50 + 1 has exactly 100 digits
        let significant = output.iter().rposition(|&d| d != 0).unwrap() + 1;
        assert_eq!(significant, 100);
    }

    #[test]
    fn test_carry_conservation_on_raw_column_totals() {
        let mut rng = rand::thread_rng();
        for _ in 0..30 {
            let n = rng.gen_range(1..80);
            let digits: Vec<u8> = (0..n).map(|_| rng.gen_range(0..10)).collect();
            let sums = column_sums(&digits).expect("valid digits");
            let output = propagate(&sums).expect("headroom covers drain");

            let mut expected = BigUint::from(0u32);
            let ten = BigUint::from(10u32);
            let mut place = BigUint::from(1u32);
            for &s in &sums {
                expected += &place * BigUint::from(s);
                place *= &ten;
            }
            assert_eq!(decode_little_endian(&output), expected);
        }
    }

    #[test]
    fn test_invalid_inputs_fail_without_partial_output() {
        assert_eq!(square_digits(&[]), Err(EngineError::EmptySequence));
        assert_eq!(
            square_digits(&[5, 10]),
            Err(EngineError::DigitOutOfRange { index: 1, value: 10 })
        );
        // u8 cannot encode -1; the gateway rejects negatives before
        // narrowing, which is covered in gateway_api
        assert_eq!(
            square_digits(&[255]),
            Err(EngineError::DigitOutOfRange { index: 0, value: 255 })
        );
    }

    #[test]
    fn test_leading_zero_digits_are_tolerated() {
        // Canonical-form trimming is the caller's job; zeros above the
        // most significant digit must not change the value
        let output_padded = square_digits(&[2, 3, 0, 0]).expect("valid digits");
        let output_plain = square_digits(&[2, 3]).expect("valid digits");
        assert_eq!(
            decode_little_endian(&output_padded),
            decode_little_endian(&output_plain)
        );
    }

    proptest! {
        #[test]
        fn prop_round_trip_equals_reference_square(
            digits in proptest::collection::vec(0u8..10, 1..200)
        ) {
            let output = square_digits(&digits).unwrap();
            let value = decode_little_endian(&digits);
            prop_assert_eq!(decode_little_endian(&output), &value * &value);
        }

        #[test]
        fn prop_output_length_within_bounds(
            digits in proptest::collection::vec(0u8..10, 1..200)
        ) {
            let n = digits.len();
            let output = square_digits(&digits).unwrap();
            // Buffer is at least 2n-1 slots and every slot is a digit
            prop_assert!(output.len() >= 2 * n - 1);
            prop_assert!(output.iter().all(|&d| d <= 9));
            // Significant length never exceeds 2n
            let significant = output.iter().rposition(|&d| d != 0).map_or(0, |p| p + 1);
            prop_assert!(significant <= 2 * n);
        }
    }
}
