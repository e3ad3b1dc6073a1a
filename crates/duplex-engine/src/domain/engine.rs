//! Squaring engine orchestration.
//!
//! Validation, column construction, and carry propagation wired into one
//! pure call. No state survives between invocations.

use crate::domain::carry::propagate;
use crate::domain::digits::DigitSequence;
use crate::domain::duplex::column_sums;
use crate::error::EngineError;

/// Square a validated digit sequence.
///
/// Returns the little-endian digits of `value(input)²`, with length
/// between 2n-1 and 2n plus non-significant trailing zero slots. Identical
/// input always yields identical output; the engine performs no I/O and
/// retains nothing across calls.
pub fn square(input: &DigitSequence) -> Result<Vec<u8>, EngineError> {
    let digits = input.as_slice();
    assert_column_bound(digits.len())?;
    let sums = column_sums(digits)?;
    propagate(&sums)
}

/// Validate a raw digit slice and square it.
///
/// Convenience entry point for callers that have not built a
/// [`DigitSequence`] yet. Fails before any computation begins if the
/// slice is empty or contains a digit outside [0,9].
pub fn square_digits(digits: &[u8]) -> Result<Vec<u8>, EngineError> {
    let seq = DigitSequence::from_slice(digits)?;
    square(&seq)
}

/// Normalization pass-through used by preprocessing consumers.
///
/// Computes the squares needed for variance-style normalization via the
/// duplex engine; the observable output is exactly the engine output.
pub fn normalize(values: &[u8]) -> Result<Vec<u8>, EngineError> {
    square_digits(values)
}

/// Assert that the 81n column bound fits the u64 accumulator.
///
/// Every column total is bounded by 81n for an n-digit input. The bound
/// holds for any input that fits in memory, but the engine checks it
/// explicitly instead of assuming it.
fn assert_column_bound(n: usize) -> Result<(), EngineError> {
    match (n as u64).checked_mul(81) {
        Some(_) => Ok(()),
        None => Err(EngineError::ArithmeticOverflow { columns: 2 * n - 1 }),
    }
}
