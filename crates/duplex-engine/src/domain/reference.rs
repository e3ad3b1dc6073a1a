//! Schoolbook reference convolution.
//!
//! The naive n² pairwise expansion the duplex shortcut is measured and
//! cross-checked against. Kept in the engine crate so tests, the
//! criterion harness, and the benchmark endpoint all compare against the
//! same oracle.

use crate::domain::carry::propagate;
use crate::domain::digits::DigitSequence;
use crate::error::EngineError;

/// Raw squaring convolution, one multiplication per (i, j) pair.
///
/// Produces the same 2n-1 column totals as the duplex driver using the
/// full n² scalar multiplications. Returns an empty vector for an empty
/// input; validation belongs to the callers that need it.
pub fn schoolbook_column_sums(digits: &[u8]) -> Vec<u64> {
    if digits.is_empty() {
        return Vec::new();
    }

    let mut sums = vec![0u64; 2 * digits.len() - 1];
    for (i, &a) in digits.iter().enumerate() {
        for (j, &b) in digits.iter().enumerate() {
            sums[i + j] += u64::from(a) * u64::from(b);
        }
    }
    sums
}

/// Full reference squaring: validate, convolve, carry-propagate.
pub fn schoolbook_square(digits: &[u8]) -> Result<Vec<u8>, EngineError> {
    let seq = DigitSequence::from_slice(digits)?;
    propagate(&schoolbook_column_sums(seq.as_slice()))
}
