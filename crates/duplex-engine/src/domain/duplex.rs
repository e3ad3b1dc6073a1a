//! Duplex (Dwandayoga) column computation.
//!
//! The duplex of a digit window is the full w×w convolution diagonal
//! `Σ window[i]·window[j]` over `i + j = w - 1`, computed with half the
//! multiplications: each symmetric pair is multiplied once and doubled,
//! and an odd-length window adds its middle digit squared.

use crate::error::EngineError;

/// Raw (pre-carry) contribution of one digit window.
///
/// For a window of length w >= 1 returns
/// `2·Σ_{i<⌊w/2⌋} window[i]·window[w-1-i] + (w odd ? mid² : 0)`,
/// which is digit-identical to the brute-force pairwise sum over
/// `i + j = w - 1`. An empty window is undefined and fails with
/// [`EngineError::EmptyWindow`] rather than returning 0.
///
/// Column totals are bounded by 81·w, so the u64 accumulator cannot wrap
/// for any window the column driver produces (the engine asserts the
/// bound at entry).
#[inline(always)]
pub fn duplex(window: &[u8]) -> Result<u64, EngineError> {
    if window.is_empty() {
        return Err(EngineError::EmptyWindow);
    }

    let w = window.len();
    let mut val: u64 = 0;

    // Symmetric pairs, each multiplied once
    for i in 0..w / 2 {
        val += u64::from(window[i]) * u64::from(window[w - 1 - i]);
    }

    // Shift left instead of multiplying by 2
    val <<= 1;

    // Middle digit of an odd-length window pairs with itself
    if w % 2 != 0 {
        let mid = u64::from(window[w / 2]);
        val += mid * mid;
    }

    Ok(val)
}

/// Drive [`duplex`] across every output column of a squaring.
///
/// For an n-digit input and columns k = 1..=2n-1 (column k holds place
/// value 10^(k-1)), the contributing window is
/// `digits[max(0, k-n)..min(k, n)]`, which is never empty for valid k.
/// Total scalar multiplications are ≈ n²/2 versus n² for the schoolbook
/// convolution, with identical pre-carry column totals.
pub fn column_sums(digits: &[u8]) -> Result<Vec<u64>, EngineError> {
    let n = digits.len();
    if n == 0 {
        return Err(EngineError::EmptySequence);
    }

    let columns = 2 * n - 1;
    let mut sums = vec![0u64; columns];

    for k in 1..=columns {
        let low = k.saturating_sub(n);
        let high = k.min(n);
        sums[k - 1] = duplex(&digits[low..high])?;
    }

    Ok(sums)
}
