//! Base-10 carry propagation.
//!
//! Renormalizes raw column totals (which may far exceed 9) into canonical
//! digits. The output buffer reserves headroom for the residual carry that
//! drains past the last column; that headroom scales with the magnitude of
//! the column totals, not a fixed constant, and exhaustion is a hard error
//! rather than a silent truncation.

use crate::error::EngineError;

/// Renormalize column totals into a little-endian digit vector.
///
/// Runs a single left-to-right pass with a running carry (emit
/// `total % 10`, carry `total / 10`), then drains the residual carry one
/// decimal digit at a time. The result conserves the weighted sum exactly:
/// `Σ output[i]·10^i == Σ sums[i]·10^i`.
///
/// The output length is `sums.len() + headroom`, where headroom covers the
/// longest possible carry chain for the given totals; trailing slots past
/// the most significant digit are zero.
pub fn propagate(sums: &[u64]) -> Result<Vec<u8>, EngineError> {
    let columns = sums.len();
    let capacity = columns + carry_headroom(sums);
    let mut output = vec![0u8; capacity];

    let mut carry: u64 = 0;
    for (i, &sum) in sums.iter().enumerate() {
        let total = sum
            .checked_add(carry)
            .ok_or(EngineError::ArithmeticOverflow { columns })?;
        output[i] = (total % 10) as u8;
        carry = total / 10;
    }

    // Drain whatever carry survived the last column
    let mut ptr = columns;
    while carry > 0 {
        if ptr >= capacity {
            return Err(EngineError::BufferUnderallocation {
                capacity,
                needed: ptr + 1,
            });
        }
        output[ptr] = (carry % 10) as u8;
        carry /= 10;
        ptr += 1;
    }

    Ok(output)
}

/// Extra output slots needed for the carry drained past the last column.
///
/// The running carry never exceeds max(sums)/9, so the decimal length of
/// the largest column total always covers the drain. For an n-digit
/// squaring (totals bounded by 81n) this is the O(log10(81n)) headroom
/// that a fixed constant cannot provide at scale.
fn carry_headroom(sums: &[u64]) -> usize {
    let max = sums.iter().copied().max().unwrap_or(0);
    decimal_len(max)
}

/// Number of base-10 digits in `v` (1 for 0).
fn decimal_len(mut v: u64) -> usize {
    let mut len = 1;
    while v >= 10 {
        v /= 10;
        len += 1;
    }
    len
}
