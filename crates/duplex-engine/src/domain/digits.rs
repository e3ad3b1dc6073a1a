//! Validated digit sequence input type.

use crate::error::EngineError;

/// A validated, immutable base-10 digit sequence, little-endian
/// (index 0 = ones digit).
///
/// Construction enforces the engine's input invariants: at least one
/// digit, every digit in [0,9]. Once built the sequence cannot be
/// mutated, so downstream stages may assume the invariants hold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitSequence {
    digits: Vec<u8>,
}

impl DigitSequence {
    /// Validate and take ownership of a digit vector.
    pub fn new(digits: Vec<u8>) -> Result<Self, EngineError> {
        validate(&digits)?;
        Ok(Self { digits })
    }

    /// Validate and copy a digit slice.
    pub fn from_slice(digits: &[u8]) -> Result<Self, EngineError> {
        validate(digits)?;
        Ok(Self {
            digits: digits.to_vec(),
        })
    }

    /// The digits, little-endian.
    pub fn as_slice(&self) -> &[u8] {
        &self.digits
    }

    /// Number of digits (always >= 1).
    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Kept for slice-like ergonomics; a constructed sequence is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Check the input invariants shared by all constructors.
fn validate(digits: &[u8]) -> Result<(), EngineError> {
    if digits.is_empty() {
        return Err(EngineError::EmptySequence);
    }
    for (index, &value) in digits.iter().enumerate() {
        if value > 9 {
            return Err(EngineError::DigitOutOfRange { index, value });
        }
    }
    Ok(())
}
