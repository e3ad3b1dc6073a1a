//! Error types for the duplex squaring engine.

use thiserror::Error;

/// Errors surfaced by the squaring pipeline.
///
/// The engine never panics on bad input and never truncates a result; every
/// failure mode is a distinct variant here.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("empty digit sequence")]
    EmptySequence,

    #[error("digit out of range at index {index}: {value} (must be 0-9)")]
    DigitOutOfRange { index: usize, value: u8 },

    #[error("duplex window is empty")]
    EmptyWindow,

    #[error("output buffer exhausted draining carry: capacity {capacity}, needed {needed}")]
    BufferUnderallocation { capacity: usize, needed: usize },

    #[error("column totals for {columns} columns exceed the u64 accumulator")]
    ArithmeticOverflow { columns: usize },
}

impl EngineError {
    /// True for failures caused by the caller's input (InvalidArgument
    /// class) rather than by capacity or accumulator limits.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::EmptySequence | Self::DigitOutOfRange { .. } | Self::EmptyWindow
        )
    }
}
