//! # Duplex Engine
//!
//! Big-integer squaring for base-10 digit sequences using the Vedic
//! "duplex" (Dwandayoga) shortcut: each convolution column is the sum of
//! symmetric digit pairs, so every pair is multiplied once and doubled
//! instead of being computed twice. This roughly halves the scalar
//! multiplications versus a schoolbook convolution while producing
//! identical column totals.
//!
//! ## Pipeline
//!
//! ```text
//! DigitSequence ──► column_sums (duplex per column) ──► propagate ──► digits
//!    validate          2n-1 raw u64 column totals       base-10 carry
//! ```
//!
//! Digits are little-endian: index 0 holds the ones digit. The output may
//! carry non-significant trailing zero slots; trimming to canonical form
//! is the caller's job.
//!
//! The engine is pure and synchronous. It holds no cross-call state, does
//! no I/O, and is safe to invoke concurrently from independent threads.
//!
//! ## Usage
//!
//! ```
//! use duplex_engine::square_digits;
//!
//! // 32² = 1024, little-endian both ways
//! let result = square_digits(&[2, 3]).unwrap();
//! assert_eq!(&result[..4], &[4, 2, 0, 1]);
//! ```

pub mod domain;
pub mod error;

pub use domain::carry::propagate;
pub use domain::digits::DigitSequence;
pub use domain::duplex::{column_sums, duplex};
pub use domain::engine::{normalize, square, square_digits};
pub use domain::reference;
pub use error::EngineError;
