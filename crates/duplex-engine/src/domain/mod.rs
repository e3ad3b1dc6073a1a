//! Core domain logic for duplex squaring.
//!
//! INVARIANTS:
//! - INVARIANT-1: value(square(d)) == value(d)² for every valid input
//! - INVARIANT-2: every emitted output digit is in [0,9]
//! - INVARIANT-3: carry propagation conserves the weighted column sum exactly

pub mod carry;
pub mod digits;
pub mod duplex;
pub mod engine;
pub mod reference;
