//! # Vedabyte Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Cross-crate behavior
//!     ├── engine_properties.rs   # Engine invariants vs a reference bignum
//!     └── gateway_api.rs         # HTTP wire contract end to end
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p vedabyte-tests
//!
//! # By category
//! cargo test -p vedabyte-tests integration::engine_properties
//! cargo test -p vedabyte-tests integration::gateway_api
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod integration;

/// Decode a little-endian digit sequence as a big integer.
///
/// Shared by property tests that cross-check the engine against
/// `num-bigint` arithmetic.
pub fn decode_little_endian(digits: &[u8]) -> num_bigint::BigUint {
    use num_bigint::BigUint;
    let ten = BigUint::from(10u32);
    let mut place = BigUint::from(1u32);
    let mut total = BigUint::from(0u32);
    for &d in digits {
        total += &place * BigUint::from(d);
        place *= &ten;
    }
    total
}
