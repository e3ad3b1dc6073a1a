//! Cross-crate integration tests.

pub mod engine_properties;
pub mod gateway_api;
