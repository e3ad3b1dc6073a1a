//! Gateway domain: configuration, errors, wire types.

pub mod config;
pub mod error;
pub mod types;
