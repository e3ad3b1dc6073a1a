//! # Vedabyte API Gateway
//!
//! HTTP surface for the duplex squaring engine.
//!
//! # Endpoints
//!
//! - `POST /api/process` — square a little-endian digit array.
//!   Request `{"digits":[...]}`, response
//!   `{"status":"success","result":[...]}` or
//!   `{"status":"error","message":...}` with 400/500.
//! - `GET /api/benchmark` — time the duplex engine against the schoolbook
//!   reference convolution across a fixed size ladder.
//! - `GET /health` — liveness probe.
//!
//! CORS is enabled so a browser UI served from another origin can talk to
//! the gateway directly.
//!
//! The gateway owns all HTTP concerns: the engine itself stays pure and
//! silent, and every engine failure is translated here into the wire
//! error shape.

#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod benchmark;
pub mod domain;
pub mod middleware;
pub mod service;

pub use domain::config::{BenchmarkConfig, CorsConfig, GatewayConfig, HttpConfig};
pub use domain::error::{ApiError, GatewayError};
pub use service::GatewayService;
