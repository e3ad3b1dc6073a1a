//! Wire types for the gateway endpoints.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/process`.
///
/// Digits are deserialized as `i64` so negative and oversized values reach
/// range validation with a proper InvalidArgument instead of failing JSON
/// decoding on the narrow type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessRequest {
    /// Little-endian base-10 digits
    #[serde(default)]
    pub digits: Vec<i64>,
}

/// Success body for `POST /api/process`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessResponse {
    /// Always `"success"` on this shape
    pub status: String,
    /// Little-endian digits of the square
    pub result: Vec<u8>,
}

impl ProcessResponse {
    pub fn success(result: Vec<u8>) -> Self {
        Self {
            status: "success".to_string(),
            result,
        }
    }
}

/// One row of `GET /api/benchmark`.
///
/// Field names are the wire contract consumed by the dashboard UI;
/// `numpy` is the legacy name of the schoolbook-reference timing arm.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BenchmarkRecord {
    /// Input size in digits
    pub digits: usize,
    /// Mean seconds per duplex-engine call
    pub vedic: f64,
    /// Mean seconds per reference-convolution call
    pub numpy: f64,
    /// Scalar multiplications for the schoolbook convolution (d²)
    pub standard_ops: u64,
    /// Scalar multiplications for the duplex shortcut (d²/2)
    pub vedic_ops: u64,
}
