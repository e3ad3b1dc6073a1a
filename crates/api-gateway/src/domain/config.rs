//! Gateway configuration with validation.

use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use thiserror::Error;

/// Main gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GatewayConfig {
    /// HTTP server configuration
    pub http: HttpConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Benchmark endpoint configuration
    pub benchmark: BenchmarkConfig,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            http: HttpConfig::default(),
            cors: CorsConfig::default(),
            benchmark: BenchmarkConfig::default(),
        }
    }
}

impl GatewayConfig {
    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.benchmark.iterations == 0 {
            return Err(ConfigError::InvalidBenchmark(
                "iterations cannot be 0".into(),
            ));
        }

        if self.benchmark.sizes.is_empty() {
            return Err(ConfigError::InvalidBenchmark("size ladder is empty".into()));
        }

        if self.benchmark.sizes.iter().any(|&s| s == 0) {
            return Err(ConfigError::InvalidBenchmark("size cannot be 0".into()));
        }

        if self.http.max_digits == 0 {
            return Err(ConfigError::InvalidLimit("max_digits cannot be 0".into()));
        }

        Ok(())
    }

    /// Get HTTP server bind address
    pub fn http_addr(&self) -> SocketAddr {
        SocketAddr::new(self.http.host, self.http.port)
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Bind address
    pub host: IpAddr,
    /// Bind port
    pub port: u16,
    /// Maximum accepted input length for /api/process
    pub max_digits: usize,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            // The original service listened on 5000
            port: 5000,
            max_digits: 1_000_000,
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorsConfig {
    /// Whether CORS headers are emitted at all
    pub enabled: bool,
    /// Allowed origins ("*" for any)
    pub allowed_origins: Vec<String>,
    /// Allowed methods
    pub allowed_methods: Vec<String>,
    /// Allowed request headers ("*" for any)
    pub allowed_headers: Vec<String>,
    /// Preflight cache lifetime in seconds
    pub max_age: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            // The browser UI is served from another origin, so CORS is on
            // by default with a permissive policy.
            enabled: true,
            allowed_origins: vec!["*".to_string()],
            allowed_methods: vec!["GET".to_string(), "POST".to_string(), "OPTIONS".to_string()],
            allowed_headers: vec!["*".to_string()],
            max_age: 3600,
        }
    }
}

/// Benchmark endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchmarkConfig {
    /// Input sizes to measure, in digits
    pub sizes: Vec<usize>,
    /// Timed iterations per size (after one warmup call)
    pub iterations: u32,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            sizes: vec![10, 50, 100, 200, 500, 1000],
            iterations: 30,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid benchmark configuration: {0}")]
    InvalidBenchmark(String),

    #[error("Invalid limit: {0}")]
    InvalidLimit(String),
}
