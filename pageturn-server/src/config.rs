//! Server configuration from environment variables
//!
//! - `PAGETURN_BIND_ADDR`: listen address, default `127.0.0.1:3000`
//! - `PAGETURN_CATALOG_PATH`: JSON catalog to serve instead of the seed
//! - `PAGETURN_CORS_ORIGINS`: `*`, or a comma-separated origin list

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Origins allowed by the CORS layer
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CorsOrigins {
    /// Localhost origins for development
    #[default]
    Localhost,
    Any,
    List(Vec<String>),
}

impl CorsOrigins {
    fn parse(value: &str) -> Self {
        if value.trim() == "*" {
            return CorsOrigins::Any;
        }
        CorsOrigins::List(
            value
                .split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    pub catalog_path: Option<PathBuf>,
    pub cors_origins: CorsOrigins,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            catalog_path: None,
            cors_origins: CorsOrigins::default(),
        }
    }
}

impl ServerConfig {
    /// Read configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which maps a variable name to its value
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let bind_addr =
            lookup("PAGETURN_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .with_context(|| format!("Invalid PAGETURN_BIND_ADDR: {}", bind_addr))?;

        let catalog_path = lookup("PAGETURN_CATALOG_PATH")
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        let cors_origins = lookup("PAGETURN_CORS_ORIGINS")
            .map(|v| CorsOrigins::parse(&v))
            .unwrap_or_default();

        Ok(Self {
            bind_addr,
            catalog_path,
            cors_origins,
        })
    }
}
