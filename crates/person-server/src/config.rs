//! Server configuration
//!
//! Defaults overlaid by environment variables (`BIND_ADDRESS`, `DATA_DIR`,
//! `DATABASE_PATH`).

use anyhow::{Context, Result};
use config::{Config, Environment};
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

pub const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3333";
pub const DEFAULT_DATA_DIR: &str = "./data";
const DATABASE_FILE: &str = "persons.db";

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    pub data_dir: PathBuf,
    #[serde(default)]
    database_path: Option<String>,
}

impl ServerConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self> {
        Self::from_env(Environment::default())
    }

    fn from_env(env: Environment) -> Result<Self> {
        Config::builder()
            .set_default("bind_address", DEFAULT_BIND_ADDRESS)?
            .set_default("data_dir", DEFAULT_DATA_DIR)?
            .add_source(env)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Explicit `DATABASE_PATH`, or `persons.db` inside the data directory.
    pub fn database_path(&self) -> String {
        self.database_path.clone().unwrap_or_else(|| {
            self.data_dir
                .join(DATABASE_FILE)
                .to_string_lossy()
                .to_string()
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address
            .parse()
            .with_context(|| format!("Failed to parse bind address: {}", self.bind_address))
    }
}
