// src/config.rs
use anyhow::{Context, Result};
use log::warn;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 3030;
const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub port: u16,
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Reads `PORT` and `ESG_DATA_DIR`. Call `dotenv().ok()` first to pick up `.env`.
    pub fn from_env() -> Result<Self> {
        Self::from_vars(env::var("PORT").ok(), env::var("ESG_DATA_DIR").ok())
    }

    fn from_vars(port: Option<String>, data_dir: Option<String>) -> Result<Self> {
        let port = match port {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a number, got {:?}", raw))?,
            None => {
                warn!("$PORT not set, defaulting to {}", DEFAULT_PORT);
                DEFAULT_PORT
            }
        };

        let data_dir = data_dir
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        Ok(AppConfig { port, data_dir })
    }

    /// Bind on all interfaces.
    pub fn socket_addr(&self) -> SocketAddr {
        ([0, 0, 0, 0], self.port).into()
    }
}
