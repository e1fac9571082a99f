use std::env::{self, VarError};
use std::net::{Ipv4Addr, SocketAddr};
use anyhow::{bail, Context, Result};

pub const DEFAULT_PORT: u16 = 8000;

#[derive(Debug, Clone)]
pub struct Config {
    pub service_port: u16,
    pub service_host: Ipv4Addr,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let port = match env::var("PORT") {
            Ok(raw) => Some(raw),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(raw)) => {
                bail!("PORT must be a valid port number (1-65535), got {:?}", raw)
            }
        };
        Self::from_port_var(port)
    }

    /// Builds the config from the raw `PORT` value, if any.
    pub fn from_port_var(port: Option<String>) -> Result<Self> {
        let service_port = match port {
            Some(raw) => {
                let port = raw.trim().parse::<u16>().with_context(|| {
                    format!("PORT must be a valid port number (1-65535), got '{}'", raw)
                })?;
                if port == 0 {
                    bail!("PORT must be a valid port number (1-65535), got '0'");
                }
                port
            }
            None => DEFAULT_PORT,
        };

        Ok(Config {
            service_port,
            service_host: Ipv4Addr::UNSPECIFIED,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::from((self.service_host, self.service_port))
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Service listening on: {}", self.socket_addr());
    }
}
