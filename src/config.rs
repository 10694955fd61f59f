use std::net::SocketAddr;

use anyhow::{Context, Result};

const DEFAULT_LISTEN_ADDR: &str = "127.0.0.1:3030";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub listen_addr: SocketAddr,
    /// Host and port browsers use to reach us, for the live view websocket.
    pub reachable_addr: String,
}

impl ServerConfig {
    /// Reads `LISTEN_ADDR` and `REACHABLE_ADDR` from the process environment.
    /// The binary loads `.env` into it before this runs.
    pub fn from_env() -> Result<ServerConfig> {
        ServerConfig::from_vars(
            std::env::var("LISTEN_ADDR").ok(),
            std::env::var("REACHABLE_ADDR").ok(),
        )
    }

    fn from_vars(listen: Option<String>, reachable: Option<String>) -> Result<ServerConfig> {
        let listen = listen.unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());
        let listen_addr: SocketAddr = listen
            .parse()
            .with_context(|| format!("LISTEN_ADDR is not a socket address: {listen}"))?;
        let reachable_addr = reachable.unwrap_or_else(|| listen_addr.to_string());
        Ok(ServerConfig {
            listen_addr,
            reachable_addr,
        })
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            listen_addr: ([127, 0, 0, 1], 3030).into(),
            reachable_addr: DEFAULT_LISTEN_ADDR.to_string(),
        }
    }
}
