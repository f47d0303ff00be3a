//! Bind configuration, read from flags with environment fallbacks.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);
pub const DEFAULT_PORT: u16 = 8001;

/// Vocative greeting service.
#[derive(Debug, Clone, Parser)]
#[command(name = "vocative-server")]
#[command(about = "Serves Polish vocative forms and greetings over HTTP", long_about = None)]
#[command(version)]
pub struct ServerConfig {
    /// Address to bind. Namespaced because shells and container images
    /// often export `HOST` as the machine's hostname.
    #[arg(long, env = "VOCATIVE_HOST", default_value_t = DEFAULT_HOST)]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST,
            port: DEFAULT_PORT,
        }
    }
}
