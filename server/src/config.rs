use std::net::{IpAddr, SocketAddr};

use clap::Parser;

use crate::logging::LogFormat;

/// Command line and environment configuration for the server binary.
#[derive(Debug, Clone, Parser)]
#[command(name = "numeral-server")]
#[command(about = "HTTP API converting between Roman numerals and Arabic numbers")]
pub struct ServerConfig {
    /// Address to bind
    #[arg(long, env = "NUMERAL_HOST", default_value = "127.0.0.1")]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3000)]
    pub port: u16,

    /// Log output format
    #[arg(long, env = "NUMERAL_LOG_FORMAT", value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}
