//! Listener settings.

use std::net::Ipv6Addr;

use clap::Args;

/// Where the JSON API listens.
#[derive(Debug, Args)]
pub struct ServerRuntimeConfig {
    /// Interface to bind, IPv4 or IPv6
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to bind
    #[arg(short, long, env = "SERVER_PORT", default_value = "8698")]
    pub port: u16,
}

impl ServerRuntimeConfig {
    /// `host:port` for the listener, with IPv6 hosts bracketed.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        let host = self.host.trim_start_matches('[').trim_end_matches(']');

        if host.parse::<Ipv6Addr>().is_ok() {
            format!("[{host}]:{}", self.port)
        } else {
            format!("{host}:{}", self.port)
        }
    }
}
