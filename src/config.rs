//! Command-line and environment configuration.

use std::net::SocketAddr;

use clap::Parser;

/// Runtime configuration. Flags win over environment variables, which win
/// over the defaults.
#[derive(Clone, Debug, Parser)]
#[command(name = "remapi", version, about = "Greeting API with JSON argument remapping")]
pub struct Config {
    /// Address to listen on.
    #[arg(long, env = "REMAPI_ADDR", default_value = "127.0.0.1:5000")]
    pub addr: SocketAddr,

    /// Log filter used when `RUST_LOG` is unset, e.g. `info` or `remapi=debug`.
    #[arg(long, env = "REMAPI_LOG", default_value = "info")]
    pub log: String,
}
