use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use serde::Deserialize;

pub use topic_source_file::FileSourceConfig;

use crate::error::ServerError;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HOST: IpAddr = IpAddr::V4(Ipv4Addr::UNSPECIFIED);

#[derive(Parser)]
#[command(
    name = "topic-server",
    about = "Read-only topic listing API",
    version,
    args_conflicts_with_subcommands = true
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    // used when no subcommand is given
    #[command(flatten)]
    pub serve: ServeArgs,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve(ServeArgs),
}

#[derive(Args, Clone, Debug, Default)]
pub struct ServeArgs {
    /// Optional TOML config file
    #[arg(long, env = "CONFIG_PATH")]
    pub config: Option<PathBuf>,

    /// Port to listen on [default: 3000]
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// Address to bind [default: 0.0.0.0]
    #[arg(long, env = "HOST")]
    pub host: Option<IpAddr>,

    /// JSON file with the topic collection [default: data/topics.json]
    #[arg(long, env = "TOPICS_PATH")]
    pub data: Option<PathBuf>,
}

// ---- TOML Config ----

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    pub api_port: Option<u16>,
    pub host: Option<IpAddr>,
    #[serde(default)]
    pub source: Option<FileSourceConfig>,
}

impl ServerConfig {
    pub fn load(path: &Path) -> Result<Self, ServerError> {
        let content = std::fs::read_to_string(path).map_err(|e| ServerError::Config {
            context: "read",
            detail: format!("'{}': {e}", path.display()),
        })?;
        Self::parse(&content).map_err(|e| ServerError::Config {
            context: "parse",
            detail: format!("'{}': {e}", path.display()),
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

// ---- Resolved settings ----

/// Effective settings: flag/env first, then the TOML file, then defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub addr: SocketAddr,
    pub source: FileSourceConfig,
}

impl Settings {
    pub fn resolve(args: &ServeArgs, file: Option<ServerConfig>) -> Self {
        let file = file.unwrap_or_default();

        let port = args.port.or(file.api_port).unwrap_or(DEFAULT_PORT);
        let host = args.host.or(file.host).unwrap_or(DEFAULT_HOST);
        let source = match &args.data {
            Some(path) => FileSourceConfig { path: path.clone() },
            None => file.source.unwrap_or_default(),
        };

        Self {
            addr: SocketAddr::new(host, port),
            source,
        }
    }
}
