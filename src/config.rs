use anyhow::{Context, Result};
use clap::Parser;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_ENVIRONMENT: &str = "Production";

/// Command line overrides. Anything left unset falls back to the environment.
#[derive(Debug, Default, Parser)]
#[command(name = "item_api")]
#[command(version, about = "In-memory item CRUD HTTP service")]
pub struct Cli {
    /// Address to bind (overrides HOST)
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on (overrides PORT)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Deployment environment name reported by /info (overrides APP_ENV)
    #[arg(long)]
    pub environment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            environment: DEFAULT_ENVIRONMENT.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env(cli: Cli) -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok(), cli)
    }

    /// Command line values win over the environment. `PORT` is only read
    /// when `--port` is absent; then an unset `PORT` means the default and a
    /// `PORT` that is set but not a valid port number is an error.
    pub fn from_lookup<F>(lookup: F, cli: Cli) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = cli
            .host
            .or_else(|| lookup("HOST"))
            .unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match (cli.port, lookup("PORT")) {
            (Some(port), _) => port,
            (None, Some(raw)) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid u16, got {raw:?}"))?,
            (None, None) => DEFAULT_PORT,
        };

        let environment = cli
            .environment
            .or_else(|| lookup("APP_ENV"))
            .unwrap_or_else(|| DEFAULT_ENVIRONMENT.to_string());

        Ok(Self {
            host,
            port,
            environment,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
