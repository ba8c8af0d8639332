//! Command line interface

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "consent-config", version, about = "Validate and inspect consent settings")]
pub struct Cli {
    /// YAML file with settings rooted at `cas.consent`
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Prefix of environment variables to bind
    #[arg(long, global = true, default_value = consent_config::infra::DEFAULT_ENV_PREFIX)]
    pub env_prefix: String,

    /// Ignore environment variables
    #[arg(long, global = true)]
    pub no_env: bool,

    /// Override a key, e.g. `--set cas.consent.reminder=10`
    #[arg(long = "set", value_name = "KEY=VALUE", global = true, value_parser = parse_override)]
    pub overrides: Vec<(String, serde_json::Value)>,

    /// Print passwords, credentials and keys instead of masking them
    #[arg(long, global = true)]
    pub reveal: bool,

    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Bind and validate settings, then report the storage backend
    Check,
    /// Print the effective settings
    Show {
        #[arg(long, value_enum, default_value_t = OutputFormat::Yaml)]
        format: OutputFormat,
    },
    /// List configuration keys with their effective values
    Keys {
        /// Only keys starting with this prefix
        #[arg(long)]
        prefix: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Yaml,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    Text,
    Json,
}

/// `KEY=VALUE`; values that parse as JSON keep their type, anything else is a string
fn parse_override(raw: &str) -> Result<(String, serde_json::Value), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{}'", raw));
    }
    let value = serde_json::from_str(value)
        .unwrap_or_else(|_| serde_json::Value::String(value.to_string()));
    Ok((key.to_string(), value))
}
