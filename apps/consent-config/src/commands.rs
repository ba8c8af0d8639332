//! Subcommand implementations; each renders its report as a string

use crate::cli::{Cli, Command, OutputFormat};
use anyhow::{Context, Result};
use consent_config::{
    masked_property_keys, masked_value, property_keys, select_backend, ConsentConfigLoader,
    ConsentProperties,
};
use std::fmt::Write as _;

pub fn loader_from(cli: &Cli) -> ConsentConfigLoader {
    let mut loader = ConsentConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_file(path);
    }
    loader = if cli.no_env {
        loader.without_env()
    } else {
        loader.with_env_prefix(cli.env_prefix.clone())
    };
    for (key, value) in &cli.overrides {
        loader = loader.with_override(key.clone(), value.clone());
    }
    loader
}

pub fn run(cli: &Cli) -> Result<String> {
    let props = loader_from(cli)
        .load()
        .context("Consent settings could not be loaded")?;

    match &cli.command {
        Command::Check => check(&props),
        Command::Show { format } => show(&props, *format, cli.reveal),
        Command::Keys { prefix } => keys(&props, prefix.as_deref(), cli.reveal),
    }
}

fn check(props: &ConsentProperties) -> Result<String> {
    let backend = select_backend(props)?;
    let mut out = String::new();
    writeln!(out, "Consent settings are valid")?;
    writeln!(out, "  storage backend: {}", backend)?;
    writeln!(
        out,
        "  required modules: {}, {}",
        ConsentProperties::required_module(),
        backend.required_module()
    )?;
    writeln!(
        out,
        "  reminder: {} {}",
        props.reminder, props.reminder_time_unit
    )?;
    writeln!(
        out,
        "  crypto: {}",
        if props.crypto.enabled { "enabled" } else { "disabled" }
    )?;
    Ok(out)
}

fn show(props: &ConsentProperties, format: OutputFormat, reveal: bool) -> Result<String> {
    let value = if reveal {
        serde_json::to_value(props)?
    } else {
        masked_value(props)?
    };
    let rendered = match format {
        OutputFormat::Yaml => serde_yaml::to_string(&value)?,
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(&value)?;
            json.push('\n');
            json
        }
    };
    Ok(rendered)
}

fn keys(props: &ConsentProperties, prefix: Option<&str>, reveal: bool) -> Result<String> {
    let keys = if reveal {
        property_keys(props)?
    } else {
        masked_property_keys(props)?
    };
    let mut out = String::new();
    for (key, value) in keys {
        if prefix.is_some_and(|p| !key.starts_with(p)) {
            continue;
        }
        writeln!(out, "{} = {}", key, value)?;
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;

    fn run_args(args: &[&str]) -> Result<String> {
        let cli = Cli::try_parse_from(args)?;
        run(&cli)
    }

    #[test]
    fn test_check_reports_backend() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(
            file,
            "cas:\n  consent:\n    redis:\n      host: redis.example.org"
        )
        .unwrap();
        let path = file.path().to_string_lossy().to_string();

        let out = run_args(&["consent-config", "check", "--no-env", "-c", &path]).unwrap();
        assert!(out.contains("storage backend: redis"));
        assert!(out.contains("cas-server-support-consent-redis"));
        assert!(out.contains("reminder: 30 DAYS"));
    }

    #[test]
    fn test_check_fails_on_invalid_settings() {
        let err = run_args(&[
            "consent-config",
            "check",
            "--no-env",
            "--set",
            "cas.consent.reminder=-2",
        ])
        .unwrap_err();
        assert!(format!("{:#}", err).contains("reminder must not be negative"));
    }

    #[test]
    fn test_show_json() {
        let out = run_args(&[
            "consent-config",
            "show",
            "--format",
            "json",
            "--no-env",
            "--set",
            "cas.consent.mongo.collection=Decisions",
        ])
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["mongo"]["collection"], "Decisions");
        assert_eq!(value["reminder"], 30);
    }

    #[test]
    fn test_keys_with_prefix() {
        let out = run_args(&[
            "consent-config",
            "keys",
            "--no-env",
            "--prefix",
            "cas.consent.couch-db",
        ])
        .unwrap();
        assert!(out.contains("cas.consent.couch-db.db-name = \"consent\""));
        assert!(out.lines().all(|l| l.starts_with("cas.consent.couch-db.")));
    }

    #[test]
    fn test_secrets_masked_unless_revealed() {
        let args = [
            "consent-config",
            "keys",
            "--no-env",
            "--prefix",
            "cas.consent.redis.password",
            "--set",
            "cas.consent.redis.password=\"hunter2\"",
        ];
        let out = run_args(&args).unwrap();
        assert_eq!(out.trim(), "cas.consent.redis.password = \"******\"");

        let mut revealed = args.to_vec();
        revealed.push("--reveal");
        let out = run_args(&revealed).unwrap();
        assert_eq!(out.trim(), "cas.consent.redis.password = \"hunter2\"");
    }

    #[test]
    fn test_show_masks_secrets() {
        let out = run_args(&[
            "consent-config",
            "show",
            "--format",
            "json",
            "--no-env",
            "--set",
            "cas.consent.ldap.bind-credential=s3cr3t",
        ])
        .unwrap();
        assert!(!out.contains("s3cr3t"));
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["ldap"]["bind-credential"], "******");
    }
}
