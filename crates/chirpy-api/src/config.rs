use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};

/// Deployment mode. Only `Dev` unlocks destructive admin operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Dev,
    Other(String),
}

impl Platform {
    pub fn parse(value: &str) -> Self {
        match value.trim() {
            "dev" => Platform::Dev,
            other => Platform::Other(other.to_string()),
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Platform::Dev)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Dev => f.write_str("dev"),
            Platform::Other(name) if name.is_empty() => f.write_str("(unset)"),
            Platform::Other(name) => f.write_str(name),
        }
    }
}

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite path, with any `sqlite://` or `sqlite:` scheme removed.
    pub db_path: String,
    pub platform: Platform,
    pub host: String,
    pub port: u16,
    /// Directory served under `/app`.
    pub filepath_root: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let db_url = lookup("DB_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or_else(|| anyhow!("DB_URL must be set"))?;

        let platform = Platform::parse(&lookup("PLATFORM").unwrap_or_default());
        let host = lookup("CHIRPY_HOST").unwrap_or_else(|| "0.0.0.0".into());
        let port: u16 = lookup("CHIRPY_PORT")
            .unwrap_or_else(|| "8080".into())
            .parse()
            .context("CHIRPY_PORT is not a valid port")?;
        let filepath_root: PathBuf = lookup("FILEPATH_ROOT")
            .unwrap_or_else(|| ".".into())
            .into();

        Ok(Self {
            db_path: strip_scheme(db_url.trim()).to_string(),
            platform,
            host,
            port,
            filepath_root,
        })
    }
}

fn strip_scheme(url: &str) -> &str {
    url.strip_prefix("sqlite://")
        .or_else(|| url.strip_prefix("sqlite:"))
        .unwrap_or(url)
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply() {
        let config = config_from(&[("DB_URL", "chirpy.db")]).unwrap();
        assert_eq!(config.db_path, "chirpy.db");
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 8080);
        assert_eq!(config.filepath_root, PathBuf::from("."));
        assert!(!config.platform.is_dev());
    }

    #[test]
    fn db_url_is_required() {
        assert!(config_from(&[]).is_err());
        assert!(config_from(&[("DB_URL", "  ")]).is_err());
    }

    #[test]
    fn sqlite_scheme_is_stripped() {
        let config = config_from(&[("DB_URL", "sqlite:///var/lib/chirpy.db")]).unwrap();
        assert_eq!(config.db_path, "/var/lib/chirpy.db");

        let config = config_from(&[("DB_URL", "sqlite:chirpy.db")]).unwrap();
        assert_eq!(config.db_path, "chirpy.db");
    }

    #[test]
    fn platform_and_overrides() {
        let config = config_from(&[
            ("DB_URL", ":memory:"),
            ("PLATFORM", "dev"),
            ("CHIRPY_HOST", "127.0.0.1"),
            ("CHIRPY_PORT", "9000"),
            ("FILEPATH_ROOT", "./public"),
        ])
        .unwrap();
        assert!(config.platform.is_dev());
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 9000);
        assert_eq!(config.filepath_root, PathBuf::from("./public"));
    }

    #[test]
    fn only_exact_dev_is_dev() {
        assert!(Platform::parse("dev").is_dev());
        assert!(!Platform::parse("production").is_dev());
        assert!(!Platform::parse("Dev").is_dev());
        assert!(!Platform::parse("").is_dev());
    }

    #[test]
    fn bad_port_fails() {
        assert!(config_from(&[("DB_URL", "x.db"), ("CHIRPY_PORT", "http")]).is_err());
    }
}
