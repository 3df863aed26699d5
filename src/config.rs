//! Runtime settings read from the environment.
//!
//! `main` loads `.env` with `dotenvy` first, so values there behave like
//! regular environment variables.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{Error, Result};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_STATIC_DIR: &str = "static";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    /// Directory served under `/static`.
    pub static_dir: PathBuf,
    /// JSON file replacing the built-in activity list.
    pub seed_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            seed_file: None,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();
        let non_empty = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match non_empty("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| Error::config("PORT", format!("{}: {}", raw, e)))?,
            None => defaults.port,
        };

        Ok(Self {
            host: non_empty("HOST").unwrap_or(defaults.host),
            port,
            static_dir: non_empty("STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            seed_file: non_empty("SEED_FILE").map(PathBuf::from),
        })
    }

    pub fn addr(&self) -> Result<SocketAddr> {
        self.addr_with_port(self.port)
    }

    // Used for the single retry when the configured port is taken.
    pub fn fallback_addr(&self) -> Result<SocketAddr> {
        let port = self
            .port
            .checked_add(1)
            .ok_or_else(|| Error::config("PORT", "no fallback port above 65535"))?;
        self.addr_with_port(port)
    }

    fn addr_with_port(&self, port: u16) -> Result<SocketAddr> {
        format!("{}:{}", self.host, port)
            .parse()
            .map_err(|e| Error::config("HOST", format!("{}: {}", self.host, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let settings = Settings::from_lookup(lookup(&[])).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.addr().unwrap().to_string(), "127.0.0.1:8000");
    }

    #[test]
    fn test_reads_all_values() {
        let settings = Settings::from_lookup(lookup(&[
            ("HOST", "0.0.0.0"),
            ("PORT", "9100"),
            ("STATIC_DIR", "/srv/static"),
            ("SEED_FILE", "seed.json"),
        ]))
        .unwrap();
        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 9100);
        assert_eq!(settings.static_dir, PathBuf::from("/srv/static"));
        assert_eq!(settings.seed_file, Some(PathBuf::from("seed.json")));
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let settings =
            Settings::from_lookup(lookup(&[("PORT", " "), ("SEED_FILE", "")])).unwrap();
        assert_eq!(settings.port, DEFAULT_PORT);
        assert_eq!(settings.seed_file, None);
    }

    #[test]
    fn test_invalid_port() {
        let err = Settings::from_lookup(lookup(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"));
    }

    #[test]
    fn test_fallback_addr() {
        let settings = Settings::from_lookup(lookup(&[("PORT", "3000")])).unwrap();
        assert_eq!(settings.fallback_addr().unwrap().port(), 3001);

        let top = Settings {
            port: u16::MAX,
            ..Settings::default()
        };
        assert!(top.fallback_addr().is_err());
    }

    #[test]
    fn test_invalid_host() {
        let settings = Settings {
            host: "not a host".to_string(),
            ..Settings::default()
        };
        assert!(matches!(settings.addr(), Err(Error::Config { key: "HOST", .. })));
    }
}
