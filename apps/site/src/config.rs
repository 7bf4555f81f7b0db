use std::path::PathBuf;

use anyhow::{Context, Result};

pub const DEFAULT_ASSET_BASE_URL: &str = "https://conner-reavill-images.s3.us-east-2.amazonaws.com";

/// Site configuration loaded from environment variables.
/// Every variable has a default; only malformed values are rejected.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    /// Directory served for every path the router doesn't own (PDFs, `/pkg` wasm bundle).
    pub public_dir: PathBuf,
    /// Base URL that relative image paths in the page content are joined onto.
    pub asset_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            public_dir: PathBuf::from("public"),
            asset_base_url: DEFAULT_ASSET_BASE_URL.to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();

        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .with_context(|| format!("PORT must be a valid port number, got '{raw}'"))?,
            None => defaults.port,
        };

        Ok(Config {
            port,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            public_dir: lookup("PUBLIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.public_dir),
            asset_base_url: normalize_base_url(
                &lookup("ASSET_BASE_URL").unwrap_or(defaults.asset_base_url),
            ),
        })
    }

    /// Joins a content-relative image path onto the asset base URL.
    pub fn asset_url(&self, path: &str) -> String {
        format!("{}/{}", self.asset_base_url, path.trim_start_matches('/'))
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.rust_log, "info");
        assert_eq!(config.public_dir, PathBuf::from("public"));
        assert_eq!(config.asset_base_url, DEFAULT_ASSET_BASE_URL);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "3000"),
            ("RUST_LOG", "debug"),
            ("PUBLIC_DIR", "/srv/site"),
            ("ASSET_BASE_URL", "https://cdn.example.com/img/"),
        ]))
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.rust_log, "debug");
        assert_eq!(config.public_dir, PathBuf::from("/srv/site"));
        assert_eq!(config.asset_base_url, "https://cdn.example.com/img");
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("PORT", "eighty")])).unwrap_err();
        assert!(err.to_string().contains("PORT"), "{err}");
        assert!(Config::from_lookup(lookup_from(&[("PORT", "70000")])).is_err());
    }

    #[test]
    fn test_asset_url_joins_single_slash() {
        let config = Config::default();
        assert_eq!(
            config.asset_url("travel/japan.webp"),
            format!("{DEFAULT_ASSET_BASE_URL}/travel/japan.webp")
        );
        assert_eq!(
            config.asset_url("/headshot.webp"),
            format!("{DEFAULT_ASSET_BASE_URL}/headshot.webp")
        );
    }
}
