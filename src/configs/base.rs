use serde::{Deserialize, Serialize};

use crate::configs::*;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
  #[serde(default)]
  pub server: ServerConfig,
  #[serde(default)]
  pub logging: Option<LoggingConfig>,
  #[serde(default)]
  pub mirrors: MirrorsConfig,
  #[serde(default)]
  pub resolver: ResolverConfig,
  #[serde(default)]
  pub spotify: Option<SpotifyConfig>,
}

use crate::common::types::AnyResult;

impl Config {
  /// Load the configuration file (if any), apply environment overrides and
  /// validate the mirror pools. Missing pools are a fatal startup error.
  pub fn load() -> AnyResult<Self> {
    let mut config = if std::path::Path::new("config.toml").exists() {
      Self::from_file("config.toml")?
    } else if std::path::Path::new("config.default.toml").exists() {
      Self::from_file("config.default.toml")?
    } else {
      Config::default()
    };

    config.apply_env();
    config.validate()?;
    Ok(config)
  }

  fn from_file(path: &str) -> AnyResult<Self> {
    let config_str = std::fs::read_to_string(path)?;
    if config_str.is_empty() {
      return Err(format!("{} is empty", path).into());
    }

    let config: Config = toml::from_str(&config_str)?;
    Ok(config)
  }

  /// `API_URLS` / `PROXY_URLS` (comma-separated) replace the file-configured
  /// mirror pools when set.
  pub fn apply_env(&mut self) {
    if let Ok(raw) = std::env::var("API_URLS") {
      self.mirrors.api_urls = split_list(&raw);
    }
    if let Ok(raw) = std::env::var("PROXY_URLS") {
      self.mirrors.proxy_urls = split_list(&raw);
    }
  }

  pub fn validate(&self) -> AnyResult<()> {
    if self.mirrors.api_urls.is_empty() || self.mirrors.proxy_urls.is_empty() {
      return Err(
        "mirror pools not configured: set [mirrors] api_urls and proxy_urls in config.toml \
         or the API_URLS and PROXY_URLS environment variables"
          .into(),
      );
    }
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_validate_rejects_missing_pools() {
    let mut config = Config::default();
    assert!(config.validate().is_err());

    config.mirrors.api_urls = vec!["https://api-1.example".into()];
    assert!(config.validate().is_err(), "proxy pool still missing");

    config.mirrors.proxy_urls = vec!["https://proxy-1.example".into()];
    assert!(config.validate().is_ok());
  }

  #[test]
  fn test_toml_roundtrip_with_defaults() {
    let parsed: Config = toml::from_str(
      r#"
      [server]
      port = 8080

      [mirrors]
      api_urls = ["https://api-1.example/api/v1/videos"]
      proxy_urls = ["https://proxy-1.example"]
      "#,
    )
    .unwrap();

    assert_eq!(parsed.server.port, 8080);
    assert_eq!(parsed.server.host, "0.0.0.0");
    assert_eq!(parsed.resolver.max_retries, 3);
    assert_eq!(parsed.resolver.retry_delay_secs, 5);
    assert_eq!(parsed.resolver.cache_ttl_secs, 3600);
    assert_eq!(parsed.mirrors.api_urls.len(), 1);
  }
}
