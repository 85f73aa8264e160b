//! Layered server configuration: defaults, then the TOML file, then
//! `RINKSIDE_*` environment variables.

use std::path::Path;

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use rinkside_notify::MailConfig;
use serde::Deserialize;

/// Runtime server configuration, deserialised from `rinkside.toml`.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  pub host:           String,
  pub port:           u16,
  /// Start from the mock camps and players instead of empty stores.
  pub seed_mock_data: bool,
  pub mail:           MailConfig,
}

const DEFAULTS: &str = r#"
host = "127.0.0.1"
port = 8080
seed_mock_data = true

[mail]
endpoint = "https://api.resend.com/emails"
"#;

/// Build the configuration from `path` (optional on disk) and the
/// environment. Nested keys use `__`, e.g. `RINKSIDE_MAIL__API_KEY`.
pub fn load(path: &Path) -> anyhow::Result<ServerConfig> {
  builder()
    .add_source(File::from(path).required(false))
    .add_source(
      Environment::with_prefix("RINKSIDE")
        .prefix_separator("_")
        .separator("__"),
    )
    .build()
    .context("failed to read configuration")?
    .try_deserialize()
    .context("failed to deserialise ServerConfig")
}

fn builder() -> config::ConfigBuilder<config::builder::DefaultState> {
  Config::builder().add_source(File::from_str(DEFAULTS, FileFormat::Toml))
}

#[cfg(test)]
mod tests {
  use super::*;

  fn from_toml(toml: &str) -> anyhow::Result<ServerConfig> {
    Ok(
      builder()
        .add_source(File::from_str(toml, FileFormat::Toml))
        .build()?
        .try_deserialize()?,
    )
  }

  #[test]
  fn file_values_override_defaults() {
    let cfg = from_toml(
      r#"
      port = 9000
      seed_mock_data = false

      [mail]
      api_key = "re_test"
      from = "Website <site@example.com>"
      to = "owner@example.com"
      "#,
    )
    .unwrap();

    assert_eq!(cfg.host, "127.0.0.1");
    assert_eq!(cfg.port, 9000);
    assert!(!cfg.seed_mock_data);
    assert_eq!(cfg.mail.endpoint, "https://api.resend.com/emails");
    assert_eq!(cfg.mail.api_key, "re_test");
    assert_eq!(cfg.mail.timeout_secs, None);
  }

  #[test]
  fn mail_credentials_are_required() {
    assert!(from_toml("port = 9000").is_err());
  }

  #[test]
  fn missing_file_falls_back_to_defaults_and_env() {
    // No mail credentials anywhere, so this must fail at deserialisation
    // rather than at reading the absent file.
    let err = load(Path::new("/nonexistent/rinkside.toml")).unwrap_err();
    assert!(format!("{err:#}").contains("ServerConfig"));
  }
}
