use std::path::PathBuf;
use std::str::FromStr;

use crate::modules::auth::application::domain::entities::AdminCredentials;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_MIRROR_DIR: &str = ".portfolio-mirror";
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{name} has an invalid value '{value}'")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MirrorBackend {
    #[default]
    File,
    Memory,
}

impl FromStr for MirrorBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "file" => Ok(MirrorBackend::File),
            "memory" => Ok(MirrorBackend::Memory),
            _ => Err(ConfigError::InvalidValue {
                name: "MIRROR_BACKEND",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub api_base_url: String,
    pub mirror_dir: PathBuf,
    pub mirror_backend: MirrorBackend,
    pub admin: AdminCredentials,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Blank values count as unset.
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_base_url = var("API_BASE_URL").unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        if !(api_base_url.starts_with("http://") || api_base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                name: "API_BASE_URL",
                value: api_base_url,
            });
        }

        let mirror_backend = match var("MIRROR_BACKEND") {
            Some(value) => value.parse()?,
            None => MirrorBackend::default(),
        };

        let admin_username = var("ADMIN_USERNAME")
            .map(|v| v.trim().to_string())
            .unwrap_or_else(|| DEFAULT_ADMIN_USERNAME.to_string());

        Ok(Self {
            environment: var("RUST_ENV").unwrap_or_else(|| "development".to_string()),
            api_base_url,
            mirror_dir: PathBuf::from(
                var("MIRROR_DIR").unwrap_or_else(|| DEFAULT_MIRROR_DIR.to_string()),
            ),
            mirror_backend,
            admin: AdminCredentials {
                username: admin_username,
                password_hash: var("ADMIN_PASSWORD_HASH"),
            },
        })
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
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();

        assert_eq!(config.environment, "development");
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.mirror_dir, PathBuf::from(DEFAULT_MIRROR_DIR));
        assert_eq!(config.mirror_backend, MirrorBackend::File);
        assert_eq!(config.admin.username, "admin");
        assert!(config.admin.password_hash.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("RUST_ENV", "test"),
            ("API_BASE_URL", "https://api.example.com/api"),
            ("MIRROR_DIR", "/tmp/mirror"),
            ("MIRROR_BACKEND", "Memory"),
            ("ADMIN_USERNAME", " editor "),
            ("ADMIN_PASSWORD_HASH", "$argon2id$v=19$..."),
        ]))
        .unwrap();

        assert_eq!(config.environment, "test");
        assert_eq!(config.api_base_url, "https://api.example.com/api");
        assert_eq!(config.mirror_dir, PathBuf::from("/tmp/mirror"));
        assert_eq!(config.mirror_backend, MirrorBackend::Memory);
        assert_eq!(config.admin.username, "editor");
        assert_eq!(config.admin.password_hash.as_deref(), Some("$argon2id$v=19$..."));
    }

    #[test]
    fn test_blank_values_fall_back_to_defaults() {
        let config =
            AppConfig::from_lookup(lookup(&[("API_BASE_URL", "  "), ("ADMIN_PASSWORD_HASH", "")]))
                .unwrap();

        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert!(config.admin.password_hash.is_none());
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = AppConfig::from_lookup(lookup(&[("MIRROR_BACKEND", "redis")])).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                name: "MIRROR_BACKEND",
                value: "redis".to_string()
            }
        );

        let err = AppConfig::from_lookup(lookup(&[("API_BASE_URL", "localhost:5000")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "API_BASE_URL", .. }));
    }
}
