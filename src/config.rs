use serde::{Deserialize, Serialize};

use std::{env, fs, path::PathBuf};

pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8000";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Which record store backs the application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StorageConfig {
    #[default]
    Memory,
    Postgres {
        dsn: String,
    },
}

fn default_listen_addr() -> String {
    DEFAULT_LISTEN_ADDR.to_string()
}

pub fn parse_config(contents: &str) -> Result<Config, Box<dyn std::error::Error>> {
    serde_yaml::from_str(contents).map_err(Into::into)
}

fn load_from_env(var: impl Fn(&str) -> Option<String>) -> Config {
    let listen_addr = var("LISTEN_ADDR").unwrap_or_else(default_listen_addr);

    let storage = match var("PG_DSN") {
        Some(dsn) => StorageConfig::Postgres { dsn },
        None => {
            tracing::warn!("PG_DSN is not set, notes will be kept in memory only");
            StorageConfig::Memory
        }
    };

    Config {
        listen_addr,
        storage,
    }
}

/// Reads the first existing file among `candidates`, or builds the config
/// from the environment when none exists.
fn load_from(
    candidates: &[PathBuf],
    var: impl Fn(&str) -> Option<String>,
) -> Result<Config, Box<dyn std::error::Error>> {
    for path in candidates {
        if path.exists() {
            tracing::info!("Loading config from '{}'", path.display());
            return parse_config(&fs::read_to_string(path)?);
        }
    }

    tracing::info!(
        "No config file found (tried {:?}), loading configuration from environment variables",
        candidates
    );
    Ok(load_from_env(var))
}

/// Looks for the file named by `STICKY_NOTES_CONFIG`, then `config.yaml`,
/// then falls back to `LISTEN_ADDR` / `PG_DSN`.
pub fn load_config() -> Result<Config, Box<dyn std::error::Error>> {
    let mut candidates = Vec::new();
    if let Ok(path) = env::var("STICKY_NOTES_CONFIG") {
        candidates.push(PathBuf::from(path));
    }
    candidates.push(PathBuf::from("config.yaml"));

    load_from(&candidates, |name| env::var(name).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_postgres_storage() {
        let cfg = parse_config(
            r#"
listen_addr: "127.0.0.1:9000"
storage:
  kind: postgres
  dsn: "host=db user=notes"
"#,
        )
        .unwrap();

        assert_eq!(cfg.listen_addr, "127.0.0.1:9000");
        assert_eq!(
            cfg.storage,
            StorageConfig::Postgres {
                dsn: "host=db user=notes".to_string()
            }
        );
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let cfg = parse_config("storage:\n  kind: memory\n").unwrap();

        assert_eq!(cfg.listen_addr, DEFAULT_LISTEN_ADDR);
        assert_eq!(cfg.storage, StorageConfig::Memory);
    }

    #[test]
    fn without_config_file_or_env_uses_memory() {
        let missing = env::temp_dir().join("sticky-notes-missing-config.yaml");

        let cfg = load_from(&[missing], |_| None).unwrap();

        assert_eq!(cfg.listen_addr, DEFAULT_LISTEN_ADDR);
        assert_eq!(cfg.storage, StorageConfig::Memory);
    }

    #[test]
    fn without_config_file_pg_dsn_selects_postgres() {
        let missing = env::temp_dir().join("sticky-notes-missing-config.yaml");

        let cfg = load_from(&[missing], |name| match name {
            "PG_DSN" => Some("host=db".to_string()),
            "LISTEN_ADDR" => Some("127.0.0.1:8080".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(cfg.listen_addr, "127.0.0.1:8080");
        assert_eq!(
            cfg.storage,
            StorageConfig::Postgres {
                dsn: "host=db".to_string()
            }
        );
    }

    #[test]
    fn first_existing_file_wins() {
        let missing = env::temp_dir().join("sticky-notes-missing-config.yaml");
        let present = env::temp_dir().join(format!(
            "sticky-notes-config-{}.yaml",
            std::process::id()
        ));
        fs::write(&present, "listen_addr: \"127.0.0.1:7000\"\n").unwrap();

        let cfg = load_from(&[missing, present.clone()], |_| {
            Some("host=ignored".to_string())
        });
        fs::remove_file(&present).unwrap();

        let cfg = cfg.unwrap();
        assert_eq!(cfg.listen_addr, "127.0.0.1:7000");
        assert_eq!(cfg.storage, StorageConfig::Memory);
    }

    #[test]
    fn rejects_unknown_storage_kind() {
        assert!(parse_config("storage:\n  kind: sqlite\n").is_err());
    }
}
