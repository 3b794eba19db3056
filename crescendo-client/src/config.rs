/// Client configuration
///
/// Loaded from the environment with typed defaults, `.env` supported for
/// development.
///
/// # Environment Variables
///
/// Prefix `CRESCENDO_`, nested keys separated by `__`:
///
/// - `CRESCENDO_API__BASE_URL`: collaborator base URL (default: `http://localhost:8080/api`)
/// - `CRESCENDO_API__TIMEOUT_SECS`: request timeout (default: 30)
/// - `CRESCENDO_STORAGE__PATH`: persisted-store SQLite file (default: `crescendo.db`)
///
/// # Example
///
/// ```no_run
/// use crescendo_client::config::ClientConfig;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = ClientConfig::from_env()?;
/// println!("talking to {}", config.api.base_url);
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};

/// Complete client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// REST collaborator settings
    pub api: ApiConfig,

    /// Persisted-store settings
    pub storage: StorageConfig,
}

/// REST collaborator settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL, no trailing slash required
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

/// Persisted-store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Path of the SQLite file backing the key-value store
    pub path: String,
}

impl ClientConfig {
    /// Loads configuration from the environment
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable has an invalid value for
    /// its typed field.
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env if present (for development)
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .set_default("api.base_url", "http://localhost:8080/api")?
            .set_default("api.timeout_secs", 30)?
            .set_default("storage.path", "crescendo.db")?
            .add_source(config::Environment::with_prefix("CRESCENDO").separator("__"))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            api: ApiConfig {
                base_url: "http://localhost:8080/api".to_string(),
                timeout_secs: 30,
            },
            storage: StorageConfig {
                path: "crescendo.db".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8080/api");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.storage.path, "crescendo.db");
    }

    #[test]
    fn test_from_env_uses_defaults_when_unset() {
        let config = ClientConfig::from_env().unwrap();
        assert!(!config.api.base_url.is_empty());
        assert!(config.api.timeout_secs > 0);
    }
}
