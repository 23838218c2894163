use std::path::PathBuf;

use color_eyre::eyre::{Result, WrapErr, eyre};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    remote: Option<RemoteConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RemoteConfig {
    pub endpoint: String,
    pub auth: String,
}

impl Config {
    /// Load config from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .wrap_err_with(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|path| path.join("catalog-manager").join("config.toml"))
    }

    /// Resolve the config for serving. An explicitly passed path must load;
    /// a broken file is an error, never silently ignored. Without an
    /// explicit path, a present default-location file must also load, and
    /// only a genuinely absent one falls back to the empty config.
    pub fn resolve(explicit: Option<&PathBuf>) -> Result<Self> {
        match explicit {
            Some(path) => Self::from_file(path),
            None => match Self::config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    /// Write a template config file, if it doesn't exist
    pub fn create_default() -> Result<()> {
        let path = Self::config_path().ok_or_else(|| eyre!("No config directory available"))?;
        if path.exists() {
            return Ok(());
        }
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .wrap_err_with(|| format!("Failed to create {}", parent.display()))?;
        }
        let template = Config {
            remote: Some(RemoteConfig {
                endpoint: "https://example.com/graphql".to_string(),
                auth: "".to_string(),
            }),
        };
        let contents = toml::to_string_pretty(&template)
            .wrap_err("Failed to serialize default config")?;
        std::fs::write(&path, contents)
            .wrap_err_with(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    // GRAPHQL_ENDPOINT / GRAPHQL_AUTH are handled by the CLI arguments and
    // take precedence over the file; these getters only read the file.
    // Blank values count as unset so a template auth is never sent as a
    // bearer token.

    pub fn remote_endpoint(&self) -> Option<String> {
        self.remote
            .as_ref()
            .map(|r| r.endpoint.clone())
            .filter(|v| !v.is_empty())
    }

    pub fn remote_auth(&self) -> Option<String> {
        self.remote
            .as_ref()
            .map(|r| r.auth.clone())
            .filter(|v| !v.is_empty())
    }
}
