//! Voter configuration
//!
//! Resolution order is defaults, then an optional TOML file, then the
//! `CLEARANCE_VOTER_PREFIX` environment variable. The result is validated once
//! and captured by the voter; nothing is re-read during evaluation.
//!
//! ```toml
//! prefix = "SL_"
//! ```

use crate::decision::DEFAULT_PREFIX;
use crate::errors::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::Path;

/// Environment variable overriding [`VoterConfig::prefix`].
pub const PREFIX_ENV_VAR: &str = "CLEARANCE_VOTER_PREFIX";

/// Configuration for a security-level voter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VoterConfig {
    /// Attribute prefix marking a security-level declaration
    #[serde(default = "default_prefix")]
    pub prefix: String,
}

fn default_prefix() -> String {
    DEFAULT_PREFIX.to_string()
}

impl Default for VoterConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

impl VoterConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::io(path, &e))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), prefix = %config.prefix, "Loaded voter config");
        Ok(config)
    }

    /// Apply overrides from the process environment
    ///
    /// Only [`PREFIX_ENV_VAR`] is read; a value that is not valid UTF-8 is rejected.
    pub fn merge_with_env(&mut self) -> Result<()> {
        self.merge_env_value(std::env::var_os(PREFIX_ENV_VAR))
    }

    fn merge_env_value(&mut self, value: Option<OsString>) -> Result<()> {
        let Some(value) = value else {
            return Ok(());
        };
        let prefix = value.into_string().map_err(|raw| {
            ConfigError::invalid(format!("{PREFIX_ENV_VAR} is not valid UTF-8: {raw:?}"))
        })?;
        self.merge_with_vars([(PREFIX_ENV_VAR, prefix)]);
        Ok(())
    }

    /// Apply overrides from `vars`, using the same keys as [`Self::merge_with_env`]
    pub fn merge_with_vars<I, K, V>(&mut self, vars: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        for (key, value) in vars {
            if key.as_ref() == PREFIX_ENV_VAR {
                let prefix = value.into();
                tracing::debug!(prefix = %prefix, "Voter prefix overridden from environment");
                self.prefix = prefix;
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        // An empty prefix would claim every labelled attribute.
        if self.prefix.is_empty() {
            return Err(ConfigError::invalid("prefix cannot be empty"));
        }
        Ok(())
    }

    /// Resolve configuration: defaults, optional file, environment, then validation
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::load_from_file(path)?,
            None => Self::default(),
        };
        config.merge_with_env()?;
        config.validate()?;
        Ok(config)
    }
}
