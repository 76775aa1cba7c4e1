use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use super::endpoint::{
    DEFAULT_PLACEHOLDER, DEFAULT_REPLY_ALIASES, DEFAULT_SESSION_ALIASES, EndpointConfig,
    RequestFields, to_owned_list,
};
use crate::fs::atomic_write;
use crate::paths;

/// Profile used when only `--endpoint` is given.
pub const DEFAULT_PROFILE: &str = "default";

/// Settings in the `[parley]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ParleyConfig {
    /// Default profile name.
    pub profile: Option<String>,
}

/// A named backend as written in the config file.
///
/// Only `chat_endpoint` is required; everything else falls back to the
/// defaults of [`EndpointConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileConfig {
    pub chat_endpoint: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upload_endpoint: Option<String>,
    /// Optional greeting endpoint queried when interactive mode starts.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greet_endpoint: Option<String>,
    /// Environment variable whose value overrides the stored auth token.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_env: Option<String>,
    #[serde(default)]
    pub request_fields: RequestFields,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reply_aliases: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session_aliases: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub multi_file_upload: bool,
}

impl ProfileConfig {
    pub fn new(chat_endpoint: impl Into<String>) -> Self {
        Self {
            chat_endpoint: chat_endpoint.into(),
            upload_endpoint: None,
            greet_endpoint: None,
            token_env: None,
            request_fields: RequestFields::default(),
            reply_aliases: None,
            session_aliases: None,
            placeholder: None,
            multi_file_upload: false,
        }
    }

    /// Reads the token from `token_env`, if configured and non-empty.
    pub fn env_token(&self) -> Option<String> {
        let env_var = self.token_env.as_ref()?;
        std::env::var(env_var).ok().filter(|token| !token.is_empty())
    }

    /// Builds the core configuration, filling in defaults.
    pub fn endpoint_config(&self) -> EndpointConfig {
        EndpointConfig {
            chat_endpoint: self.chat_endpoint.clone(),
            upload_endpoint: self
                .upload_endpoint
                .clone()
                .unwrap_or_else(|| self.chat_endpoint.clone()),
            request_fields: self.request_fields.clone(),
            reply_aliases: self
                .reply_aliases
                .clone()
                .unwrap_or_else(|| to_owned_list(DEFAULT_REPLY_ALIASES)),
            session_aliases: self
                .session_aliases
                .clone()
                .unwrap_or_else(|| to_owned_list(DEFAULT_SESSION_ALIASES)),
            placeholder: self
                .placeholder
                .clone()
                .unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_string()),
            multi_file_upload: self.multi_file_upload,
        }
    }
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/parley/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub parley: ParleyConfig,
    /// Profiles keyed by name.
    #[serde(default)]
    pub profiles: HashMap<String, ProfileConfig>,
}

/// Resolved configuration after merging CLI arguments and config file.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub profile_name: String,
    pub endpoint: EndpointConfig,
    pub greet_endpoint: Option<String>,
    /// Token taken from the profile's `token_env`, if set.
    pub token_override: Option<String>,
}

/// CLI overrides that take precedence over config file values.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    pub profile: Option<String>,
    pub endpoint: Option<String>,
    pub upload_endpoint: Option<String>,
}

/// Configuration problems the user has to fix before anything is sent.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Missing required configuration: 'profile'\n\n\
         Please provide it via:\n  \
         - CLI option: parley --profile <name> (or --endpoint <url>)\n  \
         - Config file: run 'parley init'"
    )]
    MissingProfile,

    #[error("Profile '{name}' not found\n\n{hint}")]
    ProfileNotFound { name: String, hint: String },

    #[error("Invalid {field} '{url}': {reason}")]
    InvalidEndpoint {
        field: &'static str,
        url: String,
        reason: String,
    },
}

/// Resolves configuration by merging CLI options with config file settings.
///
/// CLI options take precedence over config file values. With no profile
/// selected anywhere, `--endpoint` alone produces an ad-hoc `default` profile.
pub fn resolve_config(
    options: &ResolveOptions,
    config_file: &ConfigFile,
) -> Result<ResolvedConfig, ConfigError> {
    let profile_name = options
        .profile
        .as_ref()
        .or(config_file.parley.profile.as_ref())
        .cloned()
        .or_else(|| {
            (options.endpoint.is_some() || config_file.profiles.contains_key(DEFAULT_PROFILE))
                .then(|| DEFAULT_PROFILE.to_string())
        })
        .ok_or(ConfigError::MissingProfile)?;

    let mut profile = match (config_file.profiles.get(&profile_name), &options.endpoint) {
        (Some(profile), _) => profile.clone(),
        (None, Some(endpoint)) => ProfileConfig::new(endpoint.clone()),
        (None, None) => {
            return Err(ConfigError::ProfileNotFound {
                hint: profile_hint(config_file),
                name: profile_name,
            });
        }
    };

    if let Some(endpoint) = &options.endpoint {
        profile.chat_endpoint.clone_from(endpoint);
    }
    if let Some(upload) = &options.upload_endpoint {
        profile.upload_endpoint = Some(upload.clone());
    }

    let endpoint = profile.endpoint_config();
    validate_url("chat endpoint", &endpoint.chat_endpoint)?;
    validate_url("upload endpoint", &endpoint.upload_endpoint)?;
    if let Some(greet) = &profile.greet_endpoint {
        validate_url("greet endpoint", greet)?;
    }

    Ok(ResolvedConfig {
        profile_name,
        token_override: profile.env_token(),
        greet_endpoint: profile.greet_endpoint,
        endpoint,
    })
}

fn profile_hint(config_file: &ConfigFile) -> String {
    if config_file.profiles.is_empty() {
        return "No profiles configured. Run 'parley init' to create one.".to_string();
    }
    let mut names: Vec<&str> = config_file.profiles.keys().map(String::as_str).collect();
    names.sort_unstable();
    format!(
        "Available profiles:\n  - {}\n\nAdd profiles to ~/.config/parley/config.toml",
        names.join("\n  - ")
    )
}

fn validate_url(field: &'static str, url: &str) -> Result<(), ConfigError> {
    let parsed = reqwest::Url::parse(url).map_err(|e| ConfigError::InvalidEndpoint {
        field,
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    if matches!(parsed.scheme(), "http" | "https") {
        Ok(())
    } else {
        Err(ConfigError::InvalidEndpoint {
            field,
            url: url.to_string(),
            reason: "only http and https are supported".to_string(),
        })
    }
}

/// Manages loading and saving configuration files.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/parley/config.toml`
    /// or `~/.config/parley/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Self {
        Self {
            config_path: paths::config_dir().join("config.toml"),
        }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile =
            toml::from_str(&contents).with_context(|| "Failed to parse config file")?;

        Ok(config_file)
    }

    pub fn save(&self, config: &ConfigFile) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        atomic_write(&self.config_path, &contents).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(())
    }

    /// Loads the config file, treating a missing file as empty.
    ///
    /// A file that exists but does not parse is still an error.
    pub fn load_or_default(&self) -> Result<ConfigFile> {
        if self.config_path.exists() {
            self.load()
        } else {
            Ok(ConfigFile::default())
        }
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}
