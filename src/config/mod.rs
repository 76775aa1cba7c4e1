//! Configuration file management and endpoint profiles.

mod endpoint;
mod manager;

pub use endpoint::{
    DEFAULT_PLACEHOLDER, DEFAULT_REPLY_ALIASES, DEFAULT_SESSION_ALIASES, EndpointConfig,
    RequestFields,
};
pub use manager::{
    ConfigError, ConfigFile, ConfigManager, DEFAULT_PROFILE, ParleyConfig, ProfileConfig,
    ResolveOptions, ResolvedConfig, resolve_config,
};
