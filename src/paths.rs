//! XDG-style path utilities for configuration and data directories.
//!
//! XDG Base Directory conventions are preferred over OS-specific
//! locations on every platform.

use std::path::PathBuf;

/// Returns the configuration directory for parley.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/parley` if `XDG_CONFIG_HOME` is set
/// 2. `~/.config/parley` otherwise
pub fn config_dir() -> PathBuf {
    xdg_dir("XDG_CONFIG_HOME", &[".config"])
}

/// Returns the data directory for parley (session storage).
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/parley` if `XDG_DATA_HOME` is set
/// 2. `~/.local/share/parley` otherwise
pub fn data_dir() -> PathBuf {
    xdg_dir("XDG_DATA_HOME", &[".local", "share"])
}

fn xdg_dir(env_var: &str, fallback: &[&str]) -> PathBuf {
    std::env::var(env_var)
        .ok()
        .filter(|dir| !dir.is_empty())
        .map_or_else(
            || {
                fallback
                    .iter()
                    .fold(home_dir(), |path, part| path.join(part))
                    .join("parley")
            },
            |dir| PathBuf::from(dir).join("parley"),
        )
}

/// Returns the user's home directory.
///
/// # Panics
///
/// Panics if the home directory cannot be determined.
#[allow(clippy::expect_used)]
fn home_dir() -> PathBuf {
    dirs::home_dir().expect("Failed to determine home directory")
}
