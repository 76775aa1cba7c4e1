//! Init command handler: writes a profile into the config file.

use anyhow::Result;
use inquire::Text;

use crate::cli::GlobalArgs;
use crate::config::{
    ConfigManager, DEFAULT_PROFILE, ProfileConfig, ResolveOptions, resolve_config,
};
use crate::ui::{Style, handle_prompt_cancellation};

pub struct InitOptions {
    pub greet_endpoint: Option<String>,
    pub token_env: Option<String>,
    pub make_default: bool,
}

/// Creates or updates a profile.
///
/// Missing endpoints are asked for interactively.
pub fn run_init(global: &GlobalArgs, options: InitOptions) -> Result<()> {
    handle_prompt_cancellation(|| run_init_inner(global, options))
}

fn run_init_inner(global: &GlobalArgs, options: InitOptions) -> Result<()> {
    let manager = ConfigManager::new();
    let mut config = manager.load_or_default()?;

    let name = global
        .profile
        .clone()
        .unwrap_or_else(|| DEFAULT_PROFILE.to_string());
    let existing = config.profiles.get(&name).cloned();

    let chat_endpoint = match &global.endpoint {
        Some(endpoint) => endpoint.clone(),
        None => prompt_url(
            "Chat endpoint:",
            existing.as_ref().map(|p| p.chat_endpoint.as_str()),
        )?,
    };

    let mut profile = existing.unwrap_or_else(|| ProfileConfig::new(chat_endpoint.clone()));
    profile.chat_endpoint = chat_endpoint;
    if global.upload_endpoint.is_some() {
        profile.upload_endpoint.clone_from(&global.upload_endpoint);
    }
    if options.greet_endpoint.is_some() {
        profile.greet_endpoint = options.greet_endpoint;
    }
    if options.token_env.is_some() {
        profile.token_env = options.token_env;
    }

    config.profiles.insert(name.clone(), profile);
    if options.make_default || config.parley.profile.is_none() {
        config.parley.profile = Some(name.clone());
    }

    // Refuse to save something that would not resolve later.
    let check = ResolveOptions {
        profile: Some(name.clone()),
        ..ResolveOptions::default()
    };
    resolve_config(&check, &config)?;

    manager.save(&config)?;

    println!(
        "{} Profile {} saved to {}",
        Style::success("✓"),
        Style::value(&name),
        Style::secondary(manager.config_path().display().to_string())
    );

    Ok(())
}

fn prompt_url(message: &str, default: Option<&str>) -> Result<String> {
    let mut prompt = Text::new(message).with_help_message("e.g. http://localhost:5000/chat/");

    if let Some(d) = default {
        prompt = prompt.with_default(d);
    }

    Ok(prompt.prompt()?.trim().to_string())
}
