//! Profile listing command handler.

use anyhow::{Result, bail};

use crate::config::{ConfigManager, ProfileConfig};
use crate::ui::Style;

/// Prints configured profiles to stdout.
///
/// With `specific_profile`, shows that profile's endpoints and field names.
pub fn print_profiles(specific_profile: Option<&str>) -> Result<()> {
    let manager = ConfigManager::new();
    let config = manager.load_or_default()?;

    if config.profiles.is_empty() {
        println!("No profiles configured.");
        println!("Run 'parley init --endpoint <url>' to create one.");
        return Ok(());
    }

    let default_profile = config.parley.profile.as_deref();
    let marker = |name: &str| {
        if default_profile == Some(name) {
            format!(" {}", Style::default_marker())
        } else {
            String::new()
        }
    };

    if let Some(name) = specific_profile {
        let Some(profile) = config.profiles.get(name) else {
            bail!("Profile '{name}' not found");
        };
        println!("Profile: {}{}", Style::value(name), marker(name));
        print_profile_details(profile);
        return Ok(());
    }

    println!("{}\n", Style::header("Configured profiles"));
    let mut names: Vec<&String> = config.profiles.keys().collect();
    names.sort();
    for name in names {
        let profile = &config.profiles[name];
        println!("  {}{}", Style::value(name), marker(name));
        println!("    chat: {}", Style::secondary(&profile.chat_endpoint));
        if let Some(upload) = &profile.upload_endpoint {
            println!("    upload: {}", Style::secondary(upload));
        }
    }

    Ok(())
}

fn print_profile_details(profile: &ProfileConfig) {
    let endpoint = profile.endpoint_config();
    let fields = &endpoint.request_fields;

    println!("  chat_endpoint   = {}", endpoint.chat_endpoint);
    println!("  upload_endpoint = {}", endpoint.upload_endpoint);
    if let Some(greet) = &profile.greet_endpoint {
        println!("  greet_endpoint  = {greet}");
    }
    if let Some(env_var) = &profile.token_env {
        let state = if profile.env_token().is_some() {
            "(set)"
        } else {
            "(not set)"
        };
        println!("  token_env       = {env_var} {state}");
    }
    println!(
        "  request fields  = text: {}, token: {}, session: {}, file: {}",
        fields.text, fields.token, fields.session_id, fields.file
    );
    println!("  reply aliases   = {}", endpoint.reply_aliases.join(", "));
    println!("  session aliases = {}", endpoint.session_aliases.join(", "));
    println!("  placeholder     = {}", endpoint.placeholder);
    println!(
        "  uploads         = {}",
        if endpoint.multi_file_upload {
            "all attached files"
        } else {
            "first attached file only"
        }
    );
}
