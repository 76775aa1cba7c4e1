//! Chat mode UI components.

use crate::config::EndpointConfig;
use crate::session::{FileRef, Message, Role};
use crate::ui::{Style, format_size};

use super::command::SLASH_COMMANDS;

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn print_header(profile_name: &str) {
    println!(
        "{} {} - {}",
        Style::header("parley"),
        Style::version(format!("v{VERSION}")),
        Style::value(profile_name)
    );
    println!();
}

pub fn print_goodbye() {
    println!("{}", Style::success("Goodbye!"));
}

pub fn print_greeting(message: &str) {
    println!("{} {message}", Style::role(Role::Assistant));
    println!();
}

pub fn print_message(message: &Message) {
    println!("{} {}", Style::role(message.role()), message.content());
    for file in message.attachments() {
        println!("  {}", describe_file(file));
    }
    println!();
}

pub fn print_history(messages: &[Message]) {
    if messages.is_empty() {
        println!("{}", Style::secondary("No messages yet."));
        println!();
        return;
    }
    for message in messages {
        print_message(message);
    }
}

pub fn print_files(files: &[FileRef], multi_file_upload: bool) {
    if files.is_empty() {
        println!("{}", Style::secondary("No files attached."));
        println!();
        return;
    }
    println!("{}", Style::header("Attached files"));
    for (index, file) in files.iter().enumerate() {
        let note = if index > 0 && !multi_file_upload {
            Style::hint(" (not uploaded)")
        } else {
            String::new()
        };
        println!("  {}{note}", describe_file(file));
    }
    println!();
}

fn describe_file(file: &FileRef) -> String {
    format!(
        "📎 {} {}",
        Style::value(file.name()),
        Style::secondary(format!("({})", format_size(file.len())))
    )
}

pub fn print_session(session_id: Option<&str>) {
    println!(
        "  {}  {}",
        Style::label("session"),
        session_id.map_or_else(|| Style::secondary("(none yet)"), Style::value)
    );
    println!();
}

pub fn print_config(profile_name: &str, config: &EndpointConfig, has_token: bool) {
    println!("{}", Style::header("Configuration"));
    println!(
        "  {}   {}",
        Style::label("profile"),
        Style::value(profile_name)
    );
    println!(
        "  {}      {}",
        Style::label("chat"),
        Style::secondary(&config.chat_endpoint)
    );
    println!(
        "  {}    {}",
        Style::label("upload"),
        Style::secondary(&config.upload_endpoint)
    );
    println!(
        "  {}     {}",
        Style::label("token"),
        if has_token {
            Style::value("(set)")
        } else {
            Style::secondary("(not set)")
        }
    );
    println!(
        "  {}   {}",
        Style::label("replies"),
        Style::secondary(config.reply_aliases.join(", "))
    );
    println!();
}

pub fn print_help() {
    println!("{}", Style::header("Available commands"));
    for (command, description) in SLASH_COMMANDS {
        println!(
            "  {}  {}",
            Style::command(format!("{command:9}")),
            Style::secondary(description)
        );
    }
    println!();
}

pub fn print_success(message: &str) {
    println!("{} {message}", Style::success("✓"));
    println!();
}

pub fn print_error(message: &str) {
    eprintln!("{} {message}", Style::error("Error:"));
    eprintln!();
}
