use inquire::autocompletion::{Autocomplete, Replacement};

// Available slash commands: (command, description)
pub const SLASH_COMMANDS: &[(&str, &str)] = &[
    ("/attach", "Attach a file to the next message"),
    ("/config", "Show current configuration"),
    ("/detach", "Remove all attached files"),
    ("/files", "List attached files"),
    ("/help", "Show available commands"),
    ("/history", "Show the conversation so far"),
    ("/new", "Start a new session"),
    ("/quit", "Exit chat mode"),
    ("/session", "Show the current session id"),
];

/// Slash command autocompleter
#[derive(Clone, Default)]
pub struct SlashCommandCompleter;

impl Autocomplete for SlashCommandCompleter {
    fn get_suggestions(&mut self, input: &str) -> Result<Vec<String>, inquire::CustomUserError> {
        if !input.starts_with('/') || input.contains(char::is_whitespace) {
            return Ok(vec![]);
        }

        let suggestions: Vec<String> = SLASH_COMMANDS
            .iter()
            .filter(|(cmd, _)| cmd.starts_with(input))
            .map(|(cmd, desc)| format!("{cmd}  {desc}"))
            .collect();

        Ok(suggestions)
    }

    fn get_completion(
        &mut self,
        _input: &str,
        highlighted_suggestion: Option<String>,
    ) -> Result<Replacement, inquire::CustomUserError> {
        let replacement =
            highlighted_suggestion.map(|s| s.split_whitespace().next().unwrap_or("").to_string());
        Ok(replacement)
    }
}

/// Slash command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlashCommand {
    /// Stage a file; `None` when the path is missing.
    Attach(Option<String>),
    Config,
    Detach,
    Files,
    Help,
    History,
    New,
    Quit,
    Session,
    Unknown(String),
}

/// Input types
#[derive(Debug)]
pub enum Input {
    Text(String),
    Command(SlashCommand),
    Empty,
}

pub fn parse_input(input: &str) -> Input {
    let input = input.trim();

    if input.is_empty() {
        return Input::Empty;
    }

    input
        .strip_prefix('/')
        .map_or_else(|| Input::Text(input.to_string()), parse_slash_command)
}

fn parse_slash_command(cmd: &str) -> Input {
    let (name, rest) = cmd
        .split_once(char::is_whitespace)
        .map_or((cmd, ""), |(name, rest)| (name, rest.trim()));

    let command = match name {
        "attach" | "a" => Some(SlashCommand::Attach(
            (!rest.is_empty()).then(|| unquote(rest).to_string()),
        )),
        "config" => Some(SlashCommand::Config),
        "detach" => Some(SlashCommand::Detach),
        "files" => Some(SlashCommand::Files),
        "help" | "?" => Some(SlashCommand::Help),
        "history" => Some(SlashCommand::History),
        "new" | "reset" => Some(SlashCommand::New),
        "quit" | "exit" | "q" => Some(SlashCommand::Quit),
        "session" => Some(SlashCommand::Session),
        _ => None,
    };

    Input::Command(command.unwrap_or_else(|| {
        SlashCommand::Unknown(cmd.split_whitespace().collect::<Vec<_>>().join(" "))
    }))
}

// Paths pasted from a file manager often arrive quoted.
fn unquote(path: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = path
            .strip_prefix(quote)
            .and_then(|p| p.strip_suffix(quote))
        {
            return inner;
        }
    }
    path
}
