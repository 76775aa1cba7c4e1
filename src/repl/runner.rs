use anyhow::Result;
use inquire::Text;
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use std::path::Path;

use super::command::{Input, SlashCommand, SlashCommandCompleter, parse_input};
use super::ui;
use crate::input::InputReader;
use crate::session::{ChatSession, TurnOutcome};
use crate::storage::SessionContext;
use crate::transport::HttpTransport;
use crate::ui::Spinner;

/// Settings of the REPL that are not part of the session core.
#[derive(Debug, Clone)]
pub struct ReplOptions {
    /// Profile name, for display.
    pub profile_name: String,
    /// Queried once at start-up when set.
    pub greet_endpoint: Option<String>,
}

/// An interactive chat loop around one [`ChatSession`].
pub struct Repl<C> {
    session: ChatSession<HttpTransport, C>,
    options: ReplOptions,
}

impl<C: SessionContext> Repl<C> {
    pub const fn new(session: ChatSession<HttpTransport, C>, options: ReplOptions) -> Self {
        Self { session, options }
    }

    pub async fn run(&mut self) -> Result<()> {
        ui::print_header(&self.options.profile_name);
        self.greet().await;

        let prompt_style = Styled::new("❯")
            .with_fg(Color::LightBlue)
            .with_attr(Attributes::BOLD);
        let mut render_config = RenderConfig::default()
            .with_prompt_prefix(prompt_style)
            .with_answered_prompt_prefix(prompt_style);

        // Non-highlighted suggestions: gray
        render_config.option = StyleSheet::new().with_fg(Color::Grey);
        // Highlighted suggestion: purple
        render_config.selected_option = Some(StyleSheet::new().with_fg(Color::DarkMagenta));

        loop {
            let help = self.help_message();
            let input = Text::new("")
                .with_render_config(render_config)
                .with_autocomplete(SlashCommandCompleter)
                .with_help_message(&help)
                .prompt();

            match input {
                Ok(line) => match parse_input(&line) {
                    Input::Empty => {}
                    Input::Command(cmd) => {
                        if !self.handle_command(cmd) {
                            break;
                        }
                    }
                    Input::Text(text) => self.send(text).await,
                },
                Err(
                    inquire::InquireError::OperationCanceled
                    | inquire::InquireError::OperationInterrupted,
                ) => {
                    println!(); // Clear line before goodbye message
                    break;
                }
                Err(e) => return Err(e.into()),
            }
        }

        ui::print_goodbye();
        Ok(())
    }

    fn help_message(&self) -> String {
        match self.session.draft().files().len() {
            0 => "Type a message, /help for commands, Ctrl+C to quit".to_string(),
            1 => "1 file attached. Type a message to send it, /files to review".to_string(),
            n => format!("{n} files attached. Type a message to send them, /files to review"),
        }
    }

    async fn greet(&self) {
        let Some(url) = &self.options.greet_endpoint else {
            return;
        };

        let token = self.session.auth_token();
        let session_id = self.session.session_id();

        match self
            .session
            .transport()
            .greet(url, token.as_deref(), session_id.as_deref())
            .await
        {
            Ok(greeting) if !greeting.greeted => {
                if let Some(message) = greeting.message.filter(|m| !m.trim().is_empty()) {
                    ui::print_greeting(&message);
                }
            }
            Ok(_) => {}
            Err(e) => crate::warn!("Greeting unavailable: {e}"),
        }
    }

    async fn send(&mut self, text: String) {
        self.session.draft_mut().set_text(text);

        let spinner = Spinner::new("Waiting for reply...");
        let outcome = self.session.submit_draft().await;
        spinner.stop();

        if outcome != TurnOutcome::Ignored
            && let Some(reply) = self.session.messages().last()
        {
            ui::print_message(reply);
        }
    }

    fn handle_command(&mut self, cmd: SlashCommand) -> bool {
        match cmd {
            SlashCommand::Attach(path) => self.attach(path.as_deref()),
            SlashCommand::Config => {
                let has_token = self.session.auth_token().is_some();
                ui::print_config(&self.options.profile_name, self.session.config(), has_token);
            }
            SlashCommand::Detach => {
                self.session.draft_mut().clear_files();
                ui::print_success("Attachments removed");
            }
            SlashCommand::Files => ui::print_files(
                self.session.draft().files(),
                self.session.config().multi_file_upload,
            ),
            SlashCommand::Help => ui::print_help(),
            SlashCommand::History => ui::print_history(self.session.messages()),
            SlashCommand::New => match self.session.start_new() {
                Ok(()) => ui::print_success("Started a new session"),
                Err(e) => ui::print_error(&format!("{e:#}")),
            },
            SlashCommand::Quit => return false,
            SlashCommand::Session => ui::print_session(self.session.session_id().as_deref()),
            SlashCommand::Unknown(cmd) => ui::print_error(&format!("Unknown command: /{cmd}")),
        }
        true
    }

    fn attach(&mut self, path: Option<&str>) {
        let Some(path) = path else {
            ui::print_error("Usage: /attach <path>");
            return;
        };

        match InputReader::read_attachment(Path::new(path)) {
            Ok(file) => {
                let name = file.name().to_string();
                self.session.draft_mut().stage_file(file);
                ui::print_success(&format!("Attached {name}"));
            }
            Err(e) => ui::print_error(&format!("{e:#}")),
        }
    }
}
