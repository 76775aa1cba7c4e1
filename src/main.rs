use clap::Parser;
use std::process::ExitCode;

use parley_cli::cli::commands::send::SendOptions;
use parley_cli::cli::commands::{chat, init, profiles, send, session, token};
use parley_cli::cli::{Args, Command};
use parley_cli::config::ConfigError;
use parley_cli::output::{self, OutputConfig};
use parley_cli::ui::Style;

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    output::init(OutputConfig::from_flags(
        args.global.quiet,
        args.global.no_color,
    ));

    match run(args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {e:#}", Style::error("Error:"));
            exit_code_for(&e)
        }
    }
}

async fn run(args: Args) -> anyhow::Result<ExitCode> {
    let global = args.global;

    match args.command {
        None | Some(Command::Chat) => chat::run_chat(&global).await?,
        Some(Command::Send { text, files }) => {
            let outcome = send::run_send(&global, SendOptions { text, files }).await?;
            if outcome.is_failure() {
                return Ok(code(exitcode::UNAVAILABLE));
            }
        }
        Some(Command::New) => session::run_new(&global)?,
        Some(Command::Session) => session::print_session(&global)?,
        Some(Command::Token { command }) => token::run_token(&global, command)?,
        Some(Command::Profiles { name }) => profiles::print_profiles(name.as_deref())?,
        Some(Command::Init {
            greet_endpoint,
            token_env,
            default,
        }) => {
            let options = init::InitOptions {
                greet_endpoint,
                token_env,
                make_default: default,
            };
            init::run_init(&global, options)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    if error.downcast_ref::<ConfigError>().is_some() {
        code(exitcode::CONFIG)
    } else {
        code(exitcode::SOFTWARE)
    }
}

fn code(value: exitcode::ExitCode) -> ExitCode {
    ExitCode::from(u8::try_from(value).unwrap_or(1))
}
