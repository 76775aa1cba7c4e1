use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "parley")]
#[command(about = "Terminal chat client for HTTP chat APIs")]
#[command(version)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Options accepted by every subcommand.
#[derive(ClapArgs, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Profile name from the config file
    #[arg(short = 'p', long, global = true)]
    pub profile: Option<String>,

    /// Chat endpoint URL (overrides the profile)
    #[arg(short = 'e', long, global = true)]
    pub endpoint: Option<String>,

    /// Upload endpoint URL (overrides the profile)
    #[arg(long, global = true)]
    pub upload_endpoint: Option<String>,

    /// Keep the session id in memory only
    #[arg(long, global = true)]
    pub ephemeral: bool,

    /// Suppress status output
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Interactive chat mode (default)
    Chat,
    /// Send a single message and print the reply
    Send {
        /// Message text (reads from stdin if omitted and no file is given)
        text: Option<String>,

        /// File to attach (repeatable)
        #[arg(short = 'f', long = "file")]
        files: Vec<PathBuf>,
    },
    /// Start a new session (forget the stored session id)
    New,
    /// Show the stored session id
    Session,
    /// Manage the stored auth token
    Token {
        #[command(subcommand)]
        command: TokenCommand,
    },
    /// List configured profiles
    Profiles {
        /// Show details for a specific profile
        name: Option<String>,
    },
    /// Create or update a profile in the config file
    Init {
        /// Greeting endpoint URL
        #[arg(long)]
        greet_endpoint: Option<String>,

        /// Environment variable holding the auth token
        #[arg(long)]
        token_env: Option<String>,

        /// Make this the default profile
        #[arg(long)]
        default: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum TokenCommand {
    /// Store the auth token sent with every message
    Set {
        /// The token value
        token: String,
    },
    /// Remove the stored auth token
    Clear,
    /// Show whether a token is available
    Status,
}
