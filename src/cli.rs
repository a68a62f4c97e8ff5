//! CLI definitions: argument parsing, subcommands, and help text.

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

pub use clap_complete::generate;

const AFTER_HELP: &str = "\
EXAMPLES:
  ecampus-assistant                         Launch interactive TUI
  ecampus-assistant login --roll-no 21CS042 Sign in (password from ECAMPUS_PASSWORD or stdin)
  ecampus-assistant fetch                   Load attendance and marks
  ecampus-assistant -p \"What is my attendance?\"
  ecampus-assistant -p -                    Read the question from stdin
  ecampus-assistant format --html reply.txt Format a saved reply offline
  ecampus-assistant logout                  Sign out and forget the roll number

ENVIRONMENT:
  ECAMPUS_API_URL       Backend base URL
  ECAMPUS_TIMEOUT_SECS  Request timeout in seconds (default 30)
  ECAMPUS_CONFIG_DIR    Where the session file is stored
  ECAMPUS_PASSWORD      Password for `login` when --password is omitted
";

/// Command-line arguments for the application.
#[derive(Parser)]
#[command(
    author,
    version,
    about = "Ask questions about your eCampus attendance and marks",
    after_help = AFTER_HELP
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Ask a single question then exit (without opening the TUI)
    #[arg(
        short = 'p',
        long,
        help = "Ask one question with the stored session (use '-' to read from stdin)"
    )]
    pub prompt: Option<String>,

    /// Print replies without colors or styling
    #[arg(long, global = true)]
    pub plain: bool,

    /// Increase log verbosity (use multiple times for debug)
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Reduce log output (errors only)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Sign in with your roll number and load your data
    Login {
        #[arg(short, long)]
        roll_no: String,
        /// Password (falls back to ECAMPUS_PASSWORD, then stdin)
        #[arg(long)]
        password: Option<String>,
    },
    /// Sign out and forget the stored roll number
    Logout,
    /// Fetch attendance and marks and print a summary
    Fetch,
    /// Show API URL, config directory, and session
    Status,
    /// Check that the backend is reachable
    Health,
    /// Format a reply offline (file or '-' for stdin)
    Format {
        /// Emit HTML instead of terminal text
        #[arg(long)]
        html: bool,
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell, elvish)
        #[arg(value_parser = clap::value_parser!(Shell))]
        shell: Shell,
    },
}

impl Args {
    /// Log level based on -v/-q flags: error, warn, info, or debug.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose >= 2 {
            "debug"
        } else if self.verbose >= 1 {
            "info"
        } else {
            "warn"
        }
    }

    /// Reject `-p` combined with a subcommand, which would otherwise be ignored.
    pub fn check_conflicts(&self) -> Result<(), clap::Error> {
        if self.prompt.is_some() && self.command.is_some() {
            return Err(Args::command().error(
                ErrorKind::ArgumentConflict,
                "--prompt cannot be used with a subcommand",
            ));
        }
        Ok(())
    }

    /// True when the TUI will be launched (no subcommand, no prompt).
    pub fn is_interactive(&self) -> bool {
        self.command.is_none() && self.prompt.is_none()
    }
}
