//! # eCampus Assistant
//!
//! Terminal client for the eCampus AI assistant: sign in with a roll number,
//! load attendance and marks, and ask questions about them.
//!
//! ## Features
//! - Interactive terminal UI (default)
//! - Single question mode with `-p` or `--prompt`
//! - One-shot `login`, `logout`, `fetch`, `status`, `health` commands
//! - Offline `format` command (terminal or HTML output)

mod cli;
mod core;
mod run;
mod tui;

use std::io;

use clap::{CommandFactory, Parser};
use dotenv::dotenv;

use cli::{Args, Commands};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    dotenv().ok();

    let args = Args::parse();
    if let Err(e) = args.check_conflicts() {
        e.exit();
    }
    run::init_logger(&args);

    // Offline commands run before config so they work without a backend.
    match &args.command {
        Some(Commands::Completions { shell }) => {
            let mut cmd = Args::command();
            cli::generate(*shell, &mut cmd, core::app::NAME, &mut io::stdout());
            return Ok(());
        }
        Some(Commands::Format { html, input }) => {
            return run::run_format(&args, *html, input);
        }
        _ => {}
    }

    // Print user-friendly message; exit uses Display not Debug
    let config = core::config::load().unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    });
    log::debug!("Using backend {}", config.api_url);

    let result = match (&args.command, &args.prompt) {
        (Some(Commands::Login { roll_no, password }), _) => {
            run::run_login(&args, &config, roll_no, password.as_deref()).await
        }
        (Some(Commands::Logout), _) => run::run_logout(&config).await,
        (Some(Commands::Fetch), _) => run::run_fetch(&args, &config).await,
        (Some(Commands::Status), _) => run::run_status(&config),
        (Some(Commands::Health), _) => run::run_health(&config).await,
        (Some(Commands::Format { .. } | Commands::Completions { .. }), _) => Ok(()),
        (None, Some(prompt)) => run::run_single_prompt(&args, &config, prompt).await,
        (None, None) => run::launch_tui(config).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
