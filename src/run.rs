//! Application run modes: logger init, one-shot commands, TUI launch.

use std::io::{self, IsTerminal, Read};
use std::path::Path;

use crate::cli::Args;
use crate::core;
use crate::core::api::ApiClient;
use crate::core::assistant::{Assistant, NotSignedIn};
use crate::core::config::Config;
use crate::core::format::format_message;
use crate::core::render::{render_html, render_terminal, strip_controls};
use crate::core::session::SessionStore;

type RunResult = Result<(), Box<dyn std::error::Error>>;

/// Initialize env_logger. In TUI mode, writes to file to avoid corrupting the display.
pub fn init_logger(args: &Args) {
    let log_level = args.log_level();
    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level));

    if args.is_interactive() {
        let log_path = core::paths::cache_dir().and_then(|d| {
            std::fs::create_dir_all(&d).ok()?;
            Some(d.join(format!("{}.log", core::app::NAME)))
        });
        if let Some(path) = log_path
            && let Ok(file) = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
        {
            logger.target(env_logger::Target::Pipe(Box::new(file)));
        }
    }
    let _ = logger.try_init();
}

fn session_store(config: &Config) -> SessionStore {
    SessionStore::new(config.config_dir.as_deref())
}

fn assistant(config: &Config) -> Result<Assistant, Box<dyn std::error::Error>> {
    let client = ApiClient::new(config)?;
    Ok(Assistant::restore(client, session_store(config)))
}

/// Print a reply through the formatter; styled only when stdout is a terminal.
fn print_formatted(text: &str, plain: bool) {
    let styled = !plain && io::stdout().is_terminal();
    println!("{}", render_terminal(&format_message(text), styled));
}

fn read_input(path: &Path) -> io::Result<String> {
    if path == Path::new("-") {
        let mut s = String::new();
        io::stdin().read_to_string(&mut s)?;
        Ok(s)
    } else {
        std::fs::read_to_string(path)
    }
}

/// Single prompt mode: ask one question with the stored session.
pub async fn run_single_prompt(args: &Args, config: &Config, prompt_arg: &str) -> RunResult {
    let prompt = if prompt_arg == "-" {
        io::read_to_string(io::stdin())?
    } else {
        prompt_arg.to_string()
    };
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err("empty prompt".into());
    }

    let mut assistant = assistant(config)?;
    if !assistant.state().is_signed_in() {
        return Err(Box::new(NotSignedIn));
    }
    if let Some(reply) = assistant.ask(prompt).await? {
        print_formatted(&reply, args.plain);
    }
    Ok(())
}

/// Sign in, then load data so the backend can answer questions.
pub async fn run_login(
    args: &Args,
    config: &Config,
    roll_no: &str,
    password: Option<&str>,
) -> RunResult {
    let password = match password {
        Some(p) => p.to_string(),
        None => match std::env::var("ECAMPUS_PASSWORD") {
            Ok(p) if !p.is_empty() => p,
            _ => {
                if io::stdin().is_terminal() {
                    eprint!("Password: ");
                }
                let mut line = String::new();
                io::stdin().read_line(&mut line)?;
                line.trim_end_matches(['\r', '\n']).to_string()
            }
        },
    };

    let mut assistant = assistant(config)?;
    assistant.login(roll_no, &password).await?;
    println!(
        "Signed in as {}.",
        assistant.state().roll_no().unwrap_or(roll_no)
    );
    let summary = assistant.fetch_data().await?;
    print_formatted(&summary, args.plain);
    Ok(())
}

pub async fn run_logout(config: &Config) -> RunResult {
    let mut assistant = assistant(config)?;
    let was = assistant.state().roll_no().map(String::from);
    assistant.logout().await?;
    match was {
        Some(r) => println!("Signed out {}.", r),
        None => println!("No active session."),
    }
    Ok(())
}

pub async fn run_fetch(args: &Args, config: &Config) -> RunResult {
    let mut assistant = assistant(config)?;
    let summary = assistant.fetch_data().await?;
    print_formatted(&summary, args.plain);
    Ok(())
}

pub fn run_status(config: &Config) -> RunResult {
    let store = session_store(config);
    println!("{} {}", core::app::NAME, core::app::VERSION);
    println!("API URL:    {}", config.api_url);
    println!("Timeout:    {}s", config.request_timeout.as_secs());
    match store.path() {
        Some(p) => println!("Session:    {}", p.display()),
        None => println!("Session:    (no config directory)"),
    }
    match store.load() {
        Some(r) => println!("Signed in:  {}", r),
        None => println!("Signed in:  no"),
    }
    Ok(())
}

pub async fn run_health(config: &Config) -> RunResult {
    let client = ApiClient::new(config)?;
    let reply = client.health().await?;
    println!(
        "{}: {}",
        strip_controls(&reply.status),
        strip_controls(reply.message.as_deref().unwrap_or("(no message)"))
    );
    Ok(())
}

pub fn run_format(args: &Args, html: bool, input: &Path) -> RunResult {
    let raw = read_input(input)?;
    let raw = raw.strip_suffix('\n').unwrap_or(&raw);
    let blocks = format_message(raw);
    if html {
        println!("{}", render_html(&blocks));
    } else {
        let styled = !args.plain && io::stdout().is_terminal();
        println!("{}", render_terminal(&blocks, styled));
    }
    Ok(())
}

/// Launch the TUI in a blocking thread. Returns on panic or IO error.
pub async fn launch_tui(config: Config) -> RunResult {
    let join_result: Result<io::Result<()>, tokio::task::JoinError> =
        tokio::task::spawn_blocking(move || crate::tui::run(config)).await;

    match join_result {
        Ok(io_result) => io_result?,
        Err(join_err) => {
            if let Ok(panic) = join_err.try_into_panic() {
                let msg = if let Some(s) = panic.downcast_ref::<&str>() {
                    s.to_string()
                } else if let Some(s) = panic.downcast_ref::<String>() {
                    s.clone()
                } else {
                    format!("{:?}", panic)
                };
                eprintln!("TUI panic: {}", msg);
            }
            return Err(
                Box::new(io::Error::other("TUI thread panicked")) as Box<dyn std::error::Error>
            );
        }
    }
    Ok(())
}
