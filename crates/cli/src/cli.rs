//! CLI entry and dispatch.
//!
//! Each invocation boots a fresh provider against the session file, the same
//! way a page load initializes the dashboard from local storage.

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;

use dashkit_auth::{
    AuthConfig, AuthProvider, AuthState, AuthUser, FileSessionStore, SessionStore, auth_guard,
    claims::seconds_until_expiry,
};
use dashkit_mock::Category;
use dashkit_observability::{LogFormat, tracing::init};

#[derive(Parser)]
#[command(name = "dashkit")]
#[command(version)]
#[command(about = "Dashboard session and mock-data tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Session file (default: OS data directory)
    #[arg(long, env = "DASHKIT_SESSION_FILE", value_name = "PATH", global = true)]
    session_file: Option<PathBuf>,

    /// Emit JSON logs instead of compact lines
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    #[command(flatten)]
    Session(SessionCommand),
    /// Print mock values
    Mock {
        /// Category name (e.g. full_name, avatar, price)
        category: Category,
        /// First index
        #[arg(short, long, default_value_t = 0)]
        index: usize,
        /// Number of consecutive values
        #[arg(short, long, default_value_t = 1)]
        count: usize,
    },
}

#[derive(clap::Subcommand)]
enum SessionCommand {
    /// Show the restored session
    Status,
    /// Sign in with email and password
    Login {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
    },
    /// Create an account and sign in
    Register {
        #[arg(short, long)]
        email: String,
        #[arg(short, long)]
        password: String,
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
    },
    /// Sign out and remove the stored token
    Logout,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let format = if cli.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    init(format, "warn");

    match cli.command {
        Commands::Mock {
            category,
            index,
            count,
        } => print_mock(category, index, count),
        Commands::Session(command) => {
            let mut config = AuthConfig::from_env();
            if cli.session_file.is_some() {
                config.session_file = cli.session_file;
            }
            run_auth(command, &config)
        }
    }
}

fn run_auth(command: SessionCommand, config: &AuthConfig) -> Result<()> {
    let store = match &config.session_file {
        Some(path) => FileSessionStore::new(path),
        None => FileSessionStore::in_data_dir().context("failed to locate session file")?,
    }
    .with_key(config.storage_key.as_str());
    tracing::debug!(path = %store.path().display(), "using session file");

    let now = Utc::now();
    let mut auth = AuthProvider::from_config(store, config)
        .context("invalid auth configuration")?;
    auth.initialize(now);

    match command {
        SessionCommand::Status => {}
        SessionCommand::Login { email, password } => {
            auth.login(&email, &password, now)?;
        }
        SessionCommand::Register {
            email,
            password,
            first_name,
            last_name,
        } => {
            auth.register(&email, &password, &first_name, &last_name, now)
                .context("registration failed")?;
        }
        SessionCommand::Logout => {
            auth.logout().context("signed out, but the stored token could not be removed")?;
        }
    }

    let expires_in = auth
        .store()
        .get()
        .ok()
        .flatten()
        .and_then(|token| seconds_until_expiry(token.as_str(), now));
    print_state(auth.state(), expires_in)
}

fn print_state(state: &AuthState, expires_in: Option<i64>) -> Result<()> {
    let report = serde_json::json!({
        "state": state,
        "phase": state.phase(),
        "displayName": state.user().map(AuthUser::display_name),
        "redirect": auth_guard(state).redirect_path(),
        "expiresInSecs": expires_in,
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn print_mock(category: Category, index: usize, count: usize) -> Result<()> {
    let now = Utc::now();
    for i in index..index.saturating_add(count) {
        match dashkit_mock::value(category, i, now) {
            Some(value) => println!("{i}\t{value}"),
            None => {
                tracing::warn!(%category, index = i, "no mock value at index");
                break;
            }
        }
    }
    Ok(())
}
