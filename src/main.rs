//! Help Studio - Main Entry Point
//!
//! Loads help content and runs an editing session driven by commands on stdin.
//!
//! Usage: `help-studio [CONTENT_FILE]`. Without an argument the content file
//! from the settings is used.

use help_studio::cli;
use help_studio::config::{load_config, save_config_silent, Settings};
use help_studio::content::load_help_tree;
use help_studio::error::{Error, Result};
use help_studio::help::HelpSession;
use log::{error, info};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

/// Application name constant.
const APP_NAME: &str = "Help Studio";

fn main() -> ExitCode {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    info!("Starting {}", APP_NAME);

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut settings = load_config();
    let content_path = content_path(&settings)?;

    let tree = load_help_tree(&content_path)?;
    remember_content_file(&mut settings, content_path);

    let mut session = HelpSession::new(&tree, &settings);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    cli::run(&mut session, stdin.lock(), &mut stdout)
}

/// Content file from the first argument, else from the settings.
fn content_path(settings: &Settings) -> Result<PathBuf> {
    std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .or_else(|| settings.content_path.clone())
        .ok_or_else(|| {
            Error::Application(
                "No help content file given. Usage: help-studio <CONTENT_FILE>".to_string(),
            )
        })
}

fn remember_content_file(settings: &mut Settings, path: PathBuf) {
    let path = path.canonicalize().unwrap_or(path);
    if settings.recent_content_files.first() == Some(&path) {
        return;
    }
    settings.add_recent_content_file(path);
    save_config_silent(settings);
}
