//! speakermoji terminal application entry point.
//!
//! One-shot mode reads a transcript, applies `--token` assignments, prints the
//! result and optionally exports it. `--interactive` drops into the command
//! loop instead. Logs go to stderr so stdout carries only the transcript.

mod cli;
mod commands;
mod export;
mod notify;
mod repl;
mod settings;
mod state;
mod theme;

use std::io::{self, Read};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};

use cli::Cli;
use export::SystemClipboard;
use settings::{default_settings_path, load_settings, normalize_theme, save_settings};
use state::AppState;

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) if p != Path::new("-") => commands::read_transcript_file(p)
            .with_context(|| format!("failed to read transcript {}", p.display())),
        _ => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("failed to read transcript from stdin")?;
            Ok(commands::strip_bom(text))
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("speakermoji=warn")),
        )
        .init();

    let cli = Cli::parse();

    let settings_path = cli.settings.clone().unwrap_or_else(default_settings_path);
    let mut settings = load_settings(&settings_path);
    if let Some(theme) = cli.theme.as_deref() {
        settings.theme = normalize_theme(theme);
    }
    if cli.write_settings {
        save_settings(&settings_path, &settings)
            .with_context(|| format!("failed to write settings {}", settings_path.display()))?;
        info!(path = %settings_path.display(), "settings written");
    }

    let mut state = AppState::new(settings, Arc::new(SystemClipboard));

    // In interactive mode without INPUT, stdin is the command stream.
    if cli.input.is_some() || !cli.interactive {
        let text = read_input(cli.input.as_deref())?;
        commands::load_transcript(&mut state, text);
    }

    for raw in &cli.tokens {
        if let Err(e) = commands::assign_token(&mut state, raw) {
            warn!(assignment = %raw, error = %e, "token assignment ignored");
            eprintln!("{}", state.theme.error(&e));
        }
    }

    if cli.interactive {
        let stdin = io::stdin();
        return repl::run(&mut state, stdin.lock(), io::stdout()).await;
    }

    if cli.json {
        let json = serde_json::to_string_pretty(&state.session.snapshot())
            .context("failed to serialize session snapshot")?;
        println!("{json}");
    } else {
        // Speaker summary on stderr keeps stdout pipeable.
        eprintln!("{}", commands::render_speakers(&state));
        println!("{}", state.session.output());
    }

    if cli.copy {
        commands::copy_output(&mut state);
    }
    if let Some(path) = cli.save.clone() {
        commands::save_output(&mut state, path);
    }
    commands::flush_exports(&mut state).await;
    if let Some(toasts) = commands::render_toasts(&state) {
        eprintln!("{toasts}");
    }
    Ok(())
}
