//! Line-oriented interactive loop.
//!
//! Every command that changes the transcript or a token re-renders nothing
//! by itself; `show` prints the current derived output on demand.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use anyhow::Result;

use crate::commands;
use crate::state::AppState;

const HELP: &str = "\
commands:
  load PATH          read a transcript file
  paste              read transcript lines until a lone `.`
  speakers           list speakers and their tokens
  token NAME=TOKEN   assign a token to a speaker
  show               print the transformed transcript
  copy               copy the transformed transcript to the clipboard
  save [PATH]        save the transformed transcript
  theme              toggle dark/light
  help               show this help
  quit               exit";

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Load(PathBuf),
    Paste,
    Speakers,
    Token(String),
    Show,
    Copy,
    Save(Option<PathBuf>),
    Theme,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub fn parse_command(line: &str) -> Command {
    let line = line.trim();
    let (verb, rest) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };
    match (verb.to_ascii_lowercase().as_str(), rest) {
        ("", _) => Command::Empty,
        ("load", path) if !path.is_empty() => Command::Load(PathBuf::from(path)),
        ("paste", "") => Command::Paste,
        ("speakers", "") => Command::Speakers,
        ("token", assignment) if !assignment.is_empty() => Command::Token(assignment.to_string()),
        ("show", "") => Command::Show,
        ("copy", "") => Command::Copy,
        ("save", "") => Command::Save(None),
        ("save", path) => Command::Save(Some(PathBuf::from(path))),
        ("theme", "") => Command::Theme,
        ("help" | "?", "") => Command::Help,
        ("quit" | "exit", "") => Command::Quit,
        _ => Command::Unknown(line.to_string()),
    }
}

/// Read lines until a lone `.` or end of input.
fn read_paste<R: BufRead>(input: &mut R) -> Result<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        let content = line.trim_end_matches(['\r', '\n']);
        if content == "." {
            break;
        }
        lines.push(content.to_string());
    }
    Ok(lines.join("\n"))
}

pub async fn run<R: BufRead, W: Write>(
    state: &mut AppState,
    mut input: R,
    mut out: W,
) -> Result<()> {
    writeln!(out, "speakermoji — type `help` for commands")?;
    let mut line = String::new();
    loop {
        if let Some(toasts) = commands::render_toasts(state) {
            writeln!(out, "{toasts}")?;
        }
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            break;
        }

        match parse_command(&line) {
            Command::Empty => {}
            Command::Load(path) => match commands::read_transcript_file(&path) {
                Ok(text) => {
                    commands::load_transcript(state, text);
                    writeln!(out, "{}", commands::render_speakers(state))?;
                }
                Err(e) => {
                    let msg = format!("cannot read {}: {e}", path.display());
                    writeln!(out, "{}", state.theme.error(&msg))?;
                }
            },
            Command::Paste => {
                writeln!(out, "paste the transcript, end with a line containing only `.`")?;
                let text = read_paste(&mut input)?;
                commands::load_transcript(state, text);
                writeln!(out, "{}", commands::render_speakers(state))?;
            }
            Command::Speakers => writeln!(out, "{}", commands::render_speakers(state))?,
            Command::Token(raw) => match commands::assign_token(state, &raw) {
                Ok(()) => writeln!(out, "{}", commands::render_speakers(state))?,
                Err(e) => writeln!(out, "{}", state.theme.error(&e))?,
            },
            Command::Show => writeln!(out, "{}", commands::render_output(state))?,
            Command::Copy => commands::copy_output(state),
            Command::Save(path) => commands::save_output(state, path),
            Command::Theme => {
                let theme = commands::toggle_theme(state);
                writeln!(out, "theme: {}", theme.as_str())?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => break,
            Command::Unknown(raw) => {
                writeln!(out, "unknown command `{raw}` — type `help`")?;
            }
        }
    }

    commands::flush_exports(state).await;
    if let Some(toasts) = commands::render_toasts(state) {
        writeln!(out, "{toasts}")?;
    }
    Ok(())
}
