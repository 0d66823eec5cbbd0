use std::path::PathBuf;

use clap::Parser;

/// Replace chat transcript speaker names with emoji.
#[derive(Debug, Parser)]
#[command(name = "speakermoji", version, about)]
pub struct Cli {
    /// Transcript file. `-` or omitted reads stdin.
    pub input: Option<PathBuf>,

    /// Assign a token to a speaker, e.g. `--token "Alice=🦊"`. Repeatable.
    #[arg(short, long = "token", value_name = "NAME=TOKEN")]
    pub tokens: Vec<String>,

    /// Copy the transformed transcript to the clipboard.
    #[arg(short, long)]
    pub copy: bool,

    /// Save the transformed transcript. Without a path, uses the configured file name.
    #[arg(short, long, value_name = "PATH", num_args = 0..=1)]
    pub save: Option<Option<PathBuf>>,

    /// Print the session snapshot as JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Start the interactive command loop.
    #[arg(short, long)]
    pub interactive: bool,

    /// Override the display theme (system, dark, light).
    #[arg(long, value_name = "THEME")]
    pub theme: Option<String>,

    /// Settings file path.
    #[arg(long, env = "SPEAKERMOJI_SETTINGS", value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Write the effective settings to the settings file and continue.
    #[arg(long)]
    pub write_settings: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_repeated_tokens_and_flags() {
        let cli = Cli::try_parse_from([
            "speakermoji",
            "chat.txt",
            "--token",
            "Alice=🦊",
            "-t",
            "Bob=🐻",
            "--copy",
            "--json",
        ])
        .expect("valid args");
        assert_eq!(cli.input, Some(PathBuf::from("chat.txt")));
        assert_eq!(cli.tokens, vec!["Alice=🦊", "Bob=🐻"]);
        assert!(cli.copy);
        assert!(cli.json);
        assert!(cli.save.is_none());
    }

    #[test]
    fn save_accepts_optional_path() {
        let bare = Cli::try_parse_from(["speakermoji", "--save"]).expect("valid args");
        assert_eq!(bare.save, Some(None));

        let with_path =
            Cli::try_parse_from(["speakermoji", "--save", "out.txt"]).expect("valid args");
        assert_eq!(with_path.save, Some(Some(PathBuf::from("out.txt"))));
    }
}
