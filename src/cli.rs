//! CLI argument parsing via clap.

use clap::Parser;
use lineterm::build_info;
use std::path::PathBuf;

/// An embeddable line terminal, demoed as a full-screen echo shell.
#[derive(Debug, Parser)]
#[command(
    name = "lineterm",
    version = build_info::VERSION_BLOCK,
    after_help = build_info::HELP_TRAILER
)]
pub struct Args {
    /// Path to config file (default: ./lineterm.toml).
    #[arg(short = 'c', long = "config")]
    pub config: Option<PathBuf>,

    /// Theme to activate at startup.
    #[arg(long = "theme")]
    pub theme: Option<String>,

    /// Prompt string shown before the input line.
    #[arg(long = "prompt")]
    pub prompt: Option<String>,

    /// Cursor blink interval in milliseconds.
    #[arg(long = "rate", value_name = "MS")]
    pub rate: Option<u64>,

    /// Disable input history recall.
    #[arg(long = "no-history")]
    pub no_history: bool,

    /// Disable color output.
    #[arg(long = "no-color")]
    pub no_color: bool,
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;
    use lineterm::build_info;

    #[test]
    fn defaults_leave_overrides_unset() {
        let args = Args::parse_from(["lineterm"]);
        assert!(args.config.is_none());
        assert!(args.theme.is_none());
        assert!(args.prompt.is_none());
        assert!(args.rate.is_none());
        assert!(!args.no_history);
        assert!(!args.no_color);
    }

    #[test]
    fn theme_and_rate_parse_together() {
        let args = Args::parse_from(["lineterm", "--theme", "gruvbox_dark", "--rate", "250"]);
        assert_eq!(args.theme.as_deref(), Some("gruvbox_dark"));
        assert_eq!(args.rate, Some(250));
    }

    #[test]
    fn no_history_parses_with_config_path() {
        let args = Args::parse_from(["lineterm", "-c", "demo.toml", "--no-history"]);
        assert_eq!(args.config.as_deref(), Some(std::path::Path::new("demo.toml")));
        assert!(args.no_history);
    }

    #[test]
    fn version_flag_renders_the_build_block() {
        let err = Args::try_parse_from(["lineterm", "--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
        let rendered = err.to_string();
        assert!(rendered.starts_with("lineterm "), "got: {rendered}");
        assert!(rendered.contains(build_info::CURRENT.commit));
        assert!(rendered.contains(build_info::CURRENT.timestamp));
    }
}
