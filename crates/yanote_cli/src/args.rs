//! Command-line configuration.
//!
//! # Responsibility
//! - Parse startup options with clap.
//! - Resolve defaults for logging and the initial app state.

use clap::Parser;
use std::path::PathBuf;
use yanote_core::{
    default_log_level, parse_note_color, Composer, LoggingConfig, NoteBoard, NoteColor,
};

const DEFAULT_LOG_SUBDIR: [&str; 2] = ["yanote", "logs"];

#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "yanote", version, about = "yet another notes app")]
pub struct Args {
    /// Log level: trace|debug|info|warn|error.
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files.
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,

    /// Start with an empty note list instead of the demo notes.
    #[arg(long)]
    pub no_seed: bool,

    /// Initial draft color: red|blue|green|pink.
    #[arg(long, value_name = "COLOR", value_parser = parse_note_color)]
    pub color: Option<NoteColor>,
}

impl Args {
    pub fn logging_config(&self) -> LoggingConfig {
        let level = self
            .log_level
            .clone()
            .unwrap_or_else(|| default_log_level().to_string());
        let log_dir = self.log_dir.clone().unwrap_or_else(default_log_dir);
        LoggingConfig::new(level, log_dir)
    }

    pub fn initial_board(&self) -> NoteBoard {
        if self.no_seed {
            NoteBoard::empty()
        } else {
            NoteBoard::with_seed()
        }
    }

    pub fn initial_composer(&self) -> Composer {
        Composer::with_color(self.color.unwrap_or_default())
    }
}

fn default_log_dir() -> PathBuf {
    DEFAULT_LOG_SUBDIR
        .iter()
        .fold(std::env::temp_dir(), |dir, part| dir.join(part))
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;
    use yanote_core::NoteColor;

    #[test]
    fn defaults_seed_the_board_and_use_a_temp_log_dir() {
        let args = Args::try_parse_from(["yanote"]).unwrap();
        assert_eq!(args.initial_board().len(), 2);
        assert_eq!(args.initial_composer().color(), NoteColor::Blue);

        let config = args.logging_config();
        assert!(config.log_dir.is_absolute());
        assert!(config.log_dir.ends_with("yanote/logs"));
    }

    #[test]
    fn flags_override_defaults() {
        let args = Args::try_parse_from([
            "yanote",
            "--no-seed",
            "--color",
            "Pink",
            "--log-level",
            "warn",
            "--log-dir",
            "/var/tmp/yanote",
        ])
        .unwrap();

        assert!(args.initial_board().is_empty());
        assert_eq!(args.initial_composer().color(), NoteColor::Pink);
        let config = args.logging_config();
        assert_eq!(config.level, "warn");
        assert_eq!(config.log_dir, std::path::PathBuf::from("/var/tmp/yanote"));
    }

    #[test]
    fn unknown_color_is_rejected() {
        assert!(Args::try_parse_from(["yanote", "--color", "teal"]).is_err());
    }
}
