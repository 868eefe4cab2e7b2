use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use indoc::indoc;
use tracing::Level;

use crate::error::ShellError;
use crate::shell::apps;
use crate::shell::scale::CellScale;

const AFTER_HELP: &str = indoc! {"
    Keys:
      Ctrl+Q   quit
      Esc      cancel the drag or resize in progress

    Apps: calculator, terminal, notes, weather, calendar, browser
"};

#[derive(Parser, Debug)]
#[command(
    name = "desk-wm",
    version = env!("CARGO_PKG_VERSION"),
    about = "Floating-window desktop simulation in the terminal",
    after_help = AFTER_HELP
)]
pub struct Cli {
    /// Viewport pixels covered by one terminal column.
    #[arg(long = "cell-width", value_name = "PX", default_value_t = 10)]
    pub cell_width: i32,

    /// Viewport pixels covered by one terminal row.
    #[arg(long = "cell-height", value_name = "PX", default_value_t = 20)]
    pub cell_height: i32,

    /// Rows kept free for the taskbar at the bottom of the screen.
    #[arg(long = "taskbar-rows", value_name = "N", default_value_t = 1)]
    pub taskbar_rows: u16,

    /// Open this app at start. May be given more than once.
    #[arg(long = "open", value_name = "APP")]
    pub open: Vec<String>,

    /// Write log records to this file instead of discarding them.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Most verbose level written to the log file.
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Input poll interval.
    #[arg(long = "tick-ms", value_name = "MS", default_value_t = 16)]
    pub tick_ms: u64,
}

/// Validated shell settings.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    pub scale: CellScale,
    pub taskbar_rows: u16,
    pub open: Vec<String>,
    pub log_file: Option<PathBuf>,
    pub log_level: Level,
    pub tick: Duration,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            scale: CellScale::default(),
            taskbar_rows: 1,
            open: Vec::new(),
            log_file: None,
            log_level: Level::INFO,
            tick: Duration::from_millis(16),
        }
    }
}

impl TryFrom<&Cli> for ShellConfig {
    type Error = ShellError;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        if !(1..=100).contains(&cli.cell_width) {
            return Err(ShellError::Config(
                "cell width must be between 1 and 100 pixels".to_string(),
            ));
        }
        if !(1..=100).contains(&cli.cell_height) {
            return Err(ShellError::Config(
                "cell height must be between 1 and 100 pixels".to_string(),
            ));
        }
        if !(1..=4).contains(&cli.taskbar_rows) {
            return Err(ShellError::Config(
                "taskbar rows must be between 1 and 4".to_string(),
            ));
        }
        if !(1..=1000).contains(&cli.tick_ms) {
            return Err(ShellError::Config(
                "tick must be between 1 and 1000 ms".to_string(),
            ));
        }
        let log_level = cli
            .log_level
            .parse::<Level>()
            .map_err(|_| ShellError::Config(format!("unknown log level `{}`", cli.log_level)))?;
        if let Some(unknown) = cli.open.iter().find(|app| apps::find(app).is_none()) {
            return Err(ShellError::UnknownApp(unknown.clone()));
        }
        Ok(Self {
            scale: CellScale::new(cli.cell_width, cli.cell_height),
            taskbar_rows: cli.taskbar_rows,
            open: cli.open.clone(),
            log_file: cli.log_file.clone(),
            log_level,
            tick: Duration::from_millis(cli.tick_ms),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<ShellConfig, ShellError> {
        let cli = Cli::try_parse_from(std::iter::once("desk-wm").chain(args.iter().copied()))
            .expect("arguments parse");
        ShellConfig::try_from(&cli)
    }

    #[test]
    fn defaults() {
        let config = parse(&[]).unwrap();
        assert_eq!(config.scale, CellScale::new(10, 20));
        assert_eq!(config.taskbar_rows, 1);
        assert!(config.open.is_empty());
        assert!(config.log_file.is_none());
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.tick, Duration::from_millis(16));
    }

    #[test]
    fn repeated_open_keeps_order() {
        let config = parse(&["--open", "notes", "--open", "calculator"]).unwrap();
        assert_eq!(config.open, vec!["notes", "calculator"]);
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        for args in [
            &["--cell-width", "0"][..],
            &["--cell-height", "101"][..],
            &["--taskbar-rows", "5"][..],
            &["--tick-ms", "0"][..],
            &["--log-level", "loud"][..],
        ] {
            assert!(
                matches!(parse(args), Err(ShellError::Config(_))),
                "{args:?} accepted"
            );
        }
    }

    #[test]
    fn unknown_app_is_reported_by_name() {
        match parse(&["--open", "notes", "--open", "solitaire"]) {
            Err(ShellError::UnknownApp(name)) => assert_eq!(name, "solitaire"),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn log_level_is_case_insensitive() {
        let config = parse(&["--log-level", "DEBUG"]).unwrap();
        assert_eq!(config.log_level, Level::DEBUG);
    }
}
