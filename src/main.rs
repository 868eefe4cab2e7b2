use clap::Parser;

use desk_wm::config::{Cli, ShellConfig};
use desk_wm::drivers::console::{ConsoleInputDriver, ConsoleOutputDriver};
use desk_wm::error::ShellError;
use desk_wm::runner::run_desktop;
use desk_wm::shell::Desktop;
use desk_wm::tracing_sub;

fn main() -> Result<(), ShellError> {
    let cli = Cli::parse();
    let config = ShellConfig::try_from(&cli)?;
    tracing_sub::init(config.log_file.as_deref(), config.log_level)?;

    let mut desktop = Desktop::new(&config);
    for app in &config.open {
        desktop.open_app(app)?;
    }

    let mut output = ConsoleOutputDriver::new()?;
    output.enter()?;
    let result = run_desktop(
        output.terminal_mut(),
        ConsoleInputDriver::new(),
        &mut desktop,
        config.tick,
    );
    output.exit()?;

    match &result {
        Ok(()) => tracing::info!(windows = desktop.registry().len(), "shell exited"),
        Err(err) => tracing::error!(%err, "shell failed"),
    }
    result
}
