// vonneumann: one machine, many programs

mod cli;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use cli::Cli;
use vonneumann::host::{HostShell, ProgramRegistry};
use vonneumann::logging::{LogConfig, init_logging};
use vonneumann::ui::{App, TerminalGuard};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.list_programs {
        for entry in ProgramRegistry::builtin().entries() {
            println!("{:<12} {}", entry.id.key(), entry.label);
        }
        return Ok(());
    }

    let log_config = LogConfig::default()
        .with_level(cli.log_level.into())
        .with_log_file(cli.log_file.clone());
    init_logging(&log_config).context("failed to initialize logging")?;

    let host = HostShell::with_program(cli.program.into());
    info!(program = %host.active_program(), "starting");

    // Set up terminal; the guard restores it on every exit path
    let mut tui = TerminalGuard::enter().context("failed to set up terminal")?;

    // Create and run app
    let mut app = App::new(host);
    let res = app.run(tui.terminal_mut());

    // Restore terminal
    let restored = tui.restore();

    res.context("terminal UI failed")?;
    restored.context("failed to restore terminal")
}
