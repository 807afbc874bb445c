//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tracing::Level;
use vonneumann::host::ProgramId;

#[derive(Parser)]
#[command(
    name = "vonneumann",
    version,
    about = "One machine, many programs",
    long_about = "A single terminal frame that runs a calculator, tic-tac-toe or a text editor.\n\n\
                  Switch programs with F1-F3 or Tab. Switching away discards the program's state."
)]
pub struct Cli {
    /// Program running at startup.
    #[arg(short = 'p', long = "program", value_enum, default_value = "calculator")]
    pub program: ProgramArg,

    /// Print the available programs and exit.
    #[arg(long = "list-programs")]
    pub list_programs: bool,

    /// Write logs to a file (the terminal is used by the UI).
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Log level when RUST_LOG is not set.
    #[arg(long = "log-level", value_enum, default_value = "info")]
    pub log_level: LogLevelArg,
}

/// CLI program choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum ProgramArg {
    #[value(alias = "calc")]
    Calculator,
    #[value(alias = "tictactoe")]
    Game,
    #[value(alias = "editor")]
    Text,
}

impl From<ProgramArg> for ProgramId {
    fn from(arg: ProgramArg) -> Self {
        match arg {
            ProgramArg::Calculator => ProgramId::Calculator,
            ProgramArg::Game => ProgramId::Game,
            ProgramArg::Text => ProgramId::TextEditor,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Level::ERROR,
            LogLevelArg::Warn => Level::WARN,
            LogLevelArg::Info => Level::INFO,
            LogLevelArg::Debug => Level::DEBUG,
            LogLevelArg::Trace => Level::TRACE,
        }
    }
}
