//! CLI argument definitions and shared statics.

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::OnceLock;

pub static FILE_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();
/// Whether the user asked for JSON output (controls structured error output).
pub static JSON_MODE: OnceLock<bool> = OnceLock::new();

#[derive(Parser, Debug)]
#[command(name = "beeper", version, about = "Beeper CLI")]
pub struct Cli {
    /// Path to config TOML (typed)
    #[arg(long, value_name = "FILE", default_value = "etc/beeper.toml")]
    pub config: PathBuf,

    /// Emit results as JSON lines instead of plain text
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console log level (error|warn|info|debug|trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Skip all bus traffic while keeping every other behavior
    #[arg(long, action = ArgAction::SetTrue)]
    pub suppress_bus: bool,

    /// Command to execute
    #[command(subcommand)]
    pub cmd: Commands,
}

/// Device attributes addressable from the command line.
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum Attr {
    /// Tone frequency in hertz
    FrequencyHz,
    /// Tone duration in milliseconds
    DurationMs,
    /// Mute flag (any nonzero integer mutes)
    Muted,
}

impl Attr {
    pub fn name(self) -> &'static str {
        match self {
            Attr::FrequencyHz => "frequency-hz",
            Attr::DurationMs => "duration-ms",
            Attr::Muted => "muted",
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the current value of a device attribute
    Get {
        #[arg(value_enum)]
        attr: Attr,
    },
    /// Validate and apply a new value for a device attribute
    Set {
        #[arg(value_enum)]
        attr: Attr,
        /// Unsigned integer; prefix 0x for hex, a leading 0 for octal
        value: String,
    },
    /// Sound the beeper
    Beep {
        /// Optional "<frequency> <duration>" pair in decimal; anything else
        /// beeps with the current settings
        payload: Option<String>,
        /// Number of beeps
        #[arg(long, value_name = "N", default_value_t = 1)]
        repeat: u32,
        /// Gap between beeps in milliseconds
        #[arg(long = "interval-ms", value_name = "MS", default_value_t = 500)]
        interval_ms: u64,
    },
}
