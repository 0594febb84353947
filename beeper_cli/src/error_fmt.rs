//! Human-readable error descriptions and structured JSON error formatting.

use beeper_core::error::{BeeperError, BuildError};

/// Map an eyre::Report to a human-readable explanation with likely causes and fix hints.
pub fn humanize(err: &eyre::Report) -> String {
    // Typed matches first
    if let Some(be) = err.downcast_ref::<BuildError>() {
        return match be {
            BuildError::MissingTransport => {
                "What happened: No bus transport was provided to the controller.\nLikely causes: The bus failed to open or was not wired into the builder.\nHow to fix: Ensure the bus opens successfully and is passed via with_transport(...).".to_string()
            }
            BuildError::MissingAddress => {
                "What happened: No bus address was provided to the controller.\nLikely causes: The [bus] section is missing from the config.\nHow to fix: Add `address = 0x2D` (or your device's address) under [bus].".to_string()
            }
            BuildError::InvalidConfig(msg) => format!(
                "What happened: Invalid configuration ({msg}).\nLikely causes: Missing or out-of-range values in the TOML.\nHow to fix: Edit the config file, then rerun. See README for a sample."
            ),
        };
    }

    if let Some(be) = err.downcast_ref::<BeeperError>() {
        return match be {
            BeeperError::InvalidFrequency(hz) => format!(
                "What happened: Frequency {hz} Hz is out of range.\nLikely causes: A typo, or a value outside what the tone generator accepts.\nHow to fix: Pick a frequency within 1..=8192 Hz."
            ),
            BeeperError::InvalidDuration(ms) => format!(
                "What happened: Duration {ms} ms is out of range.\nLikely causes: The tone generator counts duration in 10 ms units up to 2550 ms.\nHow to fix: Pick a duration within 0..=2550 ms."
            ),
            BeeperError::Parse(text) => format!(
                "What happened: {text:?} is not an unsigned integer.\nLikely causes: Stray characters, a negative sign, or a value too large for 32 bits.\nHow to fix: Pass a plain number; prefix 0x for hex or 0 for octal."
            ),
            BeeperError::ServiceStopped => {
                "What happened: The beeper service thread is gone.\nLikely causes: The worker was shut down or panicked mid-run.\nHow to fix: Re-run the command with --log-level=debug to see the shutdown cause.".to_string()
            }
        };
    }

    // Generic fallback
    let msg = err.to_string();
    let mut cause = String::new();
    if let Some(src) = err.source() {
        cause = format!(" Cause: {src}");
    }
    format!(
        "Something went wrong.{cause}\nHow to fix: Re-run with --log-level=debug for details. Original: {msg}"
    )
}

/// Map typed errors to stable exit codes; untyped errors return 1.
pub fn exit_code_for_error(err: &eyre::Report) -> i32 {
    if let Some(be) = err.downcast_ref::<BeeperError>() {
        return match be {
            BeeperError::InvalidFrequency(_)
            | BeeperError::InvalidDuration(_)
            | BeeperError::Parse(_) => 2,
            BeeperError::ServiceStopped => 3,
        };
    }
    1
}

/// Structured JSON for errors when --json is enabled.
pub fn format_error_json(err: &eyre::Report) -> String {
    use serde_json::json;

    let reason = if let Some(be) = err.downcast_ref::<BeeperError>() {
        match be {
            BeeperError::InvalidFrequency(_) => "InvalidFrequency",
            BeeperError::InvalidDuration(_) => "InvalidDuration",
            BeeperError::Parse(_) => "Parse",
            BeeperError::ServiceStopped => "ServiceStopped",
        }
    } else if let Some(be) = err.downcast_ref::<BuildError>() {
        match be {
            BuildError::MissingTransport => "MissingTransport",
            BuildError::MissingAddress => "MissingAddress",
            BuildError::InvalidConfig(_) => "InvalidConfig",
        }
    } else {
        "Error"
    };

    json!({ "reason": reason, "message": humanize(err) }).to_string()
}
