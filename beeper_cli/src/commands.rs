//! Command handlers: attribute access and the beep loop.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use beeper_core::service::BeeperService;
use beeper_core::{Beeper, BoxedTransport, attrs};
use eyre::Result;

use crate::cli::Attr;

pub fn get(beeper: &Beeper<BoxedTransport>, attr: Attr, json: bool) -> i32 {
    if json {
        let value = match attr {
            Attr::FrequencyHz => beeper.frequency_hz(),
            Attr::DurationMs => beeper.duration_ms(),
            Attr::Muted => u32::from(beeper.muted()),
        };
        println!(
            "{}",
            serde_json::json!({ "attr": attr.name(), "value": value })
        );
    } else {
        // The rendered text is already newline-terminated.
        print!("{}", render(beeper, attr));
    }
    0
}

pub fn set(
    beeper: &mut Beeper<BoxedTransport>,
    attr: Attr,
    value: &str,
    json: bool,
) -> Result<i32> {
    match attr {
        Attr::FrequencyHz => attrs::store_frequency_hz(beeper, value)?,
        Attr::DurationMs => attrs::store_duration_ms(beeper, value)?,
        Attr::Muted => attrs::store_muted(beeper, value)?,
    }
    tracing::info!(attr = attr.name(), value, "attribute set");
    // Echo the accepted value back in the same shape `get` uses.
    Ok(get(beeper, attr, json))
}

/// Run the beep loop through a [`BeeperService`] so Ctrl-C can interrupt a
/// long `--repeat` run between beeps. Returns the process exit code: zero
/// only when every attempted beep reported a healthy link.
pub fn beep(
    beeper: Beeper<BoxedTransport>,
    payload: Option<&str>,
    repeat: u32,
    interval_ms: u64,
    json: bool,
) -> Result<i32> {
    let pair = payload.and_then(attrs::parse_beep_request);
    if payload.is_some() && pair.is_none() {
        tracing::debug!(payload, "no frequency/duration pair, using current settings");
    }

    let service = BeeperService::spawn(beeper);
    let handle = service.handle();

    let interrupted = Arc::new(AtomicBool::new(false));
    {
        let flag = interrupted.clone();
        ctrlc::set_handler(move || flag.store(true, Ordering::Relaxed))?;
    }

    let mut all_healthy = true;
    let mut performed = 0u32;
    for i in 0..repeat {
        if interrupted.load(Ordering::Relaxed) {
            tracing::info!(performed, "interrupted, stopping");
            break;
        }
        let healthy = match pair {
            Some((hz, ms)) => handle.beep_with(Some(hz), Some(ms))?,
            None => handle.beep()?,
        };
        all_healthy &= healthy;
        performed += 1;
        if i + 1 < repeat {
            std::thread::sleep(Duration::from_millis(interval_ms));
        }
    }

    let snap = handle.snapshot()?;
    drop(service);

    if json {
        println!(
            "{}",
            serde_json::json!({
                "healthy": all_healthy,
                "beeps": performed,
                "frequency_hz": snap.frequency_hz,
                "duration_ms": snap.duration_ms,
                "muted": snap.muted,
                "consecutive_failures": snap.consecutive_failures,
            })
        );
    } else {
        println!(
            "beep {}: {} x {} Hz for {} ms",
            if all_healthy { "ok" } else { "failed" },
            performed,
            snap.frequency_hz,
            snap.duration_ms
        );
    }
    Ok(i32::from(!all_healthy))
}

fn render(beeper: &Beeper<BoxedTransport>, attr: Attr) -> String {
    match attr {
        Attr::FrequencyHz => attrs::show_frequency_hz(beeper),
        Attr::DurationMs => attrs::show_duration_ms(beeper),
        Attr::Muted => attrs::show_muted(beeper),
    }
}
