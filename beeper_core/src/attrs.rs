//! Text semantics of the device's attribute surface.
//!
//! The original control files speak plain text: setters take an unsigned
//! integer with auto-detected radix, the beep trigger takes an optional
//! "<frequency> <duration>" pair in decimal, and reads render the current
//! value as a newline-terminated decimal. This module keeps those semantics
//! as pure text-to-operation glue; registering them with any particular host
//! surface stays out of the core.

use crate::Beeper;
use crate::error::{BeeperError, Report, Result};
use beeper_traits::BusTransport;

/// Parse an unsigned integer with auto-detected radix: `0x`/`0X` marks hex,
/// a leading `0` marks octal, anything else is decimal. One trailing newline
/// is tolerated; inner whitespace, a minus sign, trailing garbage, and
/// overflow all yield `None`.
pub fn parse_uint(text: &str) -> Option<u32> {
    let s = text.strip_suffix('\n').unwrap_or(text);
    let (digits, radix) = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (hex, 16)
    } else if s.len() > 1 && s.as_bytes()[0] == b'0' {
        (&s[1..], 8)
    } else {
        (s, 10)
    };
    u32::from_str_radix(digits, radix).ok()
}

pub fn show_frequency_hz<T: BusTransport>(beeper: &Beeper<T>) -> String {
    format!("{}\n", beeper.frequency_hz())
}

pub fn show_duration_ms<T: BusTransport>(beeper: &Beeper<T>) -> String {
    format!("{}\n", beeper.duration_ms())
}

pub fn show_muted<T: BusTransport>(beeper: &Beeper<T>) -> String {
    format!("{}\n", u32::from(beeper.muted()))
}

pub fn store_frequency_hz<T: BusTransport>(beeper: &mut Beeper<T>, text: &str) -> Result<()> {
    let hz = parse_uint(text).ok_or_else(|| parse_error(text))?;
    beeper.set_frequency_hz(hz)
}

pub fn store_duration_ms<T: BusTransport>(beeper: &mut Beeper<T>, text: &str) -> Result<()> {
    let ms = parse_uint(text).ok_or_else(|| parse_error(text))?;
    beeper.set_duration_ms(ms)
}

/// Any parseable integer is accepted; nonzero means muted.
pub fn store_muted<T: BusTransport>(beeper: &mut Beeper<T>, text: &str) -> Result<()> {
    let v = parse_uint(text).ok_or_else(|| parse_error(text))?;
    beeper.set_muted(v != 0);
    Ok(())
}

fn parse_error(text: &str) -> Report {
    Report::new(BeeperError::Parse(text.trim_end().to_string()))
}

/// Parse a beep trigger payload: the first two whitespace-separated decimal
/// integers form a (frequency, duration) pair; anything else (empty payload,
/// a single stray integer, unparseable text) means "use current settings".
/// Text after a valid pair is ignored.
pub fn parse_beep_request(payload: &str) -> Option<(u32, u32)> {
    let (frequency_hz, rest) = scan_uint(payload)?;
    let (duration_ms, _) = scan_uint(rest)?;
    Some((frequency_hz, duration_ms))
}

// Scanner equivalent of a "%u" conversion: skip leading whitespace, then
// consume one decimal digit run.
fn scan_uint(s: &str) -> Option<(u32, &str)> {
    let s = s.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let (digits, rest) = s.split_at(end);
    digits.parse().ok().map(|value| (value, rest))
}

/// Handle a write to the beep trigger. A parsed pair is handed to the
/// controller, which commits it only when both values validate and falls
/// back to current settings otherwise; the return value is the link health
/// result.
pub fn store_beep<T: BusTransport>(beeper: &mut Beeper<T>, payload: &str) -> bool {
    match parse_beep_request(payload) {
        Some((frequency_hz, duration_ms)) => {
            beeper.beep_with(Some(frequency_hz), Some(duration_ms))
        }
        None => beeper.beep(),
    }
}
