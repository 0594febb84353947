#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]

//! Configuration schema for the beeper controller.
//!
//! Deserialized from TOML with [`load_toml`]; call [`Config::validate`]
//! afterwards to reject values the device cannot honor before any of them
//! reach the control core.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Initial tone parameters seeded into the controller at startup.
    #[serde(default)]
    pub device: DeviceCfg,
    /// Command bus wiring. Required: there is no sensible default address.
    pub bus: BusCfg,
    #[serde(default)]
    pub logging: Logging,
}

/// Startup tone parameters (`[device]`).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DeviceCfg {
    /// Tone pitch in Hz, 1..=8192.
    #[serde(default = "default_frequency_hz")]
    pub frequency_hz: u32,
    /// Tone length in milliseconds, at most 2550.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u32,
    /// When true, beep requests succeed without reaching the bus.
    #[serde(default)]
    pub muted: bool,
}

impl Default for DeviceCfg {
    fn default() -> Self {
        Self {
            frequency_hz: default_frequency_hz(),
            duration_ms: default_duration_ms(),
            muted: false,
        }
    }
}

/// Command bus settings (`[bus]`).
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BusCfg {
    /// 7-bit address of the tone generator on the command bus.
    pub address: u8,
    /// When true, writes are skipped entirely and reported as delivered.
    /// Useful on rigs where the peripheral is not fitted.
    #[serde(default)]
    pub suppressed: bool,
}

/// Optional log sink settings (`[logging]`).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Logging {
    /// Log file path. Logs go to stderr when unset.
    pub file: Option<String>,
    /// Level filter, e.g. "info" or "debug". Defaults to "info".
    pub level: Option<String>,
    /// File rotation: "never", "daily" or "hourly". Defaults to "never".
    pub rotation: Option<String>,
}

const fn default_frequency_hz() -> u32 {
    440
}

const fn default_duration_ms() -> u32 {
    1000
}

/// Parse a TOML document into a [`Config`].
pub fn load_toml(s: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(s)
}

impl Config {
    /// Reject settings the peripheral cannot honor.
    ///
    /// Runs after deserialization so error messages can speak in the
    /// operator's units rather than serde's.
    pub fn validate(&self) -> eyre::Result<()> {
        if self.device.frequency_hz == 0 || self.device.frequency_hz > 8192 {
            eyre::bail!(
                "device.frequency_hz must be within 1..=8192 Hz (got {})",
                self.device.frequency_hz
            );
        }
        if self.device.duration_ms > 2550 {
            eyre::bail!(
                "device.duration_ms must be at most 2550 ms (got {})",
                self.device.duration_ms
            );
        }
        if !(0x08..=0x77).contains(&self.bus.address) {
            eyre::bail!(
                "bus.address {:#04x} is outside the assignable 7-bit range 0x08..=0x77",
                self.bus.address
            );
        }
        Ok(())
    }
}
