//! Conversions from `beeper_config` file types into core runtime types.

use crate::{LinkCfg, SeedCfg};

// ── SeedCfg ──────────────────────────────────────────────────────────────────

impl From<&beeper_config::DeviceCfg> for SeedCfg {
    fn from(cfg: &beeper_config::DeviceCfg) -> Self {
        Self {
            frequency_hz: cfg.frequency_hz,
            duration_ms: cfg.duration_ms,
            muted: cfg.muted,
        }
    }
}

// ── LinkCfg ──────────────────────────────────────────────────────────────────

impl From<&beeper_config::BusCfg> for LinkCfg {
    fn from(cfg: &beeper_config::BusCfg) -> Self {
        Self {
            address: cfg.address,
            suppressed: cfg.suppressed,
        }
    }
}
