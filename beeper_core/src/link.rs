//! Transport health tracking with throttled failure reporting.

use crate::LinkCfg;
use beeper_traits::BusTransport;

/// Decide whether a failed send should be surfaced to the operator.
///
/// The first failure of a run is silent (transient glitches happen) and
/// everything past the fifth is silent again (a dead bus must not flood the
/// logs); failures 2 through 5 each warn exactly once.
#[inline]
pub const fn should_report(consecutive_failures: u32) -> bool {
    consecutive_failures > 1 && consecutive_failures <= 5
}

/// One device's command link: a [`BusTransport`] plus the peer address, the
/// suppression switch, and the consecutive-failure counter.
pub struct BusLink<T: BusTransport> {
    transport: T,
    address: u8,
    suppressed: bool,
    consecutive_failures: u32,
}

impl<T: BusTransport> BusLink<T> {
    pub fn new(transport: T, cfg: LinkCfg) -> Self {
        Self {
            transport,
            address: cfg.address,
            suppressed: cfg.suppressed,
            consecutive_failures: 0,
        }
    }

    /// Send `bytes` to the device and fold the outcome into link health.
    ///
    /// A suppressed link skips the bus entirely, leaves the failure counter
    /// untouched, and reports success. Otherwise any success resets the
    /// counter and any failure increments it. Returns true when the link is
    /// healthy after this attempt.
    pub fn attempt_write(&mut self, bytes: &[u8]) -> bool {
        if self.suppressed {
            tracing::debug!(
                address = self.address,
                len = bytes.len(),
                "bus suppressed, skipping write"
            );
            return true;
        }
        match self.transport.send(self.address, bytes) {
            Ok(()) => {
                self.consecutive_failures = 0;
            }
            Err(e) => {
                self.consecutive_failures = self.consecutive_failures.saturating_add(1);
                if should_report(self.consecutive_failures) {
                    tracing::warn!(
                        error = %e,
                        address = self.address,
                        consecutive_failures = self.consecutive_failures,
                        "bus write failed"
                    );
                } else {
                    tracing::debug!(
                        error = %e,
                        address = self.address,
                        consecutive_failures = self.consecutive_failures,
                        "bus write failed (warning throttled)"
                    );
                }
            }
        }
        self.consecutive_failures == 0
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive_failures
    }

    pub fn is_suppressed(&self) -> bool {
        self.suppressed
    }

    pub fn address(&self) -> u8 {
        self.address
    }
}
