#![cfg_attr(all(not(debug_assertions), not(test)), deny(warnings))]
#![cfg_attr(
    all(not(debug_assertions), not(test)),
    deny(clippy::all, clippy::pedantic, clippy::nursery)
)]
#![allow(clippy::module_name_repetitions, clippy::missing_errors_doc)]
#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]

//! Core beeper control logic (hardware-agnostic).
//!
//! Architecture:
//! - [`limits`]: the accepted frequency and duration ranges
//! - [`wire`]: the three-byte tone command encoding
//! - [`link`]: bus write attempts, failure counting, warning throttling
//! - [`Beeper`]: the controller holding current settings
//! - [`attrs`]: text parsing and rendering for the attribute surface
//! - [`service`]: a worker thread serializing access to one controller
//!
//! The controller never owns a real bus. It talks through the
//! [`BusTransport`] trait so hosts can plug in real hardware, a simulated
//! bus, or a test double.

// Module declarations
pub mod attrs;
pub mod conversions;
pub mod error;
pub mod limits;
pub mod link;
pub mod mocks;
pub mod service;
pub mod wire;

use std::marker::PhantomData;

use beeper_traits::BusTransport;

use crate::error::{BeeperError, BuildError, Report, Result};
use crate::link::BusLink;

/// Initial tone settings for a controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedCfg {
    pub frequency_hz: u32,
    pub duration_ms: u32,
    pub muted: bool,
}

impl Default for SeedCfg {
    fn default() -> Self {
        Self {
            frequency_hz: 440,
            duration_ms: 1000,
            muted: false,
        }
    }
}

/// Bus link settings: where writes go and whether they happen at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkCfg {
    pub address: u8,
    /// Suppressed links report success without touching the transport.
    pub suppressed: bool,
}

/// The transport type the builder produces. Callers that want a concrete
/// transport without boxing can use [`build_beeper`] instead.
pub type BoxedTransport = Box<dyn BusTransport + Send>;

/// A tone controller bound to one bus device.
///
/// Holds the current frequency, duration and mute flag, validates every
/// change against [`limits`], and emits tone commands over its [`BusLink`].
/// Methods take `&mut self`; wrap the controller in a
/// [`service::BeeperService`] when several parties need access to one
/// device.
pub struct Beeper<T: BusTransport> {
    frequency_hz: u32,
    duration_ms: u32,
    muted: bool,
    link: BusLink<T>,
}

impl<T: BusTransport> std::fmt::Debug for Beeper<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Beeper")
            .field("frequency_hz", &self.frequency_hz)
            .field("duration_ms", &self.duration_ms)
            .field("muted", &self.muted)
            .field("consecutive_failures", &self.link.consecutive_failures())
            .finish_non_exhaustive()
    }
}

impl<T: BusTransport> Beeper<T> {
    /// Set the tone frequency. Zero and anything above
    /// [`limits::MAX_FREQUENCY_HZ`] are rejected without changing state.
    pub fn set_frequency_hz(&mut self, frequency_hz: u32) -> Result<()> {
        if !limits::frequency_valid(frequency_hz) {
            return Err(Report::new(BeeperError::InvalidFrequency(frequency_hz)));
        }
        self.frequency_hz = frequency_hz;
        Ok(())
    }

    /// Set the tone duration. Anything above [`limits::MAX_DURATION_MS`] is
    /// rejected without changing state; zero is a valid "silent" duration.
    pub fn set_duration_ms(&mut self, duration_ms: u32) -> Result<()> {
        if !limits::duration_ms_valid(duration_ms) {
            return Err(Report::new(BeeperError::InvalidDuration(duration_ms)));
        }
        self.duration_ms = duration_ms;
        Ok(())
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn frequency_hz(&self) -> u32 {
        self.frequency_hz
    }

    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    pub fn muted(&self) -> bool {
        self.muted
    }

    /// Failed writes since the last successful one.
    pub fn consecutive_failures(&self) -> u32 {
        self.link.consecutive_failures()
    }

    /// True when the last write attempt succeeded (or none was needed yet).
    pub fn is_healthy(&self) -> bool {
        self.link.consecutive_failures() == 0
    }

    pub fn snapshot(&self) -> BeeperSnapshot {
        BeeperSnapshot {
            frequency_hz: self.frequency_hz,
            duration_ms: self.duration_ms,
            muted: self.muted,
            consecutive_failures: self.link.consecutive_failures(),
        }
    }

    /// Beep with the current settings. See [`Self::beep_with`].
    pub fn beep(&mut self) -> bool {
        self.beep_with(None, None)
    }

    /// Beep, optionally committing a new (frequency, duration) pair first.
    ///
    /// The pair commits only when both values are present and both pass
    /// [`limits`]; otherwise the current settings stay and the beep proceeds
    /// with them. A muted controller or a zero duration is a healthy no-op
    /// that sends nothing.
    ///
    /// Returns link health: `true` unless the write was attempted and the
    /// transport reported an error.
    pub fn beep_with(&mut self, frequency_hz: Option<u32>, duration_ms: Option<u32>) -> bool {
        if let Some(hz) = frequency_hz
            && let Some(ms) = duration_ms
            && limits::frequency_valid(hz)
            && limits::duration_ms_valid(ms)
        {
            self.frequency_hz = hz;
            self.duration_ms = ms;
        }
        if self.muted || self.duration_ms == 0 {
            return true;
        }
        tracing::debug!(
            frequency_hz = self.frequency_hz,
            duration_ms = self.duration_ms,
            "beep"
        );
        let frame = wire::encode_tone(self.frequency_hz, self.duration_ms);
        self.link.attempt_write(&frame)
    }
}

impl Beeper<BoxedTransport> {
    pub fn builder() -> BeeperBuilder<Missing, Missing> {
        BeeperBuilder::default()
    }
}

/// Point-in-time view of a controller, safe to hand across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BeeperSnapshot {
    pub frequency_hz: u32,
    pub duration_ms: u32,
    pub muted: bool,
    pub consecutive_failures: u32,
}

impl BeeperSnapshot {
    pub fn is_healthy(&self) -> bool {
        self.consecutive_failures == 0
    }
}

/// Marker: builder field not provided yet.
pub struct Missing;
/// Marker: builder field provided.
pub struct Set;

/// Builder for [`Beeper`] over a boxed transport.
///
/// The type parameters track whether the transport and bus address have been
/// provided; [`BeeperBuilder::build`] only exists once both are. Use
/// [`BeeperBuilder::try_build`] for runtime-checked construction from
/// dynamic configuration.
pub struct BeeperBuilder<Tr, Ad> {
    transport: Option<BoxedTransport>,
    address: Option<u8>,
    suppressed: bool,
    seed: Option<SeedCfg>,
    _tr: PhantomData<Tr>,
    _ad: PhantomData<Ad>,
}

impl Default for BeeperBuilder<Missing, Missing> {
    fn default() -> Self {
        Self {
            transport: None,
            address: None,
            suppressed: false,
            seed: None,
            _tr: PhantomData,
            _ad: PhantomData,
        }
    }
}

impl<Tr, Ad> BeeperBuilder<Tr, Ad> {
    /// Initial tone settings. Defaults to [`SeedCfg::default`] when omitted.
    pub fn with_seed(mut self, seed: SeedCfg) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build a controller whose link never touches the transport.
    pub fn with_suppressed(mut self, suppressed: bool) -> Self {
        self.suppressed = suppressed;
        self
    }

    pub fn with_transport(
        self,
        transport: impl BusTransport + Send + 'static,
    ) -> BeeperBuilder<Set, Ad> {
        let Self {
            address,
            suppressed,
            seed,
            ..
        } = self;
        BeeperBuilder {
            transport: Some(Box::new(transport)),
            address,
            suppressed,
            seed,
            _tr: PhantomData,
            _ad: PhantomData,
        }
    }

    pub fn with_address(self, address: u8) -> BeeperBuilder<Tr, Set> {
        let Self {
            transport,
            suppressed,
            seed,
            ..
        } = self;
        BeeperBuilder {
            transport,
            address: Some(address),
            suppressed,
            seed,
            _tr: PhantomData,
            _ad: PhantomData,
        }
    }

    /// Build from whatever has been provided so far, failing on a missing
    /// transport or address or an out-of-range seed.
    pub fn try_build(self) -> Result<Beeper<BoxedTransport>> {
        let transport = self
            .transport
            .ok_or_else(|| Report::new(BuildError::MissingTransport))?;
        let address = self
            .address
            .ok_or_else(|| Report::new(BuildError::MissingAddress))?;
        let seed = self.seed.unwrap_or_default();
        validate_seed(&seed)?;
        Ok(Beeper {
            frequency_hz: seed.frequency_hz,
            duration_ms: seed.duration_ms,
            muted: seed.muted,
            link: BusLink::new(
                transport,
                LinkCfg {
                    address,
                    suppressed: self.suppressed,
                },
            ),
        })
    }
}

impl BeeperBuilder<Set, Set> {
    /// Build once the type system has seen every required field. Still
    /// returns `Result` because the seed is range-checked at runtime.
    pub fn build(self) -> Result<Beeper<BoxedTransport>> {
        self.try_build()
    }
}

fn validate_seed(seed: &SeedCfg) -> Result<()> {
    if !limits::frequency_valid(seed.frequency_hz) {
        return Err(Report::new(BuildError::InvalidConfig(
            "seed frequency out of range",
        )));
    }
    if !limits::duration_ms_valid(seed.duration_ms) {
        return Err(Report::new(BuildError::InvalidConfig(
            "seed duration out of range",
        )));
    }
    Ok(())
}

/// Build a controller over a concrete, unboxed transport.
pub fn build_beeper<T: BusTransport>(
    transport: T,
    link: LinkCfg,
    seed: SeedCfg,
) -> Result<Beeper<T>> {
    validate_seed(&seed)?;
    Ok(Beeper {
        frequency_hz: seed.frequency_hz,
        duration_ms: seed.duration_ms,
        muted: seed.muted,
        link: BusLink::new(transport, link),
    })
}
