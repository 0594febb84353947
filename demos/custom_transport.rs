//! Custom Transport Example
//!
//! This example demonstrates how to implement the `BusTransport` trait by hand,
//! so a controller can drive any byte sink you can write three bytes to.

use beeper_core::{Beeper, SeedCfg};
use beeper_traits::BusTransport;

/// A transport that prints every frame instead of touching a bus, and fails
/// on demand so the link health tracking can be observed.
struct PrintingBus {
    fail_next: bool,
}

impl BusTransport for PrintingBus {
    fn send(
        &mut self,
        address: u8,
        bytes: &[u8],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.fail_next {
            self.fail_next = false;
            return Err(Box::new(std::io::Error::other("injected bus fault")));
        }
        println!("0x{address:02X} <- {bytes:02X?}");
        Ok(())
    }
}

/// Drives a controller over the printing transport, injecting one bus fault.
///
/// # Usage
///
/// This example is intended to be run as a standalone binary. It shows the
/// minimal trait surface a transport has to provide.
///
/// # Related Examples
///
/// - [`quick_start.rs`](quick_start.rs): Minimal setup against the simulated bus.
/// - [`shared_service.rs`](shared_service.rs): Shows how to share one controller across threads.
///
/// # Errors
///
/// Returns an error if the seed settings are rejected, surfaced as an
/// `eyre::Report`.
fn main() -> Result<(), eyre::Report> {
    let mut beeper = Beeper::builder()
        .with_transport(PrintingBus { fail_next: true })
        .with_address(0x2D)
        .with_seed(SeedCfg {
            frequency_hz: 880,
            duration_ms: 250,
            muted: false,
        })
        .build()?;

    // First attempt hits the injected fault; the link remembers it.
    let healthy = beeper.beep();
    println!("after fault: healthy = {healthy}");

    // The next successful write clears the failure count.
    let healthy = beeper.beep();
    println!("after retry: healthy = {healthy}");

    Ok(())
}
