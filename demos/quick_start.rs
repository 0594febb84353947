//! Quick Start Example
//!
//! This example demonstrates how to set up a beeper controller against the
//! simulated bus and drive it without any hardware attached.

use beeper_core::{Beeper, SeedCfg, attrs};
use beeper_hardware::SimulatedBus;

/// Builds a controller over the simulated bus and sounds a few tones.
///
/// # Usage
///
/// This example is intended to be run as a standalone binary; the CLI in
/// `beeper_cli` wraps the same calls behind `get`, `set` and `beep`.
///
/// # Related Examples
///
/// - [`custom_transport.rs`](custom_transport.rs): Shows how to implement a custom bus transport.
/// - [`shared_service.rs`](shared_service.rs): Shows how to share one controller across threads.
///
/// # Errors
///
/// Returns an error if the seed settings are rejected, surfaced as an
/// `eyre::Report`.
fn main() -> Result<(), eyre::Report> {
    let bus = SimulatedBus::new();

    let mut beeper = Beeper::builder()
        .with_transport(bus.clone())
        .with_address(0x2D)
        .with_seed(SeedCfg::default())
        .build()?;

    // Default tone: 440 Hz for 1000 ms.
    beeper.beep();

    // Retune through the text surface, exactly as a host shell would.
    attrs::store_frequency_hz(&mut beeper, "0x370")?;
    attrs::store_duration_ms(&mut beeper, "250")?;
    beeper.beep();

    // A one-shot pair does not need the setters at all.
    attrs::store_beep(&mut beeper, "1760 100");

    for (address, frame) in bus.sent_frames() {
        println!("0x{address:02X} <- {frame:02X?}");
    }
    println!("healthy: {}", beeper.is_healthy());

    Ok(())
}
