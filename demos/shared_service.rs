//! Shared Service Example
//!
//! This example demonstrates how to hand one controller to `BeeperService` and
//! drive it from several threads through cloned handles. The service thread
//! owns the controller, so callers never contend on the bus directly.

use beeper_core::service::BeeperService;
use beeper_core::{Beeper, SeedCfg};
use beeper_hardware::SimulatedBus;

/// Spawns a service around one controller and beeps from four worker threads.
///
/// # Usage
///
/// This example is intended to be run as a standalone binary. Requests from
/// the workers are applied strictly in the order the service receives them.
///
/// # Related Examples
///
/// - [`quick_start.rs`](quick_start.rs): Minimal setup against the simulated bus.
/// - [`custom_transport.rs`](custom_transport.rs): Shows how to implement a custom bus transport.
///
/// # Errors
///
/// Returns an error if the seed settings are rejected or a handle outlives
/// the service, surfaced as an `eyre::Report`.
fn main() -> Result<(), eyre::Report> {
    let bus = SimulatedBus::new();

    let beeper = Beeper::builder()
        .with_transport(bus.clone())
        .with_address(0x2D)
        .with_seed(SeedCfg::default())
        .build()?;

    let service = BeeperService::spawn(beeper);

    let workers: Vec<_> = (0u32..4)
        .map(|n| {
            let handle = service.handle();
            std::thread::spawn(move || {
                // Each worker sounds its own pitch without retuning the others.
                let healthy = handle.beep_with(Some(440 + n * 220), Some(100));
                println!("worker {n}: healthy = {healthy:?}");
            })
        })
        .collect();

    for worker in workers {
        let _ = worker.join();
    }

    let snapshot = service.handle().snapshot()?;
    println!(
        "settled at {} Hz for {} ms, {} frames on the wire",
        snapshot.frequency_hz,
        snapshot.duration_ms,
        bus.sent_frames().len()
    );

    Ok(())
}
