//! Test and helper mocks for beeper_core

use beeper_traits::BusTransport;

/// A transport that rejects every write. Useful as a placeholder where a
/// transport is required but no bus should ever be reachable.
pub struct NoopBus;

impl BusTransport for NoopBus {
    fn send(
        &mut self,
        _address: u8,
        _bytes: &[u8],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        Err(Box::new(std::io::Error::other("noop bus")))
    }
}
