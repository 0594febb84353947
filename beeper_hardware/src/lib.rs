pub mod error;
#[cfg(feature = "hardware")]
pub mod i2c;

use beeper_traits::BusTransport;
use std::sync::{Arc, Mutex};

/// Simulated bus implementation
///
/// Acks every write and remembers the frames, so the rest of the stack can
/// run on machines without the device attached. Clones share the frame log.
#[derive(Clone)]
pub struct SimulatedBus {
    frames: Arc<Mutex<Vec<(u8, Vec<u8>)>>>,
}

impl SimulatedBus {
    pub fn new() -> Self {
        SimulatedBus {
            frames: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Every frame sent so far, oldest first, as (address, bytes).
    pub fn sent_frames(&self) -> Vec<(u8, Vec<u8>)> {
        self.frames.lock().map(|f| f.clone()).unwrap_or_default()
    }
}

impl Default for SimulatedBus {
    fn default() -> Self {
        Self::new()
    }
}

impl BusTransport for SimulatedBus {
    fn send(
        &mut self,
        address: u8,
        bytes: &[u8],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        eprintln!("Bus write (simulated): addr=0x{address:02X} bytes={bytes:02X?}");
        if let Ok(mut frames) = self.frames.lock() {
            frames.push((address, bytes.to_vec()));
        }
        Ok(())
    }
}
