/// Byte-oriented command bus used to reach the tone-generator peripheral.
///
/// Implementations send `bytes` to the peer at `address` and report whether
/// the peer acknowledged the whole write. Callers never interpret *why* a
/// send failed; only success/failure matters to the control core.
pub trait BusTransport {
    fn send(
        &mut self,
        address: u8,
        bytes: &[u8],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

impl<T: BusTransport + ?Sized> BusTransport for Box<T> {
    fn send(
        &mut self,
        address: u8,
        bytes: &[u8],
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        (**self).send(address, bytes)
    }
}
