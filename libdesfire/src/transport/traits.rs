// libdesfire-rs/libdesfire/src/transport/traits.rs

use crate::Result;

/// Transport trait abstracts the card reader away from the protocol core.
///
/// Implementations perform one blocking request/response exchange per call
/// and never overlap calls. Disconnects and timeouts surface as transport
/// errors (`Error::Transport`, `Error::Timeout`, ...).
pub trait Transport {
    /// Send one frame and return the response data followed by `SW1 SW2`.
    fn transmit(&mut self, frame: &[u8]) -> Result<Vec<u8>>;

    /// Human readable name of the underlying reader, if known.
    fn reader_name(&self) -> Option<&str> {
        None
    }

    /// Perform a transport-level reset. Default is a no-op for transports
    /// without a notion of reconnecting.
    fn reset(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn transmit(&mut self, frame: &[u8]) -> Result<Vec<u8>> {
        (**self).transmit(frame)
    }

    fn reader_name(&self) -> Option<&str> {
        (**self).reader_name()
    }

    fn reset(&mut self) -> Result<()> {
        (**self).reset()
    }
}
