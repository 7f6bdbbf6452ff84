// libdesfire-rs/libdesfire/src/transport/pcsc.rs

#![cfg(feature = "pcsc")]

use std::ffi::{CStr, CString};
use std::fmt;

use log::{debug, trace};
use pcsc::{Card, Context, Disposition, Protocols, Scope, ShareMode};

use crate::transport::traits::Transport;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Minimal PC/SC transport. It is feature-gated behind `--features pcsc`
/// and requires the `pcsc` crate plus a running PC/SC daemon.
pub struct PcscTransport {
    context: Context,
    card: Option<Card>,
    reader_name: String,
}

impl fmt::Debug for PcscTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PcscTransport")
            .field("reader_name", &self.reader_name)
            .field("has_card", &self.card.is_some())
            .finish()
    }
}

impl PcscTransport {
    /// Connect to the card on the first reader reported by PC/SC.
    pub fn open() -> Result<Self> {
        let context = Context::establish(Scope::User)?;
        let reader = {
            let mut buf = vec![0u8; context.list_readers_len()?];
            let mut readers = context.list_readers(&mut buf)?;
            readers.next().map(CStr::to_owned).ok_or(Error::ReaderNotFound)?
        };
        Self::connect(context, reader)
    }

    /// Connect to the card on the reader with the given name.
    pub fn open_reader(name: &str) -> Result<Self> {
        let context = Context::establish(Scope::User)?;
        let reader = CString::new(name)
            .map_err(|_| Error::InvalidInput(format!("reader name {:?} contains NUL", name)))?;
        Self::connect(context, reader)
    }

    fn connect(context: Context, reader: CString) -> Result<Self> {
        let reader_name = reader.to_string_lossy().into_owned();
        let card = match context.connect(&reader, ShareMode::Shared, Protocols::ANY) {
            Ok(card) => card,
            Err(pcsc::Error::NoSmartcard) => {
                return Err(Error::Transport(format!("no card on reader {}", reader_name)));
            }
            Err(pcsc::Error::UnknownReader) => return Err(Error::ReaderNotFound),
            Err(e) => return Err(e.into()),
        };
        debug!("connected to card on {}", reader_name);
        Ok(Self {
            context,
            card: Some(card),
            reader_name,
        })
    }

    /// ATR of the connected card.
    pub fn atr(&self) -> Result<Vec<u8>> {
        let card = self
            .card
            .as_ref()
            .ok_or_else(|| Error::Transport("card not connected".into()))?;
        Ok(card.get_attribute_owned(pcsc::Attribute::AtrString)?)
    }
}

impl Transport for PcscTransport {
    fn transmit(&mut self, frame: &[u8]) -> Result<Vec<u8>> {
        let card = self
            .card
            .as_mut()
            .ok_or_else(|| Error::Transport("card not connected".into()))?;

        let mut buf = [0u8; pcsc::MAX_BUFFER_SIZE];
        match card.transmit(frame, &mut buf) {
            Ok(resp) => {
                trace!("pcsc <- {}", bytes_to_hex_spaced(resp));
                Ok(resp.to_vec())
            }
            Err(e) => {
                // A reset or removed card invalidates the handle
                if matches!(e, pcsc::Error::ResetCard | pcsc::Error::RemovedCard) {
                    self.card = None;
                }
                Err(e.into())
            }
        }
    }

    fn reader_name(&self) -> Option<&str> {
        Some(&self.reader_name)
    }

    fn reset(&mut self) -> Result<()> {
        if let Some(card) = self.card.take() {
            let _ = card.disconnect(Disposition::ResetCard);
        }
        let reader = CString::new(self.reader_name.clone())
            .map_err(|_| Error::InvalidInput("reader name contains NUL".into()))?;
        let card = self
            .context
            .connect(&reader, ShareMode::Shared, Protocols::ANY)?;
        self.card = Some(card);
        Ok(())
    }
}

impl Drop for PcscTransport {
    fn drop(&mut self) {
        if let Some(card) = self.card.take() {
            let _ = card.disconnect(Disposition::LeaveCard);
        }
    }
}
