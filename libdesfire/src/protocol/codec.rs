// libdesfire-rs/libdesfire/src/protocol/codec.rs

use log::{debug, trace};

use crate::constants::{DEFAULT_MAX_CONTINUATIONS, MAX_FRAME_PAYLOAD_LEN};
use crate::transport::Transport;
use crate::types::StatusWord;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

use super::Frame;
use super::commands::Command;

/// Limits applied by the frame codec.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodecConfig {
    /// Largest outbound payload accepted in a single frame
    pub max_payload_len: usize,
    /// Largest number of continuation frames fetched for one command
    pub max_continuations: usize,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            max_payload_len: MAX_FRAME_PAYLOAD_LEN,
            max_continuations: DEFAULT_MAX_CONTINUATIONS,
        }
    }
}

/// Turns logical commands into transport exchanges.
///
/// Every method takes `&mut self`, so a continuation loop always runs to
/// completion (or error) before the next logical command can start.
pub struct FrameCodec {
    transport: Box<dyn Transport>,
    config: CodecConfig,
}

impl FrameCodec {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self::with_config(transport, CodecConfig::default())
    }

    pub fn with_config(transport: Box<dyn Transport>, config: CodecConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &CodecConfig {
        &self.config
    }

    /// Access the underlying transport (e.g. to reset the reader).
    pub fn transport_mut(&mut self) -> &mut dyn Transport {
        &mut *self.transport
    }

    /// Perform exactly one exchange and return the raw data and status.
    pub fn exchange(&mut self, frame: &Frame) -> Result<(Vec<u8>, StatusWord)> {
        if frame.payload.len() > self.config.max_payload_len {
            return Err(Error::InvalidLength {
                expected: self.config.max_payload_len,
                actual: frame.payload.len(),
            });
        }

        let bytes = frame.encode();
        trace!("-> {}", bytes_to_hex_spaced(&bytes));
        let raw = self.transport.transmit(&bytes)?;
        trace!("<- {}", bytes_to_hex_spaced(&raw));

        Frame::decode_response(&raw)
    }

    /// Exchange `frame`, then keep requesting continuation frames while the
    /// card reports more data. Returns the assembled payload and the final
    /// status.
    pub fn send(&mut self, frame: &Frame) -> Result<(Vec<u8>, StatusWord)> {
        let (mut acc, mut status) = self.exchange(frame)?;
        let mut continuations = 0usize;

        while status.is_more_data() {
            if continuations == self.config.max_continuations {
                return Err(Error::Protocol(format!(
                    "card still reports more data after {} continuation frames",
                    continuations
                )));
            }
            let (chunk, next) = self.exchange(&Frame::continuation())?;
            acc.extend_from_slice(&chunk);
            status = next;
            continuations += 1;
        }

        if continuations > 0 {
            debug!(
                "assembled {} bytes from {} frames for ins {:#04x}",
                acc.len(),
                continuations + 1,
                frame.instruction
            );
        }
        Ok((acc, status))
    }

    /// Exchange a command that must fit in a single response frame. A
    /// "more data" status is a protocol error.
    pub fn send_single(&mut self, frame: &Frame) -> Result<(Vec<u8>, StatusWord)> {
        let (data, status) = self.exchange(frame)?;
        if status.is_more_data() {
            return Err(Error::Protocol(format!(
                "unexpected continuation status {} for single-frame ins {:#04x}",
                status, frame.instruction
            )));
        }
        Ok((data, status))
    }

    /// Encode and send a command, chaining only when the command allows it.
    pub fn execute(&mut self, cmd: &Command) -> Result<(Vec<u8>, StatusWord)> {
        let frame = cmd.to_frame()?;
        debug!("execute {:?}", cmd);
        if cmd.chains() {
            self.send(&frame)
        } else {
            self.send_single(&frame)
        }
    }
}

impl std::fmt::Debug for FrameCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameCodec")
            .field("reader", &self.transport.reader_name())
            .field("config", &self.config)
            .finish()
    }
}
