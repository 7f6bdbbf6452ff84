// libdesfire-rs/libdesfire/src/protocol/frame.rs

use crate::constants::{DESFIRE_CLA, INS_ADDITIONAL_FRAME, MAX_FRAME_PAYLOAD_LEN};
use crate::types::StatusWord;
use crate::{Error, Result};

/// One wrapped DESFire command frame.
///
/// Wire format: `[CLA 0x90] [INS] [P1 0x00] [P2 0x00] [Lc data..] [Le 0x00]`.
/// `Lc` and the data are omitted when the payload is empty; the trailing
/// `Le = 0x00` asks the card for a response of any length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub instruction: u8,
    pub payload: Vec<u8>,
}

impl Frame {
    pub fn new(instruction: u8, payload: Vec<u8>) -> Result<Self> {
        if payload.len() > MAX_FRAME_PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: MAX_FRAME_PAYLOAD_LEN,
                actual: payload.len(),
            });
        }
        Ok(Self {
            instruction,
            payload,
        })
    }

    /// Frame with no parameters, used by commands such as free memory.
    pub fn bare(instruction: u8) -> Self {
        Self {
            instruction,
            payload: Vec::new(),
        }
    }

    /// Continuation request sent while the card reports more data.
    pub fn continuation() -> Self {
        Self::bare(INS_ADDITIONAL_FRAME)
    }

    /// Encode the frame into its wire bytes.
    pub fn encode(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(4 + 1 + self.payload.len() + 1);
        out.extend_from_slice(&[DESFIRE_CLA, self.instruction, 0x00, 0x00]);
        if !self.payload.is_empty() {
            // Bounded by `new`
            out.push(self.payload.len() as u8);
            out.extend_from_slice(&self.payload);
        }
        out.push(0x00);
        out
    }

    /// Split a raw transport response into its data and trailing status word.
    pub fn decode_response(raw: &[u8]) -> Result<(Vec<u8>, StatusWord)> {
        match raw {
            [data @ .., sw1, sw2] => Ok((data.to_vec(), StatusWord::new(*sw1, *sw2))),
            _ => Err(Error::Protocol(format!(
                "response of {} bytes has no status word",
                raw.len()
            ))),
        }
    }
}
