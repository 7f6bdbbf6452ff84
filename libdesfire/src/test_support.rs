//! Test support helpers intended for use by unit and integration tests.
//!
//! `SimulatedCard` plays the card side of the authentication handshake and
//! hands every other frame to an inner `MockTransport`, so a test can
//! authenticate and then script the rest of a session.
#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::constants::INS_ADDITIONAL_FRAME;
use crate::crypto::{self, CipherContext, KeyType};
use crate::transport::Transport;
use crate::transport::mock::MockTransport;
use crate::types::StatusWord;
use crate::{Error, Result};

/// Frames observed by a `SimulatedCard`, shared with the test.
pub type FrameLog = Rc<RefCell<Vec<Vec<u8>>>>;

/// Build a MockTransport pre-seeded with `(data, status)` replies and return
/// it boxed as a Transport trait object.
#[doc(hidden)]
pub fn boxed_mock_with_replies(replies: &[(&[u8], StatusWord)]) -> Box<dyn Transport> {
    let mut mock = MockTransport::new();
    for (data, status) in replies {
        mock.push_reply(data, *status);
    }
    Box::new(mock)
}

/// Card double that knows one key and answers the two-pass handshake.
#[doc(hidden)]
pub struct SimulatedCard {
    key_type: KeyType,
    key: Vec<u8>,
    rnd_b: Vec<u8>,
    pending: Option<CipherContext>,
    corrupt_proof: bool,
    fallback: MockTransport,
    log: FrameLog,
}

impl SimulatedCard {
    pub fn new(key_type: KeyType, key: &[u8]) -> Self {
        // Fixed rndB keeps traces reproducible
        let rnd_b = (0..key_type.challenge_len() as u8)
            .map(|i| 0xB0 ^ i)
            .collect();
        Self {
            key_type,
            key: key.to_vec(),
            rnd_b,
            pending: None,
            corrupt_proof: false,
            fallback: MockTransport::new(),
            log: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Flip a bit in the card's final proof.
    pub fn corrupt_proof(mut self) -> Self {
        self.corrupt_proof = true;
        self
    }

    /// Queue a reply for the next frame that is not part of a handshake.
    pub fn push_reply(&mut self, data: &[u8], status: StatusWord) {
        self.fallback.push_reply(data, status);
    }

    pub fn with_reply(mut self, data: &[u8], status: StatusWord) -> Self {
        self.push_reply(data, status);
        self
    }

    /// Handle on every frame the card receives.
    pub fn frame_log(&self) -> FrameLog {
        Rc::clone(&self.log)
    }

    fn reply(mut data: Vec<u8>, status: StatusWord) -> Vec<u8> {
        data.extend_from_slice(&status.to_bytes());
        data
    }

    fn issue_challenge(&mut self) -> Result<Vec<u8>> {
        let mut cipher = CipherContext::new(self.key_type, &self.key)?;
        let challenge = cipher.encrypt(&self.rnd_b)?;
        self.pending = Some(cipher);
        Ok(Self::reply(challenge, StatusWord::MORE_DATA))
    }

    fn answer(&mut self, mut cipher: CipherContext, frame: &[u8]) -> Result<Vec<u8>> {
        let n = self.key_type.challenge_len();
        let data = match frame.get(4) {
            Some(&lc) => frame.get(5..5 + lc as usize).unwrap_or_default(),
            None => &[],
        };
        if data.len() != 2 * n {
            return Ok(Self::reply(Vec::new(), StatusWord::LENGTH_ERROR));
        }

        let token = cipher.decrypt(data)?;
        let (rnd_a, rotated_b) = token.split_at(n);
        if rotated_b != crypto::rotate_left(&self.rnd_b).as_slice() {
            return Ok(Self::reply(Vec::new(), StatusWord::AUTHENTICATION_ERROR));
        }

        let mut proof = crypto::rotate_left(rnd_a);
        if self.corrupt_proof {
            proof[0] ^= 0x01;
        }
        Ok(Self::reply(cipher.encrypt(&proof)?, StatusWord::SUCCESS))
    }
}

impl Transport for SimulatedCard {
    fn transmit(&mut self, frame: &[u8]) -> Result<Vec<u8>> {
        self.log.borrow_mut().push(frame.to_vec());
        let ins = *frame
            .get(1)
            .ok_or_else(|| Error::Transport("short frame".into()))?;

        if ins == self.key_type.auth_instruction() {
            return self.issue_challenge();
        }
        if ins == INS_ADDITIONAL_FRAME {
            if let Some(cipher) = self.pending.take() {
                return self.answer(cipher, frame);
            }
        }
        // Any other frame abandons a handshake in progress
        self.pending = None;
        self.fallback.transmit(frame)
    }

    fn reader_name(&self) -> Option<&str> {
        Some("simulated")
    }
}
