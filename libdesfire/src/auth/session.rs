// libdesfire-rs/libdesfire/src/auth/session.rs

use std::fmt;

use log::{debug, info, warn};
use rand::{CryptoRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use super::{AuthFailure, AuthOutcome, AuthState, AuthenticatedKey};
use crate::crypto::{self, CipherContext, KeyType};
use crate::protocol::{Frame, FrameCodec, commands::Command};
use crate::types::StatusWord;
use crate::{Error, Result};

/// One authentication attempt against one key slot.
///
/// The handshake frames are exchanged one at a time through
/// [`FrameCodec::exchange`]: the card's challenge arrives under the "more
/// data" status and must not be swallowed by the continuation loop.
pub struct AuthSession {
    key_number: u8,
    cipher: CipherContext,
    state: AuthState,
    rnd_a: Vec<u8>,
    rnd_b: Vec<u8>,
    card_proof: Vec<u8>,
}

impl AuthSession {
    /// Start a session. The key length is checked here, before any exchange.
    pub fn new(key_type: KeyType, key: &[u8], key_number: u8) -> Result<Self> {
        let cipher = CipherContext::new(key_type, key)?;
        Ok(Self {
            key_number,
            cipher,
            state: AuthState::Idle,
            rnd_a: Vec::new(),
            rnd_b: Vec::new(),
            card_proof: Vec::new(),
        })
    }

    pub fn key_type(&self) -> KeyType {
        self.cipher.key_type()
    }

    pub fn key_number(&self) -> u8 {
        self.key_number
    }

    pub fn state(&self) -> AuthState {
        self.state
    }

    /// Run every step and report how the handshake ended.
    ///
    /// Card-side rejections come back as `Ok(AuthOutcome::Failed(..))`;
    /// transport failures are returned as errors and leave the session in
    /// `Failed(Transport)`.
    pub fn run<R: RngCore + CryptoRng>(
        &mut self,
        codec: &mut FrameCodec,
        rng: &mut R,
    ) -> Result<AuthOutcome> {
        self.request_challenge(codec)?;
        if self.state == AuthState::ChallengeReceived {
            self.respond(codec, rng)?;
        }
        if self.state == AuthState::ResponseSent {
            self.verify()?;
        }
        self.outcome()
            .ok_or_else(|| Error::Protocol(format!("handshake stopped in {:?}", self.state)))
    }

    /// Terminal outcome, if the session has reached one.
    pub fn outcome(&self) -> Option<AuthOutcome> {
        match self.state {
            AuthState::Authenticated => Some(AuthOutcome::Authenticated(AuthenticatedKey {
                key_type: self.key_type(),
                key_number: self.key_number,
            })),
            AuthState::Failed(failure) => Some(AuthOutcome::Failed(failure)),
            _ => None,
        }
    }

    /// Send the authenticate command and decrypt the card's challenge.
    pub fn request_challenge(&mut self, codec: &mut FrameCodec) -> Result<()> {
        self.expect_state(AuthState::Idle, "request a challenge")?;

        let frame = Command::Authenticate {
            key_type: self.key_type(),
            key_number: self.key_number,
        }
        .to_frame()?;
        debug!(
            "{} authenticate with key {}: requesting challenge",
            self.key_type(),
            self.key_number
        );
        self.state = AuthState::ChallengeRequested;
        let (challenge, status) = self.exchange(codec, &frame)?;

        let len = self.key_type().challenge_len();
        if !status.is_more_data() || challenge.len() != len {
            self.fail(AuthFailure::ChallengeRejected {
                status,
                len: challenge.len(),
            });
            return Ok(());
        }

        self.rnd_b = self.cipher.decrypt(&challenge)?;
        self.state = AuthState::ChallengeReceived;
        Ok(())
    }

    /// Answer the challenge with `enc(rndA || rotl(rndB))`.
    pub fn respond<R: RngCore + CryptoRng>(
        &mut self,
        codec: &mut FrameCodec,
        rng: &mut R,
    ) -> Result<()> {
        self.expect_state(AuthState::ChallengeReceived, "send a response")?;

        let len = self.key_type().challenge_len();
        self.rnd_a = crypto::random_challenge(rng, len);

        let mut token = Vec::with_capacity(len * 2);
        token.extend_from_slice(&self.rnd_a);
        token.extend_from_slice(&crypto::rotate_left(&self.rnd_b));
        let encrypted = self.cipher.encrypt(&token);
        token.zeroize();
        let data = encrypted?;

        let frame = Command::AdditionalFrame { data }.to_frame()?;
        debug!("sending {} byte handshake response", frame.payload.len());
        let (proof, status) = self.exchange(codec, &frame)?;
        self.state = AuthState::ResponseSent;

        if !status.is_success() || proof.len() != len {
            self.fail(AuthFailure::ResponseRejected {
                status,
                len: proof.len(),
            });
            return Ok(());
        }

        self.card_proof = proof;
        Ok(())
    }

    /// Check the card's proof against rotated rndA.
    pub fn verify(&mut self) -> Result<()> {
        self.expect_state(AuthState::ResponseSent, "verify the card proof")?;

        let mut decrypted = self.cipher.decrypt(&self.card_proof)?;
        let candidate = crypto::rotate_right(&decrypted);
        decrypted.zeroize();

        if bool::from(candidate.ct_eq(&self.rnd_a)) {
            self.state = AuthState::Authenticated;
            info!(
                "authenticated with {} key {}",
                self.key_type(),
                self.key_number
            );
        } else {
            self.fail(AuthFailure::VerificationFailed);
        }
        self.wipe_challenges();
        Ok(())
    }

    fn exchange(
        &mut self,
        codec: &mut FrameCodec,
        frame: &Frame,
    ) -> Result<(Vec<u8>, StatusWord)> {
        match codec.exchange(frame) {
            Ok(reply) => Ok(reply),
            Err(e) => {
                self.fail(AuthFailure::Transport);
                Err(e)
            }
        }
    }

    fn fail(&mut self, failure: AuthFailure) {
        warn!(
            "{} authentication with key {} failed: {}",
            self.key_type(),
            self.key_number,
            failure
        );
        self.state = AuthState::Failed(failure);
        self.wipe_challenges();
    }

    fn expect_state(&self, expected: AuthState, action: &str) -> Result<()> {
        if self.state != expected {
            return Err(Error::InvalidInput(format!(
                "cannot {} in state {:?}",
                action, self.state
            )));
        }
        Ok(())
    }

    fn wipe_challenges(&mut self) {
        self.rnd_a.zeroize();
        self.rnd_b.zeroize();
        self.card_proof.zeroize();
    }
}

impl Drop for AuthSession {
    fn drop(&mut self) {
        self.wipe_challenges();
    }
}

impl fmt::Debug for AuthSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthSession")
            .field("key_type", &self.key_type())
            .field("key_number", &self.key_number)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
