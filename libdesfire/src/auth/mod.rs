// libdesfire-rs/libdesfire/src/auth/mod.rs

//! Two-pass mutual authentication.
//!
//! An [`AuthSession`] drives one attempt through
//! `Idle -> ChallengeRequested -> ChallengeReceived -> ResponseSent` and ends
//! in `Authenticated` or `Failed`. Sessions are single-use.

mod session;

pub use session::AuthSession;

use derive_more::Display;

use crate::crypto::KeyType;
use crate::types::StatusWord;
use crate::{Error, Result};

/// Why a handshake did not complete.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum AuthFailure {
    /// The card did not answer the authenticate command with a challenge.
    #[display(
        fmt = "challenge rejected: status {}, {} challenge bytes",
        status,
        len
    )]
    ChallengeRejected { status: StatusWord, len: usize },
    /// The card did not accept our encrypted response.
    #[display(fmt = "response rejected: status {}, {} proof bytes", status, len)]
    ResponseRejected { status: StatusWord, len: usize },
    /// The card's proof did not decrypt to rotated rndA.
    #[display(fmt = "card proof verification failed")]
    VerificationFailed,
    /// The transport failed mid-handshake.
    #[display(fmt = "transport failure during handshake")]
    Transport,
}

/// Handshake progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthState {
    Idle,
    ChallengeRequested,
    ChallengeReceived,
    ResponseSent,
    Authenticated,
    Failed(AuthFailure),
}

impl AuthState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Authenticated | Self::Failed(_))
    }
}

/// Key slot a card session is authenticated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticatedKey {
    pub key_type: KeyType,
    pub key_number: u8,
}

/// Result of a completed handshake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthOutcome {
    Authenticated(AuthenticatedKey),
    Failed(AuthFailure),
}

impl AuthOutcome {
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Turn a failed handshake into `Error::Authentication`.
    pub fn into_result(self) -> Result<AuthenticatedKey> {
        match self {
            Self::Authenticated(key) => Ok(key),
            Self::Failed(failure) => Err(Error::Authentication(failure)),
        }
    }
}
