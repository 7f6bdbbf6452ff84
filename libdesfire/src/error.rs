// libdesfire-rs/libdesfire/src/error.rs

use thiserror::Error;

use crate::auth::AuthFailure;
use crate::crypto::KeyType;
use crate::types::StatusWord;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("reader not found")]
    ReaderNotFound,

    // PC/SC 実装を後から有効化できるように optional dependency にしている
    #[cfg(feature = "pcsc")]
    #[error("pc/sc error: {0}")]
    Pcsc(#[from] pcsc::Error),

    #[error("transport error: {0}")]
    Transport(String),

    #[error("operation timed out")]
    Timeout,

    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("cipher input of {actual} bytes is not a multiple of the {block}-byte block")]
    BlockAlignment { block: usize, actual: usize },

    #[error("unsupported key type: {0}")]
    UnsupportedKeyType(String),

    #[error("key length mismatch for {key_type}: expected {expected}, got {actual}")]
    KeyLengthMismatch {
        key_type: KeyType,
        expected: usize,
        actual: usize,
    },

    #[error("card status: {0}")]
    Status(StatusWord),

    #[error("authentication failed: {0}")]
    Authentication(AuthFailure),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

impl Error {
    /// True for failures raised by the transport collaborator rather than
    /// by the card protocol.
    pub fn is_transport(&self) -> bool {
        match self {
            Self::ReaderNotFound | Self::Transport(_) | Self::Timeout => true,
            #[cfg(feature = "pcsc")]
            Self::Pcsc(_) => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
