// libdesfire-rs/libdesfire/src/protocol/status.rs

use crate::types::StatusWord;

/// Meaning of a status word according to the fixed card status table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    /// `91 00`
    Success,
    /// `91 AF`, issue a continuation frame
    MoreData,
    /// `91 A0`
    ApplicationNotFound,
    /// `91 F0` or the ISO alternate `6A 82`
    FileNotFound,
    /// `91 7E`
    LengthError,
    /// Anything else
    Unexpected(StatusWord),
}

impl From<StatusWord> for StatusKind {
    fn from(sw: StatusWord) -> Self {
        match (sw.sw1, sw.sw2) {
            (0x91, 0x00) => Self::Success,
            (0x91, 0xAF) => Self::MoreData,
            (0x91, 0xA0) => Self::ApplicationNotFound,
            (0x91, 0xF0) | (0x6A, 0x82) => Self::FileNotFound,
            (0x91, 0x7E) => Self::LengthError,
            _ => Self::Unexpected(sw),
        }
    }
}
