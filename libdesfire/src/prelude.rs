// libdesfire-rs/libdesfire/src/prelude.rs

pub use crate::auth::{AuthFailure, AuthOutcome, AuthenticatedKey};
pub use crate::card::{
    Card, CardBuilder, CardContext, CreateOutcome, DeleteOutcome, FileListing, FormatOutcome,
    ReadOutcome, SelectOutcome,
};
pub use crate::crypto::KeyType;
pub use crate::protocol::{CodecConfig, FileSettings, FileType};
pub use crate::transport::Transport;
pub use crate::{ApplicationId, Error, FileId, Result, StatusWord};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex_spaced, bytes_to_hex_upper, parse_hex};
