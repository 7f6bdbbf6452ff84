// libdesfire-rs/libdesfire/src/lib.rs

//! libdesfire
//!
//! Pure Rust protocol core for DESFire contactless smart cards: command
//! framing with continuation chaining, the card command set, and the
//! DES/3DES/AES mutual authentication handshake.
#![warn(missing_docs)]

pub mod auth;
pub mod card;
pub mod constants;
pub mod crypto;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the identifier newtypes are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
