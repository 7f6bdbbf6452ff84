//! Utilities for libdesfire: small helpers shared by the protocol layers.
//!
//! Only hex formatting/parsing lives here; it is used for frame logging and
//! for parsing identifiers and key material typed by a user.

pub mod hex;

pub use hex::*;
