// libdesfire-rs/libdesfire/src/crypto/mod.rs

//! Cipher provider for the authentication handshake.

pub mod context;
pub mod key_type;

pub use context::{CipherContext, decrypt, encrypt};
pub use key_type::KeyType;

use rand::{CryptoRng, RngCore};

/// Rotate left by one byte: `ABCDEFGH` -> `BCDEFGHA`.
pub fn rotate_left(data: &[u8]) -> Vec<u8> {
    let mut out = data.to_vec();
    if !out.is_empty() {
        out.rotate_left(1);
    }
    out
}

/// Rotate right by one byte: `ABCDEFGH` -> `HABCDEFG`.
pub fn rotate_right(data: &[u8]) -> Vec<u8> {
    let mut out = data.to_vec();
    if !out.is_empty() {
        out.rotate_right(1);
    }
    out
}

/// Fill `len` bytes from a cryptographic RNG.
pub fn random_challenge<R: RngCore + CryptoRng>(rng: &mut R, len: usize) -> Vec<u8> {
    let mut out = vec![0u8; len];
    rng.fill_bytes(&mut out);
    out
}
