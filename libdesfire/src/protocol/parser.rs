// libdesfire-rs/libdesfire/src/protocol/parser.rs

use crate::{Error, Result};

/// Ensure the payload has at least `min` bytes. A short card payload is a
/// protocol error rather than a caller-side length error.
pub fn ensure_len(data: &[u8], min: usize) -> Result<()> {
    if data.len() < min {
        return Err(Error::Protocol(format!(
            "payload too short: expected at least {} bytes, got {}",
            min,
            data.len()
        )));
    }
    Ok(())
}

/// Read a single byte at `idx` with bounds checking.
pub fn byte_at(data: &[u8], idx: usize) -> Result<u8> {
    ensure_len(data, idx + 1)?;
    Ok(data[idx])
}

/// Return a subslice with bounds checking.
pub fn slice_at(data: &[u8], idx: usize, len: usize) -> Result<&[u8]> {
    ensure_len(data, idx + len)?;
    Ok(&data[idx..idx + len])
}

/// Read a little-endian 24-bit unsigned integer at `idx`.
pub fn le_u24_at(data: &[u8], idx: usize) -> Result<u32> {
    let s = slice_at(data, idx, 3)?;
    Ok(u32::from_le_bytes([s[0], s[1], s[2], 0]))
}
