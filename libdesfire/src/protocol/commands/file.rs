// libdesfire-rs/libdesfire/src/protocol/commands/file.rs

use crate::constants::MAX_U24;
use crate::types::FileId;
use crate::{Error, Result};

/// Encode GetFileSettings parameters (instruction 0xF5)
pub fn encode_get_file_settings(file: FileId) -> Vec<u8> {
    vec![file.as_u8()]
}

/// Encode ReadData parameters (instruction 0xBD)
/// Layout: file(1) + offset(3, LE) + length(3, LE). A length of 0 reads the
/// whole file from `offset`.
pub fn encode_read_data(file: FileId, offset: u32, length: u32) -> Result<Vec<u8>> {
    for (name, value) in [("offset", offset), ("length", length)] {
        if value > MAX_U24 {
            return Err(Error::InvalidInput(format!(
                "{} {:#x} does not fit in 3 bytes",
                name, value
            )));
        }
    }

    let mut buf = Vec::with_capacity(7);
    buf.push(file.as_u8());
    buf.extend_from_slice(&offset.to_le_bytes()[..3]);
    buf.extend_from_slice(&length.to_le_bytes()[..3]);
    Ok(buf)
}
