// libdesfire-rs/libdesfire/src/protocol/responses/picc.rs

use crate::protocol::parser;
use crate::Result;

/// Decode a FreeMemory payload: 3-byte little-endian byte count. Bytes
/// beyond the first three are ignored.
pub fn decode_free_memory(data: &[u8]) -> Result<u32> {
    parser::le_u24_at(data, 0)
}
