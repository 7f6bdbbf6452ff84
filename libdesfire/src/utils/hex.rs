//! Hexadecimal helpers used for logging and for parsing user input.
//!
//! Card tooling conventionally prints upper-case hex, so both formatters
//! emit upper-case digits.

use std::fmt::Write;

/// Convert a byte slice to an upper-case hex string without separators.
///
/// Example: `&[0x11, 0x2a]` -> `"112A"`
pub fn bytes_to_hex_upper(bytes: &[u8]) -> String {
    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        // write! never fails writing to a String
        let _ = write!(s, "{:02X}", b);
        s
    })
}

/// Convert a byte slice to upper-case hex with a single space between bytes,
/// the format used when logging frames.
///
/// Example: `&[0x90, 0x6a]` -> `"90 6A"`
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(bytes.len() * 3);
    for (i, b) in bytes.iter().enumerate() {
        if i != 0 {
            s.push(' ');
        }
        let _ = write!(s, "{:02X}", b);
    }
    s
}

/// Parse a hex string into bytes.
///
/// ASCII whitespace is ignored so `"11 22 33"` and `"112233"` are
/// equivalent. Returns an error message string on parse failure.
pub fn parse_hex(s: &str) -> Result<Vec<u8>, String> {
    let digits: Vec<u8> = s.bytes().filter(|b| !b.is_ascii_whitespace()).collect();

    if digits.len() % 2 != 0 {
        return Err("hex string has odd length".to_string());
    }

    digits
        .chunks_exact(2)
        .map(|pair| {
            let text = std::str::from_utf8(pair).map_err(|e| e.to_string())?;
            u8::from_str_radix(text, 16).map_err(|e| format!("invalid hex pair '{}': {}", text, e))
        })
        .collect()
}
