// libdesfire-rs/libdesfire/src/protocol/commands/auth.rs

/// Encode the first authenticate frame parameters: the key slot only.
pub fn encode_authenticate(key_number: u8) -> Vec<u8> {
    vec![key_number]
}

/// Encode an additional frame carrying the host's challenge answer.
pub fn encode_additional_frame(data: &[u8]) -> Vec<u8> {
    data.to_vec()
}
