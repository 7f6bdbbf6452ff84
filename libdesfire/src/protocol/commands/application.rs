// libdesfire-rs/libdesfire/src/protocol/commands/application.rs

use crate::types::ApplicationId;

/// Encode SelectApplication parameters (instruction 0x5A)
pub fn encode_select_application(aid: ApplicationId) -> Vec<u8> {
    aid.as_bytes().to_vec()
}

/// Encode CreateApplication parameters (instruction 0xCA)
/// Layout: aid(3) + key_settings(1) + app_settings(1)
pub fn encode_create_application(aid: ApplicationId, key_settings: u8, app_settings: u8) -> Vec<u8> {
    let mut buf = Vec::with_capacity(5);
    buf.extend_from_slice(aid.as_bytes());
    buf.push(key_settings);
    buf.push(app_settings);
    buf
}

/// Encode DeleteApplication parameters (instruction 0xDA)
pub fn encode_delete_application(aid: ApplicationId) -> Vec<u8> {
    aid.as_bytes().to_vec()
}
