// libdesfire-rs/libdesfire/src/constants.rs
//! Common protocol constants used across the crate

/// Class byte used for every wrapped DESFire command
pub const DESFIRE_CLA: u8 = 0x90;

/// Maximum payload length for a single short frame
pub const MAX_FRAME_PAYLOAD_LEN: usize = 255;

/// Upper bound on continuation frames fetched for one logical command
pub const DEFAULT_MAX_CONTINUATIONS: usize = 256;

/// Instruction codes
pub const INS_LIST_APPLICATIONS: u8 = 0x6A;
pub const INS_SELECT_APPLICATION: u8 = 0x5A;
pub const INS_CREATE_APPLICATION: u8 = 0xCA;
pub const INS_DELETE_APPLICATION: u8 = 0xDA;
pub const INS_FREE_MEMORY: u8 = 0x6E;
pub const INS_FORMAT_CARD: u8 = 0xFC;
pub const INS_LIST_FILES: u8 = 0x6F;
pub const INS_GET_FILE_SETTINGS: u8 = 0xF5;
pub const INS_READ_DATA: u8 = 0xBD;
pub const INS_AUTHENTICATE_DES: u8 = 0x0A;
pub const INS_AUTHENTICATE_ISO: u8 = 0x1A;
pub const INS_AUTHENTICATE_AES: u8 = 0xAA;

/// Continuation / additional frame instruction
pub const INS_ADDITIONAL_FRAME: u8 = 0xAF;

/// Key settings used when creating an application without explicit settings
pub const DEFAULT_KEY_SETTINGS: u8 = 0x0F;

/// Application settings (one key) used when creating an application
pub const DEFAULT_APP_SETTINGS: u8 = 0x01;

/// Key slot used by the handshake unless the caller picks another
pub const DEFAULT_KEY_NUMBER: u8 = 0x00;

/// Largest offset / length encodable in a 3-byte little-endian field
pub const MAX_U24: u32 = 0x00FF_FFFF;
// libdesfire-rs/libdesfire/src/constants.rs
