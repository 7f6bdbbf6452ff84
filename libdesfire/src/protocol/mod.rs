// libdesfire-rs/libdesfire/src/protocol/mod.rs

pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;
pub mod status;

pub use codec::{CodecConfig, FrameCodec};
pub use commands::Command;
pub use frame::Frame;
pub use responses::{
    FileSettings, FileType, decode_application_ids, decode_file_ids, decode_file_settings,
    decode_free_memory,
};
pub use status::StatusKind;
