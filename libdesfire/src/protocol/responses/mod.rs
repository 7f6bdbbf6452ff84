// libdesfire-rs/libdesfire/src/protocol/responses/mod.rs

//! Payload decoders. Status words are mapped by the card operations; the
//! functions here only interpret the data bytes of a successful reply.

pub mod application;
pub mod file;
pub mod picc;

pub use application::decode_application_ids;
pub use file::{FileSettings, FileType, decode_file_ids, decode_file_settings};
pub use picc::decode_free_memory;
