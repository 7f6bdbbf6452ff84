// libdesfire-rs/libdesfire/src/protocol/responses/file.rs

use crate::protocol::parser;
use crate::types::FileId;
use crate::Result;

/// Decode a GetFileIDs payload: one identifier per byte, card order kept.
pub fn decode_file_ids(data: &[u8]) -> Vec<FileId> {
    data.iter().copied().map(FileId::new).collect()
}

/// File type reported in the first byte of GetFileSettings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    StandardData,
    BackupData,
    Value,
    LinearRecord,
    CyclicRecord,
    Unknown(u8),
}

impl From<u8> for FileType {
    fn from(b: u8) -> Self {
        match b {
            0x00 => Self::StandardData,
            0x01 => Self::BackupData,
            0x02 => Self::Value,
            0x03 => Self::LinearRecord,
            0x04 => Self::CyclicRecord,
            other => Self::Unknown(other),
        }
    }
}

/// Decoded GetFileSettings reply. Only the common header is interpreted;
/// the type-specific tail is kept in `raw`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSettings {
    pub file_type: FileType,
    pub comm_settings: u8,
    pub access_rights: u16,
    /// File size for standard and backup data files
    pub size: Option<u32>,
    pub raw: Vec<u8>,
}

/// Layout: file_type(1) + comm_settings(1) + access_rights(2, LE) + tail
pub fn decode_file_settings(data: &[u8]) -> Result<FileSettings> {
    parser::ensure_len(data, 4)?;
    let file_type = FileType::from(parser::byte_at(data, 0)?);
    let comm_settings = parser::byte_at(data, 1)?;
    let rights = parser::slice_at(data, 2, 2)?;
    let access_rights = u16::from_le_bytes([rights[0], rights[1]]);

    let size = match file_type {
        FileType::StandardData | FileType::BackupData => Some(parser::le_u24_at(data, 4)?),
        _ => None,
    };

    Ok(FileSettings {
        file_type,
        comm_settings,
        access_rights,
        size,
        raw: data.to_vec(),
    })
}
