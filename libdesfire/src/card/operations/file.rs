// libdesfire-rs/libdesfire/src/card/operations/file.rs

use log::{debug, warn};

use super::require_success;
use crate::protocol::{
    Command, FileSettings, FrameCodec, StatusKind, decode_file_ids, decode_file_settings,
};
use crate::types::{FileId, StatusWord};
use crate::Result;

/// File identifiers of the selected application.
///
/// Every identifier is probed with GetFileSettings. The listing stops at the
/// first identifier whose probe is refused; `truncated` records that the
/// card reported more files than were returned.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FileListing {
    pub files: Vec<FileId>,
    pub truncated: bool,
}

/// Result of ReadData.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Complete(Vec<u8>),
    FileNotFound,
    LengthFieldInvalid,
    Unexpected(StatusWord),
}

impl ReadOutcome {
    /// File contents, if the read completed.
    pub fn into_data(self) -> Option<Vec<u8>> {
        match self {
            Self::Complete(data) => Some(data),
            _ => None,
        }
    }
}

pub fn list_files(codec: &mut FrameCodec) -> Result<FileListing> {
    let (data, status) = codec.execute(&Command::ListFiles)?;
    require_success(status)?;

    let ids = decode_file_ids(&data);
    let mut listing = FileListing::default();
    for file in ids.iter().copied() {
        let (_, probe) = codec.execute(&Command::GetFileSettings { file })?;
        if !probe.is_success() {
            warn!(
                "file {} refused settings probe with {}; listing truncated after {} of {} files",
                file,
                probe,
                listing.files.len(),
                ids.len()
            );
            listing.truncated = true;
            break;
        }
        listing.files.push(file);
    }
    Ok(listing)
}

/// Decoded settings of one file.
pub fn file_settings(codec: &mut FrameCodec, file: FileId) -> Result<FileSettings> {
    let (data, status) = codec.execute(&Command::GetFileSettings { file })?;
    require_success(status)?;
    decode_file_settings(&data)
}

/// Read a whole data file.
pub fn read_file(codec: &mut FrameCodec, file: FileId) -> Result<ReadOutcome> {
    read_file_range(codec, file, 0, 0)
}

/// Read `length` bytes from `offset`; a length of 0 reads to the end of the
/// file. Both values must fit in 24 bits.
pub fn read_file_range(
    codec: &mut FrameCodec,
    file: FileId,
    offset: u32,
    length: u32,
) -> Result<ReadOutcome> {
    let (data, status) = codec.execute(&Command::ReadData {
        file,
        offset,
        length,
    })?;
    Ok(match status.kind() {
        StatusKind::Success => {
            debug!("read {} bytes from file {}", data.len(), file);
            ReadOutcome::Complete(data)
        }
        StatusKind::FileNotFound => ReadOutcome::FileNotFound,
        StatusKind::LengthError => ReadOutcome::LengthFieldInvalid,
        _ => ReadOutcome::Unexpected(status),
    })
}
