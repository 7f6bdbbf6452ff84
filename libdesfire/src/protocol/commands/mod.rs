// libdesfire-rs/libdesfire/src/protocol/commands/mod.rs

pub mod application;
pub mod auth;
pub mod file;

pub use application::{
    encode_create_application, encode_delete_application, encode_select_application,
};
pub use auth::{encode_additional_frame, encode_authenticate};
pub use file::{encode_get_file_settings, encode_read_data};

use crate::constants::*;
use crate::crypto::KeyType;
use crate::protocol::Frame;
use crate::types::{ApplicationId, FileId};
use crate::Result;

/// High-level Command enum. New commands should be added here and their
/// parameter encoder placed in `protocol::commands::<group>.rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    ListApplications,
    SelectApplication {
        aid: ApplicationId,
    },
    CreateApplication {
        aid: ApplicationId,
        key_settings: u8,
        app_settings: u8,
    },
    DeleteApplication {
        aid: ApplicationId,
    },
    FreeMemory,
    FormatCard,
    ListFiles,
    GetFileSettings {
        file: FileId,
    },
    ReadData {
        file: FileId,
        offset: u32,
        length: u32,
    },
    Authenticate {
        key_type: KeyType,
        key_number: u8,
    },
    AdditionalFrame {
        data: Vec<u8>,
    },
}

impl Command {
    /// Return the instruction byte for this command.
    pub fn instruction(&self) -> u8 {
        match self {
            Self::ListApplications => INS_LIST_APPLICATIONS,
            Self::SelectApplication { .. } => INS_SELECT_APPLICATION,
            Self::CreateApplication { .. } => INS_CREATE_APPLICATION,
            Self::DeleteApplication { .. } => INS_DELETE_APPLICATION,
            Self::FreeMemory => INS_FREE_MEMORY,
            Self::FormatCard => INS_FORMAT_CARD,
            Self::ListFiles => INS_LIST_FILES,
            Self::GetFileSettings { .. } => INS_GET_FILE_SETTINGS,
            Self::ReadData { .. } => INS_READ_DATA,
            Self::Authenticate { key_type, .. } => key_type.auth_instruction(),
            Self::AdditionalFrame { .. } => INS_ADDITIONAL_FRAME,
        }
    }

    /// Encode the command parameters (the frame's data field).
    pub fn encode(&self) -> Result<Vec<u8>> {
        Ok(match self {
            Self::ListApplications | Self::FreeMemory | Self::FormatCard | Self::ListFiles => {
                Vec::new()
            }
            Self::SelectApplication { aid } => encode_select_application(*aid),
            Self::CreateApplication {
                aid,
                key_settings,
                app_settings,
            } => encode_create_application(*aid, *key_settings, *app_settings),
            Self::DeleteApplication { aid } => encode_delete_application(*aid),
            Self::GetFileSettings { file } => encode_get_file_settings(*file),
            Self::ReadData {
                file,
                offset,
                length,
            } => encode_read_data(*file, *offset, *length)?,
            Self::Authenticate { key_number, .. } => encode_authenticate(*key_number),
            Self::AdditionalFrame { data } => encode_additional_frame(data),
        })
    }

    /// Build the wire frame for this command.
    pub fn to_frame(&self) -> Result<Frame> {
        Frame::new(self.instruction(), self.encode()?)
    }

    /// Whether a `91 AF` reply to this command is assembled through
    /// continuation frames. Every other command is single-frame and treats
    /// `91 AF` as a protocol error.
    pub fn chains(&self) -> bool {
        matches!(
            self,
            Self::ListApplications | Self::ListFiles | Self::ReadData { .. }
        )
    }
}
