// libdesfire-rs/libdesfire/src/card/operations/application.rs

use log::debug;

use super::require_success;
use crate::card::CardContext;
use crate::protocol::{Command, FrameCodec, StatusKind, decode_application_ids};
use crate::types::{ApplicationId, StatusWord};
use crate::Result;

/// Result of SelectApplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Selected,
    NotPresent,
    Unexpected(StatusWord),
}

/// Result of CreateApplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    Created,
    Failed(StatusWord),
}

/// Result of DeleteApplication.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    Failed(StatusWord),
}

/// List the application identifiers on the card.
pub fn list_applications(codec: &mut FrameCodec) -> Result<Vec<ApplicationId>> {
    let (data, status) = codec.execute(&Command::ListApplications)?;
    require_success(status)?;
    let aids = decode_application_ids(&data)?;
    debug!("card lists {} applications", aids.len());
    Ok(aids)
}

/// Select an application. On success the context records it and drops any
/// authentication held for the previous application.
pub fn select_application(
    codec: &mut FrameCodec,
    context: &mut CardContext,
    aid: ApplicationId,
) -> Result<SelectOutcome> {
    let (_, status) = codec.execute(&Command::SelectApplication { aid })?;
    Ok(match status.kind() {
        StatusKind::Success => {
            context.select(aid);
            SelectOutcome::Selected
        }
        StatusKind::ApplicationNotFound => SelectOutcome::NotPresent,
        _ => SelectOutcome::Unexpected(status),
    })
}

pub fn create_application(
    codec: &mut FrameCodec,
    aid: ApplicationId,
    key_settings: u8,
    app_settings: u8,
) -> Result<CreateOutcome> {
    let (_, status) = codec.execute(&Command::CreateApplication {
        aid,
        key_settings,
        app_settings,
    })?;
    Ok(if status.is_success() {
        CreateOutcome::Created
    } else {
        CreateOutcome::Failed(status)
    })
}

/// Delete an application. Deleting the selected application moves the
/// context back to the PICC level.
pub fn delete_application(
    codec: &mut FrameCodec,
    context: &mut CardContext,
    aid: ApplicationId,
) -> Result<DeleteOutcome> {
    let (_, status) = codec.execute(&Command::DeleteApplication { aid })?;
    if !status.is_success() {
        return Ok(DeleteOutcome::Failed(status));
    }
    if context.selected_application == Some(aid) {
        context.select(ApplicationId::PICC);
    }
    Ok(DeleteOutcome::Deleted)
}
