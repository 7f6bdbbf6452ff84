// libdesfire-rs/libdesfire/src/card/operations/picc.rs

use log::info;

use super::require_success;
use crate::card::CardContext;
use crate::protocol::{Command, FrameCodec, decode_free_memory};
use crate::types::{ApplicationId, StatusWord};
use crate::{Error, Result};

/// Result of FormatPICC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatOutcome {
    Formatted,
    Failed(StatusWord),
}

/// Free user memory in bytes.
pub fn free_memory(codec: &mut FrameCodec) -> Result<u32> {
    let (data, status) = codec.execute(&Command::FreeMemory)?;
    require_success(status)?;
    decode_free_memory(&data)
}

/// Erase every application on the card. Nothing is sent unless `confirmed`.
pub fn format_card(
    codec: &mut FrameCodec,
    context: &mut CardContext,
    confirmed: bool,
) -> Result<FormatOutcome> {
    if !confirmed {
        return Err(Error::InvalidInput(
            "format erases every application and must be confirmed".into(),
        ));
    }
    let (_, status) = codec.execute(&Command::FormatCard)?;
    if !status.is_success() {
        return Ok(FormatOutcome::Failed(status));
    }
    info!("card formatted");
    context.select(ApplicationId::PICC);
    Ok(FormatOutcome::Formatted)
}
