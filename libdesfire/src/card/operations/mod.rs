// libdesfire-rs/libdesfire/src/card/operations/mod.rs

//! Command codex operations.
//!
//! Each operation is a free function over the frame codec and the explicit
//! card context; `Card` wraps them as methods. Expected card statuses come
//! back as typed outcomes, anything outside an operation's expected set is
//! `Error::Status`.

pub mod application;
pub mod file;
pub mod picc;

pub use application::{
    CreateOutcome, DeleteOutcome, SelectOutcome, create_application, delete_application,
    list_applications, select_application,
};
pub use file::{FileListing, ReadOutcome, file_settings, list_files, read_file, read_file_range};
pub use picc::{FormatOutcome, format_card, free_memory};

use crate::types::StatusWord;
use crate::{Error, Result};

/// Fail with `Error::Status` unless `status` is success.
pub(crate) fn require_success(status: StatusWord) -> Result<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(Error::Status(status))
    }
}
