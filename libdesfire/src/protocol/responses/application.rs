// libdesfire-rs/libdesfire/src/protocol/responses/application.rs

use crate::types::ApplicationId;
use crate::{Error, Result};

/// Decode a GetApplicationIDs payload: consecutive 3-byte identifiers.
/// A trailing partial identifier is rejected, never silently dropped.
pub fn decode_application_ids(data: &[u8]) -> Result<Vec<ApplicationId>> {
    if data.len() % 3 != 0 {
        return Err(Error::Protocol(format!(
            "application list of {} bytes is not a multiple of 3",
            data.len()
        )));
    }

    data.chunks_exact(3)
        .map(|chunk| ApplicationId::try_from(chunk))
        .collect()
}
