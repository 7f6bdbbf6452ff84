// libdesfire-rs/libdesfire/src/card/mod.rs

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::auth::{AuthOutcome, AuthSession};
use crate::constants::DEFAULT_KEY_NUMBER;
use crate::crypto::KeyType;
use crate::protocol::{FileSettings, FrameCodec};
use crate::transport::Transport;
use crate::types::{ApplicationId, FileId};
use crate::Result;

mod context;
pub use context::CardContext;

pub mod builder;
pub mod operations;

pub use builder::CardBuilder;
pub use operations::{
    CreateOutcome, DeleteOutcome, FileListing, FormatOutcome, ReadOutcome, SelectOutcome,
};

/// A DESFire card behind a transport.
///
/// `Card` owns the frame codec and the session context. Every method takes
/// `&mut self`, so commands never overlap.
#[derive(Debug)]
pub struct Card {
    codec: FrameCodec,
    context: CardContext,
}

impl Card {
    pub fn new(transport: Box<dyn Transport>) -> Self {
        Self::from_codec(FrameCodec::new(transport))
    }

    pub fn from_codec(codec: FrameCodec) -> Self {
        Self {
            codec,
            context: CardContext::default(),
        }
    }

    pub fn builder() -> CardBuilder {
        CardBuilder::new()
    }

    pub fn context(&self) -> &CardContext {
        &self.context
    }

    pub fn codec(&self) -> &FrameCodec {
        &self.codec
    }

    pub fn codec_mut(&mut self) -> &mut FrameCodec {
        &mut self.codec
    }

    /// Authenticate with key slot 0.
    pub fn authenticate(&mut self, key_type: KeyType, key: &[u8]) -> Result<AuthOutcome> {
        self.authenticate_key(key_type, key, DEFAULT_KEY_NUMBER)
    }

    /// Authenticate with the given key slot using the operating system RNG.
    pub fn authenticate_key(
        &mut self,
        key_type: KeyType,
        key: &[u8],
        key_number: u8,
    ) -> Result<AuthOutcome> {
        self.authenticate_with_rng(key_type, key, key_number, &mut OsRng)
    }

    /// Authenticate drawing rndA from `rng`.
    ///
    /// A successful handshake is recorded in the context; any other result
    /// clears it.
    pub fn authenticate_with_rng<R: RngCore + CryptoRng>(
        &mut self,
        key_type: KeyType,
        key: &[u8],
        key_number: u8,
        rng: &mut R,
    ) -> Result<AuthOutcome> {
        let mut session = AuthSession::new(key_type, key, key_number)?;
        self.context.authenticated = None;
        let outcome = session.run(&mut self.codec, rng)?;
        if let AuthOutcome::Authenticated(key) = outcome {
            self.context.authenticated = Some(key);
        }
        Ok(outcome)
    }

    pub fn list_applications(&mut self) -> Result<Vec<ApplicationId>> {
        operations::list_applications(&mut self.codec)
    }

    pub fn select_application(&mut self, aid: ApplicationId) -> Result<SelectOutcome> {
        operations::select_application(&mut self.codec, &mut self.context, aid)
    }

    pub fn create_application(
        &mut self,
        aid: ApplicationId,
        key_settings: u8,
        app_settings: u8,
    ) -> Result<CreateOutcome> {
        operations::create_application(&mut self.codec, aid, key_settings, app_settings)
    }

    pub fn delete_application(&mut self, aid: ApplicationId) -> Result<DeleteOutcome> {
        operations::delete_application(&mut self.codec, &mut self.context, aid)
    }

    pub fn free_memory(&mut self) -> Result<u32> {
        operations::free_memory(&mut self.codec)
    }

    /// Erase the card. `confirmed` must be true or nothing is sent.
    pub fn format_card(&mut self, confirmed: bool) -> Result<FormatOutcome> {
        operations::format_card(&mut self.codec, &mut self.context, confirmed)
    }

    pub fn list_files(&mut self) -> Result<FileListing> {
        operations::list_files(&mut self.codec)
    }

    pub fn file_settings(&mut self, file: FileId) -> Result<FileSettings> {
        operations::file_settings(&mut self.codec, file)
    }

    pub fn read_file(&mut self, file: FileId) -> Result<ReadOutcome> {
        operations::read_file(&mut self.codec, file)
    }

    pub fn read_file_range(
        &mut self,
        file: FileId,
        offset: u32,
        length: u32,
    ) -> Result<ReadOutcome> {
        operations::read_file_range(&mut self.codec, file, offset, length)
    }
}
