// libdesfire-rs/libdesfire/src/card/builder.rs

use crate::card::Card;
use crate::protocol::{CodecConfig, FrameCodec};
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a `Card` with optional configuration.
#[derive(Default)]
pub struct CardBuilder {
    transport: Option<Box<dyn Transport>>,
    config: CodecConfig,
}

impl CardBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn codec_config(mut self, config: CodecConfig) -> Self {
        self.config = config;
        self
    }

    pub fn max_continuations(mut self, max: usize) -> Self {
        self.config.max_continuations = max;
        self
    }

    /// Consume the builder. Requires a transport; otherwise ReaderNotFound.
    pub fn build(self) -> Result<Card> {
        match self.transport {
            Some(t) => Ok(Card::from_codec(FrameCodec::with_config(t, self.config))),
            None => Err(Error::ReaderNotFound),
        }
    }
}
