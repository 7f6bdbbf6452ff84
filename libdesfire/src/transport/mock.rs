// libdesfire-rs/libdesfire/src/transport/mock.rs

use std::cell::RefCell;
use std::rc::Rc;

use crate::transport::traits::Transport;
use crate::types::StatusWord;
use crate::{Error, Result};

/// Mock transport for unit tests. It records sent frames and returns queued
/// responses in order.
#[derive(Debug, Default)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    pub responses: Vec<Vec<u8>>,
    /// Testing hook: number of transmit calls (counted from now) after which
    /// the transport reports a disconnect
    pub fail_after: Option<usize>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a raw response (data followed by SW1 SW2).
    pub fn push_response(&mut self, resp: Vec<u8>) {
        self.responses.push(resp);
    }

    /// Queue a response made of `data` and a status word.
    pub fn push_reply(&mut self, data: &[u8], status: StatusWord) {
        let mut resp = data.to_vec();
        resp.extend_from_slice(&status.to_bytes());
        self.responses.push(resp);
    }

    /// Make every transmit after the next `n` fail as a transport error.
    pub fn set_fail_after(&mut self, n: usize) {
        self.fail_after = Some(n);
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }
}

impl Transport for MockTransport {
    fn transmit(&mut self, frame: &[u8]) -> Result<Vec<u8>> {
        if let Some(remaining) = self.fail_after.as_mut() {
            if *remaining == 0 {
                return Err(Error::Transport("card removed".into()));
            }
            *remaining -= 1;
        }

        self.sent.push(frame.to_vec());
        if self.responses.is_empty() {
            Err(Error::Timeout)
        } else {
            Ok(self.responses.remove(0))
        }
    }

    fn reader_name(&self) -> Option<&str> {
        Some("mock")
    }

    fn reset(&mut self) -> Result<()> {
        // Reset clears the sent log but keeps queued responses so tests can
        // pre-seed replies before handing the transport to a card.
        self.sent.clear();
        Ok(())
    }
}

/// Transport handle sharing one `MockTransport` so a test can inspect the
/// sent frames after a `Card` has taken ownership of the transport.
#[derive(Debug, Clone, Default)]
pub struct SharedMock {
    inner: Rc<RefCell<MockTransport>>,
}

impl SharedMock {
    pub fn new(mock: MockTransport) -> Self {
        Self {
            inner: Rc::new(RefCell::new(mock)),
        }
    }

    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.inner.borrow().sent.clone()
    }

    pub fn push_reply(&self, data: &[u8], status: StatusWord) {
        self.inner.borrow_mut().push_reply(data, status);
    }

    pub fn pending_responses(&self) -> usize {
        self.inner.borrow().responses.len()
    }
}

impl Transport for SharedMock {
    fn transmit(&mut self, frame: &[u8]) -> Result<Vec<u8>> {
        self.inner.borrow_mut().transmit(frame)
    }

    fn reader_name(&self) -> Option<&str> {
        Some("mock")
    }

    fn reset(&mut self) -> Result<()> {
        self.inner.borrow_mut().reset()
    }
}
