//! Scripted in-memory transport for tests.
//!
//! No hardware, no I/O. Reads consume a response script one entry per
//! call; writes succeed unless a failure was injected for their index.
//! Every operation is recorded verbatim so tests can assert exactly
//! what went over the wire, and in what order.
//!
//! # Example
//!
//! ```
//! use bulkwire::{engine, MockTransport};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> bulkwire::Result<()> {
//! let digest = [0x11u8; 32];
//! let mut transport = MockTransport::new().respond(&digest);
//!
//! let got = engine::send(b"ping", &mut transport).await?;
//! assert_eq!(got.as_bytes(), &digest);
//! # Ok(())
//! # }
//! ```

use std::collections::VecDeque;

use crate::error::TransportError;

use super::Transport;

/// One operation observed by a [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockOp {
    /// A block written to the device, recorded verbatim.
    Write(Vec<u8>),
    /// A response read, with the cap the caller passed.
    Read {
        /// Maximum response length the caller would accept.
        max_len: usize,
    },
}

/// A scripted outcome for one read.
enum ReadScript {
    Respond(Vec<u8>),
    Fail(TransportError),
}

/// In-memory transport driven by a scripted response queue.
///
/// Reading past the end of the script fails with
/// [`TransportError::Closed`]. Scripted responses are delivered as
/// scripted, even past `max_len`, so contract violations can be
/// exercised.
#[derive(Default)]
pub struct MockTransport {
    script: VecDeque<ReadScript>,
    write_failure: Option<(usize, TransportError)>,
    writes_seen: usize,
    ops: Vec<MockOp>,
}

impl MockTransport {
    /// Create a transport with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a response for the next unanswered read.
    pub fn respond(mut self, response: &[u8]) -> Self {
        self.script.push_back(ReadScript::Respond(response.to_vec()));
        self
    }

    /// Queue `count` empty responses (block acknowledgements).
    pub fn acks(mut self, count: usize) -> Self {
        for _ in 0..count {
            self.script.push_back(ReadScript::Respond(Vec::new()));
        }
        self
    }

    /// Queue a read that fails with `error`.
    pub fn fail_read(mut self, error: TransportError) -> Self {
        self.script.push_back(ReadScript::Fail(error));
        self
    }

    /// Fail the write with the given zero-based index.
    pub fn fail_write_at(mut self, index: usize, error: TransportError) -> Self {
        self.write_failure = Some((index, error));
        self
    }

    /// All operations in the order they happened.
    pub fn ops(&self) -> &[MockOp] {
        &self.ops
    }

    /// Only the written blocks, in write order.
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                MockOp::Write(block) => Some(block.clone()),
                MockOp::Read { .. } => None,
            })
            .collect()
    }
}

impl Transport for MockTransport {
    async fn write(&mut self, block: &[u8]) -> Result<(), TransportError> {
        self.ops.push(MockOp::Write(block.to_vec()));
        let index = self.writes_seen;
        self.writes_seen += 1;

        match self.write_failure.take() {
            Some((at, error)) if at == index => Err(error),
            other => {
                self.write_failure = other;
                Ok(())
            }
        }
    }

    async fn read(&mut self, max_len: usize) -> Result<Vec<u8>, TransportError> {
        self.ops.push(MockOp::Read { max_len });
        match self.script.pop_front() {
            Some(ReadScript::Respond(response)) => Ok(response),
            Some(ReadScript::Fail(error)) => Err(error),
            None => Err(TransportError::Closed),
        }
    }
}
