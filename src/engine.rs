//! Transfer engine - drives framed blocks across a transport.
//!
//! The engine owns sequencing and response classification. One block is
//! written and its response fully read before the next block goes out;
//! there is no pipelining and no retry. Responses are classified by
//! block position:
//! - mid-stream block: an empty response acknowledges it, anything else
//!   is an error the device spelled out
//! - final block: a 32-byte response is the integrity digest, an empty
//!   response means the device still expected data, anything else is
//!   again a device error
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

use bytes::Bytes;

use crate::error::{BulkwireError, Result, Stage, TransportError};
use crate::protocol::{frame, response_text, Digest, MAX_BLOCK_SIZE};
use crate::transport::Transport;

/// Frame a payload and transfer it in one call.
///
/// Returns the digest the device computed over the payload.
pub async fn send<T: Transport>(payload: &[u8], transport: &mut T) -> Result<Digest> {
    let blocks = frame(payload);
    transfer(&blocks, transport).await
}

/// Transfer an already-framed block sequence.
///
/// Blocks must come from [`frame`](crate::protocol::frame) (or follow
/// its layout); passing an empty sequence is host-side misuse and fails
/// with [`BulkwireError::Protocol`].
pub async fn transfer<T: Transport>(blocks: &[Bytes], transport: &mut T) -> Result<Digest> {
    let last = match blocks.len().checked_sub(1) {
        Some(last) => last,
        None => {
            return Err(BulkwireError::Protocol(
                "cannot transfer an empty block sequence".to_string(),
            ))
        }
    };

    tracing::debug!("Transferring {} block(s)", blocks.len());

    for (index, block) in blocks[..last].iter().enumerate() {
        let response = exchange(transport, block, index).await?;
        if !response.is_empty() {
            return Err(BulkwireError::DeviceReportedError {
                index,
                message: response_text(&response),
            });
        }
        tracing::trace!("Block {} acknowledged ({} bytes sent)", index, block.len());
    }

    let response = exchange(transport, &blocks[last], last).await?;
    if response.is_empty() {
        return Err(BulkwireError::IncompleteHandshake);
    }
    match Digest::from_slice(&response) {
        Some(digest) => {
            tracing::debug!("Transfer complete: {} block(s), digest {}", blocks.len(), digest);
            Ok(digest)
        }
        None => Err(BulkwireError::DeviceReportedError {
            index: last,
            message: response_text(&response),
        }),
    }
}

/// Write one block, then read its response.
async fn exchange<T: Transport>(
    transport: &mut T,
    block: &[u8],
    index: usize,
) -> Result<Vec<u8>> {
    transport
        .write(block)
        .await
        .map_err(|source| failed(Stage::Send, index, source))?;
    transport
        .read(MAX_BLOCK_SIZE)
        .await
        .map_err(|source| failed(Stage::Receive, index, source))
}

fn failed(stage: Stage, index: usize, source: TransportError) -> BulkwireError {
    tracing::error!("{} failed at block {}: {}", stage, index, source);
    BulkwireError::TransferFailed {
        stage,
        index,
        source,
    }
}
