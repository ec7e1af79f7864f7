//! Payload framing.
//!
//! Converts a payload into the ordered block sequence the device
//! expects: the 4-byte little-endian length header followed by the
//! payload bytes, cut into blocks of at most [`MAX_BLOCK_SIZE`] bytes.
//! The final block carries whatever remains and may be shorter.
//!
//! Framing is pure and cannot fail. Even an empty payload produces one
//! block holding the header alone.
//!
//! # Example
//!
//! ```
//! use bulkwire::protocol::{frame, MAX_BLOCK_SIZE};
//!
//! let blocks = frame(&[0xAB; 61]);
//! assert_eq!(blocks.len(), 2);
//! assert_eq!(blocks[0].len(), MAX_BLOCK_SIZE);
//! assert_eq!(blocks[1].len(), 1);
//! ```

use bytes::{Bytes, BytesMut};

use super::wire_format::{Header, HEADER_SIZE, MAX_BLOCK_SIZE};

/// Frame a payload into transmission blocks.
///
/// Every block is a cheap slice of one shared backing buffer
/// (zero-copy via `bytes::Bytes`).
pub fn frame(payload: &[u8]) -> Vec<Bytes> {
    debug_assert!(payload.len() <= u32::MAX as usize);
    let header = Header::new(payload.len() as u32);

    let mut stream = BytesMut::with_capacity(HEADER_SIZE + payload.len());
    stream.extend_from_slice(&header.encode());
    stream.extend_from_slice(payload);
    let stream = stream.freeze();

    let mut blocks = Vec::with_capacity(stream.len().div_ceil(MAX_BLOCK_SIZE));
    let mut offset = 0;
    while offset < stream.len() {
        let end = usize::min(offset + MAX_BLOCK_SIZE, stream.len());
        blocks.push(stream.slice(offset..end));
        offset = end;
    }
    blocks
}
