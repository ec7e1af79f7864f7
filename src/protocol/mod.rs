//! Protocol module - wire format, framing, and response primitives.
//!
//! This module implements the device-bound byte layout:
//! - 4-byte little-endian length header
//! - Chunking of the header/payload stream into 64-byte blocks
//! - Response decoding (integrity digest, error text)

mod framer;
mod wire_format;

pub use framer::frame;
pub use wire_format::{response_text, Digest, Header, DIGEST_SIZE, HEADER_SIZE, MAX_BLOCK_SIZE};
