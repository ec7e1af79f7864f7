//! Transport module - the seam between the transfer engine and the device.
//!
//! Provides:
//! - [`Transport`], the two-operation contract the engine drives
//! - [`UsbTransport`], an adapter over a claimed USB interface
//! - [`MockTransport`], a scripted in-memory implementation for tests

mod mock;
mod usb;

pub use mock::{MockOp, MockTransport};
pub use usb::UsbTransport;

use crate::error::TransportError;

/// A bidirectional block transport.
///
/// The engine writes one block, then reads that block's response in
/// full, before touching the next block. Implementations own their
/// timeout policy; the engine never imposes one.
// Driven with concrete transports; no Send bound is required of the futures.
#[allow(async_fn_in_trait)]
pub trait Transport {
    /// Write one block to the device.
    async fn write(&mut self, block: &[u8]) -> Result<(), TransportError>;

    /// Read the device's response to the last written block, up to
    /// `max_len` bytes. A zero-length response is valid.
    async fn read(&mut self, max_len: usize) -> Result<Vec<u8>, TransportError>;
}
