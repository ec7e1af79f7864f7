//! # bulkwire
//!
//! Host-side framed message transfer over a USB bulk endpoint pair.
//!
//! A payload of arbitrary bytes is announced with a 4-byte little-endian
//! length header, cut into 64-byte blocks, and written to the device one
//! block at a time. After every block the host reads the IN endpoint: an
//! empty response acknowledges a mid-stream block, the response to the
//! final block is the 32-byte integrity digest, and anything else is an
//! error the device spelled out, decoded one character per byte.
//!
//! ## Architecture
//!
//! - **Framer** (`protocol`): pure chunking of the header/payload stream
//! - **Transfer engine** (`engine`): write/read sequencing and response
//!   classification over a [`Transport`]
//! - **Transports** (`transport`): a USB adapter over an already-claimed
//!   interface, and a scripted mock for tests
//!
//! Device discovery stays with the caller: open the device, claim the
//! interface, pick the endpoint pair, and hand the result to
//! [`UsbTransport`].
//!
//! ## Example
//!
//! ```ignore
//! use bulkwire::{engine, UsbTransport};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let device = nusb::list_devices()?
//!         .find(|d| d.vendor_id() == 0x0000 && d.product_id() == 0x0001)
//!         .ok_or("device not found")?
//!         .open()?;
//!     let interface = device.claim_interface(0)?;
//!     let mut transport = UsbTransport::new(interface, 0x01, 0x81);
//!
//!     let digest = engine::send(b"hello device", &mut transport).await?;
//!     println!("digest: {digest}");
//!     Ok(())
//! }
//! ```

pub mod engine;
pub mod error;
pub mod protocol;
pub mod transport;

pub use engine::{send, transfer};
pub use error::{BulkwireError, Result, Stage, TransportError};
pub use protocol::Digest;
pub use transport::{MockOp, MockTransport, Transport, UsbTransport};
