//! USB bulk endpoint transport.
//!
//! Adapts one claimed `nusb` interface and a bulk endpoint pair to the
//! [`Transport`] contract. The caller finds the device, opens it, claims
//! the interface, and picks the endpoint addresses; this type only moves
//! blocks.
//!
//! # Example
//!
//! ```ignore
//! use std::time::Duration;
//! use bulkwire::UsbTransport;
//!
//! let device = nusb::list_devices()?
//!     .find(|d| d.vendor_id() == 0x0000 && d.product_id() == 0x0001)
//!     .ok_or("device not found")?
//!     .open()?;
//! let interface = device.claim_interface(0)?;
//!
//! let transport = UsbTransport::new(interface, 0x01, 0x81)
//!     .with_timeout(Duration::from_secs(5));
//! ```

use std::future::Future;
use std::time::Duration;

use nusb::transfer::RequestBuffer;
use nusb::Interface;

use crate::error::TransportError;

use super::Transport;

/// Transport over the bulk endpoint pair of a claimed USB interface.
pub struct UsbTransport {
    interface: Interface,
    endpoint_out: u8,
    endpoint_in: u8,
    timeout: Option<Duration>,
}

impl UsbTransport {
    /// Create a transport from an already-claimed interface.
    ///
    /// `endpoint_out` and `endpoint_in` are endpoint addresses as they
    /// appear in the descriptors (the IN address carries bit 7).
    pub fn new(interface: Interface, endpoint_out: u8, endpoint_in: u8) -> Self {
        Self {
            interface,
            endpoint_out,
            endpoint_in,
            timeout: None,
        }
    }

    /// Apply a per-operation timeout to every write and read.
    ///
    /// Without one, a silent device suspends the transfer indefinitely.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Await a transfer, capped by the timeout if one is configured.
async fn with_deadline<F: Future>(
    timeout: Option<Duration>,
    transfer: F,
) -> Result<F::Output, TransportError> {
    match timeout {
        Some(limit) => tokio::time::timeout(limit, transfer)
            .await
            .map_err(|_| TransportError::TimedOut),
        None => Ok(transfer.await),
    }
}

impl Transport for UsbTransport {
    async fn write(&mut self, block: &[u8]) -> Result<(), TransportError> {
        let transfer = self.interface.bulk_out(self.endpoint_out, block.to_vec());
        with_deadline(self.timeout, transfer).await?.into_result()?;
        Ok(())
    }

    async fn read(&mut self, max_len: usize) -> Result<Vec<u8>, TransportError> {
        let transfer = self
            .interface
            .bulk_in(self.endpoint_in, RequestBuffer::new(max_len));
        let response = with_deadline(self.timeout, transfer).await?.into_result()?;
        Ok(response)
    }
}

// Exercising this transport needs a device on the bus; see the `send`
// example for the end-to-end flow.
