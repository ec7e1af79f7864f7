//! Send a message to a connected device and print its digest.
//!
//! This example demonstrates the caller side of the transport contract:
//! - Find the device by VID/PID and claim interface 0
//! - Pick the first bulk OUT and IN endpoints from the descriptors
//! - Run one transfer and print the digest in hex
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=bulkwire=trace cargo run --example send
//! ```

use std::time::Duration;

use nusb::transfer::{Direction, EndpointType};
use tracing_subscriber::EnvFilter;

use bulkwire::{engine, UsbTransport};

/// Vendor ID of the target device.
const VENDOR_ID: u16 = 0x0000;
/// Product ID of the target device.
const PRODUCT_ID: u16 = 0x0001;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // Find and open the device
    let info = nusb::list_devices()?
        .find(|d| d.vendor_id() == VENDOR_ID && d.product_id() == PRODUCT_ID)
        .ok_or("device not found")?;
    let device = info.open()?;
    let interface = device.claim_interface(0)?;

    // First bulk endpoint in each direction on interface 0, alt 0
    let config = device.active_configuration()?;
    let mut endpoint_out = None;
    let mut endpoint_in = None;
    for group in config.interfaces() {
        if group.interface_number() != 0 {
            continue;
        }
        for alt in group.alt_settings() {
            if alt.alternate_setting() != 0 {
                continue;
            }
            for endpoint in alt.endpoints() {
                if endpoint.transfer_type() != EndpointType::Bulk {
                    continue;
                }
                match endpoint.direction() {
                    Direction::Out => {
                        if endpoint_out.is_none() {
                            endpoint_out = Some(endpoint.address());
                        }
                    }
                    Direction::In => {
                        if endpoint_in.is_none() {
                            endpoint_in = Some(endpoint.address());
                        }
                    }
                }
            }
        }
    }
    let endpoint_out = endpoint_out.ok_or("no bulk OUT endpoint on interface 0")?;
    let endpoint_in = endpoint_in.ok_or("no bulk IN endpoint on interface 0")?;

    let mut transport = UsbTransport::new(interface, endpoint_out, endpoint_in)
        .with_timeout(Duration::from_secs(5));

    // A message long enough to span several blocks
    let message = "Hello from the host! ".repeat(12);
    let digest = engine::send(message.as_bytes(), &mut transport).await?;

    println!("sent {} bytes", message.len());
    println!("digest: {}", digest);

    Ok(())
}
