//! Run the full pipeline against the scripted mock transport.
//!
//! No hardware required. Shows the block layout a device would see and
//! the digest coming back.
//!
//! # Running
//!
//! ```sh
//! RUST_LOG=bulkwire=trace cargo run --example loopback
//! ```

use tracing_subscriber::EnvFilter;

use bulkwire::protocol::frame;
use bulkwire::{engine, MockTransport};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let message = "The quick brown fox jumps over the lazy dog. ".repeat(4);
    let blocks = frame(message.as_bytes());
    println!("{} bytes framed into {} block(s)", message.len(), blocks.len());
    for (i, block) in blocks.iter().enumerate() {
        println!("  block {:>2}: {:>2} bytes", i, block.len());
    }

    // Script what a device would answer: one ack per block, then a digest
    let digest = [0x5Au8; 32];
    let mut transport = MockTransport::new().acks(blocks.len() - 1).respond(&digest);

    let got = engine::transfer(&blocks, &mut transport).await?;
    println!("digest: {}", got);

    Ok(())
}
