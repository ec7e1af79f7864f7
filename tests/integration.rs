//! Integration tests for bulkwire.
//!
//! These tests drive the full pipeline (framing, transfer engine,
//! transport) over the scripted mock transport.

use bulkwire::protocol::{frame, DIGEST_SIZE, HEADER_SIZE, MAX_BLOCK_SIZE};
use bulkwire::{engine, BulkwireError, MockOp, MockTransport, Stage, TransportError};

const DIGEST: [u8; DIGEST_SIZE] = [0xA7; DIGEST_SIZE];

/// Script one ack per block except the last, then the digest.
fn device_for(block_count: usize) -> MockTransport {
    MockTransport::new().acks(block_count - 1).respond(&DIGEST)
}

/// A multi-block payload travels in order and comes back with the digest.
#[tokio::test]
async fn test_multi_block_send_returns_digest() {
    let payload: Vec<u8> = (0..500).map(|i| (i % 256) as u8).collect();
    let blocks = frame(&payload);
    assert_eq!(blocks.len(), (HEADER_SIZE + 500).div_ceil(MAX_BLOCK_SIZE));

    let mut transport = device_for(blocks.len());
    let digest = engine::send(&payload, &mut transport).await.unwrap();

    assert_eq!(digest.as_bytes(), &DIGEST);

    // The wire saw exactly the framed blocks, in frame order
    let sent = transport.writes();
    assert_eq!(sent.len(), blocks.len());
    for (sent_block, block) in sent.iter().zip(&blocks) {
        assert_eq!(sent_block, &block[..]);
    }
}

/// An empty payload still produces one block: the header alone.
#[tokio::test]
async fn test_empty_payload_is_a_single_header_block() {
    let mut transport = MockTransport::new().respond(&DIGEST);

    let digest = engine::send(&[], &mut transport).await.unwrap();

    assert_eq!(digest.as_bytes(), &DIGEST);
    assert_eq!(transport.writes(), vec![vec![0u8, 0, 0, 0]]);
}

/// A 60-byte payload fills one block exactly; no empty trailing block.
#[tokio::test]
async fn test_payload_filling_one_block_exactly() {
    let payload = [0x42u8; 60];
    let mut transport = MockTransport::new().respond(&DIGEST);

    engine::send(&payload, &mut transport).await.unwrap();

    let sent = transport.writes();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].len(), MAX_BLOCK_SIZE);
    assert_eq!(&sent[0][..HEADER_SIZE], &60u32.to_le_bytes());
    assert_eq!(&sent[0][HEADER_SIZE..], &payload);
}

/// Every block is written, then read, before the next block goes out.
#[tokio::test]
async fn test_strict_write_then_read_order() {
    let payload = [0u8; 1000];
    let blocks = frame(&payload);
    let mut transport = device_for(blocks.len());

    engine::send(&payload, &mut transport).await.unwrap();

    let ops = transport.ops();
    assert_eq!(ops.len(), blocks.len() * 2);
    for (i, pair) in ops.chunks(2).enumerate() {
        match &pair[0] {
            MockOp::Write(block) => assert_eq!(block, &blocks[i][..]),
            other => panic!("expected a write at op {}: {:?}", i * 2, other),
        }
        assert_eq!(pair[1], MockOp::Read { max_len: MAX_BLOCK_SIZE });
    }
}

/// A device error response mid-stream aborts the transfer immediately.
#[tokio::test]
async fn test_device_error_stops_the_stream() {
    let payload = [0u8; 300];
    let blocks = frame(&payload);
    let mut transport = MockTransport::new().acks(1).respond(b"Unexpected sequence");

    let err = engine::send(&payload, &mut transport).await.unwrap_err();

    assert_eq!(
        err.to_string(),
        "device reported an error at block 1: Unexpected sequence"
    );
    // Blocks 0 and 1 went out, nothing after
    assert_eq!(transport.writes().len(), 2);
    assert!(transport.writes().len() < blocks.len());
}

/// An empty response to the final block means the device wanted more.
#[tokio::test]
async fn test_incomplete_handshake_on_final_block() {
    let payload = [0u8; 100];
    let blocks = frame(&payload);
    let mut transport = MockTransport::new().acks(blocks.len());

    let err = engine::send(&payload, &mut transport).await.unwrap_err();

    assert!(matches!(err, BulkwireError::IncompleteHandshake));
    assert_eq!(
        err.to_string(),
        "device expected more data than the header announced"
    );
}

/// A final response that is neither empty nor 32 bytes is a device error.
#[tokio::test]
async fn test_short_final_response_is_a_device_error() {
    let mut transport = MockTransport::new().respond(&[0x21; 5]);

    let err = engine::send(b"hi", &mut transport).await.unwrap_err();

    match err {
        BulkwireError::DeviceReportedError { index, message } => {
            assert_eq!(index, 0);
            assert_eq!(message.len(), 5);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

/// Transport failures carry the stage and the block index.
#[tokio::test]
async fn test_transport_failure_classification() {
    let payload = [0u8; 300];

    let mut transport = MockTransport::new()
        .acks(4)
        .fail_write_at(2, TransportError::Closed);
    let err = engine::send(&payload, &mut transport).await.unwrap_err();
    match err {
        BulkwireError::TransferFailed { stage, index, .. } => {
            assert_eq!(stage, Stage::Send);
            assert_eq!(index, 2);
        }
        other => panic!("unexpected error: {:?}", other),
    }

    let mut transport = MockTransport::new()
        .acks(2)
        .fail_read(TransportError::TimedOut);
    let err = engine::send(&payload, &mut transport).await.unwrap_err();
    match err {
        BulkwireError::TransferFailed { stage, index, .. } => {
            assert_eq!(stage, Stage::Receive);
            assert_eq!(index, 2);
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

/// `send` is exactly `frame` plus `transfer`.
#[tokio::test]
async fn test_send_matches_manual_frame_and_transfer() {
    let payload: Vec<u8> = (0..200).map(|i| (i * 7 % 256) as u8).collect();
    let blocks = frame(&payload);

    let mut sent_transport = device_for(blocks.len());
    let sent_digest = engine::send(&payload, &mut sent_transport).await.unwrap();

    let mut manual_transport = device_for(blocks.len());
    let manual_digest = engine::transfer(&blocks, &mut manual_transport)
        .await
        .unwrap();

    assert_eq!(sent_digest, manual_digest);
    assert_eq!(sent_transport.writes(), manual_transport.writes());
}
