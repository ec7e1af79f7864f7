//! Error types for bulkwire.

use std::fmt;

use thiserror::Error;

/// The half of a block exchange that was in flight when a transport
/// failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Writing a block to the OUT endpoint.
    Send,
    /// Reading the block's response from the IN endpoint.
    Receive,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Stage::Send => f.write_str("send"),
            Stage::Receive => f.write_str("receive"),
        }
    }
}

/// Transport-level failure, opaque to the transfer engine.
///
/// The engine treats every variant the same way: the transfer aborts
/// and the failure is reported with its stage and block index.
#[derive(Debug, Error)]
pub enum TransportError {
    /// I/O error from the underlying device handle.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A USB transfer completed with an error status.
    #[error("USB transfer error: {0}")]
    Transfer(#[from] nusb::transfer::TransferError),

    /// The operation did not finish within the transport's timeout.
    #[error("operation timed out")]
    TimedOut,

    /// The transport can no longer exchange data.
    #[error("transport closed")]
    Closed,
}

/// Main error type for all bulkwire operations.
#[derive(Debug, Error)]
pub enum BulkwireError {
    /// The transport failed while a block exchange was in flight.
    #[error("{stage} failed at block {index}: {source}")]
    TransferFailed {
        /// Which half of the exchange failed.
        stage: Stage,
        /// Zero-based index of the block being exchanged.
        index: usize,
        /// The transport's own failure.
        #[source]
        source: TransportError,
    },

    /// The device answered a block with bytes that violate the
    /// ack/digest contract. `message` is the response decoded one
    /// character per byte.
    #[error("device reported an error at block {index}: {message}")]
    DeviceReportedError {
        /// Zero-based index of the block the device rejected.
        index: usize,
        /// The response payload, decoded one character per byte.
        message: String,
    },

    /// The device answered the final block with zero bytes instead of
    /// a digest.
    #[error("device expected more data than the header announced")]
    IncompleteHandshake,

    /// Transport failure outside a block exchange.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// Host-side misuse of the protocol machinery.
    #[error("protocol error: {0}")]
    Protocol(String),
}

/// Result type alias using BulkwireError.
pub type Result<T> = std::result::Result<T, BulkwireError>;
