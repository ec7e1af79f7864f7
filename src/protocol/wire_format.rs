//! Wire format encoding and decoding.
//!
//! A transfer announces its payload with a 4-byte header:
//! ```text
//! ┌────────────┬──────────────┐
//! │ Length     │ Payload      │
//! │ 4 bytes    │ length bytes │
//! │ uint32 LE  │              │
//! └────────────┴──────────────┘
//! ```
//! Header and payload form one contiguous stream that is cut into
//! blocks of at most [`MAX_BLOCK_SIZE`] bytes for transmission.
//!
//! All multi-byte integers are Little Endian.

/// Maximum block size in bytes (fixed, exactly 64).
pub const MAX_BLOCK_SIZE: usize = 64;

/// Header size in bytes (fixed, exactly 4).
pub const HEADER_SIZE: usize = 4;

/// Digest size in bytes (fixed, exactly 32).
pub const DIGEST_SIZE: usize = 32;

/// Transfer header announcing the payload length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Payload length in bytes.
    pub payload_length: u32,
}

impl Header {
    /// Create a new header.
    pub fn new(payload_length: u32) -> Self {
        Self { payload_length }
    }

    /// Encode header to bytes (Little Endian).
    ///
    /// # Example
    ///
    /// ```
    /// use bulkwire::protocol::Header;
    ///
    /// let header = Header::new(300);
    /// assert_eq!(header.encode(), [0x2C, 0x01, 0x00, 0x00]);
    /// ```
    pub fn encode(&self) -> [u8; HEADER_SIZE] {
        self.payload_length.to_le_bytes()
    }

    /// Encode header into an existing buffer.
    ///
    /// # Panics
    ///
    /// Panics if buffer is smaller than `HEADER_SIZE` (4 bytes).
    pub fn encode_into(&self, buf: &mut [u8]) {
        debug_assert!(buf.len() >= HEADER_SIZE);
        buf[0..HEADER_SIZE].copy_from_slice(&self.encode());
    }

    /// Decode header from bytes (Little Endian).
    ///
    /// Returns `None` if buffer is too short.
    ///
    /// # Example
    ///
    /// ```
    /// use bulkwire::protocol::Header;
    ///
    /// let header = Header::decode(&[0x2C, 0x01, 0x00, 0x00]).unwrap();
    /// assert_eq!(header.payload_length, 300);
    /// ```
    pub fn decode(buf: &[u8]) -> Option<Self> {
        if buf.len() < HEADER_SIZE {
            return None;
        }
        Some(Self {
            payload_length: u32::from_le_bytes([buf[0], buf[1], buf[2], buf[3]]),
        })
    }
}

/// Integrity digest the device returns for a completed transfer.
///
/// Opaque to the host. Rendered as lowercase hex via `Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    /// Build a digest from a response of exactly [`DIGEST_SIZE`] bytes.
    ///
    /// Returns `None` for any other length.
    pub fn from_slice(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != DIGEST_SIZE {
            return None;
        }
        let mut digest = [0u8; DIGEST_SIZE];
        digest.copy_from_slice(bytes);
        Some(Self(digest))
    }

    /// Get the raw digest bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }
}

impl From<[u8; DIGEST_SIZE]> for Digest {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl std::fmt::Display for Digest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

/// Decode a device response as text, one character per byte.
///
/// Device messages are raw bytes, not UTF-8; every byte maps to the
/// character with the same number.
///
/// # Example
///
/// ```
/// use bulkwire::protocol::response_text;
///
/// assert_eq!(response_text(b"Flash write failed"), "Flash write failed");
/// ```
pub fn response_text(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
