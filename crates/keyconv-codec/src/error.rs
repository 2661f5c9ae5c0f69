use keyconv_types::network::CHECKSUM_SIZE;
use keyconv_types::ErrorKind;

/// Errors from encode/decode operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CodecError {
    /// Malformed input text or framing.
    #[error("invalid {codec} input: {reason}")]
    InvalidFormat { codec: &'static str, reason: String },

    /// Base58Check checksum does not match the payload.
    #[error(
        "checksum mismatch: expected {}, found {}",
        hex::encode(.expected),
        hex::encode(.actual)
    )]
    ChecksumMismatch {
        expected: [u8; CHECKSUM_SIZE],
        actual: [u8; CHECKSUM_SIZE],
    },

    /// The result does not fit the configured bound.
    #[error("buffer too small: need {needed} bytes, capacity is {capacity}")]
    BufferTooSmall { needed: usize, capacity: usize },

    /// WIF framing needs to know whether the public key is compressed.
    #[error("cannot frame a WIF private key without a compression preference")]
    MissingCompression,
}

impl CodecError {
    pub fn invalid(codec: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            codec,
            reason: reason.into(),
        }
    }

    /// Stable tag for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            Self::ChecksumMismatch { .. } => ErrorKind::ChecksumMismatch,
            Self::BufferTooSmall { .. } => ErrorKind::BufferTooSmall,
            Self::MissingCompression => ErrorKind::UnspecifiedCompression,
        }
    }
}

/// Result alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Fail with `BufferTooSmall` when `needed` exceeds `capacity`.
pub(crate) fn ensure_fits(needed: usize, capacity: usize) -> CodecResult<()> {
    if needed > capacity {
        return Err(CodecError::BufferTooSmall { needed, capacity });
    }
    Ok(())
}
