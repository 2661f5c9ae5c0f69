use keyconv_codec::CodecError;
use keyconv_crypto::CryptoError;
use keyconv_types::{ArtifactKind, ErrorKind, TypeError};

/// Errors that can occur while converting along the chain.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConvertError {
    #[error(transparent)]
    Type(#[from] TypeError),

    #[error(transparent)]
    Codec(#[from] CodecError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),

    /// The requested output lies behind the input on the chain.
    #[error("impossible conversion from {from} to {to}")]
    ImpossibleConversion { from: ArtifactKind, to: ArtifactKind },

    /// A public key or WIF must be produced but no compression is known.
    #[error(
        "cannot produce {0}: public-key compression is unspecified \
         (use --public-key-compression or set fallback_compression)"
    )]
    UnspecifiedCompression(ArtifactKind),

    /// A single output was requested without naming its format.
    #[error("an output format is required for {0}")]
    MissingOutputFormat(ArtifactKind),

    /// Configuration could not be parsed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl ConvertError {
    /// Stable tag for this error, taken from the wrapped error if any.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Type(e) => e.kind(),
            Self::Codec(e) => e.kind(),
            Self::Crypto(e) => e.kind(),
            Self::ImpossibleConversion { .. } => ErrorKind::ImpossibleConversion,
            Self::UnspecifiedCompression(_) => ErrorKind::UnspecifiedCompression,
            Self::MissingOutputFormat(_) => ErrorKind::InvalidFormat,
            Self::Config(_) => ErrorKind::Configuration,
        }
    }
}

/// Result alias for conversion operations.
pub type ConvertResult<T> = Result<T, ConvertError>;
