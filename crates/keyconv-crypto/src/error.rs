use keyconv_types::ErrorKind;

/// Errors from elliptic-curve operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CryptoError {
    /// The scalar is zero or not below the secp256k1 group order.
    #[error("invalid private key: scalar must be in [1, n-1]")]
    ScalarOutOfRange,

    /// The serialized point does not lie on secp256k1.
    #[error("invalid public key: {0} is not a point on secp256k1")]
    PointNotOnCurve(String),
}

impl CryptoError {
    /// Stable tag; every curve failure is an invalid key.
    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidKey
    }
}

/// Result alias for crypto operations.
pub type CryptoResult<T> = Result<T, CryptoError>;
