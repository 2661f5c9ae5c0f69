use std::fmt;

use crate::error::TypeError;
use crate::kind::{ArtifactKind, Compression};
use crate::network::*;

// ---------------------------------------------------------------------------
// PrivateKey
// ---------------------------------------------------------------------------

/// A secp256k1 private key: a 32-byte big-endian scalar plus the preferred
/// serialization of its public key.
///
/// The scalar is not range-checked here; derivation rejects zero and values
/// at or above the curve order.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey {
    scalar: [u8; PRIVATE_KEY_SIZE],
    compression: Option<Compression>,
}

impl PrivateKey {
    pub fn new(scalar: [u8; PRIVATE_KEY_SIZE], compression: Option<Compression>) -> Self {
        Self { scalar, compression }
    }

    /// Build from exactly 32 raw bytes. Compression is left unspecified.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, TypeError> {
        let scalar: [u8; PRIVATE_KEY_SIZE] = bytes
            .try_into()
            .map_err(|_| TypeError::size_mismatch(ArtifactKind::PrivateKey, bytes.len()))?;
        Ok(Self::new(scalar, None))
    }

    /// The raw scalar bytes.
    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_SIZE] {
        &self.scalar
    }

    /// The public-key compression preference, `None` when unspecified.
    pub fn compression(&self) -> Option<Compression> {
        self.compression
    }

    /// A copy of this key carrying a different compression preference.
    pub fn with_compression(&self, compression: Compression) -> Self {
        Self::new(self.scalar, Some(compression))
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey(<redacted>, {:?})", self.compression)
    }
}

// ---------------------------------------------------------------------------
// PublicKey
// ---------------------------------------------------------------------------

/// A SEC1-serialized secp256k1 public key.
///
/// The variant fixes the length, so the stored bytes and the compression
/// flag can never disagree.
#[derive(Clone, PartialEq, Eq, Hash)]
pub enum PublicKey {
    /// `0x02 | 0x03` followed by `x`.
    Compressed([u8; PUBLIC_KEY_COMPRESSED_SIZE]),
    /// `0x04` followed by `x` and `y`.
    Uncompressed([u8; PUBLIC_KEY_UNCOMPRESSED_SIZE]),
}

impl PublicKey {
    /// Build from a serialized point, checking length and prefix byte.
    ///
    /// Curve membership is not checked here.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, TypeError> {
        let prefix = bytes.first().copied();
        match bytes.len() {
            PUBLIC_KEY_COMPRESSED_SIZE => {
                if !matches!(prefix, Some(POINT_EVEN_PREFIX | POINT_ODD_PREFIX)) {
                    return Err(TypeError::InvalidPrefix {
                        kind: ArtifactKind::PublicKey,
                        prefix: prefix.unwrap_or_default(),
                    });
                }
                let mut data = [0u8; PUBLIC_KEY_COMPRESSED_SIZE];
                data.copy_from_slice(bytes);
                Ok(Self::Compressed(data))
            }
            PUBLIC_KEY_UNCOMPRESSED_SIZE => {
                if prefix != Some(POINT_UNCOMPRESSED_PREFIX) {
                    return Err(TypeError::InvalidPrefix {
                        kind: ArtifactKind::PublicKey,
                        prefix: prefix.unwrap_or_default(),
                    });
                }
                let mut data = [0u8; PUBLIC_KEY_UNCOMPRESSED_SIZE];
                data.copy_from_slice(bytes);
                Ok(Self::Uncompressed(data))
            }
            other => Err(TypeError::size_mismatch(ArtifactKind::PublicKey, other)),
        }
    }

    /// The serialized point exactly as stored.
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Compressed(data) => data,
            Self::Uncompressed(data) => data,
        }
    }

    /// The serialization form, fixed by the variant.
    pub fn compression(&self) -> Compression {
        match self {
            Self::Compressed(_) => Compression::Compressed,
            Self::Uncompressed(_) => Compression::Uncompressed,
        }
    }

    /// Serialized length: 33 or 65.
    pub fn len(&self) -> usize {
        self.compression().public_key_size()
    }

    /// Always `false`; present for symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Lower-case hex of the serialized point.
    pub fn to_hex(&self) -> String {
        hex::encode(self.as_bytes())
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", self.to_hex())
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
