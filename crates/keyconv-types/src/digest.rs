use std::fmt;

use crate::error::TypeError;
use crate::kind::ArtifactKind;
use crate::network::{RIPEMD160_SIZE, SHA256_SIZE};

/// SHA-256 of a serialized public key.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Sha256Digest([u8; SHA256_SIZE]);

impl Sha256Digest {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, TypeError> {
        bytes
            .try_into()
            .map(Self)
            .map_err(|_| TypeError::size_mismatch(ArtifactKind::PublicKeySha256, bytes.len()))
    }

    pub fn as_bytes(&self) -> &[u8; SHA256_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; SHA256_SIZE]> for Sha256Digest {
    fn from(bytes: [u8; SHA256_SIZE]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Sha256Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Sha256Digest({})", self.to_hex())
    }
}

impl fmt::Display for Sha256Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// RIPEMD-160 of a SHA-256 digest, a.k.a. HASH160.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ripemd160Digest([u8; RIPEMD160_SIZE]);

impl Ripemd160Digest {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, TypeError> {
        bytes
            .try_into()
            .map(Self)
            .map_err(|_| TypeError::size_mismatch(ArtifactKind::PublicKeyRipemd160, bytes.len()))
    }

    pub fn as_bytes(&self) -> &[u8; RIPEMD160_SIZE] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl From<[u8; RIPEMD160_SIZE]> for Ripemd160Digest {
    fn from(bytes: [u8; RIPEMD160_SIZE]) -> Self {
        Self(bytes)
    }
}

impl fmt::Debug for Ripemd160Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ripemd160Digest({})", self.to_hex())
    }
}

impl fmt::Display for Ripemd160Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
