use std::fmt;

use crate::digest::Ripemd160Digest;
use crate::error::TypeError;
use crate::kind::ArtifactKind;
use crate::network::{ADDRESS_SIZE, ADDRESS_VERSION_PUBKEY_HASH, ADDRESS_VERSION_SIZE};

/// A pay-to-pubkey-hash address: version byte followed by HASH160.
///
/// Only the mainnet pubkey-hash version is supported.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address {
    hash: Ripemd160Digest,
}

impl Address {
    /// Prepend the pubkey-hash version byte to a HASH160.
    pub fn from_hash(hash: Ripemd160Digest) -> Self {
        Self { hash }
    }

    /// Parse the 21-byte binary form.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, TypeError> {
        if bytes.len() != ADDRESS_SIZE {
            return Err(TypeError::size_mismatch(ArtifactKind::Address, bytes.len()));
        }
        if bytes[0] != ADDRESS_VERSION_PUBKEY_HASH {
            return Err(TypeError::UnsupportedVersion {
                kind: ArtifactKind::Address,
                expected: ADDRESS_VERSION_PUBKEY_HASH,
                actual: bytes[0],
            });
        }
        let hash = Ripemd160Digest::from_slice(&bytes[ADDRESS_VERSION_SIZE..])?;
        Ok(Self { hash })
    }

    pub fn version(&self) -> u8 {
        ADDRESS_VERSION_PUBKEY_HASH
    }

    /// The HASH160 of the public key.
    pub fn hash(&self) -> &Ripemd160Digest {
        &self.hash
    }

    /// The 21-byte binary form.
    pub fn to_bytes(&self) -> [u8; ADDRESS_SIZE] {
        let mut out = [0u8; ADDRESS_SIZE];
        out[0] = self.version();
        out[ADDRESS_VERSION_SIZE..].copy_from_slice(self.hash.as_bytes());
        out
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", hex::encode(self.to_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ErrorKind;

    #[test]
    fn from_hash_prepends_version() {
        let address = Address::from_hash(Ripemd160Digest::from([0x11; 20]));
        let bytes = address.to_bytes();
        assert_eq!(bytes[0], 0x00);
        assert_eq!(&bytes[1..], &[0x11; 20]);
    }

    #[test]
    fn binary_form_roundtrips() {
        let address = Address::from_hash(Ripemd160Digest::from([0x42; 20]));
        let parsed = Address::from_slice(&address.to_bytes()).unwrap();
        assert_eq!(parsed, address);
    }

    #[test]
    fn script_hash_version_is_rejected() {
        let mut bytes = [0u8; 21];
        bytes[0] = 0x05;
        let err = Address::from_slice(&bytes).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
        assert!(err.to_string().contains("0x05"));
    }

    #[test]
    fn wrong_length_is_size_mismatch() {
        let err = Address::from_slice(&[0u8; 20]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SizeMismatch);
    }
}
