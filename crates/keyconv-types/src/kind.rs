use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::TypeError;
use crate::network::*;

// ---------------------------------------------------------------------------
// ArtifactKind
// ---------------------------------------------------------------------------

/// One link of the derivation chain.
///
/// Variants are declared in chain order, so the derived `Ord` sorts a set of
/// kinds from the private key down to the address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    /// Base58Check-framed private key (Wallet Import Format).
    PrivateKeyWif,
    /// Raw 32-byte secp256k1 scalar.
    PrivateKey,
    /// SEC1-serialized public key.
    PublicKey,
    /// SHA-256 of the serialized public key.
    PublicKeySha256,
    /// RIPEMD-160 of the SHA-256 digest (HASH160).
    PublicKeyRipemd160,
    /// Version byte followed by the HASH160.
    Address,
}

impl ArtifactKind {
    /// Every kind, in chain order.
    pub const ALL: [ArtifactKind; 6] = [
        ArtifactKind::PrivateKeyWif,
        ArtifactKind::PrivateKey,
        ArtifactKind::PublicKey,
        ArtifactKind::PublicKeySha256,
        ArtifactKind::PublicKeyRipemd160,
        ArtifactKind::Address,
    ];

    /// Canonical external name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::PrivateKeyWif => "private-key-wif",
            Self::PrivateKey => "private-key",
            Self::PublicKey => "public-key",
            Self::PublicKeySha256 => "public-key-sha256",
            Self::PublicKeyRipemd160 => "public-key-ripemd160",
            Self::Address => "address",
        }
    }

    /// Position on the forward chain.
    ///
    /// The private key and its WIF framing share rank 0 because each can be
    /// rebuilt from the other. Every other edge only runs forward.
    pub fn rank(&self) -> u8 {
        match self {
            Self::PrivateKeyWif | Self::PrivateKey => 0,
            Self::PublicKey => 1,
            Self::PublicKeySha256 => 2,
            Self::PublicKeyRipemd160 => 3,
            Self::Address => 4,
        }
    }

    /// Raw byte lengths accepted when this kind is supplied as input.
    pub fn accepted_sizes(&self) -> &'static [usize] {
        match self {
            Self::PrivateKeyWif => &[
                WIF_PAYLOAD_UNCOMPRESSED_SIZE,
                WIF_PAYLOAD_COMPRESSED_SIZE,
                WIF_CHECKED_UNCOMPRESSED_SIZE,
                WIF_CHECKED_COMPRESSED_SIZE,
            ],
            Self::PrivateKey => &[PRIVATE_KEY_SIZE],
            Self::PublicKey => &[PUBLIC_KEY_COMPRESSED_SIZE, PUBLIC_KEY_UNCOMPRESSED_SIZE],
            Self::PublicKeySha256 => &[SHA256_SIZE],
            Self::PublicKeyRipemd160 => &[RIPEMD160_SIZE],
            Self::Address => &[ADDRESS_SIZE],
        }
    }

    /// Whether `len` is an accepted input length for this kind.
    pub fn accepts_size(&self, len: usize) -> bool {
        self.accepted_sizes().contains(&len)
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ArtifactKind {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "private-key-wif" => Ok(Self::PrivateKeyWif),
            "private-key" => Ok(Self::PrivateKey),
            "public-key" => Ok(Self::PublicKey),
            "public-key-sha256" | "public-key-sha" => Ok(Self::PublicKeySha256),
            "public-key-ripemd160" | "public-key-rmd" => Ok(Self::PublicKeyRipemd160),
            "address" => Ok(Self::Address),
            other => Err(TypeError::unknown("artifact type", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// OutputSelection
// ---------------------------------------------------------------------------

/// Which artifacts a conversion should produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OutputSelection {
    /// A single artifact kind.
    One(ArtifactKind),
    /// Every kind reachable forward from the input.
    All,
}

impl fmt::Display for OutputSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(kind) => kind.fmt(f),
            Self::All => f.write_str("all"),
        }
    }
}

impl FromStr for OutputSelection {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "all" {
            return Ok(Self::All);
        }
        s.parse().map(Self::One)
    }
}

impl From<ArtifactKind> for OutputSelection {
    fn from(kind: ArtifactKind) -> Self {
        Self::One(kind)
    }
}

// ---------------------------------------------------------------------------
// DataFormat
// ---------------------------------------------------------------------------

/// External serialization of an artifact's raw bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataFormat {
    Raw,
    Hex,
    Base58,
    Base58Check,
}

impl DataFormat {
    /// The text formats, in the order the full listing renders them.
    pub const TEXT: [DataFormat; 3] = [DataFormat::Hex, DataFormat::Base58, DataFormat::Base58Check];

    /// Canonical external name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Raw => "raw",
            Self::Hex => "hex",
            Self::Base58 => "base58",
            Self::Base58Check => "base58check",
        }
    }

    /// Returns `true` for every format except `raw`.
    pub fn is_text(&self) -> bool {
        !matches!(self, Self::Raw)
    }
}

impl fmt::Display for DataFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DataFormat {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(Self::Raw),
            "hex" => Ok(Self::Hex),
            "base58" => Ok(Self::Base58),
            "base58check" => Ok(Self::Base58Check),
            other => Err(TypeError::unknown("data format", other)),
        }
    }
}

// ---------------------------------------------------------------------------
// Compression
// ---------------------------------------------------------------------------

/// Serialization form of a public key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    /// 33 bytes: parity prefix and `x`.
    Compressed,
    /// 65 bytes: `0x04`, `x` and `y`.
    Uncompressed,
}

impl Compression {
    /// Canonical external name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Compressed => "compressed",
            Self::Uncompressed => "uncompressed",
        }
    }

    /// `true` for the 33-byte form.
    pub fn is_compressed(&self) -> bool {
        matches!(self, Self::Compressed)
    }

    /// Serialized public key length for this form.
    pub fn public_key_size(&self) -> usize {
        match self {
            Self::Compressed => PUBLIC_KEY_COMPRESSED_SIZE,
            Self::Uncompressed => PUBLIC_KEY_UNCOMPRESSED_SIZE,
        }
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Compression {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compressed" => Ok(Self::Compressed),
            "uncompressed" => Ok(Self::Uncompressed),
            other => Err(TypeError::unknown("compression", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip_through_from_str() {
        for kind in ArtifactKind::ALL {
            assert_eq!(kind.name().parse::<ArtifactKind>().unwrap(), kind);
        }
        for format in [DataFormat::Raw, DataFormat::Hex, DataFormat::Base58, DataFormat::Base58Check] {
            assert_eq!(format.name().parse::<DataFormat>().unwrap(), format);
        }
    }

    #[test]
    fn short_aliases_are_accepted() {
        assert_eq!("public-key-sha".parse::<ArtifactKind>().unwrap(), ArtifactKind::PublicKeySha256);
        assert_eq!("public-key-rmd".parse::<ArtifactKind>().unwrap(), ArtifactKind::PublicKeyRipemd160);
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = "wallet".parse::<ArtifactKind>().unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::InvalidFormat);
        assert!(err.to_string().contains("wallet"));
    }

    #[test]
    fn output_selection_parses_all() {
        assert_eq!("all".parse::<OutputSelection>().unwrap(), OutputSelection::All);
        assert_eq!(
            "address".parse::<OutputSelection>().unwrap(),
            OutputSelection::One(ArtifactKind::Address)
        );
    }

    #[test]
    fn ord_follows_chain_order() {
        let mut kinds = vec![ArtifactKind::Address, ArtifactKind::PrivateKey, ArtifactKind::PublicKey];
        kinds.sort();
        assert_eq!(kinds, vec![ArtifactKind::PrivateKey, ArtifactKind::PublicKey, ArtifactKind::Address]);
    }

    #[test]
    fn private_forms_share_a_rank() {
        assert_eq!(ArtifactKind::PrivateKey.rank(), ArtifactKind::PrivateKeyWif.rank());
        assert!(ArtifactKind::PublicKey.rank() < ArtifactKind::Address.rank());
    }

    #[test]
    fn wif_accepts_payload_and_checked_lengths() {
        for len in [33, 34, 37, 38] {
            assert!(ArtifactKind::PrivateKeyWif.accepts_size(len));
        }
        assert!(!ArtifactKind::PrivateKeyWif.accepts_size(32));
    }

    #[test]
    fn serde_uses_external_names() {
        let json = serde_json::to_string(&ArtifactKind::PublicKeyRipemd160).unwrap();
        assert_eq!(json, "\"public-key-ripemd160\"");
        let parsed: Compression = serde_json::from_str("\"uncompressed\"").unwrap();
        assert_eq!(parsed, Compression::Uncompressed);
    }
}
