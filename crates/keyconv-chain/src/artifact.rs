use std::collections::BTreeMap;

use keyconv_codec::wif;
use keyconv_types::{Address, ArtifactKind, PrivateKey, PublicKey, Ripemd160Digest, Sha256Digest};

use crate::error::ConvertResult;

// ---------------------------------------------------------------------------
// Artifact
// ---------------------------------------------------------------------------

/// A typed value at one link of the chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Artifact {
    PrivateKeyWif(PrivateKey),
    PrivateKey(PrivateKey),
    PublicKey(PublicKey),
    PublicKeySha256(Sha256Digest),
    PublicKeyRipemd160(Ripemd160Digest),
    Address(Address),
}

impl Artifact {
    /// Which chain step this value belongs to.
    pub fn kind(&self) -> ArtifactKind {
        match self {
            Self::PrivateKeyWif(_) => ArtifactKind::PrivateKeyWif,
            Self::PrivateKey(_) => ArtifactKind::PrivateKey,
            Self::PublicKey(_) => ArtifactKind::PublicKey,
            Self::PublicKeySha256(_) => ArtifactKind::PublicKeySha256,
            Self::PublicKeyRipemd160(_) => ArtifactKind::PublicKeyRipemd160,
            Self::Address(_) => ArtifactKind::Address,
        }
    }

    /// The raw bytes an output format encodes.
    ///
    /// WIF yields its payload (`0x80 ∥ key [∥ 0x01]`), so Base58Check
    /// output is the familiar WIF string.
    pub fn to_bytes(&self) -> ConvertResult<Vec<u8>> {
        Ok(match self {
            Self::PrivateKeyWif(key) => wif::encode_payload(key)?,
            Self::PrivateKey(key) => key.as_bytes().to_vec(),
            Self::PublicKey(key) => key.as_bytes().to_vec(),
            Self::PublicKeySha256(digest) => digest.as_bytes().to_vec(),
            Self::PublicKeyRipemd160(digest) => digest.as_bytes().to_vec(),
            Self::Address(address) => address.to_bytes().to_vec(),
        })
    }

    /// The private key behind either private form.
    pub fn private_key(&self) -> Option<&PrivateKey> {
        match self {
            Self::PrivateKeyWif(key) | Self::PrivateKey(key) => Some(key),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// ArtifactSet
// ---------------------------------------------------------------------------

/// Artifacts produced by one conversion, keyed and ordered by kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArtifactSet {
    entries: BTreeMap<ArtifactKind, Artifact>,
}

impl ArtifactSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store an artifact, replacing any previous one of the same kind.
    pub fn insert(&mut self, artifact: Artifact) {
        self.entries.insert(artifact.kind(), artifact);
    }

    pub fn get(&self, kind: ArtifactKind) -> Option<&Artifact> {
        self.entries.get(&kind)
    }

    pub fn contains(&self, kind: ArtifactKind) -> bool {
        self.entries.contains_key(&kind)
    }

    /// Kinds present, in chain order.
    pub fn kinds(&self) -> Vec<ArtifactKind> {
        self.entries.keys().copied().collect()
    }

    /// Artifacts in chain order.
    pub fn iter(&self) -> impl Iterator<Item = &Artifact> {
        self.entries.values()
    }

    /// Keep only the listed kinds.
    pub fn retain(&mut self, kinds: &[ArtifactKind]) {
        self.entries.retain(|kind, _| kinds.contains(kind));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
