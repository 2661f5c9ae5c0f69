use keyconv_crypto::{derive_public_key, ripemd160, sha256};
use keyconv_types::{Address, ArtifactKind, Compression, OutputSelection, PrivateKey};

use crate::artifact::{Artifact, ArtifactSet};
use crate::chain;
use crate::config::ConvertConfig;
use crate::error::{ConvertError, ConvertResult};

// ---------------------------------------------------------------------------
// ConversionEngine
// ---------------------------------------------------------------------------

/// Walks the chain forward from an input artifact.
///
/// Every stage is derived at most once per call and stored in the returned
/// [`ArtifactSet`]; later stages read from earlier ones.
pub struct ConversionEngine {
    config: ConvertConfig,
}

impl ConversionEngine {
    pub fn new(config: ConvertConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ConvertConfig {
        &self.config
    }

    /// Derive the selected artifacts from `input`.
    ///
    /// `compression` is the caller's explicit override. It replaces the
    /// preference carried by the private key before anything is derived
    /// from it. A WIF input requested back on its own is kept as it was; in
    /// an `all` listing it is re-framed so every entry agrees.
    ///
    /// The returned set holds exactly the selected kinds.
    pub fn derive(
        &self,
        input: Artifact,
        selection: OutputSelection,
        compression: Option<Compression>,
    ) -> ConvertResult<ArtifactSet> {
        let from = input.kind();
        let targets = match selection {
            OutputSelection::One(to) => {
                if !chain::is_reachable(from, to) {
                    return Err(ConvertError::ImpossibleConversion { from, to });
                }
                vec![to]
            }
            OutputSelection::All => chain::reachable_from(from),
        };

        let mut set = ArtifactSet::new();
        set.insert(match (input, compression, selection) {
            (Artifact::PrivateKey(key), Some(c), _) => Artifact::PrivateKey(key.with_compression(c)),
            (Artifact::PrivateKeyWif(key), Some(c), OutputSelection::All) => {
                Artifact::PrivateKeyWif(key.with_compression(c))
            }
            (other, _, _) => other,
        });

        for &to in &targets {
            let steps = chain::path(from, to)?;
            for pair in steps.windows(2) {
                let (prev, next) = (pair[0], pair[1]);
                if set.contains(next) {
                    continue;
                }
                let source = set
                    .get(prev)
                    .ok_or(ConvertError::ImpossibleConversion { from, to: next })?;
                let derived = self.step(source, next, compression)?;
                set.insert(derived);
            }
        }

        set.retain(&targets);
        tracing::info!(
            from = %from,
            selection = %selection,
            produced = set.len(),
            "conversion complete"
        );
        Ok(set)
    }

    /// One edge of the chain.
    fn step(
        &self,
        source: &Artifact,
        to: ArtifactKind,
        compression: Option<Compression>,
    ) -> ConvertResult<Artifact> {
        let derived = match (source, to) {
            (Artifact::PrivateKeyWif(key), ArtifactKind::PrivateKey) => {
                let key = match compression {
                    Some(c) => key.with_compression(c),
                    None => key.clone(),
                };
                Artifact::PrivateKey(key)
            }
            (Artifact::PrivateKey(key), ArtifactKind::PrivateKeyWif) => {
                let resolved = self.resolve_compression(key, compression, to)?;
                Artifact::PrivateKeyWif(key.with_compression(resolved))
            }
            (Artifact::PrivateKey(key), ArtifactKind::PublicKey) => {
                let resolved = self.resolve_compression(key, compression, to)?;
                Artifact::PublicKey(derive_public_key(key, resolved)?)
            }
            (Artifact::PublicKey(key), ArtifactKind::PublicKeySha256) => {
                Artifact::PublicKeySha256(sha256(key.as_bytes()))
            }
            (Artifact::PublicKeySha256(digest), ArtifactKind::PublicKeyRipemd160) => {
                Artifact::PublicKeyRipemd160(ripemd160(digest.as_bytes()))
            }
            (Artifact::PublicKeyRipemd160(hash), ArtifactKind::Address) => {
                Artifact::Address(Address::from_hash(*hash))
            }
            (source, to) => {
                return Err(ConvertError::ImpossibleConversion { from: source.kind(), to })
            }
        };
        tracing::debug!(from = %source.kind(), to = %to, "derived");
        Ok(derived)
    }

    /// Override, then the key's own preference, then the configured fallback.
    fn resolve_compression(
        &self,
        key: &PrivateKey,
        compression: Option<Compression>,
        producing: ArtifactKind,
    ) -> ConvertResult<Compression> {
        compression
            .or(key.compression())
            .or(self.config.fallback_compression)
            .ok_or(ConvertError::UnspecifiedCompression(producing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyconv_types::{ErrorKind, PublicKey, Ripemd160Digest};

    const KEY_HEX: &str = "1bd4b0b9d0b23acff9f9de17466bd0893bc24c369522b5191d42af15766a2dfa";

    fn engine() -> ConversionEngine {
        ConversionEngine::new(ConvertConfig::default())
    }

    fn key(compression: Option<Compression>) -> PrivateKey {
        PrivateKey::new(hex::decode(KEY_HEX).unwrap().try_into().unwrap(), compression)
    }

    fn address_hex(set: &ArtifactSet) -> String {
        hex::encode(set.get(ArtifactKind::Address).unwrap().to_bytes().unwrap())
    }

    #[test]
    fn private_key_to_address() {
        let set = engine()
            .derive(
                Artifact::PrivateKey(key(Some(Compression::Uncompressed))),
                ArtifactKind::Address.into(),
                None,
            )
            .unwrap();
        assert_eq!(set.kinds(), vec![ArtifactKind::Address]);
        assert_eq!(address_hex(&set), "000b5b86296c6b1ef45afe895c71eaeb20880beca4");
    }

    #[test]
    fn override_beats_key_preference() {
        let set = engine()
            .derive(
                Artifact::PrivateKeyWif(key(Some(Compression::Uncompressed))),
                ArtifactKind::PublicKey.into(),
                Some(Compression::Compressed),
            )
            .unwrap();
        match set.get(ArtifactKind::PublicKey) {
            Some(Artifact::PublicKey(pk)) => assert_eq!(pk.compression(), Compression::Compressed),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn unspecified_compression_fails_without_fallback() {
        let err = engine()
            .derive(Artifact::PrivateKey(key(None)), ArtifactKind::PublicKey.into(), None)
            .unwrap_err();
        assert_eq!(err, ConvertError::UnspecifiedCompression(ArtifactKind::PublicKey));
        assert_eq!(err.kind(), ErrorKind::UnspecifiedCompression);
    }

    #[test]
    fn fallback_applies_last() {
        let engine = ConversionEngine::new(ConvertConfig {
            fallback_compression: Some(Compression::Compressed),
            ..Default::default()
        });
        let set = engine
            .derive(Artifact::PrivateKey(key(None)), ArtifactKind::Address.into(), None)
            .unwrap();
        assert_eq!(address_hex(&set), "000f10dd1b03c50a6ed61aa236accc47bd8d8fd68f");

        // the key's own preference wins over the fallback
        let set = engine
            .derive(
                Artifact::PrivateKey(key(Some(Compression::Uncompressed))),
                ArtifactKind::Address.into(),
                None,
            )
            .unwrap();
        assert_eq!(address_hex(&set), "000b5b86296c6b1ef45afe895c71eaeb20880beca4");
    }

    #[test]
    fn wif_input_is_returned_unchanged() {
        let input = key(Some(Compression::Uncompressed));
        let set = engine()
            .derive(
                Artifact::PrivateKeyWif(input.clone()),
                ArtifactKind::PrivateKeyWif.into(),
                Some(Compression::Compressed),
            )
            .unwrap();
        assert_eq!(set.get(ArtifactKind::PrivateKeyWif), Some(&Artifact::PrivateKeyWif(input)));
    }

    #[test]
    fn all_listing_reframes_wif_with_override() {
        let set = engine()
            .derive(
                Artifact::PrivateKeyWif(key(Some(Compression::Uncompressed))),
                OutputSelection::All,
                Some(Compression::Compressed),
            )
            .unwrap();
        let wif = set.get(ArtifactKind::PrivateKeyWif).unwrap().private_key().unwrap();
        assert_eq!(wif.compression(), Some(Compression::Compressed));
        match set.get(ArtifactKind::PublicKey) {
            Some(Artifact::PublicKey(pk)) => assert_eq!(pk.compression(), Compression::Compressed),
            other => panic!("unexpected: {other:?}"),
        }
        assert_eq!(address_hex(&set), "000f10dd1b03c50a6ed61aa236accc47bd8d8fd68f");
    }

    #[test]
    fn backward_request_is_impossible() {
        let hash = Artifact::PublicKeyRipemd160(Ripemd160Digest::from([0u8; 20]));
        let err = engine()
            .derive(hash, ArtifactKind::PublicKey.into(), None)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ImpossibleConversion);
    }

    #[test]
    fn all_from_public_key_excludes_private_forms() {
        let pk = PublicKey::from_slice(
            &hex::decode("02278eba3b4b3ff8820493840d09f64a9d6e67b3b3ff918474186871329ee59c5f")
                .unwrap(),
        )
        .unwrap();
        let set = engine().derive(Artifact::PublicKey(pk), OutputSelection::All, None).unwrap();
        assert_eq!(
            set.kinds(),
            vec![
                ArtifactKind::PublicKey,
                ArtifactKind::PublicKeySha256,
                ArtifactKind::PublicKeyRipemd160,
                ArtifactKind::Address,
            ]
        );
        assert_eq!(address_hex(&set), "000f10dd1b03c50a6ed61aa236accc47bd8d8fd68f");
    }

    #[test]
    fn all_from_private_key_includes_wif() {
        let set = engine()
            .derive(
                Artifact::PrivateKey(key(None)),
                OutputSelection::All,
                Some(Compression::Compressed),
            )
            .unwrap();
        assert_eq!(set.kinds(), ArtifactKind::ALL.to_vec());
        let wif = set.get(ArtifactKind::PrivateKeyWif).unwrap().to_bytes().unwrap();
        assert_eq!(wif.len(), 34);
    }
}
