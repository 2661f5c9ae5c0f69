//! Turning decoded input bytes into a validated artifact.

use keyconv_codec::{check, wif};
use keyconv_crypto::{validate_point, validate_scalar};
use keyconv_types::network::{WIF_CHECKED_COMPRESSED_SIZE, WIF_CHECKED_UNCOMPRESSED_SIZE};
use keyconv_types::{
    Address, ArtifactKind, PrivateKey, PublicKey, Ripemd160Digest, Sha256Digest, TypeError,
};

use crate::artifact::Artifact;
use crate::config::ConvertConfig;
use crate::error::ConvertResult;

/// Build the artifact `kind` from its raw bytes.
///
/// The length must be one the kind accepts; otherwise the error names any
/// other kinds that would accept it. Private keys must be valid scalars and,
/// unless disabled, public keys must be points on the curve.
pub fn ingest(kind: ArtifactKind, raw: &[u8], config: &ConvertConfig) -> ConvertResult<Artifact> {
    if !kind.accepts_size(raw.len()) {
        return Err(TypeError::size_mismatch(kind, raw.len()).into());
    }
    let artifact = match kind {
        ArtifactKind::PrivateKeyWif => {
            let payload = match raw.len() {
                WIF_CHECKED_UNCOMPRESSED_SIZE | WIF_CHECKED_COMPRESSED_SIZE => {
                    check::verify_checksum(raw)?
                }
                _ => raw,
            };
            let key = wif::decode_payload(payload)?;
            validate_scalar(key.as_bytes())?;
            Artifact::PrivateKeyWif(key)
        }
        ArtifactKind::PrivateKey => {
            let key = PrivateKey::from_slice(raw)?;
            validate_scalar(key.as_bytes())?;
            Artifact::PrivateKey(key)
        }
        ArtifactKind::PublicKey => {
            let key = PublicKey::from_slice(raw)?;
            if config.verify_public_key_points {
                validate_point(&key)?;
            }
            Artifact::PublicKey(key)
        }
        ArtifactKind::PublicKeySha256 => Artifact::PublicKeySha256(Sha256Digest::from_slice(raw)?),
        ArtifactKind::PublicKeyRipemd160 => {
            Artifact::PublicKeyRipemd160(Ripemd160Digest::from_slice(raw)?)
        }
        ArtifactKind::Address => Artifact::Address(Address::from_slice(raw)?),
    };
    tracing::debug!(kind = %kind, size = raw.len(), "ingested input");
    Ok(artifact)
}

#[cfg(test)]
mod tests {
    use super::*;
    use keyconv_types::{Compression, ErrorKind};

    const WIF_CHECKED_HEX: &str =
        "801bd4b0b9d0b23acff9f9de17466bd0893bc24c369522b5191d42af15766a2dfa97cb0dc4";
    const PUBLIC_KEY_HEX: &str = "02278eba3b4b3ff8820493840d09f64a9d6e67b3b3ff918474186871329ee59c5f";

    fn config() -> ConvertConfig {
        ConvertConfig::default()
    }

    #[test]
    fn checked_wif_bytes_are_verified_and_stripped() {
        let raw = hex::decode(WIF_CHECKED_HEX).unwrap();
        let artifact = ingest(ArtifactKind::PrivateKeyWif, &raw, &config()).unwrap();
        let key = artifact.private_key().unwrap();
        assert_eq!(key.compression(), Some(Compression::Uncompressed));
        assert_eq!(key.as_bytes()[..], raw[1..33]);
    }

    #[test]
    fn wif_payload_bytes_are_accepted() {
        let raw = hex::decode(WIF_CHECKED_HEX).unwrap();
        let artifact = ingest(ArtifactKind::PrivateKeyWif, &raw[..33], &config()).unwrap();
        assert_eq!(artifact.kind(), ArtifactKind::PrivateKeyWif);
    }

    #[test]
    fn corrupted_checked_wif_fails_checksum() {
        let mut raw = hex::decode(WIF_CHECKED_HEX).unwrap();
        raw[36] ^= 0xFF;
        let err = ingest(ArtifactKind::PrivateKeyWif, &raw, &config()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ChecksumMismatch);
    }

    #[test]
    fn wif_length_declared_as_private_key_is_hinted() {
        let raw = hex::decode(WIF_CHECKED_HEX).unwrap();
        let err = ingest(ArtifactKind::PrivateKey, &raw, &config()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::SizeMismatch);
        assert!(err.to_string().contains("did you mean input type private-key-wif?"));
    }

    #[test]
    fn zero_private_key_is_invalid() {
        let err = ingest(ArtifactKind::PrivateKey, &[0u8; 32], &config()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidKey);
    }

    #[test]
    fn public_key_point_is_checked() {
        let raw = hex::decode(PUBLIC_KEY_HEX).unwrap();
        assert!(ingest(ArtifactKind::PublicKey, &raw, &config()).is_ok());

        // x = 5 is not on the curve
        let mut off_curve = [0u8; 33];
        off_curve[0] = 0x02;
        off_curve[32] = 5;
        let err = ingest(ArtifactKind::PublicKey, &off_curve, &config()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidKey);

        let lenient = ConvertConfig { verify_public_key_points: false, ..config() };
        assert!(ingest(ArtifactKind::PublicKey, &off_curve, &lenient).is_ok());
    }

    #[test]
    fn public_key_prefix_is_checked() {
        let mut raw = hex::decode(PUBLIC_KEY_HEX).unwrap();
        raw[0] = 0x05;
        let err = ingest(ArtifactKind::PublicKey, &raw, &config()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn digests_and_addresses() {
        assert!(ingest(ArtifactKind::PublicKeySha256, &[1u8; 32], &config()).is_ok());
        assert!(ingest(ArtifactKind::PublicKeyRipemd160, &[1u8; 20], &config()).is_ok());
        assert!(ingest(ArtifactKind::Address, &[0u8; 21], &config()).is_ok());

        let err = ingest(ArtifactKind::PublicKeyRipemd160, &[1u8; 21], &config()).unwrap_err();
        assert!(err.to_string().contains("did you mean input type address?"));
    }
}
