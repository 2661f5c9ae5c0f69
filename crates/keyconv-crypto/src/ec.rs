use k256::elliptic_curve::sec1::ToEncodedPoint;
use keyconv_types::{Compression, PrivateKey, PublicKey};

use crate::error::{CryptoError, CryptoResult};

/// Check that a 32-byte big-endian scalar lies in `[1, n-1]`.
pub fn validate_scalar(scalar: &[u8; 32]) -> CryptoResult<k256::SecretKey> {
    k256::SecretKey::from_slice(scalar).map_err(|_| CryptoError::ScalarOutOfRange)
}

/// Compute `Q = d·G` and serialize it in the requested form.
///
/// `compression` is passed explicitly: the caller resolves it from the
/// override, the key's own preference and any configured fallback.
pub fn derive_public_key(key: &PrivateKey, compression: Compression) -> CryptoResult<PublicKey> {
    let secret = validate_scalar(key.as_bytes())?;
    serialize_point(&secret.public_key(), compression)
}

/// Check that a serialized public key decodes to a point on secp256k1.
///
/// Compressed input is decompressed (recovering `y` from the parity bit and
/// the curve equation) as part of the check.
pub fn validate_point(key: &PublicKey) -> CryptoResult<k256::PublicKey> {
    k256::PublicKey::from_sec1_bytes(key.as_bytes())
        .map_err(|_| CryptoError::PointNotOnCurve(key.to_hex()))
}

fn serialize_point(point: &k256::PublicKey, compression: Compression) -> CryptoResult<PublicKey> {
    let encoded = point.to_encoded_point(compression.is_compressed());
    PublicKey::from_slice(encoded.as_bytes())
        .map_err(|_| CryptoError::PointNotOnCurve(hex::encode(encoded.as_bytes())))
}
