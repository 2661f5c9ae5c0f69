//! Wallet Import Format framing.
//!
//! The payload is `0x80 ∥ scalar`, with a trailing `0x01` when the key's
//! public key is serialized compressed. The familiar `5…`/`K…`/`L…` text
//! form is the Base58Check encoding of that payload.

use keyconv_types::network::{
    PRIVATE_KEY_SIZE, WIF_COMPRESSED_FLAG, WIF_PAYLOAD_COMPRESSED_SIZE,
    WIF_PAYLOAD_UNCOMPRESSED_SIZE, WIF_VERSION,
};
use keyconv_types::{Compression, PrivateKey};

use crate::error::{CodecError, CodecResult};

const CODEC: &str = "wif";

/// Frame a private key as a WIF payload.
///
/// Fails with [`CodecError::MissingCompression`] when the key carries no
/// compression preference, since the trailing flag cannot be chosen.
pub fn encode_payload(key: &PrivateKey) -> CodecResult<Vec<u8>> {
    let compression = key.compression().ok_or(CodecError::MissingCompression)?;
    let mut payload = Vec::with_capacity(WIF_PAYLOAD_COMPRESSED_SIZE);
    payload.push(WIF_VERSION);
    payload.extend_from_slice(key.as_bytes());
    if compression.is_compressed() {
        payload.push(WIF_COMPRESSED_FLAG);
    }
    Ok(payload)
}

/// Unframe a WIF payload, recovering the compression preference.
pub fn decode_payload(payload: &[u8]) -> CodecResult<PrivateKey> {
    let compression = match payload.len() {
        WIF_PAYLOAD_UNCOMPRESSED_SIZE => Compression::Uncompressed,
        WIF_PAYLOAD_COMPRESSED_SIZE => {
            let flag = payload[WIF_PAYLOAD_COMPRESSED_SIZE - 1];
            if flag != WIF_COMPRESSED_FLAG {
                return Err(CodecError::invalid(
                    CODEC,
                    format!("trailing byte 0x{flag:02x} is not the compression flag"),
                ));
            }
            Compression::Compressed
        }
        other => {
            return Err(CodecError::invalid(
                CODEC,
                format!(
                    "payload is {other} bytes, expected {WIF_PAYLOAD_UNCOMPRESSED_SIZE} or {WIF_PAYLOAD_COMPRESSED_SIZE}"
                ),
            ))
        }
    };
    if payload[0] != WIF_VERSION {
        return Err(CodecError::invalid(
            CODEC,
            format!("version byte 0x{:02x} (expected 0x{WIF_VERSION:02x})", payload[0]),
        ));
    }
    let mut scalar = [0u8; PRIVATE_KEY_SIZE];
    scalar.copy_from_slice(&payload[1..1 + PRIVATE_KEY_SIZE]);
    Ok(PrivateKey::new(scalar, Some(compression)))
}
