use keyconv_crypto::checksum;
use keyconv_types::network::CHECKSUM_SIZE;
use keyconv_types::DataFormat;

use crate::base58::Base58;
use crate::error::{ensure_fits, CodecError, CodecResult};
use crate::format::{CodecLimits, TextCodec};

/// Base58 over `payload ∥ checksum`, where the checksum is the first four
/// bytes of double SHA-256 of the payload.
#[derive(Clone, Copy, Debug, Default)]
pub struct Base58Check {
    limits: CodecLimits,
}

impl Base58Check {
    pub fn new(limits: CodecLimits) -> Self {
        Self { limits }
    }

    /// The inner Base58 codec, sized for the payload plus its checksum.
    fn framed(&self) -> Base58 {
        Base58::new(CodecLimits {
            max_raw_len: self.limits.max_raw_len + CHECKSUM_SIZE,
            ..self.limits
        })
    }
}

impl TextCodec for Base58Check {
    fn format(&self) -> DataFormat {
        DataFormat::Base58Check
    }

    fn encode(&self, payload: &[u8]) -> CodecResult<String> {
        ensure_fits(payload.len(), self.limits.max_raw_len)?;
        let mut framed = Vec::with_capacity(payload.len() + CHECKSUM_SIZE);
        framed.extend_from_slice(payload);
        framed.extend_from_slice(&checksum(payload));
        self.framed().encode(&framed)
    }

    fn decode(&self, text: &str) -> CodecResult<Vec<u8>> {
        let framed = self.framed().decode(text)?;
        let payload = verify_checksum(&framed)?;
        ensure_fits(payload.len(), self.limits.max_raw_len)?;
        Ok(payload.to_vec())
    }
}

/// Split `payload ∥ checksum` and verify the checksum, returning the payload.
pub fn verify_checksum(framed: &[u8]) -> CodecResult<&[u8]> {
    if framed.len() < CHECKSUM_SIZE {
        return Err(CodecError::invalid(
            "base58check",
            format!(
                "{} bytes is too short to carry a {CHECKSUM_SIZE}-byte checksum",
                framed.len()
            ),
        ));
    }
    let (payload, given) = framed.split_at(framed.len() - CHECKSUM_SIZE);
    let expected = checksum(payload);
    if given != expected {
        let mut actual = [0u8; CHECKSUM_SIZE];
        actual.copy_from_slice(given);
        return Err(CodecError::ChecksumMismatch { expected, actual });
    }
    Ok(payload)
}
