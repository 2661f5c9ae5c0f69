use keyconv_types::DataFormat;

use crate::error::{ensure_fits, CodecError, CodecResult};
use crate::format::{CodecLimits, TextCodec};

/// Base58 codec over the Bitcoin alphabet.
///
/// The text is a big-endian base-58 number; each leading `1` stands for one
/// leading zero byte, so zero prefixes survive the round trip.
#[derive(Clone, Copy, Debug, Default)]
pub struct Base58 {
    limits: CodecLimits,
}

impl Base58 {
    pub fn new(limits: CodecLimits) -> Self {
        Self { limits }
    }
}

impl TextCodec for Base58 {
    fn format(&self) -> DataFormat {
        DataFormat::Base58
    }

    fn encode(&self, data: &[u8]) -> CodecResult<String> {
        ensure_fits(data.len(), self.limits.max_raw_len)?;
        let text = bs58::encode(data)
            .with_alphabet(bs58::Alphabet::BITCOIN)
            .into_string();
        ensure_fits(text.len(), self.limits.max_text_len)?;
        Ok(text)
    }

    fn decode(&self, text: &str) -> CodecResult<Vec<u8>> {
        ensure_fits(text.len(), self.limits.max_text_len)?;
        let raw = bs58::decode(text)
            .with_alphabet(bs58::Alphabet::BITCOIN)
            .into_vec()
            .map_err(|e| match e {
                bs58::decode::Error::InvalidCharacter { character, index } => CodecError::invalid(
                    "base58",
                    format!("character {character:?} at position {index} is not in the alphabet"),
                ),
                bs58::decode::Error::NonAsciiCharacter { index } => CodecError::invalid(
                    "base58",
                    format!("non-ASCII character at position {index}"),
                ),
                other => CodecError::invalid("base58", other.to_string()),
            })?;
        ensure_fits(raw.len(), self.limits.max_raw_len)?;
        Ok(raw)
    }
}
