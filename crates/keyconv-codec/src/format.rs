use keyconv_types::DataFormat;
use serde::{Deserialize, Serialize};

use crate::base16::Hex;
use crate::base58::Base58;
use crate::check::Base58Check;
use crate::error::{ensure_fits, CodecError, CodecResult};

// ---------------------------------------------------------------------------
// CodecLimits
// ---------------------------------------------------------------------------

/// Upper bounds on decoded bytes and encoded text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecLimits {
    /// Largest raw byte string a decode may produce or an encode may accept.
    pub max_raw_len: usize,
    /// Largest text an encode may produce or a decode may accept.
    pub max_text_len: usize,
}

impl Default for CodecLimits {
    fn default() -> Self {
        Self {
            max_raw_len: 256,
            max_text_len: 512,
        }
    }
}

// ---------------------------------------------------------------------------
// TextCodec trait
// ---------------------------------------------------------------------------

/// A reversible mapping between raw bytes and printable text.
///
/// The trait is object-safe so the format adapter can hand out a
/// `Box<dyn TextCodec>` for whichever format a request names.
pub trait TextCodec: Send + Sync {
    /// The external format this codec implements.
    fn format(&self) -> DataFormat;

    /// Encode raw bytes as text.
    fn encode(&self, data: &[u8]) -> CodecResult<String>;

    /// Decode text back to raw bytes.
    fn decode(&self, text: &str) -> CodecResult<Vec<u8>>;
}

/// The codec for a text format, or `None` for [`DataFormat::Raw`].
pub fn codec_for(format: DataFormat, limits: CodecLimits) -> Option<Box<dyn TextCodec>> {
    match format {
        DataFormat::Raw => None,
        DataFormat::Hex => Some(Box::new(Hex::new(limits))),
        DataFormat::Base58 => Some(Box::new(Base58::new(limits))),
        DataFormat::Base58Check => Some(Box::new(Base58Check::new(limits))),
    }
}

/// Turn externally supplied input into raw bytes.
///
/// Raw input is copied as-is; text formats must be valid UTF-8.
pub fn decode_input(format: DataFormat, input: &[u8], limits: CodecLimits) -> CodecResult<Vec<u8>> {
    let Some(codec) = codec_for(format, limits) else {
        ensure_fits(input.len(), limits.max_raw_len)?;
        return Ok(input.to_vec());
    };
    let text = std::str::from_utf8(input)
        .map_err(|e| CodecError::invalid(format.name(), format!("input is not text: {e}")))?;
    let raw = codec.decode(text)?;
    tracing::debug!(format = %format, text_len = text.len(), raw_len = raw.len(), "decoded input");
    Ok(raw)
}

/// Turn raw artifact bytes into the requested output representation.
///
/// Text formats yield ASCII; raw output is the bytes themselves.
pub fn encode_output(format: DataFormat, data: &[u8], limits: CodecLimits) -> CodecResult<Vec<u8>> {
    match codec_for(format, limits) {
        None => {
            ensure_fits(data.len(), limits.max_raw_len)?;
            Ok(data.to_vec())
        }
        Some(codec) => codec.encode(data).map(String::into_bytes),
    }
}
