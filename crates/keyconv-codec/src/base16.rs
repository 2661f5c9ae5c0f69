use keyconv_types::DataFormat;

use crate::error::{ensure_fits, CodecError, CodecResult};
use crate::format::{CodecLimits, TextCodec};

/// Hexadecimal codec: two lower-case digits per byte.
#[derive(Clone, Copy, Debug, Default)]
pub struct Hex {
    limits: CodecLimits,
}

impl Hex {
    pub fn new(limits: CodecLimits) -> Self {
        Self { limits }
    }
}

impl TextCodec for Hex {
    fn format(&self) -> DataFormat {
        DataFormat::Hex
    }

    fn encode(&self, data: &[u8]) -> CodecResult<String> {
        ensure_fits(data.len(), self.limits.max_raw_len)?;
        ensure_fits(data.len() * 2, self.limits.max_text_len)?;
        Ok(hex::encode(data))
    }

    fn decode(&self, text: &str) -> CodecResult<Vec<u8>> {
        ensure_fits(text.len(), self.limits.max_text_len)?;
        let raw = hex::decode(text).map_err(|e| CodecError::invalid("hex", e.to_string()))?;
        ensure_fits(raw.len(), self.limits.max_raw_len)?;
        Ok(raw)
    }
}
