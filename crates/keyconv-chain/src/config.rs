use keyconv_codec::CodecLimits;
use keyconv_types::Compression;
use serde::{Deserialize, Serialize};

use crate::error::{ConvertError, ConvertResult};

/// Configuration for a [`Converter`](crate::Converter).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    /// Bounds on decoded bytes and encoded text.
    pub limits: CodecLimits,
    /// Compression used for a private key that carries none and has no
    /// explicit override. `None` makes such a derivation fail.
    pub fallback_compression: Option<Compression>,
    /// Reject public-key input that is not a point on secp256k1.
    pub verify_public_key_points: bool,
    /// Strip surrounding whitespace from text-format input.
    pub trim_text_input: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            limits: CodecLimits::default(),
            fallback_compression: None,
            verify_public_key_points: true,
            trim_text_input: true,
        }
    }
}

impl ConvertConfig {
    /// Parse a TOML document. Missing fields take their defaults.
    pub fn from_toml_str(source: &str) -> ConvertResult<Self> {
        toml::from_str(source).map_err(|e| ConvertError::Config(e.to_string()))
    }

    /// Serialize back to TOML.
    pub fn to_toml_string(&self) -> ConvertResult<String> {
        toml::to_string(self).map_err(|e| ConvertError::Config(e.to_string()))
    }
}
