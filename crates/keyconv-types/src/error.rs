use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::kind::ArtifactKind;

/// Stable classification of every failure a conversion can produce.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ErrorKind {
    /// Malformed hex/Base58 text, bad prefix or version byte, bad WIF flag.
    InvalidFormat,
    /// Base58Check checksum does not match the payload.
    ChecksumMismatch,
    /// Decoded length does not match the declared input type.
    SizeMismatch,
    /// Scalar is zero or not below the curve order, or point is off-curve.
    InvalidKey,
    /// Requested output is not reachable from the input on the chain.
    ImpossibleConversion,
    /// An encode/decode result exceeds the configured buffer bound.
    BufferTooSmall,
    /// A public key or WIF is needed but no compression is known.
    UnspecifiedCompression,
    /// Configuration could not be read or parsed.
    Configuration,
}

impl ErrorKind {
    /// Kebab-case name, as printed by the CLI.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InvalidFormat => "invalid-format",
            Self::ChecksumMismatch => "checksum-mismatch",
            Self::SizeMismatch => "size-mismatch",
            Self::InvalidKey => "invalid-key",
            Self::ImpossibleConversion => "impossible-conversion",
            Self::BufferTooSmall => "buffer-too-small",
            Self::UnspecifiedCompression => "unspecified-compression",
            Self::Configuration => "configuration",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors produced while building typed artifacts from raw bytes or names.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error(
        "invalid size input for {kind}: expected {} bytes but got {actual} bytes{}",
        join_sizes(.kind.accepted_sizes()),
        hint_suffix(.hint)
    )]
    SizeMismatch {
        kind: ArtifactKind,
        actual: usize,
        hint: Option<String>,
    },

    #[error("invalid {kind} prefix byte 0x{prefix:02x}")]
    InvalidPrefix { kind: ArtifactKind, prefix: u8 },

    #[error("unsupported {kind} version byte 0x{actual:02x} (expected 0x{expected:02x})")]
    UnsupportedVersion {
        kind: ArtifactKind,
        expected: u8,
        actual: u8,
    },

    #[error("unknown {what} \"{value}\"")]
    Unknown { what: &'static str, value: String },
}

impl TypeError {
    /// Size mismatch for `kind`, with a hint naming any other kinds whose
    /// accepted lengths include `actual`.
    pub fn size_mismatch(kind: ArtifactKind, actual: usize) -> Self {
        let alternatives: Vec<&str> = ArtifactKind::ALL
            .iter()
            .filter(|other| **other != kind && other.accepts_size(actual))
            .map(|other| other.name())
            .collect();
        let hint = if alternatives.is_empty() {
            None
        } else {
            Some(format!("did you mean input type {}?", alternatives.join(" or ")))
        };
        Self::SizeMismatch { kind, actual, hint }
    }

    pub fn unknown(what: &'static str, value: impl Into<String>) -> Self {
        Self::Unknown {
            what,
            value: value.into(),
        }
    }

    /// Stable tag for this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SizeMismatch { .. } => ErrorKind::SizeMismatch,
            Self::InvalidPrefix { .. } | Self::UnsupportedVersion { .. } | Self::Unknown { .. } => {
                ErrorKind::InvalidFormat
            }
        }
    }

    /// The "did you mean" hint attached to a size mismatch, if any.
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::SizeMismatch { hint, .. } => hint.as_deref(),
            _ => None,
        }
    }
}

fn join_sizes(sizes: &[usize]) -> String {
    match sizes {
        [] => String::new(),
        [only] => only.to_string(),
        [init @ .., last] => {
            let head: Vec<String> = init.iter().map(|s| s.to_string()).collect();
            format!("{} or {last}", head.join(", "))
        }
    }
}

fn hint_suffix(hint: &Option<String>) -> String {
    match hint {
        Some(hint) => format!(" ({hint})"),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wif_length_as_private_key_hints_wif() {
        let err = TypeError::size_mismatch(ArtifactKind::PrivateKey, 37);
        assert_eq!(err.kind(), ErrorKind::SizeMismatch);
        assert_eq!(err.hint(), Some("did you mean input type private-key-wif?"));
        let msg = err.to_string();
        assert!(msg.contains("expected 32 bytes but got 37 bytes"));
        assert!(msg.contains("private-key-wif"));
    }

    #[test]
    fn unmatched_length_has_no_hint() {
        let err = TypeError::size_mismatch(ArtifactKind::Address, 7);
        assert_eq!(err.hint(), None);
        assert!(!err.to_string().contains("did you mean"));
    }

    #[test]
    fn ambiguous_length_lists_every_candidate() {
        let err = TypeError::size_mismatch(ArtifactKind::Address, 32);
        assert_eq!(err.hint(), Some("did you mean input type private-key or public-key-sha256?"));
    }

    #[test]
    fn expected_sizes_are_listed() {
        let err = TypeError::size_mismatch(ArtifactKind::PublicKey, 64);
        assert!(err.to_string().contains("expected 33 or 65 bytes"));
        let err = TypeError::size_mismatch(ArtifactKind::PrivateKeyWif, 32);
        assert!(err.to_string().contains("expected 33, 34, 37 or 38 bytes"));
    }

    #[test]
    fn error_kind_strings_are_stable() {
        assert_eq!(ErrorKind::ChecksumMismatch.to_string(), "checksum-mismatch");
        assert_eq!(ErrorKind::ImpossibleConversion.as_str(), "impossible-conversion");
    }
}
